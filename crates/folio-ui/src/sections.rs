//! Tracks which labelled section was most recently scrolled into view.
//!
//! The answer is process-wide: one tracker per page writes it, anything may
//! read it through [`active_section`]. Nothing in the page rendering reads it
//! yet; it is kept for navigation highlighting.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::{
    Dispose, IntersectionEntry, ObserveError, ObserveOptions, SharedObserver, View, ViewId,
    ViewKind, current_scope,
};
use parking_lot::RwLock;

pub const DEFAULT_SECTION: &str = "hero";
pub const SECTION_THRESHOLD: f32 = 0.3;

static ACTIVE_SECTION: RwLock<Option<String>> = parking_lot::const_rwlock(None);

/// Name of the active section, `"hero"` until some section reports in.
pub fn active_section() -> String {
    ACTIVE_SECTION
        .read()
        .clone()
        .unwrap_or_else(|| DEFAULT_SECTION.to_string())
}

pub fn reset_active_section() {
    *ACTIVE_SECTION.write() = None;
}

fn set_active_section(name: &str) {
    let mut active = ACTIVE_SECTION.write();
    if active.as_deref() != Some(name) {
        log::debug!("active section -> {name}");
        *active = Some(name.to_string());
    }
}

pub struct SectionTracker {
    sections: Rc<HashMap<ViewId, String>>,
    threshold: f32,
    subscription: Rc<RefCell<Option<Dispose>>>,
}

impl SectionTracker {
    pub fn new(sections: impl IntoIterator<Item = (ViewId, String)>) -> Self {
        Self {
            sections: Rc::new(sections.into_iter().collect()),
            threshold: SECTION_THRESHOLD,
            subscription: Rc::new(RefCell::new(None)),
        }
    }

    /// Collects every `Section` view under `root`.
    pub fn from_view(root: &View) -> Self {
        let mut found = Vec::new();
        root.walk(&mut |v| {
            if let ViewKind::Section { name } = &v.kind {
                found.push((v.id, name.clone()));
            }
        });
        Self::new(found)
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Subscribe to every section. Without an observer the tracker stays
    /// idle and the active section keeps its default.
    pub fn mount(&self, observer: Option<&SharedObserver>) -> Result<(), ObserveError> {
        let Some(observer) = observer else {
            log::debug!("section tracker: no visibility observer");
            return Ok(());
        };
        if self.is_observing() {
            log::warn!("section tracker already mounted");
            return Ok(());
        }

        // Document order, so batches list sections top to bottom.
        let mut targets: Vec<ViewId> = self.sections.keys().copied().collect();
        targets.sort_unstable();
        let sections = self.sections.clone();
        let callback = Rc::new(move |entries: &[IntersectionEntry]| {
            // The last intersecting entry in a batch wins.
            for e in entries.iter().filter(|e| e.is_intersecting) {
                if let Some(name) = sections.get(&e.target) {
                    set_active_section(name);
                }
            }
        });

        let d = observer.observe(&targets, ObserveOptions::threshold(self.threshold), callback)?;
        *self.subscription.borrow_mut() = Some(d);

        if let Some(scope) = current_scope() {
            let sub = self.subscription.clone();
            scope.add_disposer(move || {
                if let Some(d) = sub.borrow_mut().take() {
                    d.run();
                }
            });
        }
        Ok(())
    }

    pub fn unmount(&self) {
        let sub = self.subscription.borrow_mut().take();
        if let Some(d) = sub {
            d.run();
        }
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.unmount();
    }
}
