//! In-process visibility host.
//!
//! `ViewportHost` plays the browser's part for native runs and tests: it
//! knows every laid-out view's rectangle and a scrollable viewport, and on
//! [`ViewportHost::flush`] it reports threshold crossings to subscribers.
//! Reports are queued rather than sent from inside `observe` or `scroll_to`,
//! the same way a browser batches intersection callbacks to the next task.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::animation::now;
use folio_core::{
    Dispose, IntersectionCallback, IntersectionEntry, ObserveError, ObserveOptions, Rect,
    SharedObserver, ViewId, VisibilityObserver,
};
use folio_ui::Layout;
use slotmap::{DefaultKey, SlotMap};
use smallvec::SmallVec;

struct Observation {
    targets: SmallVec<[ViewId; 1]>,
    threshold: f32,
    callback: IntersectionCallback,
    /// Last reported state per target; `None` until the initial report.
    reported: SmallVec<[Option<bool>; 1]>,
}

struct HostState {
    viewport: Rect,
    bounds: HashMap<ViewId, Rect>,
    observations: SlotMap<DefaultKey, Observation>,
}

type Batch = SmallVec<[IntersectionEntry; 4]>;

#[derive(Clone)]
pub struct ViewportHost {
    state: Rc<RefCell<HostState>>,
}

impl ViewportHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                viewport: Rect::new(0.0, 0.0, width, height),
                bounds: HashMap::new(),
                observations: SlotMap::new(),
            })),
        }
    }

    pub fn as_observer(&self) -> SharedObserver {
        Rc::new(self.clone())
    }

    /// Replace all known rectangles with those of `layout`.
    pub fn set_layout(&self, layout: &Layout) {
        let mut st = self.state.borrow_mut();
        st.bounds = layout.iter().collect();
    }

    pub fn set_bounds(&self, id: ViewId, rect: Rect) {
        self.state.borrow_mut().bounds.insert(id, rect);
    }

    pub fn viewport(&self) -> Rect {
        self.state.borrow().viewport
    }

    pub fn scroll_to(&self, y: f32) {
        self.state.borrow_mut().viewport.y = y.max(0.0);
    }

    pub fn scroll_by(&self, dy: f32) {
        let y = self.viewport().y + dy;
        self.scroll_to(y);
    }

    pub fn resize(&self, width: f32, height: f32) {
        let mut st = self.state.borrow_mut();
        st.viewport.w = width;
        st.viewport.h = height;
    }

    pub fn subscription_count(&self) -> usize {
        self.state.borrow().observations.len()
    }

    pub fn ratio_of(&self, id: ViewId) -> Option<f32> {
        let st = self.state.borrow();
        st.bounds
            .get(&id)
            .map(|r| r.intersection_ratio(&st.viewport))
    }

    /// Deliver pending reports: the initial state of new subscriptions and
    /// every threshold crossing since the last flush. Returns the number of
    /// entries delivered.
    pub fn flush(&self) -> usize {
        let time = now();
        let calls: Vec<(DefaultKey, IntersectionCallback, Batch)> = {
            let mut st = self.state.borrow_mut();
            let HostState {
                viewport,
                bounds,
                observations,
            } = &mut *st;

            observations
                .iter_mut()
                .filter_map(|(key, obs)| {
                    let mut batch = Batch::new();
                    for (i, target) in obs.targets.iter().enumerate() {
                        let Some(rect) = bounds.get(target) else {
                            continue;
                        };
                        let ratio = rect.intersection_ratio(viewport);
                        let is_intersecting = if obs.threshold > 0.0 {
                            ratio >= obs.threshold
                        } else {
                            rect.intersect(viewport).is_some()
                        };
                        if obs.reported[i] != Some(is_intersecting) {
                            obs.reported[i] = Some(is_intersecting);
                            batch.push(IntersectionEntry {
                                target: *target,
                                ratio,
                                is_intersecting,
                                time,
                            });
                        }
                    }
                    (!batch.is_empty()).then(|| (key, obs.callback.clone(), batch))
                })
                .collect()
        };

        let mut delivered = 0;
        for (key, callback, batch) in calls {
            // An earlier callback may have disconnected this subscription.
            if !self.state.borrow().observations.contains_key(key) {
                continue;
            }
            delivered += batch.len();
            callback(&batch);
        }
        if delivered > 0 {
            log::trace!("viewport host delivered {delivered} entries");
        }
        delivered
    }
}

impl VisibilityObserver for ViewportHost {
    fn observe(
        &self,
        targets: &[ViewId],
        options: ObserveOptions,
        callback: IntersectionCallback,
    ) -> Result<Dispose, ObserveError> {
        options.validate()?;
        let mut st = self.state.borrow_mut();
        if let Some(missing) = targets.iter().find(|t| !st.bounds.contains_key(t)) {
            return Err(ObserveError::UnknownTarget(*missing));
        }

        let key = st.observations.insert(Observation {
            targets: targets.iter().copied().collect(),
            threshold: options.threshold,
            callback,
            reported: SmallVec::from_elem(None, targets.len()),
        });

        let weak: Weak<RefCell<HostState>> = Rc::downgrade(&self.state);
        Ok(Dispose::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().observations.remove(key);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Scheduler;
    use folio_ui::{Reveal, RevealConfig, RevealPhase};

    fn host_with_block(id: ViewId, y: f32, h: f32) -> ViewportHost {
        let host = ViewportHost::new(1000.0, 800.0);
        host.set_bounds(id, Rect::new(0.0, y, 1000.0, h));
        host
    }

    #[test]
    fn delivery_waits_for_flush() {
        let host = host_with_block(1, 100.0, 200.0);
        let r = Reveal::with_id(1, RevealConfig::default());
        r.mount(Some(&host.as_observer()));

        assert!(!r.is_visible());
        assert_eq!(host.flush(), 1);
        assert!(r.is_visible());
        // Nothing changed, nothing to report.
        assert_eq!(host.flush(), 0);
    }

    #[test]
    fn initial_report_for_offscreen_block_is_false() {
        let host = host_with_block(1, 2000.0, 200.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let cb: IntersectionCallback = {
            let seen = seen.clone();
            Rc::new(move |es: &[IntersectionEntry]| {
                seen.borrow_mut().extend(es.iter().map(|e| e.is_intersecting))
            })
        };
        let _d = host
            .observe(&[1], ObserveOptions::threshold(0.12), cb)
            .unwrap();
        host.flush();
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn crossing_threshold_both_ways() {
        // 200px block whose top sits at y=800, just below the fold.
        let host = host_with_block(1, 800.0, 200.0);
        let r = Reveal::with_id(1, RevealConfig::default());
        r.mount(Some(&host.as_observer()));
        host.flush();
        assert!(!r.is_visible());

        host.scroll_to(20.0); // 10% in view
        host.flush();
        assert!(!r.is_visible());

        host.scroll_to(30.0); // 15% in view
        host.flush();
        assert!(r.is_visible());

        host.scroll_to(1200.0); // scrolled past
        host.flush();
        assert!(!r.is_visible());

        host.scroll_to(0.0);
        host.scroll_by(500.0);
        host.flush();
        assert!(r.is_visible());
    }

    #[test]
    fn unknown_target_is_refused_and_reveal_fails_open() {
        let host = ViewportHost::new(800.0, 600.0);
        let mut sched = Scheduler::new();
        let r = Reveal::new(&mut sched, RevealConfig::default());
        r.mount(Some(&host.as_observer()));
        assert_eq!(r.phase(), RevealPhase::FailOpen);
        assert!(r.is_visible());
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn dispose_removes_subscription_before_next_flush() {
        let host = host_with_block(1, 0.0, 100.0);
        let r = Reveal::with_id(1, RevealConfig::default());
        r.mount(Some(&host.as_observer()));
        assert_eq!(host.subscription_count(), 1);

        r.unmount();
        assert_eq!(host.subscription_count(), 0);
        assert_eq!(host.flush(), 0);
        assert!(!r.is_visible());
    }

    #[test]
    fn once_reveal_disconnects_during_delivery() {
        let host = host_with_block(1, 0.0, 100.0);
        let r = Reveal::with_id(1, RevealConfig::default().once(true));
        r.mount(Some(&host.as_observer()));
        host.flush();
        assert!(r.is_visible());
        assert_eq!(host.subscription_count(), 0);

        host.scroll_to(5000.0);
        assert_eq!(host.flush(), 0);
        assert!(r.is_visible());
    }

    #[test]
    fn batch_carries_every_changed_target() {
        let host = ViewportHost::new(1000.0, 800.0);
        host.set_bounds(1, Rect::new(0.0, 0.0, 1000.0, 300.0));
        host.set_bounds(2, Rect::new(0.0, 300.0, 1000.0, 300.0));
        host.set_bounds(3, Rect::new(0.0, 5000.0, 1000.0, 300.0));
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let cb: IntersectionCallback = {
            let sizes = sizes.clone();
            Rc::new(move |es: &[IntersectionEntry]| sizes.borrow_mut().push(es.len()))
        };
        let _d = host
            .observe(&[1, 2, 3], ObserveOptions::threshold(0.3), cb)
            .unwrap();
        host.flush();
        host.scroll_to(4900.0);
        host.flush();
        assert_eq!(*sizes.borrow(), vec![3, 3]);
    }
}
