//! Browser host (wasm32): `IntersectionObserver` behind [`VisibilityObserver`]
//! and inline-style patching for reveal wrappers rendered by
//! [`crate::html::HtmlRenderer`].

use std::rc::Rc;

use folio_core::{
    Dispose, IntersectionCallback, IntersectionEntry, ObserveError, ObserveOptions,
    SharedObserver, ViewId, VisibilityObserver,
};
use folio_ui::{Reveal, RevealConfig, RevealPresentation, SectionTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::attach::attach_reveals;
use crate::html::ID_ATTR;

/// Panic hook and `log` to the browser console. Safe to call twice.
pub fn init_logging(level: log::Level) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(level);
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn element_for(doc: &Document, id: ViewId) -> Option<Element> {
    doc.query_selector(&format!("[{ID_ATTR}=\"{id}\"]"))
        .ok()
        .flatten()
}

fn js_err(e: JsValue) -> ObserveError {
    ObserveError::Host(format!("{e:?}"))
}

pub struct DomObserver {
    document: Document,
}

impl DomObserver {
    /// `None` when the page has no DOM or the browser lacks
    /// `IntersectionObserver`; callers then fall back to showing everything.
    pub fn detect() -> Option<SharedObserver> {
        let window = web_sys::window()?;
        let supported =
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            log::warn!("IntersectionObserver missing; content will be shown without reveal");
            return None;
        }
        let document = window.document()?;
        Some(Rc::new(DomObserver { document }))
    }
}

impl VisibilityObserver for DomObserver {
    fn observe(
        &self,
        targets: &[ViewId],
        options: ObserveOptions,
        callback: IntersectionCallback,
    ) -> Result<Dispose, ObserveError> {
        options.validate()?;
        let elements = targets
            .iter()
            .map(|id| element_for(&self.document, *id).ok_or(ObserveError::UnknownTarget(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        let threshold = options.threshold;
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let time = folio_core::animation::now();
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|e| {
                        let target = e.target().get_attribute(ID_ATTR)?.parse().ok()?;
                        let ratio = e.intersection_ratio() as f32;
                        Some(IntersectionEntry {
                            target,
                            ratio,
                            is_intersecting: if threshold > 0.0 {
                                ratio >= threshold
                            } else {
                                e.is_intersecting()
                            },
                            time,
                        })
                    })
                    .collect();
                if !batch.is_empty() {
                    callback(&batch);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold as f64));
        let io = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
        for el in &elements {
            io.observe(el);
        }
        log::debug!("observing {} element(s) at threshold {threshold}", elements.len());

        Ok(Dispose::new(move || {
            io.disconnect();
            // The JS side holds no other reference once disconnected.
            drop(closure);
        }))
    }
}

/// Keep the wrapper element's inline style in step with `reveal`. The CSS
/// transition already on the element interpolates between the two states.
pub fn bind_reveal_style(reveal: &Reveal) -> Result<(), ObserveError> {
    let doc = document().ok_or(ObserveError::Unavailable)?;
    let el: HtmlElement = element_for(&doc, reveal.id())
        .ok_or(ObserveError::UnknownTarget(reveal.id()))?
        .dyn_into()
        .map_err(|_| ObserveError::Host("reveal wrapper is not an HTML element".into()))?;

    let id = reveal.id();
    let offset = reveal.config().hidden_offset;
    let apply = move |el: &HtmlElement, visible: bool| {
        let p = RevealPresentation::for_flag(visible, offset);
        set_style(el, id, "opacity", &p.opacity.to_string());
        set_style(el, id, "transform", &format!("translateY({}px)", p.offset_y));
    };
    apply(&el, reveal.is_visible());
    reveal.on_change(move |visible| apply(&el, visible));
    Ok(())
}

fn set_style(el: &HtmlElement, id: ViewId, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("reveal {id}: failed to set {property}: {e:?}");
    }
}

// Last resort for a wrapper that could not be bound: drop the inline
// hidden style so its content is readable.
fn force_visible(el: &Element, id: ViewId) {
    match el.dyn_ref::<HtmlElement>() {
        Some(el) => {
            let shown = RevealPresentation::shown();
            set_style(el, id, "opacity", &shown.opacity.to_string());
            set_style(el, id, "transform", "none");
        }
        None => log::warn!("reveal {id}: wrapper is not an HTML element; left as rendered"),
    }
}

/// Text of the element with `id`, as written by [`crate::html::json_script`].
pub fn json_script_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// Reveals and the section tracker attached to an exported page.
pub struct Hydrated {
    pub reveals: Vec<Reveal>,
    pub tracker: SectionTracker,
}

fn ids_matching(doc: &Document, selector: &str) -> Vec<(ViewId, Element)> {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .filter_map(|el| Some((el.get_attribute(ID_ATTR)?.parse().ok()?, el)))
        .collect()
}

/// Attach live reveals to every `[data-reveal]` wrapper in the document and
/// a section tracker to every `section`. Delays are already part of each
/// wrapper's inline transition, so `base` only supplies the threshold,
/// offset and `once` flag. A wrapper that cannot be bound is forced visible.
pub fn hydrate(base: &RevealConfig, section_threshold: f32) -> Result<Hydrated, ObserveError> {
    let doc = document().ok_or(ObserveError::Unavailable)?;
    let observer = DomObserver::detect();

    let reveals = attach_reveals(
        ids_matching(&doc, "[data-reveal]"),
        base,
        observer.as_ref(),
        |r, _| bind_reveal_style(r),
        force_visible,
    );

    let sections = ids_matching(&doc, "section[id]")
        .into_iter()
        .filter_map(|(id, el)| Some((id, el.get_attribute("id")?)));
    let tracker = SectionTracker::new(sections).with_threshold(section_threshold);
    if let Err(e) = tracker.mount(observer.as_ref()) {
        log::warn!("section tracking disabled: {e}");
    }

    log::info!("hydrated {} reveal wrappers", reveals.len());
    Ok(Hydrated { reveals, tracker })
}
