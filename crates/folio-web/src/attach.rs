//! Attaching live reveals to wrappers that already exist in a rendered
//! document. Host-agnostic: the browser passes DOM elements, tests pass
//! whatever stands in for them.

use folio_core::{ObserveError, SharedObserver, ViewId};
use folio_ui::{Reveal, RevealConfig};

/// Create a reveal for each `(id, wrapper)` pair, bind its presentation with
/// `bind`, then mount it against `observer`.
///
/// A wrapper whose binding fails is handed to `fallback` so the host can
/// make its content readable, and the rest are still attached.
pub fn attach_reveals<T>(
    wrappers: impl IntoIterator<Item = (ViewId, T)>,
    base: &RevealConfig,
    observer: Option<&SharedObserver>,
    mut bind: impl FnMut(&Reveal, &T) -> Result<(), ObserveError>,
    mut fallback: impl FnMut(&T, ViewId),
) -> Vec<Reveal> {
    let mut reveals = Vec::new();
    for (id, wrapper) in wrappers {
        let r = Reveal::with_id(id, base.clone());
        // Bound before mounting so a synchronous first report reaches the style.
        if let Err(e) = bind(&r, &wrapper) {
            log::warn!("reveal {id}: {e}; showing without observing");
            fallback(&wrapper, id);
            continue;
        }
        r.mount(observer);
        reveals.push(r);
    }
    reveals
}
