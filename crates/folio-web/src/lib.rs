//! Hosts for folio pages.
//!
//! - [`viewport::ViewportHost`]: an in-process viewport that reports
//!   intersections from layout rectangles. Used by the native simulator and
//!   by tests.
//! - [`html::HtmlRenderer`]: renders a view tree to a static document.
//! - [`attach::attach_reveals`]: mounts reveals onto already rendered
//!   wrappers, leaving any it cannot bind visible.
//! - `dom` (wasm32 only): the browser's `IntersectionObserver`, plus style
//!   patching for reveal wrappers on an exported page.

pub mod attach;
pub mod html;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod dom;

mod tests;

pub use attach::attach_reveals;
pub use html::{HtmlOptions, HtmlRenderer, json_script};
pub use viewport::ViewportHost;
