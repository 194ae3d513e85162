//! A single-page portfolio whose blocks fade and slide into place as they
//! scroll into view.
//!
//! The same page builds three ways: exported as static HTML (`portfolio`
//! binary), simulated against an in-process viewport (`--simulate`), or
//! hydrated in the browser by the wasm build of this crate.

pub mod config;
pub mod content;
pub mod export;
pub mod page;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod web;


pub use config::{ConfigError, HydrationConfig, SiteConfig};
pub use export::{SimulationReport, export_html, simulate};
pub use page::{Page, build_page};
pub use theme::Theme;
