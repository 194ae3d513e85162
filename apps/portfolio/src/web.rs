use std::cell::RefCell;

use folio_web::dom::{Hydrated, hydrate, init_logging, json_script_text};
use wasm_bindgen::prelude::*;

use crate::config::{HYDRATION_CONFIG_ID, HydrationConfig};

thread_local! {
    // Lives as long as the page.
    static PAGE: RefCell<Option<Hydrated>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging(log::Level::Info);

    let cfg = match json_script_text(HYDRATION_CONFIG_ID) {
        Some(src) => HydrationConfig::from_json(&src).unwrap_or_else(|e| {
            log::warn!("ignoring malformed #{HYDRATION_CONFIG_ID}: {e}");
            HydrationConfig::default()
        }),
        None => {
            log::info!("no #{HYDRATION_CONFIG_ID} block; using default reveal settings");
            HydrationConfig::default()
        }
    };
    let hydrated =
        hydrate(&cfg.reveal, cfg.section_threshold).map_err(|e| JsValue::from_str(&e.to_string()))?;
    PAGE.with(|p| *p.borrow_mut() = Some(hydrated));
    Ok(())
}

/// Name of the section currently in view.
#[wasm_bindgen]
pub fn active_section() -> String {
    folio_ui::active_section()
}
