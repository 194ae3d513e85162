use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use folio_core::RenderBackend;
use folio_ui::{LayoutMetrics, active_section, layout, reset_active_section};
use folio_web::{HtmlOptions, HtmlRenderer, ViewportHost, json_script};

use crate::config::{HYDRATION_CONFIG_ID, SiteConfig};
use crate::page::Page;
use crate::theme::{FAVICON, FONTS_HREF, Theme};

// Without scripting nothing would ever reveal the hidden wrappers.
const NOSCRIPT_FALLBACK: &str =
    "<noscript><style>[data-reveal]{opacity:1!important;transform:none!important}</style></noscript>";

impl Page {
    /// Copy every reveal's current target style onto its wrapper view.
    pub fn sync_styles(&mut self) {
        for r in &self.reveals {
            if let Some(v) = self.root.find_mut(r.id()) {
                v.modifier = r.style_modifier();
            }
        }
    }
}

/// Render `page` as a standalone document.
///
/// With a hydration script configured the wrappers ship hidden, the reveal
/// and section settings are embedded for the script, and the script reveals
/// them. Without one, reveals are mounted with no observer so they fail
/// open and the page is readable as plain HTML.
pub fn export_html(page: &mut Page, cfg: &SiteConfig, theme: &Theme) -> anyhow::Result<String> {
    let mut head = format!(
        "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n\
         <link rel=\"stylesheet\" href=\"{FONTS_HREF}\">\n\
         <link rel=\"icon\" href=\"{FAVICON}\">"
    );
    if cfg.script.is_some() {
        let settings = cfg.hydration().to_json().context("encoding hydration settings")?;
        head.push('\n');
        head.push_str(&json_script(HYDRATION_CONFIG_ID, &settings));
        head.push('\n');
        head.push_str(NOSCRIPT_FALLBACK);
    } else {
        page.mount(None);
        page.sync_styles();
    }

    let mut renderer = HtmlRenderer::new(HtmlOptions {
        title: cfg.content.title.clone(),
        description: Some(cfg.content.hero.tagline.clone()),
        head,
        stylesheet: theme.stylesheet(),
        script: cfg.script.clone(),
        ..Default::default()
    });
    Ok(renderer.render(&page.root)?)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollStep {
    pub scroll_y: f32,
    pub visible: usize,
    pub active_section: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationReport {
    pub content_height: f32,
    pub steps: Vec<ScrollStep>,
    /// Reveal flag flips across the whole run.
    pub transitions: usize,
}

/// Offsets `0, step, 2*step, ..` up to and including `max_scroll`.
pub(crate) fn scroll_offsets(max_scroll: f32, step: f32) -> Vec<f32> {
    let max_scroll = max_scroll.max(0.0);
    let steps = (max_scroll / step).ceil() as usize;
    let mut offsets: Vec<f32> = (0..steps).map(|i| i as f32 * step).collect();
    offsets.push(max_scroll);
    offsets
}

/// Scroll through `page` top to bottom and back in an in-process viewport,
/// recording which reveals are showing at every step.
pub fn simulate(page: &Page, cfg: &SiteConfig) -> anyhow::Result<SimulationReport> {
    cfg.validate()?;
    let vp = &cfg.viewport;
    let host = ViewportHost::new(vp.width, vp.height);
    let laid_out = layout(&page.root, vp.width, LayoutMetrics::default());
    host.set_layout(&laid_out);
    log::info!(
        "simulating {}x{} viewport over {:.0}px of content",
        vp.width,
        vp.height,
        laid_out.content_height
    );

    reset_active_section();
    let transitions = Rc::new(Cell::new(0usize));
    for r in &page.reveals {
        let id = r.id();
        let transitions = transitions.clone();
        let last = Cell::new(r.is_visible());
        // Listeners hear every report; count only the flips.
        r.on_change(move |visible| {
            if last.replace(visible) != visible {
                transitions.set(transitions.get() + 1);
                log::info!("reveal {id} -> {}", if visible { "shown" } else { "hidden" });
            }
        });
    }

    let observer = host.as_observer();
    page.mount(Some(&observer));
    let tracker = page.section_tracker(cfg.section_threshold);
    tracker.mount(Some(&observer))?;

    let mut offsets = scroll_offsets(laid_out.content_height - vp.height, cfg.scroll_step);
    let back: Vec<f32> = offsets.iter().rev().skip(1).copied().collect();
    offsets.extend(back);

    let mut report = SimulationReport {
        content_height: laid_out.content_height,
        ..Default::default()
    };
    for y in offsets {
        host.scroll_to(y);
        host.flush();
        report.steps.push(ScrollStep {
            scroll_y: y,
            visible: page.visible_count(),
            active_section: active_section(),
        });
    }

    tracker.unmount();
    for r in &page.reveals {
        r.unmount();
    }
    report.transitions = transitions.get();
    Ok(report)
}
