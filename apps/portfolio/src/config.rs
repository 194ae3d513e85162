use std::path::{Path, PathBuf};

use folio_ui::RevealConfig;
use folio_ui::sections::SECTION_THRESHOLD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Content;

/// Longest base reveal delay a config may ask for.
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;
/// Smaller steps stop advancing once `f32` offsets reach page heights.
pub const MIN_SCROLL_STEP: f32 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Invalid(String),
}

/// Element id of the settings block embedded in hydrated exports.
pub const HYDRATION_CONFIG_ID: &str = "folio-config";

/// The part of [`SiteConfig`] the browser needs to observe the exported
/// page the way `--simulate` does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationConfig {
    pub reveal: RevealConfig,
    pub section_threshold: f32,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            section_threshold: SECTION_THRESHOLD,
        }
    }
}

impl HydrationConfig {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Everything the exporter and the simulator can be told from a JSON file.
/// Missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub viewport: Viewport,
    /// Base settings for every reveal; per-block delays are added on top.
    pub reveal: RevealConfig,
    pub section_threshold: f32,
    /// Pixels per step of `--simulate`.
    pub scroll_step: f32,
    /// Script that hydrates the exported page; without one the export is
    /// fully visible.
    pub script: Option<String>,
    pub content: Content,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            reveal: RevealConfig::default(),
            section_threshold: SECTION_THRESHOLD,
            scroll_step: 200.0,
            script: None,
            content: Content::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(src: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(src).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn hydration(&self) -> HydrationConfig {
        HydrationConfig {
            reveal: self.reveal.clone(),
            section_threshold: self.section_threshold,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&src, path)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let vp = &self.viewport;
        if !(vp.width > 0.0 && vp.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                vp.width, vp.height
            )));
        }
        if !(0.0..=1.0).contains(&self.section_threshold) {
            return Err(ConfigError::Invalid(format!(
                "section_threshold {} is outside [0, 1]",
                self.section_threshold
            )));
        }
        if !(self.scroll_step >= MIN_SCROLL_STEP) {
            return Err(ConfigError::Invalid(format!(
                "scroll_step must be at least {MIN_SCROLL_STEP}px, got {}",
                self.scroll_step
            )));
        }
        if self.reveal.delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "reveal.delay_ms {} exceeds {MAX_REVEAL_DELAY_MS}",
                self.reveal.delay_ms
            )));
        }
        // Reveal thresholds are clamped rather than rejected.
        Ok(())
    }
}
