//! Pipeline configuration module.
//!
//! Handles loading and validating `imageset.toml`. The file is the single
//! source of truth for the breakpoint widths and encoding quality: the batch
//! converter sizes its output files from it, and the markup/lazy-load side
//! synthesizes `srcset` candidates from the same values. Keeping both in one
//! place is what guarantees generated files and generated markup agree.
//!
//! ## Config File
//!
//! The file is optional; stock defaults apply when it is absent. When
//! present, it is sparse — override just the values you want:
//!
//! ```toml
//! # Config format version (required to match the build's version).
//! version = 1
//!
//! [images]
//! widths = [300, 600, 900, 1200]  # Breakpoint widths, positive and ascending
//! quality = 80                    # WebP/JPEG encoding quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config format version this build reads. Bumped only when the file format
/// changes shape; mismatched files are rejected rather than half-read.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config version {0} (this build reads version {expected})", expected = CONFIG_VERSION)]
    Version(u32),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration loaded from `imageset.toml`.
///
/// All fields have stock defaults (four breakpoints, quality 80). Unknown
/// keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Config format version; must equal [`CONFIG_VERSION`].
    pub version: u32,
    /// Breakpoint widths and encoding quality, shared by the converter and
    /// the markup generator.
    pub images: ImagesConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            images: ImagesConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Version(self.version));
        }
        if self.images.widths.is_empty() {
            return Err(ConfigError::Validation(
                "images.widths must not be empty".into(),
            ));
        }
        if !self.images.widths.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::Validation(
                "images.widths must be strictly ascending".into(),
            ));
        }
        // With strict ascent, a zero width can only be the first element.
        if self.images.widths.first().is_some_and(|&w| w == 0) {
            return Err(ConfigError::Validation(
                "images.widths must be positive".into(),
            ));
        }
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        Ok(())
    }
}

/// Breakpoint and encoding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Pixel widths to generate, positive and ascending. Each source image
    /// produces one WebP and one JPEG file per width.
    pub widths: Vec<u32>,
    /// Encoding quality for both WebP and JPEG (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            widths: vec![300, 600, 900, 1200],
            quality: 80,
        }
    }
}

/// Load config from the given file path.
///
/// A missing file yields the stock defaults; a present file is parsed with
/// serde defaults filling unspecified values, then validated.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if !path.exists() {
        return Ok(PipelineConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: PipelineConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `imageset.toml` with all keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# imageset configuration
# ======================
# This file is the shared contract between the batch converter and the
# markup/lazy-load tooling: both read the same breakpoint widths, so the
# files written to disk and the srcset attributes advertised in markup
# never diverge.
#
# All settings are optional; values shown below are the defaults.
# Unknown keys will cause an error.

# Config format version. Must match the version this build reads.
version = 1

[images]
# Breakpoint widths (pixels), minimum 1, strictly ascending. Each source
# image produces one WebP and one JPEG file per width, named
# {basename}-{width}.webp / {basename}-{width}.jpg.
widths = [300, 600, 900, 1200]

# Encoding quality applied to every WebP and JPEG encode (1-100).
quality = 80
"#
}
