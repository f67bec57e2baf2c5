//! Sample app configuration.
//!
//! Everything has a default; a JSON file can override any subset of fields.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Runtime configuration of the sample app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Emulate a round panel (clip to the inscribed circle).
    pub round_mask: bool,
    /// Sync cycle ramp duration in milliseconds.
    pub ramp_ms: u64,
    /// Sync cycle hold duration in milliseconds.
    pub hold_ms: u64,
    /// Frames rendered per second while the sync screen runs.
    pub fps: u32,
    /// How many full sync cycles to run.
    pub cycles: u32,
    /// Directory PNG frames are written to.
    pub output_dir: PathBuf,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            round_mask: true,
            ramp_ms: 3000,
            hold_ms: 1000,
            fps: 25,
            cycles: 1,
            output_dir: PathBuf::from("frames"),
        }
    }
}

impl SampleConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
