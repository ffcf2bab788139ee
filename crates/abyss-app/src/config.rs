//! Application configuration, read from an optional JSON file.
//!
//! Every field has a default, so a partial file (or none) is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use abyss_core::constants::MAX_TIME_SCALE;
use abyss_core::types::Viewport;
use abyss_sim::SimConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub viewport: Viewport,
    /// Where progress is saved.
    pub save_path: PathBuf,
    /// Mixed with the date to roll daily missions.
    pub mission_seed: u64,
    pub time_scale: f64,
    pub facts: FactsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// Use the bundled catalog provider. Disabled means offline text.
    pub enabled: bool,
    pub timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            save_path: PathBuf::from("abyss-save.json"),
            mission_seed: 0xAB155,
            time_scale: 1.0,
            facts: FactsConfig::default(),
        }
    }
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 10_000,
        }
    }
}

impl FactsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 || self.time_scale > MAX_TIME_SCALE {
            bail!("time_scale must be in (0, {MAX_TIME_SCALE}], got {}", self.time_scale);
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            bail!(
                "viewport must have a positive size, got {}x{}",
                self.viewport.width,
                self.viewport.height
            );
        }
        Ok(())
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            viewport: self.viewport,
            time_scale: self.time_scale,
        }
    }
}
