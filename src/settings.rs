//! User-tunable settings
//!
//! Loaded from `settings.json` in the working directory; both binaries read
//! the same file. Missing file or unknown fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the `wander` and `range` binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of wandering agents
    pub agent_count: usize,
    /// Enemies roaming the target range
    pub enemy_count: usize,
    /// Static targets in the range
    pub target_count: usize,
    /// Round length in seconds
    pub time_limit_secs: f32,
    /// Draw heading indicator lines on wandering agents
    pub show_headings: bool,
    /// Fixed RNG seed; omit for a clock-derived seed per run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agent_count: 10,
            enemy_count: 5,
            target_count: 5,
            time_limit_secs: 60.0,
            show_headings: true,
            seed: None,
        }
    }
}

impl Settings {
    const FILE: &'static str = "settings.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        if !Path::new(Self::FILE).exists() {
            log::info!("no {} found, writing defaults", Self::FILE);
            let settings = Self::default();
            settings.save();
            return settings;
        }

        match fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e}, using defaults", Self::FILE);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}, using defaults", Self::FILE);
                Self::default()
            }
        }
    }

    /// Write settings back to disk
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(Self::FILE, json) {
                    log::warn!("failed to write {}: {e}", Self::FILE);
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}
