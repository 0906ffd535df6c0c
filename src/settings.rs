//! Headless driver settings
//!
//! Loaded from a JSON file. Physics is not configurable here; these only
//! shape how the driver runs and prints the simulation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "SPIN_HEX_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// Number of frames to run
    pub frames: u32,
    /// Wall-clock seconds per frame fed to the stepper
    pub frame_dt: f64,
    /// Cap on simulation steps per frame
    pub max_substeps: u32,
    /// Print every Nth frame's snapshot
    pub print_every: u32,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
            print_every: 1,
            pretty: false,
        }
    }
}

impl DriverSettings {
    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<DriverSettings>(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from `path`; a missing or unreadable file yields defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Whether `frame` (0-based) should be printed
    pub fn should_print(&self, frame: u32) -> bool {
        frame % self.print_every.max(1) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = DriverSettings::from_json(r#"{ "frames": 10, "pretty": true }"#);
        assert_eq!(settings.frames, 10);
        assert!(settings.pretty);
        assert_eq!(settings.frame_dt, SIM_DT);
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(DriverSettings::from_json("frames = 3"), DriverSettings::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = DriverSettings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, DriverSettings::default());
    }

    #[test]
    fn test_print_every_zero_prints_all() {
        let settings = DriverSettings {
            print_every: 0,
            ..Default::default()
        };
        assert!(settings.should_print(0));
        assert!(settings.should_print(7));

        let settings = DriverSettings {
            print_every: 3,
            ..Default::default()
        };
        assert!(settings.should_print(3));
        assert!(!settings.should_print(4));
    }
}
