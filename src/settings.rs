//! Runtime settings
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = derive from the clock)
    pub seed: Option<u64>,
    /// Frame cadence for the loop
    pub target_fps: u32,
    /// Per-tick delta cap in seconds (never above 0.1)
    pub max_frame_dt: f32,
    /// Seconds between HUD log lines in headless mode (0 = never)
    pub hud_log_interval: f32,
    /// Pace frames against the wall clock instead of stepping as fast as possible
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            hud_log_interval: 1.0,
            realtime: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        self.target_fps = self.target_fps.clamp(1, 1000);
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            self.max_frame_dt = MAX_FRAME_DT;
        }
        self.max_frame_dt = self.max_frame_dt.min(MAX_FRAME_DT);
        if !self.hud_log_interval.is_finite() || self.hud_log_interval < 0.0 {
            self.hud_log_interval = 0.0;
        }
        self
    }

    /// Fixed step for one frame at the target cadence
    pub fn frame_dt(&self) -> f32 {
        (1.0 / self.target_fps.max(1) as f32).min(self.max_frame_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.max_frame_dt, 0.1);
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "realtime": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.realtime);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_frame_cap_never_loosened() {
        let settings = Settings::from_json(r#"{ "max_frame_dt": 0.5, "target_fps": 0 }"#).unwrap();
        assert_eq!(settings.max_frame_dt, 0.1);
        assert_eq!(settings.target_fps, 1);
        assert_eq!(settings.frame_dt(), 0.1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(3),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
