//! Game settings and preferences
//!
//! Stored as JSON next to the binary; every field has a default so partial
//! files load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_TRAIL_LENGTH;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Trail length multiplier (1.0 = full). Only Low shortens the trail.
    pub fn trail_quality(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.5,
            QualityPreset::Medium | QualityPreset::High => 1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Slice burst particles (slices still score without them)
    pub particles: bool,
    /// Draw the pointer trail
    pub trails: bool,
    /// Flip the camera's horizontal axis so the pointer follows the player's mirror image
    pub mirror_pointer: bool,
    /// Fixed RNG seed; drawn from entropy per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            trails: true,
            mirror_pointer: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Trail capacity for this quality (the trail clamps it to its own bounds)
    pub fn trail_capacity(&self) -> usize {
        (MAX_TRAIL_LENGTH as f32 * self.quality.trail_quality()).round() as usize
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_cap() {
        let mut settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.max_particles(), 2000);
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn test_trail_capacity_within_bounds() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            let cap = Settings::from_preset(preset).trail_capacity();
            assert!(cap >= 2 && cap <= MAX_TRAIL_LENGTH, "{} -> {}", preset.as_str(), cap);
        }
        assert_eq!(Settings::from_preset(QualityPreset::High).trail_capacity(), MAX_TRAIL_LENGTH);
        assert_eq!(Settings::default().trail_capacity(), MAX_TRAIL_LENGTH);
        assert_eq!(Settings::from_preset(QualityPreset::Low).trail_capacity(), 6);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"quality":"Low","seed":42}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::Low);
        assert_eq!(settings.seed, Some(42));
        assert!(settings.mirror_pointer);
        assert!(settings.particles);
    }

    #[test]
    fn test_file_round_trip_and_fallback() {
        let dir = std::env::temp_dir().join(format!("nose-ninja-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let settings = Settings {
            seed: Some(7),
            trails: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(SettingsError::Parse(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        assert!(matches!(
            Settings::load_from(dir.join("missing.json")),
            Err(SettingsError::Io(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
