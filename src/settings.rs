//! Game settings and preferences
//!
//! Persisted in LocalStorage. Only presentation is configurable; the
//! simulation constants are fixed.

use serde::{Deserialize, Serialize};

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

    /// Whether to draw the parallax cloud layer
    pub fn parallax_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }

    /// Whether to draw grass blades on top of the dashes
    pub fn grass_blades(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }

    /// Whether the unicorn sprite bobs with its gallop
    pub fn sprite_bob(&self) -> bool {
        matches!(self, QualityPreset::High)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Shadow under the unicorn
    pub shadow: bool,
    /// Reduced motion (rainbows stop bobbing)
    pub reduced_motion: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            shadow: true,
            reduced_motion: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "unicorn_dash_settings";

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether rainbows bob up and down
    pub fn effective_bob(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"quality":"High","show_fps":true}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(settings.show_fps);
        assert!(settings.shadow);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json(r#"{"quality":"Ultra"}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_presets() {
        assert!(!QualityPreset::Low.parallax_enabled());
        assert!(!QualityPreset::Low.grass_blades());
        assert!(QualityPreset::Medium.parallax_enabled());
        assert!(!QualityPreset::Medium.sprite_bob());
        assert!(QualityPreset::High.sprite_bob());
        assert_eq!(QualityPreset::default().as_str(), "Medium");
    }

    #[test]
    fn test_reduced_motion_disables_bob() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_bob());
    }
}
