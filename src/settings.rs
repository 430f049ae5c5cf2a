//! Game settings
//!
//! Read once at startup from an optional inline JSON block on the page:
//!
//! ```html
//! <script id="snake-config" type="application/json">{ "target_score": 5 }</script>
//! ```
//!
//! Missing fields fall back to defaults. Nothing is ever written back.

use serde::Deserialize;
use thiserror::Error;

use crate::consts::*;

/// Errors raised while reading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_ms must be greater than zero")]
    ZeroTick,
    #[error("target_score must be greater than zero")]
    ZeroTargetScore,
    #[error("target_columns must be greater than zero")]
    ZeroColumns,
    #[error("viewport_fill must be in (0, 1], got {0}")]
    ViewportFill(f64),
    #[error("swipe_threshold must be positive, got {0}")]
    SwipeThreshold(f64),
}

/// Canvas colors (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub border: String,
    pub fruit: String,
    pub head: String,
    pub body: String,
    /// Per-cell outline drawn over the snake
    pub outline: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#222".to_string(),
            border: "red".to_string(),
            fruit: "red".to_string(),
            head: "#0f0".to_string(),
            body: "#8f8".to_string(),
            outline: "#111".to_string(),
        }
    }
}

/// Gameplay and presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between ticks in milliseconds
    pub tick_ms: u32,
    /// Score that wins the round
    pub target_score: u32,
    /// Columns the cell size is derived from
    pub target_columns: u32,
    /// Border inset inside the canvas (px, 0 disables the border)
    pub border_width: u32,
    /// Fraction of the smaller viewport side used for the board
    pub viewport_fill: f64,
    /// Minimum swipe travel in px
    pub swipe_threshold: f64,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            target_score: TARGET_SCORE,
            target_columns: TARGET_COLUMNS,
            border_width: BORDER_WIDTH,
            viewport_fill: VIEWPORT_FILL,
            swipe_threshold: SWIPE_THRESHOLD,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Element holding the inline JSON config
    pub const CONFIG_ELEMENT_ID: &'static str = "snake-config";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would stall the loop or break the grid math
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }
        if self.target_score == 0 {
            return Err(SettingsError::ZeroTargetScore);
        }
        if self.target_columns == 0 {
            return Err(SettingsError::ZeroColumns);
        }
        if !(self.viewport_fill > 0.0 && self.viewport_fill <= 1.0) {
            return Err(SettingsError::ViewportFill(self.viewport_fill));
        }
        if !(self.swipe_threshold > 0.0) {
            return Err(SettingsError::SwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }

    /// Load settings from the page's inline config block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring config block: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
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
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_ms, 120);
        assert_eq!(settings.target_score, 10);
        assert_eq!(settings.palette.head, "#0f0");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "target_score": 3, "palette": { "fruit": "orange" } }"#)
                .unwrap();
        assert_eq!(settings.target_score, 3);
        assert_eq!(settings.tick_ms, TICK_MS);
        assert_eq!(settings.palette.fruit, "orange");
        assert_eq!(settings.palette.background, "#222");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "tick_ms": 0 }"#),
            Err(SettingsError::ZeroTick)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "target_score": 0 }"#),
            Err(SettingsError::ZeroTargetScore)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "target_columns": 0 }"#),
            Err(SettingsError::ZeroColumns)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "viewport_fill": 1.5 }"#),
            Err(SettingsError::ViewportFill(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "swipe_threshold": -1.0 }"#),
            Err(SettingsError::SwipeThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ target_score: "),
            Err(SettingsError::Parse(_))
        ));
    }
}
