//! Game configuration
//!
//! Read from a `<script id="game-config" type="application/json">` element
//! when present. Every field is optional.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::renderer::Rgb;

/// Game setup values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === DOM ===
    /// Id of the `<canvas>` element
    pub canvas_id: String,
    /// Id of the element showing the score
    pub score_id: String,

    // === Platform ===
    /// Ring radius (pixels)
    pub platform_radius: f64,
    /// Ring center offset below the canvas center (pixels)
    pub platform_offset_y: f64,
    /// Upper bound on segment count
    pub max_sections: u32,
    /// Ring stroke width (pixels)
    pub line_width: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Ball fill color as `#rrggbb`
    pub ball_color: String,
    /// Initial upward speed of a jump (pixels/frame)
    pub jump_speed: f64,
    /// Downward acceleration (pixels/frame²)
    pub gravity: f64,

    /// Seed for segment colors (defaults to the clock in the browser)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            score_id: "score".to_string(),

            platform_radius: PLATFORM_RADIUS,
            platform_offset_y: PLATFORM_OFFSET_Y,
            max_sections: MAX_SECTIONS,
            line_width: LINE_WIDTH,

            ball_radius: BALL_RADIUS,
            ball_color: "#ffffff".to_string(),
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Id of the element holding the JSON config
    pub const ELEMENT_ID: &'static str = "game-config";

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize, e.g. to log the effective config
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.platform_radius > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "platform_radius must be positive, got {}",
                self.platform_radius
            )));
        }
        if !(self.ball_radius > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        if self.max_sections == 0 {
            return Err(GameError::InvalidConfig("max_sections must be at least 1".to_string()));
        }
        // Every segment must be wider than the gap carved into it
        let narrowest = std::f64::consts::TAU / self.max_sections as f64;
        if narrowest <= SIZE_OF_HOLE {
            return Err(GameError::InvalidConfig(format!(
                "max_sections {} leaves no room for segments",
                self.max_sections
            )));
        }
        if !(self.jump_speed > 0.0) || !(self.gravity > 0.0) {
            return Err(GameError::InvalidConfig(
                "jump_speed and gravity must be positive".to_string(),
            ));
        }
        if Rgb::parse_hex(&self.ball_color).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "ball_color '{}' is not #rrggbb",
                self.ball_color
            )));
        }
        Ok(())
    }

    /// Ball color, falling back to white
    pub fn ball_rgb(&self) -> Rgb {
        Rgb::parse_hex(&self.ball_color).unwrap_or(Rgb::WHITE)
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let text = document
            .get_element_by_id(Self::ELEMENT_ID)
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from #{}", Self::ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "max_sections": 4, "seed": 7 }"#).unwrap();
        assert_eq!(config.max_sections, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.platform_radius, PLATFORM_RADIUS);
        assert_eq!(config.canvas_id, "canvas");
    }

    #[test]
    fn test_rejects_zero_sections() {
        let err = GameConfig::from_json(r#"{ "max_sections": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_sections_narrower_than_hole() {
        // TAU / 25 ≈ 0.251 is narrower than the hole
        let config = GameConfig {
            max_sections: 25,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            max_sections: 19,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            GameConfig {
                platform_radius: 0.0,
                ..Default::default()
            },
            GameConfig {
                ball_radius: -1.0,
                ..Default::default()
            },
            GameConfig {
                gravity: 0.0,
                ..Default::default()
            },
            GameConfig {
                ball_color: "white".to_string(),
                ..Default::default()
            },
        ];
        for config in &bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_effective_config_reloads() {
        let config = GameConfig {
            max_sections: 6,
            ball_color: "#ff8800".to_string(),
            seed: Some(3),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"max_sections\":6"));
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ max_sections: ").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
