//! Game settings
//!
//! Play-field size and entity tuning. Read as JSON from LocalStorage on the web;
//! on native an optional JSON file can be supplied.

use glam::Vec2;
use serde::Deserialize;

use crate::consts::*;

/// How overlapping paddle/brick hits within one tick affect the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum CollisionResponse {
    /// Every hit flips vertical velocity, so a paddle hit and a brick hit in
    /// the same tick cancel out.
    #[default]
    Legacy,
    /// At most one vertical flip from paddle/brick hits per tick.
    SingleFlip,
}

impl CollisionResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionResponse::Legacy => "Legacy",
            CollisionResponse::SingleFlip => "SingleFlip",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub game_width: f32,
    pub game_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_max_speed: f32,
    pub paddle_bottom_margin: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Spawn position (top-left of the bounding box)
    pub ball_start: Vec2,
    /// Initial velocity, in units per tick
    pub ball_velocity: Vec2,

    pub collision_response: CollisionResponse,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_max_speed: PADDLE_MAX_SPEED,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,

            ball_size: BALL_SIZE,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),

            collision_response: CollisionResponse::Legacy,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Environment variable naming a settings file (native only)
    pub const ENV_PATH: &'static str = "BRICK_BREAKER_SETTINGS";

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
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `BRICK_BREAKER_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let s = Settings::default();
        assert_eq!(s.game_width, 800.0);
        assert_eq!(s.game_height, 600.0);
        assert_eq!(s.ball_velocity, Vec2::new(4.0, -4.0));
        assert_eq!(s.collision_response, CollisionResponse::Legacy);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "paddle_max_speed": 9.0, "collision_response": "SingleFlip" }"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.paddle_max_speed, 9.0);
        assert_eq!(s.collision_response, CollisionResponse::SingleFlip);
        assert_eq!(s.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
