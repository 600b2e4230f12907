//! Brick Breaker - a minimal breakout arcade game
//!
//! Core modules:
//! - `sim`: Tick-based simulation (entities, collisions, game state)
//! - `renderer`: Draw surface abstraction and pause overlay
//! - `platform`: Frame clock and keyboard input
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CollisionResponse, Settings};
pub use sim::{Game, GameState};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_MAX_SPEED: f32 = 7.0;
    /// Gap between the paddle and the bottom of the field
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Ball defaults (units per tick, not per second)
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_START_X: f32 = 10.0;
    pub const BALL_START_Y: f32 = 400.0;
    pub const BALL_SPEED_X: f32 = 4.0;
    pub const BALL_SPEED_Y: f32 = -4.0;

    /// Brick grid pitch
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    /// Distance from the top of the field to the first brick row
    pub const BRICK_TOP_OFFSET: f32 = 60.0;
}
