//! Simulation module
//!
//! All gameplay logic lives here. Motion is tick-based: one `Game::update`
//! call moves everything by one step regardless of frame time. Rendering goes
//! through the `Surface` trait only.

pub mod collision;
pub mod game;
pub mod level;
pub mod state;

pub use collision::{Rect, ball_rect_collision};
pub use game::{EntityRef, Game};
pub use level::{LEVEL_1, Level, build_level};
pub use state::{Ball, Brick, Draw, GameState, Paddle};
