//! Platform layer
//!
//! Glue between the host (browser or native loop) and the simulation:
//! - Frame timing
//! - Keyboard input

pub mod clock;
pub mod input;

pub use clock::{FrameClock, run_frame};
pub use input::{Key, KeyEvent, handle_key_event};
