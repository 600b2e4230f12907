//! Keyboard input
//!
//! Key events mutate the game immediately. Several events between two ticks
//! simply leave the last one in effect.

use crate::sim::Game;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value; unknown keys give `None`
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Apply one key event to the game
pub fn handle_key_event(game: &mut Game, event: KeyEvent) {
    match event {
        KeyEvent::Down(Key::ArrowLeft) => game.paddle.move_left(),
        KeyEvent::Down(Key::ArrowRight) => game.paddle.move_right(),
        KeyEvent::Down(Key::Escape) => game.toggle_pause(),
        // Releasing one arrow must not cancel the other one still held
        KeyEvent::Up(Key::ArrowLeft) => {
            if game.paddle.speed < 0.0 {
                game.paddle.stop();
            }
        }
        KeyEvent::Up(Key::ArrowRight) => {
            if game.paddle.speed > 0.0 {
                game.paddle.stop();
            }
        }
        KeyEvent::Up(Key::Escape) => {}
    }
}
