//! Game state and entity types
//!
//! Each entity owns its position and size. Cross-entity reads (ball vs paddle,
//! brick vs ball) are passed in by [`super::Game`] rather than stored as
//! back-references.

use glam::Vec2;

use super::collision::{Rect, ball_rect_collision};
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::renderer::{Color, ImageId, Surface};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Paused,
    Running,
    /// Reserved: nothing transitions into this yet
    Menu,
    /// Reserved: nothing transitions into this yet
    GameOver,
}

/// Anything that can render itself
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub max_speed: f32,
    /// Horizontal speed: -max_speed, 0 or +max_speed
    pub speed: f32,
    game_width: f32,
}

impl Paddle {
    /// Centered horizontally, just above the bottom of the field
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(
                settings.game_width / 2.0 - settings.paddle_width / 2.0,
                settings.game_height - settings.paddle_height - settings.paddle_bottom_margin,
            ),
            width: settings.paddle_width,
            height: settings.paddle_height,
            max_speed: settings.paddle_max_speed,
            speed: 0.0,
            game_width: settings.game_width,
        }
    }

    pub fn move_left(&mut self) {
        self.speed = -self.max_speed;
    }

    pub fn move_right(&mut self) {
        self.speed = self.max_speed;
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Advance by one tick, stopped at the field edges.
    ///
    /// `speed` is left alone, so a held key keeps pushing into the wall. The
    /// right edge is checked last and wins when the paddle is wider than the
    /// field.
    pub fn update(&mut self) {
        self.pos.x += self.speed;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.width > self.game_width {
            self.pos.x = self.game_width - self.width;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

impl Draw for Paddle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(Color::GREEN);
        surface.fill_rect(self.pos.x, self.pos.y, self.width, self.height);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left of the bounding box
    pub pos: Vec2,
    /// Units per tick; only the signs ever change
    pub vel: Vec2,
    /// Side of the square bounding box
    pub size: f32,
    game_size: Vec2,
}

impl Ball {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.ball_start,
            vel: settings.ball_velocity,
            size: settings.ball_size,
            game_size: Vec2::new(settings.game_width, settings.game_height),
        }
    }

    /// Advance by one tick and resolve wall and paddle contacts.
    ///
    /// Motion is per tick; `_dt` is accepted but not used. Returns true if the
    /// paddle was hit.
    pub fn update(&mut self, _dt: f32, paddle: &Paddle) -> bool {
        self.pos += self.vel;

        // No repositioning on walls: the ball may sink past an edge before the
        // next reflection brings it back.
        if self.pos.x + self.size > self.game_size.x || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.size > self.game_size.y || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }

        if self.hits(&paddle.rect()) {
            self.bounce_y();
            self.pos.y = paddle.pos.y - self.size;
            return true;
        }

        false
    }

    /// Whether the ball overlaps `rect`
    pub fn hits(&self, rect: &Rect) -> bool {
        ball_rect_collision(self.pos, self.size, rect)
    }

    /// Invert the vertical velocity
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

impl Draw for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(ImageId::Ball, self.pos.x, self.pos.y, self.size, self.size);
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Set on the tick the ball hits this brick; purged at end of that tick
    pub marked_for_deletion: bool,
}

impl Brick {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            marked_for_deletion: false,
        }
    }

    /// Test against the ball; on a hit mark for deletion and, if `reflect`,
    /// bounce the ball vertically. Returns true on a hit.
    pub fn update(&mut self, ball: &mut Ball, reflect: bool) -> bool {
        if !ball.hits(&self.rect()) {
            return false;
        }
        if reflect {
            ball.bounce_y();
        }
        self.marked_for_deletion = true;
        true
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

impl Draw for Brick {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(ImageId::Brick, self.pos.x, self.pos.y, self.width, self.height);
    }
}
