//! Collision detection between the ball and rectangles
//!
//! The ball is treated as its square bounding box. Vertically the box only has
//! to overlap the rectangle, but horizontally it has to fit entirely inside the
//! rectangle's span. That asymmetry decides whether edge hits bounce, so it is
//! kept as is rather than replaced with a symmetric overlap test.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Check whether a ball (top-left `ball_pos`, side `ball_size`) hits `rect`
///
/// Edges touching counts as a hit.
pub fn ball_rect_collision(ball_pos: Vec2, ball_size: f32, rect: &Rect) -> bool {
    let ball = Rect::new(ball_pos, Vec2::splat(ball_size));

    ball.bottom() >= rect.top()
        && ball.top() <= rect.bottom()
        && ball.left() >= rect.left()
        && ball.right() <= rect.right()
}
