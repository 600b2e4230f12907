//! Frame timing and the per-frame clear/update/draw step

use crate::renderer::Surface;
use crate::sim::Game;

/// Derives frame deltas from monotonically increasing timestamps (ms)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous timestamp (since 0 on the first frame)
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let dt = timestamp - self.last_time;
        self.last_time = timestamp;
        dt as f32
    }
}

/// One display refresh: clear the field, advance one tick, draw
pub fn run_frame(
    game: &mut Game,
    clock: &mut FrameClock,
    timestamp: f64,
    surface: &mut dyn Surface,
) {
    let dt = clock.tick(timestamp);

    surface.clear_rect(0.0, 0.0, game.width(), game.height());
    game.update(dt);
    game.draw(surface);
}
