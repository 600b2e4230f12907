//! Game: owns every entity and advances them one tick at a time

use super::level::{Level, build_level};
use super::state::{Ball, Brick, Draw, GameState, Paddle};
use crate::renderer::{Surface, draw_pause_overlay};
use crate::settings::{CollisionResponse, Settings};

/// Borrowed view of one entity, in update/draw order
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Ball(&'a Ball),
    Paddle(&'a Paddle),
    Brick(&'a Brick),
}

impl Draw for EntityRef<'_> {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            EntityRef::Ball(ball) => ball.draw(surface),
            EntityRef::Paddle(paddle) => paddle.draw(surface),
            EntityRef::Brick(brick) => brick.draw(surface),
        }
    }
}

/// Complete game
#[derive(Debug, Clone)]
pub struct Game {
    pub settings: Settings,
    pub state: GameState,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks, in level order
    pub bricks: Vec<Brick>,
    /// Ticks simulated while running
    pub time_ticks: u64,
}

impl Game {
    /// Spawn paddle, ball and bricks and start running
    pub fn start(settings: Settings, level: &Level) -> Self {
        let game = Self {
            paddle: Paddle::new(&settings),
            ball: Ball::new(&settings),
            bricks: build_level(level),
            state: GameState::Running,
            time_ticks: 0,
            settings,
        };
        log::info!(
            "Game started: {}x{} field, {} bricks, {} collision response",
            game.width(),
            game.height(),
            game.bricks.len(),
            game.settings.collision_response.as_str()
        );
        game
    }

    pub fn width(&self) -> f32 {
        self.settings.game_width
    }

    pub fn height(&self) -> f32 {
        self.settings.game_height
    }

    pub fn is_paused(&self) -> bool {
        self.state == GameState::Paused
    }

    /// Flip between Paused and Running; Menu and GameOver are left alone
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Paused => GameState::Running,
            GameState::Running => GameState::Paused,
            other => other,
        };
        log::debug!("Game state: {:?}", self.state);
    }

    /// All entities in update/draw order: ball, paddle, then bricks
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        [EntityRef::Ball(&self.ball), EntityRef::Paddle(&self.paddle)]
            .into_iter()
            .chain(self.bricks.iter().map(EntityRef::Brick))
    }

    pub fn entity_count(&self) -> usize {
        2 + self.bricks.len()
    }

    /// Advance one tick. Does nothing while paused.
    ///
    /// The ball moves first and sees the paddle where it was last tick; bricks
    /// then test against the ball's new position. Hit bricks are dropped at the
    /// end of the tick.
    pub fn update(&mut self, dt: f32) {
        if self.state == GameState::Paused {
            return;
        }

        self.time_ticks += 1;

        let mut bounced = self.ball.update(dt, &self.paddle);
        self.paddle.update();

        let legacy = self.settings.collision_response == CollisionResponse::Legacy;
        for brick in &mut self.bricks {
            let reflect = legacy || !bounced;
            if brick.update(&mut self.ball, reflect) {
                log::debug!("Brick {} destroyed on tick {}", brick.id, self.time_ticks);
                bounced |= reflect;
            }
        }

        self.bricks.retain(|b| !b.marked_for_deletion);
    }

    /// Draw every entity (later ones on top), then the pause overlay if paused
    pub fn draw(&self, surface: &mut dyn Surface) {
        for entity in self.entities() {
            entity.draw(surface);
        }

        if self.is_paused() {
            draw_pause_overlay(surface, self.width(), self.height());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, ImageId, RecordingSurface};
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_game() -> Game {
        Game::start(Settings::default(), &Level::level_1())
    }

    #[test]
    fn test_start_is_running() {
        let game = new_game();
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.bricks.len(), 35);
        assert_eq!(game.entity_count(), 37);
    }

    #[test]
    fn test_entity_order() {
        let game = new_game();
        let mut entities = game.entities();
        assert!(matches!(entities.next(), Some(EntityRef::Ball(_))));
        assert!(matches!(entities.next(), Some(EntityRef::Paddle(_))));
        assert!(entities.all(|e| matches!(e, EntityRef::Brick(_))));
    }

    #[test]
    fn test_toggle_pause() {
        let mut game = new_game();
        game.toggle_pause();
        assert_eq!(game.state, GameState::Paused);
        game.toggle_pause();
        assert_eq!(game.state, GameState::Running);
    }

    #[test]
    fn test_toggle_pause_ignores_reserved_states() {
        let mut game = new_game();
        game.state = GameState::Menu;
        game.toggle_pause();
        assert_eq!(game.state, GameState::Menu);
        game.state = GameState::GameOver;
        game.toggle_pause();
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = new_game();
        game.paddle.move_right();
        game.toggle_pause();

        let ball = game.ball.clone();
        let paddle = game.paddle.clone();
        let bricks = game.bricks.clone();
        for _ in 0..10 {
            game.update(16.0);
        }

        assert_eq!(game.ball, ball);
        assert_eq!(game.paddle, paddle);
        assert_eq!(game.bricks, bricks);
        assert_eq!(game.time_ticks, 0);
    }

    #[test]
    fn test_pause_resume_scenario() {
        let mut game = new_game();
        game.toggle_pause();
        assert_eq!(game.state, GameState::Paused);

        let start = game.ball.pos;
        for _ in 0..10 {
            game.update(16.0);
        }
        assert_eq!(game.ball.pos, start);

        game.toggle_pause();
        assert_eq!(game.state, GameState::Running);
        let vel = game.ball.vel;
        game.update(16.0);
        assert_eq!(game.ball.pos, start + vel);
    }

    #[test]
    fn test_brick_hit_removes_brick_and_bounces() {
        let mut game = new_game();
        // Place the ball so that after one step it sits inside the first
        // full-row brick at (0, 84)
        game.ball.pos = Vec2::new(14.0, 92.0);
        game.ball.vel = Vec2::new(4.0, -4.0);
        let before = game.bricks.len();

        game.update(16.0);

        assert_eq!(game.bricks.len(), before - 1);
        assert!(!game.bricks.iter().any(|b| b.pos == Vec2::new(0.0, 84.0)));
        assert_eq!(game.ball.vel.y, 4.0);
    }

    #[test]
    fn test_survivors_keep_order() {
        let mut game = new_game();
        game.ball.pos = Vec2::new(14.0, 92.0);
        game.ball.vel = Vec2::new(4.0, -4.0);
        game.update(16.0);

        let ids: Vec<u32> = game.bricks.iter().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    /// Game with one brick sitting directly on the paddle's top edge
    fn paddle_and_brick_game(response: CollisionResponse) -> Game {
        let settings = Settings {
            collision_response: response,
            ..Settings::default()
        };
        let mut game = Game::start(settings, &Level::new(Vec::new()));
        game.bricks.push(Brick::new(1, Vec2::new(game.paddle.pos.x, game.paddle.pos.y - 24.0)));
        game.ball.pos = Vec2::new(game.paddle.pos.x + 10.0, game.paddle.pos.y - 20.0);
        game.ball.vel = Vec2::new(4.0, 4.0);
        game
    }

    #[test]
    fn test_legacy_paddle_and_brick_cancel_out() {
        let mut game = paddle_and_brick_game(CollisionResponse::Legacy);
        game.update(16.0);
        assert!(game.bricks.is_empty());
        assert_eq!(game.ball.vel.y, 4.0);
    }

    #[test]
    fn test_single_flip_paddle_and_brick() {
        let mut game = paddle_and_brick_game(CollisionResponse::SingleFlip);
        game.update(16.0);
        assert!(game.bricks.is_empty());
        assert_eq!(game.ball.vel.y, -4.0);
    }

    /// Empty-level game with the ball about to reach the paddle's top edge
    /// (after one step it sits at `x`, flush with the paddle top)
    fn ball_over_paddle_game(x: f32, paddle_speed: f32) -> Game {
        let mut game = Game::start(Settings::default(), &Level::new(Vec::new()));
        game.paddle.speed = paddle_speed;
        game.ball.pos = Vec2::new(x - 4.0, game.paddle.pos.y - 20.0);
        game.ball.vel = Vec2::new(4.0, 4.0);
        game
    }

    #[test]
    fn test_ball_sees_paddle_before_it_moves_away() {
        // Paddle spans 325..475 and slides right to 332 this tick. The ball
        // lands at x = 326, inside the old span but outside the new one.
        let mut game = ball_over_paddle_game(326.0, 7.0);
        game.update(16.0);

        assert_eq!(game.paddle.pos.x, 332.0);
        assert_eq!(game.ball.vel.y, -4.0);
        assert_eq!(game.ball.pos.y, 560.0 - 16.0);
    }

    #[test]
    fn test_ball_misses_paddle_moving_under_it_until_next_tick() {
        // Paddle slides left to 318 this tick. The ball lands at x = 320,
        // outside the old span (325..475), so it does not bounce yet.
        let mut game = ball_over_paddle_game(320.0, -7.0);
        game.update(16.0);

        assert_eq!(game.paddle.pos.x, 318.0);
        assert_eq!(game.ball.vel.y, 4.0);
        assert_eq!(game.ball.pos, Vec2::new(320.0, 544.0));

        // Next tick the ball tests against the paddle at 318 and bounces
        game.update(16.0);
        assert_eq!(game.paddle.pos.x, 311.0);
        assert_eq!(game.ball.vel.y, -4.0);
        assert_eq!(game.ball.pos.y, 560.0 - 16.0);
    }

    #[test]
    fn test_oversized_paddle_from_settings_runs() {
        let settings = Settings::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap();
        let mut game = Game::start(settings, &Level::level_1());
        game.paddle.move_left();
        for _ in 0..5 {
            game.update(16.0);
        }
        assert_eq!(game.paddle.pos.x, -100.0);
        assert_eq!(game.time_ticks, 5);
    }

    #[test]
    fn test_draw_order_and_overlay() {
        let mut game = new_game();
        let mut surface = RecordingSurface::new();
        game.draw(&mut surface);

        assert!(matches!(
            surface.commands[0],
            DrawCommand::Image { image: ImageId::Ball, .. }
        ));
        assert_eq!(surface.image_count(ImageId::Brick), 35);
        assert!(!surface.commands.iter().any(|c| matches!(c, DrawCommand::Text { .. })));

        surface.clear();
        game.toggle_pause();
        game.draw(&mut surface);
        assert!(matches!(
            surface.commands.last(),
            Some(DrawCommand::Text { text, .. }) if text == "paused"
        ));
    }

    proptest! {
        #[test]
        fn prop_ball_speed_conserved(ticks in 1usize..2000, single in any::<bool>()) {
            let settings = Settings {
                collision_response: if single {
                    CollisionResponse::SingleFlip
                } else {
                    CollisionResponse::Legacy
                },
                ..Settings::default()
            };
            let mut game = Game::start(settings, &Level::level_1());
            let speed = game.ball.vel.abs();
            for _ in 0..ticks {
                game.update(16.0);
                prop_assert_eq!(game.ball.vel.abs(), speed);
            }
        }
    }
}
