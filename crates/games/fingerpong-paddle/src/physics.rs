use serde::{Deserialize, Serialize};

use fingerpong_core::geometry::{Segment, Vec2};

use crate::arena::Arena;
use crate::collision::{WallFlip, resolve_obstacle_collision, resolve_wall_collision};
use crate::config::PaddleConfig;

/// The single ball in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub radius: f32,
    /// Displacement per tick. Only the signs ever change.
    pub velocity: Vec2,
}

impl Ball {
    pub const fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            position,
            radius,
            velocity,
        }
    }
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub wall: WallFlip,
    pub paddle_hit: bool,
}

/// Owns the ball and advances it once per tick inside a fixed arena.
#[derive(Debug, Clone)]
pub struct BallSimulation {
    ball: Ball,
    arena: Arena,
}

impl BallSimulation {
    pub fn new(ball: Ball, arena: Arena) -> Self {
        Self { ball, arena }
    }

    pub fn from_config(config: &PaddleConfig) -> Self {
        let b = &config.ball;
        Self::new(
            Ball::new(Vec2::new(b.x, b.y), b.radius, Vec2::new(b.dx, b.dy)),
            Arena::from(&config.arena),
        )
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Advance one tick.
    ///
    /// The ball moves by its velocity first; walls and then the paddle are
    /// checked against the new position. Both checks always run, so a wall
    /// bounce and a paddle hit on the same tick cancel out on `dy`. No
    /// de-penetration is applied, only velocity sign flips.
    pub fn step(&mut self, obstacle: Option<Segment>) -> StepOutcome {
        let ball = &mut self.ball;
        ball.position = ball.position + ball.velocity;

        let wall = resolve_wall_collision(ball, &self.arena);
        if wall.flip_x {
            ball.velocity.x = -ball.velocity.x;
        }
        if wall.flip_y {
            ball.velocity.y = -ball.velocity.y;
        }

        let paddle_hit = resolve_obstacle_collision(ball, obstacle.as_ref());
        if paddle_hit {
            ball.velocity.y = -ball.velocity.y;
        }

        if wall.any() || paddle_hit {
            tracing::trace!(
                x = ball.position.x,
                y = ball.position.y,
                flip_x = wall.flip_x,
                flip_y = wall.flip_y,
                paddle_hit,
                "Ball bounced"
            );
        }

        StepOutcome { wall, paddle_hit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(x: f32, y: f32, dx: f32, dy: f32) -> BallSimulation {
        BallSimulation::new(
            Ball::new(Vec2::new(x, y), 10.0, Vec2::new(dx, dy)),
            Arena::new(720.0, 500.0),
        )
    }

    #[test]
    fn free_flight_moves_by_velocity() {
        let mut s = sim(320.0, 240.0, 2.0, 2.0);
        let out = s.step(None);
        assert_eq!(s.ball().position, Vec2::new(322.0, 242.0));
        assert_eq!(s.ball().velocity, Vec2::new(2.0, 2.0));
        assert_eq!(out, StepOutcome::default());
    }

    #[test]
    fn right_wall_bounce() {
        let mut s = sim(710.0, 240.0, 2.0, 2.0);
        let out = s.step(None);
        assert_eq!(s.ball().position, Vec2::new(712.0, 242.0));
        assert_eq!(s.ball().velocity.x, -2.0, "dx should flip at the right wall");
        assert_eq!(s.ball().velocity.y, 2.0, "dy should be untouched");
        assert!(out.wall.flip_x && !out.wall.flip_y);
    }

    #[test]
    fn corner_bounce_flips_both() {
        let mut s = sim(709.0, 489.0, 2.0, 2.0);
        s.step(None);
        assert_eq!(s.ball().velocity, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn paddle_through_center_flips_dy_only() {
        let mut s = sim(320.0, 240.0, 2.0, 2.0);
        let paddle = Segment::new(Vec2::new(300.0, 242.0), Vec2::new(340.0, 242.0));
        let out = s.step(Some(paddle));
        assert_eq!(s.ball().position, Vec2::new(322.0, 242.0));
        assert_eq!(s.ball().velocity.x, 2.0);
        assert_eq!(s.ball().velocity.y, -2.0);
        assert!(out.paddle_hit);
        assert!(!out.wall.any());
    }

    #[test]
    fn degenerate_paddle_is_noop() {
        let mut s = sim(320.0, 240.0, 2.0, 2.0);
        let c = Vec2::new(322.0, 242.0);
        let out = s.step(Some(Segment::new(c, c)));
        assert_eq!(s.ball().velocity, Vec2::new(2.0, 2.0));
        assert!(!out.paddle_hit);
    }

    #[test]
    fn wall_and_paddle_flips_compound() {
        // Bottom wall and a paddle on the same tick: dy is negated twice.
        let mut s = sim(300.0, 489.0, 2.0, 2.0);
        let paddle = Segment::new(Vec2::new(0.0, 491.0), Vec2::new(720.0, 491.0));
        let out = s.step(Some(paddle));
        assert!(out.wall.flip_y);
        assert!(out.paddle_hit);
        assert_eq!(s.ball().velocity.y, 2.0, "double negation should restore dy");
    }

    #[test]
    fn paddle_is_checked_after_move() {
        // The paddle sits where the ball will be, not where it was.
        let mut s = sim(100.0, 100.0, 0.0, 15.0);
        let paddle = Segment::new(Vec2::new(0.0, 115.0), Vec2::new(200.0, 115.0));
        assert!(s.step(Some(paddle)).paddle_hit);

        let mut s = sim(100.0, 100.0, 0.0, -15.0);
        assert!(!s.step(Some(paddle)).paddle_hit);
    }

    #[test]
    fn no_de_penetration() {
        let mut s = sim(715.0, 240.0, 2.0, 0.0);
        s.step(None);
        assert_eq!(s.ball().position.x, 717.0, "position is never corrected");
    }

    #[test]
    fn from_config_uses_reference_setup() {
        let s = BallSimulation::from_config(&PaddleConfig::default());
        assert_eq!(s.ball().position, Vec2::new(320.0, 240.0));
        assert_eq!(s.ball().radius, 10.0);
        assert_eq!(s.ball().velocity, Vec2::new(2.0, 2.0));
        assert_eq!(*s.arena(), Arena::new(720.0, 500.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ball_stays_within_drift_bound(
                width in 200.0f32..1000.0,
                height in 200.0f32..1000.0,
                fx in 0.0f32..1.0,
                fy in 0.0f32..1.0,
                dx in -10.0f32..10.0,
                dy in -10.0f32..10.0,
                steps in 1usize..2000,
            ) {
                let radius = 10.0;
                let x = radius + fx * (width - 2.0 * radius);
                let y = radius + fy * (height - 2.0 * radius);
                let mut s = BallSimulation::new(
                    Ball::new(Vec2::new(x, y), radius, Vec2::new(dx, dy)),
                    Arena::new(width, height),
                );
                let eps = 1e-2;
                for _ in 0..steps {
                    s.step(None);
                    let p = s.ball().position;
                    prop_assert!(
                        p.x >= -dx.abs() - eps && p.x <= width + dx.abs() + eps,
                        "x = {} escaped [{}, {}]", p.x, -dx.abs(), width + dx.abs()
                    );
                    prop_assert!(
                        p.y >= -dy.abs() - eps && p.y <= height + dy.abs() + eps,
                        "y = {} escaped [{}, {}]", p.y, -dy.abs(), height + dy.abs()
                    );
                }
            }

            #[test]
            fn speed_magnitude_is_constant(
                dx in -10.0f32..10.0,
                dy in -10.0f32..10.0,
                py in 0.0f32..500.0,
                steps in 1usize..500,
            ) {
                let mut s = BallSimulation::new(
                    Ball::new(Vec2::new(360.0, 250.0), 10.0, Vec2::new(dx, dy)),
                    Arena::new(720.0, 500.0),
                );
                let paddle = Segment::new(Vec2::new(0.0, py), Vec2::new(720.0, py));
                for _ in 0..steps {
                    s.step(Some(paddle));
                    prop_assert_eq!(s.ball().velocity.x.abs(), dx.abs());
                    prop_assert_eq!(s.ball().velocity.y.abs(), dy.abs());
                }
            }

            #[test]
            fn x_only_violation_keeps_dy(
                y in 100.0f32..400.0,
                dy in -5.0f32..5.0,
            ) {
                let mut s = BallSimulation::new(
                    Ball::new(Vec2::new(709.0, y), 10.0, Vec2::new(2.0, dy)),
                    Arena::new(720.0, 500.0),
                );
                let out = s.step(None);
                prop_assert!(out.wall.flip_x);
                prop_assert!(!out.wall.flip_y);
                prop_assert_eq!(s.ball().velocity.x, -2.0);
                prop_assert_eq!(s.ball().velocity.y, dy);
            }
        }
    }
}
