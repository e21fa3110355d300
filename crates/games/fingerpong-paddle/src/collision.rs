use fingerpong_core::geometry::{Segment, distance_point_to_segment};

use crate::arena::Arena;
use crate::physics::Ball;

/// Which velocity components a wall check wants inverted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallFlip {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl WallFlip {
    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }
}

/// Check the ball against the four arena walls. Each axis is judged on its
/// own, so a corner hit flips both.
pub fn resolve_wall_collision(ball: &Ball, arena: &Arena) -> WallFlip {
    let p = ball.position;
    let r = ball.radius;
    WallFlip {
        flip_x: p.x + r > arena.width || p.x - r < 0.0,
        flip_y: p.y + r > arena.height || p.y - r < 0.0,
    }
}

/// Whether the ball center lies closer than its radius to the line through
/// the paddle. The line is not clamped to the paddle's endpoints, and a
/// zero-length paddle never collides.
pub fn resolve_obstacle_collision(ball: &Ball, segment: Option<&Segment>) -> bool {
    let Some(segment) = segment else {
        return false;
    };
    distance_point_to_segment(ball.position, segment.start, segment.end).distance < ball.radius
}
