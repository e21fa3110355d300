use fingerpong_core::geometry::Vec2;
use fingerpong_core::landmarks::Landmark;

use crate::config::ArenaConfig;

/// Bounding rectangle with walls at x=0, x=width, y=0, y=height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a normalized landmark into arena pixel space.
    pub fn scale(&self, landmark: Landmark) -> Vec2 {
        landmark.to_arena(self.width, self.height)
    }
}

impl From<&ArenaConfig> for Arena {
    fn from(cfg: &ArenaConfig) -> Self {
        Self::new(cfg.width, cfg.height)
    }
}
