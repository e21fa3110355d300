use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point or displacement in arena space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A line segment between two points, e.g. the paddle spanned by two fingertips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Result of projecting a point onto the line through a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Euclidean distance from the point to `closest`.
    /// `f32::INFINITY` when the segment has zero length.
    pub distance: f32,
    /// Projected point. May lie on the extension past either endpoint.
    pub closest: Vec2,
    /// Scalar projection parameter (0 at `start`, 1 at `end`), unclamped.
    pub t: f32,
}

/// Distance from `point` to the infinite line through `start` and `end`.
///
/// The projection parameter is deliberately left unclamped, so a point beyond
/// either endpoint but collinear with the segment reports a distance of ~0.
/// A zero-length segment reports an infinite distance instead of dividing by
/// zero.
pub fn distance_point_to_segment(point: Vec2, start: Vec2, end: Vec2) -> SegmentProjection {
    let dir = end - start;
    let len_sq = dir.dot(dir);

    if len_sq == 0.0 {
        return SegmentProjection {
            distance: f32::INFINITY,
            closest: start,
            t: 0.0,
        };
    }

    let t = (point - start).dot(dir) / len_sq;
    let closest = start + dir * t;

    SegmentProjection {
        distance: point.distance(closest),
        closest,
        t,
    }
}
