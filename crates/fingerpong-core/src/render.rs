use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// RGB color for draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 128, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
}

/// A single drawing primitive in arena coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Blit the current camera frame stretched over the whole arena.
    VideoFrame,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

impl DrawCommand {
    fn mirrored(&self, width: f32) -> Self {
        let flip = |p: Vec2| Vec2::new(width - p.x, p.y);
        match *self {
            Self::VideoFrame => Self::VideoFrame,
            Self::Circle {
                center,
                radius,
                color,
            } => Self::Circle {
                center: flip(center),
                radius,
                color,
            },
            Self::Line {
                from,
                to,
                width: line_width,
                color,
            } => Self::Line {
                from: flip(from),
                to: flip(to),
                width: line_width,
                color,
            },
        }
    }
}

/// Everything drawn for one frame, back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Copy of the scene reflected about the vertical center line, for
    /// selfie-style display of a front camera.
    pub fn mirrored(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            commands: self
                .commands
                .iter()
                .map(|c| c.mirrored(self.width))
                .collect(),
        }
    }
}

/// Sink for per-frame scenes. Implemented by whatever owns the display surface.
pub trait Renderer {
    fn render(&mut self, scene: &Scene);
}
