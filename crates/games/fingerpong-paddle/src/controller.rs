use fingerpong_core::geometry::Segment;
use fingerpong_core::landmarks::{DetectionFrame, HandLandmarks};
use fingerpong_core::render::{Color, DrawCommand, Renderer, Scene};

use crate::arena::Arena;
use crate::config::{PaddleConfig, RenderConfig};
use crate::physics::{BallSimulation, StepOutcome};

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Zero-based index of the frame that was processed.
    pub frame: u64,
    pub paddle: Option<Segment>,
    pub outcome: StepOutcome,
}

/// Build the paddle from the index fingertips of the first two hands.
///
/// Fewer than two hands yields no paddle; hands past the second are ignored.
/// A hand too short to contain a fingertip also yields no paddle.
pub fn derive_paddle(frame: &DetectionFrame, arena: &Arena) -> Option<Segment> {
    let (first, second) = frame.hand_pair()?;
    match (first.index_fingertip(), second.index_fingertip()) {
        (Some(a), Some(b)) => Some(Segment::new(arena.scale(a), arena.scale(b))),
        _ => {
            tracing::debug!(
                first_len = first.len(),
                second_len = second.len(),
                "Hand is missing its index fingertip, no paddle this frame"
            );
            None
        },
    }
}

/// Per-frame glue between the hand tracker, the simulation, and the renderer.
pub struct FrameController {
    sim: BallSimulation,
    render: RenderConfig,
    frames: u64,
}

impl FrameController {
    pub fn new(sim: BallSimulation, render: RenderConfig) -> Self {
        Self {
            sim,
            render,
            frames: 0,
        }
    }

    pub fn from_config(config: &PaddleConfig) -> Self {
        Self::new(BallSimulation::from_config(config), config.render.clone())
    }

    pub fn simulation(&self) -> &BallSimulation {
        &self.sim
    }

    /// Number of frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Process one detection result: step the ball exactly once, then draw.
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        detection: &DetectionFrame,
        renderer: &mut R,
    ) -> TickReport {
        let paddle = derive_paddle(detection, self.sim.arena());
        let outcome = self.sim.step(paddle);

        let scene = self.build_scene(detection, paddle.as_ref());
        if self.render.mirror {
            renderer.render(&scene.mirrored());
        } else {
            renderer.render(&scene);
        }

        let report = TickReport {
            frame: self.frames,
            paddle,
            outcome,
        };
        self.frames += 1;
        report
    }

    fn build_scene(&self, detection: &DetectionFrame, paddle: Option<&Segment>) -> Scene {
        let arena = self.sim.arena();
        let ball = self.sim.ball();
        let mut scene = Scene::new(arena.width, arena.height);

        scene.push(DrawCommand::VideoFrame);
        scene.push(DrawCommand::Circle {
            center: ball.position,
            radius: ball.radius,
            color: Color::GREEN,
        });
        for hand in &detection.hands {
            self.draw_hand(&mut scene, hand, arena);
        }
        if let Some(p) = paddle {
            scene.push(DrawCommand::Line {
                from: p.start,
                to: p.end,
                width: self.render.line_width,
                color: Color::RED,
            });
        }
        scene
    }

    // Dots on every landmark, plus a polyline through consecutive indices.
    fn draw_hand(&self, scene: &mut Scene, hand: &HandLandmarks, arena: &Arena) {
        let points: Vec<_> = hand.points.iter().map(|&l| arena.scale(l)).collect();
        for &center in &points {
            scene.push(DrawCommand::Circle {
                center,
                radius: self.render.hand_point_radius,
                color: Color::BLUE,
            });
        }
        for pair in points.windows(2) {
            scene.push(DrawCommand::Line {
                from: pair[0],
                to: pair[1],
                width: self.render.line_width,
                color: Color::BLUE,
            });
        }
    }
}
