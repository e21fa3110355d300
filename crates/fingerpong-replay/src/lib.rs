//! Drives the paddle simulation from recorded detection frames, one JSON
//! object per line, standing in for the live camera and hand tracker.

pub mod error;

use std::io::{BufRead, Write};

use serde::Serialize;

use fingerpong_core::geometry::Segment;
use fingerpong_core::landmarks::DetectionFrame;
use fingerpong_core::render::{Renderer, Scene};
use fingerpong_paddle::{FrameController, TickReport};

pub use error::ReplayError;

/// What gets written per processed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One [`BallSnapshot`] per frame.
    #[default]
    Snapshots,
    /// The full draw [`Scene`] per frame.
    Scenes,
}

/// Ball state after a tick, as emitted on the output stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallSnapshot {
    pub frame: u64,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub dx: f32,
    pub dy: f32,
    pub paddle: Option<Segment>,
}

impl BallSnapshot {
    fn capture(controller: &FrameController, report: &TickReport) -> Self {
        let ball = controller.simulation().ball();
        Self {
            frame: report.frame,
            x: ball.position.x,
            y: ball.position.y,
            radius: ball.radius,
            dx: ball.velocity.x,
            dy: ball.velocity.y,
            paddle: report.paddle,
        }
    }
}

/// Totals for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: u64,
    pub wall_bounces: u64,
    pub paddle_hits: u64,
    /// Frames in which a paddle was present.
    pub paddle_frames: u64,
}

impl ReplaySummary {
    fn record(&mut self, report: &TickReport) {
        self.frames += 1;
        if report.outcome.wall.any() {
            self.wall_bounces += 1;
        }
        if report.outcome.paddle_hit {
            self.paddle_hits += 1;
        }
        if report.paddle.is_some() {
            self.paddle_frames += 1;
        }
    }
}

/// Keeps only the most recent scene.
#[derive(Debug, Default)]
struct LatestScene(Option<Scene>);

impl Renderer for LatestScene {
    fn render(&mut self, scene: &Scene) {
        self.0 = Some(scene.clone());
    }
}

/// Run every frame from `input` through `controller`, writing one JSON line
/// per frame to `output`. Blank lines are skipped; a malformed line stops the
/// replay with its line number.
pub fn run_replay<I: BufRead, O: Write>(
    controller: &mut FrameController,
    input: I,
    mut output: O,
    mode: OutputMode,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    let mut renderer = LatestScene::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: DetectionFrame =
            serde_json::from_str(&line).map_err(|e| ReplayError::Parse {
                line: idx + 1,
                message: e.to_string(),
            })?;

        let report = controller.tick(&frame, &mut renderer);
        summary.record(&report);

        let encoded = match mode {
            OutputMode::Snapshots => {
                serde_json::to_string(&BallSnapshot::capture(controller, &report))
            },
            OutputMode::Scenes => serde_json::to_string(&renderer.0),
        }
        .map_err(|e| ReplayError::Serialize(e.to_string()))?;
        writeln!(output, "{encoded}")?;
    }

    output.flush()?;
    tracing::info!(
        frames = summary.frames,
        wall_bounces = summary.wall_bounces,
        paddle_hits = summary.paddle_hits,
        paddle_frames = summary.paddle_frames,
        "Replay finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerpong_paddle::PaddleConfig;

    fn controller() -> FrameController {
        let mut cfg = PaddleConfig::default();
        cfg.render.mirror = false;
        FrameController::from_config(&cfg)
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut c = controller();
        let input = "{}\n\n   \n{\"hands\":[]}\n";
        let mut out = Vec::new();
        let summary =
            run_replay(&mut c, input.as_bytes(), &mut out, OutputMode::Snapshots).expect("ok");
        assert_eq!(summary.frames, 2);
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 2);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let mut c = controller();
        let input = "{}\n{not json\n";
        let err = run_replay(&mut c, input.as_bytes(), Vec::new(), OutputMode::Snapshots)
            .expect_err("second line is malformed");
        match err {
            ReplayError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert_eq!(c.frames(), 1, "frames before the bad line were processed");
    }

    #[test]
    fn scene_mode_writes_draw_commands() {
        let mut c = controller();
        let mut out = Vec::new();
        run_replay(&mut c, "{}\n".as_bytes(), &mut out, OutputMode::Scenes).expect("ok");
        let v: serde_json::Value =
            serde_json::from_slice(&out).expect("scene line is valid json");
        assert_eq!(v["width"], 720.0);
        assert_eq!(v["commands"][0]["kind"], "video_frame");
        assert_eq!(v["commands"][1]["kind"], "circle");
    }
}
