pub mod geometry;
pub mod landmarks;
pub mod render;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::geometry::Vec2;
    use crate::landmarks::{DetectionFrame, HandLandmarks, INDEX_FINGER_TIP, LANDMARK_COUNT, Landmark};
    use crate::render::{DrawCommand, Renderer, Scene};

    /// A full 21-point hand with every landmark at the given normalized
    /// position except the index fingertip, which is placed at `tip`.
    pub fn hand_with_tip(tip: (f32, f32)) -> HandLandmarks {
        let mut points = vec![Landmark::new(tip.0, tip.1 + 0.05); LANDMARK_COUNT];
        points[INDEX_FINGER_TIP] = Landmark::new(tip.0, tip.1);
        HandLandmarks::new(points)
    }

    /// A detection frame with one hand per fingertip position.
    pub fn frame_with_tips(tips: &[(f32, f32)]) -> DetectionFrame {
        DetectionFrame::new(tips.iter().map(|&t| hand_with_tip(t)).collect())
    }

    /// Renderer that keeps every scene it was handed.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub scenes: Vec<Scene>,
    }

    impl RecordingRenderer {
        pub fn last(&self) -> Option<&Scene> {
            self.scenes.last()
        }

        /// Circles drawn in the most recent scene.
        pub fn last_circles(&self) -> Vec<(Vec2, f32)> {
            self.last()
                .map(|s| {
                    s.commands
                        .iter()
                        .filter_map(|c| match c {
                            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                            _ => None,
                        })
                        .collect()
                })
                .unwrap_or_default()
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, scene: &Scene) {
            self.scenes.push(scene.clone());
        }
    }
}
