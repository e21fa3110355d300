//! A single ball bouncing inside a rectangular arena, deflected by a paddle
//! stretched between the index fingertips of two tracked hands.

pub mod arena;
pub mod collision;
pub mod config;
pub mod controller;
pub mod physics;

pub use arena::Arena;
pub use config::{ConfigError, PaddleConfig};
pub use controller::{FrameController, TickReport, derive_paddle};
pub use physics::{Ball, BallSimulation, StepOutcome};
