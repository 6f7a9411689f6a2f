#![forbid(unsafe_code)]

pub mod clock;
pub mod core;
pub mod driver;
pub mod ease;
pub mod error;
pub mod eval;
pub mod interp;
pub mod model;

pub use clock::{ClockConfig, FrameClock, Tick};
pub use crate::core::{FrameIndex, Fps, Point, Vec2};
pub use ease::Ease;
pub use error::{PlayheadError, PlayheadResult};
pub use eval::{EvaluatedFrame, EvaluatedNode, Evaluator, NodeVisual, eval_node};
pub use interp::{clamp01, interpolate};
pub use model::{Node, Timeline};
