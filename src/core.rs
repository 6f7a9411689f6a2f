use crate::error::{PlayheadError, PlayheadResult};

pub use kurbo::{Point, Vec2};

/// Discrete playback position. Signed: seeking may store negative frames.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

impl FrameIndex {
    pub const ZERO: Self = Self(0);
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Target frames advanced per second of wall-clock time, as a rational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> PlayheadResult<Self> {
        if den == 0 {
            return Err(PlayheadError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PlayheadError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Milliseconds of wall-clock time covered by a single frame.
    pub fn frame_interval_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Timeline time in milliseconds at a given frame. Negative frames map to
    /// negative time.
    pub fn frames_to_ms(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_interval_ms()
    }

    /// Smallest whole frame count covering `ms` milliseconds.
    pub fn ms_to_frames_ceil(self, ms: f64) -> i64 {
        (ms / self.frame_interval_ms()).ceil().max(0.0) as i64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}
