use std::time::Instant;

use crate::{
    core::{FrameIndex, Fps},
    error::{PlayheadError, PlayheadResult},
};

/// Construction parameters for a [`FrameClock`].
#[derive(Clone, Copy, Debug)]
pub struct ClockConfig {
    pub fps: Fps,
    pub initial_frame: FrameIndex,
    /// Upper bound on natural advancement. `None` means the clock runs
    /// indefinitely unless stopped.
    pub duration_in_frames: Option<u64>,
    /// Start in the Playing state, matching a timeline that begins playback
    /// on mount.
    pub autoplay: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            initial_frame: FrameIndex::ZERO,
            duration_in_frames: None,
            autoplay: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transport {
    Stopped,
    Playing,
    Ended,
}

/// Outcome of a single [`FrameClock::tick`], so a host loop knows whether
/// anything changed since the last callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not playing, or not enough wall-clock time has elapsed yet.
    Idle,
    /// The frame counter advanced by one.
    Advanced(FrameIndex),
    /// Advancing would have exceeded the bound; the clock is now Ended.
    Ended,
}

/// Playback clock stepping an integer frame counter at a target rate.
///
/// The clock does no scheduling of its own: the host calls [`tick`] from its
/// repaint callback with a monotonic timestamp, and the clock compares
/// elapsed wall-clock time against `1000/fps` ms to decide whether to
/// advance. Riding the repaint callback rather than a fixed timer keeps the
/// emitted frame rate tracking wall-clock time even when the callback fires
/// faster or slower than `fps` (on a 120 Hz display at a 60 fps target, only
/// every other callback advances).
///
/// Transport is {Stopped, Playing, Ended}; `is_playing` and `is_ended` can
/// never both be true.
///
/// [`tick`]: FrameClock::tick
#[derive(Clone, Debug)]
pub struct FrameClock {
    fps: Fps,
    frame: i64,
    duration_in_frames: Option<i64>,
    transport: Transport,
    /// Wall-clock instant of the last accepted advance (or of entering
    /// Playing). `None` whenever not playing; re-armed lazily on the first
    /// tick after play.
    baseline: Option<Instant>,
}

impl FrameClock {
    pub fn new(config: ClockConfig) -> PlayheadResult<Self> {
        // Fps fields are public; re-validate rather than trust construction.
        if config.fps.num == 0 || config.fps.den == 0 {
            return Err(PlayheadError::validation("clock fps must be > 0"));
        }
        let duration_in_frames = match config.duration_in_frames {
            Some(d) => Some(i64::try_from(d).map_err(|_| {
                PlayheadError::validation("duration_in_frames does not fit in i64")
            })?),
            None => None,
        };

        let transport = if config.autoplay {
            Transport::Playing
        } else {
            Transport::Stopped
        };

        Ok(Self {
            fps: config.fps,
            frame: config.initial_frame.0,
            duration_in_frames,
            transport,
            baseline: None,
        })
    }

    pub fn frame(&self) -> FrameIndex {
        FrameIndex(self.frame)
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn duration_in_frames(&self) -> Option<i64> {
        self.duration_in_frames
    }

    /// Timeline time at the current frame, always derived from the counter.
    pub fn current_ms(&self) -> f64 {
        self.fps.frames_to_ms(self.frame())
    }

    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    pub fn is_ended(&self) -> bool {
        self.transport == Transport::Ended
    }

    /// Resumes playback. No-op while already playing, and a no-op in the
    /// Ended state: a consumer must seek back into range first.
    pub fn play(&mut self) {
        if self.transport != Transport::Stopped {
            return;
        }
        tracing::debug!(frame = self.frame, "play");
        self.transport = Transport::Playing;
        self.baseline = None;
    }

    /// Pauses playback. No-op unless playing.
    pub fn stop(&mut self) {
        if self.transport != Transport::Playing {
            return;
        }
        tracing::debug!(frame = self.frame, "stop");
        self.transport = Transport::Stopped;
        self.baseline = None;
    }

    /// Moves the playhead to `target` verbatim, without clamping, and always
    /// pauses. The position only lands in Ended when a bound is configured
    /// and `target` reaches it; anything else (including negative frames)
    /// leaves a Stopped clock.
    pub fn seek(&mut self, target: FrameIndex) {
        self.frame = target.0;
        self.baseline = None;
        self.transport = match self.duration_in_frames {
            Some(d) if target.0 >= d => Transport::Ended,
            _ => Transport::Stopped,
        };
        tracing::debug!(frame = self.frame, ended = self.is_ended(), "seek");
    }

    /// One evaluation of the advancement logic, to be called once per host
    /// repaint callback with a monotonic `now`.
    ///
    /// Advances the frame counter by exactly 1 when at least `1000/fps` ms
    /// of wall-clock time has accumulated since the last accepted advance,
    /// then resets that baseline to `now`. When a bound is configured and the
    /// increment would exceed it, the clock transitions to Ended and the
    /// counter is left unchanged.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.transport != Transport::Playing {
            return Tick::Idle;
        }

        let baseline = *self.baseline.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(baseline).as_secs_f64() * 1000.0;
        if elapsed_ms < self.fps.frame_interval_ms() {
            return Tick::Idle;
        }

        if let Some(d) = self.duration_in_frames
            && self.frame + 1 > d
        {
            tracing::debug!(frame = self.frame, "reached end of range");
            self.transport = Transport::Ended;
            self.baseline = None;
            return Tick::Ended;
        }

        self.frame += 1;
        self.baseline = Some(now);
        Tick::Advanced(FrameIndex(self.frame))
    }
}
