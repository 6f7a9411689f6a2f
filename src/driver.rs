use std::{
    ops::ControlFlow,
    thread,
    time::{Duration, Instant},
};

use crate::{
    clock::{FrameClock, Tick},
    core::FrameIndex,
};

/// Why a [`run`] loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The clock reached its configured bound.
    Ended,
    /// The clock left the Playing state (a transport call from the observer).
    Paused,
    /// The observer broke out of the loop.
    Cancelled,
}

/// Drives a clock the way a display's repaint callback would: one pending
/// evaluation at a time, rescheduled after each pass, with the clock's own
/// elapsed-time gating deciding when a frame actually advances.
///
/// `on_frame` runs once per advanced frame on the calling thread; returning
/// `ControlFlow::Break(())` tears the loop down, and no further callbacks
/// fire after that. A slow observer delays the next evaluation but cannot
/// corrupt clock state.
pub fn run<F>(clock: &mut FrameClock, poll_interval: Duration, mut on_frame: F) -> RunOutcome
where
    F: FnMut(&FrameClock, FrameIndex) -> ControlFlow<()>,
{
    loop {
        match clock.tick(Instant::now()) {
            Tick::Advanced(frame) => {
                if on_frame(clock, frame).is_break() {
                    return RunOutcome::Cancelled;
                }
            }
            Tick::Ended => return RunOutcome::Ended,
            Tick::Idle => {
                if !clock.is_playing() {
                    return RunOutcome::Paused;
                }
            }
        }
        thread::sleep(poll_interval);
    }
}
