//! Monotonic time sources for the animation schedule.
//!
//! Time is expressed as a [`Duration`] since the clock's origin. The animator
//! only ever compares and subtracts these values, so the origin is arbitrary.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Source of "now" for the animator's event-loop turns.
pub trait FrameClock {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock. Clones share the same time cell, so a test can
/// keep one handle while the animator owns another.
#[derive(Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.elapsed.set(self.elapsed.get() + delta);
    }

    /// Jump to an absolute time. Going backwards is allowed but the animator
    /// treats earlier deadlines as already due.
    pub fn set(&self, now: Duration) {
        self.elapsed.set(now);
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed.get())
            .finish()
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}
