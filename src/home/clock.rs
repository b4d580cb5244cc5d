//! Time sources for the controller.
//!
//! The engine never reads the system clock directly; it asks an injected
//! [`TimeSource`] for the current hour and timestamp so tests can pin time
//! deterministically.

use std::cell::Cell;

use chrono::{Local, Timelike};

use crate::home::history::HOURS_PER_DAY;

/// Provides the current hour-of-day and a formatted time-of-day string.
pub trait TimeSource {
    /// Current hour of day in `[0, 23]`.
    fn hour(&self) -> usize;

    /// Current time of day formatted as `HH:MM:SS`.
    fn timestamp(&self) -> String;
}

/// Wall-clock time source backed by the local civil clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn hour(&self) -> usize {
        Local::now().hour() as usize
    }

    fn timestamp(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// Deterministic time source for tests and demos.
///
/// Holds a fixed hour that callers can move forward with [`set_hour`]
/// without needing mutable access to the owning controller.
///
/// # Examples
///
/// ```
/// use home_sim::home::clock::{FixedClock, TimeSource};
///
/// let clock = FixedClock::new(14);
/// assert_eq!(clock.hour(), 14);
/// assert_eq!(clock.timestamp(), "14:00:00");
/// ```
///
/// [`set_hour`]: FixedClock::set_hour
#[derive(Debug, Clone)]
pub struct FixedClock {
    hour: Cell<usize>,
}

impl FixedClock {
    /// Creates a clock pinned to the given hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in `[0, 23]`.
    pub fn new(hour: usize) -> Self {
        assert!(hour < HOURS_PER_DAY, "hour must be in [0, 23]");
        Self {
            hour: Cell::new(hour),
        }
    }

    /// Moves the clock to a new hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in `[0, 23]`.
    pub fn set_hour(&self, hour: usize) {
        assert!(hour < HOURS_PER_DAY, "hour must be in [0, 23]");
        self.hour.set(hour);
    }
}

impl TimeSource for FixedClock {
    fn hour(&self) -> usize {
        self.hour.get()
    }

    fn timestamp(&self) -> String {
        format!("{:02}:00:00", self.hour.get())
    }
}
