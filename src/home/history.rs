//! Hourly power history.

/// Number of slots in the hourly history.
pub const HOURS_PER_DAY: usize = 24;

/// Fixed 24-slot power history keyed by hour-of-day.
///
/// Slot `h` holds the power computed at the most recent action during hour
/// `h` since process start; untouched slots stay at 0. Slots are
/// overwritten in place, never accumulated: only the latest power state per
/// hour matters for a live dashboard, while the full audit trail lives in
/// the action log.
#[derive(Debug, Clone)]
pub struct PowerHistory {
    slots: [f32; HOURS_PER_DAY],
}

impl Default for PowerHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerHistory {
    /// Creates an all-zero history.
    pub fn new() -> Self {
        Self {
            slots: [0.0; HOURS_PER_DAY],
        }
    }

    /// Overwrites the slot for the given hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in `[0, 23]`; an out-of-range hour is a
    /// caller contract violation, not a runtime condition.
    pub fn record(&mut self, hour: usize, power_w: f32) {
        assert!(hour < HOURS_PER_DAY, "hour index {hour} out of range");
        self.slots[hour] = power_w;
    }

    /// Read-only copy of all 24 slots, index = hour of day.
    pub fn snapshot(&self) -> [f32; HOURS_PER_DAY] {
        self.slots
    }

    /// Maximum slot value, floored at 1.0 when every slot is zero so chart
    /// normalization never divides by zero.
    pub fn max_w(&self) -> f32 {
        let max = self.slots.iter().copied().fold(0.0_f32, f32::max);
        if max > 0.0 { max } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_zero() {
        let history = PowerHistory::new();
        assert_eq!(history.snapshot(), [0.0; HOURS_PER_DAY]);
    }

    #[test]
    fn record_overwrites_slot() {
        let mut history = PowerHistory::new();
        history.record(14, 65.0);
        history.record(14, 125.0);
        let slots = history.snapshot();
        assert_eq!(slots[14], 125.0);
        // other slots untouched
        assert_eq!(slots[13], 0.0);
        assert_eq!(slots[15], 0.0);
    }

    #[test]
    fn max_of_empty_history_is_one() {
        let history = PowerHistory::new();
        assert_eq!(history.max_w(), 1.0);
    }

    #[test]
    fn max_tracks_largest_slot() {
        let mut history = PowerHistory::new();
        history.record(0, 60.0);
        history.record(23, 195.0);
        assert_eq!(history.max_w(), 195.0);
    }

    #[test]
    fn sub_unit_max_is_not_floored() {
        let mut history = PowerHistory::new();
        history.record(3, 0.5);
        assert_eq!(history.max_w(), 0.5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_hour_panics() {
        let mut history = PowerHistory::new();
        history.record(24, 10.0);
    }
}
