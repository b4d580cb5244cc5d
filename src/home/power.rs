//! Household power computation.

use crate::devices::{Device, DeviceSet};

/// Computes the instantaneous household draw in watts.
///
/// Pure summation of the four per-device contributions, rounded to one
/// decimal place. Inputs are pre-validated by the controller; there is no
/// error path.
///
/// # Arguments
///
/// * `devices` - The current household state
///
/// # Returns
///
/// Total draw in watts, always >= 0.
pub fn total_draw_w(devices: &DeviceSet) -> f32 {
    let sum = devices.light.power_w()
        + devices.door.power_w()
        + devices.thermostat.power_w()
        + devices.fan.power_w();
    (sum * 10.0).round() / 10.0
}

/// Rendering band for a power figure, matching the dashboard chart legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLevel {
    /// Below 50 W.
    Low,
    /// 50 W up to 100 W.
    Medium,
    /// 100 W up to 150 W.
    High,
    /// 150 W and above.
    VeryHigh,
}

impl DrawLevel {
    /// Classifies a power figure into its band.
    pub fn from_power_w(power_w: f32) -> Self {
        if power_w < 50.0 {
            Self::Low
        } else if power_w < 100.0 {
            Self::Medium
        } else if power_w < 150.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HomeConfig;

    fn devices() -> DeviceSet {
        DeviceSet::from_config(&HomeConfig::baseline())
    }

    #[test]
    fn all_off_draws_zero() {
        assert_eq!(total_draw_w(&devices()), 0.0);
    }

    #[test]
    fn light_alone() {
        let mut d = devices();
        d.light.toggle();
        assert_eq!(total_draw_w(&d), 60.0);
    }

    #[test]
    fn lock_alone() {
        let mut d = devices();
        d.door.toggle();
        assert_eq!(total_draw_w(&d), 5.0);
    }

    #[test]
    fn thermostat_at_balance_point() {
        let mut d = devices();
        d.thermostat.toggle();
        d.thermostat.set_setpoint(20.0);
        assert_eq!(total_draw_w(&d), 50.0);
    }

    #[test]
    fn thermostat_at_lower_bound() {
        let mut d = devices();
        d.thermostat.toggle();
        d.thermostat.set_setpoint(15.0);
        assert_eq!(total_draw_w(&d), 100.0);
    }

    #[test]
    fn fan_at_top_speed() {
        let mut d = devices();
        d.fan.set_speed(3.0);
        assert_eq!(total_draw_w(&d), 90.0);
    }

    #[test]
    fn everything_on_sums_contributions() {
        let mut d = devices();
        d.light.toggle();
        d.door.toggle();
        d.thermostat.toggle();
        d.thermostat.set_setpoint(22.0);
        d.fan.set_speed(2.0);
        // 60 + 5 + (50 + 10*2) + 60
        assert_eq!(total_draw_w(&d), 195.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        let mut d = devices();
        d.thermostat.toggle();
        d.thermostat.set_setpoint(20.55);
        // 50 + 10*0.55 = 55.5 exactly after rounding
        assert_eq!(total_draw_w(&d), 55.5);
    }

    #[test]
    fn deterministic_for_same_state() {
        let mut d = devices();
        d.light.toggle();
        d.fan.set_speed(1.0);
        assert_eq!(total_draw_w(&d), total_draw_w(&d));
    }

    #[test]
    fn draw_level_bands() {
        assert_eq!(DrawLevel::from_power_w(0.0), DrawLevel::Low);
        assert_eq!(DrawLevel::from_power_w(49.9), DrawLevel::Low);
        assert_eq!(DrawLevel::from_power_w(50.0), DrawLevel::Medium);
        assert_eq!(DrawLevel::from_power_w(99.9), DrawLevel::Medium);
        assert_eq!(DrawLevel::from_power_w(100.0), DrawLevel::High);
        assert_eq!(DrawLevel::from_power_w(150.0), DrawLevel::VeryHigh);
    }
}
