use serde::Serialize;

use crate::devices::types::{Device, DeviceId};

/// Setpoint at which the thermostat draws only its base load (°C).
pub const BALANCE_POINT_C: f32 = 20.0;

/// A thermostat with an on/off switch and a continuous setpoint.
///
/// While on, draw grows linearly with the distance between the setpoint and
/// [`BALANCE_POINT_C`]: `base_draw_w + per_degree_w * |setpoint_c - 20.0|`.
/// While off the thermostat draws nothing, whatever the setpoint.
///
/// Setpoint requests outside `[min_setpoint_c, max_setpoint_c]` clamp to
/// the nearest bound rather than failing; a slider drag must never surface
/// an error.
#[derive(Debug, Clone, Serialize)]
pub struct Thermostat {
    /// Whether the thermostat is powered on.
    pub on: bool,

    /// Current setpoint (°C), always within the configured bounds.
    pub setpoint_c: f32,

    /// Base draw while on (W).
    pub base_draw_w: f32,

    /// Additional draw per degree of distance from the balance point (W/°C).
    pub per_degree_w: f32,

    /// Lowest accepted setpoint (°C).
    min_setpoint_c: f32,

    /// Highest accepted setpoint (°C).
    max_setpoint_c: f32,
}

impl Thermostat {
    /// Creates a thermostat in the OFF state at the initial setpoint.
    ///
    /// # Arguments
    ///
    /// * `base_draw_w` - Base draw while on (W, must be >= 0)
    /// * `per_degree_w` - Draw per degree of setpoint distance (W/°C, >= 0)
    /// * `min_setpoint_c` - Lower setpoint bound (°C)
    /// * `max_setpoint_c` - Upper setpoint bound (°C, must be > min)
    /// * `initial_setpoint_c` - Starting setpoint (°C, within bounds)
    ///
    /// # Panics
    ///
    /// Panics if a draw parameter is negative, the bounds are inverted, or
    /// the initial setpoint lies outside the bounds.
    pub fn new(
        base_draw_w: f32,
        per_degree_w: f32,
        min_setpoint_c: f32,
        max_setpoint_c: f32,
        initial_setpoint_c: f32,
    ) -> Self {
        assert!(base_draw_w >= 0.0 && per_degree_w >= 0.0);
        assert!(min_setpoint_c < max_setpoint_c);
        assert!((min_setpoint_c..=max_setpoint_c).contains(&initial_setpoint_c));

        Self {
            on: false,
            setpoint_c: initial_setpoint_c,
            base_draw_w,
            per_degree_w,
            min_setpoint_c,
            max_setpoint_c,
        }
    }

    /// Flips the power switch and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Applies a setpoint request, clamping to the nearest bound, and
    /// returns the value actually stored.
    pub fn set_setpoint(&mut self, requested_c: f32) -> f32 {
        self.setpoint_c = requested_c.clamp(self.min_setpoint_c, self.max_setpoint_c);
        self.setpoint_c
    }

    /// Lower setpoint bound (°C).
    pub fn min_setpoint_c(&self) -> f32 {
        self.min_setpoint_c
    }

    /// Upper setpoint bound (°C).
    pub fn max_setpoint_c(&self) -> f32 {
        self.max_setpoint_c
    }
}

impl Device for Thermostat {
    fn power_w(&self) -> f32 {
        if self.on {
            self.base_draw_w + self.per_degree_w * (self.setpoint_c - BALANCE_POINT_C).abs()
        } else {
            0.0
        }
    }

    fn id(&self) -> DeviceId {
        DeviceId::Thermostat
    }

    fn status(&self) -> String {
        if self.on {
            format!("ON, set to {:.1}°C", self.setpoint_c)
        } else {
            format!("OFF, set to {:.1}°C", self.setpoint_c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thermostat() -> Thermostat {
        Thermostat::new(50.0, 10.0, 15.0, 30.0, 22.0)
    }

    #[test]
    fn off_draws_nothing_regardless_of_setpoint() {
        let mut t = thermostat();
        t.set_setpoint(30.0);
        assert_eq!(t.power_w(), 0.0);
    }

    #[test]
    fn base_draw_at_balance_point() {
        let mut t = thermostat();
        t.toggle();
        t.set_setpoint(20.0);
        assert_eq!(t.power_w(), 50.0);
    }

    #[test]
    fn draw_grows_with_setpoint_distance() {
        let mut t = thermostat();
        t.toggle();
        // 15°C is 5 degrees below the balance point: 50 + 10*5
        t.set_setpoint(15.0);
        assert_eq!(t.power_w(), 100.0);
        // 25°C is 5 degrees above: same draw
        t.set_setpoint(25.0);
        assert_eq!(t.power_w(), 100.0);
    }

    #[test]
    fn setpoint_clamps_to_upper_bound() {
        let mut t = thermostat();
        assert_eq!(t.set_setpoint(40.0), 30.0);
        assert_eq!(t.setpoint_c, 30.0);
    }

    #[test]
    fn setpoint_clamps_to_lower_bound() {
        let mut t = thermostat();
        assert_eq!(t.set_setpoint(-5.0), 15.0);
        assert_eq!(t.setpoint_c, 15.0);
    }

    #[test]
    fn in_range_setpoint_stored_exactly() {
        let mut t = thermostat();
        assert_eq!(t.set_setpoint(24.5), 24.5);
    }

    #[test]
    #[should_panic]
    fn inverted_bounds_panic() {
        Thermostat::new(50.0, 10.0, 30.0, 15.0, 22.0);
    }

    #[test]
    #[should_panic]
    fn initial_setpoint_outside_bounds_panics() {
        Thermostat::new(50.0, 10.0, 15.0, 30.0, 40.0);
    }
}
