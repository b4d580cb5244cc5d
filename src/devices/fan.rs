use serde::Serialize;

use crate::devices::types::{Device, DeviceId};

/// A ceiling fan with discrete speed levels 0 (off) through `max_speed`.
///
/// Draw scales linearly with the level: `per_level_w * speed`. Speed
/// requests arrive as floats from slider widgets; they clamp to
/// `[0, max_speed]` and then truncate to an integer level.
#[derive(Debug, Clone, Serialize)]
pub struct CeilingFan {
    /// Current speed level, 0 = off.
    pub speed: u8,
    /// Draw per speed level (W).
    pub per_level_w: f32,
    /// Highest speed level.
    pub max_speed: u8,
}

impl CeilingFan {
    /// Creates a fan at speed 0.
    ///
    /// # Panics
    ///
    /// Panics if `per_level_w` is negative or `max_speed` is zero.
    pub fn new(per_level_w: f32, max_speed: u8) -> Self {
        assert!(per_level_w >= 0.0);
        assert!(max_speed > 0);
        Self {
            speed: 0,
            per_level_w,
            max_speed,
        }
    }

    /// Applies a speed request: clamp to `[0, max_speed]`, then truncate to
    /// an integer level. Returns the level actually stored.
    pub fn set_speed(&mut self, requested: f32) -> u8 {
        let clamped = requested.clamp(0.0, f32::from(self.max_speed));
        // `as` truncates toward zero, which is the wanted fractional policy
        self.speed = clamped as u8;
        self.speed
    }
}

impl Device for CeilingFan {
    fn power_w(&self) -> f32 {
        self.per_level_w * f32::from(self.speed)
    }

    fn id(&self) -> DeviceId {
        DeviceId::Fan
    }

    fn status(&self) -> String {
        format!("speed {}", self.speed)
    }
}
