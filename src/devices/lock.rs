use serde::Serialize;

use crate::devices::types::{Device, DeviceId};

/// The front door lock. The bolt motor holds a small standby draw only
/// while engaged.
#[derive(Debug, Clone, Serialize)]
pub struct DoorLock {
    /// Whether the door is locked.
    pub locked: bool,
    /// Rated draw while locked (W).
    pub draw_w: f32,
}

impl DoorLock {
    /// Creates a lock in the UNLOCKED state.
    ///
    /// # Panics
    ///
    /// Panics if `draw_w` is negative.
    pub fn new(draw_w: f32) -> Self {
        assert!(draw_w >= 0.0);
        Self {
            locked: false,
            draw_w,
        }
    }

    /// Flips the lock and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }
}

impl Device for DoorLock {
    fn power_w(&self) -> f32 {
        if self.locked { self.draw_w } else { 0.0 }
    }

    fn id(&self) -> DeviceId {
        DeviceId::Door
    }

    fn status(&self) -> String {
        if self.locked { "LOCKED" } else { "UNLOCKED" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unlocked() {
        let lock = DoorLock::new(5.0);
        assert!(!lock.locked);
        assert_eq!(lock.power_w(), 0.0);
        assert_eq!(lock.status(), "UNLOCKED");
    }

    #[test]
    fn locked_draws_rating() {
        let mut lock = DoorLock::new(5.0);
        assert!(lock.toggle());
        assert_eq!(lock.power_w(), 5.0);
        assert_eq!(lock.status(), "LOCKED");
    }
}
