//! Dashboard application state.

use crate::config::HomeConfig;
use crate::home::clock::{TimeSource, WallClock};
use crate::home::controller::HomeController;
use crate::home::types::{Command, Snapshot};

/// Setpoint step per arrow-key press (°C).
pub const SETPOINT_STEP_C: f32 = 0.5;

/// Dashboard application state.
///
/// Owns the engine and caches the snapshot returned by the latest action;
/// the layout renders exclusively from that snapshot.
pub struct App {
    controller: HomeController<WallClock>,
    /// Latest engine snapshot, the single rendering input.
    pub snapshot: Snapshot,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app and takes the initial snapshot.
    pub fn new(config: &HomeConfig) -> Self {
        let controller = HomeController::new(config, WallClock);
        let snapshot = controller.snapshot();
        Self {
            controller,
            snapshot,
            quit: false,
        }
    }

    /// Applies one command and caches the returned snapshot.
    pub fn dispatch(&mut self, command: Command) {
        self.snapshot = self.controller.apply(command);
    }

    /// Moves the thermostat setpoint by `delta_c`; the engine clamps.
    pub fn nudge_setpoint(&mut self, delta_c: f32) {
        let setpoint_c = self.snapshot.devices.thermostat.setpoint_c + delta_c;
        self.dispatch(Command::SetThermostatSetpoint { setpoint_c });
    }

    /// Current wall-clock hour, for the chart highlight.
    pub fn current_hour(&self) -> usize {
        self.controller.clock().hour()
    }

    /// Chart normalization ceiling (never below 1.0).
    pub fn chart_max_w(&self) -> f32 {
        self.controller.history().max_w()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_snapshot_is_all_off() {
        let app = App::new(&HomeConfig::baseline());
        assert_eq!(app.snapshot.power_w, 0.0);
        assert!(!app.quit);
        // startup entry present
        assert_eq!(app.snapshot.log_head.len(), 1);
    }

    #[test]
    fn dispatch_refreshes_snapshot() {
        let mut app = App::new(&HomeConfig::baseline());
        app.dispatch(Command::ToggleLight);
        assert_eq!(app.snapshot.power_w, 60.0);
        assert!(app.snapshot.devices.light.on);
    }

    #[test]
    fn nudge_setpoint_clamps_at_bounds() {
        let mut app = App::new(&HomeConfig::baseline());
        for _ in 0..40 {
            app.nudge_setpoint(SETPOINT_STEP_C);
        }
        assert_eq!(app.snapshot.devices.thermostat.setpoint_c, 30.0);
    }

    #[test]
    fn chart_max_never_below_one() {
        let app = App::new(&HomeConfig::baseline());
        assert!(app.chart_max_w() >= 1.0);
    }
}
