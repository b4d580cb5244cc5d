//! Controller that orchestrates device mutation, power, history, and log.

use crate::config::HomeConfig;
use crate::devices::{Device, DeviceId, DeviceSet};
use crate::home::clock::TimeSource;
use crate::home::history::PowerHistory;
use crate::home::journal::{ActionEntry, ActionLog, DETAIL_LOG_LEN, SNAPSHOT_LOG_LEN};
use crate::home::power::total_draw_w;
use crate::home::types::{Command, DeviceDetail, Snapshot};

/// Fixed actor label; this system has no multi-user identity.
const ACTOR: &str = "User";

/// Controller owning all engine state for the lifetime of the session.
///
/// Generic over `C: TimeSource` for static dispatch, so tests inject a
/// deterministic clock instead of relying on real time. Every command runs
/// the same fixed sequence: mutate, recompute power, record history,
/// append to the log, return the snapshot. The sequence is never reordered
/// or partially applied.
pub struct HomeController<C: TimeSource> {
    devices: DeviceSet,
    history: PowerHistory,
    log: ActionLog,
    clock: C,
}

impl<C: TimeSource> HomeController<C> {
    /// Creates the controller with all devices OFF and records the startup
    /// entry, seeding the current hour's history slot.
    pub fn new(config: &HomeConfig, clock: C) -> Self {
        let mut controller = Self {
            devices: DeviceSet::from_config(config),
            history: PowerHistory::new(),
            log: ActionLog::new(),
            clock,
        };
        controller.commit(DeviceId::System, "Initialized - All devices OFF".to_string());
        controller
    }

    /// Applies one command and returns the updated snapshot.
    ///
    /// # Arguments
    ///
    /// * `command` - The state-change request; out-of-range continuous
    ///   values clamp to the nearest bound rather than failing
    pub fn apply(&mut self, command: Command) -> Snapshot {
        // 1. Validate and apply the mutation
        let (device, action) = match command {
            Command::ToggleLight => {
                let on = self.devices.light.toggle();
                let action = if on { "Turn ON" } else { "Turn OFF" };
                (DeviceId::Light, action.to_string())
            }
            Command::ToggleLock => {
                let locked = self.devices.door.toggle();
                let action = if locked { "Lock" } else { "Unlock" };
                (DeviceId::Door, action.to_string())
            }
            Command::SetThermostatSetpoint { setpoint_c } => {
                let stored = self.devices.thermostat.set_setpoint(setpoint_c);
                (DeviceId::Thermostat, format!("Set to {stored:.1}°C"))
            }
            Command::ToggleThermostatPower => {
                let on = self.devices.thermostat.toggle();
                let action = if on { "Turn ON" } else { "Turn OFF" };
                (DeviceId::Thermostat, action.to_string())
            }
            Command::SetFanSpeed { speed } => {
                let stored = self.devices.fan.set_speed(speed);
                (DeviceId::Fan, format!("Speed set to {stored}"))
            }
        };

        // 2-4. Recompute power, record history, append to the log
        self.commit(device, action);

        // 5. Hand the updated snapshot back
        self.snapshot()
    }

    /// Post-mutation tail of every action: recompute power, overwrite the
    /// current hour's history slot, prepend the ledger entry.
    fn commit(&mut self, device: DeviceId, action: String) {
        let power_w = total_draw_w(&self.devices);
        self.history.record(self.clock.hour(), power_w);
        self.log.record(ActionEntry {
            time: self.clock.timestamp(),
            device,
            action,
            user: ACTOR.to_string(),
        });
    }

    /// Current snapshot, also available on demand for the initial render.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            devices: self.devices.clone(),
            power_w: total_draw_w(&self.devices),
            history_w: self.history.snapshot(),
            log_head: self.log.recent(SNAPSHOT_LOG_LEN).cloned().collect(),
        }
    }

    /// Detail view for one device: state plus its recent ledger entries.
    ///
    /// Returns `None` for [`DeviceId::System`], which is a valid ledger id
    /// but not a device.
    pub fn device_detail(&self, id: DeviceId) -> Option<DeviceDetail> {
        let status = self.devices.status(id)?;
        let power_w = self.devices.power_w(id)?;
        Some(DeviceDetail {
            id,
            name: id.display_name().to_string(),
            status,
            power_w,
            recent: self.log.for_device(id).take(DETAIL_LOG_LEN).cloned().collect(),
        })
    }

    /// Instantaneous household draw (W).
    pub fn power_w(&self) -> f32 {
        total_draw_w(&self.devices)
    }

    /// Returns a reference to the device set.
    pub fn devices(&self) -> &DeviceSet {
        &self.devices
    }

    /// Returns a reference to the hourly history.
    pub fn history(&self) -> &PowerHistory {
        &self.history
    }

    /// Returns a reference to the action log.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Returns a reference to the injected time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::clock::FixedClock;

    fn controller_at(hour: usize) -> HomeController<FixedClock> {
        HomeController::new(&HomeConfig::baseline(), FixedClock::new(hour))
    }

    #[test]
    fn init_records_startup_entry_and_seeds_history() {
        let ctl = controller_at(10);
        assert_eq!(ctl.log().len(), 1);
        let head = ctl.snapshot().log_head;
        assert_eq!(head[0].device, DeviceId::System);
        assert_eq!(head[0].action, "Initialized - All devices OFF");
        assert_eq!(head[0].user, "User");
        // seeded with the all-off power figure
        assert_eq!(ctl.history().snapshot()[10], 0.0);
        assert_eq!(ctl.power_w(), 0.0);
    }

    #[test]
    fn toggle_light_updates_power_history_and_log() {
        let mut ctl = controller_at(14);
        let snap = ctl.apply(Command::ToggleLight);

        assert!(snap.devices.light.on);
        assert_eq!(snap.power_w, 60.0);
        assert_eq!(snap.history_w[14], 60.0);
        assert_eq!(snap.log_head[0].action, "Turn ON");
        assert_eq!(snap.log_head[0].device, DeviceId::Light);
        assert_eq!(snap.log_head[0].time, "14:00:00");
    }

    #[test]
    fn double_toggle_returns_power_to_zero() {
        let mut ctl = controller_at(14);
        ctl.apply(Command::ToggleLight);
        let snap = ctl.apply(Command::ToggleLight);

        assert_eq!(snap.power_w, 0.0);
        let actions: Vec<&str> = snap.log_head.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions[0], "Turn OFF");
        assert_eq!(actions[1], "Turn ON");
    }

    #[test]
    fn lock_actions_use_lock_unlock_wording() {
        let mut ctl = controller_at(8);
        let snap = ctl.apply(Command::ToggleLock);
        assert_eq!(snap.log_head[0].action, "Lock");
        let snap = ctl.apply(Command::ToggleLock);
        assert_eq!(snap.log_head[0].action, "Unlock");
    }

    #[test]
    fn setpoint_out_of_range_clamps_and_logs_stored_value() {
        let mut ctl = controller_at(8);
        let snap = ctl.apply(Command::SetThermostatSetpoint { setpoint_c: 40.0 });
        assert_eq!(snap.devices.thermostat.setpoint_c, 30.0);
        assert_eq!(snap.log_head[0].action, "Set to 30.0°C");
    }

    #[test]
    fn fan_fractional_request_truncates() {
        let mut ctl = controller_at(8);
        let snap = ctl.apply(Command::SetFanSpeed { speed: 2.6 });
        assert_eq!(snap.devices.fan.speed, 2);
        assert_eq!(snap.log_head[0].action, "Speed set to 2");
        assert_eq!(snap.power_w, 60.0);
    }

    #[test]
    fn same_hour_actions_collapse_to_last_power() {
        let mut ctl = controller_at(14);
        ctl.apply(Command::ToggleLight); // 60 W
        let snap = ctl.apply(Command::SetFanSpeed { speed: 3.0 }); // 150 W
        assert_eq!(snap.history_w[14], 150.0);
    }

    #[test]
    fn actions_in_different_hours_fill_their_own_slots() {
        let mut ctl = controller_at(9);
        ctl.apply(Command::ToggleLight);
        ctl.clock().set_hour(10);
        ctl.apply(Command::SetFanSpeed { speed: 1.0 });

        let history = ctl.history().snapshot();
        assert_eq!(history[9], 60.0);
        assert_eq!(history[10], 90.0);
    }

    #[test]
    fn snapshot_log_head_caps_at_ten() {
        let mut ctl = controller_at(12);
        for _ in 0..12 {
            ctl.apply(Command::ToggleLight);
        }
        let snap = ctl.snapshot();
        assert_eq!(snap.log_head.len(), 10);
        // 13 total entries recorded (init + 12 toggles)
        assert_eq!(ctl.log().len(), 13);
    }

    #[test]
    fn device_detail_filters_to_five_entries() {
        let mut ctl = controller_at(12);
        for _ in 0..7 {
            ctl.apply(Command::ToggleLight);
        }
        ctl.apply(Command::ToggleLock);

        let detail = ctl.device_detail(DeviceId::Light).expect("light detail");
        assert_eq!(detail.name, "Living Room Light");
        assert_eq!(detail.recent.len(), 5);
        assert!(detail.recent.iter().all(|e| e.device == DeviceId::Light));
    }

    #[test]
    fn device_detail_for_system_is_none() {
        let ctl = controller_at(12);
        assert!(ctl.device_detail(DeviceId::System).is_none());
    }

    #[test]
    fn thermostat_power_and_setpoint_compose() {
        let mut ctl = controller_at(18);
        ctl.apply(Command::ToggleThermostatPower);
        let snap = ctl.apply(Command::SetThermostatSetpoint { setpoint_c: 25.0 });
        // 50 + 10 * |25 - 20|
        assert_eq!(snap.power_w, 100.0);
        assert_eq!(snap.history_w[18], 100.0);
    }
}
