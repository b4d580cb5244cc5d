//! Command and snapshot types at the engine boundary.

use serde::{Deserialize, Serialize};

use crate::devices::{DeviceId, DeviceSet};
use crate::home::history::HOURS_PER_DAY;
use crate::home::journal::ActionEntry;

/// One state-change request from the presentation layer.
///
/// Continuous parameters are clamped by the controller, never rejected;
/// the dashboard must not surface an error for a slider drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Flip the living room light.
    ToggleLight,
    /// Flip the front door lock.
    ToggleLock,
    /// Set the thermostat setpoint (°C); clamps to the configured bounds.
    SetThermostatSetpoint {
        /// Requested setpoint (°C).
        setpoint_c: f32,
    },
    /// Flip the thermostat power switch.
    ToggleThermostatPower,
    /// Set the fan speed; clamps to `[0, max]` and truncates to a level.
    SetFanSpeed {
        /// Requested speed level.
        speed: f32,
    },
}

/// Immutable view of the engine after an action, handed to the
/// presentation layer for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Current state of every device.
    pub devices: DeviceSet,
    /// Instantaneous household draw (W).
    pub power_w: f32,
    /// Hourly power history, index = hour of day.
    pub history_w: [f32; HOURS_PER_DAY],
    /// Up to 10 most recent log entries, newest first.
    pub log_head: Vec<ActionEntry>,
}

/// Per-device detail view: state plus the device's recent ledger entries.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceDetail {
    /// Device id.
    pub id: DeviceId,
    /// Human-readable display name.
    pub name: String,
    /// Short status string, e.g. `"ON"` or `"LOCKED"`.
    pub status: String,
    /// This device's instantaneous draw (W).
    pub power_w: f32,
    /// Up to 5 most recent entries for this device, newest first.
    pub recent: Vec<ActionEntry>,
}
