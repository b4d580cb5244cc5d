//! Common types and traits for the household device models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::HomeConfig;
use crate::devices::{CeilingFan, DoorLock, Light, Thermostat};

/// Stable identifier of a device, plus `System` for engine-originated
/// ledger entries.
///
/// The string forms (`light1`, `door1`, `thermostat`, `fan`, `system`) are
/// the wire/ledger representation and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceId {
    /// Living room light.
    #[serde(rename = "light1")]
    Light,
    /// Front door lock.
    #[serde(rename = "door1")]
    Door,
    /// Thermostat.
    #[serde(rename = "thermostat")]
    Thermostat,
    /// Ceiling fan.
    #[serde(rename = "fan")]
    Fan,
    /// The engine itself (startup entry).
    #[serde(rename = "system")]
    System,
}

impl DeviceId {
    /// All controllable device ids, in dashboard order.
    pub const DEVICES: [DeviceId; 4] = [Self::Light, Self::Door, Self::Thermostat, Self::Fan];

    /// Returns the stable string form of this id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light1",
            Self::Door => "door1",
            Self::Thermostat => "thermostat",
            Self::Fan => "fan",
            Self::System => "system",
        }
    }

    /// Parses a stable string form back into an id.
    ///
    /// Returns `None` for anything that is not a known id.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light1" => Some(Self::Light),
            "door1" => Some(Self::Door),
            "thermostat" => Some(Self::Thermostat),
            "fan" => Some(Self::Fan),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Human-readable display name for dashboard cards.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Living Room Light",
            Self::Door => "Front Door",
            Self::Thermostat => "Thermostat",
            Self::Fan => "Ceiling Fan",
            Self::System => "System",
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait shared by every household device model.
///
/// All implementations are pure state holders: reading the power draw never
/// mutates the device, and mutation happens only through the typed setters
/// the controller calls.
pub trait Device {
    /// Instantaneous power draw of this device in watts.
    fn power_w(&self) -> f32;

    /// Identifier of this device.
    fn id(&self) -> DeviceId;

    /// Short status string for detail views (e.g. `"ON"`, `"LOCKED"`).
    fn status(&self) -> String;
}

/// The full household: one typed field per device.
///
/// Typed fields rather than trait objects since the device set is fixed.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceSet {
    /// Living room light.
    pub light: Light,
    /// Front door lock.
    pub door: DoorLock,
    /// Thermostat.
    pub thermostat: Thermostat,
    /// Ceiling fan.
    pub fan: CeilingFan,
}

impl DeviceSet {
    /// Builds the household from a validated configuration, all devices in
    /// their initial OFF/UNLOCKED/speed-0 state.
    pub fn from_config(config: &HomeConfig) -> Self {
        Self {
            light: Light::new(config.light.draw_w),
            door: DoorLock::new(config.door.draw_w),
            thermostat: Thermostat::new(
                config.thermostat.base_draw_w,
                config.thermostat.per_degree_w,
                config.thermostat.min_setpoint_c,
                config.thermostat.max_setpoint_c,
                config.thermostat.initial_setpoint_c,
            ),
            fan: CeilingFan::new(config.fan.per_level_w, config.fan.max_speed),
        }
    }

    /// Status string of the device with the given id, or `None` for
    /// [`DeviceId::System`].
    pub fn status(&self, id: DeviceId) -> Option<String> {
        match id {
            DeviceId::Light => Some(self.light.status()),
            DeviceId::Door => Some(self.door.status()),
            DeviceId::Thermostat => Some(self.thermostat.status()),
            DeviceId::Fan => Some(self.fan.status()),
            DeviceId::System => None,
        }
    }

    /// Power draw of the device with the given id, or `None` for
    /// [`DeviceId::System`].
    pub fn power_w(&self, id: DeviceId) -> Option<f32> {
        match id {
            DeviceId::Light => Some(self.light.power_w()),
            DeviceId::Door => Some(self.door.power_w()),
            DeviceId::Thermostat => Some(self.thermostat.power_w()),
            DeviceId::Fan => Some(self.fan.power_w()),
            DeviceId::System => None,
        }
    }
}
