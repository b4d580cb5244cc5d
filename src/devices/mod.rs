//! Household device models for the dashboard engine.

/// Ceiling fan with discrete speed levels.
pub mod fan;
/// Living room light.
pub mod light;
/// Front door lock.
pub mod lock;
/// Thermostat with a continuous setpoint.
pub mod thermostat;
pub mod types;

// Re-export the main types for convenience
pub use fan::CeilingFan;
pub use light::Light;
pub use lock::DoorLock;
pub use thermostat::Thermostat;
pub use types::Device;
pub use types::DeviceId;
pub use types::DeviceSet;
