//! TOML-based household configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level household configuration parsed from TOML.
///
/// All fields have defaults matching the baseline household. Load from
/// TOML with [`HomeConfig::from_toml_file`] or use
/// [`HomeConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeConfig {
    /// Living room light parameters.
    #[serde(default)]
    pub light: LightConfig,
    /// Front door lock parameters.
    #[serde(default)]
    pub door: DoorConfig,
    /// Thermostat parameters.
    #[serde(default)]
    pub thermostat: ThermostatConfig,
    /// Ceiling fan parameters.
    #[serde(default)]
    pub fan: FanConfig,
}

/// Living room light parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    /// Draw when on (W).
    pub draw_w: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self { draw_w: 60.0 }
    }
}

/// Front door lock parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoorConfig {
    /// Draw while locked (W).
    pub draw_w: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self { draw_w: 5.0 }
    }
}

/// Thermostat parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermostatConfig {
    /// Base draw while on (W).
    pub base_draw_w: f32,
    /// Additional draw per degree of setpoint distance (W/°C).
    pub per_degree_w: f32,
    /// Lowest accepted setpoint (°C).
    pub min_setpoint_c: f32,
    /// Highest accepted setpoint (°C).
    pub max_setpoint_c: f32,
    /// Starting setpoint (°C).
    pub initial_setpoint_c: f32,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self {
            base_draw_w: 50.0,
            per_degree_w: 10.0,
            min_setpoint_c: 15.0,
            max_setpoint_c: 30.0,
            initial_setpoint_c: 22.0,
        }
    }
}

/// Ceiling fan parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FanConfig {
    /// Draw per speed level (W).
    pub per_level_w: f32,
    /// Highest speed level.
    pub max_speed: u8,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            per_level_w: 30.0,
            max_speed: 3,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"thermostat.min_setpoint_c"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl HomeConfig {
    /// Returns the baseline household (the original fixed ratings).
    pub fn baseline() -> Self {
        Self {
            light: LightConfig::default(),
            door: DoorConfig::default(),
            thermostat: ThermostatConfig::default(),
            fan: FanConfig::default(),
        }
    }

    /// Returns the high-draw preset: a heavier household for demos.
    pub fn high_draw() -> Self {
        Self {
            light: LightConfig { draw_w: 100.0 },
            thermostat: ThermostatConfig {
                base_draw_w: 80.0,
                per_degree_w: 15.0,
                ..ThermostatConfig::default()
            },
            fan: FanConfig {
                per_level_w: 45.0,
                ..FanConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "high_draw"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "high_draw" => Ok(Self::high_draw()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.light.draw_w < 0.0 {
            errors.push(ConfigError {
                field: "light.draw_w".into(),
                message: "must be >= 0".into(),
            });
        }
        if self.door.draw_w < 0.0 {
            errors.push(ConfigError {
                field: "door.draw_w".into(),
                message: "must be >= 0".into(),
            });
        }

        let t = &self.thermostat;
        if t.base_draw_w < 0.0 {
            errors.push(ConfigError {
                field: "thermostat.base_draw_w".into(),
                message: "must be >= 0".into(),
            });
        }
        if t.per_degree_w < 0.0 {
            errors.push(ConfigError {
                field: "thermostat.per_degree_w".into(),
                message: "must be >= 0".into(),
            });
        }
        if t.min_setpoint_c >= t.max_setpoint_c {
            errors.push(ConfigError {
                field: "thermostat.min_setpoint_c".into(),
                message: "must be < thermostat.max_setpoint_c".into(),
            });
        } else if !(t.min_setpoint_c..=t.max_setpoint_c).contains(&t.initial_setpoint_c) {
            errors.push(ConfigError {
                field: "thermostat.initial_setpoint_c".into(),
                message: "must be within [min_setpoint_c, max_setpoint_c]".into(),
            });
        }

        let f = &self.fan;
        if f.per_level_w < 0.0 {
            errors.push(ConfigError {
                field: "fan.per_level_w".into(),
                message: "must be >= 0".into(),
            });
        }
        if f.max_speed == 0 {
            errors.push(ConfigError {
                field: "fan.max_speed".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self::baseline()
    }
}
