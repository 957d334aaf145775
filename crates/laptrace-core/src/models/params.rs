//! Car parameters and driver style presets
//!
//! `CarParameters` is the request model for demo generation; every field
//! carries a serde default so clients can send a partial (or empty) JSON
//! body. `driver_style` stays a free string at the boundary so responses
//! can echo the caller's raw value; generation resolves it through
//! [`DriverStyle::from_name`], which is total.

use serde::{Deserialize, Serialize};

use crate::error::{TelemetryError, TelemetryResult};
use crate::synth::{MAX_LAP_TIME_SECS, MIN_RPM, MIN_SPEED_KPH};

/// Input parameters for synthetic lap generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarParameters {
    /// Top speed in km/h
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,

    /// Engine rev limit
    #[serde(default = "default_max_rpm")]
    pub max_rpm: f64,

    /// Number of forward gears
    #[serde(default = "default_num_gears")]
    pub num_gears: u32,

    /// Lap duration in seconds
    #[serde(default = "default_lap_time")]
    pub lap_time: f64,

    /// Display name of the simulated track
    #[serde(default = "default_track_name")]
    pub track_name: String,

    /// Driver style preset name ("aggressive", "balanced", "smooth")
    #[serde(default = "default_driver_style")]
    pub driver_style: String,
}

fn default_max_speed() -> f64 {
    320.0
}

fn default_max_rpm() -> f64 {
    15000.0
}

fn default_num_gears() -> u32 {
    8
}

fn default_lap_time() -> f64 {
    90.0
}

fn default_track_name() -> String {
    "Demo Track".to_string()
}

fn default_driver_style() -> String {
    "balanced".to_string()
}

impl Default for CarParameters {
    fn default() -> Self {
        Self {
            max_speed: default_max_speed(),
            max_rpm: default_max_rpm(),
            num_gears: default_num_gears(),
            lap_time: default_lap_time(),
            track_name: default_track_name(),
            driver_style: default_driver_style(),
        }
    }
}

impl CarParameters {
    /// Range-check the parameters before generation.
    ///
    /// The speed and rpm floors match the generator's lower clamps, so a
    /// validated parameter set always produces well-formed clamp ranges.
    pub fn validate(&self) -> TelemetryResult<()> {
        if !self.max_speed.is_finite() || self.max_speed < MIN_SPEED_KPH {
            return Err(TelemetryError::InvalidParameter(format!(
                "max_speed must be a finite value of at least {} km/h",
                MIN_SPEED_KPH
            )));
        }
        if !self.max_rpm.is_finite() || self.max_rpm < MIN_RPM {
            return Err(TelemetryError::InvalidParameter(format!(
                "max_rpm must be a finite value of at least {}",
                MIN_RPM
            )));
        }
        if self.num_gears < 1 {
            return Err(TelemetryError::InvalidParameter(
                "num_gears must be at least 1".to_string(),
            ));
        }
        if !self.lap_time.is_finite() || self.lap_time <= 0.0 {
            return Err(TelemetryError::InvalidParameter(
                "lap_time must be a positive number of seconds".to_string(),
            ));
        }
        if self.lap_time > MAX_LAP_TIME_SECS {
            return Err(TelemetryError::InvalidParameter(format!(
                "lap_time must not exceed {} seconds",
                MAX_LAP_TIME_SECS
            )));
        }
        Ok(())
    }

    /// Resolve the driver style preset (unknown names fall back to balanced)
    pub fn style(&self) -> DriverStyle {
        DriverStyle::from_name(&self.driver_style)
    }
}

/// Named driver style preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStyle {
    Aggressive,
    Balanced,
    Smooth,
}

impl DriverStyle {
    /// Parse a preset name; unrecognized names fall back to `Balanced`
    pub fn from_name(name: &str) -> Self {
        match name {
            "aggressive" => DriverStyle::Aggressive,
            "smooth" => DriverStyle::Smooth,
            _ => DriverStyle::Balanced,
        }
    }

    /// Multipliers applied by the synthesizer for this preset
    pub fn factors(self) -> StyleFactors {
        match self {
            DriverStyle::Aggressive => StyleFactors {
                brake_late: 0.9,
                throttle_early: 1.1,
                speed_var: 1.2,
            },
            DriverStyle::Balanced => StyleFactors {
                brake_late: 1.0,
                throttle_early: 1.0,
                speed_var: 1.0,
            },
            DriverStyle::Smooth => StyleFactors {
                brake_late: 1.1,
                throttle_early: 0.9,
                speed_var: 0.8,
            },
        }
    }
}

/// Behavior multipliers for a driver style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleFactors {
    /// Scales brake application derived from deceleration
    pub brake_late: f64,
    /// Scales throttle application derived from acceleration
    pub throttle_early: f64,
    /// Scales the Gaussian speed noise
    pub speed_var: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let params: CarParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params.max_speed, 320.0);
        assert_eq!(params.max_rpm, 15000.0);
        assert_eq!(params.num_gears, 8);
        assert_eq!(params.lap_time, 90.0);
        assert_eq!(params.track_name, "Demo Track");
        assert_eq!(params.driver_style, "balanced");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let params: CarParameters =
            serde_json::from_str(r#"{"lap_time": 10.0, "driver_style": "smooth"}"#).unwrap();
        assert_eq!(params.lap_time, 10.0);
        assert_eq!(params.driver_style, "smooth");
        assert_eq!(params.num_gears, 8);
    }

    #[test]
    fn test_style_lookup() {
        assert_eq!(DriverStyle::from_name("aggressive"), DriverStyle::Aggressive);
        assert_eq!(DriverStyle::from_name("smooth"), DriverStyle::Smooth);
        assert_eq!(DriverStyle::from_name("balanced"), DriverStyle::Balanced);
    }

    #[test]
    fn test_unknown_style_falls_back_to_balanced() {
        let style = DriverStyle::from_name("reckless");
        assert_eq!(style, DriverStyle::Balanced);

        let factors = style.factors();
        assert_eq!(factors.brake_late, 1.0);
        assert_eq!(factors.throttle_early, 1.0);
        assert_eq!(factors.speed_var, 1.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(CarParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut params = CarParameters::default();
        params.max_speed = 10.0;
        assert!(params.validate().is_err());

        let mut params = CarParameters::default();
        params.max_rpm = 500.0;
        assert!(params.validate().is_err());

        let mut params = CarParameters::default();
        params.num_gears = 0;
        assert!(params.validate().is_err());

        let mut params = CarParameters::default();
        params.lap_time = 0.0;
        assert!(params.validate().is_err());

        let mut params = CarParameters::default();
        params.lap_time = 7200.0;
        assert!(params.validate().is_err());

        let mut params = CarParameters::default();
        params.lap_time = f64::NAN;
        assert!(params.validate().is_err());
    }
}
