//! Type-safe wrappers for physical units
//!
//! Newtype wrappers around f64 so that a speed cannot be handed to
//! something expecting a temperature.
//!
//! All unit types serialize rounded to one decimal place, which is the
//! precision of the downstream telemetry tables.

use serde::{Deserialize, Serialize};

/// Round f64 to one decimal place for table output
fn round1<S: serde::Serializer>(val: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((*val * 10.0).round() / 10.0)
}

/// Kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct KilometersPerHour(#[serde(serialize_with = "round1")] pub f64);

impl KilometersPerHour {
    pub fn to_meters_per_second(self) -> MetersPerSecond {
        MetersPerSecond(self.0 * 1000.0 / 3600.0)
    }
}

/// Meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MetersPerSecond(#[serde(serialize_with = "round1")] pub f64);

/// Meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Meters(#[serde(serialize_with = "round1")] pub f64);

/// Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Celsius(#[serde(serialize_with = "round1")] pub f64);

/// Newton-meters (torque)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct NewtonMeters(#[serde(serialize_with = "round1")] pub f64);

/// Revolutions per minute
///
/// Serialized as a whole number (truncated), the way OBD loggers report it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Rpm(#[serde(serialize_with = "truncate")] pub f64);

fn truncate<S: serde::Serializer>(val: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(val.trunc() as i64)
}

/// Percentage (0.0 to 100.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Percent(#[serde(serialize_with = "round1")] pub f64);

impl Percent {
    /// Create a new percentage, clamping to [0.0, 100.0]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get as a fraction (0-1)
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}
