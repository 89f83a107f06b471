//! Telemetry row model
//!
//! Defines the TelemetryRecord that every simulated tick is converted to.
//! Column names are fixed by the analysis tooling that reads the tables,
//! so every field carries an explicit serde rename and the field order
//! is the column order.

use crate::units::*;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Timestamp layout used in the `Timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column names in output order
pub const COLUMNS: [&str; 25] = [
    "Time_1s",
    "Driver_ID",
    "LapID",
    "GPS Longitude",
    "GPS Latitude",
    "GPS Bearing",
    "Accelerometer (Total)",
    "Accelerometer (X)",
    "Accelerometer (Y)",
    "Accelerometer (Z)",
    "Coolant",
    "RPM",
    "Altitude(GPS)",
    "OBD Speed",
    "kff1298",
    "Torque",
    "F_M",
    "AuthorisedClass",
    "Throttle_Position",
    "Engine_Load",
    "Intake_Air_Temp",
    "Catalyst_Temperature",
    "Gear",
    "Trip_Distance_m",
    "Timestamp",
];

/// One second of simulated vehicle telemetry
///
/// GPS, accelerometer and the two unnamed logger channels are placeholders
/// kept at zero so the table matches the logger export it imitates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    /// Seconds since trip start
    #[serde(rename = "Time_1s")]
    pub time_s: u64,

    #[serde(rename = "Driver_ID")]
    pub driver_id: String,

    #[serde(rename = "LapID")]
    pub lap_id: u32,

    #[serde(rename = "GPS Longitude")]
    pub gps_longitude: f64,

    #[serde(rename = "GPS Latitude")]
    pub gps_latitude: f64,

    #[serde(rename = "GPS Bearing")]
    pub gps_bearing: f64,

    #[serde(rename = "Accelerometer (Total)")]
    pub accel_total: f64,

    #[serde(rename = "Accelerometer (X)")]
    pub accel_x: f64,

    #[serde(rename = "Accelerometer (Y)")]
    pub accel_y: f64,

    #[serde(rename = "Accelerometer (Z)")]
    pub accel_z: f64,

    /// Engine coolant temperature
    #[serde(rename = "Coolant")]
    pub coolant: Celsius,

    #[serde(rename = "RPM")]
    pub rpm: Rpm,

    #[serde(rename = "Altitude(GPS)")]
    pub altitude: Meters,

    /// Vehicle speed as reported over OBD
    #[serde(rename = "OBD Speed")]
    pub speed: KilometersPerHour,

    #[serde(rename = "kff1298")]
    pub kff1298: i64,

    /// Simulated torque, three times the engine load
    #[serde(rename = "Torque")]
    pub torque: NewtonMeters,

    #[serde(rename = "F_M")]
    pub f_m: i64,

    #[serde(rename = "AuthorisedClass")]
    pub authorised_class: String,

    #[serde(rename = "Throttle_Position")]
    pub throttle: Percent,

    #[serde(rename = "Engine_Load")]
    pub engine_load: Percent,

    #[serde(rename = "Intake_Air_Temp")]
    pub intake_air_temp: Celsius,

    #[serde(rename = "Catalyst_Temperature")]
    pub catalyst_temp: Celsius,

    /// Selected gear (1-6)
    #[serde(rename = "Gear")]
    pub gear: u8,

    /// Distance covered since trip start
    #[serde(rename = "Trip_Distance_m")]
    pub trip_distance: Meters,

    /// Wall-clock time of the sample, attached by whoever schedules the trip
    #[serde(rename = "Timestamp", serialize_with = "serialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

fn serialize_timestamp<S: Serializer>(
    val: &Option<NaiveDateTime>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match val {
        Some(ts) => s.collect_str(&ts.format(TIMESTAMP_FORMAT)),
        None => s.serialize_none(),
    }
}

impl TelemetryRecord {
    /// Return this record stamped with a wall-clock time
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
