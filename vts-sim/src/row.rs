//! Row assembly: simulation state to telemetry record

use crate::state::SimulationState;
use vts_core::units::*;
use vts_core::TelemetryRecord;

pub const DEFAULT_DRIVER_ID: &str = "SimDriver_01";

const LAP_ID: u32 = 1;
const ALTITUDE_M: f64 = 100.0;
const VEHICLE_CLASS: &str = "Car";
/// Simulated torque per percent of engine load
const TORQUE_PER_LOAD_PCT: f64 = 3.0;

/// Snapshot `state` at `tick` into an output row
///
/// The timestamp is left empty; trips are scheduled by the caller.
pub fn assemble(tick: u64, state: &SimulationState, driver_id: &str) -> TelemetryRecord {
    TelemetryRecord {
        time_s: tick,
        driver_id: driver_id.to_string(),
        lap_id: LAP_ID,
        gps_longitude: 0.0,
        gps_latitude: 0.0,
        gps_bearing: 0.0,
        accel_total: 0.0,
        accel_x: 0.0,
        accel_y: 0.0,
        accel_z: 0.0,
        coolant: state.thermal.coolant,
        rpm: Rpm(state.rpm),
        altitude: Meters(ALTITUDE_M),
        speed: KilometersPerHour(state.speed_kph),
        kff1298: 0,
        torque: NewtonMeters(state.engine_load_pct * TORQUE_PER_LOAD_PCT),
        f_m: 0,
        authorised_class: VEHICLE_CLASS.to_string(),
        throttle: Percent::new(state.throttle_pct),
        engine_load: Percent::new(state.engine_load_pct),
        intake_air_temp: state.thermal.intake_air,
        catalyst_temp: state.thermal.catalyst,
        gear: state.gear,
        trip_distance: Meters(state.distance_m),
        timestamp: None,
    }
}
