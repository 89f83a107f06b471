//! Vehicle Telemetry Synthesizer Core Library
//!
//! This crate provides the shared data model for the synthesizer: unit
//! newtypes, driving scenarios, the telemetry row schema, configuration
//! errors, and the sink trait that row consumers implement.

pub mod error;
pub mod model;
pub mod scenario;
pub mod sink;
pub mod units;

pub use error::ConfigError;
pub use model::TelemetryRecord;
pub use scenario::ScenarioTag;
pub use sink::RecordSink;
