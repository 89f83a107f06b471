//! Vehicle Telemetry Synthesizer batch generator
//!
//! Exposes the batch components for integration testing.

pub mod batch;
pub mod config;
pub mod manifest;
pub mod sinks;
