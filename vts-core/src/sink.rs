//! Record sink trait definition

use crate::model::TelemetryRecord;
use anyhow::Result;

/// Destination for simulated telemetry rows
///
/// Each sink is responsible for:
/// - Writing any header or preamble its format needs
/// - Persisting records in the order they are handed over
/// - Flushing buffered output when the trip is complete
pub trait RecordSink: Send {
    /// Short name of the output format (e.g., "csv", "ndjson")
    fn format(&self) -> &str;

    /// Write one record
    fn write_record(&mut self, record: &TelemetryRecord) -> Result<()>;

    /// Flush everything written so far
    ///
    /// Called once after the last record of a trip.
    fn finish(&mut self) -> Result<()>;

    /// Number of records written so far
    fn records_written(&self) -> u64;
}
