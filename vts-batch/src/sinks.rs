//! Output sink implementations
//!
//! Sinks persist simulated rows to files (CSV table, NDJSON)

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use vts_core::{RecordSink, TelemetryRecord};

/// CSV table sink
///
/// The header row is written by the csv crate from the record's column
/// names before the first row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    written: u64,
}

impl CsvSink<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self { writer, written: 0 })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            written: 0,
        }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush csv writer: {}", e.error()))
    }
}

impl<W: Write + Send> RecordSink for CsvSink<W> {
    fn format(&self) -> &str {
        "csv"
    }

    fn write_record(&mut self, record: &TelemetryRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn records_written(&self) -> u64 {
        self.written
    }
}

/// NDJSON sink, one record per line
pub struct NdjsonSink<W: Write> {
    writer: BufWriter<W>,
    written: u64,
}

impl NdjsonSink<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> NdjsonSink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush ndjson writer: {}", e.error()))
    }
}

impl<W: Write + Send> RecordSink for NdjsonSink<W> {
    fn format(&self) -> &str {
        "ndjson"
    }

    fn write_record(&mut self, record: &TelemetryRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn records_written(&self) -> u64 {
        self.written
    }
}

/// Create a file sink for the given format
pub fn create_sink(format: OutputFormat, path: &Path) -> Result<Box<dyn RecordSink>> {
    match format {
        OutputFormat::Csv => Ok(Box::new(CsvSink::create(path)?)),
        OutputFormat::Ndjson => Ok(Box::new(NdjsonSink::create(path)?)),
    }
}
