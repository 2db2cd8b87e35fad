//! Durable prediction log
//!
//! Append-only CSV file: header row on first creation, rows appended
//! without re-writing the header. Records are kept in insertion order
//! and discarded only in bulk by an explicit clear.

use crate::models::LogRecord;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Ordered, append-only store of prediction log records
pub trait LogStore: Send + Sync {
    /// Append one record, creating the sequence if absent
    fn append(&self, record: &LogRecord) -> Result<()>;

    /// All records in insertion order; empty if none exist
    fn read_all(&self) -> Result<Vec<LogRecord>>;

    /// Discard the entire sequence; no-op if already empty
    fn clear(&self) -> Result<()>;

    /// Raw CSV content for download; bare header when the log is empty
    fn export_csv(&self) -> Result<String>;
}

/// CSV-file-backed log store.
///
/// Writers within this process are serialized by a mutex; cross-process
/// safety is out of scope.
pub struct CsvLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogStore for CsvLogStore {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log file {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer
            .serialize(record)
            .context("failed to serialize log record")?;
        writer.flush().context("failed to flush log file")?;

        debug!(path = %self.path.display(), "Appended log record");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open log file {}", self.path.display()))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row.context("failed to parse log record")?);
        }
        Ok(records)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove log file {}", self.path.display()))?;
            debug!(path = %self.path.display(), "Cleared prediction log");
        }
        Ok(())
    }

    fn export_csv(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(format!("{}\n", LogRecord::CSV_HEADER.join(",")));
        }
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read log file {}", self.path.display()))
    }
}
