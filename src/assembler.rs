//! Record assembly from extracted line fields.
//!
//! A telemetry snapshot has no end-of-record marker; the only delimiter is
//! the timestamp that opens the next one. The assembler threads an explicit
//! accumulator through the line sequence: a boundary closes and emits the
//! open record, then opens a new one seeded with the timestamp. Fields on
//! the boundary line itself belong to the record it opens.

use crate::constants::LOG_TIMESTAMP_FORMAT;
use crate::extractor;
use crate::models::FlightRecord;
use chrono::NaiveDateTime;
use tracing::{trace, warn};

/// Folds physical lines into completed [`FlightRecord`]s.
///
/// Exactly one record is open at a time. Fields seen before the first
/// boundary have no record to land in and are discarded.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    current: Option<FlightRecord>,
    completed: Vec<FlightRecord>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();

        if let Some(timestamp) = extractor::boundary_timestamp(line) {
            if NaiveDateTime::parse_from_str(timestamp, LOG_TIMESTAMP_FORMAT).is_err() {
                warn!(timestamp, "boundary timestamp has implausible calendar values");
            }
            if let Some(done) = self.current.replace(FlightRecord::new(timestamp)) {
                self.completed.push(done);
            }
        }

        let extracted = extractor::extract(line);
        match self.current.as_mut() {
            Some(record) => {
                for (name, value) in extracted {
                    record.set(name, value);
                }
            }
            None => {
                if !extracted.is_empty() {
                    trace!(
                        count = extracted.len(),
                        "discarding fields before first boundary"
                    );
                }
            }
        }
    }

    /// Close the open record and return all completed records in input order
    pub fn finish(mut self) -> Vec<FlightRecord> {
        if let Some(record) = self.current.take() {
            self.completed.push(record);
        }
        self.completed
    }
}

/// Assemble a whole line sequence in one call
pub fn assemble<I, S>(lines: I) -> Vec<FlightRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = RecordAssembler::new();
    for line in lines {
        assembler.push_line(line.as_ref());
    }
    assembler.finish()
}
