//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `disembarks.csv` — one row per delivered passenger
//! - `summary.csv` — one row per run
//!
//! Undefined values (a duration that has no inputs yet, a run that never
//! finished) are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use lift_sim::DurationSummary;

use crate::writer::OutputWriter;
use crate::{DisembarkRow, OutputResult, SummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    disembarks: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut disembarks = Writer::from_path(dir.join("disembarks.csv"))?;
        disembarks.write_record([
            "instant",
            "car",
            "passenger",
            "name",
            "destination_floor",
            "arrival",
            "boarding",
            "queue_wait_secs",
            "transit_secs",
            "fleet",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "policy",
            "passengers",
            "started",
            "finished",
            "queue_wait_count",
            "queue_wait_max_secs",
            "queue_wait_mean_secs",
            "transit_count",
            "transit_max_secs",
            "transit_mean_secs",
            "total_count",
            "total_max_secs",
            "total_mean_secs",
            "never_boarded",
            "never_disembarked",
        ])?;

        Ok(Self {
            disembarks,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_disembarks(&mut self, rows: &[DisembarkRow]) -> OutputResult<()> {
        for row in rows {
            self.disembarks.write_record(&[
                row.instant.to_string(),
                row.car.to_string(),
                row.passenger.to_string(),
                row.name.clone(),
                row.destination_floor.to_string(),
                row.arrival.to_string(),
                opt(row.boarding),
                opt(row.queue_wait.map(|s| s.as_i64())),
                opt(row.transit.map(|s| s.as_i64())),
                row.fleet.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let mut record = vec![
            row.policy.clone(),
            row.passengers.to_string(),
            row.started.to_string(),
            opt(row.finished),
        ];
        for d in [&row.queue_wait, &row.transit, &row.total] {
            record.extend(summary_fields(d));
        }
        record.push(row.never_boarded.to_string());
        record.push(row.never_disembarked.to_string());
        self.summary.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.disembarks.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn summary_fields(d: &DurationSummary) -> [String; 3] {
    [
        d.count.to_string(),
        opt(d.max.map(|s| s.as_i64())),
        opt(d.mean.map(|m| format!("{m:.3}"))),
    ]
}
