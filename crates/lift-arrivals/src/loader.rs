//! CSV arrivals loader.
//!
//! # CSV format
//!
//! Headerless, one passenger per row: name, arrival instant, destination.
//!
//! ```csv
//! Ana,2024-03-04 08:00:00,5
//! Bruno,2024-03-04 08:00:00,12
//! Carla,2024-03-04 08:00:03,7
//! ```
//!
//! Rows with fewer than three fields, an unparsable instant, or a
//! non-integer floor are skipped.  Extra fields are ignored.  Passengers
//! receive ids `0, 1, 2, …` in file order over the rows that were kept.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use lift_core::{Instant, Passenger, PassengerId};

use crate::{ArrivalsError, ArrivalsResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load passengers from a CSV file.
pub fn load_passengers_csv(path: &Path) -> ArrivalsResult<Vec<Passenger>> {
    let file = std::fs::File::open(path)?;
    let passengers = load_passengers_reader(file)?;
    info!(path = %path.display(), count = passengers.len(), "loaded arrivals");
    Ok(passengers)
}

/// Like [`load_passengers_csv`] but accepts any `Read` source.
pub fn load_passengers_reader<R: Read>(reader: R) -> ArrivalsResult<Vec<Passenger>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut passengers = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(line = line + 1, error = %e, "skipping unreadable arrivals row");
                continue;
            }
        };
        let id = PassengerId::try_from(passengers.len())
            .map_err(|_| ArrivalsError::TooManyPassengers(passengers.len()))?;
        match parse_record(id, &record) {
            Some(p) => passengers.push(p),
            None => debug!(line = line + 1, ?record, "skipping malformed arrivals row"),
        }
    }
    Ok(passengers)
}

/// Load passengers from `path`, or an empty list if the file cannot be read.
pub fn load_passengers_or_empty(path: &Path) -> Vec<Passenger> {
    load_passengers_csv(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "could not load arrivals; using none");
        Vec::new()
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(id: PassengerId, record: &StringRecord) -> Option<Passenger> {
    if record.len() < 3 {
        return None;
    }
    let name    = record.get(0)?;
    let arrival = Instant::parse(record.get(1)?).ok()?;
    let floor   = record.get(2)?.parse::<i32>().ok()?;
    Some(Passenger::new(id, name, floor, arrival))
}
