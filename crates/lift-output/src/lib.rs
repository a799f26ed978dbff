//! `lift-output` — event sinks for simulation runs.
//!
//! | Type                  | Output                                                  |
//! |-----------------------|---------------------------------------------------------|
//! | [`LogObserver`]       | `tracing` events for boards, disembarks, the final report |
//! | [`CsvWriter`]         | `disembarks.csv`, `summary.csv` in a directory          |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, LogObserver, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output/least-wait"))?;
//! let mut obs = (LogObserver::new(), SimOutputObserver::new(writer));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.1.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::LogObserver;
pub use observer::SimOutputObserver;
pub use row::{DisembarkRow, SummaryRow, fleet_summary};
pub use writer::OutputWriter;
