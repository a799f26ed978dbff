//! The `OutputWriter` trait implemented by report backends.

use crate::{DisembarkRow, OutputResult, SummaryRow};

/// A destination for per-passenger and per-run rows.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// because observer callbacks cannot return them.
pub trait OutputWriter {
    /// Write a batch of disembark rows.
    fn write_disembarks(&mut self, rows: &[DisembarkRow]) -> OutputResult<()>;

    /// Write the end-of-run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
