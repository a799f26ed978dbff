//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Instant;
use lift_sim::{DisembarkEvent, SimObserver, SimStatistics, SimStatus};

use crate::row::{DisembarkRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes disembark rows and the final summary to
/// any [`OutputWriter`] backend.
///
/// Disembark rows are buffered for the tick and written in one batch at
/// tick end.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<DisembarkRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_disembarks(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        self.pending.push(DisembarkRow::from_event(event));
    }

    fn on_tick_end(&mut self, _now: Instant, _status: SimStatus) {
        self.flush_pending();
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        self.flush_pending();
        let result = self.writer.write_summary(&SummaryRow::from(stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
