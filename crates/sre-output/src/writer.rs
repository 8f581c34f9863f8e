//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentActivityRow, OutputResult, TickSummaryRow, WorkMixRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these results: it keeps the first error,
/// retrievable with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-agent activity rows (one snapshot tick).
    fn write_snapshots(&mut self, rows: &[AgentActivityRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the final work-mix table of a run.  May be called after
    /// [`finish`][Self::finish]; the rows are persisted immediately.
    fn write_work_mix(&mut self, rows: &[WorkMixRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after the first time is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
