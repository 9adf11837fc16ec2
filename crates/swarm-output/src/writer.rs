//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, BehaviorRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are returned to [`SimOutputObserver`](crate::SimOutputObserver),
/// which stores the first one for [`take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the behavior values of one snapshot tick.
    fn write_behaviors(&mut self, rows: &[BehaviorRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
