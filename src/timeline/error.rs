//! Timeline error types.

use thiserror::Error;

/// Errors reported by timeline insertion.
///
/// Nothing here is fatal: a rejected sample leaves the timeline unchanged and
/// the producing importer decides how to surface the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// Producers must emit samples in non-decreasing timestamp order.
    #[error("sample timestamp {timestamp} ms is earlier than the last stored timestamp {last} ms")]
    DecreasingTimestamp { last: i64, timestamp: i64 },
}
