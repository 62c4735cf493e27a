/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Result type for simulator operations
///
/// # Must Use
/// Rejected inputs never reach the process table; check the result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid {field}: {value}")]
    #[diagnostic(
        code(scheduler::invalid_input),
        help("Arrival and priority must be >= 0 and burst must be > 0.")
    )]
    InvalidInput { field: &'static str, value: i64 },

    #[error("{resource} capacity exceeded (limit {limit})")]
    #[diagnostic(
        code(scheduler::capacity_exceeded),
        help("Reduce the workload size or raise the configured limit.")
    )]
    CapacityExceeded { resource: &'static str, limit: usize },

    #[error("Unknown scheduling algorithm: {0}")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Use one of fcfs, sjf, srtf, priority, rr, ljf, lrtf (or ids 0-6).")
    )]
    UnknownAlgorithm(String),

    #[error("Malformed workload: {0}")]
    #[diagnostic(
        code(scheduler::workload),
        help("A workload is a JSON object with a `processes` array of {{arrival, burst, priority}}.")
    )]
    Workload(String),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(scheduler::serialization))]
    Serialization(String),
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Workload(err.to_string())
    }
}
