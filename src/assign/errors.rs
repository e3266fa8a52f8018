use thiserror::Error;

/// Errors surfaced by the stage assigner.
///
/// All shows are validated before any stage is opened, so a failed call
/// returns no partial schedule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignError {
    /// Show start is not strictly before its end.
    #[error("Show '{name}' has an invalid interval: start {start} must be before end {end}")]
    InvalidShow { name: String, start: f64, end: f64 },

    /// A show time is NaN or infinite.
    #[error("Show '{name}' has a non-finite time value")]
    NonFiniteTime { name: String },
}
