//!
//! Defines error types for record parsing, metric calculation and reporting.

use std::num::ParseIntError;

use crate::duration::DurationError;

/// Coarse classification of a [`TrackerError`], independent of stage wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field count mismatch or a field that does not parse as its primitive type.
    Format,
    /// A parsed or supplied value violates a positivity precondition.
    Range,
    /// The activity label does not name a supported activity.
    UnknownActivity,
    /// The calculator configuration could not be loaded or is invalid.
    Config,
}

/// Represents errors that can occur while parsing records or computing metrics.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The record does not split into the expected number of comma-separated fields.
    #[error("bad data format: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    /// The step count field is not an integer.
    #[error("failed to extract steps: {0}")]
    InvalidSteps(#[source] ParseIntError),
    /// The duration field is not a valid duration literal.
    #[error("failed to extract duration: {0}")]
    InvalidDuration(#[from] DurationError),
    /// A value that must be strictly positive is zero, negative, NaN or infinite.
    #[error("{field} is not a positive number")]
    NotPositive { field: &'static str },
    /// The activity label is not in the activity table.
    #[error("unknown activity type: {0:?}")]
    UnknownActivity(String),
    /// An error raised by a named stage of a report, kept as the source.
    #[error("{stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<TrackerError>,
    },
    /// The calculator configuration is not valid JSON for `CalculatorConfig`.
    #[error("failed to load calculator config: {0}")]
    Config(#[from] serde_json::Error),
    /// A configuration coefficient is out of range.
    #[error("invalid calculator config: {0}")]
    InvalidConfig(String),
}

impl TrackerError {
    /// Wraps `self` with the name of the stage that produced it.
    pub fn in_stage(self, stage: &'static str) -> Self {
        TrackerError::Stage { stage, source: Box::new(self) }
    }

    /// Classifies the error, looking through any stage wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::FieldCount { .. }
            | TrackerError::InvalidSteps(_)
            | TrackerError::InvalidDuration(_) => ErrorKind::Format,
            TrackerError::NotPositive { .. } => ErrorKind::Range,
            TrackerError::UnknownActivity(_) => ErrorKind::UnknownActivity,
            TrackerError::Stage { source, .. } => source.kind(),
            TrackerError::Config(_) | TrackerError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// The innermost error beneath any stage wrappers.
    pub fn root(&self) -> &TrackerError {
        match self {
            TrackerError::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}
