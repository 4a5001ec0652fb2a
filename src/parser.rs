//!
//! Record parsing for the two comma-separated record shapes:
//! `"<steps>,<duration>"` (e.g. `"678,0h50m"`) and
//! `"<steps>,<activity>,<duration>"` (e.g. `"3456,Ходьба,3h00m"`).

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::time::Duration;

use crate::duration::{format_duration, parse_duration};
use crate::error::TrackerError;

/// A step count and its duration, from the two-field record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// A step count, raw activity label and duration, from the three-field record shape.
///
/// The label is not validated here; unknown labels are rejected at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub label: String,
    pub duration: Duration,
}

/// Parses a `"<steps>,<duration>"` record.
pub fn parse_step_record(data: &str) -> Result<StepRecord, TrackerError> {
    let [steps, duration] = split_fields::<2>(data)?;
    Ok(StepRecord {
        steps: parse_steps(steps)?,
        duration: parse_positive_duration(duration)?,
    })
}

/// Parses a `"<steps>,<activity>,<duration>"` record.
pub fn parse_training_record(data: &str) -> Result<TrainingRecord, TrackerError> {
    let [steps, label, duration] = split_fields::<3>(data)?;
    Ok(TrainingRecord {
        steps: parse_steps(steps)?,
        label: label.to_string(),
        duration: parse_positive_duration(duration)?,
    })
}

fn split_fields<const N: usize>(data: &str) -> Result<[&str; N], TrackerError> {
    let parts: Vec<&str> = data.split(',').collect();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| TrackerError::FieldCount { expected: N, found })
}

fn parse_steps(field: &str) -> Result<u64, TrackerError> {
    let steps: i64 = field.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::NegOverflow => TrackerError::NotPositive { field: "steps" },
        _ => TrackerError::InvalidSteps(e),
    })?;
    u64::try_from(steps)
        .ok()
        .filter(|&s| s > 0)
        .ok_or(TrackerError::NotPositive { field: "steps" })
}

fn parse_positive_duration(field: &str) -> Result<Duration, TrackerError> {
    let duration = parse_duration(field)?;
    if duration.is_zero() {
        return Err(TrackerError::NotPositive { field: "duration" });
    }
    Ok(duration)
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.steps, format_duration(self.duration))
    }
}

impl fmt::Display for TrainingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.steps, self.label, format_duration(self.duration))
    }
}
