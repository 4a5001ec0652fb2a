//! Shared value types: activity kinds, biometrics and derived metrics.

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// The kinds of activity the calculator knows formulas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

/// Record labels and the activity each one names.
///
/// New activity kinds are registered here and nowhere else.
pub const ACTIVITY_LABELS: &[(&str, ActivityKind)] = &[
    ("Ходьба", ActivityKind::Walking),
    ("Бег", ActivityKind::Running),
];

impl ActivityKind {
    /// Looks up the activity named by a record label. Matching is exact.
    pub fn from_label(label: &str) -> Result<Self, TrackerError> {
        ACTIVITY_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| TrackerError::UnknownActivity(label.to_string()))
    }

    /// The record label for this activity.
    pub fn label(self) -> &'static str {
        ACTIVITY_LABELS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(label, _)| *label)
            .unwrap_or_default()
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight in kilograms and height in meters, supplied by the caller per call.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BiometricProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BiometricProfile {
    /// Creates a profile, rejecting non-positive (or NaN) weight and height.
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, TrackerError> {
        ensure_positive("weight", weight_kg)?;
        ensure_positive("height", height_m)?;
        Ok(BiometricProfile { weight_kg, height_m })
    }
}

/// Distance, mean speed and calories derived from one activity session.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ActivityMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Fails with [`TrackerError::NotPositive`] unless `value` is finite and `> 0`.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::NotPositive { field })
    }
}
