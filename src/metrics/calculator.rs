//! Distance, speed and calorie formulas.
//!
//! All functions are pure. Durations are converted to fractional hours and
//! minutes, so sub-minute precision is kept.

use std::time::Duration;

use crate::error::TrackerError;
use crate::metrics::config::{CalculatorConfig, METERS_PER_KM, MINUTES_PER_HOUR};
use crate::types::{ensure_positive, ActivityKind, ActivityMetrics, BiometricProfile};

/// Applies the distance, speed and calorie formulas with a given [`CalculatorConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Calculator { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Distance in kilometers, with stride modeled as a fraction of height.
    pub fn distance(&self, steps: u64, height: f64) -> f64 {
        let step_length = height * self.config.step_length_coefficient;
        steps as f64 * step_length / METERS_PER_KM
    }

    /// Distance in kilometers using the fixed daily stride length.
    pub fn fixed_stride_distance(&self, steps: u64) -> f64 {
        steps as f64 * self.config.default_step_length_m / METERS_PER_KM
    }

    /// Mean speed in km/h. Returns exactly `0.0` for a zero duration.
    pub fn mean_speed(&self, steps: u64, height: f64, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 0.0;
        }
        self.distance(steps, height) / hours(duration)
    }

    /// Calories spent walking. A zero duration yields `0.0`.
    pub fn walking_calories(
        &self,
        steps: u64,
        weight: f64,
        height: f64,
        duration: Duration,
    ) -> Result<f64, TrackerError> {
        tracing::debug!(steps, weight, height, ?duration, "computing walking calories");
        let base = self.base_calories(steps, weight, height, duration)?;
        Ok(base * self.config.walking_calories_coefficient)
    }

    /// Calories spent running.
    pub fn running_calories(
        &self,
        steps: u64,
        weight: f64,
        height: f64,
        duration: Duration,
    ) -> Result<f64, TrackerError> {
        tracing::debug!(steps, weight, height, ?duration, "computing running calories");
        if duration.is_zero() {
            return Err(TrackerError::NotPositive { field: "duration" });
        }
        self.base_calories(steps, weight, height, duration)
    }

    /// Calories for the given activity kind.
    pub fn calories(
        &self,
        kind: ActivityKind,
        steps: u64,
        weight: f64,
        height: f64,
        duration: Duration,
    ) -> Result<f64, TrackerError> {
        match kind {
            ActivityKind::Walking => self.walking_calories(steps, weight, height, duration),
            ActivityKind::Running => self.running_calories(steps, weight, height, duration),
        }
    }

    /// Distance, mean speed and calories for one session.
    pub fn metrics(
        &self,
        kind: ActivityKind,
        steps: u64,
        profile: &BiometricProfile,
        duration: Duration,
    ) -> Result<ActivityMetrics, TrackerError> {
        let calories_kcal =
            self.calories(kind, steps, profile.weight_kg, profile.height_m, duration)?;
        Ok(ActivityMetrics {
            distance_km: self.distance(steps, profile.height_m),
            mean_speed_kmh: self.mean_speed(steps, profile.height_m, duration),
            calories_kcal,
        })
    }

    // weight × mean speed × minutes / 60; walking scales this by its coefficient.
    fn base_calories(
        &self,
        steps: u64,
        weight: f64,
        height: f64,
        duration: Duration,
    ) -> Result<f64, TrackerError> {
        if steps == 0 {
            return Err(TrackerError::NotPositive { field: "steps" });
        }
        ensure_positive("weight", weight)?;
        ensure_positive("height", height)?;

        let speed = self.mean_speed(steps, height, duration);
        Ok(weight * speed * minutes(duration) / MINUTES_PER_HOUR)
    }
}

/// Distance in kilometers with the default stride coefficient.
pub fn distance(steps: u64, height: f64) -> f64 {
    Calculator::default().distance(steps, height)
}

/// Mean speed in km/h with the default stride coefficient; `0.0` for a zero duration.
pub fn mean_speed(steps: u64, height: f64, duration: Duration) -> f64 {
    Calculator::default().mean_speed(steps, height, duration)
}

pub fn walking_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    Calculator::default().walking_calories(steps, weight, height, duration)
}

pub fn running_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    Calculator::default().running_calories(steps, weight, height, duration)
}

pub(crate) fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}
