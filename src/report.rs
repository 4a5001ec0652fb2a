//!
//! Report entry points: parse a record, compute its metrics and render the
//! fixed-template text summary.
//!
//! `day_summary` and `training_summary` return structured results. The string
//! entry points sit on top of them: `activity_report` surfaces errors with the
//! failing stage attached, while `walking_report` logs them and returns an
//! empty string.

use std::fmt;

use crate::error::TrackerError;
use crate::metrics::calculator::hours;
use crate::metrics::Calculator;
use crate::parser::{parse_step_record, parse_training_record};
use crate::types::{ActivityKind, BiometricProfile};

/// Daily walking totals for a `"<steps>,<duration>"` record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories_kcal)
    }
}

/// Session metrics for a `"<steps>,<activity>,<duration>"` record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.activity)?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.mean_speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
    }
}

impl Calculator {
    /// Parses a `"<steps>,<duration>"` record and computes the daily totals.
    ///
    /// Distance uses the fixed daily stride; calories use the walking formula.
    pub fn day_summary(
        &self,
        data: &str,
        weight: f64,
        height: f64,
    ) -> Result<DaySummary, TrackerError> {
        let record = parse_step_record(data)?;
        let calories_kcal = self
            .walking_calories(record.steps, weight, height, record.duration)
            .map_err(|e| e.in_stage("walking_calories"))?;
        Ok(DaySummary {
            steps: record.steps,
            distance_km: self.fixed_stride_distance(record.steps),
            calories_kcal,
        })
    }

    /// Parses a `"<steps>,<activity>,<duration>"` record, dispatches on the
    /// activity label and computes the session metrics.
    pub fn training_summary(
        &self,
        data: &str,
        weight: f64,
        height: f64,
    ) -> Result<TrainingSummary, TrackerError> {
        let record = parse_training_record(data).map_err(|e| e.in_stage("parse_training"))?;
        let activity =
            ActivityKind::from_label(&record.label).map_err(|e| e.in_stage("dispatch"))?;
        let profile = BiometricProfile { weight_kg: weight, height_m: height };
        let metrics = self
            .metrics(activity, record.steps, &profile, record.duration)
            .map_err(|e| e.in_stage(calories_stage(activity)))?;
        Ok(TrainingSummary {
            activity,
            duration_hours: hours(record.duration),
            distance_km: metrics.distance_km,
            mean_speed_kmh: metrics.mean_speed_kmh,
            calories_kcal: metrics.calories_kcal,
        })
    }
}

fn calories_stage(activity: ActivityKind) -> &'static str {
    match activity {
        ActivityKind::Walking => "walking_calories",
        ActivityKind::Running => "running_calories",
    }
}

/// Three-line daily walking report for a `"<steps>,<duration>"` record.
///
/// Any error is logged at `warn` level and an empty string is returned.
pub fn walking_report(data: &str, weight: f64, height: f64) -> String {
    match Calculator::default().day_summary(data, weight, height) {
        Ok(summary) => summary.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, data, "day_summary failed");
            String::new()
        }
    }
}

/// Five-line session report for a `"<steps>,<activity>,<duration>"` record.
pub fn activity_report(data: &str, weight: f64, height: f64) -> Result<String, TrackerError> {
    Calculator::default()
        .training_summary(data, weight, height)
        .map(|summary| summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::error::Error as _;
    use std::time::Duration;

    #[test]
    fn test_walking_report_text() {
        let report = walking_report("678,0h50m", 75.0, 1.75);
        assert_eq!(
            report,
            "Количество шагов: 678.\nДистанция составила 0.44 км.\nВы сожгли 20.02 ккал.\n"
        );
    }

    #[test]
    fn test_walking_report_swallows_errors() {
        assert_eq!(walking_report("", 75.0, 1.75), "");
        assert_eq!(walking_report("abc,0h50m", 75.0, 1.75), "");
        assert_eq!(walking_report("678,0h50m", 0.0, 1.75), "");
        assert_eq!(walking_report("678,0h50m", 75.0, 0.0), "");
    }

    #[test]
    fn test_activity_report_running_text() {
        let report = activity_report("3456,Бег,3h00m", 75.0, 1.8).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Бег\nДлительность: 3.00 ч.\nДистанция: 2.80 км.\nСкорость: 0.93 км/ч\nСожгли калорий: 209.95\n"
        );
    }

    #[test]
    fn test_activity_report_walking_uses_half_coefficient() {
        let summary = Calculator::default()
            .training_summary("3456,Ходьба,3h00m", 75.0, 1.8)
            .unwrap();
        assert_eq!(summary.activity, ActivityKind::Walking);
        assert!((summary.calories_kcal - 104.976).abs() < 1e-9);
    }

    #[test]
    fn test_activity_report_errors_carry_stage() {
        let err = activity_report("3456,Бег", 75.0, 1.8).unwrap_err();
        assert!(matches!(err, TrackerError::Stage { stage: "parse_training", .. }));
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.source().is_some());

        let err = activity_report("3456,Бег,3h00m", -1.0, 1.8).unwrap_err();
        assert!(matches!(err, TrackerError::Stage { stage: "running_calories", .. }));
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = activity_report("3456,Ходьба,3h00m", 75.0, 0.0).unwrap_err();
        assert!(matches!(err, TrackerError::Stage { stage: "walking_calories", .. }));

        let err = activity_report("3456,Бег,3h00m", f64::INFINITY, 1.8).unwrap_err();
        assert!(matches!(err.root(), TrackerError::NotPositive { field: "weight" }));
    }

    #[test]
    fn test_training_summary_matches_calculator_metrics() {
        let calc = Calculator::default();
        let summary = calc.training_summary("3456,Ходьба,3h00m", 75.0, 1.8).unwrap();
        let profile = BiometricProfile::new(75.0, 1.8).unwrap();
        let metrics = calc
            .metrics(ActivityKind::Walking, 3456, &profile, Duration::from_secs(3 * 3600))
            .unwrap();
        assert_eq!(summary.distance_km, metrics.distance_km);
        assert_eq!(summary.mean_speed_kmh, metrics.mean_speed_kmh);
        assert_eq!(summary.calories_kcal, metrics.calories_kcal);
    }

    #[test]
    fn test_activity_report_unknown_activity() {
        let err = activity_report("3456,Плавание,3h00m", 75.0, 1.8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownActivity);
        assert!(matches!(err, TrackerError::Stage { stage: "dispatch", .. }));
        assert!(matches!(err.root(), TrackerError::UnknownActivity(label) if label == "Плавание"));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = Calculator::default()
            .training_summary("3456,Бег,3h00m", 75.0, 1.8)
            .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["activity"], "Running");
        assert_eq!(json["duration_hours"], 3.0);
    }
}
