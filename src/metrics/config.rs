//! Calculator constants and their serde-loadable configuration.

use crate::error::TrackerError;

/// Fraction of a person's height taken as the length of one step.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Multiplier applied to the base calorie formula for walking.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
/// Fixed stride, in meters, used by the daily step summary.
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const METERS_PER_KM: f64 = 1000.0;

/// Coefficients used by [`Calculator`](super::Calculator).
///
/// Missing JSON fields fall back to the constants above.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub step_length_coefficient: f64,
    pub walking_calories_coefficient: f64,
    pub default_step_length_m: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            step_length_coefficient: STEP_LENGTH_COEFFICIENT,
            walking_calories_coefficient: WALKING_CALORIES_COEFFICIENT,
            default_step_length_m: DEFAULT_STEP_LENGTH_M,
        }
    }
}

impl CalculatorConfig {
    /// Loads and validates a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, TrackerError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects coefficients that are not strictly positive and finite.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let fields = [
            ("step_length_coefficient", self.step_length_coefficient),
            ("walking_calories_coefficient", self.walking_calories_coefficient),
            ("default_step_length_m", self.default_step_length_m),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrackerError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_matches_constants() {
        let config = CalculatorConfig::default();
        assert_eq!(config.step_length_coefficient, 0.45);
        assert_eq!(config.walking_calories_coefficient, 0.5);
        assert_eq!(config.default_step_length_m, 0.65);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CalculatorConfig::from_json_str(r#"{"step_length_coefficient": 0.4}"#).unwrap();
        assert_eq!(config.step_length_coefficient, 0.4);
        assert_eq!(config.walking_calories_coefficient, WALKING_CALORIES_COEFFICIENT);

        let empty = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, CalculatorConfig::default());
    }

    #[test]
    fn test_rejects_bad_json_and_values() {
        let err = CalculatorConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));

        let err = CalculatorConfig::from_json_str(r#"{"unknown": 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = CalculatorConfig::from_json_str(r#"{"walking_calories_coefficient": 0}"#)
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfig(_)));
    }
}
