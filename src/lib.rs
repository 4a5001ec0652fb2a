#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Step-Tracker parses activity records such as `"678,0h50m"` or
//! `"3456,Бег,3h00m"` and derives distance, mean speed and calories from
//! them, given the user's weight and height.
//!
//! All computation is pure and per-call; the only side effect is logging
//! through `tracing`.

// Module for error types.
pub mod error;

// Module for shared value types (ActivityKind, BiometricProfile, ActivityMetrics).
pub mod types;

// Duration literal grammar.
pub mod duration;

// Module for record parsing.
pub mod parser;

// Module for the distance / speed / calorie formulas.
pub mod metrics;

// Report entry points.
pub mod report;

#[cfg(feature = "tracing-init")]
pub mod logging;

pub use error::{ErrorKind, TrackerError};
pub use metrics::{Calculator, CalculatorConfig};
pub use report::{activity_report, walking_report, DaySummary, TrainingSummary};
pub use types::{ActivityKind, ActivityMetrics, BiometricProfile};
