pub mod calculator;
pub mod config;

pub use calculator::{distance, mean_speed, running_calories, walking_calories, Calculator};
pub use config::CalculatorConfig;
