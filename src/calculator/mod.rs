pub mod config;
pub mod engine;

pub use config::CalculatorConfig;
pub use engine::{calculate, calculate_inputs, CalculationOutcome, Calculator, Status};
