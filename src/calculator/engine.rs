// src/calculator/engine.rs

use crate::calculator::config::CalculatorConfig;
use crate::error::Result;
use crate::io::{chart, reporting};
use crate::model::{CostCurve, EoqInputs, EoqSolution, RawInputs};
use crate::optimization::{sample_curve, solve};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything one calculation produces, handed to the display as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub inputs: EoqInputs,
    pub solution: EoqSolution,
    pub curve: CostCurve,
}

/// Runs one request: parse -> validate -> solve -> sample.
///
/// Nothing is computed unless all three fields parse and validate.
pub fn calculate(raw: &RawInputs, num_points: usize) -> Result<CalculationOutcome> {
    let inputs = raw.parse()?;
    inputs.validate()?;
    calculate_inputs(&inputs, num_points)
}

/// Solves and samples already-parsed inputs.
pub fn calculate_inputs(inputs: &EoqInputs, num_points: usize) -> Result<CalculationOutcome> {
    let solution = solve(inputs.annual_demand, inputs.order_cost, inputs.holding_cost_rate)?;
    let curve = sample_curve(
        inputs.annual_demand,
        inputs.order_cost,
        inputs.holding_cost_rate,
        solution.optimal_quantity,
        num_points,
    )?;

    Ok(CalculationOutcome {
        inputs: *inputs,
        solution,
        curve,
    })
}

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Nothing calculated yet.
    Idle,
    /// The last request succeeded.
    Computed,
    /// The last request failed; holds the message for the user.
    Failed(String),
}

/// State owned by the front end and passed to every calculation trigger.
///
/// A failed request leaves the previous outcome (and so the previous chart)
/// in place; only the status changes.
#[derive(Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    last_outcome: Option<CalculationOutcome>,
    status: Status,
    computations: u64,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            last_outcome: None,
            status: Status::Idle,
            computations: 0,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn last_outcome(&self) -> Option<&CalculationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Number of requests that reached the solver.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Handles one press of "calculate".
    pub fn submit(&mut self, raw: &RawInputs) -> Result<&CalculationOutcome> {
        info!(
            demand = %raw.annual_demand,
            order_cost = %raw.order_cost,
            holding_cost = %raw.holding_cost_rate,
            "calculation requested"
        );

        let inputs = match raw.parse().and_then(|inputs| inputs.validate().map(|()| inputs)) {
            Ok(inputs) => inputs,
            Err(err) => {
                warn!(error = %err, "rejected input");
                self.status = Status::Failed(err.user_message());
                return Err(err);
            }
        };

        self.computations += 1;
        match calculate_inputs(&inputs, self.config.num_points) {
            Ok(outcome) => {
                info!(
                    optimal_quantity = outcome.solution.optimal_quantity,
                    cycle_length = outcome.solution.cycle_length,
                    periodic_cost = outcome.solution.periodic_cost,
                    "calculation complete"
                );
                self.status = Status::Computed;
                Ok(self.last_outcome.insert(outcome))
            }
            Err(err) => {
                warn!(error = %err, "calculation failed");
                self.status = Status::Failed(err.user_message());
                Err(err)
            }
        }
    }

    /// Writes the configured chart and CSV files for the last outcome.
    ///
    /// Returns the paths written, empty when nothing is configured or
    /// nothing has been calculated yet.
    pub fn export(&self) -> Result<Vec<PathBuf>> {
        let Some(outcome) = &self.last_outcome else {
            return Ok(Vec::new());
        };

        let mut written = Vec::new();
        if let Some(path) = &self.config.chart_path {
            chart::write_chart_svg(
                path,
                &outcome.curve,
                self.config.chart_width,
                self.config.chart_height,
            )?;
            written.push(path.clone());
        }
        if let Some(path) = &self.config.csv_path {
            reporting::write_curve_csv(path, &outcome.curve)?;
            written.push(path.clone());
        }
        Ok(written)
    }
}
