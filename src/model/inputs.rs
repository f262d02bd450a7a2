// src/model/inputs.rs

use crate::error::{EoqError, Result};

/// The three fields of the form exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub annual_demand: String,
    pub order_cost: String,
    pub holding_cost_rate: String,
}

impl RawInputs {
    pub fn new(
        annual_demand: impl Into<String>,
        order_cost: impl Into<String>,
        holding_cost_rate: impl Into<String>,
    ) -> Self {
        Self {
            annual_demand: annual_demand.into(),
            order_cost: order_cost.into(),
            holding_cost_rate: holding_cost_rate.into(),
        }
    }

    /// Reads all three fields as numbers.
    ///
    /// Only checks that each field is numeric. Range checks happen in
    /// [`EoqInputs::validate`], so a form can tell "not a number" apart
    /// from "a number the model can't use".
    pub fn parse(&self) -> Result<EoqInputs> {
        Ok(EoqInputs {
            annual_demand: parse_field("annual demand", &self.annual_demand)?,
            order_cost: parse_field("order cost", &self.order_cost)?,
            holding_cost_rate: parse_field("holding cost", &self.holding_cost_rate)?,
        })
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| EoqError::Parse {
        field,
        raw: raw.to_string(),
    })
}

/// Parameters of the Wilson model.
///
/// * `annual_demand` (V) - units consumed per year.
/// * `order_cost` (K) - fixed cost of one replenishment, whatever its size.
/// * `holding_cost_rate` (S) - cost of keeping one unit in stock for a year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqInputs {
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost_rate: f64,
}

impl EoqInputs {
    pub fn new(annual_demand: f64, order_cost: f64, holding_cost_rate: f64) -> Self {
        Self {
            annual_demand,
            order_cost,
            holding_cost_rate,
        }
    }

    /// All three parameters must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_positive("annual demand", self.annual_demand)?;
        check_positive("order cost", self.order_cost)?;
        check_positive("holding cost", self.holding_cost_rate)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EoqError::invalid(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(EoqError::invalid(field, value, "must be greater than zero"));
    }
    Ok(())
}
