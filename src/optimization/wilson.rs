// src/optimization/wilson.rs

//! The Wilson (EOQ) model.
//!
//! Yearly cost of keeping a product in stock, ignoring the purchase price
//! (it does not depend on how much is ordered at a time):
//!
//! ```text
//! TC(q) = K·V/q + S·q/2
//! ```
//!
//! The first term is the ordering cost (V/q deliveries a year at K each),
//! the second the holding cost of an average stock of q/2 units.

use crate::error::{EoqError, Result};
use crate::model::{EoqInputs, EoqSolution};
use tracing::debug;

/// Total yearly cost when ordering `quantity` units at a time.
///
/// # Formula
/// TC(q) = order_cost · annual_demand / q + holding_cost_rate · q / 2
pub fn total_cost(annual_demand: f64, order_cost: f64, holding_cost_rate: f64, quantity: f64) -> f64 {
    order_cost * annual_demand / quantity + holding_cost_rate * quantity / 2.0
}

/// Solves the Wilson model in closed form.
///
/// # Formula
/// Q* = sqrt(2·K·V / S)
///
/// Cycle length = Q* / V, periodic cost = S · Q*.
///
/// # Arguments
/// * `annual_demand` - V, units consumed per year.
/// * `order_cost` - K, fixed cost per replenishment order.
/// * `holding_cost_rate` - S, cost of holding one unit for one year.
///
/// # Errors
/// `InvalidInput` when any argument is zero, negative or non-finite, or when
/// the result does not fit in an `f64`.
pub fn solve(annual_demand: f64, order_cost: f64, holding_cost_rate: f64) -> Result<EoqSolution> {
    EoqInputs::new(annual_demand, order_cost, holding_cost_rate).validate()?;

    let optimal_quantity = (2.0 * order_cost * annual_demand / holding_cost_rate).sqrt();
    if !optimal_quantity.is_finite() || optimal_quantity <= 0.0 {
        return Err(EoqError::invalid(
            "optimal quantity",
            optimal_quantity,
            "inputs are out of numeric range",
        ));
    }

    let cycle_length = optimal_quantity / annual_demand;
    let periodic_cost = holding_cost_rate * optimal_quantity;
    let minimum_total_cost = total_cost(annual_demand, order_cost, holding_cost_rate, optimal_quantity);
    let orders_per_year = annual_demand / optimal_quantity;

    // Each derived value is positive in exact arithmetic; zero means underflow.
    for (field, value) in [
        ("cycle length", cycle_length),
        ("periodic cost", periodic_cost),
        ("minimum total cost", minimum_total_cost),
        ("orders per year", orders_per_year),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(EoqError::invalid(field, value, "inputs are out of numeric range"));
        }
    }

    debug!(
        optimal_quantity,
        cycle_length, periodic_cost, minimum_total_cost, "solved wilson model"
    );

    Ok(EoqSolution {
        optimal_quantity,
        cycle_length,
        periodic_cost,
        minimum_total_cost,
        orders_per_year,
    })
}
