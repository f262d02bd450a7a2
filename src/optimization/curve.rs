// src/optimization/curve.rs

use crate::error::{EoqError, Result};
use crate::model::{CostCurve, CurvePoint, EoqInputs};
use crate::optimization::wilson::total_cost;
use tracing::debug;

/// Number of samples drawn when nothing else is configured.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Samples the total-cost curve around the optimum for plotting.
///
/// Quantities start at half the optimum and advance by `optimal_quantity / num_points`:
///
/// ```text
/// q_i = 0.5·Q* + i·(Q* / num_points),  i in 0..num_points
/// ```
///
/// so the window runs from 0.5·Q* up to 1.5·Q* minus one step. The optimum
/// itself only lands on a sample when `num_points` is even, which is why it is
/// returned separately.
///
/// # Errors
/// `InvalidInput` if the model inputs are invalid, `optimal_quantity` is not
/// a positive finite number, or `num_points` is zero.
pub fn sample_curve(
    annual_demand: f64,
    order_cost: f64,
    holding_cost_rate: f64,
    optimal_quantity: f64,
    num_points: usize,
) -> Result<CostCurve> {
    EoqInputs::new(annual_demand, order_cost, holding_cost_rate).validate()?;

    if !optimal_quantity.is_finite() || optimal_quantity <= 0.0 {
        return Err(EoqError::invalid(
            "optimal quantity",
            optimal_quantity,
            "must be greater than zero",
        ));
    }
    if num_points == 0 {
        return Err(EoqError::invalid(
            "num points",
            0.0,
            "at least one sample is required",
        ));
    }

    let start = 0.5 * optimal_quantity;
    let step = optimal_quantity / num_points as f64;
    let cost_at = |quantity: f64| CurvePoint {
        quantity,
        total_cost: total_cost(annual_demand, order_cost, holding_cost_rate, quantity),
    };

    let points: Vec<CurvePoint> = (0..num_points)
        .map(|i| cost_at(start + i as f64 * step))
        .collect();
    let optimum = cost_at(optimal_quantity);

    // Near the top of the f64 range TC(0.5·Q*) can overflow even though TC(Q*) fits.
    if let Some(bad) = points
        .iter()
        .chain(std::iter::once(&optimum))
        .find(|p| !p.total_cost.is_finite() || p.quantity <= 0.0)
    {
        return Err(EoqError::invalid(
            "total cost",
            bad.total_cost,
            "inputs are out of numeric range",
        ));
    }

    debug!(
        samples = points.len(),
        start,
        step,
        optimum_cost = optimum.total_cost,
        "sampled cost curve"
    );

    Ok(CostCurve { points, optimum })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::wilson::solve;
    use approx::assert_relative_eq;

    fn reference_curve(num_points: usize) -> CostCurve {
        let q = solve(100_000.0, 50.0, 2.0).unwrap().optimal_quantity;
        sample_curve(100_000.0, 50.0, 2.0, q, num_points).unwrap()
    }

    #[test]
    fn returns_exactly_the_requested_number_of_points() {
        assert_eq!(reference_curve(DEFAULT_CURVE_POINTS).len(), 100);
        assert_eq!(reference_curve(7).len(), 7);
        assert_eq!(reference_curve(1).len(), 1);
    }

    #[test]
    fn starts_at_half_the_optimum_with_constant_step() {
        let curve = reference_curve(100);
        let q = curve.optimum.quantity;
        assert_relative_eq!(curve.points[0].quantity, 0.5 * q, max_relative = 1e-12);

        let step = q / 100.0;
        for pair in curve.points.windows(2) {
            assert_relative_eq!(pair[1].quantity - pair[0].quantity, step, epsilon = 1e-9);
        }
        let last = curve.points.last().unwrap().quantity;
        assert_relative_eq!(last, 0.5 * q + 99.0 * step, max_relative = 1e-12);
        assert!(last < 1.5 * q);
    }

    #[test]
    fn highlighted_point_is_the_curve_minimum() {
        let curve = reference_curve(100);
        assert_relative_eq!(curve.optimum.quantity, 2236.068, epsilon = 1e-3);
        assert_relative_eq!(curve.optimum.total_cost, 4472.136, epsilon = 1e-3);
        for p in &curve.points {
            assert!(curve.optimum.total_cost <= p.total_cost * (1.0 + 1e-12));
        }
    }

    #[test]
    fn each_sample_follows_the_total_cost_function() {
        let curve = reference_curve(10);
        for p in &curve.points {
            let expected = 50.0 * 100_000.0 / p.quantity + 2.0 * p.quantity / 2.0;
            assert_relative_eq!(p.total_cost, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn sampling_is_repeatable() {
        assert_eq!(reference_curve(50), reference_curve(50));
    }

    #[test]
    fn zero_points_is_rejected() {
        let err = sample_curve(100.0, 50.0, 2.0, 70.7, 0).unwrap_err();
        assert!(matches!(err, EoqError::InvalidInput { field: "num points", .. }));
    }

    #[test]
    fn degenerate_optimum_is_rejected() {
        for q in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = sample_curve(100.0, 50.0, 2.0, q, 100).unwrap_err();
            assert!(matches!(
                err,
                EoqError::InvalidInput { field: "optimal quantity", .. }
            ));
        }
    }

    #[test]
    fn overflowing_sample_cost_is_rejected() {
        // TC(Q*) is about 1.65e308, twice that at the left edge of the window.
        let (v, k, s) = (8e307, 1.0, 1.7e308);
        let q = solve(v, k, s).unwrap().optimal_quantity;
        let err = sample_curve(v, k, s, q, 100).unwrap_err();
        assert!(matches!(err, EoqError::InvalidInput { field: "total cost", .. }));
    }

    #[test]
    fn invalid_model_inputs_propagate() {
        let err = sample_curve(0.0, 50.0, 2.0, 10.0, 100).unwrap_err();
        assert!(matches!(
            err,
            EoqError::InvalidInput { field: "annual demand", .. }
        ));
    }
}
