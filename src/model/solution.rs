// src/model/solution.rs

/// Outputs of the Wilson formula for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqSolution {
    /// Q* = sqrt(2·K·V / S)
    pub optimal_quantity: f64,
    /// Time between replenishments, Q* / V, in the demand's period (years for annual demand).
    pub cycle_length: f64,
    /// S · Q*, shown to the user as the "periodic cost".
    pub periodic_cost: f64,
    /// TC(Q*) = K·V/Q* + S·Q*/2, the minimum of the plotted curve.
    pub minimum_total_cost: f64,
    /// V / Q*
    pub orders_per_year: f64,
}

/// One sample of the total-cost curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub quantity: f64,
    pub total_cost: f64,
}

/// Total cost sampled over a window around the optimum, plus the optimum itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCurve {
    pub points: Vec<CurvePoint>,
    pub optimum: CurvePoint,
}

impl CostCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) of the sampled quantities, widened to include the optimum.
    pub fn quantity_range(&self) -> (f64, f64) {
        self.points.iter().fold(
            (self.optimum.quantity, self.optimum.quantity),
            |(lo, hi), p| (lo.min(p.quantity), hi.max(p.quantity)),
        )
    }

    /// (min, max) of the sampled costs, widened to include the optimum.
    pub fn cost_range(&self) -> (f64, f64) {
        self.points.iter().fold(
            (self.optimum.total_cost, self.optimum.total_cost),
            |(lo, hi), p| (lo.min(p.total_cost), hi.max(p.total_cost)),
        )
    }
}
