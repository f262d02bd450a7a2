pub mod inputs;
pub mod solution;

pub use inputs::{EoqInputs, RawInputs};
pub use solution::{CostCurve, CurvePoint, EoqSolution};
