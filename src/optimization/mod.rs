pub mod curve;
pub mod wilson;

pub use curve::{sample_curve, DEFAULT_CURVE_POINTS};
pub use wilson::{solve, total_cost};
