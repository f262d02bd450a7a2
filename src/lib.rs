//! Economic Order Quantity (Wilson model) calculator.
//!
//! Given yearly demand V, the fixed cost K of one order and the yearly cost S of
//! holding one unit, finds the order size that minimizes ordering plus holding
//! cost, and samples the total-cost curve around it for plotting.
//!
//! ```
//! use wilson_eoq::optimization::{sample_curve, solve};
//!
//! let solution = solve(100_000.0, 50.0, 2.0)?;
//! assert!((solution.optimal_quantity - 2236.068).abs() < 1e-3);
//!
//! let curve = sample_curve(100_000.0, 50.0, 2.0, solution.optimal_quantity, 100)?;
//! assert_eq!(curve.points.len(), 100);
//! # Ok::<(), wilson_eoq::EoqError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod io;
pub mod model;
pub mod optimization;

pub use error::{EoqError, Result};
