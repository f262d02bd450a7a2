pub mod chart;
pub mod display;
pub mod form;
pub mod reporting;
