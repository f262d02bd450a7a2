// src/io/chart.rs

//! SVG rendering of the total-cost curve.
//!
//! The chart is rebuilt from scratch for every calculation; nothing is kept
//! between renders.

use crate::error::{EoqError, Result};
use crate::model::CostCurve;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

pub const CHART_TITLE: &str = "Total cost in relation to order quantity";
pub const X_AXIS_LABEL: &str = "quantity";
pub const Y_AXIS_LABEL: &str = "total cost";
pub const CURVE_LABEL: &str = "L(q)=k * v / q + s * q / 2";

fn chart_err<E: std::fmt::Display>(err: E) -> EoqError {
    EoqError::Chart(err.to_string())
}

/// Legend text for the highlighted minimum.
pub fn optimum_label(curve: &CostCurve) -> String {
    format!("min({},{})", curve.optimum.quantity, curve.optimum.total_cost)
}

/// Pads a range so a flat series still gets a drawable axis.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = ((hi - lo) * 0.05).max(hi.abs() * 1e-3).max(1e-9);
    (lo - pad, hi + pad)
}

/// Renders the curve and its optimum to an SVG document.
pub fn render_svg(curve: &CostCurve, width: u32, height: u32) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(EoqError::Chart(format!(
            "chart size must be non-zero, got {}x{}",
            width, height
        )));
    }
    if curve.is_empty() {
        return Err(EoqError::Chart("no samples to plot".into()));
    }

    let (x_lo, x_hi) = curve.quantity_range();
    let (y_lo, y_hi) = curve.cost_range();
    let (x_lo, x_hi) = padded(x_lo, x_hi);
    let (y_lo, y_hi) = padded(y_lo, y_hi);
    // plotters never returns from an unbounded axis.
    if ![x_lo, x_hi, y_lo, y_hi].iter().all(|v| v.is_finite()) {
        return Err(EoqError::Chart(format!(
            "axis range is not finite: quantity {}..{}, cost {}..{}",
            x_lo, x_hi, y_lo, y_hi
        )));
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(
                curve.points.iter().map(|p| (p.quantity, p.total_cost)),
                &BLUE,
            ))
            .map_err(chart_err)?
            .label(CURVE_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        // Red face, blue rim.
        let optimum = (curve.optimum.quantity, curve.optimum.total_cost);
        chart
            .draw_series([
                Circle::new(optimum, 8, RED.filled()),
                Circle::new(optimum, 8, BLUE.stroke_width(2)),
            ])
            .map_err(chart_err)?
            .label(optimum_label(curve))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(svg)
}

/// Renders the chart and writes it to `file_path`.
pub fn write_chart_svg(file_path: &Path, curve: &CostCurve, width: u32, height: u32) -> Result<()> {
    let svg = render_svg(curve, width, height)?;
    std::fs::write(file_path, svg)?;
    info!(path = %file_path.display(), width, height, "rendered cost chart");
    Ok(())
}
