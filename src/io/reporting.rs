// src/io/reporting.rs

use crate::error::Result;
use crate::model::CostCurve;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One CSV row. The highlighted optimum is written last with an empty index.
#[derive(Debug, Clone, Serialize)]
pub struct CurveRecord {
    pub index: Option<usize>,
    pub quantity: f64,
    pub total_cost: f64,
    pub is_optimum: bool,
}

fn records(curve: &CostCurve) -> impl Iterator<Item = CurveRecord> + '_ {
    let samples = curve.points.iter().enumerate().map(|(i, p)| CurveRecord {
        index: Some(i),
        quantity: p.quantity,
        total_cost: p.total_cost,
        is_optimum: false,
    });
    let optimum = std::iter::once(CurveRecord {
        index: None,
        quantity: curve.optimum.quantity,
        total_cost: curve.optimum.total_cost,
        is_optimum: true,
    });
    samples.chain(optimum)
}

/// Writes the sampled curve as CSV to any writer.
pub fn write_curve<W: Write>(writer: W, curve: &CostCurve) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records(curve) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the sampled curve to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g., "results/curve.csv").
/// * `curve` - The curve produced for the current calculation.
pub fn write_curve_csv(file_path: &Path, curve: &CostCurve) -> Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for record in records(curve) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(
        rows = curve.len() + 1,
        path = %file_path.display(),
        "exported cost curve"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurvePoint;

    fn small_curve() -> CostCurve {
        CostCurve {
            points: vec![
                CurvePoint {
                    quantity: 5.0,
                    total_cost: 30.0,
                },
                CurvePoint {
                    quantity: 7.5,
                    total_cost: 24.5,
                },
            ],
            optimum: CurvePoint {
                quantity: 10.0,
                total_cost: 20.0,
            },
        }
    }

    #[test]
    fn writes_header_samples_and_optimum() {
        let mut buf = Vec::new();
        write_curve(&mut buf, &small_curve()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,quantity,total_cost,is_optimum",
                "0,5.0,30.0,false",
                "1,7.5,24.5,false",
                ",10.0,20.0,true",
            ]
        );
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        write_curve_csv(&path, &small_curve()).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[2][3], "true");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("curve.csv");
        assert!(write_curve_csv(&path, &small_curve()).is_err());
    }
}
