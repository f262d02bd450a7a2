// src/calculator/config.rs

use crate::error::{EoqError, Result};
use crate::optimization::DEFAULT_CURVE_POINTS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Presentation settings. None of these change the model itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Samples drawn on the cost curve.
    pub num_points: usize,
    /// Where to write the SVG chart, if anywhere.
    pub chart_path: Option<PathBuf>,
    /// Where to write the sampled curve as CSV, if anywhere.
    pub csv_path: Option<PathBuf>,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Fallback filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_CURVE_POINTS,
            chart_path: None,
            csv_path: None,
            chart_width: 800,
            chart_height: 600,
            log_level: "info".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EoqError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EoqError::Config(e.to_string()))
    }

    /// Applies `EOQ_*` environment variables on top of the current values.
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`with_env_override`](Self::with_env_override) with an explicit lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(points) = lookup("EOQ_POINTS") {
            self.num_points = points.trim().parse().map_err(|_| {
                EoqError::Config(format!("EOQ_POINTS must be a whole number, got {:?}", points))
            })?;
        }
        if let Some(path) = lookup("EOQ_CHART_PATH") {
            self.chart_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("EOQ_CSV_PATH") {
            self.csv_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("EOQ_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.num_points == 0 {
            errors.push("num_points must be at least 1".to_string());
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            errors.push(format!(
                "chart size must be non-zero, got {}x{}",
                self.chart_width, self.chart_height
            ));
        }
        if self.log_level.trim().is_empty() {
            errors.push("log_level must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EoqError::Config(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_sample_one_hundred_points() {
        let config = CalculatorConfig::default();
        assert_eq!(config.num_points, 100);
        assert_eq!((config.chart_width, config.chart_height), (800, 600));
        assert!(config.chart_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CalculatorConfig::from_toml(
            r#"
            num_points = 40
            chart_path = "out/chart.svg"
            "#,
        )
        .unwrap();
        assert_eq!(config.num_points, 40);
        assert_eq!(config.chart_path, Some(PathBuf::from("out/chart.svg")));
        assert_eq!(config.chart_width, 800);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = CalculatorConfig::from_toml("num_points = \"many\"").unwrap_err();
        assert!(matches!(err, EoqError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eoq.toml");
        std::fs::write(&path, "chart_width = 1024\nlog_level = \"debug\"\n").unwrap();
        let config = CalculatorConfig::load(&path).unwrap();
        assert_eq!(config.chart_width, 1024);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = CalculatorConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, EoqError::Config(_)));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [("EOQ_POINTS", "25"), ("EOQ_CSV_PATH", "curve.csv")]
            .into_iter()
            .collect();
        let config = CalculatorConfig::default()
            .with_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.num_points, 25);
        assert_eq!(config.csv_path, Some(PathBuf::from("curve.csv")));
        assert!(config.chart_path.is_none());
    }

    #[test]
    fn non_numeric_point_override_is_rejected() {
        let err = CalculatorConfig::default()
            .with_overrides_from(|key| (key == "EOQ_POINTS").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, EoqError::Config(_)));
    }

    #[test]
    fn validate_collects_every_problem() {
        let config = CalculatorConfig {
            num_points: 0,
            chart_width: 0,
            ..CalculatorConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("num_points"));
        assert!(err.contains("chart size"));
    }
}
