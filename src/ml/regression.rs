//! Ordinary least squares with intercept.
//!
//! Features are centered before solving, and the system is solved through an
//! SVD pseudo-inverse, so collinear features get the minimum-norm solution
//! instead of an error.

use crate::errors::{AppError, AppResult};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Singular values below this are treated as zero.
const SVD_EPS: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegression {
    /// Fit `targets ≈ rows · coefficients + intercept`.
    pub fn fit(features: &[&str], rows: &[Vec<f64>], targets: &[f64]) -> AppResult<Self> {
        let n = rows.len();
        let k = features.len();

        if n < 2 {
            return Err(AppError::Model(format!(
                "at least 2 samples are required, got {n}"
            )));
        }
        if targets.len() != n {
            return Err(AppError::Model(format!(
                "{} targets for {} samples",
                targets.len(),
                n
            )));
        }
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != k) {
            return Err(AppError::Model(format!(
                "sample {} has {} features, expected {}",
                i,
                r.len(),
                k
            )));
        }

        let x = DMatrix::from_fn(n, k, |i, j| rows[i][j]);
        let y = DVector::from_column_slice(targets);

        let x_mean: Vec<f64> = (0..k).map(|j| x.column(j).mean()).collect();
        let y_mean = y.mean();

        let xc = DMatrix::from_fn(n, k, |i, j| x[(i, j)] - x_mean[j]);
        let yc = y.add_scalar(-y_mean);

        let coef = xc
            .svd(true, true)
            .solve(&yc, SVD_EPS)
            .map_err(|e| AppError::Model(e.to_string()))?;

        let intercept = y_mean - coef.iter().zip(&x_mean).map(|(c, m)| c * m).sum::<f64>();

        Ok(Self {
            features: features.iter().map(|f| f.to_string()).collect(),
            coefficients: coef.iter().copied().collect(),
            intercept,
        })
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    /// Mean squared error over a set of samples.
    pub fn mse(&self, rows: &[Vec<f64>], targets: &[f64]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let sum: f64 = rows
            .iter()
            .zip(targets)
            .map(|(r, t)| (self.predict(r) - t).powi(2))
            .sum();
        sum / rows.len() as f64
    }

    /// Serialize as pretty JSON.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
