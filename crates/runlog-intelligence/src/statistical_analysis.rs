// ABOUTME: Statistical helpers for pace trend detection
// ABOUTME: Ordinary least squares regression over (x, y) points and coefficient of variation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (0-1), 0 when y has no variance
    pub r_squared: f64,
    /// Number of points fitted
    pub sample_size: usize,
}

/// Stateless statistics over fully known inputs
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit `y = slope * x + intercept` by ordinary least squares.
    ///
    /// Sums are taken about the means so that large x values (epoch
    /// milliseconds) do not lose precision.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given or every x is equal.
    pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if points.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
        });

        if sxx.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);
        let r_squared = if syy.abs() < f64::EPSILON {
            0.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            sample_size: points.len(),
        })
    }

    /// Arithmetic mean, 0 for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation, 0 for an empty slice
    #[must_use]
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / values.len() as f64;
        variance.sqrt()
    }

    /// Population standard deviation divided by the mean. A zero mean yields 0.
    #[must_use]
    pub fn coefficient_of_variation(values: &[f64]) -> f64 {
        let mean = Self::mean(values);
        if mean.abs() < f64::EPSILON {
            return 0.0;
        }
        Self::population_std_dev(values) / mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let result = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!((result.slope - 2.0).abs() < 1e-12);
        assert!((result.intercept - 1.0).abs() < 1e-12);
        assert!((result.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_line_has_zero_slope() {
        let points = [(0.0, 300.0), (86_400_000.0, 300.0), (172_800_000.0, 300.0)];
        let result = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!(result.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_x_values_keep_sign() {
        let base = 1_709_276_400_000.0;
        let points = [(base, 306.0), (base + 86_400_000.0, 305.0), (base + 172_800_000.0, 302.0)];
        let result = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!(result.slope < 0.0);
    }

    #[test]
    fn test_regression_rejects_degenerate_input() {
        assert!(StatisticalAnalyzer::linear_regression(&[(1.0, 1.0)]).is_err());
        assert!(StatisticalAnalyzer::linear_regression(&[(5.0, 1.0), (5.0, 2.0)]).is_err());
    }

    #[test]
    fn test_coefficient_of_variation() {
        assert!(StatisticalAnalyzer::coefficient_of_variation(&[300.0, 300.0, 300.0]).abs() < 1e-12);
        let cv = StatisticalAnalyzer::coefficient_of_variation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((cv - 0.4).abs() < 1e-12);
        assert!(StatisticalAnalyzer::coefficient_of_variation(&[]).abs() < f64::EPSILON);
    }
}
