// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ndarray::{Array2, ArrayView2};

use crate::error::{CircosError, Result};

/// Square `n x n` table of connection strengths between ROI pairs.
///
/// Not required to be symmetric: cell `(i, j)` is the strength from ROI `i` to ROI `j`.
/// All cells are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityMatrix {
    values: Array2<f64>,
}

impl ConnectivityMatrix {
    pub fn new(values: Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(CircosError::ShapeMismatch { rows, cols, expected: rows });
        }
        if let Some(((row, col), _)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(CircosError::NonFiniteValue { row, col });
        }
        Ok(Self { values })
    }

    /// Builds a matrix from row vectors; rows of unequal length are a shape mismatch.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(CircosError::ShapeMismatch {
                rows: n_rows,
                cols: bad.len(),
                expected: n_rows,
            });
        }
        let flat = rows.into_iter().flatten().collect::<Vec<_>>();
        let values = Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| {
            CircosError::ShapeMismatch { rows: n_rows, cols: n_cols, expected: n_rows }
        })?;
        Self::new(values)
    }

    pub fn zeros(n: usize) -> Self {
        Self { values: Array2::zeros((n, n)) }
    }

    /// Number of ROIs (rows == cols).
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Array2<f64> {
        &mut self.values
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.values
    }

    /// Global `(min, max)` over every cell, or `None` for an empty matrix.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Fails with [`CircosError::ShapeMismatch`] unless the matrix is `expected x expected`.
    pub fn ensure_len(&self, expected: usize) -> Result<()> {
        let (rows, cols) = self.values.dim();
        if rows != expected || cols != expected {
            return Err(CircosError::ShapeMismatch { rows, cols, expected });
        }
        Ok(())
    }
}

impl TryFrom<Array2<f64>> for ConnectivityMatrix {
    type Error = CircosError;

    fn try_from(values: Array2<f64>) -> Result<Self> {
        Self::new(values)
    }
}
