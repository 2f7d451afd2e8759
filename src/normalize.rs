// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Min-max normalization plus thresholding of connectivity strengths.
//!
//! The default entry point borrows the caller's matrix and returns a new one, so a raw matrix
//! can be re-thresholded at different levels. [`normalize_and_threshold_in_place`] is the
//! explicit mutating variant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CircosError, Result};
use crate::model::ConnectivityMatrix;

/// What to do when every cell holds the same value (`max == min`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Every cell becomes 0, so the graph has no edges.
    #[default]
    ZeroWeight,
    /// Fail with [`CircosError::DegenerateMatrix`].
    Reject,
}

/// Rescales to `[0, 1]` with the global min/max, then zeroes entries strictly below
/// `threshold`. A constant matrix becomes all zeros.
pub fn normalize_and_threshold(
    matrix: &ConnectivityMatrix,
    threshold: f64,
) -> Result<ConnectivityMatrix> {
    normalize_and_threshold_with(matrix, threshold, DegeneratePolicy::default())
}

pub fn normalize_and_threshold_with(
    matrix: &ConnectivityMatrix,
    threshold: f64,
    policy: DegeneratePolicy,
) -> Result<ConnectivityMatrix> {
    let mut filtered = matrix.clone();
    normalize_and_threshold_in_place(&mut filtered, threshold, policy)?;
    Ok(filtered)
}

/// Same as [`normalize_and_threshold_with`] but overwrites `matrix`.
///
/// On error the matrix is left untouched.
pub fn normalize_and_threshold_in_place(
    matrix: &mut ConnectivityMatrix,
    threshold: f64,
    policy: DegeneratePolicy,
) -> Result<()> {
    validate_threshold(threshold)?;

    let Some((min, max)) = matrix.min_max() else {
        return match policy {
            DegeneratePolicy::ZeroWeight => Ok(()),
            DegeneratePolicy::Reject => Err(CircosError::DegenerateMatrix { value: f64::NAN }),
        };
    };

    let span = max - min;
    if span == 0.0 {
        debug!(value = min, "constant connectivity matrix");
        return match policy {
            DegeneratePolicy::ZeroWeight => {
                matrix.values_mut().fill(0.0);
                Ok(())
            }
            DegeneratePolicy::Reject => Err(CircosError::DegenerateMatrix { value: min }),
        };
    }

    let mut kept = 0usize;
    matrix.values_mut().mapv_inplace(|v| {
        let normalized = (v - min) / span;
        if normalized < threshold {
            0.0
        } else {
            kept += 1;
            normalized
        }
    });
    debug!(n = matrix.len(), threshold, min, max, kept, "normalized connectivity matrix");
    Ok(())
}

pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(CircosError::InvalidThreshold(threshold))
    }
}
