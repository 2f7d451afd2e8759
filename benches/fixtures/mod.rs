// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use circograph::model::{ConnectivityMatrix, HemisphereBuckets, RoiRef};
use ndarray::Array2;

const LOBES: [&str; 6] = ["Frontal", "Parietal", "Temporal", "Occipital", "Limbic", "Insula"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// AAL-sized atlas.
    Small,
    /// Schaefer-400 plus subcortical extras.
    Medium,
    /// Dense parcellation.
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn roi_count(self) -> usize {
        match self {
            Self::Small => 116,
            Self::Medium => 432,
            Self::Large => 1000,
        }
    }

    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];
}

/// Even indices go left, odd indices go right, every 16th ROI is midline.
pub fn buckets(case: Case) -> HemisphereBuckets {
    let mut buckets = HemisphereBuckets::default();
    for index in 0..case.roi_count() {
        let lobe = LOBES[(index / 7) % LOBES.len()];
        let roi = RoiRef::new(index, format!("roi_{index:04}"));
        if index % 16 == 15 {
            buckets.other.push("Subcortical", roi);
        } else if index % 2 == 0 {
            buckets.left.push(lobe, roi);
        } else {
            buckets.right.push(lobe, roi);
        }
    }
    buckets
}

/// Symmetric matrix with a wide value spread and a zero diagonal.
pub fn matrix(case: Case) -> ConnectivityMatrix {
    let n = case.roi_count();
    let values = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            0.0
        } else {
            let (a, b) = (i.min(j) as u64, i.max(j) as u64);
            (a.wrapping_mul(2_654_435_761).wrapping_add(b.wrapping_mul(40_503)) % 10_007) as f64
        }
    });
    ConnectivityMatrix::new(values).expect("finite square matrix")
}
