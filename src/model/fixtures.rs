// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::atlas::AtlasTable;
use super::groups::{GroupBucket, HemisphereBuckets, RoiRef};
use super::matrix::ConnectivityMatrix;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Eight ROIs: two left groups, two right groups, one midline ("other") group.
///
/// Rows are deliberately not sorted by label or group.
pub(crate) fn atlas_small() -> AtlasTable {
    AtlasTable::new(
        strings(&["Label", "ROIname", "Lobe", "Hemi"]),
        vec![
            strings(&["1", "SFG_L", "Frontal", "L"]),
            strings(&["2", "SFG_R", "Frontal", "R"]),
            strings(&["5", "ITG_L", "Temporal", "L"]),
            strings(&["6", "ITG_R", "Temporal", "R"]),
            strings(&["3", "MFG_L", "Frontal", "L"]),
            strings(&["4", "MFG_R", "Frontal", "R"]),
            strings(&["7", "Vermis_1", "Cerebellum", ""]),
            strings(&["8", "Vermis_2", "Cerebellum", "M"]),
        ],
    )
}

/// Buckets matching [`atlas_small`].
pub(crate) fn buckets_small() -> HemisphereBuckets {
    let mut buckets = HemisphereBuckets::default();
    buckets.left.push("Frontal", RoiRef::new(0, "SFG_L"));
    buckets.left.push("Temporal", RoiRef::new(4, "ITG_L"));
    buckets.left.push("Frontal", RoiRef::new(2, "MFG_L"));
    buckets.right.push("Frontal", RoiRef::new(1, "SFG_R"));
    buckets.right.push("Temporal", RoiRef::new(5, "ITG_R"));
    buckets.right.push("Frontal", RoiRef::new(3, "MFG_R"));
    buckets.other.push("Cerebellum", RoiRef::new(6, "Vermis_1"));
    buckets.other.push("Cerebellum", RoiRef::new(7, "Vermis_2"));
    buckets
}

/// 8x8 matrix whose cell `(i, j)` is `i * 8 + j`, so every cell is distinct.
pub(crate) fn matrix_ramp8() -> ConnectivityMatrix {
    let rows = (0..8).map(|i| (0..8).map(|j| (i * 8 + j) as f64).collect()).collect();
    ConnectivityMatrix::from_rows(rows).expect("8x8 ramp")
}

pub(crate) fn single_group_bucket(group: &str, indices: &[usize]) -> GroupBucket {
    let mut bucket = GroupBucket::new();
    for &index in indices {
        bucket.push(group, RoiRef::new(index, format!("roi{index}")));
    }
    bucket
}
