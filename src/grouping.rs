// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Partitioning atlas rows into hemisphere buckets and named groups.

use tracing::debug;

use crate::error::Result;
use crate::model::{AtlasColumns, AtlasRow, AtlasTable, HemisphereBuckets, RoiRef};

/// Groups the atlas by hemisphere, then by the configured grouping column.
///
/// Fails with `MissingColumn` when any configured column is absent. The
/// `max(label) == matrix size` check belongs to the caller (see [`crate::store::load`]).
pub fn group_rois(atlas: &AtlasTable, columns: &AtlasColumns) -> Result<HemisphereBuckets> {
    let rows = atlas.rows(columns)?;
    let buckets = group_rows(&rows);
    debug!(
        rows = rows.len(),
        left = buckets.left.roi_count(),
        right = buckets.right.roi_count(),
        other = buckets.other.roi_count(),
        "grouped atlas rows"
    );
    Ok(buckets)
}

/// Same partition over already-typed rows. Row order is preserved inside every group.
pub fn group_rows(rows: &[AtlasRow]) -> HemisphereBuckets {
    let mut buckets = HemisphereBuckets::default();
    for row in rows {
        buckets
            .bucket_mut(row.hemisphere())
            .push(row.group(), RoiRef::new(row.matrix_index(), row.name()));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{group_rois, group_rows};
    use crate::error::CircosError;
    use crate::model::fixtures::{atlas_small, buckets_small};
    use crate::model::{AtlasColumns, AtlasRow, AtlasTable, Hemisphere, RoiRef};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn groups_fixture_atlas() {
        let buckets = group_rois(&atlas_small(), &AtlasColumns::default()).expect("group");
        assert_eq!(buckets, buckets_small());
    }

    #[test]
    fn one_roi_per_hemisphere_regardless_of_group() {
        let atlas = AtlasTable::new(
            strings(&["Label", "ROIname", "Lobe", "Hemi"]),
            vec![
                strings(&["1", "a", "Same", "L"]),
                strings(&["2", "b", "Same", "R"]),
                strings(&["3", "c", "Same", "X"]),
            ],
        );
        let buckets = group_rois(&atlas, &AtlasColumns::default()).expect("group");
        assert_eq!(buckets.left.roi_count(), 1);
        assert_eq!(buckets.right.roi_count(), 1);
        assert_eq!(buckets.other.roi_count(), 1);
        assert_eq!(buckets.other.get("Same"), Some(&[RoiRef::new(2, "c")][..]));
    }

    #[test]
    fn empty_buckets_are_still_produced() {
        let atlas = AtlasTable::new(
            strings(&["Label", "ROIname", "Lobe", "Hemi"]),
            vec![strings(&["1", "a", "Frontal", "L"])],
        );
        let buckets = group_rois(&atlas, &AtlasColumns::default()).expect("group");
        assert!(buckets.right.is_empty());
        assert!(buckets.other.is_empty());
    }

    #[test]
    fn custom_columns_and_symbols() {
        let columns = AtlasColumns {
            grouping: "Network".to_owned(),
            label: "id".to_owned(),
            roi_name: "region".to_owned(),
            hemisphere: "side".to_owned(),
            left_symbol: "lh".to_owned(),
            right_symbol: "rh".to_owned(),
        };
        let atlas = AtlasTable::new(
            strings(&["id", "region", "Network", "side"]),
            vec![strings(&["1", "a", "DMN", "lh"]), strings(&["2", "b", "DMN", "L"])],
        );
        let buckets = group_rois(&atlas, &columns).expect("group");
        assert_eq!(buckets.left.roi_count(), 1);
        assert_eq!(buckets.other.roi_count(), 1);
    }

    #[test]
    fn missing_grouping_column_is_reported() {
        let columns = AtlasColumns { grouping: "Network".to_owned(), ..AtlasColumns::default() };
        let err = group_rois(&atlas_small(), &columns).unwrap_err();
        assert!(matches!(err, CircosError::MissingColumn(name) if name == "Network"));
    }

    fn hemisphere() -> impl Strategy<Value = Hemisphere> {
        prop_oneof![Just(Hemisphere::Left), Just(Hemisphere::Right), Just(Hemisphere::Other)]
    }

    proptest! {
        #[test]
        fn every_row_lands_in_exactly_one_bucket(
            assignments in proptest::collection::vec((hemisphere(), 0usize..4), 0..40),
        ) {
            let rows = assignments
                .iter()
                .enumerate()
                .map(|(i, (hemi, group))| {
                    AtlasRow::new(i + 1, format!("roi{i}"), format!("g{group}"), *hemi)
                })
                .collect::<Vec<_>>();
            let buckets = group_rows(&rows);
            prop_assert_eq!(buckets.roi_count(), rows.len());

            let mut seen = [&buckets.left, &buckets.right, &buckets.other]
                .into_iter()
                .flat_map(|b| b.iter().flat_map(|(_, members)| members.iter().map(RoiRef::index)))
                .collect::<Vec<_>>();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..rows.len()).collect::<Vec<_>>());
        }
    }
}
