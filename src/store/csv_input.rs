// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CircosError, Result};
use crate::grouping::group_rows;
use crate::model::{AtlasColumns, AtlasTable, ConnectivityMatrix, HemisphereBuckets};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CircosError::Io { path: path.to_path_buf(), source })
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> CircosError + '_ {
    move |source| CircosError::Csv { path: path.to_path_buf(), source }
}

/// Reads a header-less numeric CSV into a square matrix.
///
/// Rows may differ in length on disk; that surfaces as `ShapeMismatch` rather than a CSV error.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<ConnectivityMatrix> {
    let path = path.as_ref();
    read_matrix_from(open(path)?, path)
}

/// Same as [`read_matrix`] over any reader; `origin` is only used in error messages.
pub fn read_matrix_from<R: io::Read>(reader: R, origin: &Path) -> Result<ConnectivityMatrix> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(csv_error(origin))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col_idx, field)| {
                field.parse::<f64>().map_err(|_| CircosError::ParseValue {
                    path: PathBuf::from(origin),
                    row: row_idx,
                    col: col_idx,
                    value: field.to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    let matrix = ConnectivityMatrix::from_rows(rows)?;
    debug!(path = %origin.display(), n = matrix.len(), "read connectivity matrix");
    Ok(matrix)
}

/// Reads an atlas CSV with a header row. Header names are trimmed; cells are kept verbatim.
pub fn read_atlas(path: impl AsRef<Path>) -> Result<AtlasTable> {
    let path = path.as_ref();
    read_atlas_from(open(path)?, path)
}

pub fn read_atlas_from<R: io::Read>(reader: R, origin: &Path) -> Result<AtlasTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers =
        csv_reader.headers().map_err(csv_error(origin))?.iter().map(str::to_owned).collect();
    let records = csv_reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(str::to_owned).collect::<Vec<_>>())
                .map_err(csv_error(origin))
        })
        .collect::<Result<Vec<_>>>()?;

    let table = AtlasTable::new(headers, records);
    debug!(path = %origin.display(), rows = table.len(), "read atlas");
    Ok(table)
}

/// Checks a loaded matrix against its atlas and groups the atlas.
///
/// Order of checks: matrix squareness (at construction), required columns, label validity,
/// `rows == max(label)`, then every label in `1..=max(label)` present.
pub fn validate_and_group(
    matrix: &ConnectivityMatrix,
    atlas: &AtlasTable,
    columns: &AtlasColumns,
) -> Result<HemisphereBuckets> {
    let rows = atlas.rows(columns)?;
    let max_label = rows.iter().map(|row| row.label()).max().unwrap_or(0);
    matrix.ensure_len(max_label)?;

    // Labels are unique, so a short table means a gap.
    if rows.len() < max_label {
        let present = rows.iter().map(|row| row.label()).collect::<BTreeSet<_>>();
        if let Some(label) = (1..=max_label).find(|label| !present.contains(label)) {
            return Err(CircosError::MissingLabel { label, expected: max_label });
        }
    }
    Ok(group_rows(&rows))
}

/// Loads and validates both inputs, returning the raw matrix and the three hemisphere buckets.
pub fn load(
    matrix_path: impl AsRef<Path>,
    atlas_path: impl AsRef<Path>,
    columns: &AtlasColumns,
) -> Result<(ConnectivityMatrix, HemisphereBuckets)> {
    let matrix_path = matrix_path.as_ref();
    let atlas_path = atlas_path.as_ref();

    let matrix = read_matrix(matrix_path)?;
    let atlas = read_atlas(atlas_path)?;
    let buckets = validate_and_group(&matrix, &atlas, columns)?;
    info!(
        matrix = %matrix_path.display(),
        atlas = %atlas_path.display(),
        rois = matrix.len(),
        "loaded connectivity inputs"
    );
    Ok((matrix, buckets))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{read_atlas_from, read_matrix_from, validate_and_group};
    use crate::error::CircosError;
    use crate::model::AtlasColumns;

    fn origin() -> &'static Path {
        Path::new("inline.csv")
    }

    #[test]
    fn reads_square_matrix_with_whitespace() {
        let m = read_matrix_from("0, 1.5\n2 ,0\n".as_bytes(), origin()).expect("matrix");
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(0, 1), Some(1.5));
        assert_eq!(m.get(1, 0), Some(2.0));
    }

    #[test]
    fn ragged_matrix_is_a_shape_mismatch() {
        let err = read_matrix_from("0,1,2\n3,4\n".as_bytes(), origin()).unwrap_err();
        assert!(matches!(err, CircosError::ShapeMismatch { .. }));
    }

    #[test]
    fn non_square_matrix_is_a_shape_mismatch() {
        let err = read_matrix_from("0,1,2\n3,4,5\n".as_bytes(), origin()).unwrap_err();
        assert!(matches!(err, CircosError::ShapeMismatch { rows: 2, cols: 3, .. }));
    }

    #[test]
    fn unparsable_cell_reports_position() {
        let err = read_matrix_from("0,1\nx,0\n".as_bytes(), origin()).unwrap_err();
        assert!(
            matches!(err, CircosError::ParseValue { row: 1, col: 0, ref value, .. } if value == "x")
        );
    }

    #[test]
    fn atlas_keeps_headers_and_rows() {
        let atlas = read_atlas_from(
            "Label,ROIname,Lobe,Hemi\n1,SFG,Frontal,L\n2,SFG,Frontal,R\n".as_bytes(),
            origin(),
        )
        .expect("atlas");
        assert_eq!(atlas.headers(), ["Label", "ROIname", "Lobe", "Hemi"]);
        assert_eq!(atlas.len(), 2);
    }

    #[test]
    fn matrix_size_must_match_max_label() {
        let m = read_matrix_from("0,1,2\n1,0,3\n2,3,0\n".as_bytes(), origin()).expect("matrix");
        let atlas = read_atlas_from(
            "Label,ROIname,Lobe,Hemi\n1,a,F,L\n2,b,F,R\n".as_bytes(),
            origin(),
        )
        .expect("atlas");
        let err = validate_and_group(&m, &atlas, &AtlasColumns::default()).unwrap_err();
        assert!(matches!(err, CircosError::ShapeMismatch { rows: 3, cols: 3, expected: 2 }));
    }

    #[test]
    fn label_gap_is_reported_before_layout() {
        let m = read_matrix_from("0,1,2\n1,0,3\n2,3,0\n".as_bytes(), origin()).expect("matrix");
        let atlas = read_atlas_from(
            "Label,ROIname,Lobe,Hemi\n1,a,F,L\n3,c,F,R\n".as_bytes(),
            origin(),
        )
        .expect("atlas");
        let err = validate_and_group(&m, &atlas, &AtlasColumns::default()).unwrap_err();
        assert!(matches!(err, CircosError::MissingLabel { label: 2, expected: 3 }), "{err}");
    }

    #[test]
    fn padded_hemisphere_symbols_fall_into_other() {
        let m = read_matrix_from("0,1\n1,0\n".as_bytes(), origin()).expect("matrix");
        let atlas = read_atlas_from(
            "Label,ROIname,Lobe,Hemi\n 1 ,a,F, L\n2,b,F ,R \n".as_bytes(),
            origin(),
        )
        .expect("atlas");
        let buckets = validate_and_group(&m, &atlas, &AtlasColumns::default()).expect("buckets");
        assert_eq!(buckets.left.roi_count(), 0);
        assert_eq!(buckets.right.roi_count(), 0);
        assert_eq!(buckets.other.roi_count(), 2);
        assert_eq!(buckets.other.group_names().collect::<Vec<_>>(), ["F", "F "]);
    }

    #[test]
    fn missing_label_column_is_reported_by_name() {
        let m = read_matrix_from("0,1\n1,0\n".as_bytes(), origin()).expect("matrix");
        let atlas =
            read_atlas_from("Id,ROIname,Lobe,Hemi\n1,a,F,L\n2,b,F,R\n".as_bytes(), origin())
                .expect("atlas");
        let err = validate_and_group(&m, &atlas, &AtlasColumns::default()).unwrap_err();
        assert!(matches!(err, CircosError::MissingColumn(name) if name == "Label"));
    }
}
