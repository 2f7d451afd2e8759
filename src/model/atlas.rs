// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{CircosError, Result};

/// Names of the atlas columns the pipeline reads, plus the hemisphere symbols.
///
/// Defaults match the Brainnetome atlas with cerebellum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasColumns {
    pub grouping: String,
    pub label: String,
    pub roi_name: String,
    pub hemisphere: String,
    pub left_symbol: String,
    pub right_symbol: String,
}

impl Default for AtlasColumns {
    fn default() -> Self {
        Self {
            grouping: "Lobe".to_owned(),
            label: "Label".to_owned(),
            roi_name: "ROIname".to_owned(),
            hemisphere: "Hemi".to_owned(),
            left_symbol: "L".to_owned(),
            right_symbol: "R".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    Left,
    Right,
    Other,
}

impl Hemisphere {
    /// Exact string match against the configured symbols; anything else (including an empty
    /// cell) is [`Hemisphere::Other`].
    pub fn classify(value: &str, columns: &AtlasColumns) -> Self {
        if value == columns.left_symbol {
            Self::Left
        } else if value == columns.right_symbol {
            Self::Right
        } else {
            Self::Other
        }
    }
}

/// One ROI of the atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasRow {
    label: usize,
    name: String,
    group: String,
    hemisphere: Hemisphere,
}

impl AtlasRow {
    pub fn new(
        label: usize,
        name: impl Into<String>,
        group: impl Into<String>,
        hemisphere: Hemisphere,
    ) -> Self {
        Self { label, name: name.into(), group: group.into(), hemisphere }
    }

    /// 1-based label as written in the atlas.
    pub fn label(&self) -> usize {
        self.label
    }

    /// Zero-based matrix index (`label - 1`).
    pub fn matrix_index(&self) -> usize {
        self.label - 1
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

/// A parsed atlas: header names plus string cells, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtlasTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl AtlasTable {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| CircosError::MissingColumn(name.to_owned()))
    }

    /// Extracts typed rows in file order.
    ///
    /// Checks run in column order grouping, label, name, hemisphere, then per-row label
    /// validity and uniqueness. Only the label cell is trimmed; group, name and hemisphere
    /// values are kept exactly as read.
    pub fn rows(&self, columns: &AtlasColumns) -> Result<Vec<AtlasRow>> {
        let group_col = self.column_index(&columns.grouping)?;
        let label_col = self.column_index(&columns.label)?;
        let name_col = self.column_index(&columns.roi_name)?;
        let hemi_col = self.column_index(&columns.hemisphere)?;

        let mut seen = BTreeSet::new();
        let mut rows = Vec::with_capacity(self.records.len());
        for (row_idx, record) in self.records.iter().enumerate() {
            let cell = |col: usize| record.get(col).map(String::as_str).unwrap_or("");

            let raw_label = cell(label_col);
            let label = parse_label(raw_label.trim()).ok_or_else(|| CircosError::InvalidLabel {
                row: row_idx,
                value: raw_label.to_owned(),
            })?;
            if !seen.insert(label) {
                return Err(CircosError::DuplicateLabel { label });
            }

            rows.push(AtlasRow::new(
                label,
                cell(name_col),
                cell(group_col),
                Hemisphere::classify(cell(hemi_col), columns),
            ));
        }
        Ok(rows)
    }

    /// Largest label in the table, or 0 for an empty table.
    pub fn max_label(&self, columns: &AtlasColumns) -> Result<usize> {
        Ok(self.rows(columns)?.iter().map(AtlasRow::label).max().unwrap_or(0))
    }
}

/// Accepts `12` and integral floats such as `12.0` (spreadsheets often export labels that way).
fn parse_label(raw: &str) -> Option<usize> {
    if let Ok(label) = raw.parse::<usize>() {
        return (label >= 1).then_some(label);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= usize::MAX as f64)
        .then_some(value as usize)
}
