// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error taxonomy shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::NodeId;

pub type Result<T> = std::result::Result<T, CircosError>;

/// Every precondition failure carries the offending values so callers can report them verbatim.
#[derive(Debug, Error)]
pub enum CircosError {
    #[error("matrix shape mismatch: {rows} rows x {cols} cols, expected {expected} x {expected}")]
    ShapeMismatch { rows: usize, cols: usize, expected: usize },

    #[error("there is no column named {0:?} in the provided atlas")]
    MissingColumn(String),

    #[error("threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),

    #[error("node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("matrix is constant ({value}); normalization is undefined")]
    DegenerateMatrix { value: f64 },

    #[error("matrix cell ({row}, {col}) is not finite")]
    NonFiniteValue { row: usize, col: usize },

    #[error("atlas row {row}: label {value:?} is not a positive integer")]
    InvalidLabel { row: usize, value: String },

    #[error("atlas label {label} appears more than once")]
    DuplicateLabel { label: usize },

    #[error("atlas has no row for label {label} (labels must cover 1..={expected})")]
    MissingLabel { label: usize, expected: usize },

    #[error("roi index {index} has no node attributes")]
    UnassignedRoi { index: usize },

    #[error("roi index {index} is outside a {n}-roi matrix")]
    RoiOutOfRange { index: usize, n: usize },

    #[error("node {0} has more than one attribute record")]
    DuplicateNode(NodeId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{path:?} row {row}, column {col}: cannot parse {value:?} as a number")]
    ParseValue { path: PathBuf, row: usize, col: usize, value: String },

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
