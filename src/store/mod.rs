// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading connectivity inputs from disk.
//!
//! The matrix is a header-less numeric CSV; the atlas is a CSV with a header row. Loading runs
//! every shape/column check before anything is grouped.

pub mod csv_input;

pub use csv_input::{
    load, read_atlas, read_atlas_from, read_matrix, read_matrix_from, validate_and_group,
};
