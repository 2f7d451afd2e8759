// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Inputs (matrix, atlas) are immutable once loaded; groups, node attributes and the graph are
//! derived per layout request.

pub mod atlas;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod groups;
pub mod ids;
pub mod matrix;

pub use atlas::{AtlasColumns, AtlasRow, AtlasTable, Hemisphere};
pub use graph::{DirectedGraph, Edge, NodeAttributes, EDGE_WIDTH_SCALE, SPACER_GROUP};
pub use groups::{GroupBucket, HemisphereBuckets, RoiRef};
pub use ids::{NodeId, ParseNodeIdError};
pub use matrix::ConnectivityMatrix;
