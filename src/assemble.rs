// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Building the attributed directed graph from a filtered matrix and sequenced nodes.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{CircosError, Result};
use crate::model::{ConnectivityMatrix, DirectedGraph, Edge, NodeAttributes, NodeId};

/// Combines the filtered matrix with per-node attributes.
///
/// Every matrix index needs exactly one attribute record; spacer records are carried through
/// unchanged. Each nonzero cell `(i, j)` becomes the edge `i -> j`, so a symmetric matrix
/// yields an edge in both directions.
pub fn assemble(matrix: &ConnectivityMatrix, nodes: Vec<NodeAttributes>) -> Result<DirectedGraph> {
    let n = matrix.len();

    let mut seen = BTreeSet::new();
    for node in &nodes {
        if let NodeId::Roi(index) = node.id() {
            if index >= n {
                return Err(CircosError::RoiOutOfRange { index, n });
            }
        }
        if !seen.insert(node.id()) {
            return Err(CircosError::DuplicateNode(node.id()));
        }
    }
    if let Some(index) = (0..n).find(|&i| !seen.contains(&NodeId::Roi(i))) {
        return Err(CircosError::UnassignedRoi { index });
    }

    let edges = matrix
        .values()
        .indexed_iter()
        .filter(|(_, w)| **w != 0.0)
        .map(|((source, target), &weight)| Edge::new(source, target, weight))
        .collect::<Vec<_>>();

    debug!(nodes = nodes.len(), edges = edges.len(), "assembled graph");
    Ok(DirectedGraph::from_parts(nodes, edges))
}
