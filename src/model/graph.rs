// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::ids::NodeId;

/// Group name carried by spacer nodes.
pub const SPACER_GROUP: &str = "_";

/// Line-width factor applied to edge weights for rendering.
pub const EDGE_WIDTH_SCALE: f64 = 3.0;

/// Per-node attributes assigned by the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAttributes {
    id: NodeId,
    group: SmolStr,
    name: Option<String>,
    visible: bool,
    sort_key: i64,
}

impl NodeAttributes {
    pub fn roi(index: usize, group: &str, name: impl Into<String>, sort_key: i64) -> Self {
        Self {
            id: NodeId::Roi(index),
            group: SmolStr::new(group),
            name: Some(name.into()),
            visible: true,
            sort_key,
        }
    }

    pub fn spacer(seq: usize, sort_key: i64) -> Self {
        Self {
            id: NodeId::Spacer(seq),
            group: SmolStr::new_static(SPACER_GROUP),
            name: None,
            visible: false,
            sort_key,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `false` for spacers, which renderers draw fully transparent.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Alpha channel equivalent of [`NodeAttributes::visible`].
    pub fn alpha(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    pub fn sort_key(&self) -> i64 {
        self.sort_key
    }

    pub(crate) fn shift_sort_key(&mut self, delta: i64) {
        self.sort_key -= delta;
    }
}

/// A directed, weighted edge. Only nonzero matrix cells become edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self { source, target, weight }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `weight * EDGE_WIDTH_SCALE`, used as the rendered line width.
    pub fn scaled_weight(&self) -> f64 {
        self.weight * EDGE_WIDTH_SCALE
    }

    pub fn sqrt_weight(&self) -> f64 {
        self.weight.sqrt()
    }
}

/// Attributed directed graph handed to the renderer.
///
/// Nodes are stored in sequencer emission order; edges in row-major matrix order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectedGraph {
    nodes: Vec<NodeAttributes>,
    node_index: BTreeMap<NodeId, usize>,
    edges: Vec<Edge>,
}

impl DirectedGraph {
    pub(crate) fn from_parts(nodes: Vec<NodeAttributes>, edges: Vec<Edge>) -> Self {
        let node_index = nodes.iter().enumerate().map(|(pos, node)| (node.id(), pos)).collect();
        Self { nodes, node_index, edges }
    }

    pub fn nodes(&self) -> &[NodeAttributes] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeAttributes> {
        self.node_index.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, source: usize, target: usize) -> Option<&Edge> {
        self.edges.iter().find(|e| e.source == source && e.target == target)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn roi_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.id().is_spacer()).count()
    }

    pub fn spacer_count(&self) -> usize {
        self.nodes.len() - self.roi_count()
    }
}
