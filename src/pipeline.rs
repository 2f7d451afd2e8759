// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end layout: normalize, sequence, assemble, place.
//!
//! Nothing here is cached; a new threshold or grouping means a new call.

use std::path::Path;

use tracing::{debug, info_span};

use crate::assemble::assemble;
use crate::config::CircosConfig;
use crate::error::Result;
use crate::layout::{
    offset_angle_for, sequence_nodes, ArcSpan, LabelPlacement, PositionCalculator, RingPoint,
    SequencerConfig,
};
use crate::model::{ConnectivityMatrix, DirectedGraph, HemisphereBuckets, NodeId};
use crate::normalize::normalize_and_threshold_with;
use crate::store;

/// Sequences the buckets with default constants and `padding_size`, then assembles the graph.
///
/// `matrix` is used as-is (normally the output of normalization). Returns the graph and the
/// final circular node order.
pub fn sequence_and_assemble(
    matrix: &ConnectivityMatrix,
    buckets: &HemisphereBuckets,
    padding_size: usize,
) -> Result<(DirectedGraph, Vec<NodeId>)> {
    sequence_and_assemble_with(
        matrix,
        buckets,
        &SequencerConfig::default().with_padding_size(padding_size),
    )
}

pub fn sequence_and_assemble_with(
    matrix: &ConnectivityMatrix,
    buckets: &HemisphereBuckets,
    config: &SequencerConfig,
) -> Result<(DirectedGraph, Vec<NodeId>)> {
    let sequence = sequence_nodes(buckets, config)?;
    let order = sequence.node_order();
    let graph = assemble(matrix, sequence.into_nodes())?;
    Ok((graph, order))
}

/// One ring slot in final order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub node: NodeId,
    pub point: RingPoint,
    /// Present for visible ROIs only.
    pub label: Option<LabelPlacement>,
}

/// A maximal run of consecutive slots holding visible nodes of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupArc {
    pub group: String,
    pub first_slot: usize,
    pub slot_count: usize,
    pub arc: ArcSpan,
}

/// Everything a renderer needs: the attributed graph plus where each node sits.
#[derive(Debug, Clone, PartialEq)]
pub struct CircosLayout {
    graph: DirectedGraph,
    calculator: PositionCalculator,
    slots: Vec<Slot>,
    group_arcs: Vec<GroupArc>,
}

impl CircosLayout {
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    pub fn calculator(&self) -> &PositionCalculator {
        &self.calculator
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn node_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().map(|slot| slot.node)
    }

    pub fn slot_of(&self, node: NodeId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.node == node)
    }

    pub fn group_arcs(&self) -> &[GroupArc] {
        &self.group_arcs
    }
}

/// Runs the whole chain on a raw matrix.
pub fn build_circos_layout(
    raw: &ConnectivityMatrix,
    buckets: &HemisphereBuckets,
    config: &CircosConfig,
) -> Result<CircosLayout> {
    config.validate()?;
    let span = info_span!("circos_layout", rois = raw.len(), threshold = config.threshold);
    let _guard = span.enter();

    let filtered = normalize_and_threshold_with(raw, config.threshold, config.degenerate)?;
    let (graph, order) = sequence_and_assemble_with(&filtered, buckets, &config.sequencer)?;

    let mut geometry = config.geometry;
    if let Some(anchor) = config.anchor {
        geometry.offset_angle = offset_angle_for(order.len(), anchor.align, anchor.side)?;
    }
    let calculator = PositionCalculator::new(order.len(), geometry)?;

    let slots = order
        .iter()
        .zip(calculator.ring_points(0, None))
        .map(|(&node, point)| {
            let visible = graph.node(node).is_some_and(|attrs| attrs.visible());
            let label = visible.then(|| point.label_placement(&calculator, config.label_offset));
            Slot { node, point, label }
        })
        .collect::<Vec<_>>();

    let group_arcs = group_arcs(&graph, &slots, &calculator, config.label_offset);
    debug!(slots = slots.len(), arcs = group_arcs.len(), "placed nodes on ring");

    Ok(CircosLayout { graph, calculator, slots, group_arcs })
}

/// Loads both files, then runs [`build_circos_layout`].
pub fn build_from_files(
    matrix_path: impl AsRef<Path>,
    atlas_path: impl AsRef<Path>,
    config: &CircosConfig,
) -> Result<CircosLayout> {
    let (raw, buckets) = store::load(matrix_path, atlas_path, &config.columns)?;
    build_circos_layout(&raw, &buckets, config)
}

fn group_arcs(
    graph: &DirectedGraph,
    slots: &[Slot],
    calculator: &PositionCalculator,
    offset_radius: f64,
) -> Vec<GroupArc> {
    let mut runs: Vec<(String, usize, usize)> = Vec::new();
    let mut previous_visible = false;
    for (slot_idx, slot) in slots.iter().enumerate() {
        let Some(attrs) = graph.node(slot.node).filter(|attrs| attrs.visible()) else {
            previous_visible = false;
            continue;
        };
        match runs.last_mut() {
            Some((group, first, len))
                if previous_visible && group == attrs.group() && *first + *len == slot_idx =>
            {
                *len += 1;
            }
            _ => runs.push((attrs.group().to_owned(), slot_idx, 1)),
        }
        previous_visible = true;
    }

    runs.into_iter()
        .filter_map(|(group, first_slot, slot_count)| {
            let arc = calculator.arc(first_slot, slot_count, offset_radius)?;
            Some(GroupArc { group, first_slot, slot_count, arc })
        })
        .collect()
}
