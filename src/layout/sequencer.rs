// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CircosError, Result};
use crate::model::{GroupBucket, HemisphereBuckets, NodeAttributes, NodeId, RoiRef};

/// Visual tuning constants for the circular order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Spacers emitted before the first left-hemisphere group.
    pub padding_size: usize,
    /// Spacers emitted after every group.
    pub spacer_run: usize,
    /// Rotation band size is
    /// `round(total / rotation_divisor - padding_size / rotation_subtrahend)`.
    pub rotation_divisor: f64,
    pub rotation_subtrahend: f64,
    /// Subtracted from the sort key of every node in the rotation band.
    ///
    /// The band only lands wholly before key 0 while the ring has at most `rotation_shift`
    /// nodes. On larger rings the band's upper keys land on the same keys as the start of the
    /// ring and interleave with it (ties go to the earlier-emitted node); a warning is logged.
    /// Raise this above the expected node count for such atlases.
    pub rotation_shift: i64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            padding_size: 30,
            spacer_run: 5,
            rotation_divisor: 4.0,
            rotation_subtrahend: 3.0,
            rotation_shift: 1000,
        }
    }
}

impl SequencerConfig {
    pub fn with_padding_size(mut self, padding_size: usize) -> Self {
        self.padding_size = padding_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("rotation_divisor", self.rotation_divisor),
            ("rotation_subtrahend", self.rotation_subtrahend),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CircosError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.rotation_shift < 0 {
            return Err(CircosError::InvalidConfig(format!(
                "rotation_shift must not be negative, got {}",
                self.rotation_shift
            )));
        }
        Ok(())
    }

    /// Number of highest-keyed nodes moved to the start of the ring, capped at `total_nodes`.
    pub fn rotation_count(&self, total_nodes: usize) -> usize {
        let raw = total_nodes as f64 / self.rotation_divisor
            - self.padding_size as f64 / self.rotation_subtrahend;
        let rounded = raw.round_ties_even();
        if rounded <= 0.0 {
            0
        } else {
            (rounded as usize).min(total_nodes)
        }
    }
}

/// Nodes in emission order with their (possibly rotated) sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSequence {
    nodes: Vec<NodeAttributes>,
    rotated: usize,
}

impl NodeSequence {
    pub fn nodes(&self) -> &[NodeAttributes] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeAttributes> {
        self.nodes
    }

    pub fn total_node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn spacer_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.id().is_spacer()).count()
    }

    /// Size of the band moved by rotation correction.
    pub fn rotated_count(&self) -> usize {
        self.rotated
    }

    /// Final circular order: ascending sort key, emission order on ties.
    pub fn node_order(&self) -> Vec<NodeId> {
        node_order(&self.nodes)
    }
}

/// Sorts node ids by sort key, then by position in `nodes`.
pub fn node_order(nodes: &[NodeAttributes]) -> Vec<NodeId> {
    let mut order = nodes.iter().enumerate().collect::<Vec<_>>();
    order.sort_by_key(|(pos, node)| (node.sort_key(), *pos));
    order.into_iter().map(|(_, node)| node.id()).collect()
}

struct Emitter {
    nodes: Vec<NodeAttributes>,
    next_key: i64,
    next_spacer: usize,
}

impl Emitter {
    fn spacers(&mut self, count: usize) {
        for _ in 0..count {
            self.nodes.push(NodeAttributes::spacer(self.next_spacer, self.next_key));
            self.next_spacer += 1;
            self.next_key += 1;
        }
    }

    fn group(&mut self, group: &str, members: &[RoiRef], spacer_run: usize) {
        for member in members {
            self.nodes.push(NodeAttributes::roi(
                member.index(),
                group,
                member.name(),
                self.next_key,
            ));
            self.next_key += 1;
        }
        self.spacers(spacer_run);
    }
}

/// Deterministic circular order for grouped ROIs.
///
/// Emission order:
/// - `padding_size` leading spacers
/// - left groups, ascending by name
/// - other groups, in insertion order
/// - right groups, descending by name
///
/// Every group is followed by `spacer_run` spacers. Sort keys count up from 0 across real and
/// spacer nodes alike; afterwards the highest [`SequencerConfig::rotation_count`] keys are
/// lowered by `rotation_shift` so that band opens the ring instead of closing it.
pub fn sequence_nodes(
    buckets: &HemisphereBuckets,
    config: &SequencerConfig,
) -> Result<NodeSequence> {
    config.validate()?;

    let mut emitter = Emitter { nodes: Vec::new(), next_key: 0, next_spacer: 0 };
    emitter.spacers(config.padding_size);
    for (group, members) in buckets.left.groups_ascending() {
        emitter.group(group, members, config.spacer_run);
    }
    for (group, members) in buckets.other.iter() {
        emitter.group(group, members, config.spacer_run);
    }
    for (group, members) in buckets.right.groups_descending() {
        emitter.group(group, members, config.spacer_run);
    }

    let mut nodes = emitter.nodes;
    let rotated = rotate_highest_keys(&mut nodes, config);
    debug!(
        total = nodes.len(),
        spacers = emitter.next_spacer,
        rotated,
        "sequenced nodes"
    );
    Ok(NodeSequence { nodes, rotated })
}

/// Convenience form with default constants and the given leading padding.
pub fn sequence(
    left: &GroupBucket,
    right: &GroupBucket,
    other: &GroupBucket,
    padding_size: usize,
) -> Result<NodeSequence> {
    let buckets =
        HemisphereBuckets { left: left.clone(), right: right.clone(), other: other.clone() };
    sequence_nodes(&buckets, &SequencerConfig::default().with_padding_size(padding_size))
}

fn rotate_highest_keys(nodes: &mut [NodeAttributes], config: &SequencerConfig) -> usize {
    let count = config.rotation_count(nodes.len());
    if count == 0 {
        return 0;
    }

    let mut keys = nodes.iter().map(NodeAttributes::sort_key).collect::<Vec<_>>();
    keys.sort_unstable();
    let cutoff = keys[keys.len() - count];
    let max_key = keys[keys.len() - 1];
    if max_key - config.rotation_shift >= 0 {
        warn!(
            max_key,
            rotation_shift = config.rotation_shift,
            "rotation shift does not clear the key range; rotated nodes interleave with the rest"
        );
    }

    for node in nodes.iter_mut().filter(|n| n.sort_key() >= cutoff) {
        node.shift_sort_key(config.rotation_shift);
    }
    count
}
