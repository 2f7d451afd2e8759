// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON hand-off to an external renderer.
//!
//! Nodes are listed in slot order. Derived edge weights are computed at export time from
//! `weight`.

use schemars::JsonSchema;
use serde::Serialize;

use crate::layout::{ArcSpan, LabelPlacement, Point};
use crate::model::NodeId;
use crate::pipeline::CircosLayout;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RingSummary {
    pub center: Point,
    pub position_radius: f64,
    pub point_radius: f64,
    pub outer_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct NodeRecord {
    pub id: NodeId,
    pub slot: usize,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub visible: bool,
    pub alpha: f64,
    pub sort_key: i64,
    pub angle: f64,
    pub position: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EdgeRecord {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub scaled_weight: f64,
    pub sqrt_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct GroupArcRecord {
    pub group: String,
    pub first_slot: usize,
    pub slot_count: usize,
    pub arc: ArcSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CircosDocument {
    pub roi_count: usize,
    pub node_count: usize,
    pub ring: RingSummary,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub group_arcs: Vec<GroupArcRecord>,
}

impl CircosDocument {
    pub fn from_layout(layout: &CircosLayout) -> Self {
        let graph = layout.graph();
        let calc = layout.calculator();

        let nodes = layout
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(slot, placed)| {
                let attrs = graph.node(placed.node)?;
                Some(NodeRecord {
                    id: attrs.id(),
                    slot,
                    group: attrs.group().to_owned(),
                    name: attrs.name().map(str::to_owned),
                    visible: attrs.visible(),
                    alpha: attrs.alpha(),
                    sort_key: attrs.sort_key(),
                    angle: placed.point.angle(),
                    position: placed.point.position(),
                    label: placed.label,
                })
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeRecord {
                source: edge.source(),
                target: edge.target(),
                weight: edge.weight(),
                scaled_weight: edge.scaled_weight(),
                sqrt_weight: edge.sqrt_weight(),
            })
            .collect();

        let group_arcs = layout
            .group_arcs()
            .iter()
            .map(|arc| GroupArcRecord {
                group: arc.group.clone(),
                first_slot: arc.first_slot,
                slot_count: arc.slot_count,
                arc: arc.arc,
            })
            .collect();

        Self {
            roi_count: graph.roi_count(),
            node_count: graph.node_count(),
            ring: RingSummary {
                center: calc.center(),
                position_radius: calc.position_radius(),
                point_radius: calc.point_radius(),
                outer_radius: calc.outer_radius(),
            },
            nodes,
            edges,
            group_arcs,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// JSON Schema of [`CircosDocument`], for renderer authors.
pub fn document_schema() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(CircosDocument))
}
