// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Circular layout: node ordering and ring geometry.
//!
//! The sequencer decides *which* node occupies each slot; the position calculator decides
//! *where* each slot sits.

pub mod positions;
pub mod ring_point;
pub mod sequencer;

pub use positions::{
    normalize_angle, offset_angle_for, positions_and_angles, Align, ArcSpan, Point,
    PositionCalculator, RingGeometry, RingSlice, Side,
};
pub use ring_point::{label_orientation, HorizontalAlign, LabelPlacement, RingPoint, VerticalAlign};
pub use sequencer::{node_order, sequence, sequence_nodes, NodeSequence, SequencerConfig};
