// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::PI;

use schemars::JsonSchema;
use serde::Serialize;

use super::positions::{normalize_angle, Point, PositionCalculator, RingSlice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    Center,
}

/// Where and how to draw a node's text label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct LabelPlacement {
    pub anchor: Point,
    /// Text rotation in radians, anchored at `anchor`.
    pub rotation: f64,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl LabelPlacement {
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }
}

/// Text rotation and alignment for a label pointing outward at `angle`.
///
/// Labels on the left half (`[pi/2, 3pi/2)`) are turned by half a turn and right-aligned so
/// they never read upside down.
pub fn label_orientation(angle: f64) -> (f64, HorizontalAlign) {
    let angle = normalize_angle(angle);
    if (PI / 2.0..3.0 * PI / 2.0).contains(&angle) {
        (PI + angle, HorizontalAlign::Right)
    } else {
        (angle, HorizontalAlign::Left)
    }
}

/// A slot on the ring. `angle` is always within `[0, 2pi)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct RingPoint {
    position: Point,
    angle: f64,
    index: usize,
}

impl RingPoint {
    pub(crate) fn new(position: Point, angle: f64, index: usize) -> Self {
        Self { position, angle: normalize_angle(angle), index }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// This slot's position pushed `offset_radius` away from the node ring.
    pub fn offset_position(&self, calc: &PositionCalculator, offset_radius: f64) -> Point {
        let slice = RingSlice::single(self.index).with_offset_radius(offset_radius);
        let (positions, _) = calc.positions_and_angles(slice);
        positions.first().copied().unwrap_or(self.position)
    }

    /// Label just outside the node circle, `offset_radius` beyond its rim.
    pub fn label_placement(&self, calc: &PositionCalculator, offset_radius: f64) -> LabelPlacement {
        let anchor = self.offset_position(calc, offset_radius + calc.point_radius());
        let (rotation, horizontal) = label_orientation(self.angle);
        LabelPlacement { anchor, rotation, horizontal, vertical: VerticalAlign::Center }
    }
}
