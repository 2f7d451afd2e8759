// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::{PI, TAU};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ring_point::RingPoint;
use crate::error::{CircosError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Physical ring parameters shared by every slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingGeometry {
    /// Diameter of one node circle.
    pub point_size: f64,
    /// Gap between adjacent node circles along the circumference.
    pub spacing: f64,
    pub center: Point,
    /// Angle (radians) of slot 0.
    pub offset_angle: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self { point_size: 1.0, spacing: 0.0, center: Point::default(), offset_angle: 0.0 }
    }
}

impl RingGeometry {
    pub fn validate(&self) -> Result<()> {
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(CircosError::InvalidConfig(format!(
                "point_size must be a positive number, got {}",
                self.point_size
            )));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(CircosError::InvalidConfig(format!(
                "spacing must be a non-negative number, got {}",
                self.spacing
            )));
        }
        let finite =
            self.center.x.is_finite() && self.center.y.is_finite() && self.offset_angle.is_finite();
        if !finite {
            return Err(CircosError::InvalidConfig(
                "center and offset_angle must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Contiguous range of slots: `count = None` means "to the end of the ring".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingSlice {
    pub offset: usize,
    pub count: Option<usize>,
    /// Added to the position radius (labels, annotation rings).
    pub offset_radius: f64,
}

impl RingSlice {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn single(index: usize) -> Self {
        Self { offset: index, count: Some(1), offset_radius: 0.0 }
    }

    pub fn with_offset_radius(mut self, offset_radius: f64) -> Self {
        self.offset_radius = offset_radius;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Right,
    Top,
    #[default]
    Left,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    BeforePoint,
    #[default]
    Point,
    AfterPoint,
}

/// Offset angle that puts slot 0 on `side`, optionally shifted half a slot so a gap (rather
/// than a node) sits exactly on that side.
pub fn offset_angle_for(point_count: usize, align: Align, side: Side) -> Result<f64> {
    if point_count == 0 {
        return Err(CircosError::InvalidNodeCount(point_count));
    }
    let base = match side {
        Side::Right => 0.0,
        Side::Top => PI / 2.0,
        Side::Left => PI,
        Side::Bottom => 3.0 * PI / 2.0,
    };
    let half_slot = TAU / point_count as f64 / 2.0;
    let shift = match align {
        Align::BeforePoint => half_slot,
        Align::Point => 0.0,
        Align::AfterPoint => -half_slot,
    };
    Ok(base + shift)
}

/// Reduces an angle into `[0, 2pi)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Arc spanning a run of slots, in radians. `end_angle - start_angle` is the sweep, so
/// `end_angle` may exceed `2pi` when the run crosses slot 0's angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ArcSpan {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Places `total_nodes` equally sized circles on a ring so neighbours are exactly
/// `point_size + spacing` apart (tangent when `spacing == 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionCalculator {
    total_nodes: usize,
    geometry: RingGeometry,
}

impl PositionCalculator {
    pub fn new(total_nodes: usize, geometry: RingGeometry) -> Result<Self> {
        if total_nodes == 0 {
            return Err(CircosError::InvalidNodeCount(total_nodes));
        }
        geometry.validate()?;
        Ok(Self { total_nodes, geometry })
    }

    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn center(&self) -> Point {
        self.geometry.center
    }

    /// Radius of the circle the node centers sit on.
    ///
    /// Adjacent centers subtend `t = 2pi / N`; the chord between them is
    /// `2R sin(t / 2) = point_size + spacing`. A single node sits on the center.
    pub fn position_radius(&self) -> f64 {
        if self.total_nodes == 1 {
            return 0.0;
        }
        let chord = self.geometry.point_size + self.geometry.spacing;
        chord / (2.0 * (PI / self.total_nodes as f64).sin())
    }

    pub fn point_radius(&self) -> f64 {
        self.geometry.point_size / 2.0
    }

    pub fn outer_radius(&self) -> f64 {
        self.position_radius() + self.point_radius()
    }

    pub fn angle_step(&self) -> f64 {
        TAU / self.total_nodes as f64
    }

    fn slot_range(&self, offset: usize, count: Option<usize>) -> std::ops::Range<usize> {
        let start = offset.min(self.total_nodes);
        let end = match count {
            Some(count) => start.saturating_add(count).min(self.total_nodes),
            None => self.total_nodes,
        };
        start..end
    }

    /// Unreduced angle of slot `index`.
    fn raw_angle(&self, index: usize) -> f64 {
        self.geometry.offset_angle + index as f64 * self.angle_step()
    }

    /// Angles of the selected slots, each reduced into `[0, 2pi)`.
    pub fn angles(&self, offset: usize, count: Option<usize>) -> Vec<f64> {
        self.slot_range(offset, count).map(|i| normalize_angle(self.raw_angle(i))).collect()
    }

    pub fn position_at(&self, angle: f64, offset_radius: f64) -> Point {
        let radius = self.position_radius() + offset_radius;
        let center = self.geometry.center;
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    }

    pub fn positions_and_angles(&self, slice: RingSlice) -> (Vec<Point>, Vec<f64>) {
        let angles = self.angles(slice.offset, slice.count);
        let positions = angles.iter().map(|&a| self.position_at(a, slice.offset_radius)).collect();
        (positions, angles)
    }

    pub fn ring_points(&self, offset: usize, count: Option<usize>) -> Vec<RingPoint> {
        let range = self.slot_range(offset, count);
        range
            .map(|index| {
                let angle = normalize_angle(self.raw_angle(index));
                RingPoint::new(self.position_at(angle, 0.0), angle, index)
            })
            .collect()
    }

    /// Arc over `count` slots starting at `offset`, drawn just outside the node circles.
    /// `None` when the range is empty.
    pub fn arc(&self, offset: usize, count: usize, offset_radius: f64) -> Option<ArcSpan> {
        let range = self.slot_range(offset, Some(count));
        if range.is_empty() {
            return None;
        }
        let start_angle = normalize_angle(self.raw_angle(range.start));
        let sweep = (range.len() - 1) as f64 * self.angle_step();
        Some(ArcSpan {
            center: self.geometry.center,
            radius: self.outer_radius() + offset_radius,
            start_angle,
            end_angle: start_angle + sweep,
        })
    }

    pub fn x_bounds(&self, padding: f64) -> (f64, f64) {
        let d = self.outer_radius() + padding;
        (self.geometry.center.x - d, self.geometry.center.x + d)
    }

    pub fn y_bounds(&self, padding: f64) -> (f64, f64) {
        let d = self.outer_radius() + padding;
        (self.geometry.center.y - d, self.geometry.center.y + d)
    }
}

/// One-shot form of [`PositionCalculator::positions_and_angles`].
pub fn positions_and_angles(
    total_nodes: usize,
    geometry: RingGeometry,
    slice: RingSlice,
) -> Result<(Vec<Point>, Vec<f64>)> {
    Ok(PositionCalculator::new(total_nodes, geometry)?.positions_and_angles(slice))
}
