// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout configuration.
//!
//! Every field has a default, so a config file only needs the keys it overrides:
//!
//! ```json
//! { "threshold": 0.3, "sequencer": { "padding_size": 9 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CircosError, Result};
use crate::layout::{Align, RingGeometry, SequencerConfig, Side};
use crate::model::AtlasColumns;
use crate::normalize::{validate_threshold, DegeneratePolicy};

/// Derives the ring's offset angle from the final node count instead of a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RingAnchor {
    pub side: Side,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircosConfig {
    pub columns: AtlasColumns,
    pub threshold: f64,
    pub degenerate: DegeneratePolicy,
    pub sequencer: SequencerConfig,
    pub geometry: RingGeometry,
    /// When set, overrides `geometry.offset_angle`.
    pub anchor: Option<RingAnchor>,
    /// Distance between a node's rim and its label anchor.
    pub label_offset: f64,
}

impl Default for CircosConfig {
    fn default() -> Self {
        Self {
            columns: AtlasColumns::default(),
            threshold: 0.5,
            degenerate: DegeneratePolicy::default(),
            sequencer: SequencerConfig::default(),
            geometry: RingGeometry::default(),
            anchor: None,
            label_offset: 0.0,
        }
    }
}

impl CircosConfig {
    pub fn from_json_str(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| CircosError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&raw)
            .map_err(|source| CircosError::Json { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        self.sequencer.validate()?;
        self.geometry.validate()?;
        if !self.label_offset.is_finite() {
            return Err(CircosError::InvalidConfig(format!(
                "label_offset must be finite, got {}",
                self.label_offset
            )));
        }
        Ok(())
    }
}
