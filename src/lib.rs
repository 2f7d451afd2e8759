// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Circograph: grouped, hemisphere-split circular layouts for brain connectivity.
//!
//! Pipeline: load matrix + atlas ([`store`]), normalize and threshold ([`normalize`]), group
//! ROIs by hemisphere ([`grouping`]), order and place nodes on a ring ([`layout`]), assemble
//! the attributed graph ([`assemble`]), and hand the result to a renderer ([`export`]).

pub mod assemble;
pub mod config;
pub mod error;
pub mod export;
pub mod grouping;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod store;

pub use config::CircosConfig;
pub use error::{CircosError, Result};
pub use pipeline::{build_circos_layout, build_from_files, sequence_and_assemble, CircosLayout};
