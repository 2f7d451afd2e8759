// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity of a node on the ring.
///
/// Real ROIs and synthetic spacers live in separate namespaces, so a spacer can never collide
/// with a matrix index (or with another spacer): spacer sequence numbers are handed out in
/// emission order by the sequencer.
///
/// The textual form is `roi:<index>` / `spacer:<seq>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NodeId {
    /// Zero-based matrix row/column index.
    Roi(usize),
    Spacer(usize),
}

impl NodeId {
    pub fn roi_index(&self) -> Option<usize> {
        match self {
            Self::Roi(index) => Some(*index),
            Self::Spacer(_) => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roi(index) => write!(f, "roi:{index}"),
            Self::Spacer(seq) => write!(f, "spacer:{seq}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, raw) = s.split_once(':').ok_or(ParseNodeIdError::MissingSeparator)?;
        let value = raw.parse::<usize>().map_err(|_| ParseNodeIdError::InvalidNumber)?;
        match kind {
            "roi" => Ok(Self::Roi(value)),
            "spacer" => Ok(Self::Spacer(value)),
            _ => Err(ParseNodeIdError::UnknownKind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNodeIdError {
    MissingSeparator,
    UnknownKind,
    InvalidNumber,
}

impl fmt::Display for ParseNodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("node id must look like <kind>:<number>"),
            Self::UnknownKind => f.write_str("node id kind must be 'roi' or 'spacer'"),
            Self::InvalidNumber => f.write_str("node id number must be a non-negative integer"),
        }
    }
}

impl std::error::Error for ParseNodeIdError {}

#[cfg(test)]
mod tests {
    use super::{NodeId, ParseNodeIdError};

    #[test]
    fn display_and_parse_agree() {
        for id in [NodeId::Roi(0), NodeId::Roi(245), NodeId::Spacer(7)] {
            assert_eq!(id.to_string().parse::<NodeId>(), Ok(id));
        }
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert_eq!("roi".parse::<NodeId>(), Err(ParseNodeIdError::MissingSeparator));
        assert_eq!("edge:1".parse::<NodeId>(), Err(ParseNodeIdError::UnknownKind));
        assert_eq!("spacer:-1".parse::<NodeId>(), Err(ParseNodeIdError::InvalidNumber));
    }

    #[test]
    fn roi_and_spacer_with_same_number_are_distinct() {
        assert_ne!(NodeId::Roi(3), NodeId::Spacer(3));
        assert_eq!(NodeId::Roi(3).roi_index(), Some(3));
        assert_eq!(NodeId::Spacer(3).roi_index(), None);
    }

    #[test]
    fn serializes_as_tagged_object() {
        let json = serde_json::to_value(NodeId::Spacer(2)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "spacer", "id": 2 }));
    }
}
