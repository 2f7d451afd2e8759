// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::atlas::Hemisphere;

/// One ROI inside a group: its zero-based matrix index and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiRef {
    index: usize,
    name: String,
}

impl RoiRef {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self { index, name: name.into() }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Group name -> ordered members, for one hemisphere partition.
///
/// Groups keep first-appearance order; members keep atlas row order. Callers that need name
/// order use [`GroupBucket::groups_ascending`] / [`GroupBucket::groups_descending`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupBucket {
    groups: Vec<(SmolStr, Vec<RoiRef>)>,
}

impl GroupBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `member` to `group`, creating the group at the end if it is new.
    pub fn push(&mut self, group: &str, member: RoiRef) {
        match self.groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, members)) => members.push(member),
            None => self.groups.push((SmolStr::new(group), vec![member])),
        }
    }

    pub fn get(&self, group: &str) -> Option<&[RoiRef]> {
        self.groups.iter().find(|(name, _)| name == group).map(|(_, members)| members.as_slice())
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RoiRef])> + '_ {
        self.groups.iter().map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    pub fn groups_ascending(&self) -> Vec<(&str, &[RoiRef])> {
        let mut groups = self.iter().collect::<Vec<_>>();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }

    pub fn groups_descending(&self) -> Vec<(&str, &[RoiRef])> {
        let mut groups = self.groups_ascending();
        groups.reverse();
        groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total members across every group.
    pub fn roi_count(&self) -> usize {
        self.groups.iter().map(|(_, members)| members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The three hemisphere partitions produced by the grouper. All three always exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HemisphereBuckets {
    pub left: GroupBucket,
    pub right: GroupBucket,
    pub other: GroupBucket,
}

impl HemisphereBuckets {
    pub fn bucket(&self, hemisphere: Hemisphere) -> &GroupBucket {
        match hemisphere {
            Hemisphere::Left => &self.left,
            Hemisphere::Right => &self.right,
            Hemisphere::Other => &self.other,
        }
    }

    pub fn bucket_mut(&mut self, hemisphere: Hemisphere) -> &mut GroupBucket {
        match hemisphere {
            Hemisphere::Left => &mut self.left,
            Hemisphere::Right => &mut self.right,
            Hemisphere::Other => &mut self.other,
        }
    }

    pub fn roi_count(&self) -> usize {
        self.left.roi_count() + self.right.roi_count() + self.other.roi_count()
    }
}
