use crate::error::{Error, Result};

/// Describes a single group within an [`Spec`]: how many of its
/// `member_count` shares are needed to recover the group's secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub member_threshold: u8,
    pub member_count: u8,
}

impl GroupSpec {
    pub fn new(member_threshold: u8, member_count: u8) -> Result<Self> {
        if member_threshold == 0
            || member_count == 0
            || member_threshold > member_count
            || member_count > 16
        {
            return Err(Error::InvalidMemberThreshold);
        }
        Ok(Self { member_threshold, member_count })
    }
}

/// The full two-level sharding plan: `group_threshold` of the listed
/// `groups` must each supply their own `member_threshold` of shares to
/// recover the original secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    group_threshold: u8,
    groups: Vec<GroupSpec>,
}

impl Spec {
    pub fn new(group_threshold: u8, groups: Vec<GroupSpec>) -> Result<Self> {
        if groups.is_empty() || groups.len() > 16 {
            return Err(Error::InvalidGroupThreshold);
        }
        if group_threshold == 0 || group_threshold as usize > groups.len() {
            return Err(Error::InvalidGroupThreshold);
        }
        Ok(Self { group_threshold, groups })
    }

    pub fn group_threshold(&self) -> u8 {
        self.group_threshold
    }

    pub fn groups(&self) -> &[GroupSpec] {
        &self.groups
    }

    pub fn group_count(&self) -> u8 {
        self.groups.len() as u8
    }
}
