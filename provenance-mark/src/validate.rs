use std::collections::BTreeMap;

use crate::mark::ProvenanceMark;

/// One thing wrong with a chain, as a plain value — no text formatting is
/// done here; callers render these however their UI needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `seq == 0` but the mark's `key` doesn't equal its `chain_id`.
    InvalidGenesisKey { seq: u32 },
    /// A mark other than the first in its group has `seq == 0`.
    NonGenesisAtSeqZero { position: usize },
    /// Two adjacent marks (by sorted position) have a sequence gap.
    SequenceGap { after_seq: u32, expected: u32, found: u32 },
    /// Two adjacent marks have `date` decreasing.
    DateOutOfOrder { after_seq: u32, before_date: chrono::DateTime<chrono::Utc>, after_date: chrono::DateTime<chrono::Utc> },
    /// A mark's `hash` doesn't verify against the previous mark's `key`.
    HashMismatch { seq: u32 },
}

/// The per-chain_id outcome of validating a group of marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub chain_id: Vec<u8>,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Groups `marks` by `chain_id`, sorts each group by `seq`, and validates
/// the hash chain, sequence contiguity, date ordering, and genesis shape
/// within each group independently.
pub fn validate_chains(marks: &[ProvenanceMark]) -> Vec<ValidationResult> {
    let mut groups: BTreeMap<Vec<u8>, Vec<&ProvenanceMark>> = BTreeMap::new();
    for mark in marks {
        groups.entry(mark.chain_id().to_vec()).or_default().push(mark);
    }
    groups
        .into_iter()
        .map(|(chain_id, mut group)| {
            group.sort_by_key(|m| m.seq());
            ValidationResult { chain_id, violations: validate_group(&group) }
        })
        .collect()
}

fn validate_group(group: &[&ProvenanceMark]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (position, mark) in group.iter().enumerate() {
        if mark.seq() == 0 {
            if position != 0 {
                violations.push(Violation::NonGenesisAtSeqZero { position });
            }
            if !mark.has_genesis_key() {
                violations.push(Violation::InvalidGenesisKey { seq: mark.seq() });
            }
        }
    }
    for pair in group.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        if current.seq() != previous.seq() + 1 {
            violations.push(Violation::SequenceGap {
                after_seq: previous.seq(),
                expected: previous.seq() + 1,
                found: current.seq(),
            });
        }
        if current.date() < previous.date() {
            violations.push(Violation::DateOutOfOrder {
                after_seq: previous.seq(),
                before_date: previous.date(),
                after_date: current.date(),
            });
        }
        if !previous.verifies(current) {
            violations.push(Violation::HashMismatch { seq: current.seq() });
        }
    }
    violations
}
