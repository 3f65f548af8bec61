//! Operation definitions

use serde::Serialize;

/// Integer type stored in the benchmarked set
pub type Value = u32;

/// Size of the value domain; values are drawn from `0..VALUE_DOMAIN`
pub const VALUE_DOMAIN: u32 = 1 << 16;

/// The three set operations a workload can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Member,
    Insert,
    Delete,
}

/// One generated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: OpKind,
    pub value: Value,
}

/// Per-kind operation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpTally {
    pub member: u64,
    pub insert: u64,
    pub delete: u64,
}

impl OpTally {
    #[inline]
    pub fn record(&mut self, kind: OpKind) {
        match kind {
            OpKind::Member => self.member += 1,
            OpKind::Insert => self.insert += 1,
            OpKind::Delete => self.delete += 1,
        }
    }

    pub fn merge(&mut self, other: &OpTally) {
        self.member += other.member;
        self.insert += other.insert;
        self.delete += other.delete;
    }

    pub fn total(&self) -> u64 {
        self.member + self.insert + self.delete
    }
}
