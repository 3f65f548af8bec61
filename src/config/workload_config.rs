//! Preset workload cases
//!
//! The sweep mode selects its operation mix by case number instead of
//! explicit fractions.

use serde::Serialize;

use crate::utils::{BenchmarkError, Result};
use crate::workload::OpMix;

/// Preset member/insert/delete mixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkloadCase {
    /// 99% member, 0.5% insert, 0.5% delete
    ReadMostly,
    /// 90% member, 5% insert, 5% delete
    ReadHeavy,
    /// 50% member, 25% insert, 25% delete
    WriteHeavy,
}

impl WorkloadCase {
    /// Resolve a case number (1, 2 or 3)
    pub fn from_number(case_number: u32) -> Result<Self> {
        match case_number {
            1 => Ok(Self::ReadMostly),
            2 => Ok(Self::ReadHeavy),
            3 => Ok(Self::WriteHeavy),
            other => Err(BenchmarkError::InvalidCase(other)),
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Self::ReadMostly => 1,
            Self::ReadHeavy => 2,
            Self::WriteHeavy => 3,
        }
    }

    /// Member and insert fractions; delete is the remainder
    pub fn fractions(&self) -> (f64, f64) {
        match self {
            Self::ReadMostly => (0.99, 0.005),
            Self::ReadHeavy => (0.90, 0.05),
            Self::WriteHeavy => (0.50, 0.25),
        }
    }

    pub fn mix(&self) -> OpMix {
        let (member, insert) = self.fractions();
        OpMix::preset(member, insert)
    }
}

impl std::fmt::Display for WorkloadCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case {}", self.number())
    }
}
