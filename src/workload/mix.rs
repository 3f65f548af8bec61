//! Operation mix
//!
//! Member, insert and delete fractions, resolved by cumulative thresholds
//! so that one uniform draw selects the operation kind.

use serde::Serialize;

use super::OpKind;
use crate::utils::{BenchmarkError, Result};

/// Fractions of member/insert/delete operations
///
/// The delete fraction is whatever remains after member and insert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpMix {
    member: f64,
    insert: f64,
}

impl OpMix {
    /// Create a mix from member and insert fractions
    pub fn new(member: f64, insert: f64) -> Result<Self> {
        for (name, fraction) in [("m_member", member), ("m_insert", insert)] {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(BenchmarkError::Config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, fraction
                )));
            }
        }

        if member + insert > 1.0 {
            return Err(BenchmarkError::FractionSum { member, insert });
        }

        Ok(Self { member, insert })
    }

    /// Build from constant fractions known to be valid
    pub(crate) const fn preset(member: f64, insert: f64) -> Self {
        Self { member, insert }
    }

    pub fn member(&self) -> f64 {
        self.member
    }

    pub fn insert(&self) -> f64 {
        self.insert
    }

    /// Remaining fraction, never negative
    pub fn delete(&self) -> f64 {
        (1.0 - self.member - self.insert).max(0.0)
    }

    /// Map a uniform draw in [0, 1) to an operation kind
    #[inline]
    pub fn choose(&self, u: f64) -> OpKind {
        if u < self.member {
            OpKind::Member
        } else if u < self.member + self.insert {
            OpKind::Insert
        } else {
            OpKind::Delete
        }
    }

    /// Display name, e.g. "Member:90.0%+Insert:5.0%+Delete:5.0%"
    pub fn describe(&self) -> String {
        format!(
            "Member:{:.1}%+Insert:{:.1}%+Delete:{:.1}%",
            self.member * 100.0,
            self.insert * 100.0,
            self.delete() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_uses_cumulative_thresholds() {
        let mix = OpMix::new(0.5, 0.25).unwrap();
        assert_eq!(mix.choose(0.0), OpKind::Member);
        assert_eq!(mix.choose(0.49), OpKind::Member);
        assert_eq!(mix.choose(0.5), OpKind::Insert);
        assert_eq!(mix.choose(0.74), OpKind::Insert);
        assert_eq!(mix.choose(0.75), OpKind::Delete);
        assert_eq!(mix.choose(0.999), OpKind::Delete);
    }

    #[test]
    fn test_member_only_never_mutates() {
        let mix = OpMix::new(1.0, 0.0).unwrap();
        for i in 0..1000 {
            assert_eq!(mix.choose(i as f64 / 1000.0), OpKind::Member);
        }
        assert_eq!(mix.delete(), 0.0);
    }

    #[test]
    fn test_fraction_sum_over_one_rejected() {
        let err = OpMix::new(0.8, 0.3).unwrap_err();
        assert!(matches!(err, BenchmarkError::FractionSum { .. }));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        assert!(matches!(
            OpMix::new(-0.1, 0.5),
            Err(BenchmarkError::Config(_))
        ));
        assert!(matches!(
            OpMix::new(0.5, 1.5),
            Err(BenchmarkError::Config(_))
        ));
        assert!(OpMix::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_delete_is_remainder() {
        let mix = OpMix::new(0.9, 0.05).unwrap();
        assert!((mix.delete() - 0.05).abs() < 1e-9);
        assert_eq!(mix.describe(), "Member:90.0%+Insert:5.0%+Delete:5.0%");
    }
}
