//! Initial population of the set

use std::collections::HashSet;

use tracing::debug;

use super::{Value, VALUE_DOMAIN};
use crate::list::SortedList;
use crate::utils::{BenchmarkError, Result};

/// Draw `n` pairwise-distinct values uniformly from the value domain
///
/// Duplicates are rejected and redrawn, so the result always has exactly
/// `n` entries.
pub fn distinct_values(n: usize, rng: &mut fastrand::Rng) -> Result<Vec<Value>> {
    if n > VALUE_DOMAIN as usize {
        return Err(BenchmarkError::DomainExhausted {
            requested: n,
            domain: VALUE_DOMAIN,
        });
    }

    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    let mut draws = 0u64;
    while values.len() < n {
        let value = rng.u32(0..VALUE_DOMAIN);
        draws += 1;
        if seen.insert(value) {
            values.push(value);
        }
    }

    debug!("Drew {} distinct values in {} draws", n, draws);
    Ok(values)
}

/// Insert `n` distinct random values into `list`
pub fn populate(list: &mut SortedList<Value>, n: usize, rng: &mut fastrand::Rng) -> Result<()> {
    for value in distinct_values(n, rng)? {
        list.insert(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_sizes() {
        let mut rng = fastrand::Rng::with_seed(11);
        for n in [0usize, 1, 10, 1000] {
            let mut list = SortedList::new();
            populate(&mut list, n, &mut rng).unwrap();
            assert_eq!(list.len(), n);
            assert!(list.validate().is_ok());
        }
    }

    #[test]
    fn test_full_domain_population() {
        let mut rng = fastrand::Rng::with_seed(12);
        let values = distinct_values(VALUE_DOMAIN as usize, &mut rng).unwrap();
        let unique: HashSet<_> = values.iter().copied().collect();
        assert_eq!(unique.len(), VALUE_DOMAIN as usize);
        assert!(values.iter().all(|&v| v < VALUE_DOMAIN));
    }

    #[test]
    fn test_values_are_pairwise_distinct() {
        let mut rng = fastrand::Rng::with_seed(13);
        let values = distinct_values(5000, &mut rng).unwrap();
        let unique: HashSet<_> = values.iter().copied().collect();
        assert_eq!(unique.len(), values.len());
    }

    #[test]
    fn test_oversized_population_rejected() {
        let mut rng = fastrand::Rng::with_seed(14);
        let err = distinct_values(VALUE_DOMAIN as usize + 1, &mut rng).unwrap_err();
        assert!(matches!(err, BenchmarkError::DomainExhausted { .. }));
    }
}
