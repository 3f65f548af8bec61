//! Splitting the operation budget across threads

/// Operations assigned to thread `rank` out of `total` across `threads`
///
/// Every thread gets `total / threads`; the first `total % threads` ranks
/// get one more. `threads` must be non-zero.
#[inline]
pub fn ops_for_rank(total: u64, threads: usize, rank: usize) -> u64 {
    debug_assert!(threads > 0, "thread count must be non-zero");
    let threads = threads as u64;
    let extra = u64::from((rank as u64) < total % threads);
    total / threads + extra
}

/// Operation counts for every rank, in rank order
pub fn split(total: u64, threads: usize) -> Vec<u64> {
    (0..threads)
        .map(|rank| ops_for_rank(total, threads, rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        assert_eq!(split(100, 4), vec![25, 25, 25, 25]);
    }

    #[test]
    fn test_remainder_goes_to_low_ranks() {
        assert_eq!(split(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(split(3, 8), vec![1, 1, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_split_sums_to_total() {
        for total in [0u64, 1, 7, 50, 999, 10_000, 100_001, 1 << 40] {
            for threads in 1..=16 {
                let parts = split(total, threads);
                assert_eq!(parts.len(), threads);
                assert_eq!(parts.iter().sum::<u64>(), total, "m={total} T={threads}");

                let max = parts.iter().max().copied().unwrap_or(0);
                let min = parts.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn test_single_thread_gets_everything() {
        assert_eq!(ops_for_rank(12345, 1, 0), 12345);
    }
}
