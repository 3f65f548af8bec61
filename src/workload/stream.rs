//! Per-thread operation streams

use super::{OpMix, Operation, VALUE_DOMAIN};

/// Unbounded pseudorandom stream of operations
///
/// Each worker owns one stream with its own generator; nothing is shared
/// between threads. The stream cannot be rewound, only recreated from the
/// same seed.
#[derive(Debug, Clone)]
pub struct OpStream {
    rng: fastrand::Rng,
    mix: OpMix,
}

impl OpStream {
    pub fn new(seed: u64, mix: OpMix) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            mix,
        }
    }

    /// Draw the next operation: kind first, then value
    #[inline]
    pub fn next_op(&mut self) -> Operation {
        let u = self.rng.f64();
        let value = self.rng.u32(0..VALUE_DOMAIN);
        Operation {
            kind: self.mix.choose(u),
            value,
        }
    }
}

impl Iterator for OpStream {
    type Item = Operation;

    #[inline]
    fn next(&mut self) -> Option<Operation> {
        Some(self.next_op())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::OpKind;

    #[test]
    fn test_same_seed_same_stream() {
        let mix = OpMix::new(0.5, 0.25).unwrap();
        let a: Vec<_> = OpStream::new(99, mix).take(500).collect();
        let b: Vec<_> = OpStream::new(99, mix).take(500).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mix = OpMix::new(0.5, 0.25).unwrap();
        let a: Vec<_> = OpStream::new(1, mix).take(100).collect();
        let b: Vec<_> = OpStream::new(2, mix).take(100).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_stay_in_domain() {
        let mix = OpMix::new(0.34, 0.33).unwrap();
        assert!(OpStream::new(5, mix)
            .take(50_000)
            .all(|op| op.value < VALUE_DOMAIN));
    }

    #[test]
    fn test_mix_proportions_are_respected() {
        let mix = OpMix::new(0.5, 0.25).unwrap();
        let n = 100_000;
        let mut counts = [0usize; 3];
        for op in OpStream::new(2024, mix).take(n) {
            let idx = match op.kind {
                OpKind::Member => 0,
                OpKind::Insert => 1,
                OpKind::Delete => 2,
            };
            counts[idx] += 1;
        }

        let frac = |c: usize| c as f64 / n as f64;
        assert!((frac(counts[0]) - 0.5).abs() < 0.02);
        assert!((frac(counts[1]) - 0.25).abs() < 0.02);
        assert!((frac(counts[2]) - 0.25).abs() < 0.02);
    }

    #[test]
    fn test_read_only_mix_yields_only_member() {
        let mix = OpMix::new(1.0, 0.0).unwrap();
        assert!(OpStream::new(3, mix)
            .take(10_000)
            .all(|op| op.kind == OpKind::Member));
    }
}
