//! Benchmark worker
//!
//! One worker per thread rank. A worker owns its operation stream and its
//! tally; the only state it shares with other workers is the policy it is
//! handed by reference.

use std::num::NonZeroU64;

use crate::policy::ListPolicy;
use crate::utils::Result;
use crate::workload::{OpKind, OpStream, OpTally, Value};

/// Per-worker result
#[derive(Debug, Clone)]
pub struct WorkerResult {
    pub rank: usize,
    pub tally: OpTally,
}

/// Replays one rank's slice of the workload against a policy
#[derive(Debug)]
pub struct Worker {
    /// Thread rank (0-indexed)
    rank: usize,

    /// Operations assigned to this rank
    ops: u64,

    /// Thread-local operation stream (own RNG, no sync)
    stream: OpStream,

    /// Run a validation pass under the lock every N operations
    validate_every: Option<NonZeroU64>,
}

impl Worker {
    pub fn new(
        rank: usize,
        ops: u64,
        stream: OpStream,
        validate_every: Option<NonZeroU64>,
    ) -> Self {
        Self {
            rank,
            ops,
            stream,
            validate_every,
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Execute every assigned operation
    ///
    /// Operation results are discarded; only throughput is measured. With
    /// validation enabled, a structural violation stops the worker.
    pub fn run<P: ListPolicy<Value>>(mut self, policy: &P) -> Result<WorkerResult> {
        let mut tally = OpTally::default();

        for i in 1..=self.ops {
            let op = self.stream.next_op();
            match op.kind {
                OpKind::Member => {
                    policy.member(&op.value);
                }
                OpKind::Insert => {
                    policy.insert(op.value);
                }
                OpKind::Delete => {
                    policy.delete(&op.value);
                }
            }
            tally.record(op.kind);

            if let Some(every) = self.validate_every {
                if i % every.get() == 0 {
                    policy.validate()?;
                }
            }
        }

        Ok(WorkerResult {
            rank: self.rank,
            tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::SortedList;
    use crate::policy::{MutexList, Unsynchronized};
    use crate::workload::OpMix;

    #[test]
    fn test_worker_runs_exact_op_count() {
        let mix = OpMix::new(0.5, 0.25).unwrap();
        let policy = MutexList::new(SortedList::new());
        let worker = Worker::new(0, 1234, OpStream::new(1, mix), None);

        let result = worker.run(&policy).unwrap();
        assert_eq!(result.rank, 0);
        assert_eq!(result.tally.total(), 1234);
    }

    #[test]
    fn test_read_only_worker_leaves_list_unchanged() {
        let mut list = SortedList::new();
        for v in [1u32, 100, 1000, 10_000] {
            list.insert(v);
        }
        let policy = Unsynchronized::new(list);

        let mix = OpMix::new(1.0, 0.0).unwrap();
        let worker = Worker::new(3, 5000, OpStream::new(2, mix), NonZeroU64::new(100));
        let result = worker.run(&policy).unwrap();

        assert_eq!(result.tally.member, 5000);
        assert_eq!(result.tally.insert + result.tally.delete, 0);
        assert_eq!(
            policy.into_inner().iter().copied().collect::<Vec<_>>(),
            vec![1, 100, 1000, 10_000]
        );
    }

    #[test]
    fn test_zero_ops_worker() {
        let mix = OpMix::new(0.0, 1.0).unwrap();
        let policy = Unsynchronized::new(SortedList::new());
        let result = Worker::new(0, 0, OpStream::new(3, mix), None)
            .run(&policy)
            .unwrap();
        assert_eq!(result.tally.total(), 0);
        assert!(policy.is_empty());
    }
}
