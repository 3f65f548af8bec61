//! Synchronization policies around the ordered set
//!
//! All policies expose the same member/insert/delete contract over one
//! owned [`SortedList`]; they differ only in how exclusive access is
//! obtained:
//! - `Unsynchronized`: direct calls, single thread only (`!Sync`)
//! - `MutexList`: one mutex serializes every operation
//! - `RwLockList`: shared lock for lookups, exclusive lock for mutation

pub mod locked;
pub mod policy_kind;
pub mod unsynchronized;

pub use locked::{MutexList, RwLockList};
pub use policy_kind::PolicyKind;
pub use unsynchronized::Unsynchronized;

use crate::list::SortedList;
use crate::utils::ListViolation;

/// Common operation set of every synchronization policy
pub trait ListPolicy<T> {
    /// Which strategy this is
    fn kind(&self) -> PolicyKind;

    /// True iff `value` is in the set
    fn member(&self, value: &T) -> bool;

    /// Insert `value`; false if it was already present
    fn insert(&self, value: T) -> bool;

    /// Remove `value`; false if it was absent
    fn delete(&self, value: &T) -> bool;

    /// Current number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structural check of the underlying list, taken under the policy's lock
    fn validate(&self) -> Result<(), ListViolation>;

    /// Tear down the synchronization state and hand back the list
    fn into_inner(self) -> SortedList<T>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<P: ListPolicy<u32>>(policy: &P) {
        assert!(policy.is_empty());
        assert!(policy.insert(20));
        assert!(policy.insert(10));
        assert!(policy.insert(30));
        assert!(!policy.insert(20));

        assert!(policy.member(&10));
        assert!(!policy.member(&15));

        assert!(policy.delete(&10));
        assert!(!policy.delete(&10));
        assert_eq!(policy.len(), 2);
        assert!(policy.validate().is_ok());
    }

    fn contents(list: SortedList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_all_policies_share_semantics() {
        let serial = Unsynchronized::new(SortedList::new());
        exercise(&serial);
        assert_eq!(contents(serial.into_inner()), vec![20, 30]);

        let mutex = MutexList::new(SortedList::new());
        exercise(&mutex);
        assert_eq!(contents(mutex.into_inner()), vec![20, 30]);

        let rwlock = RwLockList::new(SortedList::new());
        exercise(&rwlock);
        assert_eq!(contents(rwlock.into_inner()), vec![20, 30]);
    }

    #[test]
    fn test_policy_kinds() {
        let serial = Unsynchronized::<u32>::new(SortedList::new());
        assert_eq!(serial.kind(), PolicyKind::Serial);
        let mutex = MutexList::<u32>::new(SortedList::new());
        assert_eq!(mutex.kind(), PolicyKind::Mutex);
        let rwlock = RwLockList::<u32>::new(SortedList::new());
        assert_eq!(rwlock.kind(), PolicyKind::RwLock);
    }
}
