//! Whole-structure lock policies
//!
//! Both wrappers own the list inside the lock, so the lock and the list it
//! guards are created and destroyed together with one run.

use parking_lot::{Mutex, RwLock};

use super::{ListPolicy, PolicyKind};
use crate::list::SortedList;
use crate::utils::ListViolation;

/// One mutex serializes every member/insert/delete
pub struct MutexList<T> {
    list: Mutex<SortedList<T>>,
}

impl<T> MutexList<T> {
    pub fn new(list: SortedList<T>) -> Self {
        Self {
            list: Mutex::new(list),
        }
    }
}

impl<T: Ord> ListPolicy<T> for MutexList<T> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mutex
    }

    fn member(&self, value: &T) -> bool {
        self.list.lock().member(value)
    }

    fn insert(&self, value: T) -> bool {
        self.list.lock().insert(value)
    }

    fn delete(&self, value: &T) -> bool {
        self.list.lock().delete(value)
    }

    fn len(&self) -> usize {
        self.list.lock().len()
    }

    fn validate(&self) -> Result<(), ListViolation> {
        self.list.lock().validate()
    }

    fn into_inner(self) -> SortedList<T> {
        self.list.into_inner()
    }
}

/// Lookups share the lock; insert and delete take it exclusively
pub struct RwLockList<T> {
    list: RwLock<SortedList<T>>,
}

impl<T> RwLockList<T> {
    pub fn new(list: SortedList<T>) -> Self {
        Self {
            list: RwLock::new(list),
        }
    }
}

impl<T: Ord> ListPolicy<T> for RwLockList<T> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RwLock
    }

    fn member(&self, value: &T) -> bool {
        self.list.read().member(value)
    }

    fn insert(&self, value: T) -> bool {
        self.list.write().insert(value)
    }

    fn delete(&self, value: &T) -> bool {
        self.list.write().delete(value)
    }

    fn len(&self) -> usize {
        self.list.read().len()
    }

    fn validate(&self) -> Result<(), ListViolation> {
        self.list.read().validate()
    }

    fn into_inner(self) -> SortedList<T> {
        self.list.into_inner()
    }
}
