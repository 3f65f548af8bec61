//! Serial baseline policy

use std::cell::RefCell;

use super::{ListPolicy, PolicyKind};
use crate::list::SortedList;
use crate::utils::ListViolation;

/// Calls the core operations directly, without any lock
///
/// `RefCell` makes this type `!Sync`, so it can only ever be driven from
/// the thread that owns it.
pub struct Unsynchronized<T> {
    list: RefCell<SortedList<T>>,
}

impl<T> Unsynchronized<T> {
    pub fn new(list: SortedList<T>) -> Self {
        Self {
            list: RefCell::new(list),
        }
    }
}

impl<T: Ord> ListPolicy<T> for Unsynchronized<T> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Serial
    }

    fn member(&self, value: &T) -> bool {
        self.list.borrow().member(value)
    }

    fn insert(&self, value: T) -> bool {
        self.list.borrow_mut().insert(value)
    }

    fn delete(&self, value: &T) -> bool {
        self.list.borrow_mut().delete(value)
    }

    fn len(&self) -> usize {
        self.list.borrow().len()
    }

    fn validate(&self) -> Result<(), ListViolation> {
        self.list.borrow().validate()
    }

    fn into_inner(self) -> SortedList<T> {
        self.list.into_inner()
    }
}
