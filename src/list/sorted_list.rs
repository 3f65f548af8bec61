//! Sorted, duplicate-free singly-linked list
//!
//! Every node exclusively owns its successor. None of the operations here
//! know about threads: callers get exclusivity from `&mut self`, and the
//! policies in [`crate::policy`] decide how that exclusivity is obtained.

use std::cmp::Ordering;

use crate::utils::ListViolation;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Ordered set backed by a singly-linked chain
///
/// Values are strictly increasing from the head. The node count is cached so
/// `len()` does not walk the chain; `validate()` cross-checks it.
pub struct SortedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SortedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Ascending traversal
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Release every node in traversal order
    ///
    /// Iterative so that long chains cannot exhaust the stack through
    /// recursive `Box` drops.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: Ord> SortedList<T> {
    /// True iff `value` is present
    ///
    /// Stops at the first node whose value is not smaller than the target.
    pub fn member(&self, value: &T) -> bool {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            match node.value.cmp(value) {
                Ordering::Less => cur = node.next.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }

    /// Insert `value` at its ascending position
    ///
    /// Returns false and leaves the list untouched if the value is already
    /// present.
    pub fn insert(&mut self, value: T) -> bool {
        let link = Self::seek(&mut self.head, &value);
        if link.as_ref().is_some_and(|node| node.value == value) {
            return false;
        }

        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        true
    }

    /// Unlink and release the node holding `value`
    ///
    /// Returns false if the value is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let link = Self::seek(&mut self.head, value);
        match link.take() {
            Some(node) if node.value == *value => {
                *link = node.next;
                self.len -= 1;
                true
            }
            other => {
                *link = other;
                false
            }
        }
    }

    /// Check ordering and the cached length
    pub fn validate(&self) -> Result<(), ListViolation> {
        let mut count = 0usize;
        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if prev.is_some_and(|p| p >= value) {
                return Err(ListViolation::OutOfOrder { position: count });
            }
            prev = Some(value);
            count += 1;
        }

        if count != self.len {
            return Err(ListViolation::LengthMismatch {
                recorded: self.len,
                actual: count,
            });
        }
        Ok(())
    }

    /// Return the link where `value` is, or would be spliced in
    ///
    /// The returned link is either empty (tail) or holds the first node whose
    /// value is not smaller than `value`.
    fn seek<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        while link.as_ref().is_some_and(|node| node.value < *value) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`SortedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
