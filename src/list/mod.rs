//! Ordered set core
//!
//! A sorted singly-linked list with unsynchronized member/insert/delete.

pub mod sorted_list;

pub use sorted_list::{Iter, SortedList};
