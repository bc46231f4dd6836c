//!
//! This crate provides [`SortedArray`](./struct.SortedArray.html), a dynamic array that keeps
//! its elements sorted according to a user supplied comparator.
//!
//! Lookups are binary searches (O(log N)), inserts and removals shift the tail of the array
//! (O(N)). Elements that compare equal are allowed; see [`SortedArray::add`] and
//! [`SortedArray::index_of`] for how duplicates are placed and found.
//!
//! # Example
//!
//! ```
//! use sorted_array::SortedArray;
//!
//! fn comparator(a: &i32, b: &i32) -> std::cmp::Ordering {
//!     a.cmp(b)
//! }
//!
//! let mut sorted_array = SortedArray::from_slice(comparator, &[5, 2]);
//!
//! sorted_array.add(3);
//! sorted_array.add(1);
//!
//! sorted_array.remove(&2);
//!
//! assert_eq!(sorted_array.values(), &[1, 3, 5]);
//! assert_eq!(sorted_array.get(0), Some(&1));
//! assert_eq!(sorted_array.index_of(&4), None);
//! ```
//!

mod error;
mod search;
mod sorted_array;

pub use crate::error::SortedArrayError;
pub use crate::sorted_array::SortedArray;
