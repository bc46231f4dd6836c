use std::cmp::Ordering;
use std::fmt;

use crate::error::SortedArrayError;
use crate::search::{probe_search, Probe};

/// A dynamic array which keeps its elements sorted according to a comparator.
///
/// The comparator must be a consistent total pre-order: the same two values must always
/// compare the same way. An inconsistent comparator does not cause panics, but the array
/// silently stops being sorted.
#[derive(Clone)]
pub struct SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    data: Vec<T>,
}

impl<T, C> SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates a new, empty `SortedArray`.
    pub fn new(comparator: C) -> SortedArray<T, C> {
        SortedArray::with_capacity(comparator, 0)
    }

    /// Creates a new, empty `SortedArray` with preallocated space for `capacity` elements.
    pub fn with_capacity(comparator: C, capacity: usize) -> SortedArray<T, C> {
        SortedArray {
            comparator,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `SortedArray` from a copy of `items`. The slice itself is left untouched.
    pub fn from_slice(comparator: C, items: &[T]) -> SortedArray<T, C>
    where
        T: Clone,
    {
        SortedArray::from_vec(comparator, items.to_vec())
    }

    /// Creates a `SortedArray` taking ownership of `items`, which get sorted.
    ///
    /// The sort is stable, i.e., equal elements keep their relative input order.
    pub fn from_vec(comparator: C, mut items: Vec<T>) -> SortedArray<T, C> {
        items.sort_by(&comparator);
        SortedArray {
            comparator,
            data: items,
        }
    }

    /// Creates a `SortedArray` from data which is already sorted, without sorting again.
    ///
    /// Fails with [`SortedArrayError::Unsorted`](./enum.SortedArrayError.html) if an element
    /// sorts before its predecessor.
    pub fn from_sorted_vec(comparator: C, items: Vec<T>) -> Result<SortedArray<T, C>, SortedArrayError> {
        if let Some(index) = first_unsorted_index(&items, &comparator) {
            return Err(SortedArrayError::Unsorted { index });
        }
        Ok(SortedArray {
            comparator,
            data: items,
        })
    }

    /// Returns the length (i.e., number of elements stored).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert a value and return the index it was placed at.
    ///
    /// A value comparing equal to existing elements is placed directly behind the first
    /// equal element the binary search hits. This is not necessarily the end of the run
    /// of equal elements, so the relative order of equal elements is unspecified.
    pub fn add(&mut self, t: T) -> usize {
        let idx = self.insertion_index(&t);
        log::trace!("add: index {} (len {})", idx, self.data.len());

        if idx < self.data.len() {
            self.data.insert(idx, t);
        } else {
            self.data.push(t);
        }
        idx
    }

    /// Remove one element comparing equal to `t`.
    ///
    /// Returns the removed element, or `None` (without any effect) if there is no such element.
    /// If there are several equal elements, only the one found by `index_of` is removed.
    pub fn remove(&mut self, t: &T) -> Option<T> {
        let idx = self.index_of(t)?;
        log::trace!("remove: index {} (len {})", idx, self.data.len());
        Some(self.data.remove(idx))
    }

    /// Remove the element at `index`, or return `None` if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns true if an element comparing equal to `t` exists.
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        self.index_of(t).is_some()
    }

    /// Try to find an existing value.
    ///
    /// In case of duplicates the returned index is the first equal element visited by the
    /// binary search, which is neither guaranteed to be the first nor the last of them.
    #[inline]
    pub fn index_of(&self, t: &T) -> Option<usize> {
        self.search(t).found()
    }

    /// Returns the index at which `add` would place `t`.
    #[inline]
    pub fn insertion_index(&self, t: &T) -> usize {
        self.search(t).insertion_index()
    }

    /// Get the element at `index`, or `None` if `index` is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Get the largest element.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns a read-only view of the elements in sorted order.
    ///
    /// This is an O(1) operation.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    /// Iterate elements in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the array and return the sorted data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Verify that the elements are sorted according to the comparator.
    ///
    /// This can only fail if the comparator is inconsistent. Requires a full scan.
    pub fn check_sorted(&self) -> Result<(), SortedArrayError> {
        match first_unsorted_index(&self.data, &self.comparator) {
            Some(index) => Err(SortedArrayError::Unsorted { index }),
            None => Ok(()),
        }
    }

    #[inline]
    fn search(&self, t: &T) -> Probe {
        probe_search(&self.data, |x| (self.comparator)(t, x))
    }
}

fn first_unsorted_index<T, C>(data: &[T], comparator: &C) -> Option<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    data.windows(2)
        .position(|w| comparator(&w[0], &w[1]) == Ordering::Greater)
        .map(|i| i + 1)
}

impl<T, C> fmt::Debug for SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C> Extend<T> for SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.add(t);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "indextrait")]
impl<T, C> std::ops::Index<usize> for SortedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx]
    }
}
