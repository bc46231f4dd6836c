use std::cmp::Ordering;

/// Sorted vector built on top of the standard library's slice search.
///
/// Equal elements are appended behind their whole run, so this serves as
/// a reference for the multiset contents of a `SortedArray`.
pub struct PlainArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    data: Vec<T>,
}

impl<T, C> PlainArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    pub fn new(comparator: C, capacity: usize) -> PlainArray<T, C> {
        PlainArray {
            comparator,
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn insert(&mut self, t: T) -> usize {
        let idx = self
            .data
            .partition_point(|x| (self.comparator)(x, &t) != Ordering::Greater);
        if idx < self.data.len() {
            self.data.insert(idx, t);
        } else {
            self.data.push(t);
        }
        idx
    }

    pub fn remove(&mut self, t: &T) -> bool {
        match self.data.binary_search_by(|x| (self.comparator)(x, t)) {
            Ok(idx) => {
                self.data.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, t: &T) -> bool {
        self.data.binary_search_by(|x| (self.comparator)(x, t)).is_ok()
    }

    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }
}
