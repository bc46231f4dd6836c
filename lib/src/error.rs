use thiserror::Error;

/// Errors of the fallible `SortedArray` constructors and checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortedArrayError {
    /// The element at `index` sorts before its predecessor.
    #[error("data is not sorted: element at index {index} sorts before its predecessor")]
    Unsorted {
        /// Index of the first out-of-order element
        index: usize,
    },
}
