//! Error types returned by the collections and the range helpers.

use core::fmt;

/// An index fell outside the valid range of a list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl core::error::Error for IndexOutOfBounds {}

/// A range whose start is greater than its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub start: i32,
    pub end: i32,
}

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid range: start {} is greater than end {}",
            self.start, self.end
        )
    }
}

impl core::error::Error for InvalidRange {}
