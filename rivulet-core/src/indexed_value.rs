// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A value paired with its zero-based position in the stream that emitted it.
///
/// Produced by `with_index`; indices start at 0 and increase by one per
/// emission, with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexedValue<T> {
    pub index: usize,
    pub value: T,
}

impl<T> IndexedValue<T> {
    #[must_use]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Splits into `(index, value)`.
    pub fn into_parts(self) -> (usize, T) {
        (self.index, self.value)
    }

    /// Transforms the value, keeping the index.
    pub fn map<U, F>(self, f: F) -> IndexedValue<U>
    where
        F: FnOnce(T) -> U,
    {
        IndexedValue::new(self.index, f(self.value))
    }
}

impl<T> From<(usize, T)> for IndexedValue<T> {
    fn from((index, value): (usize, T)) -> Self {
        Self::new(index, value)
    }
}

impl<T: Display> Display for IndexedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexedValue(index={}, value={})", self.index, self.value)
    }
}
