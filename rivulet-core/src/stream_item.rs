// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Result, RivuletError};

/// One emission of a rivulet stream.
///
/// Every rivulet stream is a `Stream<Item = StreamItem<T>>`. `Value` carries
/// an element; `Error` is terminal: operators forward it as their last item
/// and complete without polling their source again.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    /// An element of the stream
    Value(T),
    /// The error that ends the stream
    Error(RivuletError),
}

// Error items never compare equal
impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for StreamItem<T> {}

impl<T> StreamItem<T> {
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Borrows the element, if any.
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// The element, or `None` for the terminal error.
    pub fn into_value(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// The terminal error, or `None` for an element.
    pub fn into_error(self) -> Option<RivuletError> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Splits into the `Result` consumers match on.
    pub fn into_result(self) -> Result<T> {
        self.into()
    }

    /// Transforms the element; an error passes through untouched.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Replaces the element with the item `f` returns, which may be an error.
    pub fn and_then<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> StreamItem<U>,
    {
        match self {
            StreamItem::Value(v) => f(v),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Returns the element.
    ///
    /// # Panics
    ///
    /// Panics if the item is the terminal error.
    pub fn unwrap(self) -> T {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {:?}", e)
            }
        }
    }
}

impl<T> From<Result<T>> for StreamItem<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T> From<StreamItem<T>> for Result<T> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
