// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source constructors.
//!
//! All sources are lazy: nothing is produced until the returned stream is
//! polled, and every call builds an independent stream.

use futures::future::ready;
use futures::stream::{self, Stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};

/// The canonical empty stream: completes immediately without emitting.
pub fn empty<T>() -> impl Stream<Item = StreamItem<T>> {
    stream::empty()
}

/// Emits `count` successive integers starting at `start`, then completes.
///
/// ```rust
/// use rivulet_stream::range;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let values: Vec<usize> = range(3, 3).map(|item| item.unwrap()).collect().await;
/// assert_eq!(values, vec![3, 4, 5]);
/// # }
/// ```
pub fn range(start: usize, count: usize) -> impl Stream<Item = StreamItem<usize>> {
    stream::iter(start..start.saturating_add(count)).map(StreamItem::Value)
}

/// Unbounded counter `0, 1, 2, ...`, generated on demand.
///
/// Used by `with_index` to assign positions; it never completes by itself, so
/// it must be paired with a finite stream or dropped by its consumer.
pub fn counter() -> impl Stream<Item = StreamItem<usize>> {
    stream::iter(0usize..).map(StreamItem::Value)
}

/// Emits each value of `values` in iteration order, then completes.
pub fn from_values<I>(values: I) -> impl Stream<Item = StreamItem<I::Item>>
where
    I: IntoIterator,
{
    stream::iter(values).map(StreamItem::Value)
}

/// Emits a single value, then completes.
pub fn just<T>(value: T) -> impl Stream<Item = StreamItem<T>> {
    stream::once(ready(StreamItem::Value(value)))
}

/// Emits `error` as its only item.
pub fn fail<T>(error: RivuletError) -> impl Stream<Item = StreamItem<T>> {
    stream::once(ready(StreamItem::Error(error)))
}
