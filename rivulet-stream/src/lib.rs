// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collection-style operators for rivulet streams.
//!
//! A rivulet stream is any `Stream<Item = StreamItem<T>>`. This crate adds the
//! operators familiar from collection APIs (indexed mapping, null filtering,
//! "first or default", flattening) as extension traits, each importable on its
//! own or all at once through the [`prelude`].
//!
//! # Architecture
//!
//! Operators come in two layers:
//!
//! - **Primitives** own the stream-level behavior: [`filter_items`],
//!   [`map_items`], [`zip_items`], [`reduce_items`], [`flat_map_iterable`],
//!   [`is_empty`] and [`first_or_default`]
//! - **Derived operators** are pure compositions of primitives and add no
//!   polling logic of their own
//!
//! Indexing is done by zipping the source with a lazily generated
//! [`counter`]. Every call to an indexed operator builds its own counter, so
//! concurrently running pipelines never share an index sequence.
//!
//! ## Operator Categories
//!
//! ### Indexed Operators
//!
//! - **[`with_index`](WithIndexExt::with_index)**: Pairs values with their position
//! - **[`filter_indexed`](FilterIndexedExt::filter_indexed)**: Filters on `(index, value)`
//! - **[`map_indexed`](MapIndexedExt::map_indexed)**: Maps `(index, value)`
//! - **[`reduce_indexed`](ReduceIndexedExt::reduce_indexed)**: Reduces with the index of each step
//! - **[`for_each_indexed`](ForEachIndexedExt::for_each_indexed)**: Drives a stream to completion
//!
//! ### Null Handling
//!
//! - **[`filter_not_null`](FilterNotNullExt::filter_not_null)**: Drops `None`
//! - **[`map_not_null`](MapNotNullExt::map_not_null)**: Maps, then drops `None`
//! - **[`require_no_nulls`](RequireNoNullsExt::require_no_nulls)**: Fails on `None`
//! - **[`first_or_null`](FirstOrNullExt::first_or_null)**: First value as an `Option`
//! - **[`or_empty`](OrEmptyExt::or_empty)**: Optional stream to stream
//!
//! ### Filtering and Queries
//!
//! - **[`filter_not`](FilterNotExt::filter_not)**: Negated filter
//! - **[`filter_is_instance`](FilterIsInstanceExt::filter_is_instance)**: Type narrowing
//! - **[`is_not_empty`](IsNotEmptyExt::is_not_empty)** and **[`none`](NoneExt::none)**: Emptiness checks
//! - **[`flatten_items`](FlattenItemsExt::flatten_items)**: Stream of collections to stream of elements
//!
//! # Error Handling
//!
//! Errors are terminal. Every operator forwards the first `StreamItem::Error`
//! it sees and then completes; nothing is retried or swallowed. The only
//! operator that originates an error of its own is
//! [`require_no_nulls`](RequireNoNullsExt::require_no_nulls).
//!
//! # Threading Flavors
//!
//! With the default `multi-threaded` feature every returned stream is
//! `Send + 'static` and operator closures must be `Send`. Disabling it removes
//! the `Send` requirements for single-threaded executors.
//!
//! # Logging
//!
//! With the `tracing` feature, diagnostics go through `tracing`; otherwise
//! they are written to stderr.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
mod until_error;

pub mod constructors;
pub mod filter_indexed;
pub mod filter_is_instance;
pub mod filter_items;
pub mod filter_not;
pub mod filter_not_null;
pub mod first_or_default;
pub mod first_or_null;
pub mod flat_map_iterable;
pub mod flatten_items;
pub mod for_each_indexed;
pub mod is_empty;
pub mod is_not_empty;
pub mod map_indexed;
pub mod map_items;
pub mod map_not_null;
pub mod none;
pub mod or_empty;
pub mod prelude;
pub mod reduce_indexed;
pub mod reduce_items;
pub mod require_no_nulls;
pub mod with_index;
pub mod zip_items;

// Re-export commonly used types
pub use constructors::{counter, empty, fail, from_values, just, range};
pub use filter_indexed::FilterIndexedExt;
pub use filter_is_instance::{AnyItem, FilterIsInstanceExt, FilterIsInstanceOfExt};
pub use filter_items::FilterItemsExt;
pub use filter_not::FilterNotExt;
pub use filter_not_null::FilterNotNullExt;
pub use first_or_default::FirstOrDefaultExt;
pub use first_or_null::FirstOrNullExt;
pub use flat_map_iterable::FlatMapIterableExt;
pub use flatten_items::FlattenItemsExt;
pub use for_each_indexed::ForEachIndexedExt;
pub use is_empty::IsEmptyExt;
pub use is_not_empty::IsNotEmptyExt;
pub use map_indexed::MapIndexedExt;
pub use map_items::MapItemsExt;
pub use map_not_null::MapNotNullExt;
pub use none::NoneExt;
pub use or_empty::OrEmptyExt;
pub use reduce_indexed::ReduceIndexedExt;
pub use reduce_items::ReduceItemsExt;
pub use require_no_nulls::RequireNoNullsExt;
pub use rivulet_core::{IndexedValue, RivuletError, StreamItem};
pub use with_index::WithIndexExt;
pub use zip_items::ZipItemsExt;
