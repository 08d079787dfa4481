// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Index-pairing operator.
//!
//! The foundation of every `*_indexed` operator. Each value of the source is
//! paired with its position; the n-th emitted [`IndexedValue`] carries
//! `index == n`, with no gaps and no repeats.
//!
//! # Behavior
//!
//! - Completes when the source completes; the internal index counter is
//!   bounded by the source and dropped with the stream
//! - Values are neither dropped nor reordered
//! - A source error is forwarded and ends the stream
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, WithIndexExt};
//! use rivulet_core::IndexedValue;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let indexed: Vec<IndexedValue<char>> = from_values(vec!['a', 'b'])
//!     .with_index()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(indexed, vec![IndexedValue::new(0, 'a'), IndexedValue::new(1, 'b')]);
//! # }
//! ```
//!
//! [`IndexedValue`]: rivulet_core::IndexedValue

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_with_index_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_with_index_impl!();
