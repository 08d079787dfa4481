// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattens a stream of collections.
//!
//! Inner collections are synchronous [`IntoIterator`]s; each is drained
//! completely, in iteration order, before the next one is pulled. Empty inner
//! collections contribute nothing.
//!
//! ```rust
//! use rivulet_stream::{from_values, FlattenItemsExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let flat: Vec<i32> = from_values(vec![vec![1, 2], vec![], vec![3]])
//!     .flatten_items()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(flat, vec![1, 2, 3]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_flatten_items_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_flatten_items_impl!();
