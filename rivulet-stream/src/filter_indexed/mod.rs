// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filtering by position and value.
//!
//! The predicate sees each value together with its index in the *source*
//! stream, so rejected values still advance the index.
//!
//! ```rust
//! use rivulet_stream::{from_values, FilterIndexedExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let odd_positions: Vec<&str> = from_values(vec!["a", "b", "c", "d"])
//!     .filter_indexed(|index, _| index % 2 == 1)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(odd_positions, vec!["b", "d"]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_filter_indexed_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_filter_indexed_impl!();
