// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flat-map primitive over synchronous collections.
//!
//! Each value is mapped to an [`IntoIterator`] whose elements are emitted in
//! iteration order before the next source value is pulled. Values mapping to
//! an empty collection contribute nothing.
//!
//! Because `Option<T>` is `IntoIterator`, this primitive doubles as the
//! "drop the nulls" step of [`filter_not_null`](crate::FilterNotNullExt) and
//! [`map_not_null`](crate::MapNotNullExt).
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, FlatMapIterableExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let chars: Vec<char> = from_values(vec!["ab", "", "c"])
//!     .flat_map_iterable(|s: &str| s.chars().collect::<Vec<_>>())
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(chars, vec!['a', 'b', 'c']);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_flat_map_iterable_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_flat_map_iterable_impl!();
