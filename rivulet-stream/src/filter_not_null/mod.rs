// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drops absent elements from a stream of `Option`s.
//!
//! The output element type is the non-optional `T`, so downstream code never
//! sees a `None`.
//!
//! ```rust
//! use rivulet_stream::{from_values, FilterNotNullExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let present: Vec<i32> = from_values(vec![Some(1), None, Some(3)])
//!     .filter_not_null()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(present, vec![1, 3]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_filter_not_null_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_filter_not_null_impl!();
