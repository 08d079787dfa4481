// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map, then drop the absent results.
//!
//! `s.map_not_null(f)` is `s.map_items(f).filter_not_null()`: one output at
//! most per input, never a `None`.
//!
//! ```rust
//! use rivulet_stream::{from_values, MapNotNullExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let parsed: Vec<i32> = from_values(vec!["1", "x", "3"])
//!     .map_not_null(|s| s.parse::<i32>().ok())
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(parsed, vec![1, 3]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_map_not_null_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_map_not_null_impl!();
