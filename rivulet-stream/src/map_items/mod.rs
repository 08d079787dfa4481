// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map primitive.
//!
//! Values are transformed one by one, in order. Errors from upstream, or
//! returned by the transform of [`try_map_items`](MapItemsExt::try_map_items),
//! end the stream.
//!
//! ```rust
//! use rivulet_stream::{from_values, MapItemsExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let lengths: Vec<usize> = from_values(vec!["a", "bb", "ccc"])
//!     .map_items(str::len)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(lengths, vec![1, 2, 3]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_map_items_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_map_items_impl!();
