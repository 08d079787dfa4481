// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reduce primitive - single-value aggregation of a whole stream.
//!
//! Both operators consume the entire source and emit one value when it
//! completes:
//!
//! - [`reduce_items`](ReduceItemsExt::reduce_items) seeds with the first value;
//!   an empty source produces an empty stream
//! - [`fold_items`](ReduceItemsExt::fold_items) seeds with an explicit initial
//!   value, which is emitted unchanged for an empty source
//!
//! An error ends the aggregation: the partial result is discarded and the
//! error is emitted instead.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, ReduceItemsExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let sum: Vec<i32> = from_values(vec![1, 2, 3, 4])
//!     .reduce_items(|acc, v| acc + v)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(sum, vec![10]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_reduce_items_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_reduce_items_impl!();
