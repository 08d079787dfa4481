// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter primitive.
//!
//! # Behavior
//!
//! - Only values for which the predicate returns `true` are emitted
//! - Relative order of the emitted values is preserved
//! - An upstream error is forwarded and ends the stream
//! - With [`try_filter_items`](FilterItemsExt::try_filter_items), a predicate
//!   `Err` becomes the stream's error and ends it
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, FilterItemsExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let evens: Vec<i32> = from_values(vec![1, 2, 3, 4])
//!     .filter_items(|n| n % 2 == 0)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(evens, vec![2, 4]);
//! # }
//! ```
//!
//! # See Also
//!
//! - [`FilterNotExt::filter_not`](crate::FilterNotExt::filter_not) - Negated predicate
//! - [`FilterIndexedExt::filter_indexed`](crate::FilterIndexedExt::filter_indexed) - Predicate receives the index

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_filter_items_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_filter_items_impl!();
