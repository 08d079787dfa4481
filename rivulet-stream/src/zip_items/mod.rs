// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip primitive - positional pairing of two streams.
//!
//! `a.zip_items(b, combiner)` emits `combiner(a_n, b_n)` once both streams have
//! produced their n-th value.
//!
//! # Behavior
//!
//! - At most one value per side is buffered
//! - Completes as soon as either side completes; a value still buffered on
//!   the other side is dropped
//! - An error from either side is forwarded and ends the stream
//! - Both sides are dropped together with the zipped stream, which is what
//!   lets [`with_index`](crate::WithIndexExt::with_index) pair a finite stream
//!   with the unbounded [`counter`](crate::counter)
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, ZipItemsExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let pairs: Vec<String> = from_values(vec!['a', 'b', 'c'])
//!     .zip_items(from_values(vec![1, 2]), |c, n| format!("{c}{n}"))
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(pairs, vec!["a1", "b2"]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_zip_items_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_zip_items_impl!();
