// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Turns an optional stream into a stream.
//!
//! `Some(stream).or_empty()` behaves exactly like `stream`; `None.or_empty()`
//! completes immediately without emitting.
//!
//! ```rust
//! use rivulet_stream::{from_values, OrEmptyExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let missing: Option<futures::stream::Empty<rivulet_core::StreamItem<i32>>> = None;
//! let values: Vec<i32> = missing.or_empty().map(|item| item.unwrap()).collect().await;
//! assert!(values.is_empty());
//!
//! let present = Some(from_values(vec![1, 2]));
//! let values: Vec<i32> = present.or_empty().map(|item| item.unwrap()).collect().await;
//! assert_eq!(values, vec![1, 2]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_or_empty_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_or_empty_impl!();
