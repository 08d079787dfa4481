// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! "No element (matches)" checks.
//!
//! [`none`](NoneExt::none) is [`is_empty`](crate::IsEmptyExt::is_empty) under
//! its collection name. [`none_by`](NoneExt::none_by) filters first, so it
//! answers `false` and stops consuming the source at the first match.
//!
//! ```rust
//! use rivulet_stream::{from_values, NoneExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let no_negatives: Vec<bool> = from_values(vec![1, 2, 3])
//!     .none_by(|n| *n < 0)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(no_negatives, vec![true]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_none_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_none_impl!();
