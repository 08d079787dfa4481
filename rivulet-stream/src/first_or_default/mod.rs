// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-element primitive with a fallback.
//!
//! # Behavior
//!
//! - Emits exactly one value: the first (matching) value, or the default
//!   once the source completes without one
//! - Short-circuits: the source is not polled after the first match
//! - An error before a match is emitted instead of the default
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{empty, from_values, FirstOrDefaultExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let first: Vec<i32> = from_values(vec![5, 6, 7])
//!     .first_or_default_by(0, |n| n % 2 == 0)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(first, vec![6]);
//!
//! let fallback: Vec<i32> = empty()
//!     .first_or_default(-1)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(fallback, vec![-1]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_first_or_default_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_first_or_default_impl!();
