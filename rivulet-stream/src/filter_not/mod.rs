// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Negated filtering: keeps the values the predicate rejects.
//!
//! `s.filter_not(p)` emits exactly what `s.filter_items(|v| !p(v))` emits.
//!
//! ```rust
//! use rivulet_stream::{from_values, FilterNotExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let odds: Vec<i32> = from_values(vec![1, 2, 3, 4])
//!     .filter_not(|n| n % 2 == 0)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(odds, vec![1, 3]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_filter_not_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_filter_not_impl!();
