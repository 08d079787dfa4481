// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Index-aware reduction.
//!
//! # Behavior
//!
//! - [`reduce_indexed`](ReduceIndexedExt::reduce_indexed) seeds with the first
//!   value, so `operation` sees the indices `1, 2, ...`; a single-value source
//!   emits that value untouched and an empty source emits nothing
//! - [`reduce_indexed_with`](ReduceIndexedExt::reduce_indexed_with) seeds with
//!   an explicit initial value and sees every index from `0`
//! - The result is emitted once, on completion; an error discards the partial
//!   result and ends the stream
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, ReduceIndexedExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! // 10 + 1*20 + 2*30
//! let weighted: Vec<i32> = from_values(vec![10, 20, 30])
//!     .reduce_indexed(|index, acc, value| acc + index as i32 * value)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(weighted, vec![90]);
//!
//! let trace: Vec<String> = from_values(vec!['a', 'b'])
//!     .reduce_indexed_with(String::new(), |index, mut acc, c| {
//!         acc.push_str(&format!("{index}{c}"));
//!         acc
//!     })
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(trace, vec!["0a1b"]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_reduce_indexed_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_reduce_indexed_impl!();
