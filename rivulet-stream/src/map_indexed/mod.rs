// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Index-aware mapping.
//!
//! # Behavior
//!
//! - [`map_indexed`](MapIndexedExt::map_indexed) emits exactly one output per
//!   input; the n-th output is `f(n, value_n)`
//! - [`map_indexed_not_null`](MapIndexedExt::map_indexed_not_null) drops the
//!   outputs that are `None`; indices still follow source positions
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, MapIndexedExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let labelled: Vec<String> = from_values(vec!["a", "b"])
//!     .map_indexed(|index, value| format!("{index}:{value}"))
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(labelled, vec!["0:a", "1:b"]);
//!
//! let every_other: Vec<&str> = from_values(vec!["a", "b", "c"])
//!     .map_indexed_not_null(|index, value| (index % 2 == 0).then_some(value))
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(every_other, vec!["a", "c"]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_map_indexed_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_map_indexed_impl!();
