// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First element, or an explicit absence.
//!
//! Values are lifted into `Some` and fed to
//! [`first_or_default`](crate::FirstOrDefaultExt) with `None` as the fallback,
//! so the result stream always carries exactly one `Option` (unless the
//! source errors first).
//!
//! ```rust
//! use rivulet_stream::{empty, from_values, FirstOrNullExt};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let first: Vec<Option<i32>> = from_values(vec![4, 5])
//!     .first_or_null()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(first, vec![Some(4)]);
//!
//! let missing: Vec<Option<i32>> = empty()
//!     .first_or_null()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(missing, vec![None]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_first_or_null_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_first_or_null_impl!();
