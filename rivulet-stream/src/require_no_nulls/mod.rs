// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Strict null handling: absent elements are errors.
//!
//! Where [`filter_not_null`](crate::FilterNotNullExt::filter_not_null) silently
//! drops `None`, this operator fails the stream with
//! [`RivuletError::NullElement`](rivulet_core::RivuletError::NullElement) the
//! moment one is seen. Values before it are emitted unchanged; nothing after
//! it is.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, RequireNoNullsExt};
//! use rivulet_core::{RivuletError, StreamItem};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let items: Vec<StreamItem<i32>> = from_values(vec![Some(1), None, Some(3)])
//!     .require_no_nulls_named("readings")
//!     .collect()
//!     .await;
//!
//! assert_eq!(items.len(), 2);
//! assert!(matches!(&items[0], StreamItem::Value(1)));
//! assert!(matches!(
//!     &items[1],
//!     StreamItem::Error(RivuletError::NullElement { stream }) if stream == "readings"
//! ));
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_require_no_nulls_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_require_no_nulls_impl!();
