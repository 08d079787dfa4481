// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Type-narrowing filters.
//!
//! Two flavors are provided:
//!
//! - [`filter_is_instance`](FilterIsInstanceExt::filter_is_instance) takes an
//!   explicit narrowing function, typically a `match` on an enum variant
//! - [`filter_is_instance_of`](FilterIsInstanceOfExt::filter_is_instance_of)
//!   works on streams of boxed [`Any`](core::any::Any) values and uses the
//!   runtime type id
//!
//! In both cases elements of the wrong type are excluded, never reported as
//! errors, and the relative order of the survivors is preserved.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, FilterIsInstanceExt};
//! use futures::StreamExt;
//!
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! # async fn example() {
//! let radii: Vec<f64> = from_values(vec![Shape::Circle(1.0), Shape::Square(2.0), Shape::Circle(3.0)])
//!     .filter_is_instance(|shape| match shape {
//!         Shape::Circle(r) => Some(r),
//!         Shape::Square(_) => None,
//!     })
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(radii, vec![1.0, 3.0]);
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_filter_is_instance_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_filter_is_instance_impl!();
