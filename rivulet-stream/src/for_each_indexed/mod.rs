// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Indexed terminal consumption.
//!
//! `for_each_indexed` is the only operator here that drives a stream instead
//! of deriving one. It awaits every item, hands each value to the action
//! together with its position and resolves once the stream completes.
//!
//! # Behavior
//!
//! - `action` runs synchronously, once per value, in emission order
//! - Resolves to `Ok(())` when the stream completes
//! - Resolves to `Err(e)` with the stream's error item; the error is also logged
//!
//! # Examples
//!
//! ```rust
//! use rivulet_stream::{from_values, ForEachIndexedExt};
//! use std::sync::{Arc, Mutex};
//!
//! # async fn example() -> rivulet_core::Result<()> {
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! from_values(vec!["x", "y"])
//!     .for_each_indexed(move |index, value| {
//!         if let Ok(mut seen) = sink.lock() {
//!             seen.push(format!("{index}{value}"));
//!         }
//!     })
//!     .await?;
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["0x", "1y"]);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_for_each_indexed_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_for_each_indexed_impl!();
