// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emptiness primitive.
//!
//! Emits exactly one `bool`. The answer is `false` as soon as the first value
//! arrives, without waiting for the source to complete; it is `true` when the
//! source completes without emitting. An error that arrives before the answer
//! is known is emitted in its place.
//!
//! The negation lives in [`is_not_empty`](crate::IsNotEmptyExt::is_not_empty).

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_is_empty_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_is_empty_impl!();
