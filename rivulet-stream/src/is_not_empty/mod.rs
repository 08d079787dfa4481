// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Non-emptiness check, the negation of [`is_empty`](crate::IsEmptyExt::is_empty).
//!
//! Emits `true` as soon as the first value arrives and `false` if the source
//! completes without emitting.

#[macro_use]
mod implementation;

#[cfg(feature = "multi-threaded")]
define_is_not_empty_impl!(Send +);

#[cfg(not(feature = "multi-threaded"))]
define_is_not_empty_impl!();
