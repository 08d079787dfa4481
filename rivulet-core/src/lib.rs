// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod indexed_value;
pub mod stream_item;

pub use self::error::{IntoRivuletError, Result, ResultExt, RivuletError};
pub use self::indexed_value::IndexedValue;
pub use self::stream_item::StreamItem;
