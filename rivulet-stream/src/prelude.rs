// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator traits and core types.
//!
//! ```
//! use rivulet_stream::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let labels: Vec<String> = from_values(vec![Some("a"), None, Some("b")])
//!     .filter_not_null()
//!     .map_indexed(|index, value| format!("{index}:{value}"))
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(labels, vec!["0:a", "1:b"]);
//! # }
//! ```

pub use crate::constructors::{counter, empty, fail, from_values, just, range};
pub use crate::filter_indexed::FilterIndexedExt;
pub use crate::filter_is_instance::{AnyItem, FilterIsInstanceExt, FilterIsInstanceOfExt};
pub use crate::filter_items::FilterItemsExt;
pub use crate::filter_not::FilterNotExt;
pub use crate::filter_not_null::FilterNotNullExt;
pub use crate::first_or_default::FirstOrDefaultExt;
pub use crate::first_or_null::FirstOrNullExt;
pub use crate::flat_map_iterable::FlatMapIterableExt;
pub use crate::flatten_items::FlattenItemsExt;
pub use crate::for_each_indexed::ForEachIndexedExt;
pub use crate::is_empty::IsEmptyExt;
pub use crate::is_not_empty::IsNotEmptyExt;
pub use crate::map_indexed::MapIndexedExt;
pub use crate::map_items::MapItemsExt;
pub use crate::map_not_null::MapNotNullExt;
pub use crate::none::NoneExt;
pub use crate::or_empty::OrEmptyExt;
pub use crate::reduce_indexed::ReduceIndexedExt;
pub use crate::reduce_items::ReduceItemsExt;
pub use crate::require_no_nulls::RequireNoNullsExt;
pub use crate::with_index::WithIndexExt;
pub use crate::zip_items::ZipItemsExt;

pub use rivulet_core::{IndexedValue, RivuletError, StreamItem};
