// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collection-style operators for async streams.
//!
//! `rivulet-rx` bundles the rivulet crates behind a single dependency:
//!
//! - core types ([`StreamItem`], [`IndexedValue`], [`RivuletError`])
//! - every operator extension trait from `rivulet-stream`
//! - adapters turning tokio channel receivers into rivulet streams
//!
//! # Examples
//!
//! ```rust
//! use rivulet_rx::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! tx.send(Some("alpha")).unwrap();
//! tx.send(None).unwrap();
//! tx.send(Some("beta")).unwrap();
//! drop(tx);
//!
//! let labels: Vec<String> = rx
//!     .into_rivulet_stream()
//!     .filter_not_null()
//!     .map_indexed(|index, name| format!("{index}:{name}"))
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(labels, vec!["0:alpha", "1:beta"]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod receiver_ext;

// Re-export core types
pub use rivulet_core::{IndexedValue, IntoRivuletError, Result, ResultExt, RivuletError, StreamItem};

// Re-export every operator
pub use rivulet_stream::*;

pub use receiver_ext::UnboundedReceiverExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::receiver_ext::UnboundedReceiverExt;
    pub use rivulet_stream::prelude::*;
}
