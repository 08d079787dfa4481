// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet stream operators.
//!
//! Intended for development and tests only.
//!
//! # Architecture
//!
//! Operators consume their source (`self`), so tests can't push into a stream
//! after building a pipeline on it. The channels in this crate split the two
//! roles: the sender stays with the test, the receiving side becomes the
//! pipeline source.
//!
//! ```rust
//! use rivulet_test_utils::test_channel;
//! use rivulet_test_utils::test_data::person_alice;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (tx, mut stream) = test_channel();
//! tx.send(person_alice()).unwrap();
//!
//! let item = stream.next().await.unwrap().unwrap();
//! assert_eq!(item, person_alice());
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - `TestData` fixtures (people, animals, plants) and narrowing helpers
//! - `helpers` - Timeout-bounded assertions over streams

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod test_data;

use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_items, unwrap_stream, unwrap_value,
};
pub use test_data::TestData;

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
///
/// The stream completes once every sender has been dropped.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>`, for error propagation tests.
///
/// ```rust
/// use rivulet_test_utils::test_channel_with_errors;
/// use rivulet_core::{RivuletError, StreamItem};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(RivuletError::stream_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
