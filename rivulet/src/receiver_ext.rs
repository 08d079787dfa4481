// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning tokio `UnboundedReceiver`s into rivulet streams.

use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Extension trait for `UnboundedReceiver` to create rivulet streams.
pub trait UnboundedReceiverExt<T> {
    /// Wraps every received value in `StreamItem::Value`.
    ///
    /// The stream completes once all senders are dropped and the buffer is
    /// drained.
    fn into_rivulet_stream(self) -> impl Stream<Item = StreamItem<T>> + Send + 'static;

    /// Like [`into_rivulet_stream`](UnboundedReceiverExt::into_rivulet_stream),
    /// transforming each value on the way in.
    fn into_rivulet_stream_with<U, F>(self, mapper: F) -> impl Stream<Item = StreamItem<U>> + Send + 'static
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Send + 'static;
}

impl<T> UnboundedReceiverExt<T> for mpsc::UnboundedReceiver<T>
where
    T: Send + 'static,
{
    fn into_rivulet_stream(self) -> impl Stream<Item = StreamItem<T>> + Send + 'static {
        UnboundedReceiverStream::new(self).map(StreamItem::Value)
    }

    fn into_rivulet_stream_with<U, F>(self, mut mapper: F) -> impl Stream<Item = StreamItem<U>> + Send + 'static
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        UnboundedReceiverStream::new(self).map(move |value| StreamItem::Value(mapper(value)))
    }
}
