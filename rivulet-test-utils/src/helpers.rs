// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use futures::stream::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::time::{sleep, timeout};

/// Waits up to `timeout_ms` for the next item.
///
/// # Panics
///
/// Panics if nothing arrives in time or if the stream ends.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected StreamItem but stream ended"),
        Err(_) => panic!("Timeout: No item received within {timeout_ms} ms"),
    }
}

/// Extracts the value of a received item.
///
/// # Panics
///
/// Panics on `None` or on an error item.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected Value but got Error: {e}"),
        None => panic!("Expected Value but stream ended"),
    }
}

/// Asserts that the stream completes within `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or stays open.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end but it returned a value"),
        Err(_) => panic!("Timeout: Stream did not end within {timeout_ms} ms"),
    }
}

/// Asserts that the stream stays silent for `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or ends.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        state = stream.next() => {
            match state {
                Some(_) => panic!("Unexpected item emitted, expected no output."),
                None => panic!("Unexpected stream end, expected no output."),
            }
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Drains a finite stream into its values, stopping at the first error.
///
/// Returns the values seen so far and the error, if any.
pub async fn collect_items<S, T>(stream: S) -> (Vec<T>, Option<rivulet_core::RivuletError>)
where
    S: Stream<Item = StreamItem<T>>,
{
    let mut stream = core::pin::pin!(stream);
    let mut values = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            StreamItem::Value(value) => values.push(value),
            StreamItem::Error(e) => return (values, Some(e)),
        }
    }

    (values, None)
}
