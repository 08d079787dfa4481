// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{from_values, FilterNotNullExt};
use rivulet_test_utils::test_data::{person_alice, person_bob, TestData};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_items, test_channel,
    test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_filter_not_null_drops_absent_values() {
    // Arrange
    let input = vec![None, Some(1), None, None, Some(2), Some(3), None];
    let absent = input.iter().filter(|v| v.is_none()).count();
    let filtered = from_values(input.clone()).filter_not_null();

    // Act
    let (values, error) = collect_items(filtered).await;

    // Assert
    assert_eq!(values.len(), input.len() - absent);
    assert_eq!(values, vec![1, 2, 3]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_filter_not_null_live_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Option<TestData>>();
    let mut result = Box::pin(stream.filter_not_null());

    // Act & Assert
    tx.send(None)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(Some(person_alice()))?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), person_alice());

    tx.send(None)?;
    tx.send(Some(person_bob()))?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), person_bob());

    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_filter_not_null_forwards_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<Option<i32>>();
    let mut result = Box::pin(stream.filter_not_null());

    // Act
    tx.send(StreamItem::Value(None))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("boom")))?;
    tx.send(StreamItem::Value(Some(1)))?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
