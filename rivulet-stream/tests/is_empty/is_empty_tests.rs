// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{empty, IsEmptyExt};
use rivulet_test_utils::test_data::{person_alice, TestData};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_items, test_channel,
    test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_is_empty_short_circuits_on_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = Box::pin(stream.is_empty());

    // Act
    assert_no_element_emitted(&mut result, 100).await;
    tx.send(person_alice())?;

    // Assert - answered while the source is still open
    assert!(!unwrap_value(Some(unwrap_stream(&mut result, 500).await)));
    assert_stream_ended(&mut result, 500).await;

    drop(tx);
    Ok(())
}

#[tokio::test]
async fn test_is_empty_true_on_completion() {
    // Arrange
    let checked = empty::<TestData>().is_empty();

    // Act
    let (values, _) = collect_items(checked).await;

    // Assert
    assert_eq!(values, vec![true]);
}

#[tokio::test]
async fn test_is_empty_error_replaces_answer() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = Box::pin(stream.is_empty());

    // Act
    tx.send(StreamItem::Error(RivuletError::stream_error("early")))?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
