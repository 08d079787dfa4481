// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{counter, from_values, ZipItemsExt};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_items, test_channel,
    test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_zip_items_pairs_by_position() -> anyhow::Result<()> {
    // Arrange
    let (left_tx, left) = test_channel::<char>();
    let (right_tx, right) = test_channel::<i32>();
    let mut result = Box::pin(left.zip_items(right, |c, n| format!("{c}{n}")));

    // Act & Assert - nothing until both sides have a value
    left_tx.send('a')?;
    left_tx.send('b')?;
    assert_no_element_emitted(&mut result, 100).await;

    right_tx.send(1)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), "a1");

    right_tx.send(2)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), "b2");

    Ok(())
}

#[tokio::test]
async fn test_zip_items_completes_when_either_side_completes() -> anyhow::Result<()> {
    // Arrange
    let (left_tx, left) = test_channel::<i32>();
    let (right_tx, right) = test_channel::<i32>();
    let mut result = Box::pin(left.zip_items(right, |l, r| l + r));

    // Act
    left_tx.send(1)?;
    right_tx.send(10)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 11);

    right_tx.send(20)?;
    drop(left_tx);

    // Assert - right still open, but the pairing can never complete
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_zip_items_with_unbounded_counter_is_bounded_by_source() {
    // Arrange
    let zipped = counter().zip_items(from_values(vec!["x", "y", "z"]), |i, s| (i, s));

    // Act
    let (values, error) = collect_items(zipped).await;

    // Assert
    assert_eq!(values, vec![(0, "x"), (1, "y"), (2, "z")]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_zip_items_forwards_error_from_right() -> anyhow::Result<()> {
    // Arrange
    let (left_tx, left) = test_channel::<i32>();
    let (right_tx, right) = test_channel_with_errors::<i32>();
    let mut result = Box::pin(left.zip_items(right, |l, r| l * r));

    // Act
    left_tx.send(2)?;
    right_tx.send(StreamItem::Value(3))?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 6);

    left_tx.send(4)?;
    right_tx.send(StreamItem::Error(RivuletError::stream_error("right failed")))?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_zip_items_forwards_error_from_left() -> anyhow::Result<()> {
    // Arrange
    let (left_tx, left) = test_channel_with_errors::<i32>();
    let (right_tx, right) = test_channel::<i32>();
    let mut result = Box::pin(left.zip_items(right, |l, r| l + r));

    // Act
    left_tx.send(StreamItem::Value(1))?;
    right_tx.send(10)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 11);

    left_tx.send(StreamItem::Error(RivuletError::stream_error("left failed")))?;
    right_tx.send(20)?;

    // Assert
    let item = unwrap_stream(&mut result, 500).await;
    assert!(matches!(
        item,
        StreamItem::Error(RivuletError::StreamProcessingError { ref context }) if context == "left failed"
    ));
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
