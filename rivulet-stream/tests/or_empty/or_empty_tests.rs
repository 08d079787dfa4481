// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::StreamItem;
use rivulet_stream::{from_values, MapItemsExt, OrEmptyExt};
use rivulet_test_utils::test_data::{person_alice, person_bob, TestData};
use rivulet_test_utils::{assert_stream_ended, collect_items, test_channel, unwrap_stream};

#[tokio::test]
async fn test_or_empty_absent_stream_completes_immediately() {
    // Arrange
    let missing: Option<futures::stream::Pending<StreamItem<TestData>>> = None;
    let mut result = Box::pin(missing.or_empty());

    // Assert
    assert_stream_ended(&mut result, 100).await;
}

#[tokio::test]
async fn test_or_empty_present_stream_is_unchanged() {
    // Arrange
    let present = Some(from_values(vec![person_alice(), person_bob()]));

    // Act
    let (values, error) = collect_items(present.or_empty()).await;

    // Assert
    assert_eq!(values, vec![person_alice(), person_bob()]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_or_empty_present_live_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = Box::pin(Some(stream).or_empty().map_items(|n| n + 1));

    // Act
    tx.send(1)?;

    // Assert
    assert!(matches!(unwrap_stream(&mut result, 500).await, StreamItem::Value(2)));

    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_or_empty_absent_zero_emissions() {
    // Arrange
    let missing: Option<futures::stream::Empty<StreamItem<i32>>> = None;

    // Act
    let count = missing.or_empty().count().await;

    // Assert
    assert_eq!(count, 0);
}
