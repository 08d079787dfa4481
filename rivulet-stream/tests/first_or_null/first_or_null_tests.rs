// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{empty, from_values, FirstOrNullExt};
use rivulet_test_utils::test_data::{animal_dog, person_alice, person_bob, TestData};
use rivulet_test_utils::{
    assert_stream_ended, collect_items, test_channel, test_channel_with_errors, unwrap_stream,
    unwrap_value,
};

#[tokio::test]
async fn test_first_or_null_on_empty_emits_single_none() {
    // Arrange
    let first = empty::<TestData>().first_or_null();

    // Act
    let (values, error) = collect_items(first).await;

    // Assert
    assert_eq!(values, vec![None]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_first_or_null_emits_first_and_nothing_else() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = Box::pin(stream.first_or_null());

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;

    // Assert - ends while the source is still open
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        Some(person_alice())
    );
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_first_or_null_by_returns_first_match() {
    // Arrange
    let first = from_values(vec![person_alice(), animal_dog(), person_bob()])
        .first_or_null_by(|data| matches!(data, TestData::Animal(_)));

    // Act
    let (values, _) = collect_items(first).await;

    // Assert
    assert_eq!(values, vec![Some(animal_dog())]);
}

#[tokio::test]
async fn test_first_or_null_by_without_match_emits_none() {
    // Arrange
    let first = from_values(vec![1, 3, 5]).first_or_null_by(|n| n % 2 == 0);

    // Act
    let (values, _) = collect_items(first).await;

    // Assert
    assert_eq!(values, vec![None]);
}

#[tokio::test]
async fn test_first_or_null_error_before_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = Box::pin(stream.first_or_null());

    // Act
    tx.send(StreamItem::Error(RivuletError::stream_error("empty and broken")))?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
