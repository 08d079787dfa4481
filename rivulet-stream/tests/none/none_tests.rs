// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{empty, from_values, NoneExt};
use rivulet_test_utils::test_data::{animal_dog, mixed_fixtures, person_alice, TestData};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_items, test_channel,
    test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_none_on_empty_is_true() {
    let (values, _) = collect_items(empty::<i32>().none()).await;

    assert_eq!(values, vec![true]);
}

#[tokio::test]
async fn test_none_on_non_empty_is_false() {
    let (values, _) = collect_items(from_values(vec![0]).none()).await;

    assert_eq!(values, vec![false]);
}

#[tokio::test]
async fn test_none_by_true_when_nothing_matches() {
    // Arrange
    let checked = from_values(mixed_fixtures()).none_by(|data| data.name() == "Zebra");

    // Act
    let (values, _) = collect_items(checked).await;

    // Assert
    assert_eq!(values, vec![true]);
}

#[tokio::test]
async fn test_none_by_answers_false_at_first_match() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = Box::pin(stream.none_by(|data| matches!(data, TestData::Animal(_))));

    // Act & Assert
    tx.send(person_alice())?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(animal_dog())?;
    assert!(!unwrap_value(Some(unwrap_stream(&mut result, 500).await)));
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_none_by_forwards_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = Box::pin(stream.none_by(|n| *n > 0));

    // Act
    tx.send(StreamItem::Value(-1))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("boom")))?;

    // Assert
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
