// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::MapItemsExt;
use rivulet_test_utils::test_data::{animal_dog, person_alice, TestData};
use rivulet_test_utils::{
    assert_stream_ended, test_channel, test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_map_items_transforms_each_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut result = Box::pin(stream.map_items(|data| data.name().to_string()));

    // Act
    tx.send(person_alice())?;
    tx.send(animal_dog())?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), "Alice");
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), "Dog");

    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_try_map_items_transform_error_terminates() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<&str>();
    let mut result = Box::pin(stream.try_map_items(|s| {
        s.parse::<i32>()
            .map_err(|e| RivuletError::stream_error(format!("{s}: {e}")))
    }));

    // Act
    tx.send("1")?;
    tx.send("x")?;
    tx.send("3")?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 1);
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_map_items_forwards_upstream_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = Box::pin(stream.map_items(|n| n * 10));

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("upstream")))?;
    tx.send(StreamItem::Value(2))?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 10);
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
