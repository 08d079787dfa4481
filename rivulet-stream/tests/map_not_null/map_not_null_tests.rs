// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{from_values, MapNotNullExt};
use rivulet_test_utils::test_data::{mixed_fixtures, TestData};
use rivulet_test_utils::{
    assert_stream_ended, collect_items, test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_map_not_null_keeps_present_results() {
    // Arrange
    let ages = from_values(mixed_fixtures()).map_not_null(|data: TestData| data.age());

    // Act
    let (values, error) = collect_items(ages).await;

    // Assert
    assert_eq!(values, vec![25, 30, 35]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_map_not_null_all_absent_is_empty() {
    // Arrange
    let nothing = from_values(vec![1, 2, 3]).map_not_null(|_| None::<String>);

    // Act
    let (values, _) = collect_items(nothing).await;

    // Assert
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_map_not_null_forwards_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<&str>();
    let mut result = Box::pin(stream.map_not_null(|s| s.parse::<u8>().ok()));

    // Act
    tx.send(StreamItem::Value("12"))?;
    tx.send(StreamItem::Value("not a number"))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("boom")))?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 12);
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
