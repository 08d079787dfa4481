// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{empty, from_values, ForEachIndexedExt};
use rivulet_test_utils::test_data::{mixed_fixtures, TestData};
use rivulet_test_utils::{test_channel, test_channel_with_errors};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_for_each_indexed_visits_every_value_in_order() -> anyhow::Result<()> {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    // Act
    from_values(mixed_fixtures())
        .for_each_indexed(move |index, data: TestData| {
            sink.lock().unwrap().push((index, data.name().to_string()));
        })
        .await?;

    // Assert
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 7);
    assert_eq!(seen[0], (0, "Alice".to_string()));
    assert_eq!(seen[6], (6, "Oak".to_string()));
    assert!(seen.iter().enumerate().all(|(i, (index, _))| i == *index));

    Ok(())
}

#[tokio::test]
async fn test_for_each_indexed_empty_stream_is_ok() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(Mutex::new(0_usize));
    let counter = Arc::clone(&calls);

    // Act
    empty::<i32>()
        .for_each_indexed(move |_, _| *counter.lock().unwrap() += 1)
        .await?;

    // Assert
    assert_eq!(*calls.lock().unwrap(), 0);

    Ok(())
}

#[tokio::test]
async fn test_for_each_indexed_returns_first_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    tx.send(StreamItem::Value(10))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("stop here")))?;
    tx.send(StreamItem::Value(20))?;

    // Act
    let result = stream
        .for_each_indexed(move |index, value| sink.lock().unwrap().push((index, value)))
        .await;

    // Assert
    assert!(matches!(
        result,
        Err(RivuletError::StreamProcessingError { ref context }) if context == "stop here"
    ));
    assert_eq!(*seen.lock().unwrap(), vec![(0, 10)]);

    Ok(())
}

#[cfg(feature = "multi-threaded")]
#[tokio::test]
async fn test_for_each_indexed_waits_for_live_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<&'static str>();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let consumer = tokio::spawn(
        stream.for_each_indexed(move |index, value| sink.lock().unwrap().push(format!("{index}{value}"))),
    );

    // Act
    tx.send("a")?;
    tx.send("b")?;
    drop(tx);
    consumer.await??;

    // Assert
    assert_eq!(*seen.lock().unwrap(), vec!["0a", "1b"]);

    Ok(())
}
