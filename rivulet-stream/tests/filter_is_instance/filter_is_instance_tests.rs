// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{from_values, AnyItem, FilterIsInstanceExt, FilterIsInstanceOfExt};
use rivulet_test_utils::test_data::{
    animal_dog, mixed_fixtures, person_alice, Animal, Person, Plant, TestData,
};
use rivulet_test_utils::{
    assert_stream_ended, collect_items, test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_filter_is_instance_narrows_variant() {
    // Arrange
    let people = from_values(mixed_fixtures()).filter_is_instance(TestData::into_person);

    // Act
    let (values, error) = collect_items(people).await;

    // Assert
    let names: Vec<String> = values.into_iter().map(|p: Person| p.name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_filter_is_instance_excludes_without_error() {
    // Arrange
    let plants =
        from_values(vec![person_alice(), animal_dog()]).filter_is_instance(TestData::into_plant);

    // Act
    let (values, error): (Vec<Plant>, _) = collect_items(plants).await;

    // Assert
    assert!(values.is_empty());
    assert!(error.is_none());
}

#[tokio::test]
async fn test_filter_is_instance_of_downcasts_runtime_type() {
    // Arrange
    let items: Vec<AnyItem> = vec![
        Box::new(1_u32) as AnyItem,
        Box::new("text") as AnyItem,
        Box::new(2_u32) as AnyItem,
        Box::new(3_i64) as AnyItem,
    ];
    let numbers = from_values(items).filter_is_instance_of::<u32>();

    // Act
    let (values, error) = collect_items(numbers).await;

    // Assert
    assert_eq!(values, vec![1, 2]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_filter_is_instance_forwards_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = Box::pin(stream.filter_is_instance(TestData::into_animal));

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Value(animal_dog()))?;
    tx.send(StreamItem::Error(RivuletError::stream_error("boom")))?;

    // Assert
    let dog: Animal = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(dog.legs, 4);
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}
