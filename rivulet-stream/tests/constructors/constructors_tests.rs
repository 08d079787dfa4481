// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{counter, empty, fail, from_values, just, range};
use rivulet_test_utils::collect_items;

#[tokio::test]
async fn test_range_emits_count_values_from_start() {
    let (values, error) = collect_items(range(5, 3)).await;

    assert_eq!(values, vec![5, 6, 7]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_range_with_zero_count_is_empty() {
    let (values, _) = collect_items(range(5, 0)).await;

    assert!(values.is_empty());
}

#[tokio::test]
async fn test_counter_is_lazy_and_unbounded() {
    let first: Vec<usize> = counter().take(4).map(|item| item.unwrap()).collect().await;

    assert_eq!(first, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_counter_instances_are_independent() {
    let mut a = Box::pin(counter());
    let mut b = Box::pin(counter());

    assert!(matches!(a.next().await, Some(StreamItem::Value(0))));
    assert!(matches!(a.next().await, Some(StreamItem::Value(1))));
    assert!(matches!(b.next().await, Some(StreamItem::Value(0))));
}

#[tokio::test]
async fn test_empty_just_fail() {
    let (values, _) = collect_items(empty::<u8>()).await;
    assert!(values.is_empty());

    let (values, _) = collect_items(just("one")).await;
    assert_eq!(values, vec!["one"]);

    let (values, error) = collect_items(fail::<u8>(RivuletError::stream_error("nope"))).await;
    assert!(values.is_empty());
    assert!(error.is_some());
}

#[tokio::test]
async fn test_from_values_preserves_order() {
    let (values, _) = collect_items(from_values(vec!['c', 'a', 'b'])).await;

    assert_eq!(values, vec!['c', 'a', 'b']);
}
