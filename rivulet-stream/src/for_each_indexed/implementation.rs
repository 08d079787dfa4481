// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::pin;
use futures::stream::{Stream, StreamExt};
use rivulet_core::{IndexedValue, Result, StreamItem};

// Shared implementation logic
pub(crate) async fn for_each_indexed_impl<S, T, F>(stream: S, mut action: F) -> Result<()>
where
    S: Stream<Item = StreamItem<IndexedValue<T>>>,
    F: FnMut(usize, T),
{
    let mut stream = pin!(stream);

    while let Some(item) = stream.next().await {
        match item.into_result() {
            Ok(IndexedValue { index, value }) => action(index, value),
            Err(e) => {
                error!("for_each_indexed: stream terminated with error: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

macro_rules! define_for_each_indexed_impl {
    (@step #[$attr:meta], $($bounds:tt)*) => {
        use async_trait::async_trait;
        use crate::for_each_indexed::implementation::for_each_indexed_impl;
        use crate::with_index::WithIndexExt;
        use futures::Stream;
        use rivulet_core::{Result, StreamItem};

        /// Extension trait providing the `for_each_indexed` terminal operator.
        ///
        /// See the [module-level documentation](crate::for_each_indexed) for details.
        #[$attr]
        pub trait ForEachIndexedExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Drives the stream to completion, calling `action(index, value)` for
            /// every value in order.
            ///
            /// # Errors
            ///
            /// Returns the stream's error item, after which `action` is not called
            /// again.
            async fn for_each_indexed<F>(self, action: F) -> Result<()>
            where
                F: FnMut(usize, T) + $($bounds)* 'static;
        }

        #[$attr]
        impl<S, T> ForEachIndexedExt<T> for S
        where
            S: Stream<Item = StreamItem<T>> + $($bounds)* 'static,
            T: $($bounds)* 'static,
        {
            async fn for_each_indexed<F>(self, action: F) -> Result<()>
            where
                F: FnMut(usize, T) + $($bounds)* 'static,
            {
                for_each_indexed_impl(self.with_index(), action).await
            }
        }
    };

    // Single threaded (no bounds)
    () => {
        define_for_each_indexed_impl!(@step #[async_trait(?Send)], );
    };

    // Multi threaded (bounds provided)
    ($($bounds:tt)+) => {
        define_for_each_indexed_impl!(@step #[async_trait], $($bounds)+);
    };
}
