// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_filter_items_impl {
    ($($bounds:tt)*) => {
        use crate::until_error::UntilError;
        use futures::future::ready;
        use futures::{Stream, StreamExt};
        use rivulet_core::{Result, StreamItem};

        /// Extension trait providing the `filter_items` primitive.
        ///
        /// See the [module-level documentation](crate::filter_items) for details.
        pub trait FilterItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits only the values for which `predicate` returns `true`.
            fn filter_items<F>(self, predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> bool + $($bounds)* 'static;

            /// Like [`filter_items`](FilterItemsExt::filter_items), with a predicate that can fail.
            ///
            /// An `Err` from the predicate is emitted as the stream's error and ends it.
            fn try_filter_items<F>(self, predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> Result<bool> + $($bounds)* 'static;
        }

        impl<S, T> FilterItemsExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn filter_items<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> bool + $($bounds)* 'static,
            {
                UntilError::new(self.filter_map(move |item| {
                    ready(match item {
                        StreamItem::Value(value) if predicate(&value) => Some(StreamItem::Value(value)),
                        StreamItem::Value(_) => None,
                        StreamItem::Error(e) => Some(StreamItem::Error(e)),
                    })
                }))
            }

            fn try_filter_items<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> Result<bool> + $($bounds)* 'static,
            {
                UntilError::new(self.filter_map(move |item| {
                    ready(match item {
                        StreamItem::Value(value) => match predicate(&value) {
                            Ok(true) => Some(StreamItem::Value(value)),
                            Ok(false) => None,
                            Err(e) => Some(StreamItem::Error(e)),
                        },
                        StreamItem::Error(e) => Some(StreamItem::Error(e)),
                    })
                }))
            }
        }
    };
}
