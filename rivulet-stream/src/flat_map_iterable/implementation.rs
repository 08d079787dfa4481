// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_flat_map_iterable_impl {
    ($($bounds:tt)*) => {
        use crate::until_error::UntilError;
        use futures::future::{ready, Either};
        use futures::stream::{self, Stream, StreamExt};
        use rivulet_core::StreamItem;

        /// Extension trait providing the `flat_map_iterable` primitive.
        ///
        /// See the [module-level documentation](crate::flat_map_iterable) for details.
        pub trait FlatMapIterableExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits every element of `f(value)`, for every value, in order.
            fn flat_map_iterable<U, I, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                I: IntoIterator<Item = U>,
                I::IntoIter: $($bounds)* 'static,
                F: FnMut(T) -> I + $($bounds)* 'static;
        }

        impl<S, T> FlatMapIterableExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn flat_map_iterable<U, I, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                I: IntoIterator<Item = U>,
                I::IntoIter: $($bounds)* 'static,
                F: FnMut(T) -> I + $($bounds)* 'static,
            {
                UntilError::new(self.flat_map(move |item| match item {
                    StreamItem::Value(value) => {
                        Either::Left(stream::iter(f(value)).map(StreamItem::Value))
                    }
                    StreamItem::Error(e) => Either::Right(stream::once(ready(StreamItem::Error(e)))),
                }))
            }
        }
    };
}
