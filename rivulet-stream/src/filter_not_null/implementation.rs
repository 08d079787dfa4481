// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_filter_not_null_impl {
    ($($bounds:tt)*) => {
        use crate::flat_map_iterable::FlatMapIterableExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `filter_not_null` operator.
        ///
        /// See the [module-level documentation](crate::filter_not_null) for details.
        pub trait FilterNotNullExt<T>: Stream<Item = StreamItem<Option<T>>> + Sized {
            /// Drops every `None` and unwraps every `Some`.
            fn filter_not_null(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;
        }

        impl<S, T> FilterNotNullExt<T> for S
        where
            S: Stream<Item = StreamItem<Option<T>>>,
        {
            fn filter_not_null(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                self.flat_map_iterable(|value: Option<T>| value)
            }
        }
    };
}
