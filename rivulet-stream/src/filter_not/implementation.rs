// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_filter_not_impl {
    ($($bounds:tt)*) => {
        use crate::filter_items::FilterItemsExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `filter_not` operator.
        ///
        /// See the [module-level documentation](crate::filter_not) for details.
        pub trait FilterNotExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits only the values for which `predicate` returns `false`.
            fn filter_not<F>(self, predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> bool + $($bounds)* 'static;
        }

        impl<S, T> FilterNotExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn filter_not<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(&T) -> bool + $($bounds)* 'static,
            {
                self.filter_items(move |value| !predicate(value))
            }
        }
    };
}
