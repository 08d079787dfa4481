// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_none_impl {
    ($($bounds:tt)*) => {
        use crate::filter_items::FilterItemsExt;
        use crate::is_empty::IsEmptyExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `none` operators.
        ///
        /// See the [module-level documentation](crate::none) for details.
        pub trait NoneExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `true` if the source completes without a value.
            fn none(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;

            /// Emits `true` if no value satisfies `predicate`.
            ///
            /// Emits `false` as soon as a matching value arrives.
            fn none_by<P>(self, predicate: P) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static;
        }

        impl<S, T> NoneExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn none(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                self.is_empty()
            }

            fn none_by<P>(self, predicate: P) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static,
            {
                self.filter_items(predicate).is_empty()
            }
        }
    };
}
