// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_map_not_null_impl {
    ($($bounds:tt)*) => {
        use crate::filter_not_null::FilterNotNullExt;
        use crate::map_items::MapItemsExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `map_not_null` operator.
        ///
        /// See the [module-level documentation](crate::map_not_null) for details.
        pub trait MapNotNullExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `r` for every value where `f(value)` is `Some(r)`.
            fn map_not_null<R, F>(self, f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T) -> Option<R> + $($bounds)* 'static;
        }

        impl<S, T> MapNotNullExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn map_not_null<R, F>(self, f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T) -> Option<R> + $($bounds)* 'static,
            {
                self.map_items(f).filter_not_null()
            }
        }
    };
}
