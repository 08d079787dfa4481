// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_map_indexed_impl {
    ($($bounds:tt)*) => {
        use crate::filter_not_null::FilterNotNullExt;
        use crate::map_items::MapItemsExt;
        use crate::with_index::WithIndexExt;
        use futures::Stream;
        use rivulet_core::{IndexedValue, StreamItem};

        /// Extension trait providing the `map_indexed` operators.
        ///
        /// See the [module-level documentation](crate::map_indexed) for details.
        pub trait MapIndexedExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `f(index, value)` for every value.
            fn map_indexed<R, F>(self, f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, T) -> R + $($bounds)* 'static;

            /// Emits `r` for every value where `f(index, value)` is `Some(r)`.
            ///
            /// Indices are source positions, so values mapped to `None` still
            /// consume an index.
            fn map_indexed_not_null<R, F>(self, f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, T) -> Option<R> + $($bounds)* 'static;
        }

        impl<S, T> MapIndexedExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn map_indexed<R, F>(self, mut f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, T) -> R + $($bounds)* 'static,
            {
                self.with_index()
                    .map_items(move |IndexedValue { index, value }| f(index, value))
            }

            fn map_indexed_not_null<R, F>(self, f: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, T) -> Option<R> + $($bounds)* 'static,
            {
                self.map_indexed(f).filter_not_null()
            }
        }
    };
}
