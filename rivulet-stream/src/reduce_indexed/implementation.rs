// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_reduce_indexed_impl {
    ($($bounds:tt)*) => {
        use crate::map_items::MapItemsExt;
        use crate::reduce_items::ReduceItemsExt;
        use crate::with_index::WithIndexExt;
        use futures::Stream;
        use rivulet_core::{IndexedValue, StreamItem};

        /// Extension trait providing the `reduce_indexed` operators.
        ///
        /// See the [module-level documentation](crate::reduce_indexed) for details.
        pub trait ReduceIndexedExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Reduces with `operation(index, acc, value)`, seeded with the first value.
            ///
            /// `operation` is first called with index 1. An empty source emits nothing.
            fn reduce_indexed<F>(self, operation: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(usize, T, T) -> T + $($bounds)* 'static;

            /// Reduces with `operation(index, acc, value)`, seeded with `initial`.
            ///
            /// `operation` is first called with index 0. An empty source emits `initial`.
            fn reduce_indexed_with<R, F>(self, initial: R, operation: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, R, T) -> R + $($bounds)* 'static;
        }

        impl<S, T> ReduceIndexedExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn reduce_indexed<F>(self, mut operation: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(usize, T, T) -> T + $($bounds)* 'static,
            {
                self.with_index()
                    .reduce_items(move |acc: IndexedValue<T>, next: IndexedValue<T>| {
                        IndexedValue::new(next.index, operation(next.index, acc.value, next.value))
                    })
                    .map_items(|reduced| reduced.value)
            }

            fn reduce_indexed_with<R, F>(self, initial: R, mut operation: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(usize, R, T) -> R + $($bounds)* 'static,
            {
                self.with_index()
                    .fold_items(initial, move |acc, IndexedValue { index, value }| {
                        operation(index, acc, value)
                    })
            }
        }
    };
}
