// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_filter_indexed_impl {
    ($($bounds:tt)*) => {
        use crate::filter_items::FilterItemsExt;
        use crate::map_items::MapItemsExt;
        use crate::with_index::WithIndexExt;
        use futures::Stream;
        use rivulet_core::{IndexedValue, StreamItem};

        /// Extension trait providing the `filter_indexed` operator.
        ///
        /// See the [module-level documentation](crate::filter_indexed) for details.
        pub trait FilterIndexedExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits the values for which `predicate(index, &value)` returns `true`.
            ///
            /// `index` is the position in the source, not in the output.
            fn filter_indexed<F>(self, predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(usize, &T) -> bool + $($bounds)* 'static;
        }

        impl<S, T> FilterIndexedExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn filter_indexed<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(usize, &T) -> bool + $($bounds)* 'static,
            {
                self.with_index()
                    .filter_items(move |indexed: &IndexedValue<T>| predicate(indexed.index, &indexed.value))
                    .map_items(|indexed| indexed.value)
            }
        }
    };
}
