// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_with_index_impl {
    ($($bounds:tt)*) => {
        use crate::constructors::counter;
        use crate::zip_items::ZipItemsExt;
        use futures::Stream;
        use rivulet_core::{IndexedValue, StreamItem};

        /// Extension trait providing the `with_index` operator.
        ///
        /// See the [module-level documentation](crate::with_index) for details.
        pub trait WithIndexExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Pairs every value with its zero-based position.
            fn with_index(self) -> impl Stream<Item = StreamItem<IndexedValue<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;
        }

        impl<S, T> WithIndexExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn with_index(self) -> impl Stream<Item = StreamItem<IndexedValue<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                counter().zip_items(self, IndexedValue::new)
            }
        }
    };
}
