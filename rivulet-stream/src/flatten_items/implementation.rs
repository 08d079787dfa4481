// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_flatten_items_impl {
    ($($bounds:tt)*) => {
        use crate::flat_map_iterable::FlatMapIterableExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `flatten_items` operator.
        ///
        /// See the [module-level documentation](crate::flatten_items) for details.
        pub trait FlattenItemsExt<I>: Stream<Item = StreamItem<I>> + Sized
        where
            I: IntoIterator,
        {
            /// Emits every element of every inner collection, in order.
            fn flatten_items(self) -> impl Stream<Item = StreamItem<I::Item>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                I: $($bounds)* 'static,
                I::Item: $($bounds)* 'static,
                I::IntoIter: $($bounds)* 'static;
        }

        impl<S, I> FlattenItemsExt<I> for S
        where
            S: Stream<Item = StreamItem<I>>,
            I: IntoIterator,
        {
            fn flatten_items(self) -> impl Stream<Item = StreamItem<I::Item>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                I: $($bounds)* 'static,
                I::Item: $($bounds)* 'static,
                I::IntoIter: $($bounds)* 'static,
            {
                self.flat_map_iterable(|inner: I| inner)
            }
        }
    };
}
