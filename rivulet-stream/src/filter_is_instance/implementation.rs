// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_filter_is_instance_impl {
    ($($bounds:tt)*) => {
        use crate::filter_items::FilterItemsExt;
        use crate::flat_map_iterable::FlatMapIterableExt;
        use core::any::Any;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Dynamically typed element accepted by
        /// [`filter_is_instance_of`](FilterIsInstanceOfExt::filter_is_instance_of).
        pub type AnyItem = Box<dyn Any + $($bounds)* 'static>;

        /// Extension trait providing the `filter_is_instance` operator.
        ///
        /// See the [module-level documentation](crate::filter_is_instance) for details.
        pub trait FilterIsInstanceExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `r` for every value where `narrow(value)` is `Some(r)`.
            ///
            /// Values that don't narrow are skipped; they never cause an error.
            fn filter_is_instance<R, F>(self, narrow: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T) -> Option<R> + $($bounds)* 'static;
        }

        impl<S, T> FilterIsInstanceExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn filter_is_instance<R, F>(self, narrow: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T) -> Option<R> + $($bounds)* 'static,
            {
                self.flat_map_iterable(narrow)
            }
        }

        /// Extension trait providing runtime-type filtering over [`AnyItem`] streams.
        pub trait FilterIsInstanceOfExt: Stream<Item = StreamItem<AnyItem>> + Sized {
            /// Keeps the elements whose concrete type is `R`, downcast to `R`.
            fn filter_is_instance_of<R>(self) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                R: Any + $($bounds)* 'static;
        }

        impl<S> FilterIsInstanceOfExt for S
        where
            S: Stream<Item = StreamItem<AnyItem>>,
        {
            fn filter_is_instance_of<R>(self) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                R: Any + $($bounds)* 'static,
            {
                self.filter_items(|item: &AnyItem| item.is::<R>())
                    .flat_map_iterable(|item: AnyItem| item.downcast::<R>().ok().map(|boxed| *boxed))
            }
        }
    };
}
