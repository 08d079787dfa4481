// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_map_items_impl {
    ($($bounds:tt)*) => {
        use crate::until_error::UntilError;
        use futures::{Stream, StreamExt};
        use rivulet_core::{Result, StreamItem};

        /// Extension trait providing the `map_items` primitive.
        ///
        /// See the [module-level documentation](crate::map_items) for details.
        pub trait MapItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `f(value)` for every value, in order.
            fn map_items<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                F: FnMut(T) -> U + $($bounds)* 'static;

            /// Like [`map_items`](MapItemsExt::map_items), with a transform that can fail.
            ///
            /// An `Err` from the transform is emitted as the stream's error and ends it.
            fn try_map_items<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                F: FnMut(T) -> Result<U> + $($bounds)* 'static;
        }

        impl<S, T> MapItemsExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn map_items<U, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                F: FnMut(T) -> U + $($bounds)* 'static,
            {
                UntilError::new(self.map(move |item| item.map(&mut f)))
            }

            fn try_map_items<U, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                F: FnMut(T) -> Result<U> + $($bounds)* 'static,
            {
                UntilError::new(self.map(move |item| item.and_then(|value| f(value).into())))
            }
        }
    };
}
