// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_is_not_empty_impl {
    ($($bounds:tt)*) => {
        use crate::is_empty::IsEmptyExt;
        use crate::map_items::MapItemsExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `is_not_empty` operator.
        ///
        /// See the [module-level documentation](crate::is_not_empty) for details.
        pub trait IsNotEmptyExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits a single `bool`: whether the source emitted at least one value.
            #[allow(clippy::wrong_self_convention)]
            fn is_not_empty(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;
        }

        impl<S, T> IsNotEmptyExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            #[allow(clippy::wrong_self_convention)]
            fn is_not_empty(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                self.is_empty().map_items(|empty| !empty)
            }
        }
    };
}
