// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_first_or_null_impl {
    ($($bounds:tt)*) => {
        use crate::first_or_default::FirstOrDefaultExt;
        use crate::map_items::MapItemsExt;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `first_or_null` operators.
        ///
        /// See the [module-level documentation](crate::first_or_null) for details.
        pub trait FirstOrNullExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits `Some(first)`, or `None` if the source is empty.
            fn first_or_null(self) -> impl Stream<Item = StreamItem<Option<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;

            /// Emits `Some(first matching value)`, or `None` if nothing matches.
            fn first_or_null_by<P>(self, predicate: P) -> impl Stream<Item = StreamItem<Option<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static;
        }

        impl<S, T> FirstOrNullExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn first_or_null(self) -> impl Stream<Item = StreamItem<Option<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                self.map_items(Some).first_or_default(None)
            }

            fn first_or_null_by<P>(self, mut predicate: P) -> impl Stream<Item = StreamItem<Option<T>>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static,
            {
                self.map_items(Some)
                    .first_or_default_by(None, move |candidate: &Option<T>| {
                        candidate.as_ref().is_some_and(&mut predicate)
                    })
            }
        }
    };
}
