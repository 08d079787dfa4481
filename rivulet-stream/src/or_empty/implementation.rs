// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_or_empty_impl {
    ($($bounds:tt)*) => {
        use crate::constructors::empty;
        use futures::future::Either;
        use futures::Stream;
        use rivulet_core::StreamItem;

        /// Extension trait providing the `or_empty` operator on optional streams.
        ///
        /// See the [module-level documentation](crate::or_empty) for details.
        pub trait OrEmptyExt<T> {
            /// Returns the contained stream, or the empty stream for `None`.
            fn or_empty(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static;
        }

        impl<S, T> OrEmptyExt<T> for Option<S>
        where
            S: Stream<Item = StreamItem<T>> + $($bounds)* 'static,
            T: $($bounds)* 'static,
        {
            fn or_empty(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static {
                match self {
                    Some(stream) => Either::Left(stream),
                    None => Either::Right(empty()),
                }
            }
        }
    };
}
