// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

macro_rules! define_require_no_nulls_impl {
    ($($bounds:tt)*) => {
        use crate::map_items::MapItemsExt;
        use futures::Stream;
        use rivulet_core::{RivuletError, StreamItem};

        /// Extension trait providing the `require_no_nulls` operators.
        ///
        /// See the [module-level documentation](crate::require_no_nulls) for details.
        pub trait RequireNoNullsExt<T>: Stream<Item = StreamItem<Option<T>>> + Sized {
            /// Unwraps every `Some`; the first `None` fails the stream.
            ///
            /// The error names the source stream by its type.
            fn require_no_nulls(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;

            /// Like [`require_no_nulls`](RequireNoNullsExt::require_no_nulls), with
            /// `name` identifying the stream in the error.
            fn require_no_nulls_named(self, name: impl Into<String>) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;
        }

        impl<S, T> RequireNoNullsExt<T> for S
        where
            S: Stream<Item = StreamItem<Option<T>>>,
        {
            fn require_no_nulls(self) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                self.require_no_nulls_named(core::any::type_name::<Self>())
            }

            fn require_no_nulls_named(self, name: impl Into<String>) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                let name: String = name.into();
                self.try_map_items(move |value: Option<T>| {
                    value.ok_or_else(|| {
                        warn!("require_no_nulls: null element found in {}", name);
                        RivuletError::null_element(name.clone())
                    })
                })
            }
        }
    };
}
