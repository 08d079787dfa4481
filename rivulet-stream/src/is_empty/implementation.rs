// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Emits `false` on the first value, `true` if the source completes first.
///
/// The source is never polled after the answer is known.
#[pin_project]
pub(crate) struct IsEmpty<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S> IsEmpty<S> {
    pub(crate) const fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

impl<S, T> Stream for IsEmpty<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<bool>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        let answer = match ready!(this.stream.poll_next(cx)) {
            Some(StreamItem::Value(_)) => StreamItem::Value(false),
            Some(StreamItem::Error(e)) => StreamItem::Error(e),
            None => StreamItem::Value(true),
        };
        *this.done = true;
        Poll::Ready(Some(answer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(1))
        }
    }
}

impl<S, T> FusedStream for IsEmpty<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

macro_rules! define_is_empty_impl {
    ($($bounds:tt)*) => {
        use futures::Stream;
        use rivulet_core::StreamItem;
        use self::implementation::IsEmpty;

        /// Extension trait providing the `is_empty` primitive.
        ///
        /// See the [module-level documentation](crate::is_empty) for details.
        pub trait IsEmptyExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits a single `bool`: whether the source completed without a value.
            #[allow(clippy::wrong_self_convention)]
            fn is_empty(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;
        }

        impl<S, T> IsEmptyExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            #[allow(clippy::wrong_self_convention)]
            fn is_empty(self) -> impl Stream<Item = StreamItem<bool>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                IsEmpty::new(self)
            }
        }
    };
}
