// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Emits the first value matching `predicate`, or `default` on completion.
///
/// `default` is consumed by whichever outcome happens first, so its absence
/// marks the stream as finished.
#[pin_project]
pub(crate) struct FirstOrDefault<S, T, P> {
    #[pin]
    stream: S,
    default: Option<T>,
    predicate: P,
}

impl<S, T, P> FirstOrDefault<S, T, P> {
    pub(crate) const fn new(stream: S, default: T, predicate: P) -> Self {
        Self {
            stream,
            default: Some(default),
            predicate,
        }
    }
}

impl<S, T, P> Stream for FirstOrDefault<S, T, P>
where
    S: Stream<Item = StreamItem<T>>,
    P: FnMut(&T) -> bool,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        while this.default.is_some() {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if (this.predicate)(&value) {
                        *this.default = None;
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.default = None;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => {
                    return Poll::Ready(this.default.take().map(StreamItem::Value));
                }
                Poll::Pending => return Poll::Pending,
            }
        }

        Poll::Ready(None)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.default.is_some() {
            (1, Some(1))
        } else {
            (0, Some(0))
        }
    }
}

impl<S, T, P> FusedStream for FirstOrDefault<S, T, P>
where
    S: Stream<Item = StreamItem<T>>,
    P: FnMut(&T) -> bool,
{
    fn is_terminated(&self) -> bool {
        self.default.is_none()
    }
}

macro_rules! define_first_or_default_impl {
    ($($bounds:tt)*) => {
        use futures::Stream;
        use rivulet_core::StreamItem;
        use self::implementation::FirstOrDefault;

        /// Extension trait providing the `first_or_default` primitives.
        ///
        /// See the [module-level documentation](crate::first_or_default) for details.
        pub trait FirstOrDefaultExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Emits the first value, or `default` if the source is empty.
            fn first_or_default(self, default: T) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static;

            /// Emits the first value satisfying `predicate`, or `default` if none does.
            fn first_or_default_by<P>(self, default: T, predicate: P) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static;
        }

        impl<S, T> FirstOrDefaultExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn first_or_default(self, default: T) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
            {
                FirstOrDefault::new(self, default, |_: &T| true)
            }

            fn first_or_default_by<P>(self, default: T, predicate: P) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                P: FnMut(&T) -> bool + $($bounds)* 'static,
            {
                FirstOrDefault::new(self, default, predicate)
            }
        }
    };
}
