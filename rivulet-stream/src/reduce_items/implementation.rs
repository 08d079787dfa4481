// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Folds every value into the first one and emits the result on completion.
///
/// Emits nothing when the source completes without values.
#[pin_project]
pub(crate) struct Reduce<S, T, F> {
    #[pin]
    stream: S,
    acc: Option<T>,
    operation: F,
    done: bool,
}

impl<S, T, F> Reduce<S, T, F> {
    pub(crate) const fn new(stream: S, operation: F) -> Self {
        Self {
            stream,
            acc: None,
            operation,
            done: false,
        }
    }
}

impl<S, T, F> Stream for Reduce<S, T, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(T, T) -> T,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(StreamItem::Value(value)) => {
                    let next = match this.acc.take() {
                        Some(acc) => (this.operation)(acc, value),
                        None => value,
                    };
                    *this.acc = Some(next);
                }
                Some(StreamItem::Error(e)) => {
                    *this.done = true;
                    *this.acc = None;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                None => {
                    *this.done = true;
                    return Poll::Ready(this.acc.take().map(StreamItem::Value));
                }
            }
        }
    }
}

impl<S, T, F> FusedStream for Reduce<S, T, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(T, T) -> T,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Folds every value into a seeded accumulator and emits it on completion.
///
/// An empty source emits the seed itself.
#[pin_project]
pub(crate) struct Fold<S, A, F> {
    #[pin]
    stream: S,
    acc: Option<A>,
    operation: F,
}

impl<S, A, F> Fold<S, A, F> {
    pub(crate) const fn new(stream: S, initial: A, operation: F) -> Self {
        Self {
            stream,
            acc: Some(initial),
            operation,
        }
    }
}

impl<S, T, A, F> Stream for Fold<S, A, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(A, T) -> A,
{
    type Item = StreamItem<A>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        // The accumulator is taken exactly once, on completion or error
        while let Some(acc) = this.acc.take() {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    *this.acc = Some((this.operation)(acc, value));
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => return Poll::Ready(Some(StreamItem::Value(acc))),
                Poll::Pending => {
                    *this.acc = Some(acc);
                    return Poll::Pending;
                }
            }
        }

        Poll::Ready(None)
    }
}

impl<S, T, A, F> FusedStream for Fold<S, A, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(A, T) -> A,
{
    fn is_terminated(&self) -> bool {
        self.acc.is_none()
    }
}

macro_rules! define_reduce_items_impl {
    ($($bounds:tt)*) => {
        use futures::Stream;
        use rivulet_core::StreamItem;
        use self::implementation::{Fold, Reduce};

        /// Extension trait providing the `reduce_items` and `fold_items` primitives.
        ///
        /// See the [module-level documentation](crate::reduce_items) for details.
        pub trait ReduceItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Combines all values left to right, seeded with the first value.
            ///
            /// Emits the single accumulated value when the source completes,
            /// or nothing if the source was empty.
            fn reduce_items<F>(self, operation: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(T, T) -> T + $($bounds)* 'static;

            /// Combines all values left to right into `initial`.
            ///
            /// Always emits exactly one value on completion, `initial` itself
            /// for an empty source.
            fn fold_items<A, F>(self, initial: A, operation: F) -> impl Stream<Item = StreamItem<A>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                A: $($bounds)* 'static,
                F: FnMut(A, T) -> A + $($bounds)* 'static;
        }

        impl<S, T> ReduceItemsExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn reduce_items<F>(self, operation: F) -> impl Stream<Item = StreamItem<T>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                F: FnMut(T, T) -> T + $($bounds)* 'static,
            {
                Reduce::new(self, operation)
            }

            fn fold_items<A, F>(self, initial: A, operation: F) -> impl Stream<Item = StreamItem<A>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                T: $($bounds)* 'static,
                A: $($bounds)* 'static,
                F: FnMut(A, T) -> A + $($bounds)* 'static,
            {
                Fold::new(self, initial, operation)
            }
        }
    };
}
