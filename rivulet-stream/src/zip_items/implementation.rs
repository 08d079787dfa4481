// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::{RivuletError, StreamItem};

/// Pairs the n-th value of `left` with the n-th value of `right`.
///
/// One value per side is buffered while waiting for the other side. The
/// stream ends when either side ends or errors; both sides are owned here and
/// are dropped together.
#[pin_project]
pub(crate) struct ZipItems<A, B, L, R, F> {
    #[pin]
    left: A,
    #[pin]
    right: B,
    left_slot: Option<L>,
    right_slot: Option<R>,
    combiner: F,
    done: bool,
}

impl<A, B, L, R, F> ZipItems<A, B, L, R, F> {
    pub(crate) const fn new(left: A, right: B, combiner: F) -> Self {
        Self {
            left,
            right,
            left_slot: None,
            right_slot: None,
            combiner,
            done: false,
        }
    }
}

/// Outcome of polling one side of the zip.
enum Side<V> {
    Filled(V),
    Empty,
    Terminal(Option<RivuletError>),
}

fn poll_side<S, V>(stream: Pin<&mut S>, cx: &mut Context<'_>) -> Side<V>
where
    S: Stream<Item = StreamItem<V>>,
{
    match stream.poll_next(cx) {
        Poll::Ready(Some(StreamItem::Value(value))) => Side::Filled(value),
        Poll::Ready(Some(StreamItem::Error(e))) => Side::Terminal(Some(e)),
        Poll::Ready(None) => Side::Terminal(None),
        Poll::Pending => Side::Empty,
    }
}

impl<A, B, L, R, F, O> Stream for ZipItems<A, B, L, R, F>
where
    A: Stream<Item = StreamItem<L>>,
    B: Stream<Item = StreamItem<R>>,
    F: FnMut(L, R) -> O,
{
    type Item = StreamItem<O>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        if this.left_slot.is_none() {
            match poll_side(this.left, cx) {
                Side::Filled(value) => *this.left_slot = Some(value),
                Side::Empty => {}
                Side::Terminal(error) => {
                    *this.done = true;
                    *this.right_slot = None;
                    return Poll::Ready(error.map(StreamItem::Error));
                }
            }
        }

        if this.right_slot.is_none() {
            match poll_side(this.right, cx) {
                Side::Filled(value) => *this.right_slot = Some(value),
                Side::Empty => {}
                Side::Terminal(error) => {
                    *this.done = true;
                    *this.left_slot = None;
                    return Poll::Ready(error.map(StreamItem::Error));
                }
            }
        }

        match (this.left_slot.take(), this.right_slot.take()) {
            (Some(left), Some(right)) => {
                Poll::Ready(Some(StreamItem::Value((this.combiner)(left, right))))
            }
            (left, right) => {
                // At least one side returned Pending and registered the waker
                *this.left_slot = left;
                *this.right_slot = right;
                Poll::Pending
            }
        }
    }
}

impl<A, B, L, R, F, O> FusedStream for ZipItems<A, B, L, R, F>
where
    A: Stream<Item = StreamItem<L>>,
    B: Stream<Item = StreamItem<R>>,
    F: FnMut(L, R) -> O,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

macro_rules! define_zip_items_impl {
    ($($bounds:tt)*) => {
        use futures::Stream;
        use rivulet_core::StreamItem;
        use self::implementation::ZipItems;

        /// Extension trait providing the `zip_items` primitive.
        ///
        /// See the [module-level documentation](crate::zip_items) for details.
        pub trait ZipItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
            /// Combines values of `self` and `other` pairwise, by position.
            fn zip_items<S2, U, R, F>(self, other: S2, combiner: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                S2: Stream<Item = StreamItem<U>> + $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T, U) -> R + $($bounds)* 'static;
        }

        impl<S, T> ZipItemsExt<T> for S
        where
            S: Stream<Item = StreamItem<T>>,
        {
            fn zip_items<S2, U, R, F>(self, other: S2, combiner: F) -> impl Stream<Item = StreamItem<R>> + $($bounds)* 'static
            where
                Self: $($bounds)* 'static,
                S2: Stream<Item = StreamItem<U>> + $($bounds)* 'static,
                T: $($bounds)* 'static,
                U: $($bounds)* 'static,
                R: $($bounds)* 'static,
                F: FnMut(T, U) -> R + $($bounds)* 'static,
            {
                ZipItems::new(self, other, combiner)
            }
        }
    };
}
