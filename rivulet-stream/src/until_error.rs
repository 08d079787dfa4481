// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Ends a stream right after its first error item.
///
/// Every primitive operator wraps its output in `UntilError` so that an error
/// is always the last item a subscriber sees. The source is not polled again
/// once the error (or completion) has been observed.
#[pin_project]
pub(crate) struct UntilError<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S> UntilError<S> {
    pub(crate) const fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

impl<S, T> Stream for UntilError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        match ready!(this.stream.poll_next(cx)) {
            Some(StreamItem::Error(e)) => {
                *this.done = true;
                Poll::Ready(Some(StreamItem::Error(e)))
            }
            Some(value) => Poll::Ready(Some(value)),
            None => {
                *this.done = true;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // An error may cut the stream short
            (0, self.stream.size_hint().1)
        }
    }
}

impl<S, T> FusedStream for UntilError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
