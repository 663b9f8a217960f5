/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Creates a connected pair: the display layer keeps the notifier and fires it when the
/// animation ends, the sequencer awaits the [`TransitionDone`].
pub fn transition() -> (TransitionNotifier, TransitionDone) {
    let (tx, rx) = oneshot::channel();
    (TransitionNotifier(tx), TransitionDone(Some(rx)))
}

/// Display side of a transition. Fires at most once.
#[derive(Debug)]
pub struct TransitionNotifier(oneshot::Sender<()>);

impl TransitionNotifier {
    pub fn complete(self) {
        // Nobody waiting any more is fine
        let _ = self.0.send(());
    }
}

/// Resolves once the transition has finished.
///
/// Also resolves if the notifier is dropped without firing (element torn down, listener
/// detached), so a swap can never stall on a lost event.
#[derive(Debug)]
pub struct TransitionDone(Option<oneshot::Receiver<()>>);

impl TransitionDone {
    /// A transition that is already over, for surfaces that do not animate
    pub fn immediate() -> Self {
        Self(None)
    }
}

impl Future for TransitionDone {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        let Some(rx) = this.0.as_mut() else {
            return Poll::Ready(());
        };
        match Pin::new(rx).poll(cx) {
            Poll::Ready(_) => {
                this.0 = None;
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
