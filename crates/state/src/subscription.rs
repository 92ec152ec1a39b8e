//! Snapshot subscriptions.
//!
//! Every subscriber receives each snapshot the store publishes, in publish
//! order. Subscribers that drop their handle are pruned on the next publish.

use std::sync::mpsc::{Receiver, RecvError, TryRecvError};

/// Receiving end of a store subscription.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub(crate) fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the store publishes again.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain the queue and keep only the newest snapshot. `None` when nothing
    /// was published since the last read.
    pub fn latest(&self) -> Option<M> {
        self.receiver.try_iter().last()
    }
}
