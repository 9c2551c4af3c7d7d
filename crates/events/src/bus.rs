//! Publish/subscribe abstraction (mechanics only).
//!
//! Each subscriber gets its own copy of every message published after it
//! subscribed, in publication order. Nothing is buffered for subscribers that
//! join later: the latest state is always readable from its owner, the bus only
//! says that it changed.

use std::sync::mpsc::Receiver;

/// A subscription to a message stream.
///
/// ```ignore
/// let updates = synchronizer.subscribe();
/// synchronizer.set_field(ProductField::Price, 12.5);
///
/// for update in updates.drain() {
///     redraw(&update.view);
/// }
/// ```
///
/// A subscription is meant to be consumed from a single thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Take every message already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Transport-agnostic pub/sub bus.
///
/// `publish` may fail (e.g. a poisoned lock); callers decide whether that is
/// worth surfacing. For preview updates it never is, because the published
/// state can always be read again from its owner.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
