//! Change notifications: the event trait and a small pub/sub bus.
//!
//! The preview publishes a notification after every recompute; renderers and
//! other observers subscribe to it. The bus carries copies of state, it never
//! owns any.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
