use chrono::{DateTime, Utc};

/// A notification that something in the editing session changed.
///
/// Events are immutable facts with a stable name and a schema version, so a
/// subscriber can log or forward them without knowing the concrete type.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "preview.view_model.updated").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the change happened (wall clock).
    fn occurred_at(&self) -> DateTime<Utc>;
}
