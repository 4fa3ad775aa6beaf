/// Base trait for domain events shared by all bounded contexts.
///
/// Events represent business-meaningful state changes that have occurred.
/// They can be used for:
/// - Publishing to message queues
/// - Triggering side effects (e.g., cache invalidation)
/// - Auditing
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait DomainEvent: std::fmt::Debug + Send + Sync {
    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Unique identifier for this event
    fn event_id(&self) -> Uuid;

    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;
}
