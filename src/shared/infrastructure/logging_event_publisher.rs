use async_trait::async_trait;

use crate::shared::application::EventPublisher;
use crate::shared::domain::events::DomainEvent;
use crate::shared::errors::DomainResult;

/// Event publisher that writes events to the application log.
///
/// Suitable default for embedders that have no message bus wired up; also
/// used by the integration tests.
#[derive(Debug, Default)]
pub struct LoggingEventPublisher;

impl LoggingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> DomainResult<()> {
        log::info!(
            "domain event {} ({}) at {}",
            event.event_type(),
            event.event_id(),
            event.occurred_at()
        );
        Ok(())
    }

    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> DomainResult<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
