use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::learning::application::ports::ItemRepository;
use crate::modules::learning::domain::LearningItem;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::DomainResult;

use super::{command::CreateItemCommand, result::CreateItemResult};

/// Use case handler for creating a new learning item
pub struct CreateItemHandler {
    item_repository: Arc<dyn ItemRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateItemHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            item_repository,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<CreateItemCommand, CreateItemResult> for CreateItemHandler {
    async fn execute(&self, command: CreateItemCommand) -> DomainResult<CreateItemResult> {
        // Aggregate factory enforces title/owner/due-date invariants
        let mut item = LearningItem::create(
            command.owner_id,
            command.title,
            command.description,
            command.due_date,
            command.category_id,
        )?;

        self.item_repository.save(&item.to_record()).await?;

        self.event_publisher.publish_all(item.take_events()).await?;

        log::info!("Created learning item {} ({})", item.id(), item.title());

        Ok(CreateItemResult::new(
            item.id(),
            item.title().to_string(),
            item.status(),
        ))
    }
}
