use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::learning::application::ports::{ItemRepository, ModuleRepository};
use crate::modules::learning::domain::LearningItem;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UpdateItemCommand, result::UpdateItemResult};

/// Use case handler for updating a learning item's fields and status
pub struct UpdateItemHandler {
    item_repository: Arc<dyn ItemRepository>,
    module_repository: Arc<dyn ModuleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateItemHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        module_repository: Arc<dyn ModuleRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            item_repository,
            module_repository,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<UpdateItemCommand, UpdateItemResult> for UpdateItemHandler {
    async fn execute(&self, command: UpdateItemCommand) -> DomainResult<UpdateItemResult> {
        let Some(record) = self.item_repository.find_by_id(command.item_id).await? else {
            return Err(DomainError::NotFound(format!(
                "Learning item {} not found",
                command.item_id
            )));
        };
        if record.owner_id != command.owner_id {
            return Err(DomainError::OwnershipMismatch(format!(
                "Learning item {} does not belong to {}",
                command.item_id, command.owner_id
            )));
        }

        let modules = self.module_repository.find_by_item(command.item_id).await?;
        let mut item = LearningItem::from_record(record, modules);

        if let Some(title) = command.title {
            item.update_title(title)?;
        }
        if let Some(description) = command.description {
            item.update_description(description);
        }
        if let Some(due_date) = command.due_date {
            item.update_due_date(due_date)?;
        }
        if let Some(category_id) = command.category_id {
            item.update_category(category_id);
        }
        if let Some(status) = command.status {
            item.update_status(status)?;
        }

        self.item_repository.update(&item.to_record()).await?;

        self.event_publisher.publish_all(item.take_events()).await?;

        log::debug!(
            "Updated learning item {} (status {}, progress {}%)",
            item.id(),
            item.status(),
            item.progress()
        );

        Ok(UpdateItemResult::new(
            item.id(),
            item.status(),
            item.progress(),
        ))
    }
}
