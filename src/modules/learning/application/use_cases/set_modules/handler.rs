use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::learning::application::ports::{ItemRepository, ModuleRepository};
use crate::modules::learning::domain::LearningItem;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::SetModulesCommand, result::SetModulesResult};

/// Use case handler for replacing a learning item's module set.
///
/// Progress recomputation happens inside the aggregate; this handler only
/// orchestrates hydration and persistence.
pub struct SetModulesHandler {
    item_repository: Arc<dyn ItemRepository>,
    module_repository: Arc<dyn ModuleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SetModulesHandler {
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
impl UseCase<SetModulesCommand, SetModulesResult> for SetModulesHandler {
    async fn execute(&self, command: SetModulesCommand) -> DomainResult<SetModulesResult> {
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

        let existing = self.module_repository.find_by_item(command.item_id).await?;
        let mut item = LearningItem::from_record(record, existing);

        item.set_modules(command.modules)?;

        self.item_repository.update(&item.to_record()).await?;
        self.module_repository
            .replace_for_item(item.id(), item.modules())
            .await?;

        self.event_publisher.publish_all(item.take_events()).await?;

        log::debug!(
            "Replaced modules of item {}: {} modules, progress {}%",
            item.id(),
            item.modules().len(),
            item.progress()
        );

        Ok(SetModulesResult::new(
            item.id(),
            item.modules().len(),
            item.progress(),
        ))
    }
}
