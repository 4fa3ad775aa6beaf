use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::dependency::application::ports::DependencyRepository;
use crate::modules::dependency::domain::events::DependencyUnlinkedEvent;
use crate::modules::learning::application::ports::ItemRepository;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UnlinkDependencyCommand, result::UnlinkDependencyResult};

/// Use case handler for removing a single prerequisite edge
pub struct UnlinkDependencyHandler {
    item_repository: Arc<dyn ItemRepository>,
    dependency_repository: Arc<dyn DependencyRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UnlinkDependencyHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        dependency_repository: Arc<dyn DependencyRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            item_repository,
            dependency_repository,
            event_publisher,
        }
    }

    async fn check_endpoint(&self, id: uuid::Uuid, owner_id: &str) -> DomainResult<()> {
        let Some(item_ref) = self.item_repository.find_ref(id).await? else {
            return Err(DomainError::NotFound(format!(
                "Learning item {} not found",
                id
            )));
        };
        if item_ref.owner_id != owner_id {
            return Err(DomainError::OwnershipMismatch(format!(
                "Learning item {} does not belong to {}",
                id, owner_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UseCase<UnlinkDependencyCommand, UnlinkDependencyResult> for UnlinkDependencyHandler {
    async fn execute(
        &self,
        command: UnlinkDependencyCommand,
    ) -> DomainResult<UnlinkDependencyResult> {
        self.check_endpoint(command.source_id, &command.owner_id)
            .await?;
        self.check_endpoint(command.target_id, &command.owner_id)
            .await?;

        let removed = self
            .dependency_repository
            .delete(command.source_id, command.target_id)
            .await?;
        if !removed {
            return Err(DomainError::NotFound(format!(
                "Dependency {} -> {} not found",
                command.source_id, command.target_id
            )));
        }

        let event = DependencyUnlinkedEvent::new(command.source_id, command.target_id);
        self.event_publisher.publish(Box::new(event)).await?;

        log::info!(
            "Removed dependency {} -> {}",
            command.source_id,
            command.target_id
        );

        Ok(UnlinkDependencyResult::new(
            command.source_id,
            command.target_id,
        ))
    }
}
