use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::dependency::application::ports::DependencyRepository;
use crate::modules::learning::application::ports::{ItemRepository, ModuleRepository};
use crate::modules::learning::domain::events::ItemDeletedEvent;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::DeleteItemCommand, result::DeleteItemResult};

/// Use case handler for deleting a learning item.
///
/// Dependency edges referencing the item are detached first, then the owned
/// modules, then the item itself, so no edge can ever point at a missing
/// node.
pub struct DeleteItemHandler {
    item_repository: Arc<dyn ItemRepository>,
    module_repository: Arc<dyn ModuleRepository>,
    dependency_repository: Arc<dyn DependencyRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteItemHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        module_repository: Arc<dyn ModuleRepository>,
        dependency_repository: Arc<dyn DependencyRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            item_repository,
            module_repository,
            dependency_repository,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteItemCommand, DeleteItemResult> for DeleteItemHandler {
    async fn execute(&self, command: DeleteItemCommand) -> DomainResult<DeleteItemResult> {
        let Some(item_ref) = self.item_repository.find_ref(command.item_id).await? else {
            return Err(DomainError::NotFound(format!(
                "Learning item {} not found",
                command.item_id
            )));
        };
        if item_ref.owner_id != command.owner_id {
            return Err(DomainError::OwnershipMismatch(format!(
                "Learning item {} does not belong to {}",
                command.item_id, command.owner_id
            )));
        }

        let removed_edges = self
            .dependency_repository
            .delete_by_item(command.item_id)
            .await?;
        self.module_repository
            .delete_by_item(command.item_id)
            .await?;
        self.item_repository.delete(command.item_id).await?;

        let event = ItemDeletedEvent::new(command.item_id, command.owner_id);
        self.event_publisher.publish(Box::new(event)).await?;

        log::info!(
            "Deleted learning item {} ({} dependency edges detached)",
            command.item_id,
            removed_edges
        );

        Ok(DeleteItemResult::new(command.item_id, removed_edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dependency::application::ports::dependency_repository::MockDependencyRepository;
    use crate::modules::learning::application::ports::item_repository::{
        ItemRef, MockItemRepository,
    };
    use crate::modules::learning::application::ports::module_repository::MockModuleRepository;
    use crate::shared::infrastructure::LoggingEventPublisher;
    use uuid::Uuid;

    #[tokio::test]
    async fn detaches_edges_and_modules_before_the_item() {
        let item_id = Uuid::new_v4();

        let mut repo = MockItemRepository::new();
        repo.expect_find_ref().returning(move |id| {
            Ok(Some(ItemRef {
                id,
                owner_id: "user-1".to_string(),
            }))
        });
        repo.expect_delete().times(1).returning(|_| Ok(()));

        let mut module_repo = MockModuleRepository::new();
        module_repo
            .expect_delete_by_item()
            .times(1)
            .returning(|_| Ok(()));

        let mut dependency_repo = MockDependencyRepository::new();
        dependency_repo
            .expect_delete_by_item()
            .times(1)
            .returning(|_| Ok(2));

        let handler = DeleteItemHandler::new(
            Arc::new(repo),
            Arc::new(module_repo),
            Arc::new(dependency_repo),
            Arc::new(LoggingEventPublisher::new()),
        );

        let result = handler
            .execute(DeleteItemCommand::new(item_id, "user-1".to_string()))
            .await
            .unwrap();
        assert_eq!(result.removed_edges, 2);
    }

    #[tokio::test]
    async fn foreign_owner_deletes_nothing() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_ref().returning(move |id| {
            Ok(Some(ItemRef {
                id,
                owner_id: "user-1".to_string(),
            }))
        });
        repo.expect_delete().never();

        let mut dependency_repo = MockDependencyRepository::new();
        dependency_repo.expect_delete_by_item().never();

        let handler = DeleteItemHandler::new(
            Arc::new(repo),
            Arc::new(MockModuleRepository::new()),
            Arc::new(dependency_repo),
            Arc::new(LoggingEventPublisher::new()),
        );

        let err = handler
            .execute(DeleteItemCommand::new(
                Uuid::new_v4(),
                "intruder".to_string(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::OwnershipMismatch(_)));
    }
}
