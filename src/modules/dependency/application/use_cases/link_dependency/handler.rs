use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::dependency::domain::events::DependencyLinkedEvent;
use crate::modules::dependency::domain::DependencyGraph;
use crate::modules::learning::application::ports::ItemRepository;
use crate::shared::application::{EventPublisher, UseCase};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::LinkDependencyCommand, result::LinkDependencyResult};

/// Use case handler for linking a prerequisite between two learning items.
///
/// Existence and ownership of both endpoints are checked here; the graph
/// engine only guards the edge-set invariants.
pub struct LinkDependencyHandler {
    item_repository: Arc<dyn ItemRepository>,
    graph: Arc<DependencyGraph>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LinkDependencyHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        graph: Arc<DependencyGraph>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            item_repository,
            graph,
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
impl UseCase<LinkDependencyCommand, LinkDependencyResult> for LinkDependencyHandler {
    async fn execute(&self, command: LinkDependencyCommand) -> DomainResult<LinkDependencyResult> {
        self.check_endpoint(command.source_id, &command.owner_id)
            .await?;
        self.check_endpoint(command.target_id, &command.owner_id)
            .await?;

        let edge = self.graph.link(command.source_id, command.target_id).await?;

        let event = DependencyLinkedEvent::new(edge.id, edge.source_id, edge.target_id);
        self.event_publisher.publish(Box::new(event)).await?;

        log::info!(
            "Item {} now requires {} to be completed first",
            edge.source_id,
            edge.target_id
        );

        Ok(LinkDependencyResult::new(
            edge.id,
            edge.source_id,
            edge.target_id,
            edge.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dependency::application::ports::dependency_repository::MockDependencyRepository;
    use crate::modules::learning::application::ports::item_repository::{
        ItemRef, MockItemRepository,
    };
    use crate::shared::infrastructure::LoggingEventPublisher;
    use uuid::Uuid;

    fn owned_items(owner: &'static str) -> MockItemRepository {
        let mut repo = MockItemRepository::new();
        repo.expect_find_ref().returning(move |id| {
            Ok(Some(ItemRef {
                id,
                owner_id: owner.to_string(),
            }))
        });
        repo
    }

    #[tokio::test]
    async fn links_items_of_the_same_owner() {
        let mut dependency_repo = MockDependencyRepository::new();
        dependency_repo.expect_find_edge().returning(|_, _| Ok(None));
        dependency_repo
            .expect_edges_from()
            .returning(|_| Ok(Vec::new()));
        dependency_repo.expect_save().times(1).returning(|_| Ok(()));

        let handler = LinkDependencyHandler::new(
            Arc::new(owned_items("user-1")),
            Arc::new(DependencyGraph::new(Arc::new(dependency_repo))),
            Arc::new(LoggingEventPublisher::new()),
        );

        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let result = handler
            .execute(LinkDependencyCommand::new("user-1".to_string(), a, b))
            .await
            .unwrap();
        assert_eq!(result.source_id, a);
        assert_eq!(result.target_id, b);
    }

    #[tokio::test]
    async fn unknown_endpoint_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_ref().returning(|_| Ok(None));

        let mut dependency_repo = MockDependencyRepository::new();
        dependency_repo.expect_save().never();

        let handler = LinkDependencyHandler::new(
            Arc::new(repo),
            Arc::new(DependencyGraph::new(Arc::new(dependency_repo))),
            Arc::new(LoggingEventPublisher::new()),
        );

        let err = handler
            .execute(LinkDependencyCommand::new(
                "user-1".to_string(),
                Uuid::new_v4(),
                Uuid::new_v4(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn foreign_endpoint_is_an_ownership_mismatch() {
        let mut dependency_repo = MockDependencyRepository::new();
        dependency_repo.expect_save().never();

        let handler = LinkDependencyHandler::new(
            Arc::new(owned_items("someone-else")),
            Arc::new(DependencyGraph::new(Arc::new(dependency_repo))),
            Arc::new(LoggingEventPublisher::new()),
        );

        let err = handler
            .execute(LinkDependencyCommand::new(
                "user-1".to_string(),
                Uuid::new_v4(),
                Uuid::new_v4(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::OwnershipMismatch(_)));
    }
}
