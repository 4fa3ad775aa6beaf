use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::modules::learning::domain::ItemRecord;
use crate::shared::errors::DomainResult;

/// Lightweight item reference for existence/ownership checks without
/// hydrating the full aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub id: Uuid,
    pub owner_id: String,
}

/// Port (interface) for learning item persistence following Hexagonal
/// Architecture. This is an application layer interface - infrastructure
/// provides the implementation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item record
    async fn save(&self, record: &ItemRecord) -> DomainResult<()>;

    /// Update an existing item record
    async fn update(&self, record: &ItemRecord) -> DomainResult<()>;

    /// Find item by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ItemRecord>>;

    /// Resolve id + owner only (existence/ownership checks)
    async fn find_ref(&self, id: Uuid) -> DomainResult<Option<ItemRef>>;

    /// Delete item by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
