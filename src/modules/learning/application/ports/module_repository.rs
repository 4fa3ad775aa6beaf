use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::modules::learning::domain::Module;
use crate::shared::errors::DomainResult;

/// Port for module persistence, used to hydrate the aggregate before
/// progress recomputation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    /// All modules belonging to an item
    async fn find_by_item(&self, item_id: Uuid) -> DomainResult<Vec<Module>>;

    /// Replace the stored module set of an item with the given one
    async fn replace_for_item(&self, item_id: Uuid, modules: &[Module]) -> DomainResult<()>;

    /// Remove all modules of an item (item deletion)
    async fn delete_by_item(&self, item_id: Uuid) -> DomainResult<()>;
}
