use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::modules::dependency::domain::Dependency;
use crate::shared::errors::DomainResult;

/// Port for dependency edge storage.
///
/// Edges are stored and queried in the forward (`source -> target`)
/// direction only; the cycle search never needs a reverse index.
///
/// Concurrency note: `DependencyGraph::link` performs a check-then-act
/// sequence over this port. Implementations backed by shared storage must
/// run the cycle check and the insert within one serializable transaction
/// (or a lock scoped to the affected nodes); otherwise two concurrent links
/// can jointly close a cycle.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// All direct outgoing edges of a node
    async fn edges_from(&self, item_id: Uuid) -> DomainResult<Vec<Dependency>>;

    /// The direct edge `source -> target`, if present
    async fn find_edge(&self, source: Uuid, target: Uuid) -> DomainResult<Option<Dependency>>;

    /// Persist a new edge
    async fn save(&self, edge: &Dependency) -> DomainResult<()>;

    /// Remove a single edge by endpoints; Ok(false) if absent
    async fn delete(&self, source: Uuid, target: Uuid) -> DomainResult<bool>;

    /// Remove every edge touching an item (either endpoint);
    /// returns how many were removed
    async fn delete_by_item(&self, item_id: Uuid) -> DomainResult<u64>;
}
