use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::dependency::application::ports::DependencyRepository;
use crate::modules::dependency::domain::Dependency;
use crate::shared::errors::DomainResult;

/// In-memory edge store: adjacency lists keyed by source node.
///
/// Test/embedding infrastructure only. Individual map operations are
/// thread-safe, but whole link operations are not serialized against each
/// other; real storage backends must provide that (see the port docs).
#[derive(Debug, Default)]
pub struct InMemoryDependencyRepository {
    edges: DashMap<Uuid, Vec<Dependency>>,
}

impl InMemoryDependencyRepository {
    pub fn new() -> Self {
        Self {
            edges: DashMap::new(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|entry| entry.value().len()).sum()
    }
}

#[async_trait]
impl DependencyRepository for InMemoryDependencyRepository {
    async fn edges_from(&self, item_id: Uuid) -> DomainResult<Vec<Dependency>> {
        Ok(self
            .edges
            .get(&item_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn find_edge(&self, source: Uuid, target: Uuid) -> DomainResult<Option<Dependency>> {
        Ok(self.edges.get(&source).and_then(|entry| {
            entry
                .value()
                .iter()
                .find(|edge| edge.target_id == target)
                .cloned()
        }))
    }

    async fn save(&self, edge: &Dependency) -> DomainResult<()> {
        self.edges
            .entry(edge.source_id)
            .or_default()
            .push(edge.clone());
        Ok(())
    }

    async fn delete(&self, source: Uuid, target: Uuid) -> DomainResult<bool> {
        let mut removed = false;
        if let Some(mut entry) = self.edges.get_mut(&source) {
            let before = entry.len();
            entry.retain(|edge| edge.target_id != target);
            removed = entry.len() < before;
        }
        Ok(removed)
    }

    async fn delete_by_item(&self, item_id: Uuid) -> DomainResult<u64> {
        // Outgoing edges
        let mut removed = self
            .edges
            .remove(&item_id)
            .map(|(_, edges)| edges.len() as u64)
            .unwrap_or(0);

        // Incoming edges
        for mut entry in self.edges.iter_mut() {
            let before = entry.len();
            entry.retain(|edge| edge.target_id != item_id);
            removed += (before - entry.len()) as u64;
        }

        Ok(removed)
    }
}
