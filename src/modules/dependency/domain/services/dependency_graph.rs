use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use uuid::Uuid;

use crate::modules::dependency::application::ports::DependencyRepository;
use crate::modules::dependency::domain::Dependency;
use crate::shared::errors::{DomainError, DomainResult, ValidationError};

/// Maintains the directed "requires-before" relation between learning items
/// and guarantees the edge set stays acyclic.
///
/// The graph is never held in memory across requests; edges are queried
/// lazily per node through the repository port, so the engine stays
/// storage-agnostic and stateless between invocations.
pub struct DependencyGraph {
    repository: Arc<dyn DependencyRepository>,
}

impl DependencyGraph {
    pub fn new(repository: Arc<dyn DependencyRepository>) -> Self {
        Self { repository }
    }

    /// Whether the direct edge `source -> target` is already present.
    pub async fn exists(&self, source: Uuid, target: Uuid) -> DomainResult<bool> {
        Ok(self.repository.find_edge(source, target).await?.is_some())
    }

    /// Whether inserting `source -> target` would close a cycle.
    ///
    /// Searches forward from `target`: if `source` is reachable, the new
    /// edge would let `target` reach back to itself. The visited set keeps
    /// the walk at O(V+E) and guarantees termination even on a graph whose
    /// acyclicity invariant was already violated upstream.
    pub async fn would_create_cycle(&self, source: Uuid, target: Uuid) -> DomainResult<bool> {
        if source == target {
            return Ok(true);
        }

        let mut visited: HashSet<Uuid> = HashSet::new();
        let mut queue: VecDeque<Uuid> = VecDeque::from([target]);

        while let Some(node) = queue.pop_front() {
            if !visited.insert(node) {
                continue;
            }
            for edge in self.repository.edges_from(node).await? {
                if edge.target_id == source {
                    return Ok(true);
                }
                if !visited.contains(&edge.target_id) {
                    queue.push_back(edge.target_id);
                }
            }
        }

        Ok(false)
    }

    /// Insert the edge `source -> target` after all graph invariants pass.
    ///
    /// Check order is fixed: the O(1) self-loop and duplicate checks fail
    /// fast before the O(V+E) cycle search. Existence/ownership of the
    /// endpoints is the calling use case's concern, not the graph's.
    pub async fn link(&self, source: Uuid, target: Uuid) -> DomainResult<Dependency> {
        if source == target {
            return Err(ValidationError::SelfDependency.into());
        }
        if self.exists(source, target).await? {
            return Err(DomainError::DuplicateDependency { source, target });
        }
        if self.would_create_cycle(source, target).await? {
            return Err(DomainError::CircularDependency { source, target });
        }

        let edge = Dependency::new(source, target);
        self.repository.save(&edge).await?;

        log::debug!("Linked dependency {} -> {}", source, target);

        Ok(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dependency::application::ports::dependency_repository::MockDependencyRepository;

    fn graph_with_edges(edges: Vec<(Uuid, Uuid)>) -> DependencyGraph {
        let mut repository = MockDependencyRepository::new();

        let lookup = edges.clone();
        repository.expect_find_edge().returning(move |s, t| {
            Ok(lookup
                .iter()
                .find(|(a, b)| *a == s && *b == t)
                .map(|(a, b)| Dependency::new(*a, *b)))
        });

        let outgoing = edges;
        repository.expect_edges_from().returning(move |node| {
            Ok(outgoing
                .iter()
                .filter(|(a, _)| *a == node)
                .map(|(a, b)| Dependency::new(*a, *b))
                .collect())
        });

        repository.expect_save().returning(|_| Ok(()));

        DependencyGraph::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn self_edge_is_trivially_a_cycle() {
        let graph = graph_with_edges(vec![]);
        let node = Uuid::new_v4();
        assert!(graph.would_create_cycle(node, node).await.unwrap());
    }

    #[tokio::test]
    async fn link_rejects_self_dependency_before_touching_storage() {
        let mut repository = MockDependencyRepository::new();
        repository.expect_find_edge().never();
        repository.expect_edges_from().never();
        repository.expect_save().never();
        let graph = DependencyGraph::new(Arc::new(repository));

        let node = Uuid::new_v4();
        let err = graph.link(node, node).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::SelfDependency)
        );
    }

    #[tokio::test]
    async fn duplicate_edge_is_rejected_without_cycle_search() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut repository = MockDependencyRepository::new();
        repository
            .expect_find_edge()
            .returning(|s, t| Ok(Some(Dependency::new(s, t))));
        // Fail-fast ordering: the O(V+E) search must not run
        repository.expect_edges_from().never();
        repository.expect_save().never();
        let graph = DependencyGraph::new(Arc::new(repository));

        let err = graph.link(a, b).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateDependency {
                source: a,
                target: b
            }
        );
    }

    #[tokio::test]
    async fn direct_reversal_is_a_cycle() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let graph = graph_with_edges(vec![(a, b)]);

        let err = graph.link(b, a).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::CircularDependency {
                source: b,
                target: a
            }
        );
    }

    #[tokio::test]
    async fn three_node_cycle_is_detected() {
        let (x, y, z) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        // x -> y -> z
        let graph = graph_with_edges(vec![(x, y), (y, z)]);

        assert!(graph.would_create_cycle(z, x).await.unwrap());
        let err = graph.link(z, x).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::CircularDependency {
                source: z,
                target: x
            }
        );
    }

    #[tokio::test]
    async fn unrelated_edge_is_permitted() {
        let (x, y, z) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let graph = graph_with_edges(vec![(x, y)]);

        assert!(!graph.would_create_cycle(x, z).await.unwrap());
        let edge = graph.link(x, z).await.unwrap();
        assert_eq!(edge.source_id, x);
        assert_eq!(edge.target_id, z);
    }

    #[tokio::test]
    async fn diamond_reachability_is_not_a_false_cycle() {
        // a -> b, a -> c, b -> d, c -> d: adding d -> e stays acyclic
        let (a, b, c, d, e) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let graph = graph_with_edges(vec![(a, b), (a, c), (b, d), (c, d)]);

        assert!(!graph.would_create_cycle(d, e).await.unwrap());
        // A parallel path a -> d is fine; closing back to the root is not
        assert!(!graph.would_create_cycle(a, d).await.unwrap());
        assert!(graph.would_create_cycle(d, a).await.unwrap());
    }

    #[tokio::test]
    async fn traversal_terminates_on_an_already_corrupt_graph() {
        // Pre-existing cycle b <-> c; searching from it must still terminate
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let graph = graph_with_edges(vec![(b, c), (c, b)]);

        assert!(!graph.would_create_cycle(a, b).await.unwrap());
    }
}
