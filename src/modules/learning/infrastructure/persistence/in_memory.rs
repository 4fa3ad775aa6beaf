use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::learning::application::ports::{ItemRef, ItemRepository, ModuleRepository};
use crate::modules::learning::domain::{ItemRecord, Module};
use crate::shared::errors::{DomainError, DomainResult};

/// In-memory learning item store backed by a concurrent map.
///
/// Default storage collaborator for tests and embedders without a database.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: DashMap<Uuid, ItemRecord>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, record: &ItemRecord) -> DomainResult<()> {
        self.items.insert(record.id, record.clone());
        Ok(())
    }

    async fn update(&self, record: &ItemRecord) -> DomainResult<()> {
        if !self.items.contains_key(&record.id) {
            return Err(DomainError::Repository(format!(
                "Cannot update unknown item {}",
                record.id
            )));
        }
        self.items.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ItemRecord>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_ref(&self, id: Uuid) -> DomainResult<Option<ItemRef>> {
        Ok(self.items.get(&id).map(|entry| ItemRef {
            id: entry.id,
            owner_id: entry.owner_id.clone(),
        }))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.items.remove(&id);
        Ok(())
    }
}

/// In-memory module store keyed by owning item id.
#[derive(Debug, Default)]
pub struct InMemoryModuleRepository {
    modules: DashMap<Uuid, Vec<Module>>,
}

impl InMemoryModuleRepository {
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
        }
    }
}

#[async_trait]
impl ModuleRepository for InMemoryModuleRepository {
    async fn find_by_item(&self, item_id: Uuid) -> DomainResult<Vec<Module>> {
        Ok(self
            .modules
            .get(&item_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn replace_for_item(&self, item_id: Uuid, modules: &[Module]) -> DomainResult<()> {
        self.modules.insert(item_id, modules.to_vec());
        Ok(())
    }

    async fn delete_by_item(&self, item_id: Uuid) -> DomainResult<()> {
        self.modules.remove(&item_id);
        Ok(())
    }
}
