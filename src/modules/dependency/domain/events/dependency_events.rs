use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::events::DomainEvent;

/// A prerequisite edge was added between two learning items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyLinkedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub dependency_id: Uuid,
    pub source_id: Uuid,
    pub target_id: Uuid,
}

impl DependencyLinkedEvent {
    pub fn new(dependency_id: Uuid, source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            dependency_id,
            source_id,
            target_id,
        }
    }
}

impl DomainEvent for DependencyLinkedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "DependencyLinked"
    }
}

/// A prerequisite edge was removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyUnlinkedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub source_id: Uuid,
    pub target_id: Uuid,
}

impl DependencyUnlinkedEvent {
    pub fn new(source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            source_id,
            target_id,
        }
    }
}

impl DomainEvent for DependencyUnlinkedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "DependencyUnlinked"
    }
}
