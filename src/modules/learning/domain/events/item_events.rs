use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::learning::domain::value_objects::ItemStatus;
use crate::shared::domain::events::DomainEvent;

/// A learning item was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: Uuid,
    pub owner_id: String,
    pub title: String,
}

impl ItemCreatedEvent {
    pub fn new(item_id: Uuid, owner_id: String, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            owner_id,
            title,
        }
    }
}

impl DomainEvent for ItemCreatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "ItemCreated"
    }
}

/// A learning item moved to a different status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStatusChangedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: Uuid,
    pub from: ItemStatus,
    pub to: ItemStatus,
}

impl ItemStatusChangedEvent {
    pub fn new(item_id: Uuid, from: ItemStatus, to: ItemStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            from,
            to,
        }
    }
}

impl DomainEvent for ItemStatusChangedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "ItemStatusChanged"
    }
}

/// A module change caused the cached progress value to be recomputed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemProgressRecalculatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: Uuid,
    pub old_progress: u32,
    pub new_progress: u32,
}

impl ItemProgressRecalculatedEvent {
    pub fn new(item_id: Uuid, old_progress: u32, new_progress: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            old_progress,
            new_progress,
        }
    }
}

impl DomainEvent for ItemProgressRecalculatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "ItemProgressRecalculated"
    }
}

/// A learning item and everything attached to it was removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDeletedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: Uuid,
    pub owner_id: String,
}

impl ItemDeletedEvent {
    pub fn new(item_id: Uuid, owner_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            owner_id,
        }
    }
}

impl DomainEvent for ItemDeletedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "ItemDeleted"
    }
}
