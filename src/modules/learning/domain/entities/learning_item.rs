use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::learning::domain::entities::{ItemRecord, Module};
use crate::modules::learning::domain::events::{
    ItemCreatedEvent, ItemProgressRecalculatedEvent, ItemStatusChangedEvent,
};
use crate::modules::learning::domain::services::{ProgressCalculator, StatusMachine};
use crate::modules::learning::domain::value_objects::ItemStatus;
use crate::shared::domain::events::DomainEvent;
use crate::shared::errors::{DomainError, DomainResult, ValidationError};
use crate::shared::utils::Validator;

/// Learning Item Aggregate Root
///
/// Owns its modules, status, cached progress and due-date invariant. All
/// mutation goes through methods that re-run invariant checks and recompute
/// progress when the module set changes; fields are never assigned directly
/// from the outside. State changes are buffered as domain events to be
/// published after persistence.
#[derive(Debug)]
pub struct LearningItem {
    id: Uuid,
    owner_id: String,
    title: String,
    description: String,
    due_date: Option<DateTime<Utc>>,
    status: ItemStatus,
    /// Always equals `ProgressCalculator::compute` over `modules`
    progress: u32,
    category_id: Option<Uuid>,
    modules: Vec<Module>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    /// Domain events that occurred during this session
    /// These should be published after persistence
    pending_events: Vec<Box<dyn DomainEvent>>,
}

impl LearningItem {
    /// Create a new learning item. Status starts at `Backlog`, progress at 0.
    pub fn create(
        owner_id: String,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
        category_id: Option<Uuid>,
    ) -> DomainResult<Self> {
        Validator::validate_owner(&owner_id)?;
        Validator::validate_title(&title)?;
        Self::check_due_date(due_date, ItemStatus::Backlog)?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let event = ItemCreatedEvent::new(id, owner_id.clone(), title.clone());

        Ok(Self {
            id,
            owner_id,
            title,
            description,
            due_date,
            status: ItemStatus::Backlog,
            progress: 0,
            category_id,
            modules: Vec::new(),
            created_at: now,
            updated_at: now,
            pending_events: vec![Box::new(event)],
        })
    }

    /// Rebuild the aggregate from a stored record plus its module list.
    ///
    /// The cached progress is recomputed here rather than trusted, so a
    /// stale stored value heals on load.
    pub fn from_record(record: ItemRecord, modules: Vec<Module>) -> Self {
        let progress = ProgressCalculator::compute(&modules);
        Self {
            id: record.id,
            owner_id: record.owner_id,
            title: record.title,
            description: record.description,
            due_date: record.due_date,
            status: record.status,
            progress,
            category_id: record.category_id,
            modules,
            created_at: record.created_at,
            updated_at: record.updated_at,
            pending_events: Vec::new(),
        }
    }

    /// Scalar snapshot for persistence
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            id: self.id,
            owner_id: self.owner_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            status: self.status,
            progress: self.progress,
            category_id: self.category_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    pub fn update_title(&mut self, new_title: String) -> DomainResult<()> {
        Validator::validate_title(&new_title)?;
        self.title = new_title;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, text: String) {
        self.description = text;
        self.touch();
    }

    pub fn update_due_date(&mut self, due_date: Option<DateTime<Utc>>) -> DomainResult<()> {
        Self::check_due_date(due_date, self.status)?;
        self.due_date = due_date;
        self.touch();
        Ok(())
    }

    pub fn update_category(&mut self, category_id: Option<Uuid>) {
        self.category_id = category_id;
        self.touch();
    }

    /// Transition to a new status.
    ///
    /// Delegates legality to `StatusMachine`. Moving away from `Done` with a
    /// past due date fails the transition instead of silently persisting an
    /// invalid item.
    pub fn update_status(&mut self, new_status: ItemStatus) -> DomainResult<()> {
        if !StatusMachine::can_transition(self.status, new_status) {
            return Err(DomainError::IllegalTransition {
                from: self.status,
                to: new_status,
            });
        }
        if new_status != ItemStatus::Done {
            Self::check_due_date(self.due_date, new_status)?;
        }

        if self.status != new_status {
            let event = ItemStatusChangedEvent::new(self.id, self.status, new_status);
            self.pending_events.push(Box::new(event));
        }
        self.status = new_status;
        self.touch();
        Ok(())
    }

    /// Replace the whole module collection and recompute progress.
    pub fn set_modules(&mut self, modules: Vec<Module>) -> DomainResult<()> {
        for module in &modules {
            self.check_module_parent(module)?;
        }
        Self::check_order_unique(&modules)?;

        self.modules = modules;
        self.recalculate_progress();
        self.touch();
        Ok(())
    }

    pub fn add_module(&mut self, module: Module) -> DomainResult<()> {
        self.check_module_parent(&module)?;
        if self.modules.iter().any(|m| m.order == module.order) {
            return Err(ValidationError::DuplicateModuleOrder {
                order: module.order,
            }
            .into());
        }

        self.modules.push(module);
        self.recalculate_progress();
        self.touch();
        Ok(())
    }

    pub fn remove_module(&mut self, module_id: Uuid) -> DomainResult<()> {
        let original_len = self.modules.len();
        self.modules.retain(|m| m.id != module_id);
        if self.modules.len() == original_len {
            return Err(DomainError::NotFound(format!(
                "Module {} not found on item {}",
                module_id, self.id
            )));
        }

        self.recalculate_progress();
        self.touch();
        Ok(())
    }

    pub fn update_module(&mut self, mut module: Module) -> DomainResult<()> {
        self.check_module_parent(&module)?;
        let Some(position) = self.modules.iter().position(|m| m.id == module.id) else {
            return Err(DomainError::NotFound(format!(
                "Module {} not found on item {}",
                module.id, self.id
            )));
        };
        if self
            .modules
            .iter()
            .any(|m| m.id != module.id && m.order == module.order)
        {
            return Err(ValidationError::DuplicateModuleOrder {
                order: module.order,
            }
            .into());
        }

        module.touch();
        self.modules[position] = module;
        self.recalculate_progress();
        self.touch();
        Ok(())
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the due date has passed. Always false for `Done` items and
    /// items without a due date. Compared at day granularity.
    pub fn is_overdue(&self) -> bool {
        if self.status == ItemStatus::Done {
            return false;
        }
        match self.due_date {
            Some(due) => due.date_naive() < Utc::now().date_naive(),
            None => false,
        }
    }

    /// Whether the due date falls within the next `days` days, today
    /// inclusive. False for `Done` items, items without a due date and
    /// items already overdue.
    pub fn is_due_soon(&self, days: u32) -> bool {
        if self.status == ItemStatus::Done {
            return false;
        }
        match self.due_date {
            Some(due) => {
                let today = Utc::now().date_naive();
                let due_day = due.date_naive();
                due_day >= today && (due_day - today).num_days() <= i64::from(days)
            }
            None => false,
        }
    }

    // ============================================================================================
    // EVENT HANDLING
    // ============================================================================================

    /// Get pending domain events (to be published)
    pub fn pending_events(&self) -> &[Box<dyn DomainEvent>] {
        &self.pending_events
    }

    /// Drain pending events for publishing (after persistence)
    pub fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.pending_events)
    }

    // ============================================================================================
    // INTERNAL
    // ============================================================================================

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn recalculate_progress(&mut self) {
        let new_progress = ProgressCalculator::compute(&self.modules);
        if new_progress != self.progress {
            let event = ItemProgressRecalculatedEvent::new(self.id, self.progress, new_progress);
            self.pending_events.push(Box::new(event));
            self.progress = new_progress;
        }
    }

    fn check_module_parent(&self, module: &Module) -> DomainResult<()> {
        if module.item_id != self.id {
            return Err(ValidationError::ModuleMismatch.into());
        }
        Ok(())
    }

    fn check_order_unique(modules: &[Module]) -> DomainResult<()> {
        for (i, module) in modules.iter().enumerate() {
            if modules[..i].iter().any(|m| m.order == module.order) {
                return Err(ValidationError::DuplicateModuleOrder {
                    order: module.order,
                }
                .into());
            }
        }
        Ok(())
    }

    /// A due date in the past (day granularity) is only valid on `Done` items
    fn check_due_date(due_date: Option<DateTime<Utc>>, status: ItemStatus) -> DomainResult<()> {
        if status == ItemStatus::Done {
            return Ok(());
        }
        if let Some(due) = due_date {
            if due.date_naive() < Utc::now().date_naive() {
                return Err(ValidationError::DueDateInPast.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::learning::domain::value_objects::ModuleStatus;
    use chrono::Duration;

    fn item() -> LearningItem {
        LearningItem::create(
            "user-1".to_string(),
            "Rust for Rustaceans".to_string(),
            "Advanced Rust book".to_string(),
            None,
            None,
        )
        .unwrap()
    }

    fn module_for(item: &LearningItem, order: i32, status: ModuleStatus) -> Module {
        Module::new(item.id(), format!("Chapter {}", order), order).with_status(status)
    }

    #[test]
    fn created_in_backlog_with_zero_progress() {
        let item = item();
        assert_eq!(item.status(), ItemStatus::Backlog);
        assert_eq!(item.progress(), 0);
        assert_eq!(item.pending_events().len(), 1);
        assert_eq!(item.pending_events()[0].event_type(), "ItemCreated");
    }

    #[test]
    fn create_rejects_empty_title_and_owner() {
        let err = LearningItem::create(
            "user-1".to_string(),
            "".to_string(),
            String::new(),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::EmptyTitle));

        let err = LearningItem::create(
            "".to_string(),
            "Title".to_string(),
            String::new(),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::EmptyOwner));
    }

    #[test]
    fn create_rejects_past_due_date() {
        let yesterday = Utc::now() - Duration::days(1);
        let err = LearningItem::create(
            "user-1".to_string(),
            "Title".to_string(),
            String::new(),
            Some(yesterday),
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::DueDateInPast));
    }

    #[test]
    fn illegal_transition_is_rejected() {
        let mut item = item();
        let err = item.update_status(ItemStatus::Done).unwrap_err();
        assert_eq!(
            err,
            DomainError::IllegalTransition {
                from: ItemStatus::Backlog,
                to: ItemStatus::Done,
            }
        );
        // State untouched on failure
        assert_eq!(item.status(), ItemStatus::Backlog);
    }

    #[test]
    fn status_change_emits_event() {
        let mut item = item();
        item.take_events();

        item.update_status(ItemStatus::InProgress).unwrap();
        assert_eq!(item.status(), ItemStatus::InProgress);
        assert_eq!(item.pending_events().len(), 1);
        assert_eq!(item.pending_events()[0].event_type(), "ItemStatusChanged");
    }

    #[test]
    fn self_transition_is_legal_and_silent() {
        let mut item = item();
        item.take_events();

        item.update_status(ItemStatus::Backlog).unwrap();
        assert!(item.pending_events().is_empty());
    }

    #[test]
    fn reopening_with_past_due_date_fails() {
        let mut item = item();
        item.update_status(ItemStatus::InProgress).unwrap();
        item.update_status(ItemStatus::Done).unwrap();
        // Past due date is fine while Done
        item.update_due_date(Some(Utc::now() - Duration::days(3)))
            .unwrap();

        let err = item.update_status(ItemStatus::InProgress).unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::DueDateInPast));
        assert_eq!(item.status(), ItemStatus::Done);
    }

    #[test]
    fn module_changes_recompute_progress() {
        let mut item = item();
        let modules = vec![
            module_for(&item, 0, ModuleStatus::Done),
            module_for(&item, 1, ModuleStatus::Done),
            module_for(&item, 2, ModuleStatus::Pending),
            module_for(&item, 3, ModuleStatus::Pending),
        ];
        item.set_modules(modules).unwrap();
        assert_eq!(item.progress(), 50);

        let pending_id = item
            .modules()
            .iter()
            .find(|m| m.status == ModuleStatus::Pending)
            .unwrap()
            .id;
        item.remove_module(pending_id).unwrap();
        assert_eq!(item.progress(), 67);
    }

    #[test]
    fn set_modules_is_idempotent() {
        let mut item = item();
        let modules = vec![
            module_for(&item, 0, ModuleStatus::Done),
            module_for(&item, 1, ModuleStatus::Pending),
        ];
        item.set_modules(modules.clone()).unwrap();
        let first = item.progress();
        item.set_modules(modules).unwrap();
        assert_eq!(item.progress(), first);
    }

    #[test]
    fn progress_recalculation_emits_event_only_on_change() {
        let mut item = item();
        item.take_events();

        item.set_modules(vec![module_for(&item, 0, ModuleStatus::Done)])
            .unwrap();
        assert_eq!(item.progress(), 100);
        assert_eq!(item.pending_events().len(), 1);
        assert_eq!(
            item.pending_events()[0].event_type(),
            "ItemProgressRecalculated"
        );

        // Same module set again: no progress change, no event
        let current = item.modules().to_vec();
        item.take_events();
        item.set_modules(current).unwrap();
        assert!(item.pending_events().is_empty());
    }

    #[test]
    fn foreign_module_is_rejected() {
        let mut item = item();
        let foreign = Module::new(Uuid::new_v4(), "Other".to_string(), 0);
        let err = item.add_module(foreign).unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::ModuleMismatch));
    }

    #[test]
    fn duplicate_order_is_rejected() {
        let mut item = item();
        item.add_module(module_for(&item, 1, ModuleStatus::Pending))
            .unwrap();
        let err = item
            .add_module(module_for(&item, 1, ModuleStatus::Pending))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::DuplicateModuleOrder { order: 1 })
        );
        assert_eq!(item.modules().len(), 1);
    }

    #[test]
    fn removing_unknown_module_is_not_found() {
        let mut item = item();
        let err = item.remove_module(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn update_module_flips_completion() {
        let mut item = item();
        item.set_modules(vec![
            module_for(&item, 0, ModuleStatus::Pending),
            module_for(&item, 1, ModuleStatus::Pending),
        ])
        .unwrap();
        assert_eq!(item.progress(), 0);

        let mut module = item.modules()[0].clone();
        module.status = ModuleStatus::Done;
        item.update_module(module).unwrap();
        assert_eq!(item.progress(), 50);
    }

    #[test]
    fn overdue_and_due_soon_queries() {
        let mut item = item();
        assert!(!item.is_overdue());
        assert!(!item.is_due_soon(7));

        item.update_due_date(Some(Utc::now() + Duration::days(3)))
            .unwrap();
        assert!(!item.is_overdue());
        assert!(item.is_due_soon(3));
        assert!(item.is_due_soon(7));
        assert!(!item.is_due_soon(2));

        // Due today counts as due soon at day 0
        item.update_due_date(Some(Utc::now())).unwrap();
        assert!(item.is_due_soon(0));
        assert!(!item.is_overdue());
    }

    #[test]
    fn done_items_are_never_overdue_or_due_soon() {
        let mut item = item();
        item.update_due_date(Some(Utc::now() + Duration::days(1)))
            .unwrap();
        item.update_status(ItemStatus::InProgress).unwrap();
        item.update_status(ItemStatus::Done).unwrap();
        assert!(!item.is_overdue());
        assert!(!item.is_due_soon(30));
    }

    #[test]
    fn hydration_heals_stale_progress() {
        let mut item = item();
        item.set_modules(vec![module_for(&item, 0, ModuleStatus::Done)])
            .unwrap();
        let mut record = item.to_record();
        // Simulate a stale stored value
        record.progress = 10;

        let rebuilt = LearningItem::from_record(record, item.modules().to_vec());
        assert_eq!(rebuilt.progress(), 100);
    }
}
