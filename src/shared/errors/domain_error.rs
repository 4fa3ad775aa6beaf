use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::learning::domain::value_objects::ItemStatus;

/// Malformed input to a single entity. Always wrapped in
/// [`DomainError::Validation`] when crossing a use-case boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "details")]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long (max {max} characters)")]
    TitleTooLong { max: usize },

    #[error("Owner cannot be empty")]
    EmptyOwner,

    #[error("Due date cannot be in the past")]
    DueDateInPast,

    #[error("Module belongs to a different learning item")]
    ModuleMismatch,

    #[error("Module order {order} is already taken")]
    DuplicateModuleOrder { order: i32 },

    #[error("An item cannot depend on itself")]
    SelfDependency,
}

/// Typed domain outcomes. The core never uses panics or raw strings for
/// control flow; callers translate these at the transport boundary.
//
// Display/Error/From are hand-written instead of derived with thiserror
// because the derive treats any field named `source` as an error source,
// and Uuid does not implement Error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum DomainError {
    Validation(ValidationError),
    IllegalTransition { from: ItemStatus, to: ItemStatus },
    DuplicateDependency { source: Uuid, target: Uuid },
    CircularDependency { source: Uuid, target: Uuid },
    NotFound(String),
    OwnershipMismatch(String),
    Repository(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(err) => write!(f, "Validation error: {err}"),
            DomainError::IllegalTransition { from, to } => {
                write!(f, "Illegal status transition: {from} -> {to}")
            }
            DomainError::DuplicateDependency { source, target } => {
                write!(f, "Dependency {source} -> {target} already exists")
            }
            DomainError::CircularDependency { source, target } => {
                write!(f, "Dependency {source} -> {target} would create a cycle")
            }
            DomainError::NotFound(what) => write!(f, "Not found: {what}"),
            DomainError::OwnershipMismatch(what) => write!(f, "Ownership mismatch: {what}"),
            DomainError::Repository(what) => write!(f, "Repository error: {what}"),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err)
    }
}

// Result type alias for convenience
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn errors_serialize_with_type_tag_and_details() {
        let err = DomainError::IllegalTransition {
            from: ItemStatus::Backlog,
            to: ItemStatus::Done,
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "IllegalTransition");
        assert_eq!(value["details"]["from"], "Backlog");
        assert_eq!(value["details"]["to"], "Done");

        let source = Uuid::new_v4();
        let target = Uuid::new_v4();
        let err = DomainError::CircularDependency { source, target };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "CircularDependency",
                "details": { "source": source, "target": target },
            })
        );
    }

    #[test]
    fn validation_errors_keep_their_rule_tag_when_wrapped() {
        let err = DomainError::Validation(ValidationError::DuplicateModuleOrder { order: 3 });
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "Validation");
        assert_eq!(value["details"]["rule"], "DuplicateModuleOrder");
        assert_eq!(value["details"]["details"]["order"], 3);

        let value = serde_json::to_value(ValidationError::EmptyTitle).unwrap();
        assert_eq!(value["rule"], "EmptyTitle");
    }

    #[test]
    fn display_messages_name_both_endpoints() {
        let source = Uuid::new_v4();
        let target = Uuid::new_v4();
        let err = DomainError::DuplicateDependency { source, target };
        let message = err.to_string();
        assert!(message.contains(&source.to_string()));
        assert!(message.contains(&target.to_string()));
    }
}
