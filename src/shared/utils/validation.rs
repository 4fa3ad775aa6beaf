use crate::shared::errors::ValidationError;

/// Maximum accepted length for a learning item title.
pub const MAX_TITLE_LEN: usize = 200;

pub struct Validator;

impl Validator {
    pub fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong { max: MAX_TITLE_LEN });
        }
        Ok(())
    }

    pub fn validate_owner(owner_id: &str) -> Result<(), ValidationError> {
        if owner_id.trim().is_empty() {
            return Err(ValidationError::EmptyOwner);
        }
        Ok(())
    }
}
