//! Input rules applied to todo payloads before they reach storage.

use crate::error::CoreError;

/// Reject titles that are empty or contain only whitespace.
///
/// NUL characters are rejected too; Postgres `TEXT` cannot store them.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.contains('\0') {
        return Err(CoreError::Validation(
            "title must not contain NUL characters".into(),
        ));
    }
    Ok(())
}

/// Require a title to be present and non-blank, returning it on success.
///
/// Create payloads carry the title as optional so a missing field is
/// reported as a validation failure instead of a body rejection.
pub fn require_title(title: Option<&str>) -> Result<&str, CoreError> {
    let title = title.ok_or_else(|| CoreError::Validation("title is required".into()))?;
    validate_title(title)?;
    Ok(title)
}
