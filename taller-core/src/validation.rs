//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! request payloads. Limits match the intake form's field constraints.

use shared::{DomainError, DomainResult};

// ========== Text length limits ==========

/// Client full name
pub const MAX_NAME_LEN: usize = 100;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 20;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Street addresses
pub const MAX_ADDRESS_LEN: usize = 200;

/// Notes, problem descriptions, solution details
pub const MAX_NOTE_LEN: usize = 500;

/// Article types and service summaries on order items
pub const MAX_ITEM_TEXT_LEN: usize = 200;

// ========== Validation helpers ==========

fn ensure_within(value: &str, field: &str, max_len: usize) -> DomainResult<()> {
    if value.len() > max_len {
        return Err(DomainError::validation(format!(
            "{field} exceeds the {max_len}-character limit"
        )));
    }
    Ok(())
}

/// A required field: non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be blank")));
    }
    ensure_within(value, field, max_len)
}

/// An optional field: absent is fine, present must fit the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> DomainResult<()> {
    match value {
        Some(v) => ensure_within(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an optional email: length limit plus a minimal shape check.
pub fn validate_optional_email(value: &Option<String>, field: &str) -> DomainResult<()> {
    validate_optional_text(value, field, MAX_EMAIL_LEN)?;
    if let Some(v) = value
        && !v.trim().is_empty()
    {
        let looks_like_email = v.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        });
        if !looks_like_email {
            return Err(DomainError::validation(format!(
                "{field} is not a valid email address"
            )));
        }
    }
    Ok(())
}
