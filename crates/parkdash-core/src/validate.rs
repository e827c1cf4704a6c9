//! Client-side pre-submission checks.
//!
//! The server remains authoritative; these guardrails reject obviously
//! invalid drafts before any request is sent, so the user gets a field-level
//! message instead of a bare 400.

use crate::error::CoreError;
use crate::model::{SpaceDraft, SpaceStatus, ZoneDraft};

/// Business rule: zone capacity must stay within this band.
pub const CAPACITY_RANGE: std::ops::RangeInclusive<u32> = 5..=25;

/// Visual-indicator priority band.
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

fn fail(field: &str, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        field: field.into(),
        message: message.into(),
    }
}

/// Validate a zone draft before create/update.
pub fn zone(draft: &ZoneDraft) -> Result<(), CoreError> {
    if draft.name.trim().is_empty() {
        return Err(fail("name", "must not be empty"));
    }
    if !CAPACITY_RANGE.contains(&draft.capacity) {
        return Err(fail(
            "capacity",
            format!(
                "must be between {} and {}, got {}",
                CAPACITY_RANGE.start(),
                CAPACITY_RANGE.end(),
                draft.capacity
            ),
        ));
    }
    Ok(())
}

/// Validate a space draft before create/update.
///
/// A reserved-while-occupied draft is rejected outright — use
/// [`SpaceDraft::sanitized`] first when the caller intends the occupied
/// transition to win.
pub fn space(draft: &SpaceDraft) -> Result<(), CoreError> {
    if draft.code.trim().is_empty() {
        return Err(fail("code", "must not be empty"));
    }
    if !PRIORITY_RANGE.contains(&draft.priority) {
        return Err(fail(
            "priority",
            format!(
                "must be between {} and {}, got {}",
                PRIORITY_RANGE.start(),
                PRIORITY_RANGE.end(),
                draft.priority
            ),
        ));
    }
    if draft.reserved && draft.status != SpaceStatus::Available {
        return Err(fail(
            "reserved",
            "a space may only be reserved while it is AVAILABLE",
        ));
    }
    Ok(())
}
