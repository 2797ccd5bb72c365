//! Acceptance rules applied to a registration before it is stored.

use std::collections::BTreeMap;

use crate::columns::{companion, participant};
use crate::{AgeGroup, ModelError, Result};

fn value<'a>(values: &'a BTreeMap<String, String>, column: &str) -> &'a str {
    values.get(column).map_or("", |value| value.trim())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Validates a participant submission and returns its decoded age group.
///
/// Minors must name a guardian with a digits-only document.
pub fn check_participant_submission(values: &BTreeMap<String, String>) -> Result<AgeGroup> {
    if !is_digits(value(values, participant::DOCUMENT)) {
        return Err(ModelError::InvalidSubmission(format!(
            "{} must contain only digits",
            participant::DOCUMENT
        )));
    }
    let age_group = AgeGroup::decode(value(values, participant::IS_ADULT));
    if age_group == AgeGroup::Minor
        && (!is_digits(value(values, participant::CONTACT_DOCUMENT))
            || value(values, participant::GUARDIAN_NAME).is_empty())
    {
        return Err(ModelError::InvalidSubmission(format!(
            "minors require {} (digits only) and {}",
            participant::CONTACT_DOCUMENT,
            participant::GUARDIAN_NAME
        )));
    }
    Ok(age_group)
}

pub fn check_companion_submission(values: &BTreeMap<String, String>) -> Result<()> {
    if !is_digits(value(values, companion::DOCUMENT)) {
        return Err(ModelError::InvalidSubmission(format!(
            "{} must contain only digits",
            companion::DOCUMENT
        )));
    }
    if value(values, companion::NAME).is_empty() {
        return Err(ModelError::InvalidSubmission(format!(
            "{} is required",
            companion::NAME
        )));
    }
    Ok(())
}
