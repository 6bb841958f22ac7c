//! Length section - checks password length bounds.

use super::SectionResult;
use crate::config::PolicyConfig;
use crate::verdict::{FailureReason, Rejection};

/// Checks the candidate against the configured minimum and maximum length.
///
/// Length is counted in `char`s, and counting stops one past the maximum so
/// oversized input costs no more than `max_length + 1` steps. The bound
/// saturates at `usize::MAX`.
pub fn length_section(password: &str, config: &PolicyConfig) -> SectionResult {
    let too_short = || {
        Rejection::new(
            FailureReason::TooShort,
            format!(
                "Password must be at least {} characters long",
                config.min_length()
            ),
        )
    };

    if password.is_empty() {
        return Err(too_short());
    }

    let len = password.chars().take(config.max_length().saturating_add(1)).count();
    if len < config.min_length() {
        return Err(too_short());
    }
    if len > config.max_length() {
        return Err(Rejection::new(
            FailureReason::TooLong,
            format!(
                "Password must not exceed {} characters",
                config.max_length()
            ),
        ));
    }
    Ok(())
}
