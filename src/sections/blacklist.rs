//! Blacklist section - checks for known-weak terms inside the password.

use super::SectionResult;
use crate::config::PolicyConfig;
use crate::verdict::{FailureReason, Rejection};

/// Rejects the password if any blacklist term occurs in it, ignoring case.
pub fn blacklist_section(password: &str, config: &PolicyConfig) -> SectionResult {
    if config.blacklist().contains(&password.to_lowercase()) {
        return Err(Rejection::new(
            FailureReason::ContainsBlacklistedTerm,
            "Password is too common. Please choose a more secure password",
        ));
    }
    Ok(())
}
