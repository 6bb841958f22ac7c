//! Evaluation outcome.

use std::fmt;

use crate::config::CharacterClass;

/// Why a candidate was rejected, or [`FailureReason::None`] if it was not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FailureReason {
    None,
    TooShort,
    TooLong,
    /// The first missing class in canonical order.
    MissingCharacterClass(CharacterClass),
    DisallowedCharacter,
    ContainsBlacklistedTerm,
}

impl FailureReason {
    /// Stable code for API layers.
    pub fn code(self) -> &'static str {
        match self {
            FailureReason::None => "NONE",
            FailureReason::TooShort => "TOO_SHORT",
            FailureReason::TooLong => "TOO_LONG",
            FailureReason::MissingCharacterClass(_) => "MISSING_CHARACTER_CLASS",
            FailureReason::DisallowedCharacter => "DISALLOWED_CHARACTER",
            FailureReason::ContainsBlacklistedTerm => "CONTAINS_BLACKLISTED_TERM",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingCharacterClass(class) => {
                write!(f, "{}({})", self.code(), class)
            }
            _ => f.write_str(self.code()),
        }
    }
}

/// A single failing rule: its reason and the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub reason: FailureReason,
    pub message: String,
}

impl Rejection {
    pub(crate) fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

pub(crate) const ACCEPTED_MESSAGE: &str = "Password meets the strength policy";

/// Outcome of one evaluation.
///
/// `is_accepted()` holds exactly when `reason()` is [`FailureReason::None`];
/// only the evaluator builds rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    accepted: bool,
    reason: FailureReason,
    message: String,
}

impl Verdict {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: FailureReason::None,
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub(crate) fn rejected(rejection: Rejection) -> Self {
        debug_assert!(rejection.reason != FailureReason::None);
        Self {
            accepted: false,
            reason: rejection.reason,
            message: rejection.message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_has_no_reason() {
        let verdict = Verdict::accepted();
        assert!(verdict.is_accepted());
        assert_eq!(verdict.reason(), FailureReason::None);
        assert_eq!(verdict.message(), ACCEPTED_MESSAGE);
    }

    #[test]
    fn test_rejected_keeps_reason_and_message() {
        let verdict = Verdict::rejected(Rejection::new(FailureReason::TooLong, "too long"));
        assert!(!verdict.is_accepted());
        assert_eq!(verdict.reason(), FailureReason::TooLong);
        assert_eq!(verdict.message(), "too long");
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(FailureReason::TooShort.to_string(), "TOO_SHORT");
        assert_eq!(
            FailureReason::MissingCharacterClass(CharacterClass::Uppercase).to_string(),
            "MISSING_CHARACTER_CLASS(uppercase letter)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_verdict() {
        let verdict = Verdict::rejected(Rejection::new(
            FailureReason::MissingCharacterClass(CharacterClass::Digit),
            "Password must contain at least one digit",
        ));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["accepted"], false);
        assert_eq!(json["reason"]["MISSING_CHARACTER_CLASS"], "digit");

        let json = serde_json::to_value(Verdict::accepted()).unwrap();
        assert_eq!(json["reason"], "NONE");
    }
}
