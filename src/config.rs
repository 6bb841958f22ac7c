//! Policy configuration.

use std::collections::BTreeSet;
use std::fmt;

use crate::blacklist::BlacklistIndex;
use crate::error::PolicyError;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// A character class a candidate may be required to contain.
///
/// Declaration order is the order missing classes are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Phrase used in rejection messages, e.g. "uppercase letter".
    pub fn describe(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase letter",
            CharacterClass::Uppercase => "uppercase letter",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special character",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Immutable policy a candidate is evaluated against.
///
/// Built once at startup through [`PolicyConfig::builder`], which enforces
/// the invariants; evaluation assumes them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolicyConfigBuilder"))]
pub struct PolicyConfig {
    min_length: usize,
    max_length: usize,
    required_classes: BTreeSet<CharacterClass>,
    special_characters: BTreeSet<char>,
    blacklist: BlacklistIndex,
    restrict_alphabet: bool,
}

impl PolicyConfig {
    pub fn builder() -> PolicyConfigBuilder {
        PolicyConfigBuilder::default()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn required_classes(&self) -> &BTreeSet<CharacterClass> {
        &self.required_classes
    }

    pub fn special_characters(&self) -> &BTreeSet<char> {
        &self.special_characters
    }

    pub fn blacklist(&self) -> &BlacklistIndex {
        &self.blacklist
    }

    /// Whether characters outside letters, digits and the special set are refused.
    pub fn restrict_alphabet(&self) -> bool {
        self.restrict_alphabet
    }

    /// Returns `true` if `c` belongs to `class` under this policy.
    pub fn is_member(&self, class: CharacterClass, c: char) -> bool {
        match class {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => self.special_characters.contains(&c),
        }
    }

    /// Special characters as a string, in sorted order.
    pub(crate) fn special_characters_display(&self) -> String {
        self.special_characters.iter().collect()
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            required_classes: CharacterClass::ALL.into_iter().collect(),
            special_characters: DEFAULT_SPECIAL_CHARACTERS.chars().collect(),
            blacklist: BlacklistIndex::seeded(),
            restrict_alphabet: true,
        }
    }
}

/// Builder for [`PolicyConfig`]. Unset fields take the reference defaults.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PolicyConfigBuilder {
    min_length: usize,
    max_length: usize,
    required_classes: BTreeSet<CharacterClass>,
    special_characters: String,
    #[cfg_attr(feature = "serde", serde(rename = "blacklist"))]
    blacklist_terms: Vec<String>,
    seed_blacklist: bool,
    restrict_alphabet: bool,
}

impl Default for PolicyConfigBuilder {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            required_classes: CharacterClass::ALL.into_iter().collect(),
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            blacklist_terms: Vec::new(),
            seed_blacklist: true,
            restrict_alphabet: true,
        }
    }
}

impl PolicyConfigBuilder {
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn required_classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        self.required_classes = classes.into_iter().collect();
        self
    }

    pub fn special_characters(mut self, chars: impl Into<String>) -> Self {
        self.special_characters = chars.into();
        self
    }

    /// Adds terms on top of the seed list (or on top of nothing, see
    /// [`without_seed_blacklist`](Self::without_seed_blacklist)).
    pub fn blacklist_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn without_seed_blacklist(mut self) -> Self {
        self.seed_blacklist = false;
        self
    }

    pub fn restrict_alphabet(mut self, restrict: bool) -> Self {
        self.restrict_alphabet = restrict;
        self
    }

    /// Validates the settings and produces the immutable config.
    ///
    /// # Errors
    ///
    /// [`PolicyError::InvalidPolicyConfiguration`] if:
    /// - `min_length` is zero or greater than `max_length`
    /// - `Special` is required but no special characters are configured
    /// - a special character is an ASCII letter, digit or whitespace
    /// - a blacklist term is blank
    pub fn build(self) -> Result<PolicyConfig, PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::invalid("min_length must be at least 1"));
        }
        if self.min_length > self.max_length {
            return Err(PolicyError::invalid(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }

        let special_characters: BTreeSet<char> = self.special_characters.chars().collect();
        if let Some(c) = special_characters
            .iter()
            .find(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        {
            return Err(PolicyError::invalid(format!(
                "{c:?} cannot be used as a special character"
            )));
        }
        if special_characters.is_empty() && self.required_classes.contains(&CharacterClass::Special)
        {
            return Err(PolicyError::invalid(
                "special characters are required but none are configured",
            ));
        }

        let blacklist = if self.seed_blacklist {
            BlacklistIndex::seeded().extended(&self.blacklist_terms)?
        } else {
            BlacklistIndex::from_terms(&self.blacklist_terms)?
        };

        Ok(PolicyConfig {
            min_length: self.min_length,
            max_length: self.max_length,
            required_classes: self.required_classes,
            special_characters,
            blacklist,
            restrict_alphabet: self.restrict_alphabet,
        })
    }
}

impl TryFrom<PolicyConfigBuilder> for PolicyConfig {
    type Error = PolicyError;

    fn try_from(builder: PolicyConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_policy() {
        let config = PolicyConfig::default();
        assert_eq!(config.min_length(), 8);
        assert_eq!(config.max_length(), 128);
        assert_eq!(config.required_classes().len(), 4);
        assert_eq!(config.special_characters_display(), "!$%&*?@");
        assert!(config.restrict_alphabet());
        assert!(config.blacklist().contains("password"));
    }

    #[test]
    fn test_builder_defaults_equal_default() {
        assert_eq!(PolicyConfig::builder().build(), Ok(PolicyConfig::default()));
    }

    #[test]
    fn test_build_rejects_min_above_max() {
        let result = PolicyConfig::builder().min_length(20).max_length(10).build();
        match result {
            Err(PolicyError::InvalidPolicyConfiguration(msg)) => {
                assert!(msg.contains("20") && msg.contains("10"));
            }
            other => panic!("Expected InvalidPolicyConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_build_accepts_equal_bounds() {
        let config = PolicyConfig::builder().min_length(12).max_length(12).build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_build_rejects_zero_min_length() {
        let result = PolicyConfig::builder().min_length(0).build();
        assert!(matches!(result, Err(PolicyError::InvalidPolicyConfiguration(_))));
    }

    #[test]
    fn test_build_rejects_empty_special_set_when_required() {
        let result = PolicyConfig::builder().special_characters("").build();
        assert!(matches!(result, Err(PolicyError::InvalidPolicyConfiguration(_))));
    }

    #[test]
    fn test_build_allows_empty_special_set_when_not_required() {
        let config = PolicyConfig::builder()
            .required_classes([CharacterClass::Lowercase, CharacterClass::Digit])
            .special_characters("")
            .build()
            .unwrap();
        assert!(config.special_characters().is_empty());
    }

    #[test]
    fn test_build_rejects_alphanumeric_special_character() {
        let result = PolicyConfig::builder().special_characters("@a").build();
        assert!(matches!(result, Err(PolicyError::InvalidPolicyConfiguration(_))));
    }

    #[test]
    fn test_build_rejects_blank_blacklist_term() {
        let result = PolicyConfig::builder().blacklist_terms(["  "]).build();
        assert!(matches!(result, Err(PolicyError::InvalidPolicyConfiguration(_))));
    }

    #[test]
    fn test_build_without_seed_blacklist() {
        let config = PolicyConfig::builder()
            .without_seed_blacklist()
            .blacklist_terms(["Acme"])
            .build()
            .unwrap();
        assert_eq!(config.blacklist().iter().collect::<Vec<_>>(), vec!["acme"]);
    }

    #[test]
    fn test_is_member_uses_configured_special_set() {
        let config = PolicyConfig::builder().special_characters("#").build().unwrap();
        assert!(config.is_member(CharacterClass::Special, '#'));
        assert!(!config.is_member(CharacterClass::Special, '@'));
        assert!(!config.is_member(CharacterClass::Uppercase, 'É'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let config: PolicyConfig = serde_json::from_str(
            r#"{"min_length": 10, "required_classes": ["lowercase", "digit"], "blacklist": ["Acme"]}"#,
        )
        .unwrap();
        assert_eq!(config.min_length(), 10);
        assert_eq!(config.required_classes().len(), 2);
        assert!(config.blacklist().contains("acme"));
        assert!(config.blacklist().contains("qwerty"));

        let bad = serde_json::from_str::<PolicyConfig>(r#"{"min_length": 200}"#);
        assert!(bad.is_err());
    }
}
