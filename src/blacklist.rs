//! Blacklist index
//!
//! Immutable set of known-weak terms, matched as case-insensitive substrings.

use std::collections::BTreeSet;

use crate::error::PolicyError;

/// Terms every default policy starts with.
pub const SEED_TERMS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "pass",
    "password1",
    "123456789",
    "football",
];

/// Lowercased, deduplicated, non-empty blacklist terms.
///
/// Lookups scan every term, which is fine for the double-digit sizes this is
/// built for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlacklistIndex {
    terms: Vec<String>,
}

impl BlacklistIndex {
    /// Builds an index from arbitrary terms.
    ///
    /// Each term is trimmed and lowercased. A term that is empty after
    /// trimming would match every candidate, so it is rejected.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for term in terms {
            let normalized = term.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                return Err(PolicyError::invalid("blacklist terms must not be empty"));
            }
            set.insert(normalized);
        }
        Ok(Self {
            terms: set.into_iter().collect(),
        })
    }

    /// The index built from [`SEED_TERMS`].
    pub fn seeded() -> Self {
        let set: BTreeSet<String> = SEED_TERMS.iter().map(|t| t.to_string()).collect();
        Self {
            terms: set.into_iter().collect(),
        }
    }

    /// Returns a new index holding this index's terms plus `extra`.
    pub fn extended<I, S>(&self, extra: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Self::from_terms(extra)?;
        let set: BTreeSet<String> = self.terms.iter().chain(extra.terms.iter()).cloned().collect();
        Ok(Self {
            terms: set.into_iter().collect(),
        })
    }

    /// Returns `true` if any term occurs inside `candidate_lower`.
    ///
    /// The argument must already be lowercased.
    pub fn contains(&self, candidate_lower: &str) -> bool {
        self.matching_term(candidate_lower).is_some()
    }

    /// Returns the first term (in sorted order) found inside `candidate_lower`.
    pub fn matching_term(&self, candidate_lower: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|term| candidate_lower.contains(term.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
