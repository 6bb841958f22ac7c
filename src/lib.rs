//! Password policy gate library
//!
//! This library decides whether a candidate password satisfies a configured
//! strength policy, and also hosts the ranked classification families
//! (risk level, alert severity, ...) shared by the supply chain services.
//!
//! Rules run in a fixed order and the first failing rule decides the verdict:
//! length bounds, then character classes, then the blacklist.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based async evaluation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Wire serialization for verdicts, classifications and policy config
//!
//! # Environment Variables
//!
//! Read only by [`init_default_policy`] / [`load_policy_from_env`]:
//!
//! - `PWD_BLACKLIST_PATH`: File of extra blacklist terms
//! - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`: Length bounds
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{FailureReason, init_default_policy, evaluate_password_strength};
//! use secrecy::SecretString;
//!
//! // Load and install the policy (call once at startup)
//! init_default_policy().expect("Invalid password policy");
//!
//! // Evaluate a password
//! let password = SecretString::new("Xk9!mQ2$pL".to_string().into());
//! let verdict = evaluate_password_strength(&password);
//!
//! assert!(verdict.is_accepted());
//! assert_eq!(verdict.reason(), FailureReason::None);
//! ```

// Internal modules
mod blacklist;
mod config;
mod error;
mod evaluator;
mod loader;
mod sections;
mod verdict;

pub mod classification;

// Public API
pub use blacklist::{BlacklistIndex, SEED_TERMS};
pub use config::{
    CharacterClass, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARACTERS,
    PolicyConfig, PolicyConfigBuilder,
};
pub use error::{LoaderError, ClassificationError, PolicyError};
pub use evaluator::{
    PolicyEngine, default_policy, evaluate, evaluate_password_strength, install_default_policy,
};
pub use loader::{
    BLACKLIST_PATH_VAR, MAX_LENGTH_VAR, MIN_LENGTH_VAR, get_blacklist_path, init_default_policy,
    load_blacklist_terms, load_policy_from_env,
};
pub use verdict::{FailureReason, Verdict};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
