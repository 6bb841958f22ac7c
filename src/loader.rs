//! Startup configuration loader
//!
//! The only part of the crate that reads the environment or the filesystem.
//! Everything it produces goes through [`PolicyConfig::builder`], so a bad
//! setting fails startup instead of weakening the policy.

use std::path::{Path, PathBuf};

use crate::config::{PolicyConfig, PolicyConfigBuilder};
use crate::error::LoaderError;
use crate::evaluator::install_default_policy;

/// File of extra blacklist terms, one per line.
pub const BLACKLIST_PATH_VAR: &str = "PWD_BLACKLIST_PATH";
pub const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
pub const MAX_LENGTH_VAR: &str = "PWD_MAX_LENGTH";

/// Returns the blacklist extension file path from `PWD_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_VAR).map(PathBuf::from)
}

/// Reads blacklist terms from a file.
///
/// Lines are trimmed; blank lines are skipped. Normalization to lowercase
/// happens when the terms are built into a policy.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no terms
pub fn load_blacklist_terms<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoaderError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist loading FAILED: FileNotFound {:?}", path);
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let terms: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist loading FAILED: Empty file {:?}", path);
        return Err(LoaderError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist extension loaded: {} terms from {:?}", terms.len(), path);

    Ok(terms)
}

fn length_from_env(var: &'static str) -> Result<Option<usize>, LoaderError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse::<usize>().map(Some).map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::error!("Invalid value for {}: {:?}", var, value);
            LoaderError::InvalidEnvValue { var, value }
        }),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(LoaderError::InvalidEnvValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Builds a policy from the reference defaults plus environment overrides.
///
/// # Environment Variables
///
/// - `PWD_BLACKLIST_PATH`: file of terms added to the seed blacklist
/// - `PWD_MIN_LENGTH` / `PWD_MAX_LENGTH`: length bounds
pub fn load_policy_from_env() -> Result<PolicyConfig, LoaderError> {
    let mut builder: PolicyConfigBuilder = PolicyConfig::builder();

    if let Some(min) = length_from_env(MIN_LENGTH_VAR)? {
        builder = builder.min_length(min);
    }
    if let Some(max) = length_from_env(MAX_LENGTH_VAR)? {
        builder = builder.max_length(max);
    }
    if let Some(path) = get_blacklist_path() {
        builder = builder.blacklist_terms(load_blacklist_terms(&path)?);
    }

    Ok(builder.build()?)
}

/// Loads the policy from the environment and installs it as the process default.
///
/// Call once at startup. Returns the number of blacklist terms in effect.
///
/// # Errors
///
/// Anything [`load_policy_from_env`] reports, or
/// [`LoaderError::AlreadyInstalled`] if a default policy was installed
/// earlier; the earlier policy stays in effect.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_BLACKLIST_PATH", "/etc/myapp/blacklist.txt"); }
/// pwd_policy::init_default_policy()?;
/// ```
pub fn init_default_policy() -> Result<usize, LoaderError> {
    let config = load_policy_from_env()?;
    let count = config.blacklist().len();
    if !install_default_policy(config) {
        #[cfg(feature = "tracing")]
        tracing::error!("Password policy from environment NOT installed: already installed");
        return Err(LoaderError::AlreadyInstalled);
    }
    Ok(count)
}
