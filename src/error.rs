//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Raised while building a [`PolicyConfig`](crate::PolicyConfig).
///
/// A policy that fails to build must stop startup; rejecting a weak
/// candidate is never reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid policy configuration: {0}")]
    InvalidPolicyConfiguration(String),
}

impl PolicyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PolicyError::InvalidPolicyConfiguration(reason.into())
    }
}

/// Raised when a wire value does not name any member of a classification family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Unknown {family} value: {value:?}")]
    UnknownClassificationValue { family: &'static str, value: String },
}

/// Errors from the startup loader (environment, blacklist files, install).
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
    #[error("A default password policy is already installed")]
    AlreadyInstalled,
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
