//! Password policy evaluator - ordered, fail-fast rule evaluation.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::config::PolicyConfig;
use crate::sections::{Section, blacklist_section, character_variety_section, length_section};
use crate::verdict::Verdict;

/// Sections in evaluation order. The first rejection wins.
const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("blacklist", blacklist_section),
];

static DEFAULT_POLICY: RwLock<Option<Arc<PolicyEngine>>> = RwLock::new(None);

static REFERENCE_POLICY: LazyLock<Arc<PolicyEngine>> =
    LazyLock::new(|| Arc::new(PolicyEngine::new(PolicyConfig::default())));

/// Evaluates `password` against `config`.
///
/// Pure: never panics, never logs the password, and returns the same
/// verdict for the same inputs.
pub fn evaluate(password: &str, config: &PolicyConfig) -> Verdict {
    for (section_name, section_fn) in SECTIONS {
        if let Err(rejection) = section_fn(password, config) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                section = section_name,
                reason = rejection.reason.code(),
                "Password rejected"
            );
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            return Verdict::rejected(rejection);
        }
    }
    Verdict::accepted()
}

/// A validated policy ready to evaluate candidates.
///
/// Immutable; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyEngine {
    config: PolicyConfig,
}

impl PolicyEngine {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn evaluate(&self, password: &SecretString) -> Verdict {
        evaluate(password.expose_secret(), &self.config)
    }
}

/// Installs the process-wide policy used by [`evaluate_password_strength`].
///
/// Call once at startup. The first install wins: later calls leave the
/// installed policy alone and return `false`.
pub fn install_default_policy(config: PolicyConfig) -> bool {
    let mut guard = DEFAULT_POLICY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if guard.is_some() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Default password policy already installed; ignoring new policy");
        return false;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        min_length = config.min_length(),
        max_length = config.max_length(),
        blacklist_terms = config.blacklist().len(),
        "Default password policy installed"
    );

    *guard = Some(Arc::new(PolicyEngine::new(config)));
    true
}

/// Returns the installed policy, or the reference policy if none was installed.
pub fn default_policy() -> Arc<PolicyEngine> {
    let guard = DEFAULT_POLICY
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(engine) => Arc::clone(engine),
        None => Arc::clone(&REFERENCE_POLICY),
    }
}

/// Evaluates password strength against the process-wide default policy.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `Verdict` naming the first rule that failed, if any.
pub fn evaluate_password_strength(password: &SecretString) -> Verdict {
    default_policy().evaluate(password)
}

/// Async version that sends the verdict via channel.
///
/// Adds no timeout or cancellation of its own.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(password: &SecretString, tx: mpsc::Sender<Verdict>) {
    let verdict = evaluate_password_strength(password);

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

/// Clears the installed default policy for testing purposes.
#[cfg(test)]
pub(crate) fn reset_default_policy_for_testing() {
    let mut guard = DEFAULT_POLICY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_evaluate_password_strength_tx() {
        reset_default_policy_for_testing();
        let (tx, mut rx) = mpsc::channel(1);

        let pwd = SecretString::new("Xk9!mQ2$pL".to_string().into());

        evaluate_password_strength_tx(&pwd, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert!(verdict.is_accepted());
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_password_strength_tx_closed_channel() {
        reset_default_policy_for_testing();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("abc".to_string().into());
        evaluate_password_strength_tx(&pwd, tx).await;
    }
}
