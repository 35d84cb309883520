//! Password evaluator - runs the checks against a configuration snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{all_checks, total_check_count, CheckOutcome, OPTIONAL_CHECKS, REQUIRED_CHECKS};
use crate::config::{Config, ConfigError, ConfigOptions};
use crate::crack_time::{estimate_crack_time, CrackTime};
use crate::meter::{Requirement, StrengthMeter};

/// Delay before an async evaluation starts, so bursts of keystrokes collapse.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Outcome of one evaluation.
///
/// Test indices refer to the concatenation of required then optional checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub errors: Vec<String>,
    pub failed_tests: Vec<usize>,
    pub passed_tests: Vec<usize>,
    pub required_test_errors: Vec<String>,
    pub optional_test_errors: Vec<String>,
    pub is_passphrase: bool,
    pub strong: bool,
    pub optional_tests_passed: usize,
    pub estimated_crack_time: CrackTime,
}

impl EvaluationResult {
    /// Share of all checks that passed, 0 to 100.
    pub fn strength_percent(&self) -> u8 {
        self.meter().percent
    }

    pub fn meter(&self) -> StrengthMeter {
        StrengthMeter::new(self.passed_tests.len(), total_check_count())
    }

    /// Checklist of every check with its met/unmet state.
    ///
    /// Optional checks that were skipped for a passphrase count as met.
    pub fn requirements(&self, config: &Config) -> Vec<Requirement> {
        all_checks()
            .map(|(index, check)| Requirement {
                label: check.id.label(config),
                met: !self.failed_tests.contains(&index),
            })
            .collect()
    }
}

/// Evaluates `password` against a fixed configuration.
pub fn evaluate_with_config(password: &str, config: &Config) -> EvaluationResult {
    let mut errors = Vec::new();
    let mut failed_tests = Vec::new();
    let mut passed_tests = Vec::new();
    let mut required_test_errors = Vec::new();
    let mut optional_test_errors = Vec::new();
    let mut optional_tests_passed = 0;

    for (index, check) in REQUIRED_CHECKS.iter().enumerate() {
        match check.run(password, config) {
            CheckOutcome::Fail(msg) => {
                errors.push(msg.clone());
                required_test_errors.push(msg);
                failed_tests.push(index);
            }
            CheckOutcome::Pass => passed_tests.push(index),
        }
    }

    let mut strong = required_test_errors.is_empty();
    let is_passphrase =
        config.allow_passphrases && password.chars().count() >= config.min_phrase_length;

    if !is_passphrase {
        let offset = REQUIRED_CHECKS.len();
        for (i, check) in OPTIONAL_CHECKS.iter().enumerate() {
            match check.run(password, config) {
                CheckOutcome::Fail(msg) => {
                    errors.push(msg.clone());
                    optional_test_errors.push(msg);
                    failed_tests.push(offset + i);
                }
                CheckOutcome::Pass => {
                    optional_tests_passed += 1;
                    passed_tests.push(offset + i);
                }
            }
        }

        if optional_tests_passed < config.min_optional_tests_to_pass {
            strong = false;
        }
    }

    let estimated_crack_time = estimate_crack_time(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        strong,
        is_passphrase,
        failed = ?failed_tests,
        "password evaluated"
    );

    EvaluationResult {
        errors,
        failed_tests,
        passed_tests,
        required_test_errors,
        optional_test_errors,
        is_passphrase,
        strong,
        optional_tests_passed,
        estimated_crack_time,
    }
}

/// Owns the live configuration and evaluates passwords against it.
///
/// `configure` is the only write path. Each evaluation clones the current
/// `Arc<Config>` on entry, so a concurrent update never affects a run already
/// in progress.
#[derive(Debug, Default)]
pub struct Evaluator {
    config: RwLock<Arc<Config>>,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<Config> {
        let guard = self.config.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Merges recognized options into the live configuration.
    pub fn configure(&self, options: ConfigOptions) {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Config::clone(&guard);
        next.apply(options);
        *guard = Arc::new(next);

        #[cfg(feature = "tracing")]
        tracing::info!(
            min_length = guard.min_length,
            max_length = guard.max_length,
            allow_passphrases = guard.allow_passphrases,
            common_passwords = guard.common_passwords.len(),
            "evaluator configuration updated"
        );
    }

    /// Same as [`Evaluator::configure`] with options given as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the options cannot be parsed; the live
    /// configuration is then left untouched.
    pub fn configure_json(&self, json: &str) -> Result<(), ConfigError> {
        let options = ConfigOptions::from_json(json)?;
        self.configure(options);
        Ok(())
    }

    pub fn evaluate(&self, password: &SecretString) -> EvaluationResult {
        self.evaluate_str(password.expose_secret())
    }

    pub fn evaluate_str(&self, password: &str) -> EvaluationResult {
        let config = self.config();
        evaluate_with_config(password, &config)
    }
}

/// Evaluates after a short debounce and sends the result over `tx`.
///
/// Nothing is sent if `token` is cancelled before evaluation starts.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let result = evaluator.evaluate(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
