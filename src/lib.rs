//! Rule-based password policy evaluation
//!
//! Runs a fixed battery of required checks (length bounds, repeated
//! characters, common passwords, username similarity) and optional
//! character-variety checks, decides whether the password is strong and
//! estimates how long a brute-force attack would take. Long inputs can be
//! accepted as passphrases, which skips the variety checks.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_COMMON_PASSWORDS`: Custom path to a common password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{ConfigOptions, Evaluator};
//! use secrecy::SecretString;
//!
//! let evaluator = Evaluator::default();
//! evaluator.configure(ConfigOptions::default().username("alice"));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluator.evaluate(&password);
//!
//! println!("Strong: {}", result.strong);
//! println!("Errors: {:?}", result.errors);
//! println!("{} ({}%)", result.estimated_crack_time, result.strength_percent());
//! ```

mod checks;
mod config;
mod crack_time;
mod denylist;
mod evaluator;
mod meter;

// Public API
pub use checks::{
    optional_check_count, required_check_count, total_check_count, Check, CheckId, CheckOutcome,
    OPTIONAL_CHECKS, REQUIRED_CHECKS,
};
pub use config::{Config, ConfigError, ConfigOptions};
pub use crack_time::{
    character_space, estimate_crack_time, seconds_to_crack, CrackTime, GUESSES_PER_SECOND,
};
pub use denylist::{
    common_passwords_path, load_common_passwords, CommonPasswords, DenylistError,
    COMMON_PASSWORDS_PATH_ENV,
};
pub use evaluator::{evaluate_with_config, EvaluationResult, Evaluator};
pub use meter::{
    strength_percent, QuickStrength, Requirement, StrengthColor, StrengthLevel, StrengthMeter,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, EVALUATION_DEBOUNCE};
