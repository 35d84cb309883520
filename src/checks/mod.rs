//! Password checks
//!
//! Required checks run for every password; optional checks cover character
//! variety and are skipped for passphrases.

mod denylist;
mod length;
mod repetition;
mod username;
mod variety;

use std::fmt;

use crate::config::Config;

pub use denylist::common_password_check;
pub use length::{max_length_check, min_length_check};
pub use repetition::repeated_chars_check;
pub(crate) use repetition::has_repeated_run;
pub use username::username_check;
pub use variety::{digit_check, lowercase_check, special_check, uppercase_check};
pub(crate) use variety::{has_digit, has_lowercase, has_special, has_uppercase};

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail(String),
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckOutcome::Pass => None,
            CheckOutcome::Fail(msg) => Some(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckId {
    MinLength,
    MaxLength,
    RepeatedChars,
    CommonPassword,
    Username,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CheckId {
    /// Short requirement text shown next to a met/unmet marker.
    pub fn label(self, config: &Config) -> String {
        match self {
            CheckId::MinLength => format!("Minimum {} characters", config.min_length),
            CheckId::MaxLength => format!("Maximum {} characters", config.max_length),
            CheckId::RepeatedChars => "No repeated sequences".to_string(),
            CheckId::CommonPassword => "Not in common passwords".to_string(),
            CheckId::Username => "Does not contain username".to_string(),
            CheckId::Lowercase => "Contains lowercase letter".to_string(),
            CheckId::Uppercase => "Contains uppercase letter".to_string(),
            CheckId::Digit => "Contains number".to_string(),
            CheckId::Special => "Contains special character".to_string(),
        }
    }
}

/// A named predicate over a password and the active configuration.
#[derive(Clone, Copy)]
pub struct Check {
    pub id: CheckId,
    run: fn(&str, &Config) -> CheckOutcome,
}

impl Check {
    const fn new(id: CheckId, run: fn(&str, &Config) -> CheckOutcome) -> Self {
        Self { id, run }
    }

    pub fn run(&self, password: &str, config: &Config) -> CheckOutcome {
        (self.run)(password, config)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("id", &self.id).finish()
    }
}

pub static REQUIRED_CHECKS: [Check; 5] = [
    Check::new(CheckId::MinLength, min_length_check),
    Check::new(CheckId::MaxLength, max_length_check),
    Check::new(CheckId::RepeatedChars, repeated_chars_check),
    Check::new(CheckId::CommonPassword, common_password_check),
    Check::new(CheckId::Username, username_check),
];

pub static OPTIONAL_CHECKS: [Check; 4] = [
    Check::new(CheckId::Lowercase, lowercase_check),
    Check::new(CheckId::Uppercase, uppercase_check),
    Check::new(CheckId::Digit, digit_check),
    Check::new(CheckId::Special, special_check),
];

pub fn required_check_count() -> usize {
    REQUIRED_CHECKS.len()
}

pub fn optional_check_count() -> usize {
    OPTIONAL_CHECKS.len()
}

pub fn total_check_count() -> usize {
    REQUIRED_CHECKS.len() + OPTIONAL_CHECKS.len()
}

/// Iterates over required then optional checks with their absolute index.
pub fn all_checks() -> impl Iterator<Item = (usize, &'static Check)> {
    REQUIRED_CHECKS.iter().chain(OPTIONAL_CHECKS.iter()).enumerate()
}
