//! Character variety checks - lowercase, uppercase, digits, special chars.

use super::CheckOutcome;
use crate::config::Config;

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[A-Za-z0-9]`, including non-ASCII letters.
pub(crate) fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn require(present: bool, message: &str) -> CheckOutcome {
    if present {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail(message.to_string())
    }
}

pub fn lowercase_check(password: &str, _config: &Config) -> CheckOutcome {
    require(
        has_lowercase(password),
        "The password must contain at least one lowercase letter.",
    )
}

pub fn uppercase_check(password: &str, _config: &Config) -> CheckOutcome {
    require(
        has_uppercase(password),
        "The password must contain at least one uppercase letter.",
    )
}

pub fn digit_check(password: &str, _config: &Config) -> CheckOutcome {
    require(has_digit(password), "The password must contain at least one number.")
}

pub fn special_check(password: &str, _config: &Config) -> CheckOutcome {
    require(
        has_special(password),
        "The password must contain at least one special character.",
    )
}
