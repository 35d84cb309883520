//! Common-password check.

use super::CheckOutcome;
use crate::config::Config;

/// Fails when the lowercased password is exactly on the denylist.
pub fn common_password_check(password: &str, config: &Config) -> CheckOutcome {
    if config.common_passwords.contains(password) {
        return CheckOutcome::Fail("The password is too common and easy to guess.".to_string());
    }
    CheckOutcome::Pass
}
