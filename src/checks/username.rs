//! Username similarity check.

use super::CheckOutcome;
use crate::config::Config;

/// Fails when the password contains the configured username, ignoring case.
/// An empty username disables the check.
pub fn username_check(password: &str, config: &Config) -> CheckOutcome {
    if config.username.is_empty() {
        return CheckOutcome::Pass;
    }
    if password
        .to_lowercase()
        .contains(&config.username.to_lowercase())
    {
        return CheckOutcome::Fail("The password must not contain your username or email.".to_string());
    }
    CheckOutcome::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_username(name: &str) -> Config {
        Config {
            username: name.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_username_contained() {
        let config = with_username("alice");
        assert!(!username_check("alice2024", &config).is_pass());
        assert!(!username_check("Alice2024", &config).is_pass());
        assert!(!username_check("my-ALICE-pw", &config).is_pass());
    }

    #[test]
    fn test_username_mixed_case_config() {
        let config = with_username("Bob@Example.com");
        assert!(!username_check("xxbob@example.comxx", &config).is_pass());
    }

    #[test]
    fn test_username_absent() {
        assert_eq!(username_check("al1ce2024", &with_username("alice")), CheckOutcome::Pass);
    }

    #[test]
    fn test_empty_username_disables_check() {
        assert_eq!(username_check("anything", &Config::default()), CheckOutcome::Pass);
        assert_eq!(username_check("", &Config::default()), CheckOutcome::Pass);
    }
}
