//! Length checks - enforce the configured minimum and maximum.

use super::CheckOutcome;
use crate::config::Config;

/// Fails when the password has fewer than `min_length` characters.
///
/// Characters are Unicode scalar values, so `"😀"` has length 1.
pub fn min_length_check(password: &str, config: &Config) -> CheckOutcome {
    if password.chars().count() < config.min_length {
        return CheckOutcome::Fail(format!(
            "The password must be at least {} characters long.",
            config.min_length
        ));
    }
    CheckOutcome::Pass
}

/// Fails when the password has more than `max_length` characters.
pub fn max_length_check(password: &str, config: &Config) -> CheckOutcome {
    if password.chars().count() > config.max_length {
        return CheckOutcome::Fail(format!(
            "The password must be fewer than {} characters.",
            config.max_length
        ));
    }
    CheckOutcome::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        let result = min_length_check("Short1!", &Config::default());
        assert_eq!(
            result,
            CheckOutcome::Fail("The password must be at least 10 characters long.".to_string())
        );
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        assert_eq!(min_length_check("1234567890", &Config::default()), CheckOutcome::Pass);
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 9 chars, 18 bytes
        assert!(!min_length_check("ééééééééé", &Config::default()).is_pass());
    }

    #[test]
    fn test_astral_chars_count_once() {
        let config = Config {
            min_length: 9,
            ..Config::default()
        };
        // 9 chars, 14 UTF-16 code units
        assert!(!min_length_check("😀😀😀😀😀Ab1!", &Config::default()).is_pass());
        assert_eq!(min_length_check("😀😀😀😀😀Ab1!", &config), CheckOutcome::Pass);
    }

    #[test]
    fn test_max_length() {
        let config = Config {
            max_length: 12,
            ..Config::default()
        };
        assert_eq!(max_length_check("abcdefghijkl", &config), CheckOutcome::Pass);
        assert_eq!(
            max_length_check("abcdefghijklm", &config),
            CheckOutcome::Fail("The password must be fewer than 12 characters.".to_string())
        );
    }

    #[test]
    fn test_inverted_bounds_always_fail_one() {
        let config = Config {
            min_length: 20,
            max_length: 5,
            ..Config::default()
        };
        for pwd in ["abc", "abcdefghij", "abcdefghijklmnopqrstuvwxyz"] {
            let min = min_length_check(pwd, &config);
            let max = max_length_check(pwd, &config);
            assert!(!min.is_pass() || !max.is_pass(), "{pwd} passed both bounds");
        }
    }
}
