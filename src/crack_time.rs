//! Brute-force crack time estimate.
//!
//! Order-of-magnitude feedback only: the guess space is the size of the
//! character classes present raised to the password length, tried at a fixed
//! rate of one billion guesses per second.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::checks::{has_digit, has_lowercase, has_special, has_uppercase};

pub const GUESSES_PER_SECOND: f64 = 1e9;

const LOWERCASE_SPACE: u32 = 26;
const UPPERCASE_SPACE: u32 = 26;
const DIGIT_SPACE: u32 = 10;
const SPECIAL_SPACE: u32 = 30;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

const EXPONENT_THRESHOLD: f64 = 1e21;

/// Estimated time band, ordered from fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum CrackTime {
    Instant,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    /// Rounded years; may be infinite for very long, varied passwords.
    Years(f64),
}

impl CrackTime {
    /// Buckets a duration in seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_nan() || seconds < MINUTE {
            CrackTime::Instant
        } else if seconds < HOUR {
            CrackTime::Minutes((seconds / MINUTE).round() as u64)
        } else if seconds < DAY {
            CrackTime::Hours((seconds / HOUR).round() as u64)
        } else if seconds < YEAR {
            CrackTime::Days((seconds / DAY).round() as u64)
        } else {
            CrackTime::Years((seconds / YEAR).round())
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instant => write!(f, "Instantly cracked!"),
            CrackTime::Minutes(n) => write!(f, "Crack time: {} minutes", n),
            CrackTime::Hours(n) => write!(f, "Crack time: {} hours", n),
            CrackTime::Days(n) => write!(f, "Crack time: {} days", n),
            CrackTime::Years(n) => write!(f, "Crack time: {} years", format_count(*n)),
        }
    }
}

/// Whole-number count, switching to `1e+25` style from 1e21 up.
fn format_count(n: f64) -> String {
    if !n.is_finite() {
        return "Infinity".to_string();
    }
    if n.abs() < EXPONENT_THRESHOLD {
        return format!("{:.0}", n);
    }
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

impl Serialize for CrackTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sum of the class sizes present in the password.
pub fn character_space(password: &str) -> u32 {
    let mut space = 0;
    if has_lowercase(password) {
        space += LOWERCASE_SPACE;
    }
    if has_uppercase(password) {
        space += UPPERCASE_SPACE;
    }
    if has_digit(password) {
        space += DIGIT_SPACE;
    }
    if has_special(password) {
        space += SPECIAL_SPACE;
    }
    space
}

/// Seconds to exhaust the guess space. Zero for an empty password.
pub fn seconds_to_crack(password: &str) -> f64 {
    let space = character_space(password);
    if space == 0 {
        return 0.0;
    }
    let entropy = password.chars().count() as f64 * f64::from(space).log2();
    entropy.exp2() / GUESSES_PER_SECOND
}

pub fn estimate_crack_time(password: &str) -> CrackTime {
    CrackTime::from_seconds(seconds_to_crack(password))
}
