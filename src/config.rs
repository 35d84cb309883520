//! Evaluator configuration and option merging.

use serde::Deserialize;
use thiserror::Error;

use crate::denylist::CommonPasswords;

pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_MIN_LENGTH: usize = 10;
pub const DEFAULT_MIN_PHRASE_LENGTH: usize = 20;
pub const DEFAULT_MIN_OPTIONAL_TESTS_TO_PASS: usize = 4;

const DEFAULT_COMMON_PASSWORDS: [&str; 8] = [
    "123456",
    "password",
    "123456789",
    "qwerty",
    "12345",
    "12345678",
    "111111",
    "123123",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Settings read by every check.
///
/// Values are never validated: `min_length > max_length` is accepted as-is and
/// simply makes every password fail one of the two length checks.
///
/// Lengths are counted in Unicode scalar values (`char`s), not UTF-16 code
/// units as in a browser: an emoji counts as one character here, where
/// JavaScript's `length` counts two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub allow_passphrases: bool,
    pub max_length: usize,
    pub min_length: usize,
    pub min_phrase_length: usize,
    pub min_optional_tests_to_pass: usize,
    pub common_passwords: CommonPasswords,
    /// Account name or email; empty disables the similarity check.
    pub username: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_passphrases: true,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            min_phrase_length: DEFAULT_MIN_PHRASE_LENGTH,
            min_optional_tests_to_pass: DEFAULT_MIN_OPTIONAL_TESTS_TO_PASS,
            common_passwords: CommonPasswords::from_entries(DEFAULT_COMMON_PASSWORDS),
            username: String::new(),
        }
    }
}

impl Config {
    /// Merges the options that are present. The denylist is replaced, not merged.
    pub fn apply(&mut self, options: ConfigOptions) {
        let ConfigOptions {
            allow_passphrases,
            max_length,
            min_length,
            min_phrase_length,
            min_optional_tests_to_pass,
            common_passwords,
            username,
        } = options;

        if let Some(v) = allow_passphrases {
            self.allow_passphrases = v;
        }
        if let Some(v) = max_length {
            self.max_length = v;
        }
        if let Some(v) = min_length {
            self.min_length = v;
        }
        if let Some(v) = min_phrase_length {
            self.min_phrase_length = v;
        }
        if let Some(v) = min_optional_tests_to_pass {
            self.min_optional_tests_to_pass = v;
        }
        if let Some(v) = common_passwords {
            self.common_passwords = v;
        }
        if let Some(v) = username {
            self.username = v;
        }
    }

    /// Returns a copy with `options` applied.
    pub fn with_options(mut self, options: ConfigOptions) -> Self {
        self.apply(options);
        self
    }
}

/// A partial configuration update.
///
/// Deserializes from the camelCase option names used by the UI surfaces
/// (`allowPassphrases`, `minLength`, ...). Unrecognized keys are ignored.
///
/// A recognized key set to `null` is treated like an absent key and leaves the
/// current value in place. To disable the username check, send an empty
/// string (`{"username": ""}`), not `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    pub allow_passphrases: Option<bool>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub min_phrase_length: Option<usize>,
    pub min_optional_tests_to_pass: Option<usize>,
    pub common_passwords: Option<CommonPasswords>,
    pub username: Option<String>,
}

impl ConfigOptions {
    /// Parses a JSON object of options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if the input is not a JSON object
    /// or a recognized option has the wrong type. Unknown keys never error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn allow_passphrases(mut self, allow: bool) -> Self {
        self.allow_passphrases = Some(allow);
        self
    }

    pub fn length_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn min_phrase_length(mut self, len: usize) -> Self {
        self.min_phrase_length = Some(len);
        self
    }

    pub fn min_optional_tests_to_pass(mut self, count: usize) -> Self {
        self.min_optional_tests_to_pass = Some(count);
        self
    }

    pub fn common_passwords(mut self, list: CommonPasswords) -> Self {
        self.common_passwords = Some(list);
        self
    }
}
