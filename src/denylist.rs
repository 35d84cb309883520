//! Common-password denylist
//!
//! Holds the list of passwords rejected outright and loads it from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const COMMON_PASSWORDS_PATH_ENV: &str = "PWD_POLICY_COMMON_PASSWORDS";
const DEFAULT_COMMON_PASSWORDS_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Set of lowercased common passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct CommonPasswords(HashSet<String>);

impl CommonPasswords {
    /// Builds a denylist from entries kept as given apart from lowercasing.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(entries.into_iter().map(|e| e.as_ref().to_lowercase()).collect())
    }

    /// Reads a denylist with one password per line.
    ///
    /// Lines are trimmed and blank lines skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list not found: {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::from_entries(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list is empty: {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Exact match of the lowercased password against the list.
    pub fn contains(&self, password: &str) -> bool {
        self.0.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CommonPasswords {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_COMMON_PASSWORDS`
/// 2. Default path `./assets/common-passwords.txt`
pub fn common_passwords_path() -> PathBuf {
    std::env::var(COMMON_PASSWORDS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PASSWORDS_PATH))
}

/// Loads the denylist from [`common_passwords_path`].
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_POLICY_COMMON_PASSWORDS", "/etc/myapp/common.txt"); }
/// let list = pwd_policy::load_common_passwords()?;
/// evaluator.configure(ConfigOptions::default().common_passwords(list));
/// ```
pub fn load_common_passwords() -> Result<CommonPasswords, DenylistError> {
    CommonPasswords::from_path(common_passwords_path())
}
