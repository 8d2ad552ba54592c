//! Version tokens.
//!
//! A version is a dot-separated list of non-negative integers (`9`, `10`,
//! `1.4`, `9.0.1`). Ordering, equality and hashing use the numeric
//! components with trailing zeros dropped, so `9` and `9.0` are the same
//! version. The token as written is kept for display.

use crate::errors::{Result, SinceError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed version token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    token: String,
    components: Vec<u64>,
}

impl Version {
    /// Parse a version token
    ///
    /// # Errors
    ///
    /// Returns `SinceError::InvalidVersion` for empty tokens, empty
    /// components (`9..1`) or non-numeric components.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(invalid(token, "empty version token"));
        }

        let mut components = Vec::new();
        for part in trimmed.split('.') {
            if part.is_empty() {
                return Err(invalid(token, "empty version component"));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| invalid(token, &format!("'{}' is not a number", part)))?;
            components.push(value);
        }

        Ok(Self {
            token: trimmed.to_string(),
            components,
        })
    }

    /// The token as written (trimmed)
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// All numeric components, including trailing zeros
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Components with trailing zeros removed
    fn significant(&self) -> &[u64] {
        let end = self
            .components
            .iter()
            .rposition(|c| *c != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.components[..end]
    }

    /// Canonical identifier: significant components joined by dots
    /// (`"9.0"` becomes `"9"`, `"0.0"` becomes `"0"`).
    pub fn canonical(&self) -> String {
        let significant = self.significant();
        if significant.is_empty() {
            return "0".to_string();
        }
        significant
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn invalid(token: &str, reason: &str) -> SinceError {
    SinceError::InvalidVersion {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

impl FromStr for Version {
    type Err = SinceError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = SinceError;

    fn try_from(value: String) -> Result<Self> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.token
    }
}
