//! Equality rules for declared since tags.
//!
//! A declared tag is free text written by a developer; the expected value
//! is a version from the analyzed series. [`VersionNormalization`] decides
//! when the two name the same release.

use crate::model::version::Version;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rule used to compare a declared since tag with an expected version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionNormalization {
    /// Trimmed tokens must match byte for byte (`9` != `9.0`)
    Exact,
    /// Tokens are parsed and trailing zero components dropped (`9` == `9.0`)
    #[default]
    Canonical,
    /// `Canonical`, plus legacy `1.N` (N >= 2) is read as `N` (`1.8` == `8`)
    LegacyPrefix,
}

impl VersionNormalization {
    /// Normalize a token to the identifier compared under this rule.
    ///
    /// Returns `None` when the token cannot be normalized (unparseable
    /// under `Canonical` or `LegacyPrefix`).
    pub fn normalize(&self, token: &str) -> Option<String> {
        match self {
            VersionNormalization::Exact => Some(token.trim().to_string()),
            VersionNormalization::Canonical => Version::parse(token).ok().map(|v| v.canonical()),
            VersionNormalization::LegacyPrefix => {
                let version = Version::parse(token).ok()?;
                let components = version.components();
                if components.len() >= 2 && components[0] == 1 && components[1] >= 2 {
                    let rest: Vec<String> = components[1..].iter().map(u64::to_string).collect();
                    Version::parse(&rest.join(".")).ok().map(|v| v.canonical())
                } else {
                    Some(version.canonical())
                }
            }
        }
    }

    /// Whether `declared` names the same release as `expected`.
    ///
    /// A declared token that cannot be normalized never matches.
    pub fn matches(&self, declared: &str, expected: &Version) -> bool {
        match (self.normalize(declared), self.normalize(expected.as_str())) {
            (Some(d), Some(e)) => d == e,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionNormalization::Exact => "exact",
            VersionNormalization::Canonical => "canonical",
            VersionNormalization::LegacyPrefix => "legacy-prefix",
        }
    }
}

impl FromStr for VersionNormalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(VersionNormalization::Exact),
            "canonical" => Ok(VersionNormalization::Canonical),
            "legacy-prefix" | "legacy_prefix" => Ok(VersionNormalization::LegacyPrefix),
            other => Err(format!(
                "unknown normalization '{}' (expected exact, canonical or legacy-prefix)",
                other
            )),
        }
    }
}

impl std::fmt::Display for VersionNormalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
