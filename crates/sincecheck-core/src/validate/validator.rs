use crate::compare::{compute_first_appearance, FirstAppearance};
use crate::errors::{Result, SinceError};
use crate::model::snapshot::Snapshot;
use crate::normalize::VersionNormalization;
use crate::series::VersionSeries;
use crate::validate::diagnostic::{Diagnostic, MISSING_SINCE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Expected version for verify-snapshot elements never seen in the series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnseenPolicy {
    /// Treat the element as introduced at the verify version
    #[default]
    VerifyVersion,
    /// Do not check the element
    Skip,
}

/// Treatment of elements without their own since tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTagPolicy {
    /// Report the element with a `<missing>` declared value
    #[default]
    Report,
    /// Use the nearest enclosing element's tag; report `<missing>` only
    /// when no enclosing element declares one
    InheritEnclosing,
}

impl FromStr for UnseenPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verify-version" | "verify_version" => Ok(UnseenPolicy::VerifyVersion),
            "skip" => Ok(UnseenPolicy::Skip),
            other => Err(format!(
                "unknown unseen policy '{}' (expected verify-version or skip)",
                other
            )),
        }
    }
}

impl FromStr for MissingTagPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(MissingTagPolicy::Report),
            "inherit-enclosing" | "inherit_enclosing" => Ok(MissingTagPolicy::InheritEnclosing),
            other => Err(format!(
                "unknown missing-tag policy '{}' (expected report or inherit-enclosing)",
                other
            )),
        }
    }
}

/// Knobs of a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub normalization: VersionNormalization,
    pub unseen: UnseenPolicy,
    pub missing_tags: MissingTagPolicy,
}

/// Check every element of `verify` against `first`.
///
/// Elements are visited in ascending key order, so the returned list is
/// ordered by qualified path and identical inputs give identical output.
pub fn validate_since_tags(
    first: &FirstAppearance,
    verify: &Snapshot,
    options: &ValidationOptions,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for element in verify.elements() {
        let expected = match (first.get(&element.key), options.unseen) {
            (Some(version), _) => version,
            (None, UnseenPolicy::VerifyVersion) => verify.version(),
            (None, UnseenPolicy::Skip) => continue,
        };

        let declared = match options.missing_tags {
            MissingTagPolicy::Report => element.declared_since.as_deref(),
            MissingTagPolicy::InheritEnclosing => verify.effective_since(&element.key),
        };

        match declared {
            None => diagnostics.push(Diagnostic::new(
                &element.key,
                MISSING_SINCE,
                expected.as_str(),
            )),
            Some(token) if !options.normalization.matches(token, expected) => diagnostics.push(
                Diagnostic::new(&element.key, token.trim(), expected.as_str()),
            ),
            Some(_) => {}
        }
    }

    diagnostics
}

/// Full check over an already-loaded series.
///
/// `snapshots` must hold exactly one snapshot per analyzed version, in
/// series order; `verify` must be labelled with the series' verify version.
///
/// # Errors
///
/// - `SnapshotVersionMismatch`: a snapshot does not sit at its series slot
/// - `ModuleMismatch`: the verify snapshot describes another module
/// - everything [`compute_first_appearance`] rejects
pub fn check_since_tags(
    series: &VersionSeries,
    snapshots: &[Snapshot],
    verify: &Snapshot,
    options: &ValidationOptions,
) -> Result<Vec<Diagnostic>> {
    if snapshots.len() != series.len() {
        return Err(SinceError::SnapshotVersionMismatch {
            expected: format!("{} snapshots", series.len()),
            found: format!("{} snapshots", snapshots.len()),
        });
    }

    for (expected, snapshot) in series.versions().iter().zip(snapshots) {
        if snapshot.version() != expected {
            return Err(SinceError::SnapshotVersionMismatch {
                expected: expected.to_string(),
                found: snapshot.version().to_string(),
            });
        }
    }

    if verify.version() != series.verify() {
        return Err(SinceError::SnapshotVersionMismatch {
            expected: series.verify().to_string(),
            found: verify.version().to_string(),
        });
    }

    let first = compute_first_appearance(snapshots)?;

    if let Some(analyzed) = snapshots.first() {
        if analyzed.module() != verify.module() {
            return Err(SinceError::ModuleMismatch {
                expected: analyzed.module().to_string(),
                found: verify.module().to_string(),
            });
        }
    }

    Ok(validate_since_tags(&first, verify, options))
}
