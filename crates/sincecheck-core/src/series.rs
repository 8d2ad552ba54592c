//! Ordered series of versions to analyze.

use crate::errors::{Result, SinceError};
use crate::model::version::Version;

/// Strictly increasing analyzed versions plus the designated verify version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSeries {
    versions: Vec<Version>,
    verify: Version,
}

impl VersionSeries {
    /// Build a series from parsed versions
    ///
    /// # Errors
    ///
    /// - `EmptyVersionSeries`: no versions
    /// - `VersionSeriesNotIncreasing`: a version is not greater than its predecessor
    /// - `VerifyVersionPrecedesSeries`: `verify` sorts before the last analyzed version
    pub fn new(versions: Vec<Version>, verify: Version) -> Result<Self> {
        let last = versions.last().ok_or(SinceError::EmptyVersionSeries)?;

        for pair in versions.windows(2) {
            if pair[1] <= pair[0] {
                return Err(SinceError::VersionSeriesNotIncreasing {
                    previous: pair[0].to_string(),
                    next: pair[1].to_string(),
                });
            }
        }

        if verify < *last {
            return Err(SinceError::VerifyVersionPrecedesSeries {
                verify: verify.to_string(),
                last: last.to_string(),
            });
        }

        Ok(Self { versions, verify })
    }

    /// Parse tokens into a series; the verify version defaults to the last
    /// analyzed version.
    ///
    /// # Errors
    ///
    /// `InvalidVersion` for unparseable tokens, plus everything [`new`](Self::new) rejects.
    pub fn parse<S: AsRef<str>>(tokens: &[S], verify: Option<&str>) -> Result<Self> {
        let versions = tokens
            .iter()
            .map(|t| Version::parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let verify = match verify {
            Some(token) => Version::parse(token)?,
            None => versions
                .last()
                .cloned()
                .ok_or(SinceError::EmptyVersionSeries)?,
        };

        Self::new(versions, verify)
    }

    /// Analyzed versions in ascending order
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn verify(&self) -> &Version {
        &self.verify
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false for a constructed series; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
