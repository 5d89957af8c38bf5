//! Standalone semantic versions (`x.y.z-pre+build`, see <https://semver.org/>)
//!
//! Shares only the numeric grammar with the layered versions; the release,
//! build and platform layers do not apply here.

use std::fmt;
use std::str::FromStr;

use crate::version::error::{Layer, VersionError};
use crate::version::number::Number;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemVer {
    pub number: Number,
    /// Dot-separated pre-release identifiers (after `-`)
    pub pre_release: Vec<String>,
    /// Dot-separated build metadata identifiers (after `+`)
    pub build: Vec<String>,
}

impl SemVer {
    /// Parses a complete semantic version. Partial numbers and leftover text
    /// are rejected.
    pub fn parse(text: &str) -> Result<SemVer, VersionError> {
        let not_valid = || VersionError::not_valid(Layer::SemVer, text);

        let scanned = Number::scan(text).map_err(|_| not_valid())?;
        if scanned.fields < 3 {
            return Err(not_valid());
        }

        let (rest, build) = match scanned.rest.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (scanned.rest, None),
        };
        let pre_release = match rest {
            "" => Vec::new(),
            _ => {
                let pre = rest.strip_prefix('-').ok_or_else(not_valid)?;
                identifiers(pre).ok_or_else(not_valid)?
            }
        };
        let build = match build {
            Some(build) => identifiers(build).ok_or_else(not_valid)?,
            None => Vec::new(),
        };

        Ok(SemVer {
            number: scanned.number,
            pre_release,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.number.major
    }

    pub fn minor(&self) -> u64 {
        self.number.minor
    }

    pub fn patch(&self) -> u64 {
        self.number.micro
    }

    /// Checks that the identifiers would render to a parseable version
    pub fn validate(&self) -> Result<(), VersionError> {
        let well_formed = self
            .pre_release
            .iter()
            .chain(&self.build)
            .all(|id| is_identifier(id));
        if !well_formed {
            return Err(VersionError::not_valid(Layer::SemVer, self.to_string()));
        }
        Ok(())
    }

    /// Converts into a [`semver::Version`] for use with the semver crate
    pub fn to_semver(&self) -> Result<semver::Version, VersionError> {
        let not_valid = || VersionError::not_valid(Layer::SemVer, self.to_string());
        let pre = semver::Prerelease::new(&self.pre_release.join(".")).map_err(|_| not_valid())?;
        let build =
            semver::BuildMetadata::new(&self.build.join(".")).map_err(|_| not_valid())?;
        Ok(semver::Version {
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
            pre,
            build,
        })
    }
}

/// Splits `[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*`
fn identifiers(text: &str) -> Option<Vec<String>> {
    text.split('.')
        .map(|id| is_identifier(id).then(|| id.to_string()))
        .collect()
}

fn is_identifier(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemVer::parse(s)
    }
}

impl From<Number> for semver::Version {
    fn from(number: Number) -> Self {
        semver::Version::new(number.major, number.minor, number.micro)
    }
}
