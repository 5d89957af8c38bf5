//! Builds of a release: `<release>(.INDEX)?`

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::version::error::{Layer, VersionError};
use crate::version::release::Release;
use crate::version::scan::positive;

/// A build of a software release.
///
/// An index of 0 means "no explicit build" and is omitted when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Build {
    pub release: Release,
    pub index: u64,
}

impl Build {
    pub const fn new(release: Release, index: u64) -> Self {
        Self { release, index }
    }

    /// Parses a build version and returns the unconsumed remainder
    pub fn parse(text: &str) -> Result<(Build, &str), VersionError> {
        let (release, rest) = Release::parse(text).map_err(|_| {
            trace!("rejected build version {:?}", text);
            VersionError::not_valid(Layer::Build, text)
        })?;

        let (index, rest) = rest
            .strip_prefix('.')
            .and_then(positive)
            .unwrap_or((0, rest));

        Ok((Build::new(release, index), rest))
    }

    pub fn is_zero(&self) -> bool {
        *self == Build::default()
    }

    /// A valid build has a valid release and an explicit index
    pub fn validate(&self) -> Result<(), VersionError> {
        self.release.validate()?;
        if self.index == 0 {
            return Err(VersionError::not_valid(Layer::Build, self.to_string()));
        }
        Ok(())
    }

    pub fn compare(&self, other: &Build) -> Ordering {
        self.cmp(other)
    }

    /// Returns `None` once the index would drop below 1
    pub fn prev(&self) -> Option<Build> {
        if self.index <= 1 {
            return None;
        }
        Some(Build::new(self.release, self.index - 1))
    }

    /// Returns `None` once the index reaches `max`; `None` means unbounded
    pub fn next(&self, max: Option<u64>) -> Option<Build> {
        if max.is_some_and(|max| self.index >= max) {
            return None;
        }
        Some(Build::new(self.release, self.index.checked_add(1)?))
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "{}", self.release)
        } else {
            write!(f, "{}.{}", self.release, self.index)
        }
    }
}
