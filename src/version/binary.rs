//! Platform-tagged builds: `<build>-SERIES-ARCH`

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::version::build::Build;
use crate::version::error::{Layer, VersionError};
use crate::version::scan::{is_token, token};

/// Display sentinel for a series or arch that was not supplied
pub const UNKNOWN: &str = "unknown";

/// The version of a built binary for some platform.
///
/// Empty `series`/`arch` mean "unspecified": parsing maps the literal
/// `unknown` to an empty string and rendering maps it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary {
    pub build: Build,
    /// Targeted OS series (e.g. trusty)
    pub series: String,
    /// Targeted host architecture (e.g. amd64)
    pub arch: String,
}

impl Binary {
    pub fn new(build: Build, series: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            build,
            series: series.into(),
            arch: arch.into(),
        }
    }

    /// Parses a binary version and returns the unconsumed remainder.
    ///
    /// Both platform fields are mandatory: "1.2.3" and "1.2.3--amd64" are
    /// rejected.
    pub fn parse(text: &str) -> Result<(Binary, &str), VersionError> {
        let not_valid = || {
            trace!("rejected binary version {:?}", text);
            VersionError::not_valid(Layer::Binary, text)
        };

        let (build, rest) = Build::parse(text).map_err(|_| not_valid())?;
        let (series, rest) = platform_field(rest).ok_or_else(not_valid)?;
        let (arch, rest) = platform_field(rest).ok_or_else(not_valid)?;

        Ok((Binary::new(build, series, arch), rest))
    }

    pub fn is_zero(&self) -> bool {
        *self == Binary::default()
    }

    /// A valid binary has a valid build and concrete platform fields
    pub fn validate(&self) -> Result<(), VersionError> {
        self.build.validate()?;
        for field in [&self.series, &self.arch] {
            if field.as_str() == UNKNOWN || !is_token(field) {
                return Err(VersionError::not_valid(Layer::Binary, self.to_string()));
            }
        }
        Ok(())
    }

    /// Orders by build only; platform tags carry no ordering weight, so two
    /// unequal binaries may compare as equal.
    pub fn compare(&self, other: &Binary) -> Ordering {
        self.build.compare(&other.build)
    }

    pub fn prev(&self) -> Option<Binary> {
        let build = self.build.prev()?;
        Some(Binary::new(build, self.series.clone(), self.arch.clone()))
    }

    pub fn next(&self, max: Option<u64>) -> Option<Binary> {
        let build = self.build.next(max)?;
        Some(Binary::new(build, self.series.clone(), self.arch.clone()))
    }
}

/// Matches `-TOKEN`, normalizing the `unknown` sentinel to an empty string
fn platform_field(text: &str) -> Option<(&str, &str)> {
    let (field, rest) = token(text.strip_prefix('-')?)?;
    let field = if field == UNKNOWN { "" } else { field };
    Some((field, rest))
}

fn or_unknown(field: &str) -> &str {
    if field.is_empty() { UNKNOWN } else { field }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.build,
            or_unknown(&self.series),
            or_unknown(&self.arch)
        )
    }
}
