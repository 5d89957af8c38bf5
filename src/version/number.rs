//! Three-field `MAJOR.MINOR.MICRO` version numbers

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::version::error::{Layer, VersionError};
use crate::version::scan::numeral;

/// A simple 3-part software/API version.
///
/// The all-zero value is the "unset" sentinel: it parses and formats like any
/// other number but fails [`Number::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    /// Changes with a break in compatibility
    pub major: u64,
    /// Changes when features are added
    pub minor: u64,
    /// Changes with bug fixes (the "patch" level)
    pub micro: u64,
}

/// Result of scanning the numeric prefix of a version string
pub(crate) struct Scanned<'a> {
    pub number: Number,
    /// How many of the three fields were present in the text
    pub fields: usize,
    pub rest: &'a str,
}

impl Number {
    pub const fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Parses a complete or abbreviated version number and returns the
    /// unconsumed remainder:
    ///
    /// - "2.3.1" -> Number(2, 3, 1)
    /// - "2.3"   -> Number(2, 3, 0)
    /// - "2"     -> Number(2, 0, 0)
    pub fn parse(text: &str) -> Result<(Number, &str), VersionError> {
        let scanned = Self::scan(text)?;
        Ok((scanned.number, scanned.rest))
    }

    pub(crate) fn scan(text: &str) -> Result<Scanned<'_>, VersionError> {
        let not_valid = || {
            trace!("rejected number version {:?}", text);
            VersionError::not_valid(Layer::Number, text)
        };

        let (major, rest) = numeral(text).ok_or_else(not_valid)?;
        let mut number = Number::new(major, 0, 0);
        let mut fields = 1;
        let mut rest = rest;

        if let Some((minor, after)) = rest.strip_prefix('.').and_then(numeral) {
            number.minor = minor;
            fields = 2;
            rest = after;
            if let Some((micro, after)) = rest.strip_prefix('.').and_then(numeral) {
                number.micro = micro;
                fields = 3;
                rest = after;
            }
        }

        // "0.2." and "2..1" are malformed numbers, not a number plus leftovers
        if fields < 3 && rest.starts_with('.') {
            return Err(not_valid());
        }

        Ok(Scanned {
            number,
            fields,
            rest,
        })
    }

    /// Renders the "feature" version (first two fields only)
    pub fn feature(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn is_zero(&self) -> bool {
        *self == Number::default()
    }

    pub fn validate(&self) -> Result<(), VersionError> {
        if self.is_zero() {
            return Err(VersionError::not_valid(Layer::Number, self.to_string()));
        }
        Ok(())
    }

    pub fn compare(&self, other: &Number) -> Ordering {
        self.cmp(other)
    }

    /// Steps back one number, odometer style. A field that wraps below zero
    /// resets to the matching field of `max`. Returns `None` at 0.0.0.
    pub fn prev(&self, max: &Number) -> Option<Number> {
        let Number {
            mut major,
            mut minor,
            mut micro,
        } = *self;

        if micro > 0 {
            micro -= 1;
        } else {
            if minor > 0 {
                minor -= 1;
            } else {
                major = major.checked_sub(1)?;
                minor = max.minor;
            }
            micro = max.micro;
        }
        Some(Number::new(major, minor, micro))
    }

    /// Steps forward one number. A field that reaches its ceiling in `max`
    /// carries into the next field and resets to zero. Returns `None` once the
    /// major field would pass `max.major`.
    pub fn next(&self, max: &Number) -> Option<Number> {
        if self.micro < max.micro {
            Some(Number::new(self.major, self.minor, self.micro + 1))
        } else if self.minor < max.minor {
            Some(Number::new(self.major, self.minor + 1, 0))
        } else if self.major < max.major {
            Some(Number::new(self.major + 1, 0, 0))
        } else {
            None
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
