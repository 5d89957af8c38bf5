//! Release versions: a [`Number`] plus a release level and serial
//!
//! Supported suffixes:
//! - `2.3.1-dev`, `2.3.1-final` (singleton levels, no serial)
//! - `2.3.1-alpha1`, `2.3.1-beta1`, `2.3.1-candidate1`
//! - `2.3.1a1`, `2.3.1b1`, `2.3.1rc1` (abbreviated)
//! - `2.3.1` (no suffix, implicitly final)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::version::error::{Layer, VersionError};
use crate::version::number::Number;
use crate::version::scan::positive;

/// Ordered maturity stage of a release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseLevel {
    #[default]
    Development,
    Alpha,
    Beta,
    Candidate,
    Final,
}

impl ReleaseLevel {
    pub const ALL: [ReleaseLevel; 5] = [
        ReleaseLevel::Development,
        ReleaseLevel::Alpha,
        ReleaseLevel::Beta,
        ReleaseLevel::Candidate,
        ReleaseLevel::Final,
    ];

    /// Returns the canonical name used in the verbose suffix form
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseLevel::Development => "dev",
            ReleaseLevel::Alpha => "alpha",
            ReleaseLevel::Beta => "beta",
            ReleaseLevel::Candidate => "candidate",
            ReleaseLevel::Final => "final",
        }
    }

    /// Returns the compact abbreviation, if the level has one
    pub fn abbrev(&self) -> Option<&'static str> {
        match self {
            ReleaseLevel::Alpha => Some("a"),
            ReleaseLevel::Beta => Some("b"),
            ReleaseLevel::Candidate => Some("rc"),
            ReleaseLevel::Development | ReleaseLevel::Final => None,
        }
    }

    /// Singleton levels never carry a serial
    pub fn is_singleton(&self) -> bool {
        matches!(self, ReleaseLevel::Development | ReleaseLevel::Final)
    }

    pub fn from_name(name: &str) -> Option<ReleaseLevel> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    pub fn from_abbrev(abbrev: &str) -> Option<ReleaseLevel> {
        Self::ALL
            .into_iter()
            .find(|level| level.abbrev() == Some(abbrev))
    }

    /// Absolute position of the level for integer encodings: alpha is 0 and
    /// final is 3. Development has no position.
    pub fn index(&self) -> Option<u8> {
        match self {
            ReleaseLevel::Development => None,
            ReleaseLevel::Alpha => Some(0),
            ReleaseLevel::Beta => Some(1),
            ReleaseLevel::Candidate => Some(2),
            ReleaseLevel::Final => Some(3),
        }
    }

    fn below(&self) -> Option<ReleaseLevel> {
        match self {
            ReleaseLevel::Development => None,
            ReleaseLevel::Alpha => Some(ReleaseLevel::Development),
            ReleaseLevel::Beta => Some(ReleaseLevel::Alpha),
            ReleaseLevel::Candidate => Some(ReleaseLevel::Beta),
            ReleaseLevel::Final => Some(ReleaseLevel::Candidate),
        }
    }

    fn above(&self) -> Option<ReleaseLevel> {
        match self {
            ReleaseLevel::Development => Some(ReleaseLevel::Alpha),
            ReleaseLevel::Alpha => Some(ReleaseLevel::Beta),
            ReleaseLevel::Beta => Some(ReleaseLevel::Candidate),
            ReleaseLevel::Candidate => Some(ReleaseLevel::Final),
            ReleaseLevel::Final => None,
        }
    }
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

/// Per-level serial ceilings used when stepping across release levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseBounds {
    pub alpha: u64,
    pub beta: u64,
    pub candidate: u64,
}

impl ReleaseBounds {
    pub const fn new(alpha: u64, beta: u64, candidate: u64) -> Self {
        Self {
            alpha,
            beta,
            candidate,
        }
    }

    /// Highest serial allowed for `level`; singleton levels have none
    pub fn ceiling(&self, level: ReleaseLevel) -> u64 {
        match level {
            ReleaseLevel::Alpha => self.alpha,
            ReleaseLevel::Beta => self.beta,
            ReleaseLevel::Candidate => self.candidate,
            ReleaseLevel::Development | ReleaseLevel::Final => 0,
        }
    }

    /// A non-singleton level with a zero ceiling is skipped while stepping
    fn admits(&self, level: ReleaseLevel) -> bool {
        level.is_singleton() || self.ceiling(level) > 0
    }
}

/// A 3-part version plus release level information
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Release {
    pub number: Number,
    pub level: ReleaseLevel,
    /// Increment within the release level; always 0 for singleton levels
    pub serial: u64,
}

impl Release {
    pub const fn new(number: Number, level: ReleaseLevel, serial: u64) -> Self {
        Self {
            number,
            level,
            serial,
        }
    }

    /// A final release of `number`
    pub const fn final_of(number: Number) -> Self {
        Self::new(number, ReleaseLevel::Final, 0)
    }

    /// Parses a release version and returns the unconsumed remainder.
    ///
    /// The number must be complete, with or without a suffix: "2.3a1",
    /// "2.3-beta2", "3" and a bare "2.3" are all rejected.
    pub fn parse(text: &str) -> Result<(Release, &str), VersionError> {
        let not_valid = || {
            trace!("rejected release version {:?}", text);
            VersionError::not_valid(Layer::Release, text)
        };

        let scanned = Number::scan(text).map_err(|_| not_valid())?;
        if scanned.fields < 3 {
            return Err(not_valid());
        }

        let (level, serial, rest, explicit) = match level_suffix(scanned.rest) {
            Some((level, serial, rest)) => (level, serial, rest, true),
            None => (ReleaseLevel::Final, 0, scanned.rest, false),
        };

        // "1.21-alpha-dev" or "1.2.3-alpha" must not pass as a shorter match
        let glued = rest.strip_prefix('-').unwrap_or(rest);
        if ReleaseLevel::ALL
            .iter()
            .any(|level| glued.starts_with(level.name()))
        {
            return Err(not_valid());
        }

        if explicit && level.is_singleton() && rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(not_valid());
        }

        Ok((Release::new(scanned.number, level, serial), rest))
    }

    /// Renders the compact form ("2.3.1a1"), or the bare number for
    /// singleton levels
    pub fn abbrev(&self) -> String {
        match self.level.abbrev() {
            Some(abbrev) => format!("{}{}{}", self.number, abbrev, self.serial),
            None => self.number.to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Release::default()
    }

    pub fn validate(&self) -> Result<(), VersionError> {
        self.number.validate()?;
        let serial_ok = if self.level.is_singleton() {
            self.serial == 0
        } else {
            self.serial >= 1
        };
        if !serial_ok {
            return Err(VersionError::not_valid(Layer::Release, self.to_string()));
        }
        Ok(())
    }

    pub fn compare(&self, other: &Release) -> Ordering {
        self.cmp(other)
    }

    /// Steps back one release. Within a level the serial decreases; below
    /// serial 1 the previous level is entered at its ceiling. Returns `None`
    /// at the development level.
    pub fn prev(&self, bounds: &ReleaseBounds) -> Option<Release> {
        if !self.level.is_singleton() && self.serial > 1 {
            return Some(Release::new(self.number, self.level, self.serial - 1));
        }

        let mut level = self.level.below()?;
        while !bounds.admits(level) {
            level = level.below()?;
        }
        Some(Release::new(self.number, level, bounds.ceiling(level)))
    }

    /// Steps forward one release. Within a level the serial increases up to
    /// its ceiling; past it the next level is entered at serial 1. Returns
    /// `None` at the final level.
    pub fn next(&self, bounds: &ReleaseBounds) -> Option<Release> {
        if !self.level.is_singleton() && self.serial < bounds.ceiling(self.level) {
            return Some(Release::new(self.number, self.level, self.serial + 1));
        }

        let mut level = self.level.above()?;
        while !bounds.admits(level) {
            level = level.above()?;
        }
        let serial = if level.is_singleton() { 0 } else { 1 };
        Some(Release::new(self.number, level, serial))
    }
}

/// Matches one release level suffix at the start of `text`
fn level_suffix(text: &str) -> Option<(ReleaseLevel, u64, &str)> {
    if let Some(named) = text.strip_prefix('-') {
        for level in ReleaseLevel::ALL {
            let Some(after) = named.strip_prefix(level.name()) else {
                continue;
            };
            if level.is_singleton() {
                return Some((level, 0, after));
            }
            if let Some((serial, rest)) = positive(after) {
                return Some((level, serial, rest));
            }
        }
        return None;
    }

    ReleaseLevel::ALL.into_iter().find_map(|level| {
        let after = text.strip_prefix(level.abbrev()?)?;
        let (serial, rest) = positive(after)?;
        Some((level, serial, rest))
    })
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level.is_singleton() {
            write!(f, "{}-{}", self.number, self.level)
        } else {
            write!(f, "{}-{}{}", self.number, self.level, self.serial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReleaseLevel::*;
    use rstest::rstest;

    fn release(major: u64, minor: u64, micro: u64, level: ReleaseLevel, serial: u64) -> Release {
        Release::new(Number::new(major, minor, micro), level, serial)
    }

    #[rstest]
    #[case("0.0.0", release(0, 0, 0, Final, 0), "")]
    #[case("1.21.1-alpha1", release(1, 21, 1, Alpha, 1), "")]
    #[case("1.21.1a1", release(1, 21, 1, Alpha, 1), "")]
    #[case("2.3.1-dev", release(2, 3, 1, Development, 0), "")]
    #[case("2.3.1-beta12", release(2, 3, 1, Beta, 12), "")]
    #[case("2.3.1b2", release(2, 3, 1, Beta, 2), "")]
    #[case("2.3.1-candidate3", release(2, 3, 1, Candidate, 3), "")]
    #[case("2.3.1rc3", release(2, 3, 1, Candidate, 3), "")]
    #[case("2.3.1-final", release(2, 3, 1, Final, 0), "")]
    #[case("2.3.1", release(2, 3, 1, Final, 0), "")]
    #[case("1.2.3.4", release(1, 2, 3, Final, 0), ".4")]
    #[case("1.2.3-alpha3.4", release(1, 2, 3, Alpha, 3), ".4")]
    #[case("1.2.3-trusty-amd64", release(1, 2, 3, Final, 0), "-trusty-amd64")]
    fn parse_returns_release_and_remainder(
        #[case] input: &str,
        #[case] expected: Release,
        #[case] remainder: &str,
    ) {
        assert_eq!(Release::parse(input).unwrap(), (expected, remainder));
    }

    #[rstest]
    #[case("1.21-alpha1")]
    #[case("1.21-alpha1.1")]
    #[case("1.21.alpha1")]
    #[case("1.21.1alpha1")]
    #[case("1.21-alpha")]
    #[case("1.21.1-alpha")]
    #[case("1.21.1-alpha0")]
    #[case("1.21-alpha1beta")]
    #[case("1.21.1-alpha1beta")]
    #[case("1.21-alpha-dev")]
    #[case("1.21.1-alpha-dev")]
    #[case("2.3.1-final1")]
    #[case("2.3.1-dev1")]
    #[case("2.3a1")]
    #[case("2.3-beta2")]
    #[case("1-alpha1")]
    #[case("2rc3")]
    #[case("3")]
    #[case("2.3")]
    fn parse_rejects_invalid_releases(#[case] input: &str) {
        let err = Release::parse(input).unwrap_err();

        assert_eq!(err, VersionError::not_valid(Layer::Release, input));
    }

    #[rstest]
    #[case(release(2, 3, 1, Alpha, 1), "2.3.1-alpha1", "2.3.1a1")]
    #[case(release(2, 3, 1, Beta, 2), "2.3.1-beta2", "2.3.1b2")]
    #[case(release(2, 3, 1, Candidate, 3), "2.3.1-candidate3", "2.3.1rc3")]
    #[case(release(2, 3, 1, Development, 0), "2.3.1-dev", "2.3.1")]
    #[case(release(2, 3, 1, Final, 0), "2.3.1-final", "2.3.1")]
    #[case(Release::default(), "0.0.0-dev", "0.0.0")]
    fn display_and_abbrev(#[case] rel: Release, #[case] full: &str, #[case] abbrev: &str) {
        assert_eq!(rel.to_string(), full);
        assert_eq!(rel.abbrev(), abbrev);
    }

    #[test]
    fn is_zero_only_for_default() {
        assert!(Release::default().is_zero());
        assert!(!release(2, 3, 1, Alpha, 1).is_zero());
    }

    #[rstest]
    #[case(release(1, 2, 3, Alpha, 1), true)]
    #[case(release(1, 2, 3, Final, 0), true)]
    #[case(release(1, 2, 3, Final, 1), false)]
    #[case(release(1, 2, 3, Development, 2), false)]
    #[case(release(1, 2, 3, Beta, 0), false)]
    #[case(release(0, 0, 0, Final, 0), false)]
    fn validate_checks_number_and_serial(#[case] rel: Release, #[case] valid: bool) {
        assert_eq!(rel.validate().is_ok(), valid);
    }

    #[rstest]
    #[case("1.2.0a1", "1.2.0", Ordering::Less)]
    #[case("1.2.0a2", "1.2.0a1", Ordering::Greater)]
    #[case("1.2.0b1", "1.2.0a1", Ordering::Greater)]
    #[case("1.2.0b1", "1.2.0", Ordering::Less)]
    #[case("1.2.0-dev", "1.2.0a1", Ordering::Less)]
    #[case("1.2.1-dev", "1.2.0", Ordering::Greater)]
    #[case("1.2.0rc1", "1.2.0-candidate1", Ordering::Equal)]
    fn compare_orders_number_level_serial(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        let (left, _) = Release::parse(left).unwrap();
        let (right, _) = Release::parse(right).unwrap();

        assert_eq!(left.compare(&right), expected);
        assert_eq!(right.compare(&left), expected.reverse());
    }

    const BOUNDS: ReleaseBounds = ReleaseBounds::new(3, 2, 2);

    #[test]
    fn prev_walks_down_to_development() {
        let start = release(3, 3, 3, Final, 0);
        let got: Vec<String> = std::iter::successors(Some(start), |r| r.prev(&BOUNDS))
            .map(|r| r.to_string())
            .collect();

        assert_eq!(
            got,
            vec![
                "3.3.3-final",
                "3.3.3-candidate2",
                "3.3.3-candidate1",
                "3.3.3-beta2",
                "3.3.3-beta1",
                "3.3.3-alpha3",
                "3.3.3-alpha2",
                "3.3.3-alpha1",
                "3.3.3-dev",
            ]
        );
    }

    #[test]
    fn next_walks_up_to_final() {
        let start = release(3, 3, 3, Development, 0);
        let got: Vec<String> = std::iter::successors(Some(start), |r| r.next(&BOUNDS))
            .map(|r| r.to_string())
            .collect();

        assert_eq!(
            got,
            vec![
                "3.3.3-dev",
                "3.3.3-alpha1",
                "3.3.3-alpha2",
                "3.3.3-alpha3",
                "3.3.3-beta1",
                "3.3.3-beta2",
                "3.3.3-candidate1",
                "3.3.3-candidate2",
                "3.3.3-final",
            ]
        );
    }

    #[test]
    fn stepping_skips_levels_with_zero_ceiling() {
        let bounds = ReleaseBounds::new(2, 0, 1);

        assert_eq!(
            release(1, 0, 0, Alpha, 2).next(&bounds),
            Some(release(1, 0, 0, Candidate, 1))
        );
        assert_eq!(
            release(1, 0, 0, Candidate, 1).prev(&bounds),
            Some(release(1, 0, 0, Alpha, 2))
        );
    }

    #[test]
    fn stepping_stops_at_the_ends() {
        assert_eq!(release(1, 0, 0, Development, 0).prev(&BOUNDS), None);
        assert_eq!(release(1, 0, 0, Final, 0).next(&BOUNDS), None);
    }

    #[rstest]
    #[case(Development, "dev", None, None)]
    #[case(Alpha, "alpha", Some("a"), Some(0))]
    #[case(Beta, "beta", Some("b"), Some(1))]
    #[case(Candidate, "candidate", Some("rc"), Some(2))]
    #[case(Final, "final", None, Some(3))]
    fn release_level_names(
        #[case] level: ReleaseLevel,
        #[case] name: &str,
        #[case] abbrev: Option<&str>,
        #[case] index: Option<u8>,
    ) {
        assert_eq!(level.to_string(), name);
        assert_eq!(level.abbrev(), abbrev);
        assert_eq!(level.index(), index);
        assert_eq!(ReleaseLevel::from_name(name), Some(level));
        assert_eq!(name.parse::<ReleaseLevel>(), Ok(level));
        if let Some(abbrev) = abbrev {
            assert_eq!(ReleaseLevel::from_abbrev(abbrev), Some(level));
        }
    }

    #[test]
    fn unknown_level_names_are_rejected() {
        assert_eq!(ReleaseLevel::from_name("gamma"), None);
        assert_eq!(ReleaseLevel::from_abbrev("g"), None);
    }
}
