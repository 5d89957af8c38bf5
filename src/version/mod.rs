//! Layered version grammar
//!
//! Each layer wraps the one below it and adds its own suffix:
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐
//! │  Number  │◀────│ Release  │◀────│  Build   │◀────│  Binary  │
//! │  2.3.1   │     │ -alpha1  │     │   .4     │     │ -trusty- │
//! │          │     │   / a1   │     │          │     │   amd64  │
//! └──────────┘     └──────────┘     └──────────┘     └──────────┘
//! ```
//!
//! A layer's `parse` returns the unconsumed remainder so the next layer can
//! match its suffix against it. Exact parsing (`FromStr`) rejects leftovers.
//!
//! # Modules
//!
//! - [`number`]: `MAJOR.MINOR.MICRO`
//! - [`release`]: release level and serial
//! - [`build`]: build index
//! - [`binary`]: platform series and architecture
//! - [`codec`]: JSON and YAML adapters
//! - [`error`]: `NotValid` and codec errors
//! - [`semver`]: standalone `x.y.z-pre+build` versions

pub mod binary;
pub mod build;
pub mod codec;
pub mod error;
pub mod number;
pub mod release;
mod scan;
pub mod semver;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use binary::Binary;
pub use build::Build;
pub use error::{CodecError, Layer, VersionError};
pub use number::Number;
pub use release::{Release, ReleaseBounds, ReleaseLevel};

/// Operations shared by every layer of the grammar.
///
/// `Display` is the canonical rendering and `FromStr` is exact parsing: both
/// serialization adapters in [`codec`] are built on this pair.
pub trait VersionLayer:
    Sized + Clone + PartialEq + fmt::Display + FromStr<Err = VersionError>
{
    const LAYER: Layer;

    /// Parses the layer's grammar and returns the unconsumed remainder
    fn parse_prefix(text: &str) -> Result<(Self, &str), VersionError>;

    fn validate(&self) -> Result<(), VersionError>;

    /// Structural equality with the default value
    fn is_zero(&self) -> bool;

    fn compare(&self, other: &Self) -> Ordering;
}

/// Parses `text` and rejects any leftover input
pub fn parse_exact<T: VersionLayer>(text: &str) -> Result<T, VersionError> {
    match T::parse_prefix(text)? {
        (value, "") => Ok(value),
        (_, rest) => {
            tracing::debug!("{} {:?} has leftover {:?}", T::LAYER, text, rest);
            Err(VersionError::not_valid(T::LAYER, text))
        }
    }
}

macro_rules! version_layer {
    ($ty:ident, $layer:expr) => {
        impl VersionLayer for $ty {
            const LAYER: Layer = $layer;

            fn parse_prefix(text: &str) -> Result<(Self, &str), VersionError> {
                $ty::parse(text)
            }

            fn validate(&self) -> Result<(), VersionError> {
                $ty::validate(self)
            }

            fn is_zero(&self) -> bool {
                $ty::is_zero(self)
            }

            fn compare(&self, other: &Self) -> Ordering {
                $ty::compare(self, other)
            }
        }

        impl FromStr for $ty {
            type Err = VersionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_exact(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

version_layer!(Number, Layer::Number);
version_layer!(Release, Layer::Release);
version_layer!(Build, Layer::Build);
version_layer!(Binary, Layer::Binary);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.3.1", true)]
    #[case("2.3", true)]
    #[case("10.234.3456.1", false)]
    #[case("1.21-alpha1", false)]
    fn number_from_str_rejects_leftovers(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(input.parse::<Number>().is_ok(), ok);
    }

    #[test]
    fn leftover_error_names_outer_layer() {
        let err = "1.2.3.4-trusty-amd64".parse::<Build>().unwrap_err();

        assert_eq!(
            err,
            VersionError::not_valid(Layer::Build, "1.2.3.4-trusty-amd64")
        );
    }

    #[test]
    fn parse_exact_accepts_whole_input() {
        let bin: Binary = parse_exact("1.2.3.4-trusty-amd64").unwrap();

        assert_eq!(bin.build.index, 4);
        assert_eq!(bin.series, "trusty");
    }

    #[test]
    fn serde_uses_canonical_text() {
        let rel: Release = "3.2.1a1".parse().unwrap();

        assert_eq!(serde_json::to_value(rel).unwrap(), "3.2.1-alpha1");
        assert_eq!(
            serde_json::from_value::<Release>(serde_json::json!("3.2.1-alpha1")).unwrap(),
            rel
        );
    }
}
