//! Structured version identifiers for releases, builds and platform binaries
//!
//! The grammar is layered, each layer wrapping the previous one:
//!
//! - [`Number`]: `2.3.1`
//! - [`Release`]: `2.3.1-alpha1` / `2.3.1a1`
//! - [`Build`]: `2.3.1-alpha1.4`
//! - [`Binary`]: `2.3.1-alpha1.4-trusty-amd64`
//!
//! Every layer parses, renders, validates, compares (a total order) and
//! steps to its predecessor/successor within caller-supplied bounds.

pub mod cli;
pub mod config;
pub mod logging;
pub mod platform;
pub mod version;

pub use version::{
    Binary, Build, CodecError, Layer, Number, Release, ReleaseBounds, ReleaseLevel, VersionError,
    VersionLayer, parse_exact,
};
