//! Platform collaborators used by tooling that interprets a binary's series
//!
//! - [`registry`]: explicit registry of known Linux distributions
//! - [`os`]: operating system names and the Unix subset

pub mod os;
pub mod registry;

pub use registry::{Platform, PlatformId, PlatformRegistry, RegistryError};
