//! Registry of known platforms (Linux distributions)
//!
//! The registry is an explicit object: build it once with
//! [`PlatformRegistry::with_builtins`] and pass it to whatever maps a
//! binary's series onto a platform. Registration needs `&mut self`, so
//! concurrent writers must synchronize externally; lookups hand out owned
//! snapshots.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlatformId(pub u32);

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const UNKNOWN: PlatformId = PlatformId(0);
pub const UBUNTU: PlatformId = PlatformId(1);
pub const DEBIAN: PlatformId = PlatformId(2);
pub const REDHAT: PlatformId = PlatformId(3);
pub const FEDORA: PlatformId = PlatformId(4);
pub const CENTOS: PlatformId = PlatformId(5);
pub const ARCH: PlatformId = PlatformId(6);
pub const SUSE: PlatformId = PlatformId(7);

/// Platforms registered by [`PlatformRegistry::with_builtins`]
pub const BUILTINS: [(PlatformId, &str); 7] = [
    (UBUNTU, "Ubuntu"),
    (DEBIAN, "Debian"),
    (REDHAT, "RedHat"),
    (FEDORA, "Fedora"),
    (CENTOS, "CentOS"),
    (ARCH, "Arch"),
    (SUSE, "SUSE"),
];

/// A registered platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("platform id {id} is already registered as {existing:?}")]
    DuplicateId { id: PlatformId, existing: String },

    #[error("platform name {name:?} is already registered with id {existing}")]
    DuplicateName { name: String, existing: PlatformId },
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlatformRegistry {
    /// Registered names keyed by id, in registration order
    by_id: IndexMap<PlatformId, String>,
    /// Lowercased name -> id
    #[serde(skip)]
    by_name: HashMap<String, PlatformId>,
}

impl PlatformRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the [`BUILTINS`] table
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (id, name) in BUILTINS {
            registry.insert(id, name);
        }
        registry
    }

    /// Registers `name` under `id`.
    ///
    /// Registering the exact same pair twice is a no-op. Rebinding an id to a
    /// different name, or a name (case-insensitively) to a different id, fails.
    pub fn register(&mut self, id: PlatformId, name: &str) -> Result<(), RegistryError> {
        if let Some(existing) = self.by_id.get(&id) {
            if existing == name {
                return Ok(());
            }
            return Err(RegistryError::DuplicateId {
                id,
                existing: existing.clone(),
            });
        }
        if let Some(&existing) = self.by_name.get(&name.to_lowercase()) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
                existing,
            });
        }

        debug!("Registering platform {} as {:?}", id, name);
        self.insert(id, name);
        Ok(())
    }

    fn insert(&mut self, id: PlatformId, name: &str) {
        self.by_id.insert(id, name.to_string());
        self.by_name.insert(name.to_lowercase(), id);
    }

    /// Looks up a platform by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<Platform> {
        let id = *self.by_name.get(&name.to_lowercase())?;
        self.get(id)
    }

    pub fn get(&self, id: PlatformId) -> Option<Platform> {
        self.by_id.get(&id).map(|name| Platform {
            id,
            name: name.clone(),
        })
    }

    /// Iterates over the registered platforms in registration order
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.by_id.iter().map(|(&id, name)| Platform {
            id,
            name: name.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = PlatformRegistry::with_builtins();

        let names: Vec<String> = registry.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Ubuntu", "Debian", "RedHat", "Fedora", "CentOS", "Arch", "SUSE"]
        );
        assert_eq!(registry.get(UNKNOWN), None);
    }

    #[rstest]
    #[case("Ubuntu", Some(UBUNTU))]
    #[case("ubuntu", Some(UBUNTU))]
    #[case("CENTOS", Some(CENTOS))]
    #[case("suse", Some(SUSE))]
    #[case("trusty", None)]
    #[case("", None)]
    fn lookup_ignores_case(#[case] name: &str, #[case] expected: Option<PlatformId>) {
        let registry = PlatformRegistry::with_builtins();

        assert_eq!(registry.lookup(name).map(|p| p.id), expected);
    }

    #[test]
    fn register_adds_new_platform() {
        let mut registry = PlatformRegistry::with_builtins();

        registry.register(PlatformId(8), "Alpine").unwrap();

        assert_eq!(
            registry.lookup("alpine"),
            Some(Platform {
                id: PlatformId(8),
                name: "Alpine".to_string(),
            })
        );
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn register_same_pair_twice_is_noop() {
        let mut registry = PlatformRegistry::with_builtins();

        assert_eq!(registry.register(UBUNTU, "Ubuntu"), Ok(()));
        assert_eq!(registry.len(), BUILTINS.len());
    }

    #[test]
    fn register_rejects_rebinding_id() {
        let mut registry = PlatformRegistry::with_builtins();

        let err = registry.register(UBUNTU, "Mint").unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateId {
                id: UBUNTU,
                existing: "Ubuntu".to_string(),
            }
        );
    }

    #[test]
    fn register_rejects_rebinding_name() {
        let mut registry = PlatformRegistry::with_builtins();

        let err = registry.register(PlatformId(42), "debian").unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "debian".to_string(),
                existing: DEBIAN,
            }
        );
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = PlatformRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.lookup("Ubuntu"), None);
    }

    #[test]
    fn serializes_as_id_to_name_map() {
        let mut registry = PlatformRegistry::new();
        registry.register(PlatformId(1), "Ubuntu").unwrap();

        assert_eq!(
            serde_json::to_value(&registry).unwrap(),
            serde_json::json!({ "1": "Ubuntu" })
        );
    }
}
