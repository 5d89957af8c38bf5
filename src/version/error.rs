use std::fmt;

use thiserror::Error;

/// The grammar layer an error was raised by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Number,
    Release,
    Build,
    Binary,
    /// The independent `x.y.z-pre+build` grammar
    SemVer,
}

impl Layer {
    /// Returns the human-readable name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Number => "number version",
            Layer::Release => "release version",
            Layer::Build => "build version",
            Layer::Binary => "binary version",
            Layer::SemVer => "semantic version",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Malformed text, or a constructed value that fails validation
    #[error("{layer} {input:?} not valid")]
    NotValid { layer: Layer, input: String },
}

impl VersionError {
    pub fn not_valid(layer: Layer, input: impl Into<String>) -> Self {
        VersionError::NotValid {
            layer,
            input: input.into(),
        }
    }

    pub fn is_not_valid(&self) -> bool {
        matches!(self, VersionError::NotValid { .. })
    }

    /// Returns the layer that rejected the input
    pub fn layer(&self) -> Layer {
        match self {
            VersionError::NotValid { layer, .. } => *layer,
        }
    }
}

/// Errors raised by the JSON and YAML adapters
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("empty version scalar")]
    EmptyScalar,

    #[error("expected a scalar version node, found {0}")]
    NotScalar(&'static str),

    #[error(transparent)]
    Version(#[from] VersionError),
}
