//! Text-document adapters for version values
//!
//! Both adapters share one capability: render with `Display`, read back with
//! exact parsing (`FromStr`). Parse errors are propagated unchanged as
//! [`CodecError::Version`].

use crate::version::VersionLayer;
use crate::version::error::CodecError;

/// Quoted-string JSON encoding
pub mod json {
    use super::*;

    /// Encodes `value` as a JSON string literal: `"3.2.1-alpha1"`
    pub fn encode<T: VersionLayer>(value: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&value.to_string())?)
    }

    pub fn decode<T: VersionLayer>(data: &str) -> Result<T, CodecError> {
        let text: String = serde_json::from_str(data)?;
        Ok(text.parse()?)
    }
}

/// Bare-scalar YAML encoding
pub mod yaml {
    use serde_yaml::Value;

    use super::*;

    /// Encodes `value` as a bare YAML scalar: `3.2.1-alpha1\n`
    pub fn encode<T: VersionLayer>(value: &T) -> Result<String, CodecError> {
        Ok(serde_yaml::to_string(&value.to_string())?)
    }

    /// Decodes a bare scalar node. Plain scalars that YAML would read as
    /// numbers (`2`, `2.10`) keep their source text.
    pub fn decode<T: VersionLayer>(data: &str) -> Result<T, CodecError> {
        let text = match serde_yaml::from_str::<Option<String>>(data) {
            Ok(Some(text)) => text,
            Ok(None) => return Err(CodecError::EmptyScalar),
            Err(err) => return Err(non_scalar(data, err)),
        };
        if text.is_empty() {
            return Err(CodecError::EmptyScalar);
        }
        Ok(text.parse()?)
    }

    /// Names the node kind when `data` is a collection rather than a scalar
    fn non_scalar(data: &str, err: serde_yaml::Error) -> CodecError {
        match serde_yaml::from_str::<Value>(data) {
            Ok(Value::Sequence(_)) => CodecError::NotScalar("sequence"),
            Ok(Value::Mapping(_)) => CodecError::NotScalar("mapping"),
            Ok(Value::Tagged(_)) => CodecError::NotScalar("tagged value"),
            _ => CodecError::Yaml(err),
        }
    }
}
