use crate::shared::error::SnifferError;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// File name of the package manifest inside a module directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Manifest is the subset of a module's package.json the sniffer reads
///
/// `license` and `licenses` are kept as raw JSON because both accept a
/// string, a `{type}` object, or an array of either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<Value>,
    pub licenses: Option<Value>,
}

impl Manifest {
    /// Parses manifest JSON read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| SnifferError::ParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(Self::from_value(&value))
    }

    /// Builds a manifest from an already parsed JSON value.
    ///
    /// Non-object values and fields of the wrong type are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let string_field = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);
        Self {
            name: string_field("name"),
            version: string_field("version"),
            license: value.get("license").cloned(),
            licenses: value.get("licenses").cloned(),
        }
    }

    /// The `name@version` identity used in dependency chains.
    pub fn identity(&self) -> String {
        format!(
            "{}@{}",
            self.name.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }
}
