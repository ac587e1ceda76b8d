use crate::license_detection::domain::LicenseResult;
use serde::Serialize;
use std::path::PathBuf;

/// ModuleVisit is one pending work item of a tree walk
///
/// Created when a dependency directory is discovered and consumed exactly
/// once when popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVisit {
    pub module_path: PathBuf,
    pub parent_dependency_chain: Vec<String>,
}

impl ModuleVisit {
    pub fn new(module_path: PathBuf, parent_dependency_chain: Vec<String>) -> Self {
        Self {
            module_path,
            parent_dependency_chain,
        }
    }

    /// The visit that starts a walk: the root module with an empty chain.
    pub fn root(module_path: PathBuf) -> Self {
        Self::new(module_path, Vec::new())
    }
}

/// DependencyRecord is the license of one visited module plus the chain
/// of `name@version` identities leading to it from the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub module_path: PathBuf,
    pub names: Vec<String>,
    pub text: Option<String>,
    pub dependency_chain: Vec<String>,
}

impl DependencyRecord {
    pub fn new(module_path: PathBuf, license: LicenseResult, dependency_chain: Vec<String>) -> Self {
        let (names, text) = license.into_parts();
        Self {
            module_path,
            names,
            text,
            dependency_chain,
        }
    }

    pub fn is_known(&self) -> bool {
        !self.names.is_empty()
    }

    /// Rebuilds the license result this record was created from.
    pub fn license(&self) -> LicenseResult {
        LicenseResult::new(self.names.clone(), self.text.clone())
    }

    /// The `name@version` of the module itself (last chain entry).
    pub fn identity(&self) -> &str {
        self.dependency_chain
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }
}
