use crate::shared::error::SnifferError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Placeholder replaced with the current year when rendering a template
pub const YEAR_PLACEHOLDER: &str = "<year>";

/// Placeholder replaced with the copyright holder when rendering a template
pub const HOLDER_PLACEHOLDER: &str = "<copyright holders>";

/// Built-in templates: (canonical name, aliases, reference text)
const BUILTIN_TEMPLATES: &[(&str, &[&str], &str)] = &[
    (
        "MIT",
        &["MIT", "MIT License", "Expat"],
        include_str!("../../../licenses/MIT.txt"),
    ),
    (
        "ISC",
        &["ISC", "ISC License"],
        include_str!("../../../licenses/ISC.txt"),
    ),
    (
        "BSD-2-Clause",
        &["BSD-2-Clause", "BSD", "Simplified BSD", "FreeBSD"],
        include_str!("../../../licenses/BSD-2-Clause.txt"),
    ),
    (
        "BSD-3-Clause",
        &["BSD-3-Clause", "New BSD", "Modified BSD"],
        include_str!("../../../licenses/BSD-3-Clause.txt"),
    ),
    (
        "Apache-2.0",
        &["Apache-2.0", "Apache 2.0", "Apache License 2.0", "Apache2"],
        include_str!("../../../licenses/Apache-2.0.txt"),
    ),
    (
        "Unlicense",
        &["Unlicense", "The Unlicense"],
        include_str!("../../../licenses/Unlicense.txt"),
    ),
];

static GLOBAL_CATALOG: OnceLock<Arc<LicenseCatalog>> = OnceLock::new();

/// A reference license: canonical name, aliases and raw template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTemplate {
    name: String,
    aliases: Vec<String>,
    text: String,
}

impl LicenseTemplate {
    /// Creates a template, rejecting alias lists that don't start with `name`.
    pub fn new(name: String, aliases: Vec<String>, text: String) -> Result<Self> {
        if aliases.first() != Some(&name) {
            return Err(SnifferError::InvalidCatalog {
                details: format!(
                    "aliases of license '{}' must be non-empty and start with its name",
                    name
                ),
            }
            .into());
        }
        Ok(Self {
            name,
            aliases,
            text,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    aliases: Vec<String>,
    text: String,
}

/// LicenseCatalog holds the ordered, immutable set of reference templates
///
/// Order matters: the text matcher breaks distance ties in favour of the
/// template listed first.
#[derive(Debug, Clone)]
pub struct LicenseCatalog {
    templates: Vec<LicenseTemplate>,
}

impl LicenseCatalog {
    pub fn new(templates: Vec<LicenseTemplate>) -> Self {
        Self { templates }
    }

    /// The process-wide catalog, built from the embedded templates on first use.
    pub fn global() -> Arc<LicenseCatalog> {
        GLOBAL_CATALOG
            .get_or_init(|| Arc::new(Self::builtin()))
            .clone()
    }

    /// Catalog of the templates shipped with the crate.
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, aliases, text)| LicenseTemplate {
                name: name.to_string(),
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                text: text.to_string(),
            })
            .collect();
        Self { templates }
    }

    /// Loads a catalog from a JSON object mapping names to `{aliases, text}`.
    ///
    /// Templates are ordered by name, so distance ties resolve the same way
    /// on every run.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, CatalogEntry> =
            serde_json::from_str(content).map_err(|e| SnifferError::InvalidCatalog {
                details: e.to_string(),
            })?;

        let templates = entries
            .into_iter()
            .map(|(name, entry)| LicenseTemplate::new(name, entry.aliases, entry.text))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[LicenseTemplate] {
        &self.templates
    }

    /// Finds the first template listing `alias` (case-sensitive).
    pub fn find_by_alias(&self, alias: &str) -> Option<&LicenseTemplate> {
        self.templates.iter().find(|t| t.has_alias(alias))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
