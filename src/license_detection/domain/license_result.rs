use serde::Serialize;
use std::fmt;

/// The shared "unknown" result: no names, no text.
///
/// Statics are immutable, so every caller can hand this out freely. Use
/// [`LicenseResult::with_text`] to derive a new value instead of trying to
/// decorate it.
pub static UNKNOWN_LICENSE: LicenseResult = LicenseResult {
    names: Vec::new(),
    text: None,
};

/// LicenseResult value object produced by every detection strategy
///
/// `names` holds license identifiers in the order they were found and
/// `text` the full license body when one is available. The result is
/// known exactly when `names` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseResult {
    names: Vec<String>,
    text: Option<String>,
}

impl LicenseResult {
    pub fn new(names: Vec<String>, text: Option<String>) -> Self {
        Self { names, text }
    }

    /// A known result carrying a single license name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(vec![name.into()], None)
    }

    /// Returns an owned copy of [`UNKNOWN_LICENSE`].
    pub fn unknown() -> Self {
        UNKNOWN_LICENSE.clone()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_known(&self) -> bool {
        !self.names.is_empty()
    }

    /// Derives a new result with the same names and the given text.
    pub fn with_text(&self, text: Option<String>) -> Self {
        Self {
            names: self.names.clone(),
            text,
        }
    }

    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        (self.names, self.text)
    }
}

impl Default for LicenseResult {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for LicenseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}", self.names.join(", "))
        } else {
            write!(f, "Unknown license")
        }
    }
}
