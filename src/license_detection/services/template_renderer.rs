use crate::license_detection::domain::license_catalog::{HOLDER_PLACEHOLDER, YEAR_PLACEHOLDER};
use crate::license_detection::domain::LicenseCatalog;
use chrono::{Datelike, Local};
use std::sync::Arc;

/// TemplateRenderer fills a catalog template for a known license name
///
/// Only the first `<year>` and the first `<copyright holders>` are
/// substituted; the rest of the template is kept verbatim.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    catalog: Arc<LicenseCatalog>,
}

impl TemplateRenderer {
    pub fn new(catalog: Arc<LicenseCatalog>) -> Self {
        Self { catalog }
    }

    /// Renders the template whose aliases contain `license_name` exactly.
    ///
    /// # Returns
    /// `None` when no template matches; that is not an error.
    pub fn render(&self, license_name: &str, copyright_holder: &str, year: i32) -> Option<String> {
        let template = self.catalog.find_by_alias(license_name)?;
        Some(
            template
                .text()
                .replacen(YEAR_PLACEHOLDER, &year.to_string(), 1)
                .replacen(HOLDER_PLACEHOLDER, copyright_holder, 1),
        )
    }

    /// Renders with the current local year.
    pub fn render_current_year(&self, license_name: &str, copyright_holder: &str) -> Option<String> {
        self.render(license_name, copyright_holder, Local::now().year())
    }

    /// Renders the first of `license_names` that has a template.
    pub fn render_first(&self, license_names: &[String], copyright_holder: &str) -> Option<String> {
        license_names
            .iter()
            .find_map(|name| self.render_current_year(name, copyright_holder))
    }
}
