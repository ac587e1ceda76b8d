use crate::license_detection::domain::{LicenseResult, Manifest};
use serde_json::Value;

/// ManifestLicensePolicy encodes how license names are read from a manifest
///
/// Priority order:
/// 1. `license` field (if it yields at least one name)
/// 2. `licenses` field
///
/// A field value may be a string, an object with a string `type`, or an
/// array whose elements are resolved by the same rule and flattened.
pub struct ManifestLicensePolicy;

impl ManifestLicensePolicy {
    /// Selects the license names declared by a manifest
    ///
    /// # Returns
    /// The declared names in order; empty when neither field is usable
    pub fn select_names(manifest: &Manifest) -> Vec<String> {
        let from_license = manifest
            .license
            .as_ref()
            .map(Self::resolve_field)
            .unwrap_or_default();

        if !from_license.is_empty() {
            return from_license;
        }

        manifest
            .licenses
            .as_ref()
            .map(Self::resolve_field)
            .unwrap_or_default()
    }

    /// Creates a LicenseResult (names only, no text) from a manifest
    pub fn create_license_result(manifest: &Manifest) -> LicenseResult {
        LicenseResult::new(Self::select_names(manifest), None)
    }

    fn resolve_field(value: &Value) -> Vec<String> {
        match value {
            Value::String(name) => vec![name.clone()],
            Value::Object(fields) => fields
                .get("type")
                .and_then(Value::as_str)
                .map(|name| vec![name.to_string()])
                .unwrap_or_default(),
            Value::Array(items) => items.iter().flat_map(Self::resolve_field).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names_of(value: Value) -> Vec<String> {
        ManifestLicensePolicy::select_names(&Manifest::from_value(&value))
    }

    #[test]
    fn test_empty_manifest_has_no_names() {
        assert!(names_of(json!({})).is_empty());
    }

    #[test]
    fn test_license_string() {
        assert_eq!(names_of(json!({"license": "BSD"})), vec!["BSD"]);
    }

    #[test]
    fn test_license_object_with_type() {
        assert_eq!(
            names_of(json!({"license": {"type": "MIT", "url": "http://x"}})),
            vec!["MIT"]
        );
    }

    #[test]
    fn test_licenses_array_of_objects() {
        let manifest = json!({
            "licenses": [
                {"type": "BSD", "url": "http://opensource.org/licenses/BSD-2-Clause"}
            ]
        });
        assert_eq!(names_of(manifest), vec!["BSD"]);
    }

    #[test]
    fn test_licenses_many_elements_keep_order() {
        assert_eq!(
            names_of(json!({"licenses": [{"type": "BSD"}, {"type": "MIT"}]})),
            vec!["BSD", "MIT"]
        );
    }

    #[test]
    fn test_licenses_array_of_strings() {
        assert_eq!(
            names_of(json!({"licenses": ["MIT", "Apache-2.0"]})),
            vec!["MIT", "Apache-2.0"]
        );
    }

    #[test]
    fn test_nested_arrays_are_flattened() {
        assert_eq!(
            names_of(json!({"licenses": [["MIT", {"type": "ISC"}], "BSD"]})),
            vec!["MIT", "ISC", "BSD"]
        );
    }

    #[test]
    fn test_license_preferred_over_licenses() {
        assert_eq!(
            names_of(json!({"license": "MIT", "licenses": [{"type": "GPL"}]})),
            vec!["MIT"]
        );
    }

    #[test]
    fn test_unusable_license_falls_back_to_licenses() {
        assert_eq!(
            names_of(json!({"license": 42, "licenses": ["ISC"]})),
            vec!["ISC"]
        );
    }

    #[test]
    fn test_object_without_type_is_ignored() {
        assert!(names_of(json!({"license": {"url": "http://x"}})).is_empty());
    }

    #[test]
    fn test_create_license_result_has_no_text() {
        let manifest = Manifest::from_value(&json!({"license": "MIT"}));
        let result = ManifestLicensePolicy::create_license_result(&manifest);
        assert!(result.is_known());
        assert_eq!(result.text(), None);
    }
}
