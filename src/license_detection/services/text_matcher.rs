use crate::license_detection::domain::{LicenseCatalog, LicenseResult, LicenseTemplate};
use std::sync::Arc;
use strsim::levenshtein;

/// Normalized distance below which a text is accepted as a template match
pub const SIMILARITY_THRESHOLD: f64 = 0.2;

/// Closest template found for a candidate text
#[derive(Debug, Clone, Copy)]
pub struct TemplateMatch<'a> {
    pub template: &'a LicenseTemplate,
    pub distance: f64,
}

impl TemplateMatch<'_> {
    pub fn is_accepted(&self) -> bool {
        self.distance < SIMILARITY_THRESHOLD
    }
}

/// TextMatcher classifies free text as one of the catalog's licenses
///
/// Distances are full Levenshtein distances over raw characters, divided by
/// the longer of the two lengths. No whitespace or case folding is applied.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    catalog: Arc<LicenseCatalog>,
}

impl TextMatcher {
    pub fn new(catalog: Arc<LicenseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LicenseCatalog {
        &self.catalog
    }

    /// Classifies `text`, attaching it to the result when a template matches.
    pub fn classify(&self, text: &str) -> LicenseResult {
        match self.closest(text) {
            Some(found) if found.is_accepted() => {
                LicenseResult::new(vec![found.template.name().to_string()], Some(text.to_string()))
            }
            _ => LicenseResult::unknown(),
        }
    }

    /// Finds the template with the smallest normalized distance to `text`.
    ///
    /// Ties go to the template listed first.
    pub fn closest(&self, text: &str) -> Option<TemplateMatch<'_>> {
        let candidate_len = text.chars().count();
        let mut best: Option<TemplateMatch<'_>> = None;

        for template in self.catalog.templates() {
            let reference_len = template.text().chars().count();
            let max_len = reference_len.max(candidate_len);

            // The length difference alone is a lower bound on the distance
            if let Some(current) = best {
                if max_len > 0 {
                    let lower_bound =
                        reference_len.abs_diff(candidate_len) as f64 / max_len as f64;
                    if lower_bound >= current.distance {
                        continue;
                    }
                }
            }

            let distance = normalized_distance(template.text(), text);
            if best.map_or(true, |current| distance < current.distance) {
                best = Some(TemplateMatch { template, distance });
            }
        }

        best
    }
}

/// Levenshtein distance over `char`s divided by the longer length; 0.0 for two empty inputs.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(entries: &[(&str, &str)]) -> Arc<LicenseCatalog> {
        let templates = entries
            .iter()
            .map(|(name, text)| {
                LicenseTemplate::new(name.to_string(), vec![name.to_string()], text.to_string())
                    .unwrap()
            })
            .collect();
        Arc::new(LicenseCatalog::new(templates))
    }

    #[test]
    fn test_normalized_distance() {
        assert_eq!(normalized_distance("", ""), 0.0);
        assert_eq!(normalized_distance("abcd", "abcx"), 0.25);
        assert_eq!(normalized_distance("", "abc"), 1.0);
    }

    #[test]
    fn test_normalized_distance_counts_chars_not_bytes() {
        assert_eq!(normalized_distance("caf\u{e9}", "cafe"), 0.25);
    }

    #[test]
    fn test_normalized_distance_is_case_and_whitespace_sensitive() {
        assert_eq!(normalized_distance("MIT", "mit"), 1.0);
        assert_eq!(normalized_distance("a b", "a  b"), 0.25);
    }

    #[test]
    fn test_every_builtin_template_classifies_as_itself() {
        let matcher = TextMatcher::new(LicenseCatalog::global());
        for template in matcher.catalog().templates() {
            let found = matcher.closest(template.text()).unwrap();
            assert_eq!(found.template.name(), template.name());
            assert_eq!(found.distance, 0.0);

            let result = matcher.classify(template.text());
            assert_eq!(result.names(), &[template.name().to_string()]);
            assert_eq!(result.text(), Some(template.text()));
        }
    }

    #[test]
    fn test_rendered_mit_text_still_matches() {
        let matcher = TextMatcher::new(LicenseCatalog::global());
        let mit = matcher.catalog().find_by_alias("MIT").unwrap();
        let rendered = mit
            .text()
            .replacen("<year>", "2013", 1)
            .replacen("<copyright holders>", "Some Author", 1);
        assert_eq!(matcher.classify(&rendered).names(), &["MIT".to_string()]);
    }

    #[test]
    fn test_unrelated_text_is_unknown() {
        let matcher = TextMatcher::new(LicenseCatalog::global());
        let result = matcher.classify("The MIT license.");
        assert!(!result.is_known());
        assert_eq!(result.text(), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let matcher = TextMatcher::new(catalog_of(&[("TEN", "aaaaaaaaaa")]));

        // 1 substitution out of 10 characters: 0.1
        assert!(matcher.classify("aaaaaaaaab").is_known());

        // 2 substitutions out of 10 characters: exactly 0.2
        let found = matcher.closest("aaaaaaaabb").unwrap();
        assert_eq!(found.distance, 0.2);
        assert!(!found.is_accepted());
        assert!(!matcher.classify("aaaaaaaabb").is_known());
    }

    #[test]
    fn test_ties_go_to_first_template() {
        let matcher = TextMatcher::new(catalog_of(&[("FIRST", "abcdefghiX"), ("SECOND", "abcdefghiY")]));
        let found = matcher.closest("abcdefghiZ").unwrap();
        assert_eq!(found.template.name(), "FIRST");
        assert_eq!(found.distance, 0.1);
    }

    #[test]
    fn test_picks_minimum_distance() {
        let matcher = TextMatcher::new(catalog_of(&[("FAR", "zzzzzzzzzz"), ("NEAR", "abcdefghij")]));
        let result = matcher.classify("abcdefghik");
        assert_eq!(result.names(), &["NEAR".to_string()]);
    }

    #[test]
    fn test_empty_catalog_has_no_match() {
        let matcher = TextMatcher::new(Arc::new(LicenseCatalog::new(vec![])));
        assert!(matcher.closest("anything").is_none());
        assert!(!matcher.classify("anything").is_known());
    }
}
