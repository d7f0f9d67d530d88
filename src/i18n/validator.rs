//! Translation table validation.
//!
//! Checks a loaded [`TranslationStore`] for problems that lookups would
//! otherwise hide behind the fallback chain: keys that only one locale
//! defines, placeholders that differ between locales, and event lists whose
//! ids disagree across locales.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use super::locale::Locale;
use super::store::TranslationStore;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that produce wrong output (e.g., a dropped placeholder)
    pub errors: Vec<String>,

    /// Problems the fallback chain papers over (e.g., a missing key)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every locale of `store` against the union of all keys.
    pub fn validate(store: &TranslationStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let all_keys = store.all_keys();

        // Keys a locale lacks
        for locale in Locale::ALL {
            let own: BTreeSet<&str> = store.keys(locale).into_iter().collect();
            for key in &all_keys {
                if !own.contains(key) {
                    report.warnings.push(format!(
                        "Key '{}' missing in locale '{}' (falls back)",
                        key, locale
                    ));
                }
            }
        }

        // Placeholder parity between locales
        for key in &all_keys {
            let mut expected: Option<(Locale, BTreeSet<String>)> = None;
            for locale in Locale::ALL {
                let Some(value) = store.raw(locale, key) else {
                    continue;
                };
                let found = Self::extract_placeholders(value);
                if let Some((first_locale, first)) = &expected {
                    if *first != found {
                        report.errors.push(format!(
                            "Placeholder mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                            key, first_locale, first, locale, found
                        ));
                    }
                } else {
                    expected = Some((locale, found));
                }
            }
        }

        // Event lists
        let fallback = Locale::fallback();
        let reference: BTreeSet<u32> = store
            .get_events(fallback)
            .iter()
            .map(|event| event.id)
            .collect();

        for locale in Locale::ALL {
            if !store.has_own_events(locale) {
                report.warnings.push(format!(
                    "Locale '{}' has no event list (uses '{}')",
                    locale, fallback
                ));
                continue;
            }

            let ids: BTreeSet<u32> = store
                .get_events(locale)
                .iter()
                .map(|event| event.id)
                .collect();
            if ids != reference {
                report.warnings.push(format!(
                    "Event ids of '{}' {:?} differ from '{}' {:?}",
                    locale, ids, fallback, reference
                ));
            }

            for event in store.get_events(locale) {
                if event.image.trim().is_empty() {
                    report.warnings.push(format!(
                        "Event {} in '{}' has no image (placeholder will be used)",
                        event.id, locale
                    ));
                }
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders in a template.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::event;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_multiple() {
        let found = TranslationValidator::extract_placeholders("{email} and {phone}");
        let expected: BTreeSet<String> = ["email", "phone"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("No tokens {here").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(TranslationValidator::extract_placeholders("{ spaced } {1abc}").is_empty());
    }

    // ==================== Store Validation Tests ====================

    fn complete_store() -> TranslationStore {
        let mut store = TranslationStore::new();
        for locale in Locale::ALL {
            store.insert(locale, "events.results", "{count}");
            store
                .insert_events(locale, vec![event(1, "a", "c", "l", "2025-01-01")])
                .unwrap();
        }
        store
    }

    #[test]
    fn test_validate_clean_store() {
        let report = TranslationValidator::validate(&complete_store());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_key_is_warning() {
        let mut store = complete_store();
        store.insert(Locale::En, "common.bookNow", "Book Now");

        let report = TranslationValidator::validate(&store);
        assert!(!report.has_errors());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("common.bookNow") && w.contains("'ar'")));
    }

    #[test]
    fn test_validate_placeholder_mismatch_is_error() {
        let mut store = complete_store();
        store.insert(Locale::Ar, "booking.successDetails", "{email}");
        store.insert(Locale::En, "booking.successDetails", "{email} {phone}");

        let report = TranslationValidator::validate(&store);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("booking.successDetails"));
    }

    #[test]
    fn test_validate_event_id_mismatch_is_warning() {
        let mut store = complete_store();
        store
            .insert_events(Locale::Ar, vec![event(2, "b", "c", "l", "2025-01-01")])
            .unwrap();

        let report = TranslationValidator::validate(&store);
        assert!(report.warnings.iter().any(|w| w.contains("Event ids of 'ar'")));
    }

    #[test]
    fn test_validate_missing_event_list_is_warning() {
        let mut store = TranslationStore::new();
        store
            .insert_events(Locale::En, vec![event(1, "a", "c", "l", "2025-01-01")])
            .unwrap();

        let report = TranslationValidator::validate(&store);
        assert!(report.warnings.iter().any(|w| w.contains("no event list")));
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}
