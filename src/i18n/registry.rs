//! Locale registry: Single source of truth for all supported locales.
//!
//! This module holds the static metadata of every display language the site
//! supports. It uses a singleton pattern with `OnceLock` so the metadata is
//! built once and shared read-only; it never holds the *active* locale, which
//! travels explicitly in [`crate::preferences::DisplayConfig`].

use std::sync::OnceLock;

use super::locale::{Locale, TextDirection};

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// ISO 639-1 language code (e.g., "ar", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية")
    pub native_name: &'static str,

    /// Writing direction applied to the document root
    pub direction: TextDirection,

    /// Whether lookups fall back to this locale's table (only one should be true)
    pub is_fallback: bool,

    /// Flag image shown on the language toggle while this locale is *active*.
    /// It advertises the locale the toggle switches to.
    pub toggle_flag: &'static str,

    /// Alt text for `toggle_flag`
    pub toggle_flag_alt: &'static str,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is known
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|entry| entry.code == code)
    }

    /// Get the configuration of a locale.
    pub fn get_by_locale(&self, locale: Locale) -> Option<&LocaleConfig> {
        self.locales.iter().find(|entry| entry.locale == locale)
    }

    /// Get all registered locales.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the fallback locale configuration.
    ///
    /// # Panics
    /// Panics if no fallback locale or more than one is registered
    /// (this indicates a configuration error in `default_locales`).
    pub fn fallback(&self) -> &LocaleConfig {
        let fallbacks: Vec<_> = self
            .locales
            .iter()
            .filter(|entry| entry.is_fallback)
            .collect();

        match fallbacks.len() {
            0 => panic!("No fallback locale found in registry"),
            1 => fallbacks[0],
            _ => panic!("Multiple fallback locales found in registry"),
        }
    }
}

/// Default locale configurations: Arabic (site default) and English (fallback).
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Ar,
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: TextDirection::Rtl,
            is_fallback: false,
            toggle_flag: "assets/img/flags/america.jpg",
            toggle_flag_alt: "USA Flag",
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
            is_fallback: true,
            toggle_flag: "assets/img/flags/syria.jpg",
            toggle_flag_alt: "Syria Flag",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LocaleRegistry::get().get_by_code("ar").unwrap();

        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.name, "Arabic");
        assert_eq!(config.direction, TextDirection::Rtl);
        assert!(!config.is_fallback);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.direction, TextDirection::Ltr);
        assert!(config.is_fallback);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_every_locale_is_registered() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            assert!(registry.get_by_locale(locale).is_some());
        }
        assert_eq!(registry.list_all().len(), Locale::ALL.len());
    }

    #[test]
    fn test_fallback_is_english() {
        assert_eq!(LocaleRegistry::get().fallback().code, "en");
    }

    #[test]
    fn test_toggle_flag_advertises_other_locale() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.get_by_code("ar").unwrap().toggle_flag_alt, "USA Flag");
        assert_eq!(registry.get_by_code("en").unwrap().toggle_flag_alt, "Syria Flag");
    }
}
