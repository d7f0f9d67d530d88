//! Locale type: the active display language.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::registry::{LocaleConfig, LocaleRegistry};

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// A supported display language.
///
/// Arabic is the site default; English is the fallback table consulted when
/// a key is missing from the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.locale),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The locale whose table backs every lookup miss.
    pub fn fallback() -> Locale {
        LocaleRegistry::get().fallback().locale
    }

    /// ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale is missing from the registry, which would mean
    /// `default_locales` and this enum have drifted apart.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_locale(*self)
            .expect("Every locale should be registered")
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }

    /// The locale the language toggle switches to.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_arabic() {
        let locale = Locale::from_code("ar").expect("Should succeed");
        assert_eq!(locale, Locale::Ar);
        assert_eq!(locale.name(), "Arabic");
    }

    #[test]
    fn test_from_code_english() {
        assert_eq!(Locale::from_code("en").unwrap(), Locale::En);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
    }

    // ==================== Behavior Tests ====================

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Locale::default(), Locale::Ar);
    }

    #[test]
    fn test_fallback_is_english() {
        assert_eq!(Locale::fallback(), Locale::En);
        assert!(Locale::En.is_fallback());
        assert!(!Locale::Ar.is_fallback());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
        assert_eq!(Locale::En.direction().as_str(), "ltr");
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(Locale::Ar.toggled(), Locale::En);
        assert_eq!(Locale::Ar.toggled().toggled(), Locale::Ar);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::Ar.to_string(), "ar");
        assert_eq!(format!("{}", Locale::En), "en");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Locale::Ar.native_name(), "العربية");
        assert_eq!(Locale::En.native_name(), "English");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
