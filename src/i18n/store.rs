//! Translation store: per-locale tables with a fallback chain.
//!
//! A table maps dotted keys to display strings. The reserved key
//! [`EVENTS_KEY`] holds the locale's event list instead of a string.
//!
//! Lookups never fail. A key missing from the requested locale is looked up
//! in the fallback locale, and a key missing there too renders as itself.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::locale::Locale;
use super::metrics::LookupMetrics;
use crate::catalog::{EventCatalog, EventLookupFallback, EventRecord};

/// Reserved key holding a locale's event list.
pub const EVENTS_KEY: &str = "events.data";

/// Errors raised while building a store from a translation table.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read translation table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed translation table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown locale '{0}' in translation table")]
    UnknownLocale(String),

    #[error("malformed event list for locale '{locale}': {source}")]
    Events {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("value of '{key}' in locale '{locale}' must be a string")]
    NotAString { locale: Locale, key: String },

    #[error("duplicate event id {id} in locale '{locale}'")]
    DuplicateEventId { locale: Locale, id: u32 },
}

/// Where a key's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// The requested locale's table
    Direct,
    /// The fallback locale's table
    Fallback,
    /// Neither table; the key renders as itself
    Literal,
}

/// Per-locale translation tables.
#[derive(Debug, Default)]
pub struct TranslationStore {
    texts: HashMap<Locale, HashMap<String, String>>,
    events: HashMap<Locale, Vec<EventRecord>>,
    metrics: LookupMetrics,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON translation table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Build a store from a JSON document shaped `{locale: {key: value}}`.
    ///
    /// Values are strings, except under [`EVENTS_KEY`] where the value is an
    /// array of event records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let raw: HashMap<String, HashMap<String, Value>> = serde_json::from_str(json)?;
        let mut store = Self::new();

        for (code, entries) in raw {
            let locale =
                Locale::from_code(&code).map_err(|_| StoreError::UnknownLocale(code.clone()))?;

            for (key, value) in entries {
                if key == EVENTS_KEY {
                    let events: Vec<EventRecord> = serde_json::from_value(value)
                        .map_err(|source| StoreError::Events { locale, source })?;
                    store.insert_events(locale, events)?;
                    continue;
                }

                match value {
                    Value::String(text) => store.insert(locale, key, text),
                    _ => return Err(StoreError::NotAString { locale, key }),
                }
            }
        }

        Ok(store)
    }

    /// Insert or replace one string.
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
        self.texts
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Set a locale's event list. Ids must be unique within the list.
    pub fn insert_events(
        &mut self,
        locale: Locale,
        events: Vec<EventRecord>,
    ) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(StoreError::DuplicateEventId {
                    locale,
                    id: event.id,
                });
            }
        }
        self.events.insert(locale, events);
        Ok(())
    }

    /// Resolve a key for display.
    pub fn resolve(&self, key: &str, locale: Locale) -> String {
        self.resolve_with(key, locale, &[])
    }

    /// Resolve a key and substitute `{name}` placeholders.
    ///
    /// Each `(name, value)` pair replaces the first `{name}` token of the
    /// resolved template. Tokens without a matching pair are left as-is.
    pub fn resolve_with(&self, key: &str, locale: Locale, params: &[(&str, &str)]) -> String {
        let template = match self.lookup(key, locale) {
            (Some(value), LookupSource::Direct) => {
                self.metrics.record_direct_hit();
                value
            }
            (Some(value), _) => {
                self.metrics.record_fallback_hit();
                value
            }
            (None, _) => {
                self.metrics.record_miss();
                debug!(key, locale = %locale, "Translation key missing in all locales");
                key
            }
        };

        interpolate(template, params)
    }

    /// Report where `key` would resolve from, without touching the metrics.
    pub fn source_of(&self, key: &str, locale: Locale) -> LookupSource {
        self.lookup(key, locale).1
    }

    fn lookup(&self, key: &str, locale: Locale) -> (Option<&str>, LookupSource) {
        if let Some(value) = self.text(locale, key) {
            return (Some(value), LookupSource::Direct);
        }

        let fallback = Locale::fallback();
        if locale != fallback {
            if let Some(value) = self.text(fallback, key) {
                return (Some(value), LookupSource::Fallback);
            }
        }

        (None, LookupSource::Literal)
    }

    /// Raw table entry. Empty strings count as absent.
    fn text(&self, locale: Locale, key: &str) -> Option<&str> {
        self.texts
            .get(&locale)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// A locale's event list, or the fallback locale's when the locale has none.
    pub fn get_events(&self, locale: Locale) -> &[EventRecord] {
        self.events
            .get(&locale)
            .or_else(|| self.events.get(&Locale::fallback()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up an event by id in the locale's list.
    pub fn get_event_by_id(
        &self,
        locale: Locale,
        id: u32,
        fallback: EventLookupFallback,
    ) -> Option<&EventRecord> {
        EventCatalog::new(self.get_events(locale)).find(id, fallback)
    }

    /// Whether the locale has its own event list (ignoring fallback).
    pub fn has_own_events(&self, locale: Locale) -> bool {
        self.events.contains_key(&locale)
    }

    /// Sorted string keys of one locale's table.
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .texts
            .get(&locale)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Sorted union of string keys across every locale.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .texts
            .values()
            .flat_map(|table| table.keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Raw value of a key in exactly one locale (no fallback, no metrics).
    pub fn raw(&self, locale: Locale, key: &str) -> Option<&str> {
        self.texts.get(&locale)?.get(key).map(String::as_str)
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

/// Replace the first `{name}` token for each supplied pair, in order.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        let token = format!("{{{}}}", name);
        result = result.replacen(&token, value, 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::event;

    fn sample_store() -> TranslationStore {
        TranslationStore::from_json(
            r#"{
                "ar": {
                    "nav.home": "الرئيسية",
                    "events.results": "تم العثور على {count} فعالية",
                    "common.empty": ""
                },
                "en": {
                    "nav.home": "Home",
                    "common.bookNow": "Book Now",
                    "events.results": "{count} events found",
                    "common.empty": "Fallback for empty",
                    "events.data": [
                        {"id": 1, "title": "Jazz Night", "description": "Live jazz",
                         "category": "Music", "location": "Citadel", "date": "2025-03-15",
                         "time": "20:00", "price": "$10", "image": "a.jpg"},
                        {"id": 2, "title": "Art Fair", "description": "Paintings",
                         "category": "Arts", "location": "Gallery", "date": "2025-04-01",
                         "time": "10:00", "price": "Free", "image": "b.jpg"}
                    ]
                }
            }"#,
        )
        .expect("fixture should parse")
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_from_json_unknown_locale() {
        let result = TranslationStore::from_json(r#"{"fr": {"nav.home": "Accueil"}}"#);
        assert!(matches!(result, Err(StoreError::UnknownLocale(code)) if code == "fr"));
    }

    #[test]
    fn test_from_json_rejects_non_string_value() {
        let result = TranslationStore::from_json(r#"{"en": {"nav.home": 42}}"#);
        assert!(matches!(result, Err(StoreError::NotAString { .. })));
    }

    #[test]
    fn test_from_json_rejects_duplicate_event_ids() {
        let json = r#"{"en": {"events.data": [
            {"id": 1, "title": "a", "description": "d", "category": "c", "location": "l",
             "date": "2025-01-01", "time": "t", "price": "p", "image": "i"},
            {"id": 1, "title": "b", "description": "d", "category": "c", "location": "l",
             "date": "2025-01-02", "time": "t", "price": "p", "image": "i"}
        ]}}"#;
        let result = TranslationStore::from_json(json);
        assert!(matches!(
            result,
            Err(StoreError::DuplicateEventId { id: 1, .. })
        ));
    }

    #[test]
    fn test_from_json_malformed_events() {
        let result = TranslationStore::from_json(r#"{"en": {"events.data": "nope"}}"#);
        assert!(matches!(result, Err(StoreError::Events { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TranslationStore::load("/nonexistent/translations.json");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    // ==================== Resolve Tests ====================

    #[test]
    fn test_resolve_direct() {
        let store = sample_store();
        assert_eq!(store.resolve("nav.home", Locale::Ar), "الرئيسية");
        assert_eq!(store.resolve("nav.home", Locale::En), "Home");
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let store = sample_store();
        assert_eq!(store.resolve("common.bookNow", Locale::Ar), "Book Now");
    }

    #[test]
    fn test_resolve_missing_everywhere_returns_key() {
        let store = sample_store();
        assert_eq!(store.resolve("nav.missing", Locale::Ar), "nav.missing");
        assert_eq!(store.resolve("nav.missing", Locale::En), "nav.missing");
    }

    #[test]
    fn test_resolve_empty_value_falls_through() {
        let store = sample_store();
        assert_eq!(store.resolve("common.empty", Locale::Ar), "Fallback for empty");
    }

    #[test]
    fn test_resolve_events_key_is_not_text() {
        let store = sample_store();
        assert_eq!(store.resolve(EVENTS_KEY, Locale::En), EVENTS_KEY);
    }

    #[test]
    fn test_resolve_with_params() {
        let store = sample_store();
        assert_eq!(
            store.resolve_with("events.results", Locale::En, &[("count", "3")]),
            "3 events found"
        );
        assert_eq!(
            store.resolve_with("events.results", Locale::Ar, &[("count", "0")]),
            "تم العثور على 0 فعالية"
        );
    }

    #[test]
    fn test_resolve_records_metrics() {
        let store = sample_store();
        store.resolve("nav.home", Locale::Ar);
        store.resolve("common.bookNow", Locale::Ar);
        store.resolve("nope", Locale::Ar);

        assert_eq!(store.metrics().direct_hits(), 1);
        assert_eq!(store.metrics().fallback_hits(), 1);
        assert_eq!(store.metrics().misses(), 1);
    }

    #[test]
    fn test_source_of() {
        let store = sample_store();
        assert_eq!(store.source_of("nav.home", Locale::Ar), LookupSource::Direct);
        assert_eq!(store.source_of("common.bookNow", Locale::Ar), LookupSource::Fallback);
        assert_eq!(store.source_of("nope", Locale::En), LookupSource::Literal);
        assert_eq!(store.metrics().report().total_lookups, 0);
    }

    // ==================== Interpolation Tests ====================

    #[test]
    fn test_interpolate_unmatched_left_verbatim() {
        assert_eq!(
            interpolate("{count} of {total}", &[("count", "2")]),
            "2 of {total}"
        );
    }

    #[test]
    fn test_interpolate_replaces_first_occurrence_only() {
        assert_eq!(interpolate("{x} and {x}", &[("x", "1")]), "1 and {x}");
    }

    #[test]
    fn test_interpolate_multiple_params() {
        assert_eq!(
            interpolate("{email} / {phone}", &[("email", "a@b.c"), ("phone", "123")]),
            "a@b.c / 123"
        );
    }

    #[test]
    fn test_interpolate_no_params() {
        assert_eq!(interpolate("plain {text}", &[]), "plain {text}");
    }

    // ==================== Event Tests ====================

    #[test]
    fn test_get_events_falls_back() {
        let store = sample_store();
        assert_eq!(store.get_events(Locale::Ar).len(), 2);
        assert!(!store.has_own_events(Locale::Ar));
    }

    #[test]
    fn test_get_events_own_empty_list_is_kept() {
        let mut store = sample_store();
        store.insert_events(Locale::Ar, Vec::new()).unwrap();
        assert!(store.get_events(Locale::Ar).is_empty());
    }

    #[test]
    fn test_get_events_none_anywhere() {
        let store = TranslationStore::new();
        assert!(store.get_events(Locale::Ar).is_empty());
    }

    #[test]
    fn test_get_event_by_id_is_idempotent() {
        let store = sample_store();
        let first = store.get_event_by_id(Locale::En, 2, EventLookupFallback::FirstRecord);
        let second = store.get_event_by_id(Locale::En, 2, EventLookupFallback::FirstRecord);
        assert_eq!(first, second);
        assert_eq!(first.unwrap().title, "Art Fair");
    }

    #[test]
    fn test_get_event_by_id_miss_policies() {
        let store = sample_store();
        assert_eq!(
            store
                .get_event_by_id(Locale::En, 42, EventLookupFallback::FirstRecord)
                .unwrap()
                .id,
            1
        );
        assert!(store
            .get_event_by_id(Locale::En, 42, EventLookupFallback::NotFound)
            .is_none());
    }

    #[test]
    fn test_insert_events_programmatically() {
        let mut store = TranslationStore::new();
        store
            .insert_events(Locale::Ar, vec![event(3, "a", "c", "l", "2025-01-01")])
            .unwrap();
        assert_eq!(store.get_events(Locale::Ar)[0].id, 3);
        // English has no list and does not fall back to Arabic
        assert!(store.get_events(Locale::En).is_empty());
    }

    // ==================== Key Listing Tests ====================

    #[test]
    fn test_keys_sorted_per_locale() {
        let store = sample_store();
        assert_eq!(
            store.keys(Locale::Ar),
            vec!["common.empty", "events.results", "nav.home"]
        );
    }

    #[test]
    fn test_all_keys_union() {
        let store = sample_store();
        assert_eq!(
            store.all_keys(),
            vec!["common.bookNow", "common.empty", "events.results", "nav.home"]
        );
    }
}
