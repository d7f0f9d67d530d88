//! Event records and the read-only catalog view over them.

use std::str::FromStr;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, TranslationStore};

/// One bookable event, as it appears in a locale's `events.data` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub price: String,
    pub image: String,
}

impl EventRecord {
    /// Calendar date in `YYYY-MM-DD` form, as used by the date filter.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// What an id lookup returns when no record carries the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventLookupFallback {
    /// Return the first record of the list (the site's historical behavior)
    #[default]
    FirstRecord,
    /// Report the miss as `None`
    NotFound,
}

impl FromStr for EventLookupFallback {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first_record" => Ok(EventLookupFallback::FirstRecord),
            "none" | "not_found" => Ok(EventLookupFallback::NotFound),
            other => bail!("Unknown event lookup fallback: '{}'", other),
        }
    }
}

/// Read-only view over one locale's event list.
#[derive(Debug, Clone, Copy)]
pub struct EventCatalog<'a> {
    events: &'a [EventRecord],
}

impl<'a> EventCatalog<'a> {
    pub fn new(events: &'a [EventRecord]) -> Self {
        Self { events }
    }

    /// Catalog for `locale`, with the store's fallback applied.
    pub fn from_store(store: &'a TranslationStore, locale: Locale) -> Self {
        Self::new(store.get_events(locale))
    }

    pub fn all(&self) -> &'a [EventRecord] {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The first `count` records in list order.
    pub fn capped(&self, count: usize) -> Vec<&'a EventRecord> {
        self.events.iter().take(count).collect()
    }

    /// The `count` most recent events, newest first.
    ///
    /// Events sharing a date keep their list order.
    pub fn latest(&self, count: usize) -> Vec<&'a EventRecord> {
        let mut sorted: Vec<&EventRecord> = self.events.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(count);
        sorted
    }

    /// Find a record by id, applying `fallback` on a miss.
    pub fn find(&self, id: u32, fallback: EventLookupFallback) -> Option<&'a EventRecord> {
        self.events
            .iter()
            .find(|event| event.id == id)
            .or_else(|| match fallback {
                EventLookupFallback::FirstRecord => self.events.first(),
                EventLookupFallback::NotFound => None,
            })
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&'a str> {
        distinct(self.events.iter().map(|event| event.category.as_str()))
    }

    /// Distinct locations in first-appearance order.
    pub fn locations(&self) -> Vec<&'a str> {
        distinct(self.events.iter().map(|event| event.location.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Test fixtures shared by the unit tests of several modules.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn event(id: u32, title: &str, category: &str, location: &str, date: &str) -> EventRecord {
        EventRecord {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            full_description: None,
            category: category.to_string(),
            location: location.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: "19:00".to_string(),
            price: "10$".to_string(),
            image: format!("assets/img/events/{}.jpg", id),
        }
    }

    /// Six events across two categories.
    pub fn six_events() -> Vec<EventRecord> {
        vec![
            event(1, "Jazz Night", "Music", "Old Town", "2025-03-15"),
            event(2, "Painting Expo", "Arts", "Gallery", "2025-02-10"),
            event(3, "Oud Concert", "Music", "Opera House", "2025-04-01"),
            event(4, "Sculpture Walk", "Arts", "Old Town", "2025-03-15"),
            event(5, "Choir Evening", "Music", "Gallery", "2025-01-20"),
            event(6, "Street Art Tour", "Arts", "Opera House", "2025-05-05"),
        ]
    }
}
