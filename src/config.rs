use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::catalog::EventLookupFallback;
use crate::pages::RenderLimits;
use crate::session::SessionSettings;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Files
    pub translations_file: PathBuf,
    pub preferences_file: PathBuf,
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,

    // Timers
    pub search_debounce_ms: u64,
    pub alert_dismiss_secs: u64,

    // Presentation
    pub slider_limit: usize,
    pub featured_limit: usize,
    pub events_page_limit: usize,
    pub event_lookup_fallback: EventLookupFallback,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Files
            translations_file: std::env::var("TRANSLATIONS_FILE")
                .unwrap_or_else(|_| "data/translations.json".to_string())
                .into(),
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string())
                .into(),
            assets_dir: std::env::var("ASSETS_DIR")
                .unwrap_or_else(|_| "assets".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "dist".to_string())
                .into(),

            // Timers
            search_debounce_ms: std::env::var("SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            alert_dismiss_secs: std::env::var("ALERT_DISMISS_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),

            // Presentation
            slider_limit: std::env::var("SLIDER_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            featured_limit: std::env::var("FEATURED_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            events_page_limit: std::env::var("EVENTS_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
            event_lookup_fallback: match std::env::var("EVENT_LOOKUP_FALLBACK") {
                Ok(value) => value
                    .parse()
                    .context("EVENT_LOOKUP_FALLBACK must be 'first' or 'none'")?,
                Err(_) => EventLookupFallback::default(),
            },
        })
    }

    pub fn render_limits(&self) -> RenderLimits {
        RenderLimits {
            slider: self.slider_limit,
            featured: self.featured_limit,
            events_page: self.events_page_limit,
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            limits: self.render_limits(),
            lookup_fallback: self.event_lookup_fallback,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            alert_dismiss: Duration::from_secs(self.alert_dismiss_secs),
        }
    }
}
