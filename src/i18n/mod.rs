//! Internationalization (i18n) module for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: static metadata for every supported locale
//! - `locale`: the type-safe `Locale` enum
//! - `store`: per-locale translation tables and the fallback chain
//! - `validator`: translation table quality checks
//! - `metrics`: lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use dalil_events::i18n::{Locale, TranslationStore};
//!
//! let store = TranslationStore::load("data/translations.json")?;
//! let label = store.resolve("common.bookNow", Locale::Ar);
//! let count = store.resolve_with("events.results", Locale::En, &[("count", "4")]);
//! ```

mod locale;
mod metrics;
mod registry;
mod store;
mod validator;

pub use locale::{Locale, TextDirection};
pub use metrics::{LookupMetrics, LookupReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::{interpolate, LookupSource, StoreError, TranslationStore, EVENTS_KEY};
pub use validator::{TranslationValidator, ValidationReport};
