//! Persisted display preferences (theme and language).
//!
//! A [`PreferenceStore`] is the key/value storage that survives restarts.
//! [`PreferencesHolder`] is the single owner of the active
//! [`DisplayConfig`]: it reads the persisted values once at startup, writes
//! them back on every change, and notifies subscribers through a
//! `tokio::sync::watch` channel. Everything else receives a `DisplayConfig`
//! by value.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::i18n::Locale;
use crate::theme::Theme;

/// Storage key for the theme.
pub const THEME_KEY: &str = "dalil-theme";

/// Storage key for the language.
pub const LANGUAGE_KEY: &str = "dalil-language";

/// Key/value storage for preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, for tests and for the static exporter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .map_err(|_| anyhow!("Preference store lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store. The whole map is rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty; so does an
    /// unparseable one, after a warning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring malformed preferences file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preferences file at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read preferences from {}", path.display()))
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Preference store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&*values)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

/// The display settings every render and lookup is parameterized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DisplayConfig {
    pub locale: Locale,
    pub theme: Theme,
}

impl DisplayConfig {
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self { locale, theme }
    }
}

/// A display setting and the storage key it lives under.
trait PersistedPreference: Copy {
    const KEY: &'static str;
    fn stored(&self) -> &'static str;
    fn apply(self, config: DisplayConfig) -> DisplayConfig;
}

impl PersistedPreference for Locale {
    const KEY: &'static str = LANGUAGE_KEY;

    fn stored(&self) -> &'static str {
        self.code()
    }

    fn apply(self, config: DisplayConfig) -> DisplayConfig {
        DisplayConfig {
            locale: self,
            ..config
        }
    }
}

impl PersistedPreference for Theme {
    const KEY: &'static str = THEME_KEY;

    fn stored(&self) -> &'static str {
        self.as_str()
    }

    fn apply(self, config: DisplayConfig) -> DisplayConfig {
        DisplayConfig {
            theme: self,
            ..config
        }
    }
}

/// Owner of the persisted display preferences.
pub struct PreferencesHolder {
    store: Arc<dyn PreferenceStore>,
    sender: watch::Sender<DisplayConfig>,
    /// Held across read, persist and publish so concurrent changes never
    /// interleave
    update_lock: Mutex<()>,
}

impl PreferencesHolder {
    /// Read the persisted preferences, defaulting anything missing or invalid.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let locale = match store.get(LANGUAGE_KEY) {
            Some(code) => Locale::from_code(&code).unwrap_or_else(|e| {
                warn!("Ignoring persisted language: {}", e);
                Locale::default()
            }),
            None => Locale::default(),
        };

        let theme = match store.get(THEME_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring persisted theme '{}'", value);
                Theme::default()
            }),
            None => Theme::default(),
        };

        let config = DisplayConfig::new(locale, theme);
        info!(locale = %config.locale, theme = config.theme.as_str(), "Loaded display preferences");

        let (sender, _) = watch::channel(config);
        Self {
            store,
            sender,
            update_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> DisplayConfig {
        *self.sender.borrow()
    }

    /// Receive every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<DisplayConfig> {
        self.sender.subscribe()
    }

    pub fn set_locale(&self, locale: Locale) -> Result<DisplayConfig> {
        self.update(|_| locale)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<DisplayConfig> {
        self.update(|_| theme)
    }

    pub fn toggle_locale(&self) -> Result<DisplayConfig> {
        self.update(|current| current.locale.toggled())
    }

    pub fn toggle_theme(&self) -> Result<DisplayConfig> {
        self.update(|current| current.theme.toggled())
    }

    /// Pick a new value from the current config, persist it, then publish.
    fn update<V: PersistedPreference>(
        &self,
        change: impl FnOnce(DisplayConfig) -> V,
    ) -> Result<DisplayConfig> {
        let _guard = self
            .update_lock
            .lock()
            .map_err(|_| anyhow!("Preference update lock poisoned"))?;
        let current = self.current();
        let value = change(current);
        self.store.set(V::KEY, value.stored())?;
        Ok(self.publish(value.apply(current)))
    }

    fn publish(&self, config: DisplayConfig) -> DisplayConfig {
        self.sender.send_replace(config);
        debug!(
            locale = %config.locale,
            theme = config.theme.as_str(),
            "Display preferences changed"
        );
        config
    }
}
