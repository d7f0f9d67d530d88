//! The visitor's UI state and the command dispatch layer.
//!
//! User interactions arrive as [`Command`]s. [`Session::dispatch`] updates
//! preferences, filter state or the alert and returns what changed; page
//! renders read the current state through [`Session::render`]. The core it
//! calls into (resolve, filter, sort, render) is pure.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::alert::AlertCenter;
use crate::catalog::EventLookupFallback;
use crate::debounce::Debouncer;
use crate::filter::{FilterCriteria, ResultsView, SortKey};
use crate::forms::{BookingForm, ContactForm, FormMessages};
use crate::i18n::{Locale, TranslationStore};
use crate::pages::{self, PageContext, RenderLimits};
use crate::preferences::{DisplayConfig, PreferenceStore, PreferencesHolder};
use crate::theme::Theme;

/// Tunables of a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub limits: RenderLimits,
    pub lookup_fallback: EventLookupFallback,
    pub search_debounce: Duration,
    pub alert_dismiss: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            limits: RenderLimits::default(),
            lookup_fallback: EventLookupFallback::default(),
            search_debounce: Duration::from_millis(300),
            alert_dismiss: Duration::from_secs(5),
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone)]
pub enum Command {
    ToggleTheme,
    ToggleLanguage,
    SetTheme(Theme),
    SetLocale(Locale),
    /// One keystroke in the search box, carrying the whole input value
    SearchKeystroke(String),
    ApplyFilters(FilterCriteria),
    SubmitBooking(BookingForm),
    SubmitContact(ContactForm),
    DismissAlert(Option<u64>),
}

/// What a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Display(DisplayConfig),
    SearchScheduled,
    FiltersApplied,
    AlertShown(u64),
    AlertDismissed(bool),
}

/// A page to render.
#[derive(Debug, Clone)]
pub enum PageRequest {
    Home {
        slide: Option<i64>,
        category: Option<String>,
    },
    /// `Some` criteria replace the committed ones before rendering
    Events(Option<FilterCriteria>),
    EventDetail(u32),
    About,
    Contact,
}

#[derive(Debug, Default)]
struct FilterState {
    criteria: FilterCriteria,
    results: ResultsView,
}

/// One visitor's state.
pub struct Session {
    store: Arc<TranslationStore>,
    preferences: PreferencesHolder,
    alerts: AlertCenter,
    filters: Arc<Mutex<FilterState>>,
    search: Debouncer,
    settings: SessionSettings,
}

impl Session {
    pub fn new(
        store: Arc<TranslationStore>,
        preferences: Arc<dyn PreferenceStore>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            store,
            preferences: PreferencesHolder::load(preferences),
            alerts: AlertCenter::new(settings.alert_dismiss),
            filters: Arc::new(Mutex::new(FilterState::default())),
            search: Debouncer::new(settings.search_debounce),
            settings,
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn preferences(&self) -> &PreferencesHolder {
        &self.preferences
    }

    pub fn alerts(&self) -> &AlertCenter {
        &self.alerts
    }

    pub fn display(&self) -> DisplayConfig {
        self.preferences.current()
    }

    /// Filter criteria currently applied to the events page.
    pub fn criteria(&self) -> FilterCriteria {
        self.filters
            .lock()
            .map(|state| state.criteria.clone())
            .unwrap_or_default()
    }

    pub fn dispatch(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::ToggleTheme => Ok(Outcome::Display(self.preferences.toggle_theme()?)),
            Command::ToggleLanguage => Ok(Outcome::Display(self.preferences.toggle_locale()?)),
            Command::SetTheme(theme) => Ok(Outcome::Display(self.preferences.set_theme(theme)?)),
            Command::SetLocale(locale) => {
                Ok(Outcome::Display(self.preferences.set_locale(locale)?))
            }
            Command::SearchKeystroke(text) => {
                let filters = Arc::clone(&self.filters);
                self.search.call(async move {
                    if let Ok(mut state) = filters.lock() {
                        // Searching commits the panel, so the list becomes sorted
                        state.criteria.search_text = text;
                        state.criteria.sort.get_or_insert_with(SortKey::default);
                    }
                });
                Ok(Outcome::SearchScheduled)
            }
            Command::ApplyFilters(criteria) => {
                // An explicit apply supersedes a pending keystroke
                self.search.cancel();
                self.filters
                    .lock()
                    .map_err(|_| anyhow!("Filter state lock poisoned"))?
                    .criteria = criteria;
                Ok(Outcome::FiltersApplied)
            }
            Command::SubmitBooking(form) => {
                let messages = FormMessages::new(&self.store, self.display().locale);
                let id = match form.validate() {
                    Ok(booking) => {
                        info!(
                            event_id = ?booking.event_id,
                            tickets = %booking.tickets,
                            "Booking accepted"
                        );
                        self.alerts.success(messages.booking_success(&booking))
                    }
                    Err(e) => {
                        warn!("Booking rejected: {}", e);
                        self.alerts.error(messages.required_fields())
                    }
                };
                Ok(Outcome::AlertShown(id))
            }
            Command::SubmitContact(form) => {
                let messages = FormMessages::new(&self.store, self.display().locale);
                let id = match form.validate() {
                    Ok(contact) => {
                        info!(subject = %contact.subject, "Contact message accepted");
                        self.alerts.success(messages.contact_success(&contact))
                    }
                    Err(e) => {
                        warn!("Contact message rejected: {}", e);
                        self.alerts.error(messages.required_fields())
                    }
                };
                Ok(Outcome::AlertShown(id))
            }
            Command::DismissAlert(id) => Ok(Outcome::AlertDismissed(self.alerts.dismiss(id))),
        }
    }

    /// Render `page` for the current display config. `current` is the
    /// request path and query, used as the return target of forms.
    pub fn render(&self, page: PageRequest, current: &str) -> Result<String> {
        let ctx = PageContext::new(&self.store, self.display())
            .with_limits(self.settings.limits)
            .with_lookup_fallback(self.settings.lookup_fallback)
            .with_current(current)
            .with_alert(self.alerts.render(current));

        let html = match page {
            PageRequest::Home { slide, category } => pages::home(&ctx, slide, category.as_deref()),
            PageRequest::Events(criteria) => {
                if criteria.is_some() {
                    self.search.cancel();
                }
                let mut state = self
                    .filters
                    .lock()
                    .map_err(|_| anyhow!("Filter state lock poisoned"))?;
                if let Some(criteria) = criteria {
                    state.criteria = criteria;
                }
                let FilterState { criteria, results } = &mut *state;
                pages::events(&ctx, criteria, results)
            }
            PageRequest::EventDetail(id) => pages::event_detail(&ctx, id),
            PageRequest::About => pages::about(&ctx),
            PageRequest::Contact => pages::contact(&ctx),
        };
        Ok(html)
    }
}
