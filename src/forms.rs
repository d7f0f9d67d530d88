//! Booking and contact forms: validation and the alert messages they raise.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::EventRecord;
use crate::i18n::{Locale, TranslationStore};
use crate::render::escape_html;

/// Ticket count used when the field is left empty.
pub const DEFAULT_TICKETS: &str = "1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

fn missing(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

/// Booking modal submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tickets: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// A booking that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub event_id: Option<u32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tickets: String,
}

impl BookingForm {
    pub fn validate(&self) -> Result<BookingRequest, FormError> {
        missing(&[
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ])?;

        let tickets = match self.tickets.trim() {
            "" => DEFAULT_TICKETS.to_string(),
            tickets => tickets.to_string(),
        };

        Ok(BookingRequest {
            event_id: self
                .event_id
                .as_deref()
                .and_then(|id| id.trim().parse().ok()),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            tickets,
        })
    }
}

/// Contact page submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        missing(&[
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ])?;

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// Builds alert messages from the active locale's table.
#[derive(Debug, Clone, Copy)]
pub struct FormMessages<'a> {
    store: &'a TranslationStore,
    locale: Locale,
}

impl<'a> FormMessages<'a> {
    pub fn new(store: &'a TranslationStore, locale: Locale) -> Self {
        Self { store, locale }
    }

    fn text(&self, key: &str) -> String {
        escape_html(&self.store.resolve(key, self.locale))
    }

    /// Plain-text modal title: `booking.title: <event title>`.
    pub fn booking_modal_title(&self, event: &EventRecord) -> String {
        format!("{}: {}", self.store.resolve("booking.title", self.locale), event.title)
    }

    pub fn booking_success(&self, booking: &BookingRequest) -> String {
        let details = self.store.resolve_with(
            "booking.successDetails",
            self.locale,
            &[("email", &booking.email), ("phone", &booking.phone)],
        );
        format!(
            r#"<h5 class="alert-heading" data-i18n="booking.success">{}</h5>
<p class="mb-2"><strong data-i18n="booking.name">{}:</strong> {}</p>
<p class="mb-2"><strong data-i18n="booking.tickets">{}:</strong> {}</p>
<p class="mb-0">{}</p>"#,
            self.text("booking.success"),
            self.text("booking.name"),
            escape_html(&booking.name),
            self.text("booking.tickets"),
            escape_html(&booking.tickets),
            escape_html(&details)
        )
    }

    pub fn contact_success(&self, contact: &ContactRequest) -> String {
        let details =
            self.store
                .resolve_with("contact.successDetails", self.locale, &[("name", &contact.name)]);
        format!(
            r#"<h5 class="alert-heading" data-i18n="contact.success">{}</h5>
<p class="mb-0">{}</p>"#,
            self.text("contact.success"),
            escape_html(&details)
        )
    }

    pub fn required_fields(&self) -> String {
        self.text("common.fillRequired")
    }
}
