//! Transient alert banners.
//!
//! At most one alert exists at a time. Showing a new alert replaces the
//! current one and restarts the auto-dismiss timer; a manual dismissal
//! cancels the timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::render::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    /// Bootstrap contextual class.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-danger",
        }
    }
}

/// One banner. `message_html` is trusted markup built from escaped parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message_html: String,
}

impl Alert {
    /// Banner markup; the close button posts a dismissal and returns to
    /// `return_to`.
    pub fn to_html(&self, return_to: &str) -> String {
        format!(
            r#"<div class="custom-alert alert {} alert-dismissible fade show position-fixed" style="top: 2rem; left: 50%; transform: translateX(-50%); z-index: 9999; min-width: 300px; max-width: 500px;" role="alert" data-alert-id="{}">
{}
<form method="post" action="/alerts/dismiss" class="d-inline"><input type="hidden" name="id" value="{}"><input type="hidden" name="return_to" value="{}"><button type="submit" class="btn-close" aria-label="Close"></button></form>
</div>"#,
            self.kind.css_class(),
            self.id,
            self.message_html,
            self.id,
            escape_html(return_to)
        )
    }
}

#[derive(Debug, Default)]
struct AlertSlot {
    current: Option<Alert>,
    next_id: u64,
    timer: Option<JoinHandle<()>>,
}

/// Holder of the single visible alert.
#[derive(Debug, Clone)]
pub struct AlertCenter {
    dismiss_after: Duration,
    slot: Arc<Mutex<AlertSlot>>,
}

impl AlertCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            slot: Arc::new(Mutex::new(AlertSlot::default())),
        }
    }

    /// Show an alert, replacing the current one. Returns its id.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, kind: AlertKind, message_html: String) -> u64 {
        let Ok(mut slot) = self.slot.lock() else {
            warn!("Alert slot lock poisoned, dropping alert");
            return 0;
        };

        slot.next_id += 1;
        let id = slot.next_id;
        if let Some(previous) = slot.current.replace(Alert {
            id,
            kind,
            message_html,
        }) {
            debug!(replaced = previous.id, id, "Replacing visible alert");
        }

        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        let shared = Arc::clone(&self.slot);
        let delay = self.dismiss_after;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut slot) = shared.lock() {
                if slot.current.as_ref().is_some_and(|alert| alert.id == id) {
                    slot.current = None;
                    slot.timer = None;
                    debug!(id, "Alert auto-dismissed");
                }
            }
        }));

        id
    }

    pub fn success(&self, message_html: String) -> u64 {
        self.show(AlertKind::Success, message_html)
    }

    pub fn error(&self, message_html: String) -> u64 {
        self.show(AlertKind::Error, message_html)
    }

    /// Manually dismiss. With `Some(id)` only that alert is dismissed, so a
    /// stale close button cannot remove a newer alert.
    pub fn dismiss(&self, id: Option<u64>) -> bool {
        let Ok(mut slot) = self.slot.lock() else {
            return false;
        };

        let matches = match (&slot.current, id) {
            (Some(alert), Some(id)) => alert.id == id,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if matches {
            slot.current = None;
            if let Some(timer) = slot.timer.take() {
                timer.abort();
            }
        }
        matches
    }

    pub fn current(&self) -> Option<Alert> {
        self.slot.lock().ok()?.current.clone()
    }

    /// Banner markup for the current alert, or an empty string.
    pub fn render(&self, return_to: &str) -> String {
        self.current()
            .map(|alert| alert.to_html(return_to))
            .unwrap_or_default()
    }
}
