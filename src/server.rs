//! HTTP surface: page routes, command routes and ops endpoints.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::filter::{FilterCriteria, FilterQuery};
use crate::forms::{BookingForm, ContactForm};
use crate::i18n::TranslationStore;
use crate::pages::parse_event_id;
use crate::preferences::FileStore;
use crate::session::{Command, PageRequest, Session};

/// Handler error: logged, then reported as a bare 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

type AppState = Arc<Session>;

/// Redirect target for a submitted `return_to`: site-relative paths only.
pub fn safe_return_to(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}

fn current_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

pub fn router(session: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/events", get(events))
        .route("/event-detail", get(event_detail))
        .route("/about", get(about))
        .route("/contact", get(contact).post(submit_contact))
        .route("/theme", post(toggle_theme))
        .route("/language", post(toggle_language))
        .route("/events/search", post(search_keystroke))
        .route("/booking", post(submit_booking))
        .route("/alerts/dismiss", post(dismiss_alert))
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(session)
}

/// Load everything named by `config` and serve until the process exits.
pub async fn serve(config: Config) -> Result<()> {
    let store = TranslationStore::load(&config.translations_file).with_context(|| {
        format!(
            "Failed to load translations from {}",
            config.translations_file.display()
        )
    })?;
    let preferences = FileStore::open(&config.preferences_file)?;
    let session = Arc::new(Session::new(
        Arc::new(store),
        Arc::new(preferences),
        config.session_settings(),
    ));

    let app = router(session, &config.assets_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

// ==================== Pages ====================

#[derive(Debug, Deserialize)]
struct HomeQuery {
    slide: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    id: Option<String>,
}

async fn home(
    State(session): State<AppState>,
    uri: Uri,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let request = PageRequest::Home {
        slide: query.slide.and_then(|s| s.trim().parse().ok()),
        category: query.category,
    };
    Ok(Html(session.render(request, &current_path(&uri))?))
}

async fn events(
    State(session): State<AppState>,
    uri: Uri,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    // A bare reload keeps the committed filters
    let criteria = uri
        .query()
        .filter(|q| !q.is_empty())
        .map(|_| FilterCriteria::from(query));
    Ok(Html(
        session.render(PageRequest::Events(criteria), &current_path(&uri))?,
    ))
}

async fn event_detail(
    State(session): State<AppState>,
    uri: Uri,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    let id = parse_event_id(query.id.as_deref());
    Ok(Html(
        session.render(PageRequest::EventDetail(id), &current_path(&uri))?,
    ))
}

async fn about(State(session): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    Ok(Html(session.render(PageRequest::About, &current_path(&uri))?))
}

async fn contact(State(session): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    Ok(Html(session.render(PageRequest::Contact, &current_path(&uri))?))
}

// ==================== Commands ====================

#[derive(Debug, Deserialize)]
struct ReturnTo {
    return_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    #[serde(default)]
    search: String,
}

#[derive(Debug, Deserialize)]
struct DismissForm {
    id: Option<String>,
    return_to: Option<String>,
}

async fn toggle_theme(
    State(session): State<AppState>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect, AppError> {
    session.dispatch(Command::ToggleTheme)?;
    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}

async fn toggle_language(
    State(session): State<AppState>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect, AppError> {
    session.dispatch(Command::ToggleLanguage)?;
    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}

async fn search_keystroke(
    State(session): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<StatusCode, AppError> {
    session.dispatch(Command::SearchKeystroke(form.search))?;
    Ok(StatusCode::ACCEPTED)
}

async fn submit_booking(
    State(session): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<Redirect, AppError> {
    let return_to = safe_return_to(form.return_to.as_deref()).to_string();
    session.dispatch(Command::SubmitBooking(form))?;
    Ok(Redirect::to(&return_to))
}

async fn submit_contact(
    State(session): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, AppError> {
    let return_to = safe_return_to(form.return_to.as_deref()).to_string();
    session.dispatch(Command::SubmitContact(form))?;
    Ok(Redirect::to(&return_to))
}

async fn dismiss_alert(
    State(session): State<AppState>,
    Form(form): Form<DismissForm>,
) -> Result<Redirect, AppError> {
    let id = form.id.as_deref().and_then(|id| id.trim().parse().ok());
    session.dispatch(Command::DismissAlert(id))?;
    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}

// ==================== Ops ====================

async fn metrics(State(session): State<AppState>) -> impl IntoResponse {
    Json(session.store().metrics().report())
}

async fn health() -> &'static str {
    "OK"
}
