//! Integration tests for the Dalil events site
//!
//! These tests drive the HTTP router and the session together against the
//! shipped translation table, covering the complete request workflow.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use dalil_events::catalog::EventCatalog;
use dalil_events::filter::{FilterCriteria, FilterSortEngine, SortKey};
use dalil_events::i18n::{Locale, TranslationStore, TranslationValidator};
use dalil_events::preferences::{FileStore, MemoryStore, PreferenceStore};
use dalil_events::server::router;
use dalil_events::session::{Command, PageRequest, Session, SessionSettings};
use dalil_events::theme::Theme;

// ==================== Test Helpers ====================

fn translations_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/translations.json")
}

fn shipped_store() -> Arc<TranslationStore> {
    Arc::new(TranslationStore::load(translations_path()).expect("Failed to load translations"))
}

fn session_with(preferences: Arc<dyn PreferenceStore>) -> Arc<Session> {
    Arc::new(Session::new(
        shipped_store(),
        preferences,
        SessionSettings::default(),
    ))
}

fn memory_session() -> Arc<Session> {
    session_with(Arc::new(MemoryStore::new()))
}

fn app(session: &Arc<Session>, assets: &TempDir) -> Router {
    router(Arc::clone(session), assets.path())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a urlencoded form, returning the status and the redirect target.
async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (response.status(), location)
}

// ==================== Translation Table Tests ====================

#[test]
fn test_shipped_translations_are_clean() {
    let store = TranslationStore::load(translations_path()).unwrap();
    let report = TranslationValidator::validate(&store);
    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
}

#[test]
fn test_shipped_translations_have_matching_event_ids() {
    let store = TranslationStore::load(translations_path()).unwrap();
    let ids = |locale| {
        store
            .get_events(locale)
            .iter()
            .map(|e| e.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(Locale::Ar), ids(Locale::En));
    assert_eq!(ids(Locale::En).len(), 6);
}

#[test]
fn test_missing_key_in_arabic_falls_back_to_english() {
    let store = TranslationStore::from_json(
        r#"{"ar": {"nav.home": "الرئيسية"}, "en": {"nav.home": "Home", "common.bookNow": "Book Now"}}"#,
    )
    .unwrap();

    assert_eq!(store.resolve("common.bookNow", Locale::Ar), "Book Now");
    assert_eq!(store.resolve("nav.home", Locale::Ar), "الرئيسية");
    assert_eq!(store.resolve("missing.key", Locale::Ar), "missing.key");
}

// ==================== Filter Scenario Tests ====================

#[test]
fn test_music_filter_on_english_catalog() {
    let store = shipped_store();
    let catalog = EventCatalog::from_store(&store, Locale::En);
    let cards = catalog.all().iter().collect::<Vec<_>>();
    let engine = FilterSortEngine::new(Locale::En);

    let outcome = engine.apply(&cards, &FilterCriteria::default().with_category("Music"));
    assert_eq!(outcome.visible_count(), 2);
    assert_eq!(outcome.visible.len() + outcome.hidden.len(), 6);
    assert!(outcome.visible.iter().all(|e| e.category == "Music"));

    let none = engine.apply(&cards, &FilterCriteria::default().with_category("NonExistent"));
    assert_eq!(none.visible_count(), 0);
    assert_eq!(none.hidden.len(), 6);
}

#[test]
fn test_arabic_search_matches_jazz() {
    let store = shipped_store();
    let catalog = EventCatalog::from_store(&store, Locale::Ar);
    let cards = catalog.all().iter().collect::<Vec<_>>();

    let outcome = FilterSortEngine::new(Locale::Ar)
        .apply(&cards, &FilterCriteria::default().with_search("جاز"));
    assert_eq!(outcome.visible_count(), 1);
    assert_eq!(outcome.visible[0].id, 1);
}

#[test]
fn test_name_sort_orders_english_titles() {
    let store = shipped_store();
    let catalog = EventCatalog::from_store(&store, Locale::En);
    let cards = catalog.all().iter().collect::<Vec<_>>();

    let outcome = FilterSortEngine::new(Locale::En)
        .apply(&cards, &FilterCriteria::default().with_sort(SortKey::Name));
    let titles = outcome.visible.iter().map(|e| e.title.as_str()).collect::<Vec<_>>();
    let mut sorted = titles.clone();
    sorted.sort_by_key(|t| t.to_lowercase());
    assert_eq!(titles, sorted);
}

// ==================== HTTP Tests ====================

#[tokio::test]
async fn test_health_and_metrics() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    get(&app, "/about").await;
    let (status, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(report["direct_hits"].as_u64().unwrap() > 0);
    assert_eq!(report["misses"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_every_page_renders_in_arabic_by_default() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    for uri in ["/", "/events", "/event-detail?id=3", "/about", "/contact"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body.contains(r#"<html lang="ar" dir="rtl" data-theme="light">"#), "{}", uri);
        assert!(body.contains("دليل"), "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_event_id_shows_first_event() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let (_, body) = get(&app, "/event-detail?id=999").await;
    assert!(body.contains("ليلة جاز في القلعة"));

    let (_, body) = get(&app, "/event-detail?id=abc").await;
    assert!(body.contains("ليلة جاز في القلعة"));
}

#[tokio::test]
async fn test_theme_toggle_redirects_and_persists() {
    let assets = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let prefs_path = data.path().join("preferences.json");

    let session = session_with(Arc::new(FileStore::open(&prefs_path).unwrap()));
    let app = app(&session, &assets);

    let (status, location) = post_form(&app, "/theme", "return_to=%2Fabout").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/about"));

    let (_, body) = get(&app, "/about").await;
    assert!(body.contains(r#"data-theme="dark""#));

    // A fresh session reads the persisted value
    let reloaded = session_with(Arc::new(FileStore::open(&prefs_path).unwrap()));
    assert_eq!(reloaded.display().theme, Theme::Dark);
}

#[tokio::test]
async fn test_language_toggle_switches_direction() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let (status, _) = post_form(&app, "/language", "return_to=%2Fevents").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/events").await;
    assert!(body.contains(r#"<html lang="en" dir="ltr""#));
    assert!(body.contains("Jazz Night at the Citadel"));
    assert!(body.contains("6 events found"));
}

#[tokio::test]
async fn test_return_to_cannot_leave_the_site() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let (_, location) = post_form(&app, "/theme", "return_to=https%3A%2F%2Fevil.example").await;
    assert_eq!(location.as_deref(), Some("/"));

    let (_, location) = post_form(&app, "/language", "").await;
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_events_query_filters_cards() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    session.dispatch(Command::SetLocale(Locale::En)).unwrap();
    let app = app(&session, &assets);

    let (_, body) = get(&app, "/events?category=Music&sort=name").await;
    assert!(body.contains("2 events found"));
    assert_eq!(body.matches(r#"data-category="Music""#).count(), 2);
    assert!(body.contains(r#"style="display: none""#));

    // A bare reload keeps the committed filters
    let (_, body) = get(&app, "/events").await;
    assert!(body.contains("2 events found"));

    let (_, body) = get(&app, "/events?category=NonExistent").await;
    assert!(body.contains("0 events found"));
    assert!(body.contains(r#"id="noResultsMessage""#));
}

#[tokio::test]
async fn test_booking_shows_success_alert() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let (status, location) = post_form(
        &app,
        "/booking",
        "event_id=2&name=Sara&email=sara%40example.com&phone=0999&tickets=2&return_to=%2Fevents",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/events"));

    let (_, body) = get(&app, "/events").await;
    assert!(body.contains("custom-alert"));
    assert!(body.contains("alert-success"));
    assert!(body.contains("تم الحجز بنجاح!"));
    assert!(body.contains("sara@example.com"));
}

#[tokio::test]
async fn test_incomplete_booking_shows_error_alert() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    post_form(&app, "/booking", "event_id=2&name=&email=a%40b.c&phone=1&return_to=%2F").await;

    let (_, body) = get(&app, "/").await;
    assert!(body.contains("alert-danger"));
    assert!(body.contains("يرجى ملء جميع الحقول المطلوبة"));
}

#[tokio::test]
async fn test_dismissed_alert_is_gone() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    post_form(
        &app,
        "/contact",
        "name=Omar&email=o%40example.com&subject=Hi&message=Hello&return_to=%2Fcontact",
    )
    .await;
    let id = session.alerts().current().unwrap().id;

    let (_, body) = get(&app, "/contact").await;
    assert!(body.contains("شكراً Omar"));

    let (status, _) =
        post_form(&app, "/alerts/dismiss", &format!("id={}&return_to=%2Fcontact", id)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/contact").await;
    assert!(!body.contains("custom-alert"));
}

#[tokio::test]
async fn test_search_keystroke_is_accepted() {
    let assets = TempDir::new().unwrap();
    let session = memory_session();
    let app = app(&session, &assets);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/events/search")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("search=jazz"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

// ==================== Session Tests ====================

#[tokio::test]
async fn test_session_renders_arabic_search() {
    let session = memory_session();
    let html = session
        .render(
            PageRequest::Events(Some(FilterCriteria::default().with_search("جاز"))),
            "/events",
        )
        .unwrap();

    assert!(html.contains("تم العثور على 1 فعالية"));
    assert!(html.contains("ليلة جاز في القلعة"));
    assert_eq!(session.criteria().search_text, "جاز");
}
