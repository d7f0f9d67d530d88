//! Static export: every page for every locale, written as plain files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{EventCatalog, EventLookupFallback};
use crate::filter::{FilterCriteria, ResultsView};
use crate::i18n::{Locale, TranslationStore};
use crate::pages::{self, Page, PageContext, RenderLimits, SiteLinks};
use crate::preferences::DisplayConfig;
use crate::theme::Theme;

/// Written to `<out>/manifest.json` after an export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub generated_at: DateTime<Utc>,
    pub files: Vec<String>,
}

fn write_page(out_dir: &Path, locale: Locale, file: &str, html: &str) -> Result<String> {
    let relative = format!("{}/{}", locale.code(), file);
    let path = out_dir.join(&relative);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(relative)
}

/// Render the site into `out_dir` with the default theme.
pub fn export_site(
    store: &TranslationStore,
    out_dir: impl AsRef<Path>,
    limits: RenderLimits,
    lookup_fallback: EventLookupFallback,
) -> Result<ExportManifest> {
    let out_dir = out_dir.as_ref();
    let mut files = Vec::new();

    for locale in Locale::ALL {
        let locale_dir: PathBuf = out_dir.join(locale.code());
        fs::create_dir_all(&locale_dir)
            .with_context(|| format!("Failed to create {}", locale_dir.display()))?;

        let base = PageContext::new(store, DisplayConfig::new(locale, Theme::default()))
            .with_links(SiteLinks::Static)
            .with_limits(limits)
            .with_lookup_fallback(lookup_fallback);
        let at = |file: &str| base.clone().with_current(file);

        let home = pages::home(&at(Page::Home.file_name()), None, None);
        files.push(write_page(out_dir, locale, Page::Home.file_name(), &home)?);

        let events = pages::events(
            &at(Page::Events.file_name()),
            &FilterCriteria::default(),
            &mut ResultsView::new(),
        );
        files.push(write_page(out_dir, locale, Page::Events.file_name(), &events)?);

        let about = pages::about(&at(Page::About.file_name()));
        files.push(write_page(out_dir, locale, Page::About.file_name(), &about)?);

        let contact = pages::contact(&at(Page::Contact.file_name()));
        files.push(write_page(out_dir, locale, Page::Contact.file_name(), &contact)?);

        for event in EventCatalog::from_store(store, locale).all() {
            let file = format!("event-detail-{}.html", event.id);
            let detail = pages::event_detail(&at(&file), event.id);
            files.push(write_page(out_dir, locale, &file, &detail)?);
        }

        info!(locale = %locale, "Exported pages");
    }

    let manifest = ExportManifest {
        generated_at: Utc::now(),
        files,
    };
    let manifest_path = out_dir.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{event, six_events};
    use tempfile::TempDir;

    fn store() -> TranslationStore {
        let mut store = TranslationStore::new();
        store.insert(Locale::En, "nav.home", "Home");
        store.insert(Locale::Ar, "nav.home", "الرئيسية");
        store.insert_events(Locale::En, six_events()).unwrap();
        store
            .insert_events(Locale::Ar, vec![event(1, "ليلة جاز", "موسيقى", "دمشق", "2025-03-15")])
            .unwrap();
        store
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = TempDir::new().unwrap();
        let manifest = export_site(
            &store(),
            dir.path(),
            RenderLimits::default(),
            EventLookupFallback::default(),
        )
        .unwrap();

        // 4 pages per locale, plus 6 English and 1 Arabic detail pages
        assert_eq!(manifest.files.len(), 15);
        assert!(dir.path().join("ar/index.html").exists());
        assert!(dir.path().join("en/event-detail-6.html").exists());
        assert!(!dir.path().join("ar/event-detail-6.html").exists());
        assert!(dir.path().join("manifest.json").exists());
    }

    #[test]
    fn test_export_uses_relative_links() {
        let dir = TempDir::new().unwrap();
        export_site(
            &store(),
            dir.path(),
            RenderLimits::default(),
            EventLookupFallback::default(),
        )
        .unwrap();

        let html = fs::read_to_string(dir.path().join("en/index.html")).unwrap();
        assert!(html.contains(r#"href="event-detail-6.html""#));
        assert!(html.contains(r#"href="../ar/index.html""#));
        assert!(html.contains(r#"data-theme="light""#));

        let arabic = fs::read_to_string(dir.path().join("ar/event-detail-1.html")).unwrap();
        assert!(arabic.contains(r#"dir="rtl""#));
        assert!(arabic.contains("ليلة جاز"));
    }
}
