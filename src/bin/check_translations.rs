//! Translation checker binary - validates the translation table
//!
//! Usage:
//!   cargo run --bin check-translations                 # Check TRANSLATIONS_FILE
//!   cargo run --bin check-translations -- other.json   # Check a specific file
//!
//! Exits non-zero when the table has errors (placeholder mismatches).
//! Missing keys and event list differences are reported as warnings.

use anyhow::{Context, Result};
use std::path::PathBuf;

use dalil_events::i18n::{Locale, TranslationStore, TranslationValidator};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dalil_events=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TRANSLATIONS_FILE").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/translations.json"));

    let store = TranslationStore::load(&path)
        .with_context(|| format!("Failed to load translations from {}", path.display()))?;

    println!("\n========== TRANSLATION CHECK ==========");
    println!("File: {}", path.display());
    for locale in Locale::ALL {
        println!(
            "  {} ({}): {} keys, {} events",
            locale.native_name(),
            locale.code(),
            store.keys(locale).len(),
            store.get_events(locale).len()
        );
    }

    let report = TranslationValidator::validate(&store);

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for error in &report.errors {
            println!("  ✗ {}", error);
        }
    }
    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }
    if report.is_clean() {
        println!("\n✓ No problems found");
    }
    println!("=======================================\n");

    if report.has_errors() {
        anyhow::bail!("{} translation error(s) found", report.errors.len());
    }
    Ok(())
}
