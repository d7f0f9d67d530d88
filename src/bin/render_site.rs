//! Static export binary - renders every page for both languages to disk
//!
//! Usage:
//!   cargo run --bin render-site              # Write to OUTPUT_DIR (defaults to dist)
//!   cargo run --bin render-site -- out/site  # Write to out/site
//!
//! Optional environment variables:
//! - TRANSLATIONS_FILE (defaults to data/translations.json)
//! - OUTPUT_DIR (defaults to dist)
//! - SLIDER_LIMIT, FEATURED_LIMIT, EVENTS_PAGE_LIMIT
//! - EVENT_LOOKUP_FALLBACK (first or none)

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use dalil_events::config::Config;
use dalil_events::export::export_site;
use dalil_events::i18n::TranslationStore;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dalil_events=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // First positional argument overrides OUTPUT_DIR
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_dir.clone());

    info!("Loading translations from {}", config.translations_file.display());
    let store = TranslationStore::load(&config.translations_file).with_context(|| {
        format!(
            "Failed to load translations from {}",
            config.translations_file.display()
        )
    })?;

    let manifest = export_site(
        &store,
        &out_dir,
        config.render_limits(),
        config.event_lookup_fallback,
    )?;

    println!("\n========== SITE EXPORTED ==========");
    println!("Output:  {}", out_dir.display());
    println!("Files:   {}", manifest.files.len());
    println!(
        "Built:   {}",
        manifest.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("===================================\n");

    Ok(())
}
