//! Bilingual (Arabic/English) event listings.
//!
//! Translation tables feed an event catalog, which the renderer projects into
//! page fragments; the filter engine narrows and orders the rendered list.
//! The `server` module serves the pages and dispatches user commands; the
//! binaries add a static exporter and a translation checker.

pub mod alert;
pub mod binding;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod export;
pub mod filter;
pub mod forms;
pub mod i18n;
pub mod pages;
pub mod preferences;
pub mod render;
pub mod server;
pub mod session;
pub mod theme;
