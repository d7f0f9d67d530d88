//! Declarative content bindings.
//!
//! Each page declares a [`BindingSet`] once: a typed list of
//! `{target_id, key, mode}` descriptors. [`ContentBinder::apply`] resolves
//! every binding for a [`DisplayConfig`] and produces a [`BoundView`] the
//! page template reads its slots from. Switching locale means applying the
//! same set again with the new config.

use std::collections::HashMap;

use tracing::debug;

use crate::i18n::{Locale, TranslationStore};
use crate::preferences::DisplayConfig;
use crate::render::escape_html;

/// How a resolved value is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    /// Escaped element text
    Text,
    /// Raw markup
    Markup,
    /// Escaped `placeholder` attribute of a form control
    Placeholder,
}

/// One declared binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub target_id: String,
    pub key: String,
    pub mode: BindingMode,
}

impl Binding {
    pub fn new(target_id: impl Into<String>, key: impl Into<String>, mode: BindingMode) -> Self {
        Self {
            target_id: target_id.into(),
            key: key.into(),
            mode,
        }
    }

    /// Text binding whose target id is the key itself.
    pub fn text(key: &str) -> Self {
        Self::new(key, key, BindingMode::Text)
    }

    pub fn markup(key: &str) -> Self {
        Self::new(key, key, BindingMode::Markup)
    }

    pub fn placeholder(key: &str) -> Self {
        Self::new(key, key, BindingMode::Placeholder)
    }
}

/// Ordered list of bindings for one page.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    bindings: Vec<Binding>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add one text binding per key.
    pub fn with_texts(mut self, keys: &[&str]) -> Self {
        self.bindings.extend(keys.iter().map(|key| Binding::text(key)));
        self
    }

    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub fn extend(&mut self, other: BindingSet) {
        self.bindings.extend(other.bindings);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A binding together with its resolved, mode-escaped value.
#[derive(Debug, Clone)]
struct BoundSlot {
    binding: Binding,
    value: String,
}

/// Result of applying a [`BindingSet`].
#[derive(Debug, Clone)]
pub struct BoundView {
    config: DisplayConfig,
    slots: HashMap<String, BoundSlot>,
}

impl BoundView {
    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    /// The escaped value bound to `target_id`.
    pub fn get(&self, target_id: &str) -> Option<&str> {
        self.slots.get(target_id).map(|slot| slot.value.as_str())
    }

    /// Like [`get`](Self::get), but an undeclared target renders empty.
    pub fn slot(&self, target_id: &str) -> &str {
        match self.get(target_id) {
            Some(value) => value,
            None => {
                debug!(target_id, "Page template reads an undeclared binding");
                ""
            }
        }
    }

    /// Render the bound target as an element carrying its binding attribute.
    ///
    /// Placeholder bindings render as the attribute pair instead
    /// (`data-i18n="..." placeholder="..."`) and ignore `tag`.
    pub fn element(&self, target_id: &str, tag: &str) -> String {
        let Some(slot) = self.slots.get(target_id) else {
            debug!(target_id, "Page template reads an undeclared binding");
            return String::new();
        };
        let key = escape_html(&slot.binding.key);

        match slot.binding.mode {
            BindingMode::Text => {
                format!(r#"<{tag} data-i18n="{key}">{}</{tag}>"#, slot.value)
            }
            BindingMode::Markup => {
                format!(r#"<{tag} data-i18n-html="{key}">{}</{tag}>"#, slot.value)
            }
            BindingMode::Placeholder => {
                format!(r#"data-i18n="{key}" placeholder="{}""#, slot.value)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Resolves bindings against a translation store.
#[derive(Debug, Clone, Copy)]
pub struct ContentBinder<'a> {
    store: &'a TranslationStore,
}

impl<'a> ContentBinder<'a> {
    pub fn new(store: &'a TranslationStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a TranslationStore {
        self.store
    }

    /// Resolve every binding of `bindings` for `config`.
    ///
    /// A later binding with the same target id replaces an earlier one.
    pub fn apply(&self, bindings: &BindingSet, config: DisplayConfig) -> BoundView {
        let slots = bindings
            .iter()
            .map(|binding| {
                let value = self.render(&binding.key, binding.mode, config.locale);
                (
                    binding.target_id.clone(),
                    BoundSlot {
                        binding: binding.clone(),
                        value,
                    },
                )
            })
            .collect();

        BoundView { config, slots }
    }

    /// Resolve one key and escape it for `mode`.
    pub fn render(&self, key: &str, mode: BindingMode, locale: Locale) -> String {
        let resolved = self.store.resolve(key, locale);
        match mode {
            BindingMode::Markup => resolved,
            BindingMode::Text | BindingMode::Placeholder => escape_html(&resolved),
        }
    }

    /// Escaped text with parameters substituted.
    pub fn text_with(&self, key: &str, locale: Locale, params: &[(&str, &str)]) -> String {
        escape_html(&self.store.resolve_with(key, locale, params))
    }

    /// `<tag data-i18n="key">text</tag>` for inline labels inside fragments.
    pub fn label(&self, key: &str, tag: &str, locale: Locale) -> String {
        format!(
            r#"<{tag} data-i18n="{}">{}</{tag}>"#,
            escape_html(key),
            self.render(key, BindingMode::Text, locale)
        )
    }
}
