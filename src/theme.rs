//! Light/dark theme and its fixed palettes.

use serde::{Deserialize, Serialize};

/// Site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome class for the toggle button: the icon of the *other* theme.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Colors substituted into the page's CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_light: &'static str,
    pub background: &'static str,
    pub card_bg: &'static str,
    pub header_bg: &'static str,
    pub footer_bg: &'static str,
    pub border: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#7B61FF",
    secondary: "#00D4AA",
    accent: "#FF6B9D",
    text: "#2D3748",
    text_light: "#6B7280",
    background: "#FAFBFF",
    card_bg: "#FFFFFF",
    header_bg: "#FFFFFF",
    footer_bg: "#1A1D29",
    border: "#F0F2F8",
};

pub const DARK: Palette = Palette {
    primary: "#8B75FF",
    secondary: "#00E6BF",
    accent: "#FF7BA9",
    text: "#F7FAFC",
    text_light: "#CBD5E0",
    background: "#0F1117",
    card_bg: "#1A1D29",
    header_bg: "#1A1D29",
    footer_bg: "#0F1117",
    border: "#2D3246",
};

impl Palette {
    /// `(css variable, color)` pairs in declaration order.
    pub fn variables(&self) -> [(&'static str, &'static str); 10] {
        [
            ("--primary-color", self.primary),
            ("--secondary-color", self.secondary),
            ("--accent-color", self.accent),
            ("--text-color", self.text),
            ("--text-light", self.text_light),
            ("--background-color", self.background),
            ("--card-bg", self.card_bg),
            ("--header-bg", self.header_bg),
            ("--footer-bg", self.footer_bg),
            ("--border-color", self.border),
        ]
    }

    /// Declarations for a `:root { ... }` rule.
    pub fn css_declarations(&self) -> String {
        self.variables()
            .iter()
            .map(|(name, color)| format!("{}: {};", name, color))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
