//! Theme definitions and the configuration they live in.
//!
//! A theme is four related colors. Every color-bearing token in a style
//! template names one of these roles:
//!
//! | Role    | Used for                                   |
//! |---------|--------------------------------------------|
//! | `main`  | gradient start, hover backgrounds, rings   |
//! | `light` | headings, links, input borders             |
//! | `dark`  | gradient end, button backgrounds, focus    |
//! | `text`  | body text on themed backgrounds            |
//!
//! ## Configuration shape
//!
//! ```json
//! {
//!   "colors": {
//!     "primary": { "main": "#3b82f6", "light": "#60a5fa", "dark": "#2563eb", "text": "#ffffff" }
//!   },
//!   "components": { "Clock": "primary" },
//!   "rules": ["button:primary*", "Dashboard:button:warning"],
//!   "darkMode": { "Clock": "purple" }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Text color used when a theme leaves `text` unset or empty.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// One of the four color slots of a [`ColorTheme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Main,
    Light,
    Dark,
    Text,
}

/// A named set of four related colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    /// Main/primary color for the theme.
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: String,
    /// Lighter shade for accents and headings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub light: String,
    /// Darker shade for emphasis and buttons.
    #[serde(default, deserialize_with = "null_as_default")]
    pub dark: String,
    /// Text color for contrast against `main`/`dark`.
    #[serde(default = "default_text", deserialize_with = "null_as_default")]
    pub text: String,
}

fn default_text() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

/// Reads `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ColorTheme {
    /// Creates a theme from its four color literals.
    pub fn new(
        main: impl Into<String>,
        light: impl Into<String>,
        dark: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            main: main.into(),
            light: light.into(),
            dark: dark.into(),
            text: text.into(),
        }
    }

    /// Returns the color literal stored for `role`.
    ///
    /// An empty `text` falls back to [`DEFAULT_TEXT_COLOR`].
    pub fn role(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Main => &self.main,
            ColorRole::Light => &self.light,
            ColorRole::Dark => &self.dark,
            ColorRole::Text if self.text.trim().is_empty() => DEFAULT_TEXT_COLOR,
            ColorRole::Text => &self.text,
        }
    }
}

/// The declarative input to resolution.
///
/// Read-only for the lifetime of a resolution session; share it behind an
/// `Arc` when several compilation units use the same snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfiguration {
    /// Theme name to theme colors.
    #[serde(deserialize_with = "null_as_default")]
    pub colors: HashMap<String, ColorTheme>,
    /// Component name to theme name, applied when no rule matches.
    #[serde(deserialize_with = "null_as_default")]
    pub components: HashMap<String, String>,
    /// Rule patterns, evaluated in order.
    #[serde(deserialize_with = "null_as_default")]
    pub rules: Vec<String>,
    /// Component name to theme name, appended with the `dark:` qualifier.
    #[serde(deserialize_with = "null_as_default")]
    pub dark_mode: HashMap<String, String>,
}

impl ThemeConfiguration {
    /// An empty configuration. Every resolution against it yields no tokens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder method to register a theme.
    pub fn with_theme(mut self, name: impl Into<String>, theme: ColorTheme) -> Self {
        self.colors.insert(name.into(), theme);
        self
    }

    /// Builder method to map a component to a theme.
    pub fn with_component(
        mut self,
        component: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        self.components.insert(component.into(), theme.into());
        self
    }

    /// Builder method to append a rule pattern.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Builder method to map a component to a dark-mode theme.
    pub fn with_dark_mode(
        mut self,
        component: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        self.dark_mode.insert(component.into(), theme.into());
        self
    }

    /// Looks up a theme by name.
    pub fn theme(&self, name: &str) -> Option<&ColorTheme> {
        self.colors.get(name)
    }

    /// Returns true if nothing in this configuration can produce tokens.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.components.is_empty()
            && self.rules.is_empty()
            && self.dark_mode.is_empty()
    }
}
