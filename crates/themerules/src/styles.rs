//! Per-tag style templates.
//!
//! Each recognised [`Tag`] has two fixed templates: one for named themes, where
//! color-bearing tokens pick a [`ColorRole`] of the theme, and one for custom
//! colors, where the raw CSS value is embedded in bracket declarations.
//!
//! ```text
//! button + primary    -> bg-blue-600 hover:bg-blue-500 text-white px-4 ...
//! button + [#ff0000]  -> [background-color:#ff0000] hover:[background-color:#ff0000]/90 ...
//! ```
//!
//! The dark variant prefixes every generated token with `dark:`.
//!
//! [`StyleTable`] memoizes templates for one configuration snapshot.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::ColorRole::{Dark, Light, Main, Text};
use crate::types::{ColorRef, ColorRole, ColorTheme, Tag, ThemeConfiguration, palette_fragment};

/// Qualifier prepended to every token of the dark variant.
pub const DARK_QUALIFIER: &str = "dark:";

/// Which flavour of a template to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Base,
    Dark,
}

impl Variant {
    pub fn qualifier(self) -> &'static str {
        match self {
            Variant::Base => "",
            Variant::Dark => DARK_QUALIFIER,
        }
    }
}

/// A token of a named-theme template.
#[derive(Clone, Copy, Debug)]
enum ThemeToken {
    Fixed(&'static str),
    /// `utility-<palette fragment of role>`
    Color(&'static str, ColorRole),
}

/// A token of a custom-color template.
#[derive(Clone, Copy, Debug)]
enum CustomToken {
    Fixed(&'static str),
    /// `[variant:][property:value][/opacity]`
    Literal {
        variant: Option<&'static str>,
        property: &'static str,
        opacity: Option<u8>,
    },
}

use CustomToken::Literal;

/// Custom backgrounds always get white text.
const CUSTOM_TEXT: CustomToken = CustomToken::Fixed("[color:white]");

const fn bracket(property: &'static str) -> CustomToken {
    Literal {
        variant: None,
        property,
        opacity: None,
    }
}

const DIV: &[ThemeToken] = &[
    ThemeToken::Fixed("bg-gradient-to-br"),
    ThemeToken::Color("from", Main),
    ThemeToken::Color("to", Dark),
    ThemeToken::Color("text", Text),
    ThemeToken::Fixed("p-6"),
    ThemeToken::Fixed("rounded-lg"),
    ThemeToken::Fixed("shadow-lg"),
];

const H1: &[ThemeToken] = &[
    ThemeToken::Fixed("text-4xl"),
    ThemeToken::Fixed("font-bold"),
    ThemeToken::Color("text", Light),
    ThemeToken::Fixed("mb-4"),
];

const H2: &[ThemeToken] = &[
    ThemeToken::Fixed("text-3xl"),
    ThemeToken::Fixed("font-bold"),
    ThemeToken::Color("text", Light),
    ThemeToken::Fixed("mb-4"),
];

const H3: &[ThemeToken] = &[
    ThemeToken::Fixed("text-2xl"),
    ThemeToken::Fixed("font-semibold"),
    ThemeToken::Color("text", Light),
    ThemeToken::Fixed("mb-3"),
];

const H4: &[ThemeToken] = &[
    ThemeToken::Fixed("text-xl"),
    ThemeToken::Fixed("font-semibold"),
    ThemeToken::Color("text", Text),
    ThemeToken::Fixed("mb-2"),
];

const P: &[ThemeToken] = &[
    ThemeToken::Color("text", Text),
    ThemeToken::Fixed("opacity-90"),
    ThemeToken::Fixed("mb-2"),
];

const BUTTON: &[ThemeToken] = &[
    ThemeToken::Color("bg", Dark),
    ThemeToken::Color("hover:bg", Main),
    ThemeToken::Color("text", Text),
    ThemeToken::Fixed("px-4"),
    ThemeToken::Fixed("py-2"),
    ThemeToken::Fixed("rounded-lg"),
    ThemeToken::Fixed("font-medium"),
    ThemeToken::Fixed("transition-colors"),
    ThemeToken::Fixed("duration-200"),
    ThemeToken::Fixed("shadow-md"),
    ThemeToken::Fixed("hover:shadow-lg"),
    ThemeToken::Fixed("cursor-pointer"),
];

const INPUT: &[ThemeToken] = &[
    ThemeToken::Fixed("border-2"),
    ThemeToken::Color("border", Light),
    ThemeToken::Color("focus:border", Dark),
    ThemeToken::Fixed("rounded-lg"),
    ThemeToken::Fixed("px-4"),
    ThemeToken::Fixed("py-2"),
    ThemeToken::Fixed("bg-white"),
    ThemeToken::Fixed("text-gray-900"),
    ThemeToken::Fixed("focus:outline-none"),
    ThemeToken::Fixed("focus:ring-2"),
    ThemeToken::Color("focus:ring", Main),
    ThemeToken::Fixed("focus:ring-opacity-50"),
];

const A: &[ThemeToken] = &[
    ThemeToken::Color("text", Light),
    ThemeToken::Color("hover:text", Text),
    ThemeToken::Fixed("underline"),
    ThemeToken::Fixed("transition-colors"),
];

const SPAN: &[ThemeToken] = &[ThemeToken::Color("text", Text)];

const LABEL: &[ThemeToken] = &[
    ThemeToken::Color("text", Text),
    ThemeToken::Fixed("font-medium"),
    ThemeToken::Fixed("mb-2"),
    ThemeToken::Fixed("block"),
];

const CUSTOM_DIV: &[CustomToken] = &[
    bracket("background-color"),
    CUSTOM_TEXT,
    CustomToken::Fixed("p-6"),
    CustomToken::Fixed("rounded-lg"),
    CustomToken::Fixed("shadow-lg"),
];

const CUSTOM_BUTTON: &[CustomToken] = &[
    bracket("background-color"),
    Literal {
        variant: Some("hover"),
        property: "background-color",
        opacity: Some(90),
    },
    CUSTOM_TEXT,
    CustomToken::Fixed("px-4"),
    CustomToken::Fixed("py-2"),
    CustomToken::Fixed("rounded-lg"),
    CustomToken::Fixed("font-medium"),
    CustomToken::Fixed("transition-colors"),
    CustomToken::Fixed("cursor-pointer"),
];

const CUSTOM_H1: &[CustomToken] = &[
    CustomToken::Fixed("text-4xl"),
    CustomToken::Fixed("font-bold"),
    CUSTOM_TEXT,
    CustomToken::Fixed("mb-4"),
];

const CUSTOM_H2: &[CustomToken] = &[
    CustomToken::Fixed("text-3xl"),
    CustomToken::Fixed("font-bold"),
    CUSTOM_TEXT,
    CustomToken::Fixed("mb-4"),
];

const CUSTOM_H3: &[CustomToken] = &[
    CustomToken::Fixed("text-2xl"),
    CustomToken::Fixed("font-semibold"),
    CUSTOM_TEXT,
    CustomToken::Fixed("mb-3"),
];

const CUSTOM_H4: &[CustomToken] = &[
    CustomToken::Fixed("text-xl"),
    CustomToken::Fixed("font-semibold"),
    CUSTOM_TEXT,
    CustomToken::Fixed("mb-2"),
];

const CUSTOM_P: &[CustomToken] = &[
    CUSTOM_TEXT,
    CustomToken::Fixed("opacity-90"),
    CustomToken::Fixed("mb-2"),
];

const CUSTOM_INPUT: &[CustomToken] = &[
    CustomToken::Fixed("border-2"),
    bracket("border-color"),
    CustomToken::Fixed("rounded-lg"),
    CustomToken::Fixed("px-4"),
    CustomToken::Fixed("py-2"),
    CustomToken::Fixed("bg-white"),
    CustomToken::Fixed("text-gray-900"),
    CustomToken::Fixed("focus:outline-none"),
];

const CUSTOM_A: &[CustomToken] = &[
    bracket("color"),
    CustomToken::Fixed("hover:underline"),
    CustomToken::Fixed("transition-colors"),
];

const CUSTOM_SPAN: &[CustomToken] = &[CUSTOM_TEXT];

const CUSTOM_LABEL: &[CustomToken] = &[
    CUSTOM_TEXT,
    CustomToken::Fixed("font-medium"),
    CustomToken::Fixed("mb-2"),
    CustomToken::Fixed("block"),
];

fn theme_template(tag: Tag) -> &'static [ThemeToken] {
    match tag {
        Tag::Div => DIV,
        Tag::Button => BUTTON,
        Tag::H1 => H1,
        Tag::H2 => H2,
        Tag::H3 => H3,
        Tag::H4 => H4,
        Tag::P => P,
        Tag::Input => INPUT,
        Tag::A => A,
        Tag::Span => SPAN,
        Tag::Label => LABEL,
    }
}

fn custom_template(tag: Tag) -> &'static [CustomToken] {
    match tag {
        Tag::Div => CUSTOM_DIV,
        Tag::Button => CUSTOM_BUTTON,
        Tag::H1 => CUSTOM_H1,
        Tag::H2 => CUSTOM_H2,
        Tag::H3 => CUSTOM_H3,
        Tag::H4 => CUSTOM_H4,
        Tag::P => CUSTOM_P,
        Tag::Input => CUSTOM_INPUT,
        Tag::A => CUSTOM_A,
        Tag::Span => CUSTOM_SPAN,
        Tag::Label => CUSTOM_LABEL,
    }
}

impl ThemeToken {
    fn render(self, theme: &ColorTheme) -> String {
        match self {
            ThemeToken::Fixed(token) => token.to_string(),
            ThemeToken::Color(utility, role) => {
                format!("{utility}-{}", palette_fragment(theme.role(role)))
            }
        }
    }
}

impl CustomToken {
    fn render(self, value: &str) -> String {
        match self {
            CustomToken::Fixed(token) => token.to_string(),
            Literal {
                variant,
                property,
                opacity,
            } => {
                let variant = variant.map(|v| format!("{v}:")).unwrap_or_default();
                let opacity = opacity.map(|o| format!("/{o}")).unwrap_or_default();
                format!("{variant}[{property}:{value}]{opacity}")
            }
        }
    }
}

fn render_tag(
    tag: Tag,
    theme_or_color: &str,
    config: &ThemeConfiguration,
    variant: Variant,
) -> Vec<String> {
    let tokens: Vec<String> = match ColorRef::classify(theme_or_color) {
        ColorRef::Custom(value) => custom_template(tag)
            .iter()
            .map(|token| token.render(value))
            .collect(),
        ColorRef::Theme(name) => match config.theme(name) {
            Some(theme) => theme_template(tag)
                .iter()
                .map(|token| token.render(theme))
                .collect(),
            None => return Vec::new(),
        },
    };

    match variant {
        Variant::Base => tokens,
        Variant::Dark => tokens
            .into_iter()
            .map(|token| format!("{DARK_QUALIFIER}{token}"))
            .collect(),
    }
}

/// Returns the ordered class tokens for `tag` under a theme or custom color.
///
/// Unknown tags and unknown theme names yield an empty list.
///
/// ```
/// use themerules::styles::{styles_for, Variant};
/// use themerules::types::{ColorTheme, ThemeConfiguration};
///
/// let config = ThemeConfiguration::empty().with_theme(
///     "primary",
///     ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"),
/// );
///
/// assert_eq!(
///     styles_for("span", "primary", &config, Variant::Base),
///     vec!["text-white"]
/// );
/// assert_eq!(
///     styles_for("span", "primary", &config, Variant::Dark),
///     vec!["dark:text-white"]
/// );
/// assert!(styles_for("section", "primary", &config, Variant::Base).is_empty());
/// ```
pub fn styles_for(
    tag: &str,
    theme_or_color: &str,
    config: &ThemeConfiguration,
    variant: Variant,
) -> Vec<String> {
    match Tag::from_name(tag) {
        Some(tag) => render_tag(tag, theme_or_color, config, variant),
        None => Vec::new(),
    }
}

type StyleCache = HashMap<(Tag, Variant), HashMap<String, Arc<[String]>>>;

/// Memoized [`styles_for`] over one configuration snapshot.
///
/// Entries are never invalidated; the configuration is immutable for the
/// table's lifetime.
#[derive(Debug)]
pub struct StyleTable {
    config: Arc<ThemeConfiguration>,
    cache: RwLock<StyleCache>,
}

impl StyleTable {
    pub fn new(config: Arc<ThemeConfiguration>) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ThemeConfiguration {
        &self.config
    }

    /// Cached equivalent of [`styles_for`] against this table's configuration.
    pub fn styles_for(&self, tag: &str, theme_or_color: &str, variant: Variant) -> Arc<[String]> {
        let Some(tag) = Tag::from_name(tag) else {
            return Vec::new().into();
        };

        // Try read lock first
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache
                .get(&(tag, variant))
                .and_then(|by_theme| by_theme.get(theme_or_color))
            {
                return Arc::clone(cached);
            }
        }

        let tokens: Arc<[String]> = render_tag(tag, theme_or_color, &self.config, variant).into();
        log::trace!(
            "STYLES: cached {tag} + {theme_or_color} ({variant:?}) -> {} tokens",
            tokens.len()
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry((tag, variant))
            .or_default()
            .insert(theme_or_color.to_string(), Arc::clone(&tokens));

        tokens
    }

    /// Number of memoized (tag, theme, variant) entries.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(HashMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ThemeConfiguration {
        ThemeConfiguration::empty().with_theme(
            "primary",
            ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"),
        )
    }

    #[test]
    fn test_every_tag_has_both_templates() {
        let config = config();
        for tag in Tag::ALL {
            assert!(
                !styles_for(tag.as_str(), "primary", &config, Variant::Base).is_empty(),
                "{tag} has no theme template"
            );
            assert!(
                !styles_for(tag.as_str(), "[#ff0000]", &config, Variant::Base).is_empty(),
                "{tag} has no custom template"
            );
        }
    }

    #[test]
    fn test_custom_literal_rendering() {
        let hover = Literal {
            variant: Some("hover"),
            property: "background-color",
            opacity: Some(90),
        };
        assert_eq!(hover.render("#ff0000"), "hover:[background-color:#ff0000]/90");
        assert_eq!(bracket("color").render("var(--x)"), "[color:var(--x)]");
    }

    #[test]
    fn test_table_memoizes_per_variant() {
        let table = StyleTable::new(Arc::new(config()));
        let first = table.styles_for("button", "primary", Variant::Base);
        let again = table.styles_for("button", "primary", Variant::Base);
        assert!(Arc::ptr_eq(&first, &again));

        let dark = table.styles_for("button", "primary", Variant::Dark);
        assert!(dark.iter().all(|t| t.starts_with(DARK_QUALIFIER)));
        assert_eq!(table.len(), 2);

        table.styles_for("section", "primary", Variant::Base);
        assert_eq!(table.len(), 2);
    }
}
