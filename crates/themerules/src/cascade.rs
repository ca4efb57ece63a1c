//! Rule matching and token resolution.
//!
//! This module decides which class tokens an element receives:
//!
//! - [`ElementQuery`]: the element being styled
//! - [`Resolver`]: pre-parsed rules plus a memoized style table
//! - [`resolve`]: one-shot resolution without caching
//!
//! ## Resolution Order
//!
//! 1. Every rule matching the element contributes tokens, in configuration
//!    order. Simultaneous matches accumulate; there is no single winner.
//! 2. Only if step 1 produced no tokens, the component's theme from
//!    `components` applies.
//! 3. The component's `darkMode` theme is always appended, every token
//!    carrying the `dark:` qualifier.
//!
//! ## Selector Matching
//!
//! - Component constraints match `query.component` exactly
//! - Tag constraints match `query.tag` exactly
//! - Class constraints match any whitespace-separated token of `query.class_name`
//! - Id constraints match `query.id`
//! - Undeclared constraints match anything

use std::sync::Arc;

use crate::{
    parser::{RuleDiagnostic, RuleSelector, RuleSet, Target},
    styles::{StyleTable, Variant, styles_for},
    types::ThemeConfiguration,
};

/// One element instance to resolve styling for.
///
/// # Example
///
/// ```
/// use themerules::cascade::ElementQuery;
/// use themerules::parser::parse_rule;
///
/// let query = ElementQuery::new("UserCard", "img").with_class_name("avatar rounded");
/// assert!(query.matches(&parse_rule("UserCard:.avatar:purple").unwrap()));
/// assert!(!query.matches(&parse_rule("Clock:.avatar:purple").unwrap()));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementQuery<'a> {
    /// The element's tag name (e.g., "button", "div").
    pub tag: &'a str,
    /// The element's literal class attribute, if it has one.
    pub class_name: Option<&'a str>,
    /// The element's literal id attribute, if it has one.
    pub id: Option<&'a str>,
    /// Name of the enclosing component.
    pub component: &'a str,
}

impl<'a> ElementQuery<'a> {
    pub fn new(component: &'a str, tag: &'a str) -> Self {
        Self {
            tag,
            class_name: None,
            id: None,
            component,
        }
    }

    pub fn with_class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks the class attribute for a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name
            .is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
    }

    /// Checks every constraint the selector declares.
    pub fn matches(&self, selector: &RuleSelector) -> bool {
        if selector
            .component
            .as_deref()
            .is_some_and(|component| component != self.component)
        {
            return false;
        }

        match &selector.target {
            None => true,
            Some(Target::Tag(tag)) => self.tag == tag.as_str(),
            Some(Target::Class(class)) => self.has_class(class),
            Some(Target::Id(id)) => self.id == Some(id.as_str()),
        }
    }
}

/// Where a run of tokens in a [`ResolvedStyle`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleSource {
    /// A matching rule, by its position in the configuration's rule list.
    Rule { index: usize },
    /// The component's entry in `components`.
    Component,
    /// The component's entry in `darkMode`.
    DarkMode,
}

/// The tokens resolved for one element, with their provenance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub tokens: Vec<String>,
    /// One entry per source that contributed at least one token.
    pub sources: Vec<StyleSource>,
}

impl ResolvedStyle {
    fn push(&mut self, source: StyleSource, tokens: &[String]) {
        if tokens.is_empty() {
            return;
        }
        self.tokens.extend_from_slice(tokens);
        self.sources.push(source);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

/// The core cascade, generic over how a (theme, variant) pair becomes tokens
/// for the query's tag.
fn cascade<S, F>(
    query: &ElementQuery<'_>,
    config: &ThemeConfiguration,
    rules: &RuleSet,
    styles: F,
) -> ResolvedStyle
where
    S: AsRef<[String]>,
    F: Fn(&str, Variant) -> S,
{
    let mut resolved = ResolvedStyle::default();

    // 1. Rule matches, all of them, in configuration order
    for (index, selector) in rules.iter() {
        if query.matches(selector) {
            let tokens = styles(&selector.theme_or_color, Variant::Base);
            log::trace!(
                "CASCADE: <{}> in {} matched rule #{index} `{selector}` -> {:?}",
                query.tag,
                query.component,
                tokens.as_ref()
            );
            resolved.push(StyleSource::Rule { index }, tokens.as_ref());
        }
    }

    // 2. Component theme, suppressed by any rule tokens
    if resolved.is_empty() {
        if let Some(theme) = config.components.get(query.component) {
            resolved.push(StyleSource::Component, styles(theme, Variant::Base).as_ref());
        }
    }

    // 3. Dark mode overlay, always
    if let Some(theme) = config.dark_mode.get(query.component) {
        resolved.push(StyleSource::DarkMode, styles(theme, Variant::Dark).as_ref());
    }

    resolved
}

/// Resolves tokens for elements against one configuration snapshot.
///
/// Rules are parsed once at construction and styles are memoized, so a
/// resolver should live as long as its compilation unit. Construct one per
/// configuration; share the configuration itself through the `Arc`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use themerules::cascade::{ElementQuery, Resolver};
/// use themerules::types::{ColorTheme, ThemeConfiguration};
///
/// let config = ThemeConfiguration::empty()
///     .with_theme("danger", ColorTheme::new("#ef4444", "#f87171", "#dc2626", "#ffffff"))
///     .with_rule(".cta:danger*");
/// let resolver = Resolver::new(Arc::new(config));
///
/// let query = ElementQuery::new("Landing", "span").with_class_name("cta");
/// assert_eq!(resolver.resolve(&query).tokens, vec!["text-white"]);
/// ```
#[derive(Debug)]
pub struct Resolver {
    rules: RuleSet,
    table: StyleTable,
}

impl Resolver {
    pub fn new(config: Arc<ThemeConfiguration>) -> Self {
        let rules = RuleSet::parse(&config.rules);
        log::debug!(
            "Resolver ready: {} rules ({} skipped), {} themes",
            rules.len(),
            rules.diagnostics().len(),
            config.colors.len()
        );

        Self {
            rules,
            table: StyleTable::new(config),
        }
    }

    pub fn config(&self) -> &ThemeConfiguration {
        self.table.config()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rules from the configuration that failed to parse.
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        self.rules.diagnostics()
    }

    pub fn resolve(&self, query: &ElementQuery<'_>) -> ResolvedStyle {
        cascade(query, self.table.config(), &self.rules, |theme, variant| {
            self.table.styles_for(query.tag, theme, variant)
        })
    }
}

/// Resolves the token list for one element without any caching.
///
/// Rules are parsed on every call; prefer [`Resolver`] for more than a handful
/// of elements.
pub fn resolve(query: &ElementQuery<'_>, config: &ThemeConfiguration) -> Vec<String> {
    let rules = RuleSet::parse(&config.rules);
    cascade(query, config, &rules, |theme, variant| {
        styles_for(query.tag, theme, config, variant)
    })
    .into_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_rule;

    #[test]
    fn test_unconstrained_selector_matches_everything() {
        let selector = parse_rule("primary").unwrap();
        assert!(ElementQuery::new("A", "div").matches(&selector));
        assert!(ElementQuery::new("B", "custom-tag").matches(&selector));
    }

    #[test]
    fn test_class_requires_whole_token() {
        let query = ElementQuery::new("App", "div").with_class_name("cta-button  big");
        assert!(query.has_class("big"));
        assert!(query.has_class("cta-button"));
        assert!(!query.has_class("cta"));
        assert!(!ElementQuery::new("App", "div").has_class("cta"));
    }

    #[test]
    fn test_id_requires_presence() {
        let selector = parse_rule("#save:success").unwrap();
        assert!(!ElementQuery::new("App", "button").matches(&selector));
        assert!(ElementQuery::new("App", "button").with_id("save").matches(&selector));
    }

    #[test]
    fn test_component_is_case_sensitive() {
        let selector = parse_rule("Clock:div:primary").unwrap();
        assert!(!ElementQuery::new("clock", "div").matches(&selector));
        assert!(ElementQuery::new("Clock", "div").matches(&selector));
        assert!(!ElementQuery::new("Clock", "span").matches(&selector));
    }
}
