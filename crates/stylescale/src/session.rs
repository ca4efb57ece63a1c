use std::path::Path;
use std::sync::Arc;

use themerules::cascade::{ElementQuery, ResolvedStyle, Resolver};
use themerules::merge::{ClassEdit, ClassValue};
use themerules::types::ThemeConfiguration;

use crate::Result;
use crate::component::{BindingValue, ComponentContext};
use crate::config::{SessionOptions, load_config};

/// The attributes of one element that take part in styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementAttributes<'a> {
    /// The element's tag name (e.g., "button").
    pub tag: &'a str,
    /// The class attribute as written in the source.
    pub class: ClassValue<'a>,
    /// The id attribute, only when it is a literal.
    pub id: Option<&'a str>,
}

impl<'a> ElementAttributes<'a> {
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            class: ClassValue::Absent,
            id: None,
        }
    }

    pub fn with_class(mut self, class: ClassValue<'a>) -> Self {
        self.class = class;
        self
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// The class value usable for class constraints. Computed expressions
    /// never satisfy one.
    fn literal_class(&self) -> Option<&'a str> {
        match self.class {
            ClassValue::Literal(value) => Some(value),
            ClassValue::Absent | ClassValue::Expression => None,
        }
    }
}

/// Styles the elements of one compilation unit.
///
/// A session follows the host's traversal: [`begin_file`](Self::begin_file)
/// once per unit, then declarations and elements in source order. Elements
/// seen before any component name is known are left alone.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use stylescale::session::{ElementAttributes, StyleSession};
/// use stylescale::themerules::{ClassEdit, ClassValue, ColorTheme, ThemeConfiguration};
///
/// let config = ThemeConfiguration::empty()
///     .with_theme("primary", ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"))
///     .with_component("Clock", "primary");
///
/// let mut session = StyleSession::new(Arc::new(config));
/// session.begin_file("src/Clock.tsx");
///
/// let edit = session.style_element(
///     &ElementAttributes::new("span").with_class(ClassValue::Literal("tick")),
/// );
/// assert_eq!(edit, Some(ClassEdit::Replace("tick text-white".to_string())));
/// ```
#[derive(Debug)]
pub struct StyleSession {
    resolver: Arc<Resolver>,
    context: ComponentContext,
}

impl StyleSession {
    pub fn new(config: Arc<ThemeConfiguration>) -> Self {
        Self::with_resolver(Arc::new(Resolver::new(config)))
    }

    /// A session reusing another session's parsed rules and style table.
    pub fn with_resolver(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            context: ComponentContext::default(),
        }
    }

    /// Loads the configuration named by `options`, relative to `root`.
    pub fn from_options(options: &SessionOptions, root: &Path) -> Result<Self> {
        let config = load_config(options.resolve_config_path(root))?;
        Ok(Self::new(config))
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// The component elements are currently attributed to.
    pub fn component(&self) -> Option<&str> {
        self.context.current()
    }

    pub fn begin_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.context.enter_file(path);
        log::debug!(
            "Styling {} as component {:?}",
            path.display(),
            self.context.current()
        );
    }

    pub fn enter_function(&mut self, name: &str) {
        self.context.enter_function(name);
    }

    pub fn enter_binding(&mut self, name: &str, value: BindingValue) {
        self.context.enter_binding(name, value);
    }

    /// Resolves the element without planning an edit.
    ///
    /// Empty when no component is known or the element has no tag.
    pub fn resolve(&self, element: &ElementAttributes<'_>) -> ResolvedStyle {
        let Some(component) = self.context.current() else {
            return ResolvedStyle::default();
        };
        if element.tag.is_empty() {
            return ResolvedStyle::default();
        }

        let mut query = ElementQuery::new(component, element.tag);
        query.class_name = element.literal_class();
        query.id = element.id;
        self.resolver.resolve(&query)
    }

    /// Plans the class attribute edit for one element, if any.
    pub fn style_element(&self, element: &ElementAttributes<'_>) -> Option<ClassEdit> {
        let style = self.resolve(element);
        let edit = ClassEdit::plan(element.class, &style.tokens);
        if let Some(edit) = &edit {
            log::trace!(
                "<{}> in {:?}: {:?} from {:?}",
                element.tag,
                self.context.current(),
                edit,
                style.sources
            );
        }
        edit
    }
}
