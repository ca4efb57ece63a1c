use std::fmt;

use crate::types::ColorRef;

/// The element constraint of a rule: a tag, a class or an id.
///
/// A rule names at most one of these, so they share a single slot on
/// [`RuleSelector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Tag(String),
    Class(String),
    Id(String),
}

/// A parsed rule pattern.
///
/// Rules have the shape `[component:]([tag]|[.class]|[#id]):themeOrColor[*]`.
/// Every constraint that is `None` matches any element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSelector {
    /// The rule ended with the `*` marker.
    pub global: bool,
    /// Exact, case-sensitive component name constraint.
    pub component: Option<String>,
    /// Tag, class or id constraint.
    pub target: Option<Target>,
    /// Theme name or bracketed custom color, kept verbatim.
    pub theme_or_color: String,
}

impl RuleSelector {
    /// Creates an unconstrained selector for a theme or custom color.
    pub fn new(theme_or_color: impl Into<String>) -> Self {
        Self {
            global: false,
            component: None,
            target: None,
            theme_or_color: theme_or_color.into(),
        }
    }

    pub fn element_tag(&self) -> Option<&str> {
        match &self.target {
            Some(Target::Tag(tag)) => Some(tag),
            _ => None,
        }
    }

    /// Classifies the final segment as a theme reference or a custom color.
    pub fn color_ref(&self) -> ColorRef<'_> {
        ColorRef::classify(&self.theme_or_color)
    }

    /// Returns true if the selector declares no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.component.is_none() && self.target.is_none()
    }
}

impl fmt::Display for RuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(component) = &self.component {
            write!(f, "{component}:")?;
        }
        match &self.target {
            Some(Target::Tag(tag)) => write!(f, "{tag}:")?,
            Some(Target::Class(class)) => write!(f, ".{class}:")?,
            Some(Target::Id(id)) => write!(f, "#{id}:")?,
            None => {}
        }
        f.write_str(&self.theme_or_color)?;
        if self.global {
            f.write_str("*")?;
        }
        Ok(())
    }
}
