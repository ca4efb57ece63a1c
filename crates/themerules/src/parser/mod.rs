//! Rule pattern parsing.
//!
//! A rule maps an optional component/tag/class/id constraint to a theme name
//! or a custom color:
//!
//! | Pattern                     | Meaning                                    |
//! |-----------------------------|--------------------------------------------|
//! | `primary`                   | every element                              |
//! | `button:primary*`           | every `button` (global marker)             |
//! | `.cta:danger*`              | elements with class `cta`                  |
//! | `#submit:success*`          | the element with id `submit`               |
//! | `Clock:secondary`           | every element in component `Clock`         |
//! | `Dashboard:button:warning`  | buttons in `Dashboard`                     |
//! | `UserCard:.avatar:purple`   | `.avatar` elements in `UserCard`           |
//! | `Header:button:[#ff0000]`   | buttons in `Header`, custom red            |
//!
//! In a two-segment rule the first segment is a class/id if it starts with
//! `.`/`#`, a tag if it is one of the recognised tags (see
//! [`Tag`]), and a component name otherwise. In a
//! three-segment rule the first segment is always a component name.
//!
//! ## Submodules
//!
//! - [`rule`]: the [`RuleSelector`] data structure
//! - [`selectors`]: nom segment parsers

pub mod rule;
pub mod selectors;

pub use crate::parser::rule::{RuleSelector, Target};

use nom::combinator::all_consuming;

use crate::RuleError;
use crate::parser::selectors::{marked_target, parse_segments};
use crate::types::Tag;

/// Marker that ends a global rule.
pub const GLOBAL_MARKER: char = '*';

/// Parses a single rule pattern.
///
/// ```rust
/// use themerules::parser::{parse_rule, Target};
///
/// let rule = parse_rule("Dashboard:button:warning").unwrap();
/// assert_eq!(rule.component.as_deref(), Some("Dashboard"));
/// assert_eq!(rule.target, Some(Target::Tag("button".to_string())));
/// assert_eq!(rule.theme_or_color, "warning");
/// assert!(!rule.global);
/// ```
pub fn parse_rule(text: &str) -> Result<RuleSelector, RuleError> {
    let text = text.trim();
    let (body, global) = match text.strip_suffix(GLOBAL_MARKER) {
        Some(body) => (body, true),
        None => (text, false),
    };

    if body.is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let (_, segments) = all_consuming(parse_segments)(body).map_err(|e| {
        RuleError::InvalidSyntax {
            rule: text.to_string(),
            reason: e.to_string(),
        }
    })?;

    let empty_selector = || RuleError::EmptySelector {
        rule: text.to_string(),
    };

    let (component, target, theme) = match segments.as_slice() {
        [theme] => (None, None, *theme),
        [first, theme] => match marked_target(first) {
            Some(target) => (None, Some(target.ok_or_else(empty_selector)?), *theme),
            None if Tag::from_name(first).is_some() => {
                (None, Some(Target::Tag(first.to_string())), *theme)
            }
            None => (Some(first.to_string()), None, *theme),
        },
        [component, target, theme] => {
            let target = match marked_target(target) {
                Some(target) => target.ok_or_else(empty_selector)?,
                None => Target::Tag(target.to_string()),
            };
            (Some(component.to_string()), Some(target), *theme)
        }
        _ => {
            return Err(RuleError::TooManySegments {
                rule: text.to_string(),
                count: segments.len(),
            });
        }
    };

    Ok(RuleSelector {
        global,
        component,
        target,
        theme_or_color: theme.to_string(),
    })
}

/// A configured rule that failed to parse and was left out of a [`RuleSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDiagnostic {
    /// Position of the rule in the configuration.
    pub index: usize,
    pub rule: String,
    pub error: RuleError,
}

/// The parsed form of a configuration's rule list.
///
/// Malformed rules are skipped with a warning so one bad pattern never blocks
/// the rest; the surviving rules keep their configuration index.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<(usize, RuleSelector)>,
    diagnostics: Vec<RuleDiagnostic>,
}

impl RuleSet {
    pub fn parse<S: AsRef<str>>(rules: &[S]) -> Self {
        let mut set = RuleSet::default();

        for (index, rule) in rules.iter().enumerate() {
            let rule = rule.as_ref();
            match parse_rule(rule) {
                Ok(selector) => set.rules.push((index, selector)),
                Err(error) => {
                    log::warn!("Skipping rule #{index} `{rule}`: {error}");
                    set.diagnostics.push(RuleDiagnostic {
                        index,
                        rule: rule.to_string(),
                        error,
                    });
                }
            }
        }

        set
    }

    /// Iterates the valid rules in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RuleSelector)> + '_ {
        self.rules.iter().map(|(index, selector)| (*index, selector))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules that were skipped, in configuration order.
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        &self.diagnostics
    }
}
