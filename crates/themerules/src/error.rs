//! Error types for rule pattern parsing.
//!
//! Resolution itself never fails: unknown themes, tags and colors degrade to
//! empty token lists or neutral defaults. The only fallible step is turning a
//! configured rule string into a [`RuleSelector`](crate::parser::RuleSelector),
//! and the resolution engine reports those failures as diagnostics instead of
//! returning them.

use thiserror::Error;

/// Errors that can occur while parsing a rule pattern.
///
/// # Examples
///
/// ```rust
/// use themerules::parser::parse_rule;
/// use themerules::RuleError;
///
/// let err = parse_rule("App:main:button:primary").unwrap_err();
/// assert!(matches!(err, RuleError::TooManySegments { count: 4, .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule was empty, or contained only the global marker.
    #[error("empty rule pattern")]
    EmptyRule,

    /// The rule could not be split into segments, e.g. `button::primary`.
    #[error("invalid rule `{rule}`: {reason}")]
    InvalidSyntax { rule: String, reason: String },

    /// The rule has more than three colon-separated segments.
    #[error("rule `{rule}` has {count} segments, at most 3 are allowed")]
    TooManySegments { rule: String, count: usize },

    /// A class or id selector with nothing after the marker, e.g. `.:primary`.
    #[error("rule `{rule}` has an empty class or id selector")]
    EmptySelector { rule: String },
}
