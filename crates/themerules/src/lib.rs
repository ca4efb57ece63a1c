//! # themerules - Theme rules for utility-class styling
//!
//! Resolves, for one markup element, the ordered utility class tokens that a
//! declarative theme configuration assigns to it, and merges them into the
//! element's existing class list without clobbering author-written tokens.
//!
//! This crate provides:
//!
//! - **Parsing**: Turn rule patterns like `Dashboard:button:warning` into a
//!   [`RuleSelector`](parser::RuleSelector)
//! - **Cascade**: Match rules against elements and apply the
//!   rule → component → dark-mode priority order
//! - **Styles**: Per-tag templates for named themes and custom colors
//! - **Merging**: Conflict-aware merging into existing class strings
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use themerules::cascade::{ElementQuery, Resolver};
//! use themerules::merge::merge_class_names;
//! use themerules::types::{ColorTheme, ThemeConfiguration};
//!
//! let config = ThemeConfiguration::empty()
//!     .with_theme("primary", ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"))
//!     .with_component("Clock", "primary");
//!
//! let resolver = Resolver::new(Arc::new(config));
//! let query = ElementQuery::new("Clock", "h1").with_class_name("mb-8");
//! let style = resolver.resolve(&query);
//!
//! assert_eq!(style.tokens, vec!["text-4xl", "font-bold", "text-blue-400", "mb-4"]);
//! assert_eq!(
//!     merge_class_names(query.class_name, &style.tokens),
//!     "mb-8 text-4xl font-bold text-blue-400"
//! );
//! ```
//!
//! ## Rule Syntax
//!
//! `[component:]([tag]|[.class]|[#id]):themeOrColor[*]`
//!
//! - Tags: `div`, `button`, `h1`-`h4`, `p`, `input`, `a`, `span`, `label`
//! - Custom colors: `[#ff0000]`, `[rgb(255,100,50)]`, `[oklch(0.7 0.2 180)]`,
//!   `[var(--brand)]`
//! - A trailing `*` marks the rule global
//!
//! ## Failure Model
//!
//! Nothing in resolution fails. Malformed rules are skipped with a warning and
//! reported through [`Resolver::diagnostics`](cascade::Resolver::diagnostics);
//! unknown themes and tags produce no tokens; unknown colors degrade to
//! [`DEFAULT_FRAGMENT`](types::DEFAULT_FRAGMENT).
//!
//! ## Modules
//!
//! - [`parser`]: Rule pattern parsing
//! - [`cascade`]: Element matching and resolution order
//! - [`styles`]: Style templates and the memoized style table
//! - [`merge`]: Class list merging and host edits
//! - [`types`]: Configuration, themes, colors and tags
//! - [`error`]: Error types for rule parsing

pub mod cascade;
pub mod error;
pub mod merge;
pub mod parser;
pub mod styles;
pub mod types;

pub use cascade::{ElementQuery, ResolvedStyle, Resolver, StyleSource, resolve};
pub use error::RuleError;
pub use merge::{ClassEdit, ClassValue, merge_class_names};
pub use parser::{RuleSelector, Target, parse_rule};
pub use styles::{StyleTable, Variant, styles_for};
pub use types::{ColorTheme, ThemeConfiguration};
