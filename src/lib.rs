//! Theme-driven class generation for component markup.
//!
//! This package bundles the two workspace crates:
//!
//! - [`themerules`]: rule parsing, resolution and class merging
//! - [`stylescale`]: configuration loading and per-file styling sessions
//!
//! ```
//! use std::sync::Arc;
//! use stylescale_rs::{ClassEdit, ElementAttributes, StyleSession, ThemeConfiguration};
//! use stylescale_rs::themerules::ColorTheme;
//!
//! let config = ThemeConfiguration::empty()
//!     .with_theme("danger", ColorTheme::new("#ef4444", "#f87171", "#dc2626", "#ffffff"))
//!     .with_rule("button:danger*");
//!
//! let mut session = StyleSession::new(Arc::new(config));
//! session.begin_file("src/Checkout.tsx");
//!
//! let edit = session.style_element(&ElementAttributes::new("button"));
//! assert!(matches!(edit, Some(ClassEdit::Insert(ref value)) if value.starts_with("bg-red-600")));
//! ```

pub use stylescale::{self, *};
pub use themerules;
