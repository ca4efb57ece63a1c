//! Color literal resolution.
//!
//! Theme colors are written as CSS hex literals (`#3b82f6`) but utility
//! classes need palette fragments (`blue-500`). This module owns the closed
//! hex→fragment table and the bracket syntax for custom colors that bypass
//! the palette entirely.
//!
//! ## Resolution
//!
//! | Input                 | Fragment                 |
//! |-----------------------|--------------------------|
//! | `#3b82f6`, `#3B82F6`  | `blue-500`               |
//! | `#fff`                | `white` (shorthand expanded) |
//! | `#123456`             | `gray-500` (not in table)    |
//! | `emerald-500`         | `emerald-500` (already a fragment) |
//! | `rgb(1, 2, 3)`        | `gray-500`               |
//!
//! ## Custom colors
//!
//! A theme reference wrapped in brackets (`[#ff0000]`, `[rgb(255,100,50)]`,
//! `[oklch(0.7 0.2 180)]`, `[var(--brand)]`) is passed through verbatim as a
//! CSS value. No validation is performed on the content.

use phf::phf_map;

/// Fragment used for any color literal the palette table does not know.
pub const DEFAULT_FRAGMENT: &str = "gray-500";

/// Lowercase six-digit hex (without `#`) to palette fragment.
static HEX_PALETTE: phf::Map<&'static str, &'static str> = phf_map! {
    "3b82f6" => "blue-500",
    "60a5fa" => "blue-400",
    "2563eb" => "blue-600",
    "1d4ed8" => "blue-700",
    "8b5cf6" => "purple-500",
    "a78bfa" => "purple-400",
    "7c3aed" => "purple-600",
    "6d28d9" => "purple-700",
    "a855f7" => "fuchsia-500",
    "c084fc" => "fuchsia-400",
    "9333ea" => "fuchsia-600",
    "7e22ce" => "fuchsia-700",
    "10b981" => "green-500",
    "34d399" => "green-400",
    "059669" => "green-600",
    "047857" => "green-700",
    "ef4444" => "red-500",
    "f87171" => "red-400",
    "dc2626" => "red-600",
    "b91c1c" => "red-700",
    "f59e0b" => "amber-500",
    "fbbf24" => "amber-400",
    "d97706" => "amber-600",
    "b45309" => "amber-700",
    "ffffff" => "white",
    "000000" => "black",
};

/// Maps a theme color literal to the palette fragment embedded in class tokens.
///
/// Total and pure: unknown hex values and unrecognised literals resolve to
/// [`DEFAULT_FRAGMENT`]. A literal that already has the shape of a palette
/// fragment (lowercase letters, digits and `-`) is returned unchanged.
///
/// ```
/// use themerules::types::color::palette_fragment;
///
/// assert_eq!(palette_fragment("#3B82F6"), "blue-500");
/// assert_eq!(palette_fragment("#fff"), "white");
/// assert_eq!(palette_fragment("teal-400"), "teal-400");
/// assert_eq!(palette_fragment("#123456"), "gray-500");
/// ```
pub fn palette_fragment(literal: &str) -> &str {
    let literal = literal.trim();
    if let Some(hex) = literal.strip_prefix('#') {
        return normalize_hex(hex)
            .and_then(|hex| HEX_PALETTE.get(hex.as_str()).copied())
            .unwrap_or(DEFAULT_FRAGMENT);
    }

    if is_palette_name(literal) {
        literal
    } else {
        DEFAULT_FRAGMENT
    }
}

/// Returns the raw CSS value of a bracket-delimited custom color.
///
/// The whole token must be wrapped in `[` and `]`; the content is returned
/// verbatim. An empty pair `[]` is not a color.
///
/// ```
/// use themerules::types::color::parse_custom_color;
///
/// assert_eq!(parse_custom_color("[#ff0000]"), Some("#ff0000"));
/// assert_eq!(parse_custom_color("[var(--brand)]"), Some("var(--brand)"));
/// assert_eq!(parse_custom_color("primary"), None);
/// ```
pub fn parse_custom_color(token: &str) -> Option<&str> {
    token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|value| !value.is_empty())
}

/// The final segment of a rule, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRef<'a> {
    /// A key into the configuration's theme table.
    Theme(&'a str),
    /// A raw CSS color value taken from bracket syntax.
    Custom(&'a str),
}

impl<'a> ColorRef<'a> {
    /// Classifies a theme-or-color token by its bracket syntax alone.
    pub fn classify(token: &'a str) -> Self {
        match parse_custom_color(token) {
            Some(value) => ColorRef::Custom(value),
            None => ColorRef::Theme(token),
        }
    }
}

/// Lowercases a hex body and expands `rgb` shorthand to `rrggbb`.
fn normalize_hex(hex: &str) -> Option<String> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let hex = hex.to_ascii_lowercase();
    match hex.len() {
        3 => Some(hex.chars().flat_map(|c| [c, c]).collect()),
        6 => Some(hex),
        _ => None,
    }
}

fn is_palette_name(literal: &str) -> bool {
    literal.starts_with(|c: char| c.is_ascii_lowercase())
        && literal
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_shorthand() {
        assert_eq!(normalize_hex("FfF").as_deref(), Some("ffffff"));
        assert_eq!(normalize_hex("3b82f6").as_deref(), Some("3b82f6"));
        assert_eq!(normalize_hex("12345"), None);
        assert_eq!(normalize_hex("zzzzzz"), None);
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        for (hex, fragment) in HEX_PALETTE.entries() {
            assert_eq!(palette_fragment(&format!("#{hex}")), *fragment);
            assert_eq!(
                palette_fragment(&format!("#{}", hex.to_ascii_uppercase())),
                *fragment
            );
        }
    }

    #[test]
    fn test_palette_name_shape() {
        assert!(is_palette_name("blue-500"));
        assert!(is_palette_name("white"));
        assert!(!is_palette_name("Blue-500"));
        assert!(!is_palette_name("500"));
        assert!(!is_palette_name("rgb(1,2,3)"));
        assert!(!is_palette_name(""));
    }
}
