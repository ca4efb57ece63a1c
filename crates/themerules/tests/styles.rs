//! Integration tests for per-tag style templates.

use themerules::styles::{Variant, styles_for};
use themerules::types::{ColorTheme, DEFAULT_FRAGMENT, Tag, ThemeConfiguration, palette_fragment};

fn config() -> ThemeConfiguration {
    ThemeConfiguration::empty()
        .with_theme(
            "primary",
            ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"),
        )
        .with_theme(
            "warning",
            ColorTheme::new("#f59e0b", "#fbbf24", "#d97706", "#000000"),
        )
        .with_theme(
            "brand",
            ColorTheme::new("emerald-500", "emerald-300", "emerald-700", ""),
        )
}

fn joined(tag: &str, theme: &str, variant: Variant) -> String {
    styles_for(tag, theme, &config(), variant).join(" ")
}

// ============================================================================
// NAMED THEMES
// ============================================================================

#[test]
fn test_div_gradient_from_main_to_dark() {
    insta::assert_snapshot!(
        joined("div", "primary", Variant::Base),
        @"bg-gradient-to-br from-blue-500 to-blue-600 text-white p-6 rounded-lg shadow-lg"
    );
}

#[test]
fn test_button_uses_dark_background_and_main_hover() {
    insta::assert_snapshot!(
        joined("button", "warning", Variant::Base),
        @"bg-amber-600 hover:bg-amber-500 text-black px-4 py-2 rounded-lg font-medium transition-colors duration-200 shadow-md hover:shadow-lg cursor-pointer"
    );
}

#[test]
fn test_input_focus_ring() {
    let tokens = styles_for("input", "primary", &config(), Variant::Base);
    assert!(tokens.contains(&"border-blue-400".to_string()));
    assert!(tokens.contains(&"focus:border-blue-600".to_string()));
    assert!(tokens.contains(&"focus:ring-blue-500".to_string()));
}

#[test]
fn test_headings_use_light_role() {
    for tag in ["h1", "h2", "h3"] {
        let tokens = styles_for(tag, "primary", &config(), Variant::Base);
        assert!(tokens.contains(&"text-blue-400".to_string()), "{tag}");
    }
    let h4 = styles_for("h4", "primary", &config(), Variant::Base);
    assert!(h4.contains(&"text-white".to_string()));
}

#[test]
fn test_palette_names_pass_through_and_text_defaults() {
    assert_eq!(
        joined("a", "brand", Variant::Base),
        "text-emerald-300 hover:text-white underline transition-colors"
    );
}

#[test]
fn test_dark_variant_prefixes_every_token() {
    let tokens = styles_for("label", "primary", &config(), Variant::Dark);
    assert_eq!(
        tokens,
        vec!["dark:text-white", "dark:font-medium", "dark:mb-2", "dark:block"]
    );
}

#[test]
fn test_unknown_theme_or_tag_is_empty() {
    assert!(styles_for("div", "missing", &config(), Variant::Base).is_empty());
    assert!(styles_for("section", "primary", &config(), Variant::Base).is_empty());
    assert!(styles_for("Button", "primary", &config(), Variant::Base).is_empty());
    assert!(styles_for("section", "[#ff0000]", &config(), Variant::Base).is_empty());
}

// ============================================================================
// CUSTOM COLORS
// ============================================================================

#[test]
fn test_custom_button_hover_keeps_literal_with_opacity() {
    insta::assert_snapshot!(
        joined("button", "[#ff0000]", Variant::Base),
        @"[background-color:#ff0000] hover:[background-color:#ff0000]/90 [color:white] px-4 py-2 rounded-lg font-medium transition-colors cursor-pointer"
    );
}

#[test]
fn test_custom_values_are_verbatim() {
    let tokens = styles_for("input", "[oklch(0.7 0.2 180)]", &config(), Variant::Base);
    assert!(tokens.contains(&"[border-color:oklch(0.7 0.2 180)]".to_string()));

    let tokens = styles_for("a", "[var(--brand-color)]", &config(), Variant::Base);
    assert_eq!(tokens[0], "[color:var(--brand-color)]");
}

#[test]
fn test_custom_colors_need_no_theme_table() {
    let empty = ThemeConfiguration::empty();
    let tokens = styles_for("div", "[rgb(255,100,50)]", &empty, Variant::Base);
    assert_eq!(tokens[0], "[background-color:rgb(255,100,50)]");
}

#[test]
fn test_custom_dark_variant() {
    let tokens = styles_for("span", "[#111]", &config(), Variant::Dark);
    assert_eq!(tokens, vec!["dark:[color:white]"]);
}

// ============================================================================
// COLOR RESOLUTION
// ============================================================================

#[test]
fn test_palette_fragment_is_stable() {
    for literal in ["#3b82f6", "#ABCDEF", "rgb(0,0,0)", "sky-500", ""] {
        assert_eq!(palette_fragment(literal), palette_fragment(literal));
    }
    assert_eq!(palette_fragment("#abcdef"), DEFAULT_FRAGMENT);
    assert_eq!(palette_fragment(""), DEFAULT_FRAGMENT);
}

#[test]
fn test_every_tag_renders_for_every_variant() {
    let config = config();
    for tag in Tag::ALL {
        for theme in ["primary", "warning", "brand", "[#ff0000]"] {
            let base = styles_for(tag.as_str(), theme, &config, Variant::Base);
            let dark = styles_for(tag.as_str(), theme, &config, Variant::Dark);
            assert!(!base.is_empty(), "{tag} + {theme}");
            assert_eq!(base.len(), dark.len());
            for (b, d) in base.iter().zip(&dark) {
                assert_eq!(*d, format!("dark:{b}"));
            }
        }
    }
}
