//! Integration tests for driving a session through a compilation unit.

use std::sync::Arc;

use stylescale::session::{ElementAttributes, StyleSession};
use stylescale::{BindingValue, ClassEdit, ClassValue};
use themerules::types::{ColorTheme, ThemeConfiguration};

fn config() -> ThemeConfiguration {
    ThemeConfiguration::empty()
        .with_theme(
            "primary",
            ColorTheme::new("#3b82f6", "#60a5fa", "#2563eb", "#ffffff"),
        )
        .with_theme(
            "danger",
            ColorTheme::new("#ef4444", "#f87171", "#dc2626", "#ffffff"),
        )
        .with_component("Clock", "primary")
        .with_component("Header", "danger")
        .with_rule(".cta:danger*")
        .with_rule("Header:button:[#ff0000]")
}

fn session() -> StyleSession {
    StyleSession::new(Arc::new(config()))
}

#[test]
fn test_elements_before_a_component_are_untouched() {
    let session = session();
    assert_eq!(session.component(), None);
    assert_eq!(session.style_element(&ElementAttributes::new("span")), None);
}

#[test]
fn test_file_name_is_the_first_component() {
    let mut session = session();
    session.begin_file("src/components/Clock.jsx");

    assert_eq!(session.component(), Some("Clock"));
    assert_eq!(
        session.style_element(&ElementAttributes::new("span")),
        Some(ClassEdit::Insert("text-white".to_string()))
    );
}

#[test]
fn test_index_file_takes_directory_name() {
    let mut session = session();
    session.begin_file("src/Header/index.tsx");
    assert_eq!(session.component(), Some("Header"));
}

#[test]
fn test_declarations_rename_the_component() {
    let mut session = session();
    session.begin_file("src/App.tsx");
    assert_eq!(session.style_element(&ElementAttributes::new("span")), None);

    session.enter_binding("styles", BindingValue::Other);
    assert_eq!(session.component(), Some("App"));

    session.enter_binding("Header", BindingValue::Function);
    let edit = session
        .style_element(&ElementAttributes::new("button"))
        .unwrap();
    assert!(edit.literal().starts_with("[background-color:#ff0000]"));

    session.enter_function("Clock");
    assert_eq!(
        session.style_element(&ElementAttributes::new("span")),
        Some(ClassEdit::Insert("text-white".to_string()))
    );
}

#[test]
fn test_literal_class_is_merged() {
    let mut session = session();
    session.begin_file("Clock.tsx");

    let element = ElementAttributes::new("span").with_class(ClassValue::Literal("tick text-black"));
    // text-white conflicts with the author's text-black
    assert_eq!(session.style_element(&element), None);

    let element = ElementAttributes::new("span").with_class(ClassValue::Literal("cta"));
    insta::assert_snapshot!(
        session.style_element(&element).unwrap().literal(),
        @"cta text-white"
    );
}

#[test]
fn test_expression_class_is_prefixed_and_never_matches_classes() {
    let mut session = session();
    session.begin_file("Landing.tsx");

    // .cta would match a literal, but the value is computed
    let element = ElementAttributes::new("span").with_class(ClassValue::Expression);
    assert_eq!(session.style_element(&element), None);

    session.enter_function("Clock");
    assert_eq!(
        session.style_element(&element),
        Some(ClassEdit::Prepend {
            prefix: "text-white ".to_string()
        })
    );
}

#[test]
fn test_literal_id_is_used() {
    let config = config().with_rule("#submit:primary*");
    let mut session = StyleSession::new(Arc::new(config));
    session.begin_file("Form.tsx");

    assert_eq!(session.style_element(&ElementAttributes::new("span")), None);
    assert_eq!(
        session.style_element(&ElementAttributes::new("span").with_id("submit")),
        Some(ClassEdit::Insert("text-white".to_string()))
    );
}

#[test]
fn test_sessions_share_a_resolver() {
    let first = session();
    let mut second = StyleSession::with_resolver(Arc::clone(first.resolver()));
    second.begin_file("Clock.tsx");

    assert!(Arc::ptr_eq(first.resolver(), second.resolver()));
    let heading = second.resolve(&ElementAttributes::new("h1"));
    assert!(heading.tokens.contains(&"text-blue-400".to_string()));
}

#[test]
fn test_empty_tag_is_skipped() {
    let mut session = session();
    session.begin_file("Clock.tsx");
    assert!(session.resolve(&ElementAttributes::new("")).is_empty());
}
