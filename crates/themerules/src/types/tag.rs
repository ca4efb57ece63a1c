//! The closed vocabulary of element tags that rules and templates know about.

use phf::phf_map;
use std::fmt;

/// An element tag with a style template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Button,
    H1,
    H2,
    H3,
    H4,
    P,
    Input,
    A,
    Span,
    Label,
}

static TAGS: phf::Map<&'static str, Tag> = phf_map! {
    "div" => Tag::Div,
    "button" => Tag::Button,
    "h1" => Tag::H1,
    "h2" => Tag::H2,
    "h3" => Tag::H3,
    "h4" => Tag::H4,
    "p" => Tag::P,
    "input" => Tag::Input,
    "a" => Tag::A,
    "span" => Tag::Span,
    "label" => Tag::Label,
};

impl Tag {
    /// Every recognised tag, in declaration order.
    pub const ALL: [Tag; 11] = [
        Tag::Div,
        Tag::Button,
        Tag::H1,
        Tag::H2,
        Tag::H3,
        Tag::H4,
        Tag::P,
        Tag::Input,
        Tag::A,
        Tag::Span,
        Tag::Label,
    ];

    /// Looks up a tag by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Tag> {
        TAGS.get(name).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Button => "button",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::P => "p",
            Tag::Input => "input",
            Tag::A => "a",
            Tag::Span => "span",
            Tag::Label => "label",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
