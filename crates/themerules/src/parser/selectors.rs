use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_till1, take_until},
    character::complete::char,
    combinator::recognize,
    multi::separated_list1,
    sequence::delimited,
};

use crate::parser::Target;

/// Parses a bracketed custom color segment, keeping the brackets.
///
/// The content is opaque, so `[color:red]` is a single segment.
pub fn parse_bracketed(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('['), take_until("]"), char(']')))(input)
}

/// Parses one segment of a rule: a bracketed literal or a run of non-colons.
pub fn parse_segment(input: &str) -> IResult<&str, &str> {
    alt((parse_bracketed, take_till1(|c: char| c == ':')))(input)
}

/// Parses the colon-separated segments of a rule body (global marker removed).
pub fn parse_segments(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(':'), parse_segment)(input)
}

/// Interprets a `.class` or `#id` segment.
///
/// Returns `None` for segments without a marker, and `Some(None)` when the
/// marker is present but nothing follows it.
pub(crate) fn marked_target(segment: &str) -> Option<Option<Target>> {
    if let Some(class) = segment.strip_prefix('.') {
        Some((!class.is_empty()).then(|| Target::Class(class.to_string())))
    } else if let Some(id) = segment.strip_prefix('#') {
        Some((!id.is_empty()).then(|| Target::Id(id.to_string())))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_keeps_colons() {
        let (rest, segments) = parse_segments("Theme:.accent:[color:red]").unwrap();
        assert!(rest.is_empty());
        assert_eq!(segments, vec!["Theme", ".accent", "[color:red]"]);
    }

    #[test]
    fn test_empty_segment_stops_list() {
        let (rest, segments) = parse_segments("button::primary").unwrap();
        assert_eq!(segments, vec!["button"]);
        assert_eq!(rest, "::primary");
    }

    #[test]
    fn test_unclosed_bracket_is_plain() {
        let (rest, segments) = parse_segments("Card:[#fff").unwrap();
        assert!(rest.is_empty());
        assert_eq!(segments, vec!["Card", "[#fff"]);
    }

    #[test]
    fn test_marked_target() {
        assert_eq!(
            marked_target(".cta"),
            Some(Some(Target::Class("cta".to_string())))
        );
        assert_eq!(marked_target("#"), Some(None));
        assert_eq!(marked_target("button"), None);
    }
}
