//! Merging generated tokens into an element's existing class list.
//!
//! Merging is conservative: existing tokens are never removed or reordered,
//! and a generated token is dropped whenever the author already styled the
//! same property. The property is the token's prefix before its first `-`:
//!
//! ```text
//! existing:  "bg-red-500 p-2"
//! generated: bg-blue-600 text-white p-6 rounded-lg
//! merged:    "bg-red-500 p-2 text-white rounded-lg"
//! ```

/// Returns the property prefix of a class token: everything before the first
/// `-`, or the whole token.
pub fn property_prefix(token: &str) -> &str {
    token.split_once('-').map_or(token, |(prefix, _)| prefix)
}

fn conflicts(existing: &str, prefix: &str) -> bool {
    existing == prefix
        || existing
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Merges `new_tokens` into an optional existing class string.
///
/// ```
/// use themerules::merge::merge_class_names;
///
/// assert_eq!(merge_class_names(None, &["p-6", "shadow-lg"]), "p-6 shadow-lg");
/// assert_eq!(
///     merge_class_names(Some("shadow card"), &["p-6", "shadow-lg"]),
///     "shadow card p-6"
/// );
/// ```
pub fn merge_class_names<T: AsRef<str>>(existing: Option<&str>, new_tokens: &[T]) -> String {
    let existing: Vec<&str> = existing.map(|s| s.split_whitespace().collect()).unwrap_or_default();

    let mut merged = existing.clone();
    merged.extend(surviving_tokens(&existing, new_tokens));
    merged.join(" ")
}

/// The new tokens that do not conflict with any existing token, in order.
fn surviving_tokens<'t, T: AsRef<str>>(existing: &[&str], new_tokens: &'t [T]) -> Vec<&'t str> {
    new_tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| {
            let prefix = property_prefix(token);
            !existing.iter().any(|current| conflicts(current, prefix))
        })
        .collect()
}

/// The class attribute of an element as the host found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// No class attribute.
    Absent,
    /// A literal string value.
    Literal(&'a str),
    /// A computed value the core cannot inspect.
    Expression,
}

/// How the host should rewrite an element's class attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassEdit {
    /// Add a class attribute with this literal value.
    Insert(String),
    /// Replace the literal value with this merged one.
    Replace(String),
    /// Keep the computed value, concatenated after this literal prefix.
    ///
    /// The prefix ends with a space separating it from the expression.
    Prepend { prefix: String },
}

impl ClassEdit {
    /// Plans the edit that applies `tokens` to `existing`.
    ///
    /// Returns `None` when there is nothing to change: no tokens were
    /// resolved, or every token conflicted with an existing one.
    ///
    /// ```
    /// use themerules::merge::{ClassEdit, ClassValue};
    ///
    /// let tokens = ["text-white", "mb-2"];
    /// assert_eq!(
    ///     ClassEdit::plan(ClassValue::Expression, &tokens),
    ///     Some(ClassEdit::Prepend { prefix: "text-white mb-2 ".to_string() })
    /// );
    /// assert_eq!(ClassEdit::plan(ClassValue::Literal("mb-4"), &["mb-2"]), None);
    /// ```
    pub fn plan<T: AsRef<str>>(existing: ClassValue<'_>, tokens: &[T]) -> Option<ClassEdit> {
        if tokens.is_empty() {
            return None;
        }

        match existing {
            ClassValue::Absent => Some(ClassEdit::Insert(merge_class_names(None, tokens))),
            ClassValue::Literal(current) => {
                let existing: Vec<&str> = current.split_whitespace().collect();
                if surviving_tokens(&existing, tokens).is_empty() {
                    return None;
                }
                Some(ClassEdit::Replace(merge_class_names(Some(current), tokens)))
            }
            ClassValue::Expression => Some(ClassEdit::Prepend {
                prefix: format!("{} ", merge_class_names(None, tokens)),
            }),
        }
    }

    /// The literal text this edit writes.
    pub fn literal(&self) -> &str {
        match self {
            ClassEdit::Insert(value) | ClassEdit::Replace(value) => value,
            ClassEdit::Prepend { prefix } => prefix,
        }
    }
}
