//! Value classification predicates.
//!
//! Pure functions with no side effects. They never panic on unusual input;
//! a pattern that fails to compile is matched as a literal substring.

use regex::Regex;

use crate::collaborators::AppearanceQuery;
use crate::value::Value;

/// Returns whether the host prefers a dark color scheme.
pub fn is_dark_mode(query: &dyn AppearanceQuery) -> bool {
    query.prefers_dark()
}

/// Returns whether a value counts as "no data".
///
/// Checked in order:
///
/// 1. `Undefined` and `Null`
/// 2. `NaN`
/// 3. a string with only whitespace (including `""`)
/// 4. an array with no truthy element, so `[0, "", null]` and `[false]` are
///    empty too
/// 5. a plain object without entries (class instances are never empty)
/// 6. a blob with zero bytes or without a declared type
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::Number(n) => n.is_nan(),
        Value::String(s) => s.chars().all(is_blank_char),
        Value::Array(items) => !items.iter().any(Value::is_truthy),
        Value::Object(obj) => obj.is_plain() && obj.is_empty(),
        Value::Blob(blob) => blob.size() == 0 || blob.mime_type().is_empty(),
        Value::Bool(_) | Value::Function(_) => false,
    }
}

/// Whitespace as regex `\s` understands it in form input: Unicode
/// `White_Space` plus the byte order mark, minus NEL (U+0085).
fn is_blank_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Something that can be tested against text.
///
/// Strings are compiled as regular expressions on each call; keep a
/// [`Regex`] around for hot paths.
pub trait TextPattern {
    fn matches_text(&self, text: &str) -> bool;
}

impl TextPattern for Regex {
    fn matches_text(&self, text: &str) -> bool {
        self.is_match(text)
    }
}

impl TextPattern for str {
    fn matches_text(&self, text: &str) -> bool {
        match Regex::new(self) {
            Ok(re) => re.is_match(text),
            Err(_) => text.contains(self),
        }
    }
}

impl TextPattern for String {
    fn matches_text(&self, text: &str) -> bool {
        self.as_str().matches_text(text)
    }
}

impl<T: TextPattern + ?Sized> TextPattern for &T {
    fn matches_text(&self, text: &str) -> bool {
        (**self).matches_text(text)
    }
}

/// Returns `true` as soon as one pattern matches `text`.
pub fn is_text_includes<I>(patterns: I, text: &str) -> bool
where
    I: IntoIterator,
    I::Item: TextPattern,
{
    patterns.into_iter().any(|p| p.matches_text(text))
}

/// Returns `false` as soon as one pattern matches `text`.
pub fn is_text_excludes<I>(patterns: I, text: &str) -> bool
where
    I: IntoIterator,
    I::Item: TextPattern,
{
    for pattern in patterns {
        if pattern.matches_text(text) {
            return false;
        }
    }
    true
}

/// Best-effort guess whether a value is a constructor reference.
///
/// Looks for a callable carrying a `prototype` property. Ordinary functions
/// carry one as well, so this cannot tell them from classes; do not branch on
/// it for anything that matters.
#[must_use]
pub fn is_class(value: &Value) -> bool {
    matches!(value, Value::Function(func) if func.has_property("prototype"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::FixedAppearance;
    use crate::value::{Blob, FunctionRef, Object};
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined)]
    #[case(Value::Null)]
    #[case(Value::Number(f64::NAN))]
    #[case(Value::from(""))]
    #[case(Value::from(" \t\n"))]
    #[case(Value::from("\u{a0}\u{2028}\u{feff}\u{3000}"))]
    #[case(Value::Array(vec![]))]
    #[case(Value::Array(vec![Value::from(0), Value::from(""), Value::Null, Value::Undefined]))]
    #[case(Value::Array(vec![Value::from(false)]))]
    #[case(Value::Array(vec![Value::Number(f64::NAN)]))]
    #[case(Value::Object(Object::new()))]
    #[case(Value::Blob(Blob::new(Vec::<u8>::new(), "image/png")))]
    #[case(Value::Blob(Blob::new(vec![1u8], "")))]
    fn test_is_empty(#[case] value: Value) {
        assert!(is_empty(&value), "{value:?} should be empty");
    }

    #[rstest]
    #[case(Value::from(0))]
    #[case(Value::from(false))]
    #[case(Value::from(true))]
    #[case(Value::from("a"))]
    #[case(Value::from(" a "))]
    #[case(Value::from("\u{85}"))]
    #[case(Value::from(" \u{85} "))]
    #[case(Value::Array(vec![Value::from(0), Value::from(1)]))]
    #[case(Value::Array(vec![Value::Array(vec![])]))]
    #[case(Value::Object(Object::new().with("k", Value::Null)))]
    #[case(Value::Object(Object::instance_of("Date")))]
    #[case(Value::Blob(Blob::new(vec![1u8], "text/plain")))]
    #[case(Value::Function(FunctionRef::new("f")))]
    fn test_is_not_empty(#[case] value: Value) {
        assert!(!is_empty(&value), "{value:?} should not be empty");
    }

    #[test]
    fn test_text_includes() {
        assert!(is_text_includes(["^image/", "pdf$"], "image/png"));
        assert!(is_text_includes(["^image/", "pdf$"], "application/pdf"));
        assert!(!is_text_includes(["^image/", "pdf$"], "text/plain"));
        assert!(!is_text_includes(Vec::<String>::new(), "anything"));
    }

    #[test]
    fn test_text_excludes() {
        assert!(is_text_excludes(["^admin", "root"], "guest"));
        assert!(!is_text_excludes(["^admin", "root"], "admin-user"));
        assert!(is_text_excludes(Vec::<String>::new(), "anything"));
    }

    #[test]
    fn test_precompiled_patterns() {
        let patterns = [Regex::new(r"^\d+$").unwrap()];
        assert!(is_text_includes(&patterns, "123"));
        assert!(is_text_excludes(&patterns, "12a"));
    }

    #[test]
    fn test_invalid_pattern_is_a_literal() {
        assert!(is_text_includes(["a(b"], "xa(by"));
        assert!(!is_text_includes(["a(b"], "ab"));
    }

    #[test]
    fn test_is_class() {
        assert!(is_class(&Value::Function(FunctionRef::class("User"))));
        assert!(!is_class(&Value::Function(FunctionRef::new("arrow"))));
        assert!(!is_class(&Value::Object(Object::instance_of("User"))));
        assert!(!is_class(&Value::from("User")));
    }

    #[test]
    fn test_is_dark_mode() {
        assert!(is_dark_mode(&FixedAppearance(true)));
        assert!(!is_dark_mode(&FixedAppearance(false)));
    }
}
