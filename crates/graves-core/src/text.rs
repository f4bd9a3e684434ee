// crates/graves-core/src/text.rs
use serde_json::Value;
use std::borrow::Cow;

/// Lowercases a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so Polish capitals fold as expected
/// (`"ŁUKASZ"` -> `"łukasz"`). No transliteration is applied: `ł` and `l`
/// stay distinct.
///
/// # Examples
///
/// ```rust
/// use graves_core::text::fold_key;
///
/// assert_eq!(fold_key("KOWALSKI"), "kowalski");
/// assert_eq!(fold_key("Żółć"), "żółć");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test.
///
/// Returns `true` if the folded `haystack` contains the folded `needle`.
/// An empty `needle` is contained in every haystack, including an empty one.
///
/// # Examples
///
/// ```rust
/// use graves_core::text::contains_folded;
///
/// assert!(contains_folded("Kowalski", "KOW"));
/// assert!(contains_folded("", ""));
/// assert!(!contains_folded("", "a"));
/// ```
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Renders a property value as text. `None` for JSON `null`.
///
/// Follows Python `str()` conventions: strings as-is, numbers in their JSON
/// form, `True`/`False`, and containers in repr style (`[1, 'a', None]`,
/// `{'k': True}`). Object keys come out in map order, which is sorted.
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => {
            let mut out = String::new();
            write_repr(other, &mut out);
            Some(Cow::Owned(out))
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(k, out);
                out.push_str(": ");
                write_repr(v, out);
            }
            out.push('}');
        }
    }
}

// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Replaces every run of characters outside `[a-z0-9_.-]` with a single `_`.
///
/// Used for file names derived from person names.
pub fn sanitize_file_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '.' | '-') {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
