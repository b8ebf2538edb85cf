use xml::escape::escape_str_attribute;

use std::borrow::Cow;

/// Escape a string for use as XML characters.
///
/// Quotes are escaped too, so the result is safe anywhere in the document. Characters that may
/// not appear in an XML 1.0 document are replaced with U+FFFD.
pub fn escape_xml(s: &str) -> Cow<str> {
    if s.chars().all(is_xml_char) {
        return escape_str_attribute(s);
    }

    let cleaned: String = s
        .chars()
        .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect();
    Cow::Owned(escape_str_attribute(&cleaned).into_owned())
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Returns at most the first `max_chars` characters of `s`.
///
/// Cuts on a character boundary, never inside a multi-byte sequence.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        let escaped = escape_xml(r#"a<b & "c" 'd'"#);
        assert!(escaped.contains("&lt;"));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&quot;c&quot;"));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn replaces_forbidden_characters() {
        assert_eq!(escape_xml("a\u{1}b\u{FFFF}"), "a\u{FFFD}b\u{FFFD}");
        assert_eq!(escape_xml("tab\tok"), "tab\tok");
        assert!(escape_xml("\u{0}<").contains("&lt;"));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_xml("timezones"), "timezones");
    }

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("äöüß", 2), "äö");
        assert_eq!(truncate_chars("", 200), "");
    }
}
