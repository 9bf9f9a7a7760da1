//! Text normalization — the leaf step of the triage pipeline.
//!
//! Mail sources deliver headers and snippets with HTML entities and stray
//! control characters in them. `normalize` decodes the entities, drops the
//! control characters, and trims the result into a canonical plain-text
//! form. Case is left untouched — lower-casing is the classifier's job, and
//! display wants the original case anyway.

use std::sync::LazyLock;

use regex::Regex;

/// Non-displayable code points removed from every field: C0 controls except
/// tab/LF/CR, then DEL and the C1 range.
static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x{9F}]").expect("control char class is valid")
});

/// Reduce a free-text field to canonical plain text.
///
/// Absent input yields the empty string. Entities are decoded before the
/// control-character pass, so numeric references to control characters
/// (`&#0;`) are removed as well. Pure — no truncation, no case-folding.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let decoded = html_escape::decode_html_entities(text);
    let stripped = CONTROL_CHARS.replace_all(&decoded, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(normalize(Some("Tom &amp; Jerry")), "Tom & Jerry");
        assert_eq!(normalize(Some("&lt;b&gt;bold&lt;/b&gt;")), "<b>bold</b>");
        assert_eq!(normalize(Some("&quot;quoted&quot;")), "\"quoted\"");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(normalize(Some("it&#39;s here")), "it's here");
        assert_eq!(normalize(Some("sign&#45;in")), "sign-in");
        assert_eq!(normalize(Some("caf&#xE9;")), "café");
    }

    #[test]
    fn strips_c0_controls() {
        assert_eq!(normalize(Some("se\u{0}cur\u{8}ity")), "security");
        assert_eq!(normalize(Some("a\u{B}b\u{C}c\u{E}d\u{1F}e")), "abcde");
    }

    #[test]
    fn strips_del_and_c1_controls() {
        assert_eq!(normalize(Some("a\u{7F}b\u{80}c\u{9F}d")), "abcd");
    }

    #[test]
    fn keeps_tab_newline_and_cr_inside() {
        assert_eq!(normalize(Some("a\tb\nc\rd")), "a\tb\nc\rd");
    }

    #[test]
    fn numeric_reference_to_control_char_is_removed() {
        assert_eq!(normalize(Some("a&#0;b")), "ab");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize(Some("  hello  ")), "hello");
        assert_eq!(normalize(Some("\n\thello\t\n")), "hello");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(normalize(Some("café résumé 日本語 ✓")), "café résumé 日本語 ✓");
    }

    #[test]
    fn does_not_case_fold() {
        assert_eq!(normalize(Some("Security ALERT")), "Security ALERT");
    }

    #[test]
    fn idempotent_on_typical_input() {
        for input in [
            "  Tom &amp; Jerry \u{0}",
            "plain text",
            "café",
            "a\tb",
            "",
        ] {
            let once = normalize(Some(input));
            assert_eq!(normalize(Some(&once)), once);
        }
    }
}
