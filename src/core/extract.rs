// Progress Indicator - core/extract.rs
//
// Latest-line extraction. Pure function over the full file text; the tail
// watcher re-reads the whole file on every change, so truncation and
// rewrites need no offset bookkeeping. Cost is O(file size) per event, which
// is fine for human-readable progress logs but is a scaling limit for large
// append-heavy files.

/// Line terminators: LF, VT, FF, CR, NEL, LS, PS.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Return the last line of `text` that is non-empty after trimming, trimmed.
///
/// Returns `None` when every line is blank; callers keep their previous
/// status in that case rather than overwriting it with nothing.
pub fn extract_latest_line(text: &str) -> Option<String> {
    text.rsplit(is_line_break)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace_and_blank_lines_skipped() {
        assert_eq!(extract_latest_line("a\n\nb  \n").as_deref(), Some("b"));
    }

    #[test]
    fn test_only_blank_lines_yields_none() {
        assert_eq!(extract_latest_line("\n\n"), None);
        assert_eq!(extract_latest_line("   \n\t\n  "), None);
        assert_eq!(extract_latest_line(""), None);
    }

    #[test]
    fn test_single_line_without_newline() {
        assert_eq!(
            extract_latest_line("only-line").as_deref(),
            Some("only-line")
        );
    }

    #[test]
    fn test_crlf_and_lone_cr() {
        assert_eq!(
            extract_latest_line("first\r\nsecond\r\n").as_deref(),
            Some("second")
        );
        assert_eq!(
            extract_latest_line("50%\r75%\r").as_deref(),
            Some("75%")
        );
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        assert_eq!(
            extract_latest_line("done\n    indented step  \n \n").as_deref(),
            Some("indented step")
        );
    }

    #[test]
    fn test_unicode_line_separator() {
        assert_eq!(
            extract_latest_line("one\u{2028}two").as_deref(),
            Some("two")
        );
    }
}
