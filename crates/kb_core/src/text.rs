//! Text shaping for rendered fields.
//!
//! Lengths are counted in `char`s (Unicode scalar values), never bytes, so a
//! cut never lands inside a multi-byte sequence.

use alloc::borrow::Cow;
use alloc::string::String;

/// Longest reason kept verbatim, in characters.
pub const REASON_MAX_CHARS: usize = 500;
/// Marker appended to a truncated reason (no separating space).
pub const ELLIPSIS: &str = "...";

/// Prefix of `s` holding at most `max` characters, and whether anything was cut.
pub fn truncate_chars(s: &str, max: usize) -> (&str, bool) {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => (&s[..byte_idx], true),
        None => (s, false),
    }
}

/// First `max` characters of `s`, with `...` appended when `s` was longer.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> Cow<'_, str> {
    match truncate_chars(s, max) {
        (head, true) => {
            let mut out = String::with_capacity(head.len() + ELLIPSIS.len());
            out.push_str(head);
            out.push_str(ELLIPSIS);
            Cow::Owned(out)
        }
        (whole, false) => Cow::Borrowed(whole),
    }
}

/// Replace each `\n` with one space. Runs are not merged and `\r` is kept.
pub fn collapse_newlines(s: &str) -> Cow<'_, str> {
    if s.contains('\n') {
        Cow::Owned(s.replace('\n', " "))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reason_is_untouched() {
        let s = "a".repeat(REASON_MAX_CHARS);
        assert_eq!(truncate_with_ellipsis(&s, REASON_MAX_CHARS), s.as_str());
        assert!(matches!(truncate_with_ellipsis("short", 500), Cow::Borrowed("short")));
    }

    #[test]
    fn long_reason_gets_exactly_max_chars_plus_ellipsis() {
        let s = "b".repeat(REASON_MAX_CHARS + 1);
        let out = truncate_with_ellipsis(&s, REASON_MAX_CHARS);
        assert_eq!(out.chars().count(), REASON_MAX_CHARS + 3);
        assert!(out.ends_with("b..."));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // 'é' is two bytes, '漢' is three
        let s = "é漢".repeat(300);
        let (head, cut) = truncate_chars(&s, 500);
        assert!(cut);
        assert_eq!(head.chars().count(), 500);
        assert!(head.ends_with('漢'));

        let (head, cut) = truncate_chars("日本語", 2);
        assert!(cut);
        assert_eq!(head, "日本");
    }

    #[test]
    fn truncation_may_cut_mid_word() {
        assert_eq!(truncate_with_ellipsis("hello world", 7), "hello w...");
    }

    #[test]
    fn each_newline_becomes_one_space() {
        let src = "step one\n\nstep two\nstep three\r\n";
        let out = collapse_newlines(src);
        assert!(!out.contains('\n'));
        assert_eq!(out, "step one  step two step three\r ");
        let added = out.matches(' ').count() - src.matches(' ').count();
        assert_eq!(added, src.matches('\n').count());
    }
}
