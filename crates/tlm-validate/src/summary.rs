//! Redacted payload summaries for diagnostic log records.

use std::fmt;

/// A bounded, log-safe view of a submission body.
///
/// Text bodies show their length and at most `limit` bytes of prefix, cut on
/// a UTF-8 boundary. Byte bodies show their length only.
#[derive(Debug, Clone, Copy)]
pub enum PayloadSummary<'a> {
    Missing,
    Text { text: &'a str, limit: usize },
    Bytes { len: usize },
}

impl<'a> PayloadSummary<'a> {
    pub fn text(text: Option<&'a str>, limit: usize) -> Self {
        match text {
            Some(text) => Self::Text { text, limit },
            None => Self::Missing,
        }
    }

    pub fn bytes(bytes: Option<&[u8]>) -> Self {
        match bytes {
            Some(b) => Self::Bytes { len: b.len() },
            None => Self::Missing,
        }
    }
}

/// Longest prefix of `text` that is at most `limit` bytes and ends on a char boundary.
fn truncate_utf8(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl fmt::Display for PayloadSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Bytes { len } => write!(f, "<{len} bytes>"),
            Self::Text { text, limit } => {
                let prefix = truncate_utf8(text, *limit);
                if prefix.len() < text.len() {
                    write!(f, "<{} bytes> {prefix:?}...", text.len())
                } else {
                    write!(f, "<{} bytes> {prefix:?}", text.len())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_shown_whole() {
        let s = PayloadSummary::text(Some("{}"), 16).to_string();
        assert_eq!(s, r#"<2 bytes> "{}""#);
    }

    #[test]
    fn long_text_truncated() {
        let text = "a".repeat(300);
        let s = PayloadSummary::text(Some(&text), 8).to_string();
        assert_eq!(s, r#"<300 bytes> "aaaaaaaa"..."#);
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // 'é' is two bytes; a limit of 2 lands inside the second char.
        assert_eq!(truncate_utf8("aéb", 2), "a");
        assert_eq!(truncate_utf8("aéb", 3), "aé");
    }

    #[test]
    fn bytes_show_length_only() {
        let s = PayloadSummary::bytes(Some(&[0x1f, 0x8b, 0x08][..])).to_string();
        assert_eq!(s, "<3 bytes>");
    }

    #[test]
    fn missing_body() {
        assert_eq!(PayloadSummary::bytes(None).to_string(), "<missing>");
        assert_eq!(PayloadSummary::text(None, 8).to_string(), "<missing>");
    }
}
