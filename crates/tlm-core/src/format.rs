//! # Payload Format
//!
//! The caller decides, per request, whether a submission is JSON text or a
//! compressed binary upload. The decision arrives as a tag string.

use std::fmt;

/// Tag naming the compressed binary format.
pub const GZIP_TAG: &str = "gzip";

/// Tag naming the JSON text format.
pub const JSON_TAG: &str = "json";

/// Format discriminator for a telemetry submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFormat {
    /// UTF-8 JSON text describing a batch of events.
    Json,
    /// Compressed bytes. Never decompressed by the validator.
    Binary,
}

impl PayloadFormat {
    /// Parse a format tag, case-insensitively.
    ///
    /// `"gzip"` selects [`PayloadFormat::Binary`]. Every other tag, including
    /// unrecognised ones, selects [`PayloadFormat::Json`].
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(GZIP_TAG) {
            Self::Binary
        } else {
            if !tag.eq_ignore_ascii_case(JSON_TAG) {
                tracing::debug!(tag, "unrecognised payload format tag, using json");
            }
            Self::Json
        }
    }

    /// Canonical tag for this format.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Json => JSON_TAG,
            Self::Binary => GZIP_TAG,
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gzip_tag_any_case_is_binary() {
        for tag in ["GZIP", "gzip", "GzIp", "gZiP"] {
            assert_eq!(PayloadFormat::from_tag(tag), PayloadFormat::Binary, "{tag}");
        }
    }

    #[test]
    fn json_tag_is_json() {
        assert_eq!(PayloadFormat::from_tag("json"), PayloadFormat::Json);
        assert_eq!(PayloadFormat::from_tag("JSON"), PayloadFormat::Json);
    }

    #[test]
    fn unknown_tag_falls_back_to_json() {
        for tag in ["", "xml", "gz", "gzip ", "application/gzip"] {
            assert_eq!(PayloadFormat::from_tag(tag), PayloadFormat::Json, "{tag:?}");
        }
    }

    #[test]
    fn tag_roundtrip() {
        for fmt in [PayloadFormat::Json, PayloadFormat::Binary] {
            assert_eq!(PayloadFormat::from_tag(fmt.as_tag()), fmt);
        }
    }

    proptest! {
        #[test]
        fn gzip_case_mixing_always_binary(mask in proptest::collection::vec(any::<bool>(), 4)) {
            let tag: String = "gzip"
                .chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(PayloadFormat::from_tag(&tag), PayloadFormat::Binary);
        }
    }
}
