//! # Rejection Taxonomy
//!
//! Defines the error type returned when a telemetry submission is rejected.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Every kind is terminal and client-fault. Nothing here is retryable.
//! - Every kind shares one external error code ([`INVALID_REQUESTED_DATA`])
//!   and one status class ([`ErrorClass::Client`]).
//! - The `Display` output carries internal detail (parse reason, counts) and
//!   is meant for logs. Client-facing text comes from
//!   [`ValidationError::client_message`].

use std::fmt;

use thiserror::Error;

/// Machine-readable error code shared by every rejection kind.
pub const INVALID_REQUESTED_DATA: &str = "INVALID_REQUESTED_DATA";

/// Fixed client-facing message used when a rejection carries no custom text.
pub const GENERIC_MESSAGE: &str = "Requested data for this operation is not valid.";

/// Fixed client-facing message for an empty binary upload.
pub const INVALID_FILE_MESSAGE: &str = "Invalid file: binary payload is empty.";

/// A rejected telemetry submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Binary mode: the body bytes are absent or zero-length.
    #[error("binary payload is empty or missing")]
    EmptyOrMissingPayload,

    /// JSON mode: the body is not a parseable JSON object.
    #[error("malformed JSON payload: {reason}")]
    MalformedJson {
        /// Why decoding failed. Diagnostic only.
        reason: String,
    },

    /// JSON mode: no non-empty `events` array in either accepted shape.
    #[error("request or events key is missing")]
    EventsMissing,

    /// JSON mode, enforcement enabled: the batch exceeds the event ceiling.
    #[error("event count {count} exceeds configured limit {limit}")]
    TooManyEvents {
        /// Number of events in the submission.
        count: usize,
        /// Configured ceiling.
        limit: usize,
    },
}

/// Fieldless discriminant of [`ValidationError`], used as a log/metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    EmptyOrMissingPayload,
    MalformedJson,
    EventsMissing,
    TooManyEvents,
}

impl ValidationErrorKind {
    /// Stable snake_case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyOrMissingPayload => "empty_or_missing_payload",
            Self::MalformedJson => "malformed_json",
            Self::EventsMissing => "events_missing",
            Self::TooManyEvents => "too_many_events",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-independent status classification of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The client sent data that will never be accepted as-is.
    Client,
}

impl ErrorClass {
    /// HTTP status code the caller should translate this class into.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Client => 400,
        }
    }
}

impl ValidationError {
    /// The fieldless kind of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::EmptyOrMissingPayload => ValidationErrorKind::EmptyOrMissingPayload,
            Self::MalformedJson { .. } => ValidationErrorKind::MalformedJson,
            Self::EventsMissing => ValidationErrorKind::EventsMissing,
            Self::TooManyEvents { .. } => ValidationErrorKind::TooManyEvents,
        }
    }

    /// Machine-readable error code. Identical for every kind.
    pub fn error_code(&self) -> &'static str {
        INVALID_REQUESTED_DATA
    }

    /// Human-readable message safe to return to the client.
    ///
    /// Never includes parse reasons or payload content.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::EmptyOrMissingPayload => INVALID_FILE_MESSAGE,
            _ => GENERIC_MESSAGE,
        }
    }

    /// Status classification. Every rejection is a client error.
    pub fn class(&self) -> ErrorClass {
        ErrorClass::Client
    }
}
