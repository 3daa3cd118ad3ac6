//! # Request Validation
//!
//! The single decision point of the ingestion path. Given a
//! [`TelemetryRequest`] and the [`PayloadFormat`] chosen by the caller,
//! returns `Ok(())` or a [`ValidationError`].
//!
//! ## Binary Mode
//!
//! Accepts any non-empty byte body. Nothing is decompressed or inspected.
//!
//! ## JSON Mode
//!
//! Decodes the text body as a JSON object, then applies the flat/wrapped
//! shape check from [`crate::shape`]. A decode failure is always
//! [`ValidationError::MalformedJson`]. A decoded object without a non-empty
//! `events` array is always [`ValidationError::EventsMissing`].
//!
//! ## Event Ceiling
//!
//! `max_events` is inert unless `enforce_max_events` is set. When inert, an
//! oversized batch is logged and accepted.
//!
//! ## Thread Safety
//!
//! `RequestValidator` holds only immutable configuration and a stateless
//! decoder, so it is `Send + Sync` and can be shared behind an `Arc` without
//! locking.

use tlm_core::{PayloadFormat, TelemetryRequest, ValidationError, ValidatorConfig};

use crate::decode::PayloadDecoder;
use crate::shape;
use crate::summary::PayloadSummary;

/// Structural validator for telemetry submissions.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    decoder: PayloadDecoder,
    config: ValidatorConfig,
}

impl RequestValidator {
    /// Create a validator with its own decoder.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_decoder(PayloadDecoder::new(), config)
    }

    /// Create a validator around an existing decoder.
    pub fn with_decoder(decoder: PayloadDecoder, config: ValidatorConfig) -> Self {
        Self { decoder, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a submission in the given format.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyOrMissingPayload`] in binary mode when the
    ///   body bytes are absent or empty.
    /// - [`ValidationError::MalformedJson`] in JSON mode when the body is not
    ///   a JSON object.
    /// - [`ValidationError::EventsMissing`] in JSON mode when neither
    ///   accepted shape carries a non-empty `events` array.
    /// - [`ValidationError::TooManyEvents`] in JSON mode, only when the event
    ///   ceiling is enforced.
    pub fn validate(
        &self,
        request: &TelemetryRequest,
        format: PayloadFormat,
    ) -> Result<(), ValidationError> {
        match format {
            PayloadFormat::Binary => self.validate_binary(request),
            PayloadFormat::Json => self.validate_json(request),
        }
    }

    /// Validate a submission whose format is given as a tag string.
    ///
    /// See [`PayloadFormat::from_tag`] for tag handling.
    pub fn validate_tagged(
        &self,
        request: &TelemetryRequest,
        tag: &str,
    ) -> Result<(), ValidationError> {
        self.validate(request, PayloadFormat::from_tag(tag))
    }

    fn validate_binary(&self, request: &TelemetryRequest) -> Result<(), ValidationError> {
        match request.body_bytes() {
            Some(bytes) if !bytes.is_empty() => Ok(()),
            bytes => {
                tracing::info!(
                    context = "validate_binary",
                    request_id = request.id().unwrap_or("-"),
                    payload = %PayloadSummary::bytes(bytes),
                    "binary payload is empty or missing"
                );
                Err(ValidationError::EmptyOrMissingPayload)
            }
        }
    }

    fn validate_json(&self, request: &TelemetryRequest) -> Result<(), ValidationError> {
        let text = request.body_text();
        let summary = PayloadSummary::text(text, self.config.preview_bytes);

        let payload = match self.decoder.decode_object(text) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::info!(
                    context = "validate_json",
                    request_id = request.id().unwrap_or("-"),
                    payload = %summary,
                    reason = %e,
                    "malformed JSON payload"
                );
                return Err(ValidationError::MalformedJson {
                    reason: e.to_string(),
                });
            }
        };

        let Some(count) = shape::count_events(&payload) else {
            tracing::info!(
                context = "validate_json",
                request_id = request.id().unwrap_or("-"),
                payload = %summary,
                "request or events key is missing"
            );
            return Err(ValidationError::EventsMissing);
        };

        self.check_event_ceiling(request, count)
    }

    fn check_event_ceiling(
        &self,
        request: &TelemetryRequest,
        count: usize,
    ) -> Result<(), ValidationError> {
        let limit = self.config.max_events;
        if count <= limit {
            return Ok(());
        }
        if self.config.enforce_max_events {
            tracing::info!(
                context = "validate_max_events",
                request_id = request.id().unwrap_or("-"),
                count,
                limit,
                "event count exceeds limit"
            );
            return Err(ValidationError::TooManyEvents { count, limit });
        }
        tracing::debug!(
            context = "validate_max_events",
            request_id = request.id().unwrap_or("-"),
            count,
            limit,
            "event count exceeds limit, not enforced"
        );
        Ok(())
    }
}
