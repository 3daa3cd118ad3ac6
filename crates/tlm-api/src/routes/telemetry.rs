//! # Telemetry Ingestion Route
//!
//! Routes:
//! - POST /v1/telemetry — submit a batch of events as JSON or a gzip upload
//!
//! The payload format is chosen from request headers and handed to the
//! validator as a tag. The handler holds no decision logic of its own: it
//! only builds the tagged request, records the outcome, and shapes the
//! response.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tlm_core::format::{GZIP_TAG, JSON_TAG};
use tlm_core::{PayloadFormat, TelemetryRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// API identifier echoed in the acceptance envelope.
pub const API_ID: &str = "api.telemetry";

/// API version echoed in the acceptance envelope.
pub const API_VERSION: &str = "v1";

/// Content types treated as a compressed binary upload.
const BINARY_CONTENT_TYPES: &[&str] = &[
    "application/gzip",
    "application/x-gzip",
    "application/octet-stream",
];

/// Build the telemetry router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/telemetry", post(ingest_telemetry))
}

/// Response metadata of an accepted submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseParams {
    /// Identifier assigned to this submission.
    pub resmsgid: Uuid,
    pub status: String,
}

/// Acceptance envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedResponse {
    pub id: String,
    pub ver: String,
    /// RFC 3339 timestamp.
    pub ts: String,
    pub params: ResponseParams,
    pub response_code: String,
    pub result: Map<String, Value>,
}

impl AcceptedResponse {
    fn new(resmsgid: Uuid) -> Self {
        Self {
            id: API_ID.to_string(),
            ver: API_VERSION.to_string(),
            ts: Utc::now().to_rfc3339(),
            params: ResponseParams {
                resmsgid,
                status: "successful".to_string(),
            },
            response_code: "OK".to_string(),
            result: Map::new(),
        }
    }
}

/// Derive the payload format tag from request headers.
///
/// `Content-Encoding: gzip`, or a gzip/octet-stream content type, selects
/// the binary tag. Anything else is JSON.
pub fn format_tag(headers: &HeaderMap) -> &'static str {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_ascii_lowercase())
    };

    if header_str(header::CONTENT_ENCODING).is_some_and(|enc| enc == GZIP_TAG) {
        return GZIP_TAG;
    }
    let is_binary_type = header_str(header::CONTENT_TYPE).is_some_and(|ct| {
        let media_type = ct.split(';').next().unwrap_or_default().trim();
        BINARY_CONTENT_TYPES.contains(&media_type)
    });
    if is_binary_type {
        GZIP_TAG
    } else {
        JSON_TAG
    }
}

/// Wrap a raw body as a tagged request for the given format.
///
/// A JSON body that is not UTF-8 becomes a request without a text body, which
/// the validator rejects as malformed.
fn build_request(format: PayloadFormat, body: Bytes) -> TelemetryRequest {
    match format {
        PayloadFormat::Binary => TelemetryRequest::from_bytes(body.to_vec()),
        PayloadFormat::Json => match String::from_utf8(body.to_vec()) {
            Ok(text) => TelemetryRequest::from_text(text),
            Err(e) => {
                tracing::debug!(error = %e, "JSON body is not valid UTF-8");
                TelemetryRequest::empty()
            }
        },
    }
}

/// POST /v1/telemetry — validate and accept a telemetry submission.
async fn ingest_telemetry(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AcceptedResponse>, AppError> {
    let msg_id = Uuid::new_v4();
    let format = PayloadFormat::from_tag(format_tag(&headers));
    let request = build_request(format, body).with_id(msg_id.to_string());

    let outcome = state.validator.validate(&request, format);
    state
        .metrics
        .record_submission(format, outcome.as_ref().err().map(|e| e.kind()));
    outcome?;

    tracing::debug!(request_id = %msg_id, %format, "telemetry submission accepted");
    Ok(Json(AcceptedResponse::new(msg_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(name.clone(), HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn no_headers_is_json() {
        assert_eq!(format_tag(&HeaderMap::new()), "json");
    }

    #[test]
    fn json_content_type_is_json() {
        let h = headers(&[(header::CONTENT_TYPE, "application/json; charset=utf-8")]);
        assert_eq!(format_tag(&h), "json");
    }

    #[test]
    fn gzip_content_encoding_is_binary() {
        let h = headers(&[
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_ENCODING, "GZIP"),
        ]);
        assert_eq!(format_tag(&h), "gzip");
    }

    #[test]
    fn binary_content_types_are_binary() {
        for ct in ["application/gzip", "application/x-gzip", "Application/Octet-Stream"] {
            let h = headers(&[(header::CONTENT_TYPE, ct)]);
            assert_eq!(format_tag(&h), "gzip", "{ct}");
        }
    }

    #[test]
    fn non_utf8_json_body_has_no_text() {
        let req = build_request(PayloadFormat::Json, Bytes::from_static(&[0xff, 0xfe]));
        assert!(req.body_text().is_none());
    }

    #[test]
    fn binary_body_kept_as_bytes() {
        let req = build_request(PayloadFormat::Binary, Bytes::from_static(&[0x1f, 0x8b]));
        assert_eq!(req.body_bytes(), Some(&[0x1f, 0x8b][..]));
    }

    #[test]
    fn accepted_envelope_serializes_camel_case() {
        let json = serde_json::to_value(AcceptedResponse::new(Uuid::nil())).unwrap();
        assert_eq!(json["id"], "api.telemetry");
        assert_eq!(json["responseCode"], "OK");
        assert_eq!(json["params"]["status"], "successful");
        assert!(json["result"].as_object().unwrap().is_empty());
    }
}
