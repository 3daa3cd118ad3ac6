//! # Telemetry Request
//!
//! A submission as handed to the validator: an optional body plus an
//! optional request identifier used only as log context. The body is a
//! tagged value, so reading it as text or bytes is an explicit accessor call
//! rather than a cast on an untyped map entry.

/// Raw submission body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Body supplied as UTF-8 text (JSON mode).
    Text(String),
    /// Body supplied as raw bytes (binary mode).
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// Length of the body in bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) => s.len(),
            Self::Bytes(b) => b.len(),
        }
    }

    /// Returns true if the body holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A telemetry submission. Caller-owned, read-only to the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryRequest {
    id: Option<String>,
    body: Option<RequestBody>,
}

impl TelemetryRequest {
    /// A request with no body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A request whose body is JSON text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            body: Some(RequestBody::Text(text.into())),
        }
    }

    /// A request whose body is raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id: None,
            body: Some(RequestBody::Bytes(bytes.into())),
        }
    }

    /// Attach a request identifier for log correlation.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Request identifier, if one was attached.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The tagged body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// The body as text. `None` when absent or supplied as bytes.
    pub fn body_text(&self) -> Option<&str> {
        match &self.body {
            Some(RequestBody::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The body as bytes. `None` when absent or supplied as text.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            Some(RequestBody::Bytes(b)) => Some(b.as_slice()),
            _ => None,
        }
    }
}
