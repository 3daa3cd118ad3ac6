//! # tlm-validate — Telemetry Submission Validation
//!
//! Rejects malformed or structurally incomplete telemetry submissions before
//! they reach the processing pipeline, so downstream stages can assume
//! well-formed input.
//!
//! ## Decision Flow
//!
//! ```text
//! receive → branch on format ─┬─ Binary → presence check ─┬─ accept
//!                             └─ Json   → decode → shape ─┴─ reject
//! ```
//!
//! - [`PayloadDecoder`] turns JSON text into an object map, returning an
//!   explicit [`DecodeError`] instead of failing opaquely.
//! - [`shape::count_events`] implements the flat/wrapped `events` shape check.
//! - [`RequestValidator`] ties them together and emits diagnostic records.
//!
//! ## Crate Policy
//!
//! - Depends only on `tlm-core` internally.
//! - Validation is a trust boundary: a parse failure is always a rejection,
//!   never a silent acceptance.
//! - Stateless. [`RequestValidator`] is `Send + Sync` and meant to be shared.

pub mod decode;
pub mod shape;
pub mod summary;
pub mod validate;

pub use decode::{DecodeError, PayloadDecoder};
pub use validate::RequestValidator;
