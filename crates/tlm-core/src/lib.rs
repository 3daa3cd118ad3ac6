//! # tlm-core — Foundational Types for Telemetry Ingestion
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace: what a telemetry submission looks like on the way in, which
//! payload formats exist, and how a rejected submission is classified on the
//! way out. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged request bodies.** A [`TelemetryRequest`] carries a
//!    [`RequestBody`] that is either text or bytes. Callers read it through
//!    `body_text()` / `body_bytes()`, never through an untyped key lookup.
//!
//! 2. **Format is chosen by the caller.** [`PayloadFormat`] is parsed from a
//!    tag string and never inferred from payload content.
//!
//! 3. **One outward error class.** Every [`ValidationError`] kind maps to the
//!    same client-error classification and generic error code. The kinds
//!    exist for logs and metrics, not for differentiated client messages.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tlm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod format;
pub mod request;

// Re-export primary types for ergonomic imports.
pub use config::{ConfigError, ValidatorConfig};
pub use error::{ErrorClass, ValidationError, ValidationErrorKind, INVALID_REQUESTED_DATA};
pub use format::PayloadFormat;
pub use request::{RequestBody, TelemetryRequest};
