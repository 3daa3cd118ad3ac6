//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`metrics`]: Prometheus request metrics and submission outcome counters.
//!
//! Request tracing uses `tower_http::trace::TraceLayer` directly.

pub mod metrics;
