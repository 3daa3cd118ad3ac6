//! # API Route Modules
//!
//! - `telemetry` — Telemetry submission ingestion (JSON and gzip uploads).

pub mod telemetry;
