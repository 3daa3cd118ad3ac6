//! # tlm-cli — CLI Tool for Telemetry Ingestion
//!
//! Provides the `tlm` command-line interface for checking submission files
//! locally with the same rules the ingestion service applies.
//!
//! ## Subcommands
//!
//! - `tlm validate <path>` — validate a JSON or gzip submission file.
//!
//! ```bash
//! tlm validate batch.json
//! tlm validate batch.json.gz
//! cat batch.json | tlm validate - --format json
//! tlm --config tlm.yaml validate batch.json
//! ```

pub mod validate;

/// Exit code for an accepted submission.
pub const EXIT_ACCEPTED: u8 = 0;

/// Exit code for a rejected submission.
pub const EXIT_REJECTED: u8 = 1;

/// Exit code for I/O or configuration failures.
pub const EXIT_ERROR: u8 = 2;
