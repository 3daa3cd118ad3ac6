//! # Validate Subcommand
//!
//! Reads a submission from a file or stdin and runs it through the request
//! validator. The format tag is inferred from the file extension unless
//! `--format` is given.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use tlm_core::format::{GZIP_TAG, JSON_TAG};
use tlm_core::{PayloadFormat, TelemetryRequest, ValidatorConfig};
use tlm_validate::RequestValidator;

use crate::{EXIT_ACCEPTED, EXIT_REJECTED};

/// Arguments for the `tlm validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Submission file, or `-` for stdin.
    pub path: PathBuf,

    /// Format tag (`json` or `gzip`, case-insensitive). Defaults to `gzip`
    /// for `.gz` files and `json` otherwise.
    #[arg(long)]
    pub format: Option<String>,
}

/// Infer a format tag from a file extension.
fn infer_tag(path: &Path) -> &'static str {
    let is_gz = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));
    if is_gz {
        GZIP_TAG
    } else {
        JSON_TAG
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Wrap raw input as a tagged request. Non-UTF-8 text in JSON mode becomes a
/// request without a body.
fn build_request(format: PayloadFormat, input: Vec<u8>) -> TelemetryRequest {
    match format {
        PayloadFormat::Binary => TelemetryRequest::from_bytes(input),
        PayloadFormat::Json => String::from_utf8(input)
            .map(TelemetryRequest::from_text)
            .unwrap_or_else(|_| TelemetryRequest::empty()),
    }
}

/// Run `tlm validate`. Returns the process exit code.
pub fn run_validate(args: &ValidateArgs, config: &ValidatorConfig) -> Result<u8> {
    let tag = args
        .format
        .as_deref()
        .unwrap_or_else(|| infer_tag(&args.path));
    let format = PayloadFormat::from_tag(tag);
    let input = read_input(&args.path)?;
    tracing::debug!(path = %args.path.display(), %format, bytes = input.len(), "validating");

    let request = build_request(format, input).with_id(args.path.display().to_string());
    let validator = RequestValidator::new(config.clone());

    match validator.validate(&request, format) {
        Ok(()) => {
            println!("accepted");
            Ok(EXIT_ACCEPTED)
        }
        Err(e) => {
            println!("rejected: {}: {e}", e.kind());
            Ok(EXIT_REJECTED)
        }
    }
}
