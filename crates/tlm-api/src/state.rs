//! # Application State
//!
//! Shared state for the Axum application: configuration, the request
//! validator, and metrics. The validator is built once at startup and shared
//! by every handler.

use std::str::FromStr;
use std::sync::Arc;

use tlm_core::ValidatorConfig;
use tlm_validate::RequestValidator;

use crate::middleware::metrics::ApiMetrics;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum request body size (16 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Expose `/metrics` and record HTTP request metrics.
    pub metrics_enabled: bool,
    /// Validator tunables.
    pub validator: ValidatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            metrics_enabled: true,
            validator: ValidatorConfig::default(),
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var = name, value = %raw, "invalid value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl AppConfig {
    /// Build configuration from `TLM_*` environment variables.
    ///
    /// - `TLM_PORT` (default 8080)
    /// - `TLM_MAX_BODY_BYTES` (default 16 MiB)
    /// - `TLM_METRICS_ENABLED` (default true; only `"false"` disables)
    /// - `TLM_MAX_EVENTS`, `TLM_ENFORCE_MAX_EVENTS`, `TLM_PREVIEW_BYTES`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let validator = ValidatorConfig {
            max_events: env_or("TLM_MAX_EVENTS", defaults.validator.max_events),
            enforce_max_events: env_or(
                "TLM_ENFORCE_MAX_EVENTS",
                defaults.validator.enforce_max_events,
            ),
            preview_bytes: env_or("TLM_PREVIEW_BYTES", defaults.validator.preview_bytes),
        };
        let metrics_enabled = std::env::var("TLM_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);
        Self {
            port: env_or("TLM_PORT", defaults.port),
            max_body_bytes: env_or("TLM_MAX_BODY_BYTES", defaults.max_body_bytes),
            metrics_enabled,
            validator,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub validator: Arc<RequestValidator>,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// State with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State built from the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let validator = Arc::new(RequestValidator::new(config.validator.clone()));
        Self {
            config,
            validator,
            metrics: ApiMetrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
