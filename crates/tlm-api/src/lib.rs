//! # tlm-api — Telemetry Ingestion Service
//!
//! HTTP front door for telemetry submissions. Every accept/reject decision is
//! delegated to [`tlm_validate::RequestValidator`]; this crate only adapts
//! HTTP to the validator and back.
//!
//! ## API Surface
//!
//! | Route                   | Purpose                                   |
//! |-------------------------|-------------------------------------------|
//! | `POST /v1/telemetry`    | Submit events (JSON or gzip upload)       |
//! | `GET /health/liveness`  | Process is up                             |
//! | `GET /health/readiness` | Ready to serve traffic                    |
//! | `GET /metrics`          | Prometheus scrape (when enabled)          |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → BodyLimit → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - No validation logic in route handlers.
//! - All rejections map to one structured client-error response via `AppError`.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` are mounted outside the body limit and
/// request metrics.
pub fn app(state: AppState) -> Router {
    let metrics_on = state.config.metrics_enabled;

    let mut api = Router::new()
        .merge(routes::telemetry::router())
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    if metrics_on {
        api = api
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(state.metrics.clone()));
    }

    let api = api
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let mut unauthenticated = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    if metrics_on {
        unauthenticated = unauthenticated.route("/metrics", get(prometheus_metrics));
    }

    let unauthenticated = unauthenticated.with_state(state);

    Router::new().merge(unauthenticated).merge(api)
}

/// GET /metrics — Prometheus metrics scrape endpoint.
async fn prometheus_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.gather_and_encode().map_err(AppError::Internal)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The validator has no external dependencies, so a
/// constructed state is always ready.
async fn readiness(State(_state): State<AppState>) -> &'static str {
    "ready"
}
