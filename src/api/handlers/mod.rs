// HTTP handlers (controller adapters)

pub mod goals;
pub mod teams;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
