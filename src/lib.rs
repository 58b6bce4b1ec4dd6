//! Bridge between push-based air quality sensors and a pull-based
//! Prometheus scraper. Devices POST their latest reading, Redis keeps
//! the newest value per (device, metric), and `/probe` reads it back
//! out per device. `/json` serves the same snapshot flat for Home
//! Assistant.

use axum::routing::{get, post};
use axum::Router;

pub mod device;
pub mod handlers;
pub mod ingest;
pub mod keys;
pub mod metrics;
pub mod snapshot;
pub mod telemetry;

pub use handlers::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/probe", get(handlers::probe))
        .route("/json", get(handlers::json_values))
        .route("/metrics", get(handlers::metrics))
        .route("/sensors/{*rest}", post(handlers::push))
        .with_state(state)
}
