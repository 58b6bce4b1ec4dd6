use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::Json;
use fred::prelude::RedisClient;
use log::{error, info};
use prometheus::Registry;
use serde::Deserialize;

use crate::device::device_id_from_path;
use crate::ingest::{ingest, IngestError};
use crate::metrics::{encode, Gauges};
use crate::snapshot::read_snapshot;
use crate::telemetry::SensorValues;

// One cache client and one gauge registry for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub cache: RedisClient,
    pub registry: Registry,
    pub gauges: Gauges,
}

#[derive(Deserialize, Debug)]
pub struct TargetParams {
    #[serde(default)]
    target: String,
}

impl TargetParams {
    fn device_id(&self) -> Result<&str, (StatusCode, String)> {
        if self.target.is_empty() {
            Err((
                StatusCode::BAD_REQUEST,
                "target parameter missing or empty".into(),
            ))
        } else {
            Ok(&self.target)
        }
    }
}

pub async fn push(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    let path = uri.path();
    let Some(device_id) = device_id_from_path(path) else {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("no device id in path {path}"),
        ));
    };
    info!("push from device {device_id} on {path}");

    match ingest(&state.cache, device_id, &body).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err @ IngestError::Payload(_)) => Err((StatusCode::BAD_REQUEST, err.to_string())),
        Err(err @ IngestError::Cache(_)) => {
            error!("push from {device_id} failed: {err}");
            Err((StatusCode::SERVICE_UNAVAILABLE, err.to_string()))
        }
    }
}

pub async fn probe(
    State(state): State<AppState>,
    Query(params): Query<TargetParams>,
) -> Result<String, (StatusCode, String)> {
    let device_id = params.device_id()?;

    let start = Instant::now();
    let snapshot = read_snapshot(&state.cache, device_id).await;
    let duration = start.elapsed().as_secs_f64();

    // Only a complete snapshot is published; on failure the domain
    // gauges keep the last published reading.
    if let Some(values) = snapshot.values() {
        state.gauges.publish(&values);
    }
    state
        .gauges
        .probe_success
        .set(if snapshot.complete { 1.0 } else { 0.0 });
    state.gauges.probe_duration.set(duration);

    render_registry(&state.registry)
}

pub async fn json_values(
    State(state): State<AppState>,
    Query(params): Query<TargetParams>,
) -> Result<Json<SensorValues>, (StatusCode, String)> {
    let device_id = params.device_id()?;

    let snapshot = read_snapshot(&state.cache, device_id).await;
    match snapshot.values() {
        Some(values) => Ok(Json(values)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("no complete reading for {device_id}"),
        )),
    }
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    render_registry(&state.registry)
}

fn render_registry(registry: &Registry) -> Result<String, (StatusCode, String)> {
    encode(registry).map_err(|err| {
        error!("encoding metrics failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to encode metrics".into(),
        )
    })
}
