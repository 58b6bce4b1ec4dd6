use std::collections::HashMap;

use fred::prelude::*;
use log::{info, warn};
use thiserror::Error;

use crate::keys::{cache_key, decode_value, Metric};
use crate::telemetry::SensorValues;

// All three variants count the same against the snapshot's `complete`
// flag; they only differ in the logs.
#[derive(Debug, Error)]
pub enum MetricReadError {
    #[error("no value stored")]
    NotFound,
    #[error("cache read failed: {0}")]
    Unavailable(#[from] RedisError),
    #[error("stored value {0:?} is not numeric")]
    Malformed(String),
}

/// Latest values for one device, keyed by metric. `complete` is true
/// only when every metric was fetched and decoded; consumers treat
/// anything less as a failed probe, even though whatever partial values
/// were obtained are kept.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub metrics: HashMap<Metric, f64>,
    pub complete: bool,
}

impl Snapshot {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.metrics.get(&metric).copied()
    }

    // The full five-value set, only available for a complete snapshot.
    pub fn values(&self) -> Option<SensorValues> {
        if !self.complete {
            return None;
        }
        Some(SensorValues {
            wifi: self.get(Metric::Wifi)?,
            rco2: self.get(Metric::Rco2)?,
            pm02: self.get(Metric::Pm02)?,
            atmp: self.get(Metric::Atmp)?,
            rhum: self.get(Metric::Rhum)?,
        })
    }
}

async fn read_metric(
    cache: &RedisClient,
    device_id: &str,
    metric: Metric,
) -> Result<f64, MetricReadError> {
    let raw: Option<String> = cache.get(cache_key(device_id, metric)).await?;
    let raw = raw.ok_or(MetricReadError::NotFound)?;
    decode_value(&raw).map_err(|_| MetricReadError::Malformed(raw))
}

/// Fetch and decode all five metrics for `device_id`. A failed metric
/// never aborts the rest: it is logged, its value is left out, and the
/// snapshot is marked incomplete. The caller always gets a snapshot.
pub async fn read_snapshot(cache: &RedisClient, device_id: &str) -> Snapshot {
    let mut snapshot = Snapshot {
        complete: true,
        ..Snapshot::default()
    };
    for metric in Metric::ALL {
        info!("getting {metric} for {device_id}");
        match read_metric(cache, device_id, metric).await {
            Ok(value) => {
                snapshot.metrics.insert(metric, value);
            }
            Err(err) => {
                warn!("reading {metric} for {device_id}: {err}");
                snapshot.complete = false;
            }
        }
    }
    snapshot
}
