use fred::prelude::*;
use log::info;
use thiserror::Error;

use crate::keys::{cache_key, Metric};
use crate::telemetry::Reading;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid telemetry payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("cache write failed: {0}")]
    Cache(#[from] RedisError),
}

/// Decode one push body and store each metric under its device-scoped
/// key. Writes go out one by one with no expiration; the first failed
/// write aborts the rest, with no rollback of entries already written.
pub async fn ingest(cache: &RedisClient, device_id: &str, body: &[u8]) -> Result<(), IngestError> {
    let reading: Reading = serde_json::from_slice(body)?;

    let fields = [
        (Metric::Wifi, reading.wifi as f64),
        (Metric::Rco2, reading.rco2 as f64),
        (Metric::Pm02, reading.pm02 as f64),
        (Metric::Atmp, reading.atmp),
        (Metric::Rhum, reading.rhum as f64),
    ];
    for (metric, value) in fields {
        let key = cache_key(device_id, metric);
        info!("setting {key} to {value}");
        let _: () = cache.set(key, value, None, None, false).await?;
    }

    Ok(())
}
