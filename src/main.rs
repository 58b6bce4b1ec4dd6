use std::env;

use dotenv::dotenv;
use fred::prelude::*;
use log::info;
use prometheus::Registry;
use tokio::net::TcpListener;

use povitria::metrics::Gauges;
use povitria::{build_router, AppState};

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let redis_host = env_or("REDIS_HOST", "localhost");
    let redis_port = env_or("REDIS_PORT", "6379");
    let redis_password = env_or("REDIS_PASSWORD", "");
    let redis_db = env_or("REDIS_DB", "0");

    let redis_url = if redis_password.is_empty() {
        format!("redis://{redis_host}:{redis_port}/{redis_db}")
    } else {
        format!("redis://:{redis_password}@{redis_host}:{redis_port}/{redis_db}")
    };

    info!("connecting to redis on {redis_host}:{redis_port}");
    let config = RedisConfig::from_url(&redis_url)?;
    let cache = Builder::from_config(config).build()?;
    let _ = cache.init().await?;

    let registry = Registry::new();
    let gauges = Gauges::register(&registry)?;

    let app = build_router(AppState {
        cache,
        registry,
        gauges,
    });

    let addr = format!(
        "{}:{}",
        env_or("PROM_HOST", "0.0.0.0"),
        env_or("PROM_PORT", "9000")
    );
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
