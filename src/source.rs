//! Upstream feed polling and the hosting keep-alive ping.
//!
//! Both loops are fire-and-forget tokio tasks on fixed intervals. A failed
//! or malformed poll drops the cycle with a log line; the next tick retries
//! naturally, so there is no backoff machinery.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::constants::{HTTP_TIMEOUT_SECS, KEEPALIVE_INTERVAL_SECS, POLL_INTERVAL_SECS};
use crate::dice_mechanics::valid_die;
use crate::engine::ForecastEngine;

/// Feed envelope: `{ "status": "OK", "data": [ { sid, d1, d2, d3 }, … ] }`.
#[derive(Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    data: Vec<FeedRound>,
}

/// One feed entry. All fields optional so a partial entry is a skipped
/// cycle rather than a decode failure.
#[derive(Deserialize)]
struct FeedRound {
    sid: Option<u64>,
    d1: Option<u32>,
    d2: Option<u32>,
    d3: Option<u32>,
}

/// Shared HTTP client with the per-request timeout applied.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
}

/// Poll `url` forever on the fixed cadence, feeding accepted rounds into
/// the engine.
pub async fn run_poller(engine: Arc<ForecastEngine>, client: reqwest::Client, url: String) {
    info!(url = %url, interval_secs = POLL_INTERVAL_SECS, "starting feed poller");
    let mut ticker = tokio::time::interval(Duration::from_secs(POLL_INTERVAL_SECS));
    loop {
        ticker.tick().await;
        if let Err(err) = poll_once(&engine, &client, &url).await {
            warn!(%err, "poll cycle dropped");
        }
    }
}

async fn poll_once(
    engine: &ForecastEngine,
    client: &reqwest::Client,
    url: &str,
) -> reqwest::Result<()> {
    let body: FeedResponse = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if body.status != "OK" {
        debug!(status = %body.status, "feed not ready");
        return Ok(());
    }
    let Some(round) = body.data.first() else {
        debug!("feed returned no rounds");
        return Ok(());
    };
    let (Some(sid), Some(d1), Some(d2), Some(d3)) = (round.sid, round.d1, round.d2, round.d3)
    else {
        debug!("feed entry missing dice fields");
        return Ok(());
    };
    if !(valid_die(d1) && valid_die(d2) && valid_die(d3)) {
        warn!(sid, d1, d2, d3, "feed entry with out-of-range dice");
        return Ok(());
    }
    engine.ingest(sid, d1, d2, d3);
    Ok(())
}

/// Ping our own latest-snapshot endpoint every 5 minutes so free-tier
/// hosting does not idle the process out. Results are ignored.
pub async fn run_keepalive(client: reqwest::Client, self_url: String) {
    if !self_url.starts_with("http") {
        info!("keep-alive disabled, SELF_URL is not an http url");
        return;
    }
    let target = format!("{}/api/taixiu", self_url.trim_end_matches('/'));
    let mut ticker = tokio::time::interval(Duration::from_secs(KEEPALIVE_INTERVAL_SECS));
    loop {
        ticker.tick().await;
        let _ = client.get(&target).send().await;
    }
}
