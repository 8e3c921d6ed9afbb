//! Data fetcher for the admin API
//!
//! Two read-only GETs, issued concurrently and joined. Either failure fails
//! the whole snapshot; there is no retry, timeout or cache.

use async_trait::async_trait;
use futures_util::future::try_join;
use log::debug;
use serde::de::DeserializeOwned;

use crate::errors::{DashboardError, DashboardResult};
use crate::types::{Alert, Instrument};

pub const ETFS_PATH: &str = "/admin/api/etfs";
pub const ALERTS_PATH: &str = "/admin/api/alerts";

/// Source of the two dashboard datasets
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// All tracked instruments, in API order
    async fn fetch_etfs(&self) -> DashboardResult<Vec<Instrument>>;

    /// All alerts, most recent first
    async fn fetch_alerts(&self) -> DashboardResult<Vec<Alert>>;
}

/// Both datasets, fetched together
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub instruments: Vec<Instrument>,
    pub alerts: Vec<Alert>,
}

/// Fetch instruments and alerts concurrently; succeed only if both do.
pub async fn fetch_snapshot(api: &dyn AdminApi) -> DashboardResult<Snapshot> {
    let (instruments, alerts) = try_join(api.fetch_etfs(), api.fetch_alerts()).await?;
    debug!(
        "Fetched {} instruments and {} alerts",
        instruments.len(),
        alerts.len()
    );
    Ok(Snapshot { instruments, alerts })
}

/// `AdminApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdminApi {
    /// Create a client for the API served at `base_url` (e.g. `http://127.0.0.1:8000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn fetch_etfs(&self) -> DashboardResult<Vec<Instrument>> {
        self.get_json(ETFS_PATH).await
    }

    async fn fetch_alerts(&self) -> DashboardResult<Vec<Alert>> {
        self.get_json(ALERTS_PATH).await
    }
}
