//! Dashboard pipeline: fetch both datasets, index alerts, render both tables

use log::{debug, info};

use crate::errors::DashboardResult;
use crate::fetcher::{fetch_snapshot, AdminApi, Snapshot};
use crate::index::AlertIndex;
use crate::render::{render_alert_history, render_etf_status, RenderTarget, TimeFormat};

/// Row counts written by one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub status_rows: usize,
    pub history_rows: usize,
    pub indexed_tickers: usize,
}

/// Renders the admin alerts dashboard
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    time_format: TimeFormat,
}

impl Dashboard {
    pub fn new(time_format: TimeFormat) -> Self {
        Self { time_format }
    }

    pub fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Fetch a fresh snapshot and render it.
    ///
    /// If either fetch fails the error is returned and `target` is left
    /// untouched.
    pub async fn refresh<T: RenderTarget + ?Sized>(
        &self,
        api: &dyn AdminApi,
        target: &mut T,
    ) -> DashboardResult<RenderSummary> {
        let snapshot = fetch_snapshot(api).await?;
        Ok(self.render(target, &snapshot))
    }

    /// Render an already fetched snapshot: status table first, then history.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T, snapshot: &Snapshot) -> RenderSummary {
        let index = AlertIndex::build(&snapshot.alerts);
        debug!(
            "Indexed {} tickers from {} alerts",
            index.len(),
            snapshot.alerts.len()
        );

        render_etf_status(target, &snapshot.instruments, &index);
        render_alert_history(target, &snapshot.alerts, &self.time_format);

        let summary = RenderSummary {
            status_rows: snapshot.instruments.len(),
            history_rows: snapshot.alerts.len(),
            indexed_tickers: index.len(),
        };
        info!(
            "Rendered {} status rows and {} history rows",
            summary.status_rows, summary.history_rows
        );
        summary
    }
}
