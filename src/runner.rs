use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::config::{ConfigError, Settings};
use crate::dashboard::Dashboard;
use crate::errors::{DashboardError, DashboardResult};
use crate::fetcher::HttpAdminApi;
use crate::render::{HtmlDocument, TimeFormat};
use crate::server::{start_server, AppState};

/// Runner for the alert dashboard
pub struct DashboardRunner {
    config: Settings,
}

impl DashboardRunner {
    /// Create a new runner from a configuration file
    pub fn new(config_path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = config_path.as_ref();
        let path = path.to_str().ok_or_else(|| {
            DashboardError::Config(ConfigError::Message(format!(
                "config path is not valid UTF-8: {}",
                path.display()
            )))
        })?;
        let config = Settings::new(path)?;
        Ok(Self { config })
    }

    pub fn from_settings(config: Settings) -> Self {
        Self { config }
    }

    pub fn settings(&self) -> &Settings {
        &self.config
    }

    /// Run the dashboard: serve it, or render once and write the page out
    pub async fn run(self) -> DashboardResult<()> {
        // RUST_LOG wins over the configured level
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.config.log.level),
        )
        .try_init()
        .ok();

        info!("Starting DashboardRunner...");

        let time_format = TimeFormat::new(self.config.render.time_format.clone())?;
        let dashboard = Dashboard::new(time_format);
        let api = HttpAdminApi::new(self.config.api.base_url.clone());
        info!("Using admin API at {}", api.base_url());

        if self.config.server.enabled {
            let state = AppState::new(Arc::new(api), dashboard);
            start_server(state, self.config.server.port, &self.config.server.host).await
        } else {
            let mut document = HtmlDocument::new();
            let summary = dashboard.refresh(&api, &mut document).await?;
            let page = document.render_page();

            match &self.config.render.output {
                Some(path) => {
                    tokio::fs::write(path, page).await?;
                    info!(
                        "Wrote {} ({} status rows, {} history rows)",
                        path, summary.status_rows, summary.history_rows
                    );
                }
                None => println!("{}", page),
            }
            Ok(())
        }
    }
}
