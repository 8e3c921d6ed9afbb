use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use log::{error, info};
use tokio::sync::RwLock;

use crate::dashboard::Dashboard;
use crate::errors::{DashboardError, DashboardResult};
use crate::fetcher::{fetch_snapshot, AdminApi};
use crate::render::HtmlDocument;

pub const DASHBOARD_PATH: &str = "/admin/alerts";

/// State shared by the dashboard handlers
#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn AdminApi>,
    dashboard: Arc<Dashboard>,
    document: Arc<RwLock<HtmlDocument>>,
}

impl AppState {
    pub fn new(api: Arc<dyn AdminApi>, dashboard: Dashboard) -> Self {
        Self {
            api,
            dashboard: Arc::new(dashboard),
            document: Arc::new(RwLock::new(HtmlDocument::new())),
        }
    }

    /// Last rendered document
    pub fn document(&self) -> Arc<RwLock<HtmlDocument>> {
        self.document.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(DASHBOARD_PATH, get(dashboard_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Start the dashboard server
pub async fn start_server(state: AppState, port: u16, host: &str) -> DashboardResult<()> {
    let addr_str = format!("{}:{}", host, port);
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|e| DashboardError::Server(format!("invalid address {}: {}", addr_str, e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Dashboard server running on http://{}{}", addr, DASHBOARD_PATH);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Each page load refreshes the tables. A failed refresh is logged and the
/// previous render is served as is.
async fn dashboard_handler(State(state): State<AppState>) -> Html<String> {
    Html(refresh_page(&state).await)
}

/// Fetch, render and build the page. The page is built under the same write
/// guard as the render, so a request always serves its own snapshot; when
/// page loads overlap, the last one to finish its fetch wins the document.
async fn refresh_page(state: &AppState) -> String {
    match fetch_snapshot(state.api.as_ref()).await {
        Ok(snapshot) => {
            let mut document = state.document.write().await;
            state.dashboard.render(&mut *document, &snapshot);
            document.render_page()
        }
        Err(e) => {
            error!("Dashboard refresh failed: {}", e);
            state.document.read().await.render_page()
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}
