//! ETF alert dashboard
//!
//! Renders the admin alerts page from the admin API, either once or on
//! every page load when `server.enabled = true`.
//!
//! ```bash
//! cargo run --bin alert_dashboard -- config.toml
//! ```

use etf_alert_dashboard::runner::DashboardRunner;

#[tokio::main]
async fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from: {}", path.display());
    }

    let args: Vec<String> = std::env::args().collect();
    let default_config = "config.toml".to_string();
    let config_path = args.get(1).unwrap_or(&default_config);

    let runner = match DashboardRunner::new(config_path) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Failed to load config '{}': {}", config_path, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runner.run().await {
        eprintln!("Dashboard error: {}", e);
        std::process::exit(1);
    }
}
