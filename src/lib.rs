#![deny(unreachable_pub)]
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod fetcher;
pub mod index;
pub mod render;
pub mod runner;
pub mod server;
pub mod types;
pub use dashboard::{Dashboard, RenderSummary};
pub use errors::{DashboardError, DashboardResult};
pub use fetcher::{fetch_snapshot, AdminApi, HttpAdminApi, Snapshot};
pub use index::AlertIndex;
pub use types::{Alert, Instrument};
