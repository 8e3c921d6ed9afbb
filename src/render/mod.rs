//! Table rendering
//!
//! Renderers write rows into a [`RenderTarget`], addressed by table body id.
//! [`HtmlDocument`] is the target used to serve the admin page;
//! [`TableBodies`] is a bare target without markup.

mod html;
mod tables;
mod target;

pub use html::{escape_html, HtmlDocument};
pub use tables::{
    format_number, render_alert_history, render_etf_status, TimeFormat, ALERT_HISTORY_BODY,
    DEFAULT_TIME_FORMAT, ETF_STATUS_BODY, INVALID_DATE, PLACEHOLDER, RESET_PLACEHOLDER,
};
pub use target::{Cell, RenderTarget, Row, TableBodies};
