use super::tables::{ALERT_HISTORY_BODY, ETF_STATUS_BODY};
use super::target::{Cell, RenderTarget, Row, TableBodies};

/// Admin alerts page backed by in-memory table bodies
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    bodies: TableBodies,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, body_id: &str) -> &[Row] {
        self.bodies.rows(body_id)
    }

    /// `<tr>` markup for every row in `body_id`
    pub fn render_body(&self, body_id: &str) -> String {
        self.rows(body_id).iter().map(render_row).collect()
    }

    /// Full admin alerts page
    pub fn render_page(&self) -> String {
        format!(
            r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>ETF Alerts - Admin</title>
    <style>
        body {{
            font-family: 'Inter', sans-serif;
            margin: 20px;
            color: #1e1e2d;
        }}
        h2 {{ font-size: 16px; margin-top: 30px; }}
        table {{
            width: 100%;
            border-collapse: collapse;
            font-size: 13px;
        }}
        th {{
            text-align: left;
            padding: 6px 12px;
            border-bottom: 2px solid #2a2a3a;
        }}
        td {{
            padding: 6px 12px;
            border-bottom: 1px solid #e0e0e6;
        }}
        em {{ color: #9494a8; }}
    </style>
</head>
<body>
    <h2>ETF status</h2>
    <table>
        <thead>
            <tr>
                <th>Ticker</th>
                <th>ATH</th>
                <th>Drop %</th>
                <th>Last alert price</th>
                <th>ATH alert sent</th>
                <th>Reset</th>
            </tr>
        </thead>
        <tbody id="{status_id}">{status_rows}</tbody>
    </table>

    <h2>Alert history</h2>
    <table>
        <thead>
            <tr>
                <th>Ticker</th>
                <th>Price</th>
                <th>ATH</th>
                <th>Created</th>
            </tr>
        </thead>
        <tbody id="{history_id}">{history_rows}</tbody>
    </table>
</body>
</html>
"##,
            status_id = ETF_STATUS_BODY,
            status_rows = self.render_body(ETF_STATUS_BODY),
            history_id = ALERT_HISTORY_BODY,
            history_rows = self.render_body(ALERT_HISTORY_BODY),
        )
    }
}

impl RenderTarget for HtmlDocument {
    fn clear(&mut self, body_id: &str) {
        self.bodies.clear(body_id);
    }

    fn append_row(&mut self, body_id: &str, row: Row) {
        self.bodies.append_row(body_id, row);
    }
}

fn render_row(row: &Row) -> String {
    let cells: String = row
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Text(s) => format!("<td>{}</td>", escape_html(s)),
            Cell::Emphasis(s) => format!("<td><em>{}</em></td>", escape_html(s)),
        })
        .collect();
    format!("<tr>{}</tr>", cells)
}

/// Escape text for use inside element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
