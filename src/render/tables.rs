//! Status and history table renderers

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use super::target::{Cell, RenderTarget, Row};
use crate::errors::{DashboardError, DashboardResult};
use crate::index::AlertIndex;
use crate::types::{Alert, Instrument};

/// Table body holding one row per instrument
pub const ETF_STATUS_BODY: &str = "etf-status-body";
/// Table body holding one row per alert
pub const ALERT_HISTORY_BODY: &str = "alert-history-body";

/// Shown where a value is absent
pub const PLACEHOLDER: &str = "-";
/// Marker for the manual reset action, which the dashboard does not offer yet
pub const RESET_PLACEHOLDER: &str = "reset vėliau";
/// Shown for a timestamp that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";
/// en-US style `toLocaleString` output, e.g. `3/5/2024, 2:07:09 PM`
pub const DEFAULT_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Validated strftime pattern used for alert timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> DashboardResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DashboardError::InvalidTimeFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, ts: &NaiveDateTime) -> String {
        ts.format(&self.pattern).to_string()
    }

    /// Format an alert's `created_at`, or `Invalid Date` if it does not parse
    pub fn format_alert(&self, alert: &Alert) -> String {
        alert
            .created_at_parsed()
            .map(|ts| self.format(&ts))
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Number text the way a browser prints it: `100`, `1.5`, `1e+21`, `Infinity`
///
/// Exponent form is used outside `1e-6 <= |v| < 1e21`, as in JavaScript.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        // also covers -0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        if text.contains("e-") {
            text
        } else {
            text.replacen('e', "e+", 1)
        }
    } else {
        value.to_string()
    }
}

fn optional_number(value: Option<f64>, absent: &str) -> String {
    value.map(format_number).unwrap_or_else(|| absent.to_string())
}

/// Rewrite the status table: one row per instrument, in input order.
///
/// Columns: ticker, ATH, drop threshold, last alert price, ATH alert sent,
/// reset placeholder.
pub fn render_etf_status<T: RenderTarget + ?Sized>(
    target: &mut T,
    instruments: &[Instrument],
    index: &AlertIndex<'_>,
) {
    target.clear(ETF_STATUS_BODY);

    for etf in instruments {
        let last_alert = index.get(&etf.ticker);
        let row = Row::new(vec![
            Cell::text(etf.ticker.clone()),
            Cell::text(optional_number(etf.ath_price, PLACEHOLDER)),
            Cell::text(format_number(etf.drop_threshold)),
            Cell::text(optional_number(last_alert.map(|a| a.price), PLACEHOLDER)),
            Cell::text(if etf.ath_alert_sent { "YES" } else { "NO" }),
            Cell::emphasis(RESET_PLACEHOLDER),
        ]);
        target.append_row(ETF_STATUS_BODY, row);
    }
}

/// Rewrite the history table: one row per alert, in input order, no dedup.
///
/// Columns: ticker, price, ATH at alert time, created at. An alert without
/// an ATH gets a blank cell, not the `-` placeholder and not `null`.
pub fn render_alert_history<T: RenderTarget + ?Sized>(
    target: &mut T,
    alerts: &[Alert],
    time_format: &TimeFormat,
) {
    target.clear(ALERT_HISTORY_BODY);

    for alert in alerts {
        let row = Row::new(vec![
            Cell::text(alert.ticker.clone()),
            Cell::text(format_number(alert.price)),
            Cell::text(optional_number(alert.ath_price, "")),
            Cell::text(time_format.format_alert(alert)),
        ]);
        target.append_row(ALERT_HISTORY_BODY, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::target::TableBodies;

    fn status_texts(bodies: &TableBodies) -> Vec<Vec<String>> {
        bodies
            .rows(ETF_STATUS_BODY)
            .iter()
            .map(|r| r.texts().into_iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_status_row_with_ath_and_no_alerts() {
        let etfs = vec![Instrument::new("X", Some(100.0), 5.0, true)];
        let index = AlertIndex::build(&[]);
        let mut bodies = TableBodies::new();

        render_etf_status(&mut bodies, &etfs, &index);

        assert_eq!(
            status_texts(&bodies),
            vec![vec!["X", "100", "5", "-", "YES", RESET_PLACEHOLDER]]
        );
        assert_eq!(
            bodies.rows(ETF_STATUS_BODY)[0].cells[5],
            Cell::emphasis(RESET_PLACEHOLDER)
        );
    }

    #[test]
    fn test_status_row_without_ath() {
        let etfs = vec![Instrument::new("Y", None, 3.0, false)];
        let index = AlertIndex::build(&[]);
        let mut bodies = TableBodies::new();

        render_etf_status(&mut bodies, &etfs, &index);

        assert_eq!(
            status_texts(&bodies),
            vec![vec!["Y", "-", "3", "-", "NO", RESET_PLACEHOLDER]]
        );
    }

    #[test]
    fn test_status_uses_latest_alert_and_keeps_every_instrument() {
        let etfs = vec![
            Instrument::new("A", Some(10.0), 5.0, true),
            Instrument::new("B", Some(20.0), 4.0, false),
            Instrument::new("C", None, 2.5, false),
        ];
        let alerts = vec![
            Alert::new("A", 9.0, Some(10.0), "2024-02-01T00:00:00"),
            Alert::new("A", 8.0, Some(10.0), "2024-01-01T00:00:00"),
            Alert::new("B", 18.5, Some(20.0), "2024-01-15T00:00:00"),
            Alert::new("Z", 1.0, Some(2.0), "2024-01-15T00:00:00"),
        ];
        let index = AlertIndex::build(&alerts);
        let mut bodies = TableBodies::new();

        render_etf_status(&mut bodies, &etfs, &index);

        let rows = status_texts(&bodies);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][3], "9");
        assert_eq!(rows[1][3], "18.5");
        assert_eq!(rows[2][3], "-");
        assert_eq!(rows[2][2], "2.5");
    }

    #[test]
    fn test_empty_alerts_put_placeholder_in_every_row() {
        let etfs = vec![
            Instrument::new("A", Some(10.0), 5.0, true),
            Instrument::new("B", None, 4.0, false),
        ];
        let index = AlertIndex::build(&[]);
        let mut bodies = TableBodies::new();

        render_etf_status(&mut bodies, &etfs, &index);

        assert!(status_texts(&bodies).iter().all(|r| r[3] == PLACEHOLDER));
    }

    #[test]
    fn test_history_keeps_every_alert_in_order() {
        let alerts = vec![
            Alert::new("A", 9.0, Some(10.0), "2024-03-05T14:07:09"),
            Alert::new("A", 8.0, Some(10.0), "2024-03-04T09:00:00"),
            Alert::new("B", 18.5, None, "not a date"),
        ];
        let mut bodies = TableBodies::new();

        render_alert_history(&mut bodies, &alerts, &TimeFormat::default());

        let rows = bodies.rows(ALERT_HISTORY_BODY);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].texts(), vec!["A", "9", "10", "3/5/2024, 2:07:09 PM"]);
        assert_eq!(rows[1].texts(), vec!["A", "8", "10", "3/4/2024, 9:00:00 AM"]);
        assert_eq!(rows[2].texts(), vec!["B", "18.5", "", INVALID_DATE]);
    }

    #[test]
    fn test_rerender_replaces_rows() {
        let mut bodies = TableBodies::new();
        let first = vec![
            Alert::new("A", 1.0, Some(2.0), "2024-01-01T00:00:00"),
            Alert::new("B", 1.0, Some(2.0), "2024-01-01T00:00:00"),
        ];
        let etfs = vec![
            Instrument::new("A", None, 1.0, false),
            Instrument::new("B", None, 1.0, false),
        ];
        render_etf_status(&mut bodies, &etfs, &AlertIndex::build(&first));
        render_alert_history(&mut bodies, &first, &TimeFormat::default());

        let second = vec![Alert::new("C", 3.0, Some(4.0), "2024-01-02T00:00:00")];
        let etfs = vec![Instrument::new("C", Some(4.0), 2.0, true)];
        render_etf_status(&mut bodies, &etfs, &AlertIndex::build(&second));
        render_alert_history(&mut bodies, &second, &TimeFormat::default());

        assert_eq!(status_texts(&bodies), vec![vec!["C", "4", "2", "3", "YES", RESET_PLACEHOLDER]]);
        assert_eq!(bodies.rows(ALERT_HISTORY_BODY).len(), 1);
        assert_eq!(bodies.rows(ALERT_HISTORY_BODY)[0].cells[0], Cell::text("C"));
    }

    #[test]
    fn test_time_format_validation() {
        assert!(TimeFormat::new("%Y-%m-%d %H:%M").is_ok());
        assert!(matches!(
            TimeFormat::new("%Q"),
            Err(DashboardError::InvalidTimeFormat(_))
        ));

        let fmt = TimeFormat::new("%Y-%m-%d %H:%M").unwrap();
        let alert = Alert::new("A", 1.0, None, "2024-03-05T14:07:09");
        assert_eq!(fmt.format_alert(&alert), "2024-03-05 14:07");
    }
}
