//! Records returned by the admin API

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A tracked ticker with its all-time-high and drop threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Database id (not rendered)
    #[serde(default)]
    pub id: Option<i64>,
    /// Ticker symbol, unique within the instrument list
    pub ticker: String,
    /// All-time-high price; `None` until the first ATH is recorded
    #[serde(default)]
    pub ath_price: Option<f64>,
    /// Percentage drop from ATH that triggers an alert
    pub drop_threshold: f64,
    /// Whether the ATH alert has already been dispatched
    pub ath_alert_sent: bool,
    /// Last manual reset, as serialized by the API (not rendered)
    #[serde(default)]
    pub manual_reset_at: Option<String>,
}

impl Instrument {
    pub fn new(ticker: impl Into<String>, ath_price: Option<f64>, drop_threshold: f64, ath_alert_sent: bool) -> Self {
        Self {
            id: None,
            ticker: ticker.into(),
            ath_price,
            drop_threshold,
            ath_alert_sent,
            manual_reset_at: None,
        }
    }
}

/// A price-drop alert generated server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Database id (not rendered)
    #[serde(default)]
    pub id: Option<i64>,
    /// Ticker of the instrument this alert belongs to
    pub ticker: String,
    /// Price at alert time
    pub price: f64,
    /// All-time-high at alert time
    #[serde(default)]
    pub ath_price: Option<f64>,
    /// Creation timestamp exactly as the API serialized it
    pub created_at: String,
}

impl Alert {
    pub fn new(ticker: impl Into<String>, price: f64, ath_price: Option<f64>, created_at: impl Into<String>) -> Self {
        Self {
            id: None,
            ticker: ticker.into(),
            price,
            ath_price,
            created_at: created_at.into(),
        }
    }

    /// Parse `created_at` into local wall-clock time.
    ///
    /// Timestamps with an offset are converted to the local zone; naive
    /// timestamps are taken as local time already.
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_instrument_deserialize_without_ath() {
        let json = r#"{"id": 3, "ticker": "Y", "ath_price": null, "drop_threshold": 3, "ath_alert_sent": false, "manual_reset_at": null}"#;
        let etf: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(etf.ticker, "Y");
        assert_eq!(etf.id, Some(3));
        assert!(etf.ath_price.is_none());
        assert_eq!(etf.drop_threshold, 3.0);
        assert!(!etf.ath_alert_sent);
    }

    #[test]
    fn test_instrument_missing_optional_keys() {
        let json = r#"{"ticker": "Y", "drop_threshold": 3, "ath_alert_sent": false}"#;
        let etf: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(etf, Instrument::new("Y", None, 3.0, false));
    }

    #[test]
    fn test_instrument_missing_ticker_fails() {
        let json = r#"{"drop_threshold": 3, "ath_alert_sent": false}"#;
        assert!(serde_json::from_str::<Instrument>(json).is_err());
    }

    #[test]
    fn test_alert_deserialize() {
        let json = r#"{"id": 7, "ticker": "VWCE", "price": 98.5, "ath_price": 110.0, "created_at": "2024-03-05T14:07:09.123456"}"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.ticker, "VWCE");
        assert_eq!(alert.price, 98.5);
        assert_eq!(alert.ath_price, Some(110.0));

        let ts = alert.created_at_parsed().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 5));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 7, 9));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-03-05T14:07:09").is_some());
        assert!(parse_timestamp("2024-03-05 14:07:09").is_some());
        assert!(parse_timestamp("2024-03-05T14:07:09Z").is_some());
        assert!(parse_timestamp("2024-03-05T14:07:09+02:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
