//! Alert index: ticker -> most recent alert
//!
//! The admin API returns alerts newest first, so the first alert seen for a
//! ticker is its latest one. The index trusts that ordering and does not
//! compare `created_at` values.

use std::collections::HashMap;

use crate::types::Alert;

/// Mapping from ticker to the first alert encountered for it
#[derive(Debug, Clone, Default)]
pub struct AlertIndex<'a> {
    by_ticker: HashMap<&'a str, &'a Alert>,
}

impl<'a> AlertIndex<'a> {
    /// Build the index in a single pass. Later alerts for a ticker already
    /// present are ignored.
    pub fn build(alerts: &'a [Alert]) -> Self {
        let mut by_ticker = HashMap::with_capacity(alerts.len());
        for alert in alerts {
            by_ticker.entry(alert.ticker.as_str()).or_insert(alert);
        }
        Self { by_ticker }
    }

    /// Latest alert for `ticker`, if any
    pub fn get(&self, ticker: &str) -> Option<&'a Alert> {
        self.by_ticker.get(ticker).copied()
    }

    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ticker.is_empty()
    }
}
