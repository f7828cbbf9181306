//! Page and page-item configuration.

use serde::{Deserialize, Serialize};

/// One dock page: an ordered row of embedded web surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub items: Vec<PageItemConfig>,
}

/// One surface slot on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PageItemConfig {
    pub url: String,
    /// Percent of the content span. Items without an explicit width share
    /// the leftover percentage equally.
    pub width: Option<f64>,
}

impl PageConfig {
    /// Resolve every item's width to an explicit percentage.
    ///
    /// Explicit widths are honored as given (clamped to 0–100). The
    /// remaining percentage — whatever explicit widths leave unclaimed — is
    /// split equally among items with no width. Widths need not sum to 100;
    /// the compositor's last-surface-remainder rule closes the span.
    pub fn resolved_widths(&self) -> Vec<f64> {
        let explicit_sum: f64 = self
            .items
            .iter()
            .filter_map(|item| item.width)
            .map(|w| w.clamp(0.0, 100.0))
            .sum();
        let unspecified = self.items.iter().filter(|item| item.width.is_none()).count();
        let share = if unspecified > 0 {
            (100.0 - explicit_sum).max(0.0) / unspecified as f64
        } else {
            0.0
        };

        self.items
            .iter()
            .map(|item| match item.width {
                Some(w) => w.clamp(0.0, 100.0),
                None => share,
            })
            .collect()
    }
}
