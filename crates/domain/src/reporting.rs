// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard reporting records and financial settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// One month of platform performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyData {
    /// Month label, such as `Jan`.
    pub name: String,
    /// Revenue for the month, in minor units.
    pub revenue: i64,
    /// Units sold.
    pub sales: u32,
    /// Orders placed.
    pub orders: u32,
    /// Stores open at month end.
    pub stores: u32,
    /// Average order value, in minor units.
    pub avg_ticket: i64,
    /// Suppliers active at month end.
    pub suppliers: u32,
    /// Forecast revenue, in minor units. Absent for months without one.
    pub revenue_forecast: Option<i64>,
}

/// What raised a dashboard alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertType {
    Payment,
    Complaint,
    Store,
    Badge,
    PaidVerification,
    Dispute,
}

impl AlertType {
    /// Returns the wire representation of this alert type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::Complaint => "Complaint",
            Self::Store => "Store",
            Self::Badge => "Badge",
            Self::PaidVerification => "PaidVerification",
            Self::Dispute => "Dispute",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An item in the dashboard attention feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: String,
    /// What raised the alert.
    pub alert_type: AlertType,
    /// Human-readable summary.
    pub message: String,
    /// The date the alert was raised.
    pub timestamp: Date,
    /// The record the alert is about.
    pub related_id: String,
}

/// Marketplace commission rates.
///
/// Categories without an explicit rate fall back to the global rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionSettings {
    /// Default commission, in percent.
    pub global: f64,
    /// Per-category overrides. `None` means no override.
    pub categories: BTreeMap<String, Option<f64>>,
}

impl CommissionSettings {
    /// The commission rate in force for a category, in percent.
    #[must_use]
    pub fn rate_for(&self, category: &str) -> f64 {
        self.categories
            .get(category)
            .copied()
            .flatten()
            .unwrap_or(self.global)
    }
}
