// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commercial plans.
//!
//! A plan caps what a supplier may sell per month and how much may
//! move per transaction or withdrawal. Plans that allow manual
//! expansion let staff raise a single supplier's monthly limit above
//! the plan ceiling.

use serde::{Deserialize, Serialize};
use time::Date;

/// A commercial tier suppliers subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Monthly sales ceiling, in minor units.
    pub monthly_volume_limit: i64,
    /// Per-transaction ceiling, in minor units.
    pub transaction_limit: i64,
    /// Per-withdrawal-request ceiling, in minor units.
    pub withdrawal_request_limit: i64,
    /// Search ranking weight. Higher ranks higher.
    pub search_weight: u8,
    /// Whether staff may raise a subscriber's monthly limit.
    pub allows_manual_expansion: bool,
    /// The date the plan was created.
    pub created_at: Date,
    /// The date the plan was last changed.
    pub updated_at: Date,
}

impl Plan {
    /// The monthly limit in force for a subscriber.
    ///
    /// A granted manual expansion replaces the plan ceiling. A zero or
    /// absent expansion falls back to the plan ceiling.
    #[must_use]
    pub fn effective_volume_limit(&self, manual_expansion: Option<i64>) -> i64 {
        manual_expansion
            .filter(|amount| *amount > 0)
            .unwrap_or(self.monthly_volume_limit)
    }

    /// How much of the monthly limit a subscriber has used, in percent.
    ///
    /// Not capped at 100; callers clamp for display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume_usage_percent(
        &self,
        monthly_sales_volume: i64,
        manual_expansion: Option<i64>,
    ) -> f64 {
        let limit: i64 = self.effective_volume_limit(manual_expansion);
        if limit <= 0 {
            return 0.0;
        }
        (monthly_sales_volume as f64 / limit as f64) * 100.0
    }
}
