// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispute records.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Status of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisputeStatus {
    /// Newly opened by the customer.
    Open,
    /// Being reviewed by moderation staff.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Resolved with an outcome.
    Resolved,
    /// Closed without an outcome.
    Closed,
}

impl DisputeStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::UnderReview => "Under Review",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// Whether this status ends the dispute lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// - Open → Under Review or Closed
    /// - Under Review → Resolved or Closed
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the dispute workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Open, Self::UnderReview)
                | (Self::Open, Self::Closed)
                | (Self::UnderReview, Self::Resolved)
                | (Self::UnderReview, Self::Closed)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("resolved and closed disputes cannot be reopened"),
            })
        }
    }
}

impl FromStr for DisputeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Under Review" => Ok(Self::UnderReview),
            "Resolved" => Ok(Self::Resolved),
            "Closed" => Ok(Self::Closed),
            _ => Err(DomainError::UnknownStatus {
                kind: "dispute status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer-initiated financial disagreement tied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispute {
    /// Unique dispute identifier.
    pub id: String,
    /// The disputed order.
    pub order_id: String,
    /// The disputed transaction.
    pub transaction_id: String,
    /// The supplier party.
    pub supplier_id: String,
    /// Denormalized supplier name for display.
    pub supplier_name: String,
    /// Denormalized customer name for display.
    pub customer_name: String,
    /// Why the dispute was opened.
    pub reason: String,
    /// Current status.
    pub status: DisputeStatus,
    /// The date the dispute was opened.
    pub created_at: Date,
    /// The date the dispute entered `Resolved`, if it did.
    ///
    /// Set once on the transition into `Resolved` and retained afterwards.
    pub resolved_at: Option<Date>,
}
