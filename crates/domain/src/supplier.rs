// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supplier records and their lifecycle.
//!
//! A supplier is the selling party on the marketplace. Suppliers carry an
//! approval status with an append-only history, verification documents,
//! embedded badge and paid-verification copies, and commercial plan fields.
//!
//! ## Invariants
//!
//! - `status_history` is append-only; a status change appends an entry and
//!   never rewrites earlier entries.
//! - After any status change, the last history entry's status equals the
//!   supplier's current status.

use crate::badge::SellerBadge;
use crate::error::DomainError;
use crate::verification::PaidVerification;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Approval status of a supplier account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierStatus {
    /// Awaiting review. The supplier cannot sell yet.
    Pending,
    /// Approved to sell on the marketplace.
    Approved,
    /// Blocked from selling.
    Blocked,
}

impl SupplierStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Blocked => "Blocked",
        }
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// The unconstrained setters accept any target; this helper is for
    /// callers that want the review workflow enforced:
    /// - Pending → Approved or Blocked
    /// - Approved ↔ Blocked
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the review workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Blocked)
                | (Self::Approved, Self::Blocked)
                | (Self::Blocked, Self::Approved)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("suppliers cannot return to Pending once reviewed"),
            })
        }
    }
}

impl FromStr for SupplierStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Blocked" => Ok(Self::Blocked),
            _ => Err(DomainError::UnknownStatus {
                kind: "supplier status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a supplier may currently record sales within their plan cycle.
///
/// This axis is independent of the approval status: an approved supplier
/// is blocked from selling once their monthly plan volume is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerSalesStatus {
    /// Sales are open.
    Active,
    /// Sales are blocked (plan limit reached or manual block).
    Blocked,
}

impl SellerSalesStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Blocked => "Blocked",
        }
    }
}

impl FromStr for SellerSalesStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Blocked" => Ok(Self::Blocked),
            _ => Err(DomainError::UnknownStatus {
                kind: "seller sales status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SellerSalesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of a verification document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Awaiting review.
    Pending,
    /// Accepted as valid.
    Approved,
    /// Rejected as invalid.
    Rejected,
    /// Previously approved but currently suspended.
    Suspended,
}

impl DocumentStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Suspended => "Suspended",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(DomainError::UnknownStatus {
                kind: "document status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A verification document submitted by a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: String,
    /// Display name (e.g. "Business License").
    pub name: String,
    /// Storage URL for the uploaded file.
    pub url: String,
    /// Review status.
    pub status: DocumentStatus,
    /// The date the document was submitted.
    pub submitted_date: Date,
}

impl Document {
    /// Creates a new document in `Pending` status.
    #[must_use]
    pub const fn new(id: String, name: String, url: String, submitted_date: Date) -> Self {
        Self {
            id,
            name,
            url,
            status: DocumentStatus::Pending,
            submitted_date,
        }
    }
}

/// A single entry in a supplier's status history.
///
/// Entries are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// The status the supplier entered.
    pub status: SupplierStatus,
    /// When the change happened.
    pub timestamp: OffsetDateTime,
    /// Display name of the operator who made the change.
    pub changed_by: String,
}

impl StatusHistoryEntry {
    /// Creates a new history entry.
    #[must_use]
    pub const fn new(
        status: SupplierStatus,
        timestamp: OffsetDateTime,
        changed_by: String,
    ) -> Self {
        Self {
            status,
            timestamp,
            changed_by,
        }
    }
}

/// A supplier account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique supplier identifier.
    pub id: String,
    /// Legal or trading name.
    pub name: String,
    /// The supplier's store.
    pub store_id: String,
    /// Denormalized store name for display.
    pub store_name: String,
    /// Contact email.
    pub email: String,
    /// Approval status.
    pub status: SupplierStatus,
    /// Internal quality score (0-100).
    pub supplier_score: u8,
    /// The date the supplier joined.
    pub joined_date: Date,
    /// Verification documents.
    pub documents: Vec<Document>,
    /// Average review rating (0-5).
    pub average_rating: f64,
    /// Number of customer reviews.
    pub review_count: u32,
    /// Open complaints awaiting resolution.
    pub unresolved_complaints: u32,
    /// Badge assignments, mirrored from the global badge list.
    pub badges: Vec<SellerBadge>,
    /// Paid verifications, mirrored from the global verification list.
    pub paid_verifications: Vec<PaidVerification>,
    /// Lifetime order count.
    pub total_orders: u32,
    /// Append-only status history. The last entry always matches `status`.
    pub status_history: Vec<StatusHistoryEntry>,
    /// The commercial plan this supplier is on.
    pub plan_id: String,
    /// Sales volume recorded in the current plan cycle, in minor units.
    pub monthly_sales_volume: i64,
    /// Start of the current plan cycle.
    pub cycle_start_date: Date,
    /// End of the current plan cycle.
    pub cycle_end_date: Date,
    /// Whether the supplier may currently record sales.
    pub sales_status: SellerSalesStatus,
    /// One-off volume expansion granted for the current cycle, in minor units.
    pub manual_expansion_amount: Option<i64>,
}

impl Supplier {
    /// Applies a status change, appending to the status history.
    ///
    /// The history entry and the current status are updated together so
    /// the append-only invariant holds.
    pub fn record_status(
        &mut self,
        status: SupplierStatus,
        timestamp: OffsetDateTime,
        changed_by: &str,
    ) {
        self.status = status;
        self.status_history.push(StatusHistoryEntry::new(
            status,
            timestamp,
            changed_by.to_string(),
        ));
    }

    /// Returns the most recent status history entry, if any.
    #[must_use]
    pub fn latest_status_entry(&self) -> Option<&StatusHistoryEntry> {
        self.status_history.last()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn make_supplier(status: SupplierStatus) -> Supplier {
        Supplier {
            id: String::from("sup1"),
            name: String::from("Test Supplier"),
            store_id: String::from("store1"),
            store_name: String::from("Test Store"),
            email: String::from("test@example.com"),
            status,
            supplier_score: 80,
            joined_date: date!(2023 - 05 - 10),
            documents: vec![],
            average_rating: 4.5,
            review_count: 10,
            unresolved_complaints: 0,
            badges: vec![],
            paid_verifications: vec![],
            total_orders: 25,
            status_history: vec![StatusHistoryEntry::new(
                status,
                datetime!(2023-05-10 09:00 UTC),
                String::from("System"),
            )],
            plan_id: String::from("plan1"),
            monthly_sales_volume: 0,
            cycle_start_date: date!(2024 - 07 - 01),
            cycle_end_date: date!(2024 - 07 - 31),
            sales_status: SellerSalesStatus::Active,
            manual_expansion_amount: None,
        }
    }

    #[test]
    fn test_record_status_appends_matching_entry() {
        let mut supplier: Supplier = make_supplier(SupplierStatus::Pending);

        supplier.record_status(
            SupplierStatus::Approved,
            datetime!(2024-07-15 12:00 UTC),
            "Alice Johnson",
        );

        assert_eq!(supplier.status, SupplierStatus::Approved);
        assert_eq!(supplier.status_history.len(), 2);
        let last: &StatusHistoryEntry = supplier.latest_status_entry().unwrap();
        assert_eq!(last.status, SupplierStatus::Approved);
        assert_eq!(last.changed_by, "Alice Johnson");
    }

    #[test]
    fn test_record_status_never_rewrites_history() {
        let mut supplier: Supplier = make_supplier(SupplierStatus::Pending);
        let original_first: StatusHistoryEntry = supplier.status_history[0].clone();

        supplier.record_status(
            SupplierStatus::Blocked,
            datetime!(2024-07-15 12:00 UTC),
            "Alice Johnson",
        );

        assert_eq!(supplier.status_history[0], original_first);
    }

    #[test]
    fn test_strict_transition_rejects_return_to_pending() {
        let result = SupplierStatus::Approved.validate_transition(SupplierStatus::Pending);
        assert!(matches!(
            result,
            Err(DomainError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_strict_transition_allows_unblock() {
        assert!(
            SupplierStatus::Blocked
                .validate_transition(SupplierStatus::Approved)
                .is_ok()
        );
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            SupplierStatus::Pending,
            SupplierStatus::Approved,
            SupplierStatus::Blocked,
        ] {
            assert_eq!(status.as_str().parse::<SupplierStatus>().unwrap(), status);
        }
    }
}
