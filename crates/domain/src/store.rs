// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storefront records.
//!
//! A store is the public-facing shop of a supplier. Several of its fields
//! (status, category, total sales, average rating) are derived from the
//! supplier, product, and transaction collections when the dataset is
//! constructed.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Publication status of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreStatus {
    /// Live and visible to buyers.
    Active,
    /// Hidden from buyers.
    Inactive,
    /// Awaiting supplier approval.
    Pending,
}

impl StoreStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

impl FromStr for StoreStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "Pending" => Ok(Self::Pending),
            _ => Err(DomainError::UnknownStatus {
                kind: "store status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A supplier's storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store identifier.
    pub id: String,
    /// Store display name.
    pub name: String,
    /// The owning supplier.
    pub supplier_id: String,
    /// Denormalized supplier name for display.
    pub supplier_name: String,
    /// Whether the store has passed verification.
    pub is_verified: bool,
    /// The date the store was created.
    pub created_at: Date,
    /// Number of products listed in the store.
    pub product_count: u32,
    /// Publication status.
    pub status: StoreStatus,
    /// Primary category, taken from the store's first listed product.
    pub category: String,
    /// Contact phone number.
    pub phone: String,
    /// Accumulated sale revenue attributed to this store, in minor units.
    pub total_sales: i64,
    /// Average review rating (0-5), mirrored from the supplier.
    pub average_rating: f64,
}
