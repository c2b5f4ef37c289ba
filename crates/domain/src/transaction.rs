// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial transaction records.
//!
//! The transaction kind drives every revenue aggregation: sales add,
//! refunds subtract, commission rows are the marketplace's cut, and
//! `selo_paid` rows record paid-verification purchases.

use crate::error::DomainError;
use crate::order::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Not yet settled.
    Pending,
    /// Settled.
    Paid,
    /// Held or blocked.
    Blocked,
    /// Reversed back to the payer.
    Refunded,
}

impl TransactionStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Blocked => "Blocked",
            Self::Refunded => "Refunded",
        }
    }

    /// Whether this status ends the settlement lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Refunded)
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// - Pending → Paid or Blocked
    /// - Blocked → Paid
    /// - Paid → Refunded
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the settlement workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Pending, Self::Paid)
                | (Self::Pending, Self::Blocked)
                | (Self::Blocked, Self::Paid)
                | (Self::Paid, Self::Refunded)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("not a settlement workflow step"),
            })
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Paid" => Ok(Self::Paid),
            "Blocked" => Ok(Self::Blocked),
            "Refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::UnknownStatus {
                kind: "transaction status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// A product sale.
    Sale,
    /// The marketplace's commission cut.
    Commission,
    /// A refund back to the buyer.
    Refund,
    /// A paid-verification purchase.
    SeloPaid,
}

impl TransactionKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Commission => "commission",
            Self::Refund => "refund",
            Self::SeloPaid => "selo_paid",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(Self::Sale),
            "commission" => Ok(Self::Commission),
            "refund" => Ok(Self::Refund),
            "selo_paid" => Ok(Self::SeloPaid),
            _ => Err(DomainError::UnknownStatus {
                kind: "transaction kind",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Business relationship category of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    /// Business to business.
    #[serde(rename = "B2B")]
    B2b,
    /// Business to consumer.
    #[serde(rename = "B2C")]
    B2c,
    /// Consumer to consumer.
    #[serde(rename = "C2C")]
    C2c,
}

impl BusinessType {
    /// All business types, in display order.
    pub const ALL: [Self; 3] = [Self::B2b, Self::B2c, Self::C2c];

    /// Returns the string representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::B2b => "B2B",
            Self::B2c => "B2C",
            Self::C2c => "C2C",
        }
    }
}

impl FromStr for BusinessType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B2B" => Ok(Self::B2b),
            "B2C" => Ok(Self::B2c),
            "C2C" => Ok(Self::C2c),
            _ => Err(DomainError::UnknownStatus {
                kind: "business type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier.
    pub id: String,
    /// The date the transaction occurred.
    pub date: Date,
    /// The supplier party.
    pub supplier_id: String,
    /// Denormalized supplier name for display.
    pub supplier_name: String,
    /// The related order, when one exists.
    pub order_id: String,
    /// Gross amount in minor units.
    pub amount: i64,
    /// Marketplace commission in minor units.
    pub commission: i64,
    /// Settlement status.
    pub status: TransactionStatus,
    /// Marketplace profit in minor units.
    pub marketplace_profit: i64,
    /// Payment processor.
    pub payment_method: PaymentMethod,
    /// Business relationship category.
    pub business_type: BusinessType,
    /// What the transaction records.
    pub kind: TransactionKind,
}
