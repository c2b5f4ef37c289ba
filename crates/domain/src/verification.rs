// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Paid verification records.
//!
//! A paid verification is a purchased, time-limited supplier
//! certification, distinct from badges. Verifications are renewable:
//! each renewal extends the expiry by one calendar year from its
//! current value, so renewing early never loses paid-for time.

use crate::dates::add_one_year;
use crate::error::DomainError;
use crate::order::PaymentStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Commercial tier of a paid verification.
///
/// Wire values keep the marketplace's Portuguese product names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationPlan {
    /// Entry tier.
    #[serde(rename = "Básico Pago")]
    BasicPaid,
    /// Premium tier.
    #[serde(rename = "Premium Ouro Pago")]
    PremiumGoldPaid,
}

impl VerificationPlan {
    /// Returns the wire representation of this plan.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicPaid => "Básico Pago",
            Self::PremiumGoldPaid => "Premium Ouro Pago",
        }
    }

    /// Returns the list price of this plan, in minor units.
    #[must_use]
    pub const fn price(&self) -> i64 {
        match self {
            Self::BasicPaid => 15_000,
            Self::PremiumGoldPaid => 50_000,
        }
    }
}

impl FromStr for VerificationPlan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Básico Pago" => Ok(Self::BasicPaid),
            "Premium Ouro Pago" => Ok(Self::PremiumGoldPaid),
            _ => Err(DomainError::UnknownStatus {
                kind: "verification plan",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for VerificationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchased supplier certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidVerification {
    /// Unique verification identifier.
    pub id: String,
    /// The certified supplier.
    pub supplier_id: String,
    /// Commercial tier.
    pub plan: VerificationPlan,
    /// Business relationship category the certification covers.
    pub business_type: String,
    /// Payment status of the purchase.
    pub payment_status: PaymentStatus,
    /// The staff member who approved the certification.
    pub approved_by: String,
    /// The date the certification was approved.
    pub approved_at: Date,
    /// The date the certification expires.
    pub expires_at: Date,
    /// Display flag; expiry computations use `expires_at`, not this.
    pub active: bool,
    /// Price paid, in minor units.
    pub price: i64,
}

impl PaidVerification {
    /// Creates a new verification valid for one year from `approved_at`.
    ///
    /// The purchase is recorded as paid and the certification active.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the expiry date
    /// cannot be represented.
    pub fn new(
        id: String,
        supplier_id: String,
        plan: VerificationPlan,
        business_type: String,
        approved_by: String,
        approved_at: Date,
    ) -> Result<Self, DomainError> {
        let expires_at: Date = add_one_year(approved_at)?;
        Ok(Self {
            id,
            supplier_id,
            plan,
            business_type,
            payment_status: PaymentStatus::Paid,
            approved_by,
            approved_at,
            expires_at,
            active: true,
            price: plan.price(),
        })
    }

    /// Extends the certification by one calendar year.
    ///
    /// The extension is applied to the current expiry date, not to the
    /// renewal date, so consecutive renewals are cumulative. Renewal
    /// also marks the purchase paid and the certification active again.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the new expiry
    /// date cannot be represented.
    pub fn renew(&mut self) -> Result<(), DomainError> {
        self.expires_at = add_one_year(self.expires_at)?;
        self.payment_status = PaymentStatus::Paid;
        self.active = true;
        Ok(())
    }

    /// Whether the certification is past its expiry date on `today`.
    #[must_use]
    pub fn is_lapsed(&self, today: Date) -> bool {
        self.expires_at < today
    }
}

/// What a verification history row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationAction {
    /// The verification was granted to a supplier.
    Assigned,
    /// The verification was revoked.
    Removed,
    /// The verification was extended by a year.
    Renewed,
}

impl VerificationAction {
    /// Returns the wire representation of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Removed => "removed",
            Self::Renewed => "renewed",
        }
    }
}

impl std::fmt::Display for VerificationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A history row for a paid verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationLog {
    /// Unique log identifier.
    pub id: String,
    /// The verification this row describes.
    pub verification_id: String,
    /// What happened.
    pub action: VerificationAction,
    /// The staff member who performed the action.
    pub performed_by: String,
    /// When the action happened.
    pub timestamp: time::OffsetDateTime,
    /// Free-form note.
    pub note: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn make_verification() -> PaidVerification {
        PaidVerification::new(
            String::from("pv1"),
            String::from("sup1"),
            VerificationPlan::BasicPaid,
            String::from("B2C"),
            String::from("int-usr1"),
            date!(2024 - 07 - 01),
        )
        .unwrap()
    }

    #[test]
    fn test_new_verification_expires_in_one_year() {
        let verification: PaidVerification = make_verification();
        assert_eq!(verification.expires_at, date!(2025 - 07 - 01));
        assert_eq!(verification.payment_status, PaymentStatus::Paid);
        assert!(verification.active);
        assert_eq!(verification.price, 15_000);
    }

    #[test]
    fn test_renewal_extends_from_current_expiry() {
        let mut verification: PaidVerification = make_verification();

        verification.renew().unwrap();
        assert_eq!(verification.expires_at, date!(2026 - 07 - 01));

        // A second renewal stacks on the first, two years from the original
        verification.renew().unwrap();
        assert_eq!(verification.expires_at, date!(2027 - 07 - 01));
    }

    #[test]
    fn test_renewal_reactivates_lapsed_certification() {
        let mut verification: PaidVerification = make_verification();
        verification.active = false;
        verification.payment_status = PaymentStatus::Expired;

        verification.renew().unwrap();

        assert!(verification.active);
        assert_eq!(verification.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_premium_plan_price() {
        assert_eq!(VerificationPlan::PremiumGoldPaid.price(), 50_000);
    }
}
