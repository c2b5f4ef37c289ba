// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Marketing coupons.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// How a coupon discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponType {
    /// Percentage off the order total.
    Percentage,
    /// Fixed amount off, in minor units.
    Fixed,
}

impl CouponType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "Percentage",
            Self::Fixed => "Fixed",
        }
    }
}

impl FromStr for CouponType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Percentage" => Ok(Self::Percentage),
            "Fixed" => Ok(Self::Fixed),
            _ => Err(DomainError::UnknownStatus {
                kind: "coupon type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CouponType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponStatus {
    /// Redeemable.
    Active,
    /// Switched off by staff.
    Inactive,
    /// Past its expiry date or usage limit.
    Expired,
}

impl CouponStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Expired => "Expired",
        }
    }
}

impl FromStr for CouponStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "Expired" => Ok(Self::Expired),
            _ => Err(DomainError::UnknownStatus {
                kind: "coupon status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks that a discount value makes sense for its type.
///
/// Percentage coupons must discount between 1 and 100 percent. Fixed
/// coupons must discount a positive amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidCouponValue` if the value is out of
/// range.
pub fn validate_coupon_value(coupon_type: CouponType, value: i64) -> Result<(), DomainError> {
    match coupon_type {
        CouponType::Percentage => {
            if (1..=100).contains(&value) {
                Ok(())
            } else {
                Err(DomainError::InvalidCouponValue {
                    coupon_type: coupon_type.as_str().to_string(),
                    value,
                    reason: String::from("percentage must be between 1 and 100"),
                })
            }
        }
        CouponType::Fixed => {
            if value > 0 {
                Ok(())
            } else {
                Err(DomainError::InvalidCouponValue {
                    coupon_type: coupon_type.as_str().to_string(),
                    value,
                    reason: String::from("fixed discount must be positive"),
                })
            }
        }
    }
}

/// A discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon identifier.
    pub id: String,
    /// The code customers type in.
    pub code: String,
    /// Percentage or fixed discount.
    pub coupon_type: CouponType,
    /// Discount size. Percent for percentage coupons, minor units for
    /// fixed ones.
    pub value: i64,
    /// Lifecycle status.
    pub status: CouponStatus,
    /// How many times the coupon has been redeemed.
    pub usage_count: u32,
    /// Redemption cap. `None` means unlimited.
    pub usage_limit: Option<u32>,
    /// Expiry date. `None` means the coupon never expires.
    pub expires_at: Option<Date>,
    /// When the coupon was created.
    pub created_at: OffsetDateTime,
}

impl Coupon {
    /// Whether the coupon can still be redeemed on `today`.
    ///
    /// Requires active status, an unexpired date, and remaining uses.
    #[must_use]
    pub fn is_redeemable(&self, today: Date) -> bool {
        if self.status != CouponStatus::Active {
            return false;
        }
        if self.expires_at.is_some_and(|expiry| expiry < today) {
            return false;
        }
        if self.usage_limit.is_some_and(|limit| self.usage_count >= limit) {
            return false;
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn make_coupon() -> Coupon {
        Coupon {
            id: String::from("coup1"),
            code: String::from("BEMVINDO10"),
            coupon_type: CouponType::Percentage,
            value: 10,
            status: CouponStatus::Active,
            usage_count: 25,
            usage_limit: Some(100),
            expires_at: None,
            created_at: datetime!(2024-06-01 10:00 UTC),
        }
    }

    #[test]
    fn test_percentage_over_one_hundred_rejected() {
        let result: Result<(), DomainError> =
            validate_coupon_value(CouponType::Percentage, 150);
        assert!(matches!(
            result,
            Err(DomainError::InvalidCouponValue { .. })
        ));
    }

    #[test]
    fn test_fixed_discount_must_be_positive() {
        assert!(validate_coupon_value(CouponType::Fixed, 5_000).is_ok());
        assert!(validate_coupon_value(CouponType::Fixed, 0).is_err());
    }

    #[test]
    fn test_unlimited_coupon_is_redeemable() {
        let coupon: Coupon = make_coupon();
        assert!(coupon.is_redeemable(date!(2024 - 07 - 01)));
    }

    #[test]
    fn test_exhausted_coupon_is_not_redeemable() {
        let mut coupon: Coupon = make_coupon();
        coupon.usage_count = 100;
        assert!(!coupon.is_redeemable(date!(2024 - 07 - 01)));
    }

    #[test]
    fn test_past_expiry_blocks_redemption() {
        let mut coupon: Coupon = make_coupon();
        coupon.expires_at = Some(date!(2024 - 06 - 30));
        assert!(!coupon.is_redeemable(date!(2024 - 07 - 01)));
    }

    #[test]
    fn test_inactive_coupon_is_not_redeemable() {
        let mut coupon: Coupon = make_coupon();
        coupon.status = CouponStatus::Inactive;
        assert!(!coupon.is_redeemable(date!(2024 - 07 - 01)));
    }
}
