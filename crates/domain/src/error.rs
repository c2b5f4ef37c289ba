// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur when domain rules are violated.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A status string did not match any known value for its enumeration.
    UnknownStatus {
        /// The enumeration the value was parsed against (e.g. "supplier status").
        kind: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// A strict lifecycle helper rejected a status transition.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// A required text field was empty.
    EmptyField {
        /// The field that was empty.
        field: &'static str,
    },
    /// An email address did not have a plausible shape.
    InvalidEmail(String),
    /// An IP address string did not parse as IPv4 or IPv6.
    InvalidIpAddress(String),
    /// A monetary amount was negative where only non-negative values are allowed.
    NegativeAmount {
        /// The field holding the amount.
        field: &'static str,
        /// The offending value in minor currency units.
        value: i64,
    },
    /// A percentage was outside the range 0 to 100.
    InvalidPercentage {
        /// The field holding the percentage.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A rating was outside the range 0 to 5.
    InvalidRating {
        /// The offending value.
        value: f64,
    },
    /// A role hierarchy level was outside the supported range.
    InvalidHierarchyLevel {
        /// The offending level.
        level: u8,
    },
    /// A badge visual level was outside the supported range 1 to 3.
    InvalidVisualLevel {
        /// The offending level.
        level: u8,
    },
    /// A badge validity period was zero days.
    InvalidValidityDays,
    /// A coupon code collided with one already on the platform.
    DuplicateCouponCode(String),
    /// A coupon value was not usable for its coupon type.
    InvalidCouponValue {
        /// The coupon type the value was checked against.
        coupon_type: String,
        /// The offending value.
        value: i64,
        /// Why the value is rejected.
        reason: String,
    },
    /// A product's media list violated the single-primary-item rule.
    PrimaryMediaViolation {
        /// The product whose media list is invalid.
        product_id: String,
        /// How many items were flagged as primary.
        primary_count: usize,
    },
    /// Date arithmetic produced a value outside the representable range.
    DateArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus { kind, value } => {
                write!(f, "Unknown {kind} value: '{value}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from {from} to {to}: {reason}")
            }
            Self::EmptyField { field } => {
                write!(f, "Field '{field}' cannot be empty")
            }
            Self::InvalidEmail(email) => {
                write!(f, "Invalid email address: '{email}'")
            }
            Self::InvalidIpAddress(ip) => {
                write!(f, "Invalid IP address: '{ip}'")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Field '{field}' must be non-negative, got {value}")
            }
            Self::InvalidPercentage { field, value } => {
                write!(f, "Field '{field}' must be between 0 and 100, got {value}")
            }
            Self::InvalidRating { value } => {
                write!(f, "Rating must be between 0 and 5, got {value}")
            }
            Self::InvalidHierarchyLevel { level } => {
                write!(f, "Role hierarchy level must be at least 1, got {level}")
            }
            Self::InvalidVisualLevel { level } => {
                write!(f, "Badge visual level must be between 1 and 3, got {level}")
            }
            Self::InvalidValidityDays => {
                write!(f, "Badge validity must be at least 1 day when set")
            }
            Self::DuplicateCouponCode(code) => {
                write!(f, "Coupon code '{code}' already exists")
            }
            Self::InvalidCouponValue {
                coupon_type,
                value,
                reason,
            } => {
                write!(f, "Invalid value {value} for {coupon_type} coupon: {reason}")
            }
            Self::PrimaryMediaViolation {
                product_id,
                primary_count,
            } => {
                write!(
                    f,
                    "Product '{product_id}' must have exactly one primary media item, found {primary_count}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
