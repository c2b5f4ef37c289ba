// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::coupon::Coupon;
use crate::error::DomainError;
use std::collections::HashSet;
use std::net::IpAddr;

/// Validates that a required text field is not empty.
///
/// # Arguments
///
/// * `field` - The field name, for the error message
/// * `value` - The value to check
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the value is empty or only
/// whitespace.
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}

/// Validates the shape of an email address.
///
/// This checks for a non-empty local part and a domain with a dot. It
/// does NOT verify the mailbox exists.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    // Rule: exactly one @ with a non-empty local part
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail(email.to_string()));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    // Rule: domain must contain a dot that is not at either edge
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validates an IP rule address.
///
/// Accepts a plain IPv4 or IPv6 address, or a CIDR range such as
/// `10.0.0.0/8`.
///
/// # Errors
///
/// Returns `DomainError::InvalidIpAddress` if the address does not
/// parse or the prefix length is out of range for the family.
pub fn validate_ip_rule_address(ip: &str) -> Result<(), DomainError> {
    let (address, prefix) = match ip.split_once('/') {
        Some((address, prefix)) => (address, Some(prefix)),
        None => (ip, None),
    };

    let parsed: IpAddr = address
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

    if let Some(prefix) = prefix {
        let bits: u8 = prefix
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
        // Rule: prefix length is bounded by the address family
        let max_bits: u8 = match parsed {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if bits > max_bits {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }
    }

    Ok(())
}

/// Validates a star rating.
///
/// # Errors
///
/// Returns `DomainError::InvalidRating` if the value is outside 0 to 5
/// or is not finite.
pub fn validate_rating(value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=5.0).contains(&value) {
        return Err(DomainError::InvalidRating { value });
    }
    Ok(())
}

/// Validates a commission or discount percentage.
///
/// # Errors
///
/// Returns `DomainError::InvalidPercentage` if the value is outside
/// 0 to 100 or is not finite.
pub fn validate_percentage(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(DomainError::InvalidPercentage { field, value });
    }
    Ok(())
}

/// Validates that a monetary amount is not negative.
///
/// # Errors
///
/// Returns `DomainError::NegativeAmount` if the amount is below zero.
pub const fn validate_non_negative(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Validates a role hierarchy level.
///
/// Level 1 is the most privileged; there is no level 0.
///
/// # Errors
///
/// Returns `DomainError::InvalidHierarchyLevel` if the level is zero.
pub const fn validate_hierarchy_level(level: u8) -> Result<(), DomainError> {
    if level == 0 {
        return Err(DomainError::InvalidHierarchyLevel { level });
    }
    Ok(())
}

/// Validates a badge visual level.
///
/// # Errors
///
/// Returns `DomainError::InvalidVisualLevel` if the level is outside
/// 1 to 3.
pub fn validate_visual_level(level: u8) -> Result<(), DomainError> {
    if !(1..=3).contains(&level) {
        return Err(DomainError::InvalidVisualLevel { level });
    }
    Ok(())
}

/// Validates a badge validity term.
///
/// # Errors
///
/// Returns `DomainError::InvalidValidityDays` if a term is given but
/// is zero. An absent term means the badge never expires.
pub fn validate_validity_days(days: Option<u32>) -> Result<(), DomainError> {
    if days == Some(0) {
        return Err(DomainError::InvalidValidityDays);
    }
    Ok(())
}

/// Validates that a coupon code is not already in use.
///
/// Codes are compared case-sensitively, matching how customers must
/// type them.
///
/// # Arguments
///
/// * `code` - The candidate code
/// * `existing_coupons` - The coupons already on the platform
///
/// # Errors
///
/// Returns `DomainError::DuplicateCouponCode` if the code exists.
pub fn validate_coupon_code_unique(
    code: &str,
    existing_coupons: &[Coupon],
) -> Result<(), DomainError> {
    let existing_codes: HashSet<&str> = existing_coupons
        .iter()
        .map(|coupon| coupon.code.as_str())
        .collect();

    if existing_codes.contains(code) {
        return Err(DomainError::DuplicateCouponCode(code.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_rejected() {
        let result: Result<(), DomainError> = validate_non_empty("name", "   ");
        assert!(matches!(result, Err(DomainError::EmptyField { field: "name" })));
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("contact@techsolutions.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@missing-local.com").is_err());
        assert!(validate_email("dotless@domain").is_err());
        assert!(validate_email("edge@domain.").is_err());
    }

    #[test]
    fn test_plain_and_cidr_addresses_accepted() {
        assert!(validate_ip_rule_address("192.0.2.200").is_ok());
        assert!(validate_ip_rule_address("10.0.0.0/8").is_ok());
        assert!(validate_ip_rule_address("2001:db8::1").is_ok());
        assert!(validate_ip_rule_address("2001:db8::/32").is_ok());
    }

    #[test]
    fn test_bad_addresses_rejected() {
        assert!(validate_ip_rule_address("not-an-ip").is_err());
        assert!(validate_ip_rule_address("10.0.0.0/33").is_err());
        assert!(validate_ip_rule_address("10.0.0.0/abc").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(4.8).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(validate_percentage("commission", 15.0).is_ok());
        assert!(validate_percentage("commission", 100.5).is_err());
    }

    #[test]
    fn test_hierarchy_level_zero_rejected() {
        assert!(validate_hierarchy_level(0).is_err());
        assert!(validate_hierarchy_level(1).is_ok());
    }

    #[test]
    fn test_visual_level_bounds() {
        assert!(validate_visual_level(3).is_ok());
        assert!(validate_visual_level(4).is_err());
        assert!(validate_visual_level(0).is_err());
    }

    #[test]
    fn test_zero_validity_term_rejected() {
        assert!(validate_validity_days(None).is_ok());
        assert!(validate_validity_days(Some(365)).is_ok());
        assert!(validate_validity_days(Some(0)).is_err());
    }
}
