// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! These are distinct from domain and core errors and represent the
//! contract a presentation layer programs against. Lower-layer errors
//! cross into this module through the `translate_*` functions only.

use crate::password_policy::PasswordPolicyError;
use marketdesk::CoreError;
use marketdesk_domain::DomainError;

/// Errors surfaced by the back-office façade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule rejected the request.
    DomainRuleViolation {
        /// Stable machine-readable rule name.
        rule: String,
        /// Human-readable explanation.
        message: String,
    },
    /// A request argument failed validation.
    InvalidInput {
        /// The offending field.
        field: String,
        /// Human-readable explanation.
        message: String,
    },
    /// A referenced record does not exist.
    ResourceNotFound {
        /// The kind of record looked up.
        resource_type: String,
        /// Human-readable explanation.
        message: String,
    },
    /// An uploaded CSV document could not be read at all.
    ///
    /// Row-level problems are reported per row in the preview result;
    /// this variant covers structural failures such as missing headers.
    InvalidCsvFormat {
        /// What made the document unreadable.
        reason: String,
    },
    /// A proposed password failed the active policy.
    PasswordPolicyViolation {
        /// Human-readable explanation.
        message: String,
    },
    /// An unexpected internal failure.
    Internal {
        /// Human-readable explanation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule '{rule}' violated: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain validation error into the API taxonomy.
///
/// Field-shaped complaints become [`ApiError::InvalidInput`]; rule-shaped
/// complaints become [`ApiError::DomainRuleViolation`] with a stable rule
/// name the presentation layer can key on.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownStatus { kind, value } => ApiError::InvalidInput {
            field: String::from(kind),
            message: format!("'{value}' is not a recognized {kind}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!("cannot move from {from} to {to}: {reason}"),
        },
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: String::from(field),
            message: String::from("value must not be empty"),
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{email}' is not a plausible email address"),
        },
        DomainError::InvalidIpAddress(ip) => ApiError::InvalidInput {
            field: String::from("ip"),
            message: format!("'{ip}' is not a valid IP address"),
        },
        DomainError::NegativeAmount { field, value } => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("must not be negative, got {value}"),
        },
        DomainError::InvalidPercentage { field, value } => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("must be between 0 and 100, got {value}"),
        },
        DomainError::InvalidRating { value } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("must be between 0 and 5, got {value}"),
        },
        DomainError::InvalidHierarchyLevel { level } => ApiError::InvalidInput {
            field: String::from("hierarchy_level"),
            message: format!("level {level} is outside the supported range"),
        },
        DomainError::InvalidVisualLevel { level } => ApiError::InvalidInput {
            field: String::from("visual_level"),
            message: format!("level {level} is outside the 1 to 3 range"),
        },
        DomainError::InvalidValidityDays => ApiError::InvalidInput {
            field: String::from("valid_for_days"),
            message: String::from("must cover at least one day when set"),
        },
        DomainError::DuplicateCouponCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_coupon_code"),
            message: format!("coupon code '{code}' already exists"),
        },
        DomainError::InvalidCouponValue {
            coupon_type,
            value,
            reason,
        } => ApiError::InvalidInput {
            field: String::from("value"),
            message: format!("{value} is not usable for a {coupon_type} coupon: {reason}"),
        },
        DomainError::PrimaryMediaViolation {
            product_id,
            primary_count,
        } => ApiError::DomainRuleViolation {
            rule: String::from("single_primary_media"),
            message: format!(
                "product '{product_id}' would carry {primary_count} primary media entries"
            ),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("date arithmetic overflowed while {operation}"),
        },
    }
}

/// Translates a store-level error into the API taxonomy.
///
/// NotFound variants map onto [`ApiError::ResourceNotFound`] with the
/// entity kind spelled out; wrapped domain errors are forwarded to
/// [`translate_domain_error`].
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SupplierNotFound(id) => not_found("Supplier", format!("no supplier '{id}'")),
        CoreError::DocumentNotFound {
            supplier_id,
            document_id,
        } => not_found(
            "Document",
            format!("supplier '{supplier_id}' has no document '{document_id}'"),
        ),
        CoreError::OrderNotFound(id) => not_found("Order", format!("no order '{id}'")),
        CoreError::OrderItemNotFound { order_id, item_id } => not_found(
            "Order item",
            format!("order '{order_id}' has no item '{item_id}'"),
        ),
        CoreError::TransactionNotFound(id) => {
            not_found("Transaction", format!("no transaction '{id}'"))
        }
        CoreError::DisputeNotFound(id) => not_found("Dispute", format!("no dispute '{id}'")),
        CoreError::ProductNotFound(id) => not_found("Product", format!("no product '{id}'")),
        CoreError::MarketplaceUserNotFound(id) => {
            not_found("Marketplace user", format!("no marketplace user '{id}'"))
        }
        CoreError::InternalUserNotFound(id) => {
            not_found("Internal user", format!("no staff account '{id}'"))
        }
        CoreError::StoreNotFound(id) => not_found("Store", format!("no store '{id}'")),
        CoreError::PlanNotFound(id) => not_found("Plan", format!("no plan '{id}'")),
        CoreError::BadgeDefinitionNotFound(id) => {
            not_found("Badge definition", format!("no badge definition '{id}'"))
        }
        CoreError::SellerBadgeNotFound(id) => {
            not_found("Seller badge", format!("no badge assignment '{id}'"))
        }
        CoreError::VerificationNotFound(id) => {
            not_found("Paid verification", format!("no paid verification '{id}'"))
        }
        CoreError::CouponNotFound(id) => not_found("Coupon", format!("no coupon '{id}'")),
        CoreError::ConversationNotFound(id) => {
            not_found("Conversation", format!("no conversation '{id}'"))
        }
        CoreError::NotificationNotFound(id) => {
            not_found("Notification", format!("no notification '{id}'"))
        }
        CoreError::RoleNotFound(id) => not_found("Role", format!("no role '{id}'")),
        CoreError::IpRuleNotFound(id) => not_found("IP rule", format!("no IP rule '{id}'")),
    }
}

pub(crate) fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from(resource_type),
        message,
    }
}
