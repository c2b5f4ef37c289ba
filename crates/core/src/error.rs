// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use marketdesk_domain::DomainError;

/// Errors that can occur during state transitions.
///
/// Lookups that miss fail with a typed variant naming the collection,
/// so callers can report exactly which id was stale.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No supplier with the given id exists.
    SupplierNotFound(String),
    /// The supplier exists but holds no document with the given id.
    DocumentNotFound {
        /// The supplier that was searched.
        supplier_id: String,
        /// The missing document.
        document_id: String,
    },
    /// No order with the given id exists.
    OrderNotFound(String),
    /// The order exists but holds no line item with the given id.
    OrderItemNotFound {
        /// The order that was searched.
        order_id: String,
        /// The missing line item.
        item_id: String,
    },
    /// No transaction with the given id exists.
    TransactionNotFound(String),
    /// No dispute with the given id exists.
    DisputeNotFound(String),
    /// No product with the given id exists.
    ProductNotFound(String),
    /// No marketplace user with the given id exists.
    MarketplaceUserNotFound(String),
    /// No staff account with the given id exists.
    InternalUserNotFound(String),
    /// No store with the given id exists.
    StoreNotFound(String),
    /// No commercial plan with the given id exists.
    PlanNotFound(String),
    /// No badge definition with the given id exists.
    BadgeDefinitionNotFound(String),
    /// No badge assignment with the given id exists.
    SellerBadgeNotFound(String),
    /// No paid certification with the given id exists.
    VerificationNotFound(String),
    /// No coupon with the given id exists.
    CouponNotFound(String),
    /// No conversation with the given id exists.
    ConversationNotFound(String),
    /// No notification with the given id exists.
    NotificationNotFound(String),
    /// No permission role with the given id exists.
    RoleNotFound(String),
    /// No IP rule with the given id exists.
    IpRuleNotFound(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SupplierNotFound(id) => write!(f, "Supplier not found: {id}"),
            Self::DocumentNotFound {
                supplier_id,
                document_id,
            } => write!(
                f,
                "Document not found: {document_id} on supplier {supplier_id}"
            ),
            Self::OrderNotFound(id) => write!(f, "Order not found: {id}"),
            Self::OrderItemNotFound { order_id, item_id } => {
                write!(f, "Order item not found: {item_id} on order {order_id}")
            }
            Self::TransactionNotFound(id) => write!(f, "Transaction not found: {id}"),
            Self::DisputeNotFound(id) => write!(f, "Dispute not found: {id}"),
            Self::ProductNotFound(id) => write!(f, "Product not found: {id}"),
            Self::MarketplaceUserNotFound(id) => write!(f, "Marketplace user not found: {id}"),
            Self::InternalUserNotFound(id) => write!(f, "Internal user not found: {id}"),
            Self::StoreNotFound(id) => write!(f, "Store not found: {id}"),
            Self::PlanNotFound(id) => write!(f, "Plan not found: {id}"),
            Self::BadgeDefinitionNotFound(id) => write!(f, "Badge definition not found: {id}"),
            Self::SellerBadgeNotFound(id) => write!(f, "Badge assignment not found: {id}"),
            Self::VerificationNotFound(id) => write!(f, "Paid verification not found: {id}"),
            Self::CouponNotFound(id) => write!(f, "Coupon not found: {id}"),
            Self::ConversationNotFound(id) => write!(f, "Conversation not found: {id}"),
            Self::NotificationNotFound(id) => write!(f, "Notification not found: {id}"),
            Self::RoleNotFound(id) => write!(f, "Role not found: {id}"),
            Self::IpRuleNotFound(id) => write!(f, "IP rule not found: {id}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
