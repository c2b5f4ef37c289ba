// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod badge;
mod coupon;
mod dates;
mod dispute;
mod error;
mod filters;
mod messaging;
mod notification;
mod order;
mod plan;
mod product;
mod reporting;
mod role;
mod security;
mod store;
mod supplier;
mod transaction;
mod users;
mod validation;
mod verification;

#[cfg(test)]
mod tests;

pub use badge::{BadgeDefinition, BadgeRules, BadgeType, SellerBadge, SellerBadgeStatus};
pub use coupon::{Coupon, CouponStatus, CouponType, validate_coupon_value};
pub use dates::{add_one_year, within_last_days, within_last_days_at};
pub use dispute::{Dispute, DisputeStatus};
pub use error::DomainError;
pub use filters::{
    DateRange, InternalUserFilter, MarketplaceUserFilter, OrderFilter, ProductFilter, StoreFilter,
    SupplierFilter, needs_moderation,
};
pub use messaging::{
    AttachmentKind, Conversation, ConversationType, Message, MessageAttachment, MessageStatus,
    Ticket, TicketPriority, TicketStatus,
};
pub use notification::{
    Notification, NotificationPriority, NotificationStatus, NotificationType, RelatedEntity,
    RelatedEntityKind,
};
pub use order::{
    LogisticStatus, Order, OrderEvent, OrderItem, OrderItemStatus, OrderStatus, PaymentMethod,
    PaymentStatus,
};
pub use plan::Plan;
pub use product::{Media, MediaKind, Product, ProductStatus, ProductType, Variation};
pub use reporting::{Alert, AlertType, CommissionSettings, MonthlyData};
pub use role::{PermissionAction, Permissions, Role, SystemModule};
pub use security::{
    ActiveSession, FraudEntityKind, FraudReport, FraudReportStatus, IpRule, IpRuleType,
    LoginAttempt, LoginStatus,
};
pub use store::{Store, StoreStatus};
pub use supplier::{
    Document, DocumentStatus, SellerSalesStatus, StatusHistoryEntry, Supplier, SupplierStatus,
};
pub use transaction::{BusinessType, Transaction, TransactionKind, TransactionStatus};
pub use users::{
    InternalUser, InternalUserRole, InternalUserStatus, MarketplaceUser, MarketplaceUserStatus,
    MarketplaceUserType,
};
pub use validation::{
    validate_coupon_code_unique, validate_email, validate_hierarchy_level, validate_ip_rule_address,
    validate_non_empty, validate_non_negative, validate_percentage, validate_rating,
    validate_validity_days, validate_visual_level,
};
pub use verification::{
    PaidVerification, VerificationAction, VerificationLog, VerificationPlan,
};
