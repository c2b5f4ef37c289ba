// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use marketdesk_audit::AuditEntityKind;
use marketdesk_domain::{
    BadgeDefinition, CommissionSettings, Coupon, CouponStatus, CouponType, DisputeStatus,
    DocumentStatus, InternalUserRole, InternalUserStatus, IpRuleType, LogisticStatus,
    MarketplaceUserStatus, NotificationStatus, OrderItemStatus, OrderStatus, PaymentStatus,
    PermissionAction, Plan, ProductStatus, Role, SellerSalesStatus, StoreStatus, SupplierStatus,
    SystemModule, TransactionStatus, VerificationPlan,
};
use time::Date;

/// A command represents operator intent as data only.
///
/// Commands are the only way to request state changes. Identifiers for
/// created entities are synthesized by the caller and carried in the
/// command, so replaying the same command is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change a supplier's review status.
    ///
    /// Appends to the supplier's status history and keeps the mirrored
    /// marketplace user in step.
    SetSupplierStatus {
        /// The supplier to update.
        supplier_id: String,
        /// The new review status.
        status: SupplierStatus,
    },
    /// Change the review status of one of a supplier's documents.
    SetDocumentStatus {
        /// The supplier holding the document.
        supplier_id: String,
        /// The document to update.
        document_id: String,
        /// The new review status.
        status: DocumentStatus,
    },
    /// Move a supplier onto a different commercial plan.
    SetSupplierPlan {
        /// The supplier to update.
        supplier_id: String,
        /// The plan to move onto.
        plan_id: String,
    },
    /// Pause or resume a supplier's ability to record sales.
    SetSupplierSalesStatus {
        /// The supplier to update.
        supplier_id: String,
        /// The new sales status.
        status: SellerSalesStatus,
    },
    /// Grant a one-off volume expansion for the current plan cycle.
    ApproveManualExpansion {
        /// The supplier receiving the expansion.
        supplier_id: String,
        /// The extra volume granted, in minor units.
        amount: i64,
    },
    /// Replace an existing commercial plan definition.
    SavePlan {
        /// The full replacement plan. Matched by id.
        plan: Plan,
    },
    /// Change an order's fulfilment status.
    SetOrderStatus {
        /// The order to update.
        order_id: String,
        /// The new fulfilment status.
        status: OrderStatus,
    },
    /// Change an order's payment status.
    SetPaymentStatus {
        /// The order to update.
        order_id: String,
        /// The new payment status.
        status: PaymentStatus,
    },
    /// Change an order's shipping progress.
    SetLogisticStatus {
        /// The order to update.
        order_id: String,
        /// The new shipping progress.
        status: LogisticStatus,
    },
    /// Change the status of a single line item within an order.
    SetOrderItemStatus {
        /// The order holding the item.
        order_id: String,
        /// The line item to update.
        item_id: String,
        /// The new item status.
        status: OrderItemStatus,
    },
    /// Change a transaction's settlement status.
    SetTransactionStatus {
        /// The transaction to update.
        transaction_id: String,
        /// The new settlement status.
        status: TransactionStatus,
    },
    /// Change a dispute's status.
    ///
    /// Entering `Resolved` stamps the resolution date; the stamp is
    /// retained on later changes.
    SetDisputeStatus {
        /// The dispute to update.
        dispute_id: String,
        /// The new status.
        status: DisputeStatus,
    },
    /// Change a product's moderation status.
    SetProductStatus {
        /// The product to update.
        product_id: String,
        /// The new moderation status.
        status: ProductStatus,
        /// Why the listing was rejected or returned. `None` keeps the
        /// previous reason.
        reason: Option<String>,
    },
    /// Change a marketplace user's account status.
    ///
    /// When the user mirrors a supplier, the supplier's review status is
    /// updated in the same transition.
    SetMarketplaceUserStatus {
        /// The user to update.
        user_id: String,
        /// The new account status.
        status: MarketplaceUserStatus,
    },
    /// Change a staff account's status.
    SetInternalUserStatus {
        /// The staff account to update.
        user_id: String,
        /// The new account status.
        status: InternalUserStatus,
    },
    /// Change a staff account's built-in role tier.
    SetInternalUserRole {
        /// The staff account to update.
        user_id: String,
        /// The new role tier.
        role: InternalUserRole,
    },
    /// Replace the commission settings wholesale.
    SetCommissionSettings {
        /// The full replacement settings.
        settings: CommissionSettings,
    },
    /// Change a store's publication status.
    SetStoreStatus {
        /// The store to update.
        store_id: String,
        /// The new publication status.
        status: StoreStatus,
    },
    /// Create or replace a badge definition, matched by id.
    SaveBadgeDefinition {
        /// The full definition to upsert.
        definition: BadgeDefinition,
    },
    /// Assign a badge to a supplier.
    ///
    /// Expiration is computed from the definition's validity period; a
    /// definition without one produces a perpetual assignment.
    AssignSellerBadge {
        /// Identifier for the new assignment.
        seller_badge_id: String,
        /// The supplier receiving the badge.
        seller_id: String,
        /// The badge definition to assign.
        badge_id: String,
    },
    /// Remove a badge assignment from its supplier.
    RevokeSellerBadge {
        /// The assignment to remove.
        seller_badge_id: String,
    },
    /// Grant a paid certification to a supplier, valid for one year.
    AssignPaidVerification {
        /// Identifier for the new certification.
        verification_id: String,
        /// The supplier being certified.
        supplier_id: String,
        /// The commercial tier purchased.
        plan: VerificationPlan,
        /// Business relationship category the certification covers.
        business_type: String,
    },
    /// Extend a paid certification by one year from its current expiry.
    RenewPaidVerification {
        /// The certification to renew.
        verification_id: String,
    },
    /// Remove a paid certification from its supplier.
    RemovePaidVerification {
        /// The certification to remove.
        verification_id: String,
    },
    /// Create a marketing coupon.
    AddCoupon {
        /// Identifier for the new coupon.
        coupon_id: String,
        /// Redemption code. Must be unique across the platform.
        code: String,
        /// Percentage or fixed discount.
        coupon_type: CouponType,
        /// Discount value, in percent or minor units per the type.
        value: i64,
        /// Initial status.
        status: CouponStatus,
        /// Redemption ceiling. `None` means unlimited.
        usage_limit: Option<u32>,
        /// Expiry date. `None` means no expiry.
        expires_at: Option<Date>,
    },
    /// Replace an existing coupon, matched by id.
    UpdateCoupon {
        /// The full replacement coupon.
        coupon: Coupon,
    },
    /// Send a staff message into a conversation.
    ///
    /// Updates the conversation's last-message snapshot and clears its
    /// unread counter.
    SendMessage {
        /// Identifier for the new message.
        message_id: String,
        /// The conversation to post into.
        conversation_id: String,
        /// Message body.
        content: String,
    },
    /// Create or replace a permission role, matched by id.
    SaveRole {
        /// The full role to upsert.
        role: Role,
    },
    /// Grant or revoke a single permission on a role.
    SetPermission {
        /// The role to edit.
        role_id: String,
        /// The system module the permission applies to.
        module: SystemModule,
        /// The action being granted or revoked.
        action: PermissionAction,
        /// `true` grants, `false` revokes.
        granted: bool,
    },
    /// Mark a notification read or unread.
    SetNotificationStatus {
        /// The notification to update.
        notification_id: String,
        /// The new read state.
        status: NotificationStatus,
    },
    /// Create an IP allow or deny rule.
    AddIpRule {
        /// Identifier for the new rule.
        rule_id: String,
        /// Address or CIDR range.
        ip: String,
        /// Admit or block.
        rule_type: IpRuleType,
        /// Why the rule exists.
        notes: Option<String>,
    },
    /// Remove an IP rule.
    RemoveIpRule {
        /// The rule to remove.
        rule_id: String,
    },
    /// Append an audit entry directly, without any other state change.
    ///
    /// Used for operator actions that happen outside the store, such as
    /// exports.
    RecordAuditEntry {
        /// Human-readable action tag.
        action: String,
        /// Free-text detail line.
        details: String,
        /// Whether the entry is flagged critical.
        is_critical: bool,
        /// The kind of entity the entry concerns, if any.
        entity_kind: Option<AuditEntityKind>,
        /// The id of the entity the entry concerns, if any.
        entity_id: Option<String>,
    },
}
