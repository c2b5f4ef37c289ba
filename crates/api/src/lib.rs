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

//! Back-office façade for the Marketdesk admin workspace.
//!
//! [`Backoffice`] owns the domain state and exposes the operation
//! catalog a presentation layer drives: status transitions, badge and
//! verification management, permission edits, messaging, marketing, and
//! security controls. Mutations take primitive arguments, run through
//! the transition engine attributed to the acting operator, and come
//! back as [`ApiError`] when rejected. Reads return snapshot slices and
//! computed aggregates.

mod capabilities;
mod csv_preview;
mod error;
mod export;
mod idgen;
mod password_policy;

#[cfg(test)]
mod tests;

pub use capabilities::{
    Capability, ModuleCapabilities, RoleMatrixCapabilities, compute_module_capabilities,
    compute_role_matrix_capabilities,
};
pub use csv_preview::{CsvPreviewResult, CsvRowResult, CsvRowStatus, preview_csv_coupons};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use export::{audit_log_csv, state_snapshot_json};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};

use marketdesk::{
    Command, DashboardStats, DomainState, FinancialSummary, RevenueByBusinessType, RevenuePoint,
    SecurityStats, SupplierCommission, TransitionResult, apply, demo_state,
};
use marketdesk_audit::{Actor, AuditEntityKind, AuditEntry, SecurityEvent};
use marketdesk_domain::{
    ActiveSession, Alert, BadgeDefinition, CommissionSettings, Conversation, Coupon, CouponStatus,
    CouponType, DateRange, Dispute, DisputeStatus, DocumentStatus, FraudReport, InternalUser,
    InternalUserRole, InternalUserStatus, IpRule, IpRuleType, LoginAttempt, LogisticStatus,
    MarketplaceUser, MarketplaceUserStatus, Message, MonthlyData, Notification,
    NotificationStatus, Order, OrderItemStatus, OrderStatus, PaidVerification, PaymentStatus,
    PermissionAction, Plan, Product, ProductStatus, Role, SellerBadge, SellerSalesStatus, Store,
    StoreStatus, Supplier, SupplierStatus, SystemModule, Ticket, Transaction, TransactionStatus,
    VerificationLog, VerificationPlan,
};
use time::{Date, OffsetDateTime};

/// The single-owner store behind the back office.
///
/// One `Backoffice` value holds the whole [`DomainState`]; the
/// presentation layer borrows it and calls operation methods. Every
/// mutation is attributed to the current operator, which defaults to
/// the built-in staff admin from the demo dataset.
#[derive(Debug, Clone)]
pub struct Backoffice {
    state: DomainState,
    operator: Actor,
}

impl Backoffice {
    /// Creates a back office over an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DomainState::new(),
            operator: default_operator(),
        }
    }

    /// Creates a back office seeded with the linked demo dataset,
    /// anchored to the current date.
    #[must_use]
    pub fn with_demo_data() -> Self {
        Self {
            state: demo_state(OffsetDateTime::now_utc().date()),
            operator: default_operator(),
        }
    }

    /// Returns the full state snapshot.
    #[must_use]
    pub const fn state(&self) -> &DomainState {
        &self.state
    }

    /// Returns the operator mutations are attributed to.
    #[must_use]
    pub const fn operator(&self) -> &Actor {
        &self.operator
    }

    /// Replaces the acting operator.
    pub fn set_operator(&mut self, operator: Actor) {
        self.operator = operator;
    }

    fn execute(&mut self, command: Command) -> Result<(), ApiError> {
        let result: TransitionResult = apply(
            &self.state,
            command,
            &self.operator,
            OffsetDateTime::now_utc(),
        )
        .map_err(translate_core_error)?;
        self.state = result.new_state;
        Ok(())
    }

    fn internal_user(&self, user_id: &str) -> Result<&InternalUser, ApiError> {
        self.state
            .internal_users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| {
                error::not_found("Internal user", format!("no staff account '{user_id}'"))
            })
    }

    fn role(&self, role_id: &str) -> Result<&Role, ApiError> {
        self.state
            .roles
            .iter()
            .find(|role| role.id == role_id)
            .ok_or_else(|| error::not_found("Role", format!("no role '{role_id}'")))
    }

    // Supplier operations

    /// Sets a supplier's lifecycle status.
    ///
    /// Appends a status history entry, syncs the mirrored marketplace
    /// user when one exists, and records a critical audit entry, all in
    /// one transition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier does not
    /// exist, or [`ApiError::InvalidInput`] if `status` is not a
    /// recognized supplier status.
    pub fn update_supplier_status(
        &mut self,
        supplier_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: SupplierStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetSupplierStatus {
            supplier_id: String::from(supplier_id),
            status: parsed,
        })?;
        tracing::info!("Supplier {} status set to {}", supplier_id, status);
        Ok(())
    }

    /// Sets the status of one of a supplier's onboarding documents.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier or the
    /// document does not exist, or [`ApiError::InvalidInput`] on an
    /// unrecognized status.
    pub fn update_document_status(
        &mut self,
        supplier_id: &str,
        document_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: DocumentStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetDocumentStatus {
            supplier_id: String::from(supplier_id),
            document_id: String::from(document_id),
            status: parsed,
        })?;
        tracing::info!(
            "Supplier {} document {} set to {}",
            supplier_id,
            document_id,
            status
        );
        Ok(())
    }

    /// Moves a supplier onto another commercial plan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier or the
    /// plan does not exist.
    pub fn update_supplier_plan(
        &mut self,
        supplier_id: &str,
        plan_id: &str,
    ) -> Result<(), ApiError> {
        self.execute(Command::SetSupplierPlan {
            supplier_id: String::from(supplier_id),
            plan_id: String::from(plan_id),
        })?;
        tracing::info!("Supplier {} moved to plan {}", supplier_id, plan_id);
        Ok(())
    }

    /// Sets a supplier's selling status independent of the lifecycle
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_supplier_sales_status(
        &mut self,
        supplier_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: SellerSalesStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetSupplierSalesStatus {
            supplier_id: String::from(supplier_id),
            status: parsed,
        })?;
        tracing::info!("Supplier {} sales status set to {}", supplier_id, status);
        Ok(())
    }

    /// Grants a supplier a one-off manual expansion of their monthly
    /// sales limit.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier does not
    /// exist.
    pub fn approve_manual_expansion(
        &mut self,
        supplier_id: &str,
        amount: i64,
    ) -> Result<(), ApiError> {
        self.execute(Command::ApproveManualExpansion {
            supplier_id: String::from(supplier_id),
            amount,
        })?;
        tracing::info!(
            "Supplier {} granted manual expansion of {}",
            supplier_id,
            amount
        );
        Ok(())
    }

    /// Replaces an existing commercial plan's definition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if no plan with the given
    /// id exists.
    pub fn save_plan(&mut self, plan: Plan) -> Result<(), ApiError> {
        let plan_id: String = plan.id.clone();
        self.execute(Command::SavePlan { plan })?;
        tracing::info!("Plan {} saved", plan_id);
        Ok(())
    }

    // Order operations

    /// Sets an order's overall status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the order does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_order_status(&mut self, order_id: &str, status: &str) -> Result<(), ApiError> {
        let parsed: OrderStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetOrderStatus {
            order_id: String::from(order_id),
            status: parsed,
        })?;
        tracing::info!("Order {} status set to {}", order_id, status);
        Ok(())
    }

    /// Sets an order's payment status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the order does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_payment_status(&mut self, order_id: &str, status: &str) -> Result<(), ApiError> {
        let parsed: PaymentStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetPaymentStatus {
            order_id: String::from(order_id),
            status: parsed,
        })?;
        tracing::info!("Order {} payment status set to {}", order_id, status);
        Ok(())
    }

    /// Sets an order's logistic status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the order does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_logistic_status(&mut self, order_id: &str, status: &str) -> Result<(), ApiError> {
        let parsed: LogisticStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetLogisticStatus {
            order_id: String::from(order_id),
            status: parsed,
        })?;
        tracing::info!("Order {} logistic status set to {}", order_id, status);
        Ok(())
    }

    /// Sets the status of a single line item within an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the order or the item
    /// does not exist, or [`ApiError::InvalidInput`] on an unrecognized
    /// status.
    pub fn update_order_item_status(
        &mut self,
        order_id: &str,
        item_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: OrderItemStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetOrderItemStatus {
            order_id: String::from(order_id),
            item_id: String::from(item_id),
            status: parsed,
        })?;
        tracing::info!("Order {} item {} status set to {}", order_id, item_id, status);
        Ok(())
    }

    // Finance operations

    /// Sets a transaction's settlement status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the transaction does
    /// not exist, or [`ApiError::InvalidInput`] on an unrecognized
    /// status.
    pub fn update_transaction_status(
        &mut self,
        transaction_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: TransactionStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetTransactionStatus {
            transaction_id: String::from(transaction_id),
            status: parsed,
        })?;
        tracing::info!("Transaction {} status set to {}", transaction_id, status);
        Ok(())
    }

    /// Sets a dispute's status. Moving into Resolved stamps the
    /// resolution timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the dispute does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_dispute_status(
        &mut self,
        dispute_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: DisputeStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetDisputeStatus {
            dispute_id: String::from(dispute_id),
            status: parsed,
        })?;
        tracing::info!("Dispute {} status set to {}", dispute_id, status);
        Ok(())
    }

    /// Replaces the commission settings wholesale. The new settings are
    /// applied as given; rates are not range-checked here.
    ///
    /// # Errors
    ///
    /// Does not fail today; the `Result` keeps the signature uniform
    /// with the rest of the catalog.
    pub fn update_commission_settings(
        &mut self,
        settings: CommissionSettings,
    ) -> Result<(), ApiError> {
        let global: f64 = settings.global;
        self.execute(Command::SetCommissionSettings { settings })?;
        tracing::info!("Commission settings replaced; global rate {}", global);
        Ok(())
    }

    // Product operations

    /// Sets a product's moderation status.
    ///
    /// A `reason` is stored when provided; passing `None` retains the
    /// previously recorded reason.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the product does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_product_status(
        &mut self,
        product_id: &str,
        status: &str,
        reason: Option<String>,
    ) -> Result<(), ApiError> {
        let parsed: ProductStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetProductStatus {
            product_id: String::from(product_id),
            status: parsed,
            reason,
        })?;
        tracing::info!("Product {} status set to {}", product_id, status);
        Ok(())
    }

    // User operations

    /// Sets a marketplace user's status.
    ///
    /// When the id belongs to a supplier, the supplier's lifecycle
    /// status is mapped and applied in the same transition, so the two
    /// views never diverge.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the user does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_marketplace_user_status(
        &mut self,
        user_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: MarketplaceUserStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetMarketplaceUserStatus {
            user_id: String::from(user_id),
            status: parsed,
        })?;
        tracing::info!("Marketplace user {} status set to {}", user_id, status);
        Ok(())
    }

    /// Sets a staff account's status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the staff account does
    /// not exist, or [`ApiError::InvalidInput`] on an unrecognized
    /// status.
    pub fn update_internal_user_status(
        &mut self,
        user_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: InternalUserStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetInternalUserStatus {
            user_id: String::from(user_id),
            status: parsed,
        })?;
        tracing::info!("Internal user {} status set to {}", user_id, status);
        Ok(())
    }

    /// Sets a staff account's role tier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the staff account does
    /// not exist, or [`ApiError::InvalidInput`] on an unrecognized role
    /// name.
    pub fn update_internal_user_role(&mut self, user_id: &str, role: &str) -> Result<(), ApiError> {
        let parsed: InternalUserRole = role.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetInternalUserRole {
            user_id: String::from(user_id),
            role: parsed,
        })?;
        tracing::info!("Internal user {} role set to {}", user_id, role);
        Ok(())
    }

    // Store operations

    /// Sets a store's status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the store does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized status.
    pub fn update_store_status(&mut self, store_id: &str, status: &str) -> Result<(), ApiError> {
        let parsed: StoreStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetStoreStatus {
            store_id: String::from(store_id),
            status: parsed,
        })?;
        tracing::info!("Store {} status set to {}", store_id, status);
        Ok(())
    }

    // Badge operations

    /// Creates or replaces a badge definition, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if the definition fails
    /// validation, such as an out-of-range visual level.
    pub fn save_badge_definition(&mut self, definition: BadgeDefinition) -> Result<(), ApiError> {
        let definition_id: String = definition.id.clone();
        self.execute(Command::SaveBadgeDefinition { definition })?;
        tracing::info!("Badge definition {} saved", definition_id);
        Ok(())
    }

    /// Assigns a badge to a seller and returns the new assignment id.
    ///
    /// The assignment expires `valid_for_days` after now when the
    /// definition sets a validity window, and never otherwise. It lands
    /// in both the global list and the seller's embedded list, and an
    /// audit entry is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the seller or the
    /// badge definition does not exist.
    pub fn assign_seller_badge(
        &mut self,
        seller_id: &str,
        badge_id: &str,
    ) -> Result<String, ApiError> {
        let seller_badge_id: String = idgen::synthesize_id("sb-", OffsetDateTime::now_utc());
        self.execute(Command::AssignSellerBadge {
            seller_badge_id: seller_badge_id.clone(),
            seller_id: String::from(seller_id),
            badge_id: String::from(badge_id),
        })?;
        tracing::info!(
            "Badge {} assigned to seller {} as {}",
            badge_id,
            seller_id,
            seller_badge_id
        );
        Ok(seller_badge_id)
    }

    /// Revokes a badge assignment, removing it from the global list
    /// and the seller's embedded list. Records a critical audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the assignment does
    /// not exist.
    pub fn revoke_seller_badge(&mut self, seller_badge_id: &str) -> Result<(), ApiError> {
        self.execute(Command::RevokeSellerBadge {
            seller_badge_id: String::from(seller_badge_id),
        })?;
        tracing::info!("Seller badge {} revoked", seller_badge_id);
        Ok(())
    }

    // Verification operations

    /// Sells a paid verification to a supplier and returns the new
    /// verification id. The verification runs for one year from now.
    ///
    /// # Arguments
    ///
    /// * `supplier_id` - The supplier buying the verification
    /// * `plan` - The verification plan's wire name
    /// * `business_type` - Free-form business classification shown on
    ///   the certificate
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the supplier does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized plan
    /// name.
    pub fn assign_paid_verification(
        &mut self,
        supplier_id: &str,
        plan: &str,
        business_type: &str,
    ) -> Result<String, ApiError> {
        let parsed: VerificationPlan = plan.parse().map_err(translate_domain_error)?;
        let verification_id: String = idgen::synthesize_id("pv-", OffsetDateTime::now_utc());
        self.execute(Command::AssignPaidVerification {
            verification_id: verification_id.clone(),
            supplier_id: String::from(supplier_id),
            plan: parsed,
            business_type: String::from(business_type),
        })?;
        tracing::info!(
            "Paid verification {} ({}) assigned to supplier {}",
            verification_id,
            plan,
            supplier_id
        );
        Ok(verification_id)
    }

    /// Renews a paid verification for another year.
    ///
    /// The extension is cumulative: the new expiry is one year past the
    /// current expiry, even when the verification already lapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the verification does
    /// not exist.
    pub fn renew_paid_verification(&mut self, verification_id: &str) -> Result<(), ApiError> {
        self.execute(Command::RenewPaidVerification {
            verification_id: String::from(verification_id),
        })?;
        tracing::info!("Paid verification {} renewed", verification_id);
        Ok(())
    }

    /// Removes a paid verification from the supplier and the global
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the verification does
    /// not exist.
    pub fn remove_paid_verification(&mut self, verification_id: &str) -> Result<(), ApiError> {
        self.execute(Command::RemovePaidVerification {
            verification_id: String::from(verification_id),
        })?;
        tracing::info!("Paid verification {} removed", verification_id);
        Ok(())
    }

    // Marketing operations

    /// Creates a coupon and returns its synthesized id.
    ///
    /// # Arguments
    ///
    /// * `code` - The redemption code; must not collide with an
    ///   existing code (compared exactly)
    /// * `coupon_type` - `Percentage` or `Fixed`
    /// * `value` - Percent for percentage coupons, minor units for
    ///   fixed ones
    /// * `status` - Initial lifecycle status
    /// * `usage_limit` - Optional redemption ceiling
    /// * `expires_at` - Optional expiry date
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] on an unrecognized type or
    /// status or an out-of-range value, and
    /// [`ApiError::DomainRuleViolation`] when the code already exists.
    pub fn add_coupon(
        &mut self,
        code: &str,
        coupon_type: &str,
        value: i64,
        status: &str,
        usage_limit: Option<u32>,
        expires_at: Option<Date>,
    ) -> Result<String, ApiError> {
        let type_parsed: CouponType = coupon_type.parse().map_err(translate_domain_error)?;
        let status_parsed: CouponStatus = status.parse().map_err(translate_domain_error)?;
        let coupon_id: String = idgen::synthesize_id("coup-", OffsetDateTime::now_utc());
        self.execute(Command::AddCoupon {
            coupon_id: coupon_id.clone(),
            code: String::from(code),
            coupon_type: type_parsed,
            value,
            status: status_parsed,
            usage_limit,
            expires_at,
        })?;
        tracing::info!("Coupon {} created as {}", code, coupon_id);
        Ok(coupon_id)
    }

    /// Replaces an existing coupon, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the coupon does not
    /// exist, [`ApiError::InvalidInput`] on an out-of-range value, or
    /// [`ApiError::DomainRuleViolation`] when the new code collides
    /// with another coupon.
    pub fn update_coupon(&mut self, coupon: Coupon) -> Result<(), ApiError> {
        let coupon_id: String = coupon.id.clone();
        self.execute(Command::UpdateCoupon { coupon })?;
        tracing::info!("Coupon {} updated", coupon_id);
        Ok(())
    }

    /// Previews a coupon CSV upload without touching state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCsvFormat`] when the document itself
    /// is unreadable; row-level problems come back in the result.
    pub fn preview_coupon_csv(&self, csv_content: &str) -> Result<CsvPreviewResult, ApiError> {
        preview_csv_coupons(csv_content, &self.state)
    }

    // Communication operations

    /// Appends a staff message to a conversation and returns the new
    /// message id. The conversation's preview line is updated and its
    /// unread counter reset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the conversation does
    /// not exist.
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        content: &str,
    ) -> Result<String, ApiError> {
        let message_id: String = idgen::synthesize_id("msg-", OffsetDateTime::now_utc());
        self.execute(Command::SendMessage {
            message_id: message_id.clone(),
            conversation_id: String::from(conversation_id),
            content: String::from(content),
        })?;
        tracing::info!(
            "Message {} sent in conversation {}",
            message_id,
            conversation_id
        );
        Ok(message_id)
    }

    /// Sets a notification's read status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the notification does
    /// not exist, or [`ApiError::InvalidInput`] on an unrecognized
    /// status.
    pub fn update_notification_status(
        &mut self,
        notification_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let parsed: NotificationStatus = status.parse().map_err(translate_domain_error)?;
        self.execute(Command::SetNotificationStatus {
            notification_id: String::from(notification_id),
            status: parsed,
        })?;
        tracing::info!("Notification {} status set to {}", notification_id, status);
        Ok(())
    }

    // Permission operations

    /// Creates or replaces a role, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if the role fails validation,
    /// such as an out-of-range hierarchy level.
    pub fn save_role(&mut self, role: Role) -> Result<(), ApiError> {
        let role_id: String = role.id.clone();
        self.execute(Command::SaveRole { role })?;
        tracing::info!("Role {} saved", role_id);
        Ok(())
    }

    /// Grants or revokes one action on one module for a role.
    ///
    /// The store accepts the edit for any existing role, including the
    /// hierarchy-1 role the capability layer reports as locked; such
    /// edits are applied but logged as advisory bypasses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the role does not
    /// exist, or [`ApiError::InvalidInput`] on an unrecognized module
    /// or action name.
    pub fn update_permission(
        &mut self,
        role_id: &str,
        module: &str,
        action: &str,
        granted: bool,
    ) -> Result<(), ApiError> {
        let module_parsed: SystemModule = module.parse().map_err(translate_domain_error)?;
        let action_parsed: PermissionAction = action.parse().map_err(translate_domain_error)?;
        let locked: bool = self
            .state
            .roles
            .iter()
            .any(|role| role.id == role_id && role.hierarchy_level == 1);
        self.execute(Command::SetPermission {
            role_id: String::from(role_id),
            module: module_parsed,
            action: action_parsed,
            granted,
        })?;
        if locked {
            tracing::warn!(
                "Permission edit applied to hierarchy-1 role {} despite capability lock",
                role_id
            );
        }
        tracing::info!(
            "Role {} permission {}/{} set to {}",
            role_id,
            module,
            action,
            granted
        );
        Ok(())
    }

    // Security operations

    /// Adds an IP allow/deny rule and returns its synthesized id. A
    /// security event is recorded in the same transition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if `ip` is not a valid
    /// address or `rule_type` is not `allow` or `deny`.
    pub fn add_ip_rule(
        &mut self,
        ip: &str,
        rule_type: &str,
        notes: Option<String>,
    ) -> Result<String, ApiError> {
        let parsed: IpRuleType = rule_type.parse().map_err(translate_domain_error)?;
        let rule_id: String = idgen::synthesize_id("ipr", OffsetDateTime::now_utc());
        self.execute(Command::AddIpRule {
            rule_id: rule_id.clone(),
            ip: String::from(ip),
            rule_type: parsed,
            notes,
        })?;
        tracing::info!("IP rule {} added ({} {})", rule_id, rule_type, ip);
        Ok(rule_id)
    }

    /// Removes an IP rule. A security event is recorded in the same
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the rule does not
    /// exist.
    pub fn remove_ip_rule(&mut self, rule_id: &str) -> Result<(), ApiError> {
        self.execute(Command::RemoveIpRule {
            rule_id: String::from(rule_id),
        })?;
        tracing::info!("IP rule {} removed", rule_id);
        Ok(())
    }

    // Audit and export operations

    /// Appends an audit entry attributed to the current operator.
    ///
    /// # Errors
    ///
    /// Does not fail today; the `Result` keeps the signature uniform
    /// with the rest of the catalog.
    pub fn record_audit_entry(
        &mut self,
        action: &str,
        details: &str,
        is_critical: bool,
        entity_kind: Option<AuditEntityKind>,
        entity_id: Option<String>,
    ) -> Result<(), ApiError> {
        self.execute(Command::RecordAuditEntry {
            action: String::from(action),
            details: String::from(details),
            is_critical,
            entity_kind,
            entity_id,
        })
    }

    /// Renders the audit log as CSV and records the export itself as an
    /// audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if rendering fails.
    pub fn export_audit_log(&mut self) -> Result<String, ApiError> {
        let rendered: String = export::audit_log_csv(&self.state)?;
        let entry_count: usize = self.state.audit_trail.len();
        self.record_audit_entry(
            "DataExported",
            "Audit log exported as CSV",
            false,
            Some(AuditEntityKind::Security),
            None,
        )?;
        tracing::info!("Audit log exported with {} entries", entry_count);
        Ok(rendered)
    }

    /// Serializes the full state as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if serialization fails.
    pub fn snapshot_json(&self) -> Result<String, ApiError> {
        export::state_snapshot_json(&self.state)
    }

    // Password policy

    /// Checks a proposed password for a staff account against a policy.
    ///
    /// The account's email local part and display name are treated as
    /// forbidden password content.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the staff account does
    /// not exist, or [`ApiError::PasswordPolicyViolation`] when the
    /// password fails the policy.
    pub fn validate_password(
        &self,
        user_id: &str,
        password: &str,
        confirmation: &str,
        policy: &PasswordPolicy,
    ) -> Result<(), ApiError> {
        let user: &InternalUser = self.internal_user(user_id)?;
        policy
            .validate(password, confirmation, &user.email, &user.name)
            .map_err(ApiError::from)
    }

    // Capability surface

    /// Computes the advisory capability flags a staff account holds
    /// inside one module.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the staff account does
    /// not exist, or [`ApiError::InvalidInput`] on an unrecognized
    /// module name.
    pub fn module_capabilities(
        &self,
        user_id: &str,
        module: &str,
    ) -> Result<ModuleCapabilities, ApiError> {
        let module_parsed: SystemModule = module.parse().map_err(translate_domain_error)?;
        let user: &InternalUser = self.internal_user(user_id)?;
        Ok(compute_module_capabilities(
            user,
            &self.state.roles,
            module_parsed,
        ))
    }

    /// Computes the advisory capability flags a staff account holds
    /// over one role in the permission matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] if the staff account or
    /// the role does not exist.
    pub fn role_matrix_capabilities(
        &self,
        user_id: &str,
        role_id: &str,
    ) -> Result<RoleMatrixCapabilities, ApiError> {
        let user: &InternalUser = self.internal_user(user_id)?;
        let target: &Role = self.role(role_id)?;
        Ok(compute_role_matrix_capabilities(
            user,
            &self.state.roles,
            target,
        ))
    }

    // Aggregate reads

    /// Headline counters and growth series for the dashboard.
    #[must_use]
    pub fn dashboard_stats(&self, today: Date) -> DashboardStats {
        marketdesk::dashboard_stats(&self.state, today)
    }

    /// Security posture counters for the security module.
    #[must_use]
    pub fn security_stats(&self, now: OffsetDateTime) -> SecurityStats {
        marketdesk::security_stats(&self.state, now)
    }

    /// Revenue, commission, and dispute totals over a date range.
    #[must_use]
    pub fn financial_summary(&self, range: &DateRange) -> FinancialSummary {
        marketdesk::financial_summary(&self.state, range)
    }

    /// Date-bucketed revenue and estimated profit over a range.
    #[must_use]
    pub fn revenue_vs_profit(&self, range: &DateRange) -> Vec<RevenuePoint> {
        marketdesk::revenue_vs_profit(&self.state, range)
    }

    /// Revenue split between product and service business over a range.
    #[must_use]
    pub fn revenue_by_business_type(&self, range: &DateRange) -> RevenueByBusinessType {
        marketdesk::revenue_by_business_type(&self.state, range)
    }

    /// The highest-commission suppliers over a range, best first.
    #[must_use]
    pub fn top_suppliers_by_commission(&self, range: &DateRange) -> Vec<SupplierCommission> {
        marketdesk::top_suppliers_by_commission(&self.state, range)
    }

    /// Distinct product categories, in first-appearance order.
    #[must_use]
    pub fn product_categories(&self) -> Vec<String> {
        marketdesk::product_categories(&self.state)
    }

    /// Distinct store categories, in first-appearance order.
    #[must_use]
    pub fn store_categories(&self) -> Vec<String> {
        marketdesk::store_categories(&self.state)
    }

    /// Coupons currently active, in date, and under their usage limit.
    #[must_use]
    pub fn redeemable_coupons(&self, today: Date) -> Vec<&Coupon> {
        marketdesk::redeemable_coupons(&self.state, today)
    }

    // Collection reads

    /// All suppliers.
    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.state.suppliers
    }

    /// All stores.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.state.stores
    }

    /// All products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    /// All orders.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    /// All transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// All disputes.
    #[must_use]
    pub fn disputes(&self) -> &[Dispute] {
        &self.state.disputes
    }

    /// All marketplace users.
    #[must_use]
    pub fn marketplace_users(&self) -> &[MarketplaceUser] {
        &self.state.marketplace_users
    }

    /// All staff accounts.
    #[must_use]
    pub fn internal_users(&self) -> &[InternalUser] {
        &self.state.internal_users
    }

    /// All roles in the permission matrix.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.state.roles
    }

    /// All commercial plans.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.state.plans
    }

    /// All badge definitions.
    #[must_use]
    pub fn badge_definitions(&self) -> &[BadgeDefinition] {
        &self.state.badge_definitions
    }

    /// All badge assignments.
    #[must_use]
    pub fn seller_badges(&self) -> &[SellerBadge] {
        &self.state.seller_badges
    }

    /// All paid verifications.
    #[must_use]
    pub fn paid_verifications(&self) -> &[PaidVerification] {
        &self.state.paid_verifications
    }

    /// The verification activity log.
    #[must_use]
    pub fn verification_logs(&self) -> &[VerificationLog] {
        &self.state.verification_logs
    }

    /// All coupons.
    #[must_use]
    pub fn coupons(&self) -> &[Coupon] {
        &self.state.coupons
    }

    /// The current commission settings.
    #[must_use]
    pub const fn commission_settings(&self) -> &CommissionSettings {
        &self.state.commission_settings
    }

    /// All notifications.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    /// All conversations.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.state.conversations
    }

    /// All messages across conversations.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    /// All support tickets.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.state.tickets
    }

    /// All IP rules.
    #[must_use]
    pub fn ip_rules(&self) -> &[IpRule] {
        &self.state.ip_rules
    }

    /// The login attempt log.
    #[must_use]
    pub fn login_attempts(&self) -> &[LoginAttempt] {
        &self.state.login_attempts
    }

    /// Currently active sessions.
    #[must_use]
    pub fn active_sessions(&self) -> &[ActiveSession] {
        &self.state.active_sessions
    }

    /// All fraud reports.
    #[must_use]
    pub fn fraud_reports(&self) -> &[FraudReport] {
        &self.state.fraud_reports
    }

    /// The audit trail, newest first.
    #[must_use]
    pub fn audit_trail(&self) -> &[AuditEntry] {
        &self.state.audit_trail
    }

    /// The security event log, newest first.
    #[must_use]
    pub fn security_events(&self) -> &[SecurityEvent] {
        &self.state.security_events
    }

    /// Monthly revenue/user chart data.
    #[must_use]
    pub fn monthly_data(&self) -> &[MonthlyData] {
        &self.state.monthly_data
    }

    /// Operational alerts for the dashboard.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.state.alerts
    }
}

impl Default for Backoffice {
    fn default() -> Self {
        Self::new()
    }
}

fn default_operator() -> Actor {
    Actor::new(String::from("int-usr1"), String::from("Alice Johnson"))
}
