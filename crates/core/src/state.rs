// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use marketdesk_audit::{AuditEntry, SecurityEvent};
use marketdesk_domain::{
    ActiveSession, Alert, BadgeDefinition, CommissionSettings, Conversation, Coupon, Dispute,
    FraudReport, InternalUser, IpRule, LoginAttempt, MarketplaceUser, Message, MonthlyData,
    Notification, Order, PaidVerification, Plan, Product, Role, SellerBadge, Store, Supplier,
    Ticket, Transaction, VerificationLog,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete back-office state: every canonical collection plus the
/// append-only audit and security logs.
///
/// There is exactly one logical writer. Transitions are whole-state:
/// [`apply`](crate::apply) clones the state, mutates the copy, and the
/// owner swaps it in on success, so a failed transition never leaves a
/// partially-applied state behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainState {
    /// Selling parties, with embedded documents, badges, and verifications.
    pub suppliers: Vec<Supplier>,
    /// Storefronts, one per supplier.
    pub stores: Vec<Store>,
    /// Catalog products.
    pub products: Vec<Product>,
    /// Marketplace orders.
    pub orders: Vec<Order>,
    /// Financial transactions.
    pub transactions: Vec<Transaction>,
    /// Customer disputes.
    pub disputes: Vec<Dispute>,
    /// Storefront-facing accounts; suppliers are mirrored here.
    pub marketplace_users: Vec<MarketplaceUser>,
    /// Staff accounts.
    pub internal_users: Vec<InternalUser>,
    /// Staff roles and their permission matrices.
    pub roles: Vec<Role>,
    /// Commercial plan templates.
    pub plans: Vec<Plan>,
    /// Badge templates.
    pub badge_definitions: Vec<BadgeDefinition>,
    /// Badge assignments, also embedded in their supplier.
    pub seller_badges: Vec<SellerBadge>,
    /// Paid certifications, also embedded in their supplier.
    pub paid_verifications: Vec<PaidVerification>,
    /// Paid certification history rows.
    pub verification_logs: Vec<VerificationLog>,
    /// Marketing coupons, newest first.
    pub coupons: Vec<Coupon>,
    /// Global and per-category commission rates.
    pub commission_settings: CommissionSettings,
    /// Staff notifications.
    pub notifications: Vec<Notification>,
    /// Support and broadcast conversations.
    pub conversations: Vec<Conversation>,
    /// Messages across all conversations.
    pub messages: Vec<Message>,
    /// Support tickets.
    pub tickets: Vec<Ticket>,
    /// IP allow and deny rules, newest first.
    pub ip_rules: Vec<IpRule>,
    /// Login attempt history.
    pub login_attempts: Vec<LoginAttempt>,
    /// Currently signed-in staff sessions.
    pub active_sessions: Vec<ActiveSession>,
    /// Flagged accounts and stores.
    pub fraud_reports: Vec<FraudReport>,
    /// Append-only audit trail, newest first.
    pub audit_trail: Vec<AuditEntry>,
    /// Append-only security log, newest first.
    pub security_events: Vec<SecurityEvent>,
    /// Monthly chart datapoints.
    pub monthly_data: Vec<MonthlyData>,
    /// Operational alerts.
    pub alerts: Vec<Alert>,
}

impl DomainState {
    /// Creates a state with no records and zeroed commission settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            suppliers: Vec::new(),
            stores: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
            transactions: Vec::new(),
            disputes: Vec::new(),
            marketplace_users: Vec::new(),
            internal_users: Vec::new(),
            roles: Vec::new(),
            plans: Vec::new(),
            badge_definitions: Vec::new(),
            seller_badges: Vec::new(),
            paid_verifications: Vec::new(),
            verification_logs: Vec::new(),
            coupons: Vec::new(),
            commission_settings: CommissionSettings {
                global: 0.0,
                categories: BTreeMap::new(),
            },
            notifications: Vec::new(),
            conversations: Vec::new(),
            messages: Vec::new(),
            tickets: Vec::new(),
            ip_rules: Vec::new(),
            login_attempts: Vec::new(),
            active_sessions: Vec::new(),
            fraud_reports: Vec::new(),
            audit_trail: Vec::new(),
            security_events: Vec::new(),
            monthly_data: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Returns the supplier with the given id, if present.
    #[must_use]
    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    /// Returns the marketplace user with the given id, if present.
    #[must_use]
    pub fn marketplace_user(&self, id: &str) -> Option<&MarketplaceUser> {
        self.marketplace_users.iter().find(|user| user.id == id)
    }

    /// Returns the order with the given id, if present.
    #[must_use]
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }
}

impl Default for DomainState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects. Where the operation logged, the appended entry
/// is returned here as well as being visible in `new_state`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: DomainState,
    /// The audit entry recording this transition, if the operation logs one.
    pub audit_entry: Option<AuditEntry>,
    /// The security event recording this transition, if the operation logs one.
    pub security_event: Option<SecurityEvent>,
}
