// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-state transition function.
//!
//! [`apply`] is the single entry point for every mutation: it clones the
//! current state, routes the command to the handler for its entity
//! family, and returns the new state together with any audit or security
//! entry the operation produced. A failed transition returns the error
//! and leaves the caller's state untouched.

mod badges;
mod comms;
mod finance;
mod marketing;
mod orders;
mod plans;
mod products;
mod security;
mod suppliers;
mod users;
mod verifications;

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{DomainState, TransitionResult};
use marketdesk_audit::{Action, Actor, AuditEntry, SecurityEvent};
use time::OffsetDateTime;

/// The log entries a single command handler produced, if any.
struct Outcome {
    audit_entry: Option<AuditEntry>,
    security_event: Option<SecurityEvent>,
}

impl Outcome {
    /// An outcome with no log entries.
    const fn none() -> Self {
        Self {
            audit_entry: None,
            security_event: None,
        }
    }

    /// An outcome carrying one audit entry.
    const fn audit(entry: AuditEntry) -> Self {
        Self {
            audit_entry: Some(entry),
            security_event: None,
        }
    }

    /// An outcome carrying one security event.
    const fn security(event: SecurityEvent) -> Self {
        Self {
            audit_entry: None,
            security_event: Some(event),
        }
    }
}

/// Synthesizes an audit entry id from the transition timestamp.
fn audit_id(now: OffsetDateTime) -> String {
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    format!("log{millis}")
}

/// Synthesizes a security event id from the transition timestamp.
fn security_id(now: OffsetDateTime) -> String {
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    format!("seclog{millis}")
}

/// Applies a command to the state, producing a new state and any log entries.
///
/// The input state is never modified. Handlers look up referenced rows by
/// id and fail with the matching `CoreError::*NotFound` variant when a
/// lookup misses, so callers can keep their current state on error.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The mutation to apply
/// * `actor` - The operator performing the action; log entries are
///   attributed to this identity
/// * `now` - The transition timestamp; log ids and date stamps derive
///   from it
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any log entries
/// * `Err(CoreError)` if a referenced id is unknown or a domain rule is
///   violated
///
/// # Errors
///
/// Returns an error if:
/// - An id argument does not reference an existing row
/// - A created entity fails domain validation
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &DomainState,
    command: Command,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let mut new_state: DomainState = state.clone();

    let outcome: Outcome = match command {
        Command::SetSupplierStatus {
            supplier_id,
            status,
        } => suppliers::set_supplier_status(&mut new_state, &supplier_id, status, actor, now)?,
        Command::SetDocumentStatus {
            supplier_id,
            document_id,
            status,
        } => suppliers::set_document_status(&mut new_state, &supplier_id, &document_id, status)?,
        Command::SetSupplierPlan {
            supplier_id,
            plan_id,
        } => plans::set_supplier_plan(&mut new_state, &supplier_id, plan_id)?,
        Command::SetSupplierSalesStatus {
            supplier_id,
            status,
        } => plans::set_supplier_sales_status(&mut new_state, &supplier_id, status)?,
        Command::ApproveManualExpansion {
            supplier_id,
            amount,
        } => plans::approve_manual_expansion(&mut new_state, &supplier_id, amount)?,
        Command::SavePlan { plan } => plans::save_plan(&mut new_state, plan)?,
        Command::SetOrderStatus { order_id, status } => {
            orders::set_order_status(&mut new_state, &order_id, status)?
        }
        Command::SetPaymentStatus { order_id, status } => {
            orders::set_payment_status(&mut new_state, &order_id, status)?
        }
        Command::SetLogisticStatus { order_id, status } => {
            orders::set_logistic_status(&mut new_state, &order_id, status)?
        }
        Command::SetOrderItemStatus {
            order_id,
            item_id,
            status,
        } => orders::set_order_item_status(&mut new_state, &order_id, &item_id, status)?,
        Command::SetTransactionStatus {
            transaction_id,
            status,
        } => finance::set_transaction_status(&mut new_state, &transaction_id, status)?,
        Command::SetDisputeStatus { dispute_id, status } => {
            finance::set_dispute_status(&mut new_state, &dispute_id, status, now)?
        }
        Command::SetProductStatus {
            product_id,
            status,
            reason,
        } => products::set_product_status(&mut new_state, &product_id, status, reason)?,
        Command::SetMarketplaceUserStatus { user_id, status } => {
            suppliers::set_marketplace_user_status(&mut new_state, &user_id, status, actor, now)?
        }
        Command::SetInternalUserStatus { user_id, status } => {
            users::set_internal_user_status(&mut new_state, &user_id, status)?
        }
        Command::SetInternalUserRole { user_id, role } => {
            users::set_internal_user_role(&mut new_state, &user_id, role)?
        }
        Command::SetCommissionSettings { settings } => {
            finance::set_commission_settings(&mut new_state, settings)
        }
        Command::SetStoreStatus { store_id, status } => {
            suppliers::set_store_status(&mut new_state, &store_id, status)?
        }
        Command::SaveBadgeDefinition { definition } => {
            badges::save_badge_definition(&mut new_state, definition)?
        }
        Command::AssignSellerBadge {
            seller_badge_id,
            seller_id,
            badge_id,
        } => badges::assign_seller_badge(
            &mut new_state,
            seller_badge_id,
            &seller_id,
            &badge_id,
            actor,
            now,
        )?,
        Command::RevokeSellerBadge { seller_badge_id } => {
            badges::revoke_seller_badge(&mut new_state, &seller_badge_id, actor, now)?
        }
        Command::AssignPaidVerification {
            verification_id,
            supplier_id,
            plan,
            business_type,
        } => verifications::assign_paid_verification(
            &mut new_state,
            verification_id,
            &supplier_id,
            plan,
            business_type,
            actor,
            now,
        )?,
        Command::RenewPaidVerification { verification_id } => {
            verifications::renew_paid_verification(&mut new_state, &verification_id)?
        }
        Command::RemovePaidVerification { verification_id } => {
            verifications::remove_paid_verification(&mut new_state, &verification_id)?
        }
        Command::AddCoupon {
            coupon_id,
            code,
            coupon_type,
            value,
            status,
            usage_limit,
            expires_at,
        } => marketing::add_coupon(
            &mut new_state,
            coupon_id,
            code,
            coupon_type,
            value,
            status,
            usage_limit,
            expires_at,
            now,
        )?,
        Command::UpdateCoupon { coupon } => marketing::update_coupon(&mut new_state, coupon)?,
        Command::SendMessage {
            message_id,
            conversation_id,
            content,
        } => comms::send_message(
            &mut new_state,
            message_id,
            &conversation_id,
            content,
            actor,
            now,
        )?,
        Command::SaveRole { role } => users::save_role(&mut new_state, role)?,
        Command::SetPermission {
            role_id,
            module,
            action,
            granted,
        } => users::set_permission(&mut new_state, &role_id, module, action, granted)?,
        Command::SetNotificationStatus {
            notification_id,
            status,
        } => comms::set_notification_status(&mut new_state, &notification_id, status)?,
        Command::AddIpRule {
            rule_id,
            ip,
            rule_type,
            notes,
        } => security::add_ip_rule(&mut new_state, rule_id, ip, rule_type, notes, actor, now)?,
        Command::RemoveIpRule { rule_id } => {
            security::remove_ip_rule(&mut new_state, &rule_id, actor, now)?
        }
        Command::RecordAuditEntry {
            action,
            details,
            is_critical,
            entity_kind,
            entity_id,
        } => Outcome::audit(AuditEntry::new(
            audit_id(now),
            now,
            actor.clone(),
            Action::new(action, Some(details)),
            is_critical,
            entity_kind,
            entity_id,
        )),
    };

    // Log entries land at the front so the newest entry is always first.
    if let Some(entry) = &outcome.audit_entry {
        new_state.audit_trail.insert(0, entry.clone());
    }
    if let Some(event) = &outcome.security_event {
        new_state.security_events.insert(0, event.clone());
    }

    Ok(TransitionResult {
        new_state,
        audit_entry: outcome.audit_entry,
        security_event: outcome.security_event,
    })
}
