// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{anchor_time, create_test_actor, demo};
use crate::{Command, CoreError, DomainState, TransitionResult, apply};
use marketdesk_audit::Actor;
use marketdesk_domain::{
    Coupon, CouponStatus, CouponType, DisputeStatus, IpRuleType, MarketplaceUserStatus,
    MarketplaceUserType, OrderStatus, PaidVerification, PermissionAction, ProductStatus, Role,
    SellerBadge, Supplier, SupplierStatus, SystemModule, VerificationPlan,
};
use time::macros::date;

fn run(state: &DomainState, command: Command) -> TransitionResult {
    apply(state, command, &create_test_actor(), anchor_time()).expect("transition should succeed")
}

#[test]
fn test_supplier_status_history_tracks_current() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::SetSupplierStatus {
            supplier_id: String::from("sup2"),
            status: SupplierStatus::Approved,
        },
    );

    let supplier: &Supplier = result.new_state.supplier("sup2").unwrap();
    assert_eq!(supplier.status, SupplierStatus::Approved);
    let last = supplier.status_history.last().unwrap();
    assert_eq!(last.status, SupplierStatus::Approved);
    assert_eq!(last.changed_by, "Alice Johnson");

    let mirror = result.new_state.marketplace_user("sup2").unwrap();
    assert_eq!(mirror.status, MarketplaceUserStatus::Active);

    let entry = result.audit_entry.as_ref().unwrap();
    assert!(entry.is_critical);
    assert_eq!(result.new_state.audit_trail.first(), Some(entry));
}

#[test]
fn test_suspending_user_blocks_supplier_in_one_transition() {
    let state: DomainState = demo();
    let history_before: usize = state.supplier("sup1").unwrap().status_history.len();

    let result: TransitionResult = run(
        &state,
        Command::SetMarketplaceUserStatus {
            user_id: String::from("sup1"),
            status: MarketplaceUserStatus::Suspended,
        },
    );

    let user = result.new_state.marketplace_user("sup1").unwrap();
    assert_eq!(user.user_type, MarketplaceUserType::Supplier);
    assert_eq!(user.status, MarketplaceUserStatus::Suspended);

    let supplier: &Supplier = result.new_state.supplier("sup1").unwrap();
    assert_eq!(supplier.status, SupplierStatus::Blocked);
    assert_eq!(supplier.status_history.len(), history_before + 1);
    assert!(result.audit_entry.is_some());
}

#[test]
fn test_badge_assign_then_revoke_restores_lists() {
    let state: DomainState = demo();
    let global_before: Vec<SellerBadge> = state.seller_badges.clone();
    let embedded_before: Vec<SellerBadge> = state.supplier("sup2").unwrap().badges.clone();

    let assigned: TransitionResult = run(
        &state,
        Command::AssignSellerBadge {
            seller_badge_id: String::from("sb-test"),
            seller_id: String::from("sup2"),
            badge_id: String::from("badge-gold"),
        },
    );
    assert_eq!(assigned.new_state.seller_badges.len(), global_before.len() + 1);
    assert_eq!(
        assigned.new_state.supplier("sup2").unwrap().badges.len(),
        embedded_before.len() + 1
    );

    let revoked: TransitionResult = run(
        &assigned.new_state,
        Command::RevokeSellerBadge {
            seller_badge_id: String::from("sb-test"),
        },
    );
    assert_eq!(revoked.new_state.seller_badges, global_before);
    assert_eq!(
        revoked.new_state.supplier("sup2").unwrap().badges,
        embedded_before
    );
    assert!(revoked.audit_entry.unwrap().is_critical);
}

#[test]
fn test_badge_expiration_follows_validity_window() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::AssignSellerBadge {
            seller_badge_id: String::from("sb-test"),
            seller_id: String::from("sup2"),
            badge_id: String::from("badge-premium-angola"),
        },
    );

    let badge: &SellerBadge = result.new_state.seller_badges.last().unwrap();
    assert_eq!(badge.start_date, date!(2024 - 07 - 15));
    assert_eq!(badge.expiration_date, Some(date!(2025 - 07 - 15)));
}

#[test]
fn test_perpetual_badge_has_no_expiration() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::AssignSellerBadge {
            seller_badge_id: String::from("sb-test"),
            seller_id: String::from("sup2"),
            badge_id: String::from("badge-verified"),
        },
    );

    let badge: &SellerBadge = result.new_state.seller_badges.last().unwrap();
    assert_eq!(badge.expiration_date, None);
}

#[test]
fn test_double_renewal_accumulates_two_years() {
    let state: DomainState = demo();
    let renew = Command::RenewPaidVerification {
        verification_id: String::from("pv1"),
    };

    let once: TransitionResult = run(&state, renew.clone());
    let twice: TransitionResult = run(&once.new_state, renew);

    let verification: &PaidVerification = twice
        .new_state
        .paid_verifications
        .iter()
        .find(|verification| verification.id == "pv1")
        .unwrap();
    assert_eq!(verification.expires_at, date!(2027 - 01 - 01));

    let embedded: &PaidVerification = twice
        .new_state
        .supplier("sup1")
        .unwrap()
        .paid_verifications
        .iter()
        .find(|embedded| embedded.id == "pv1")
        .unwrap();
    assert_eq!(embedded, verification);
}

#[test]
fn test_renewal_reactivates_expired_verification() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::RenewPaidVerification {
            verification_id: String::from("pv2"),
        },
    );

    let verification: &PaidVerification = result
        .new_state
        .paid_verifications
        .iter()
        .find(|verification| verification.id == "pv2")
        .unwrap();
    assert_eq!(verification.expires_at, date!(2025 - 03 - 10));
    assert!(verification.active);
}

#[test]
fn test_assign_and_remove_verification_keep_pair_in_step() {
    let state: DomainState = demo();

    let assigned: TransitionResult = run(
        &state,
        Command::AssignPaidVerification {
            verification_id: String::from("pv-test"),
            supplier_id: String::from("sup3"),
            plan: VerificationPlan::BasicPaid,
            business_type: String::from("C2C"),
        },
    );
    let created: &PaidVerification = assigned
        .new_state
        .paid_verifications
        .iter()
        .find(|verification| verification.id == "pv-test")
        .unwrap();
    assert!(created.active);
    assert_eq!(created.expires_at, date!(2025 - 07 - 15));
    assert_eq!(created.price, 15_000);
    assert!(
        assigned
            .new_state
            .supplier("sup3")
            .unwrap()
            .paid_verifications
            .iter()
            .any(|embedded| embedded.id == "pv-test")
    );

    let removed: TransitionResult = run(
        &assigned.new_state,
        Command::RemovePaidVerification {
            verification_id: String::from("pv-test"),
        },
    );
    assert_eq!(removed.new_state.paid_verifications, state.paid_verifications);
    assert_eq!(
        removed.new_state.supplier("sup3").unwrap().paid_verifications,
        state.supplier("sup3").unwrap().paid_verifications
    );
}

#[test]
fn test_unknown_ids_leave_state_untouched() {
    let state: DomainState = demo();
    let actor: Actor = create_test_actor();

    let missing_supplier = apply(
        &state,
        Command::SetSupplierStatus {
            supplier_id: String::from("sup99"),
            status: SupplierStatus::Approved,
        },
        &actor,
        anchor_time(),
    );
    assert_eq!(
        missing_supplier.unwrap_err(),
        CoreError::SupplierNotFound(String::from("sup99"))
    );

    let missing_badge = apply(
        &state,
        Command::RevokeSellerBadge {
            seller_badge_id: String::from("sb99"),
        },
        &actor,
        anchor_time(),
    );
    assert_eq!(
        missing_badge.unwrap_err(),
        CoreError::SellerBadgeNotFound(String::from("sb99"))
    );

    let missing_order = apply(
        &state,
        Command::SetOrderStatus {
            order_id: String::from("ord99"),
            status: OrderStatus::Shipped,
        },
        &actor,
        anchor_time(),
    );
    assert_eq!(
        missing_order.unwrap_err(),
        CoreError::OrderNotFound(String::from("ord99"))
    );

    assert_eq!(state, demo());
}

#[test]
fn test_order_setters_do_not_gate_transitions() {
    let state: DomainState = demo();
    assert!(
        OrderStatus::Delivered
            .validate_transition(OrderStatus::Pending)
            .is_err()
    );

    // ord1 is delivered; the store-level setter still accepts the reset.
    let result: TransitionResult = run(
        &state,
        Command::SetOrderStatus {
            order_id: String::from("ord1"),
            status: OrderStatus::Pending,
        },
    );
    assert_eq!(
        result.new_state.order("ord1").unwrap().status,
        OrderStatus::Pending
    );
}

#[test]
fn test_dispute_resolution_stamp_survives_reopening() {
    let state: DomainState = demo();

    let resolved: TransitionResult = run(
        &state,
        Command::SetDisputeStatus {
            dispute_id: String::from("disp1"),
            status: DisputeStatus::Resolved,
        },
    );
    let stamped = resolved
        .new_state
        .disputes
        .iter()
        .find(|dispute| dispute.id == "disp1")
        .unwrap();
    assert_eq!(stamped.resolved_at, Some(date!(2024 - 07 - 15)));

    let reopened: TransitionResult = run(
        &resolved.new_state,
        Command::SetDisputeStatus {
            dispute_id: String::from("disp1"),
            status: DisputeStatus::Open,
        },
    );
    let kept = reopened
        .new_state
        .disputes
        .iter()
        .find(|dispute| dispute.id == "disp1")
        .unwrap();
    assert_eq!(kept.status, DisputeStatus::Open);
    assert_eq!(kept.resolved_at, Some(date!(2024 - 07 - 15)));
}

#[test]
fn test_save_plan_replaces_but_never_creates() {
    let state: DomainState = demo();
    let mut plan = state.plans[0].clone();
    plan.monthly_volume_limit = 750_000;

    let result: TransitionResult = run(&state, Command::SavePlan { plan });
    assert_eq!(result.new_state.plans.len(), 3);
    assert_eq!(result.new_state.plans[0].monthly_volume_limit, 750_000);

    let mut unknown = state.plans[0].clone();
    unknown.id = String::from("plan-bronze");
    let rejected = apply(
        &state,
        Command::SavePlan { plan: unknown },
        &create_test_actor(),
        anchor_time(),
    );
    assert_eq!(
        rejected.unwrap_err(),
        CoreError::PlanNotFound(String::from("plan-bronze"))
    );
}

#[test]
fn test_coupon_codes_must_be_unique() {
    let state: DomainState = demo();

    let duplicate = apply(
        &state,
        Command::AddCoupon {
            coupon_id: String::from("coup-test"),
            code: String::from("BEMVINDO10"),
            coupon_type: CouponType::Percentage,
            value: 5,
            status: CouponStatus::Active,
            usage_limit: None,
            expires_at: None,
        },
        &create_test_actor(),
        anchor_time(),
    );
    assert!(matches!(
        duplicate.unwrap_err(),
        CoreError::DomainViolation(_)
    ));

    let result: TransitionResult = run(
        &state,
        Command::AddCoupon {
            coupon_id: String::from("coup-test"),
            code: String::from("NATAL25"),
            coupon_type: CouponType::Percentage,
            value: 25,
            status: CouponStatus::Active,
            usage_limit: Some(500),
            expires_at: Some(date!(2024 - 12 - 26)),
        },
    );
    let newest: &Coupon = result.new_state.coupons.first().unwrap();
    assert_eq!(newest.code, "NATAL25");
    assert_eq!(newest.usage_count, 0);
    assert_eq!(newest.created_at, anchor_time());
    assert_eq!(result.new_state.coupons.len(), 4);
}

#[test]
fn test_send_message_updates_conversation_snapshot() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::SendMessage {
            message_id: String::from("msg-test"),
            conversation_id: String::from("conv1"),
            content: String::from("O pedido já foi reenviado."),
        },
    );

    assert_eq!(result.new_state.messages.len(), state.messages.len() + 1);
    let conversation = result
        .new_state
        .conversations
        .iter()
        .find(|conversation| conversation.id == "conv1")
        .unwrap();
    let snapshot = conversation.last_message.as_ref().unwrap();
    assert_eq!(snapshot.id, "msg-test");
    assert_eq!(snapshot.sender_id, "int-usr1");
    assert_eq!(conversation.unread_count, 0);
}

#[test]
fn test_permission_grant_and_revoke_round_trip() {
    let state: DomainState = demo();

    let granted: TransitionResult = run(
        &state,
        Command::SetPermission {
            role_id: String::from("role-support"),
            module: SystemModule::Products,
            action: PermissionAction::View,
            granted: true,
        },
    );
    let role: &Role = granted
        .new_state
        .roles
        .iter()
        .find(|role| role.id == "role-support")
        .unwrap();
    assert!(role.has_permission(SystemModule::Products, PermissionAction::View));

    let revoked: TransitionResult = run(
        &granted.new_state,
        Command::SetPermission {
            role_id: String::from("role-support"),
            module: SystemModule::Products,
            action: PermissionAction::View,
            granted: false,
        },
    );
    let role: &Role = revoked
        .new_state
        .roles
        .iter()
        .find(|role| role.id == "role-support")
        .unwrap();
    assert!(!role.has_permission(SystemModule::Products, PermissionAction::View));
}

#[test]
fn test_store_accepts_top_role_matrix_edits() {
    // Locking the hierarchy-level-1 matrix is the capability layer's
    // concern; the store itself applies the edit.
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::SetPermission {
            role_id: String::from("role-super-admin"),
            module: SystemModule::Security,
            action: PermissionAction::Export,
            granted: true,
        },
    );
    let role: &Role = result
        .new_state
        .roles
        .iter()
        .find(|role| role.id == "role-super-admin")
        .unwrap();
    assert!(role.has_permission(SystemModule::Security, PermissionAction::Export));
}

#[test]
fn test_ip_rules_write_the_security_log() {
    let state: DomainState = demo();

    let added: TransitionResult = run(
        &state,
        Command::AddIpRule {
            rule_id: String::from("ipr-test"),
            ip: String::from("198.51.100.99"),
            rule_type: IpRuleType::Deny,
            notes: None,
        },
    );
    assert_eq!(added.new_state.ip_rules.first().unwrap().id, "ipr-test");
    assert!(added.audit_entry.is_none());
    let event = added.security_event.as_ref().unwrap();
    assert_eq!(event.action, "IP Rule Added");
    assert_eq!(event.details, "Denied IP 198.51.100.99");
    assert_eq!(added.new_state.security_events.first(), Some(event));
    assert_eq!(added.new_state.audit_trail.len(), state.audit_trail.len());

    let removed: TransitionResult = run(
        &added.new_state,
        Command::RemoveIpRule {
            rule_id: String::from("ipr-test"),
        },
    );
    assert_eq!(removed.new_state.ip_rules, state.ip_rules);
    assert_eq!(
        removed.security_event.unwrap().action,
        "IP Rule Removed"
    );
}

#[test]
fn test_malformed_ip_fails_the_transition() {
    let state: DomainState = demo();

    let result = apply(
        &state,
        Command::AddIpRule {
            rule_id: String::from("ipr-test"),
            ip: String::from("not-an-ip"),
            rule_type: IpRuleType::Allow,
            notes: None,
        },
        &create_test_actor(),
        anchor_time(),
    );
    assert!(matches!(result.unwrap_err(), CoreError::DomainViolation(_)));
}

#[test]
fn test_record_audit_entry_lands_at_the_front() {
    let state: DomainState = demo();

    let result: TransitionResult = run(
        &state,
        Command::RecordAuditEntry {
            action: String::from("DataExported"),
            details: String::from("Audit trail exported to CSV."),
            is_critical: false,
            entity_kind: None,
            entity_id: None,
        },
    );

    let front = result.new_state.audit_trail.first().unwrap();
    assert_eq!(front.action.name, "DataExported");
    assert!(front.id.starts_with("log"));
    assert_eq!(result.audit_entry.as_ref(), Some(front));
    assert_eq!(
        result.new_state.audit_trail.len(),
        state.audit_trail.len() + 1
    );
}

#[test]
fn test_product_reason_only_replaced_when_given() {
    let state: DomainState = demo();
    let original_reason: Option<String> = state
        .products
        .iter()
        .find(|product| product.id == "prod5")
        .unwrap()
        .rejection_reason
        .clone();

    let approved: TransitionResult = run(
        &state,
        Command::SetProductStatus {
            product_id: String::from("prod5"),
            status: ProductStatus::Approved,
            reason: None,
        },
    );
    let product = approved
        .new_state
        .products
        .iter()
        .find(|product| product.id == "prod5")
        .unwrap();
    assert_eq!(product.status, ProductStatus::Approved);
    assert_eq!(product.rejection_reason, original_reason);

    let returned: TransitionResult = run(
        &approved.new_state,
        Command::SetProductStatus {
            product_id: String::from("prod5"),
            status: ProductStatus::ChangesRequested,
            reason: Some(String::from("Falta a descrição nutricional.")),
        },
    );
    let product = returned
        .new_state
        .products
        .iter()
        .find(|product| product.id == "prod5")
        .unwrap();
    assert_eq!(
        product.rejection_reason,
        Some(String::from("Falta a descrição nutricional."))
    );
}

#[test]
fn test_input_state_is_never_modified() {
    let state: DomainState = demo();
    let before: DomainState = state.clone();

    let _ = run(
        &state,
        Command::SetSupplierStatus {
            supplier_id: String::from("sup2"),
            status: SupplierStatus::Approved,
        },
    );

    assert_eq!(state, before);
}
