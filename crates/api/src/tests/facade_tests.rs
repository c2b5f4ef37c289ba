// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::demo_backoffice;
use crate::{ApiError, Backoffice, PasswordPolicy};
use marketdesk_audit::{Actor, AuditEntityKind};
use marketdesk_domain::{
    CommissionSettings, Coupon, DisputeStatus, DocumentStatus, InternalUserRole,
    InternalUserStatus, LogisticStatus, MarketplaceUserStatus, NotificationStatus,
    OrderItemStatus, OrderStatus, PaymentStatus, PermissionAction, Permissions, Plan,
    ProductStatus, Role, SellerSalesStatus, StoreStatus, SupplierStatus, SystemModule,
    TransactionStatus, VerificationPlan,
};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::macros::date;

#[test]
fn test_new_backoffice_starts_empty() {
    let backoffice = Backoffice::new();

    assert!(backoffice.suppliers().is_empty());
    assert!(backoffice.orders().is_empty());
    assert!(backoffice.audit_trail().is_empty());
    assert_eq!(backoffice.operator().id, "int-usr1");
}

#[test]
fn test_demo_dataset_counts() {
    let backoffice = demo_backoffice();

    assert_eq!(backoffice.suppliers().len(), 5);
    assert_eq!(backoffice.stores().len(), 5);
    assert_eq!(backoffice.products().len(), 5);
    assert_eq!(backoffice.orders().len(), 5);
    assert_eq!(backoffice.marketplace_users().len(), 8);
    assert_eq!(backoffice.internal_users().len(), 3);
    assert_eq!(backoffice.roles().len(), 4);
    assert_eq!(backoffice.coupons().len(), 3);
    assert_eq!(backoffice.ip_rules().len(), 2);
    assert_eq!(backoffice.audit_trail().len(), 5);
}

#[test]
fn test_approving_supplier_syncs_mirror_and_logs() {
    let mut backoffice = demo_backoffice();

    backoffice.update_supplier_status("sup2", "Approved").unwrap();

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert_eq!(supplier.status, SupplierStatus::Approved);

    let mirror = backoffice
        .marketplace_users()
        .iter()
        .find(|user| user.id == "sup2")
        .unwrap();
    assert_eq!(mirror.status, MarketplaceUserStatus::Active);

    let entry = &backoffice.audit_trail()[0];
    assert_eq!(entry.action.name, "SupplierStatusChanged");
    assert!(entry.is_critical);
    assert_eq!(entry.actor.id, "int-usr1");
    assert_eq!(backoffice.audit_trail().len(), 6);
}

#[test]
fn test_unknown_supplier_status_is_invalid_input() {
    let mut backoffice = demo_backoffice();

    let err = backoffice.update_supplier_status("sup2", "Banished").unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "supplier status"
    ));

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert_eq!(supplier.status, SupplierStatus::Pending);
}

#[test]
fn test_missing_supplier_is_not_found() {
    let mut backoffice = demo_backoffice();
    let trail_before = backoffice.audit_trail().len();

    let err = backoffice.update_supplier_status("sup99", "Approved").unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Supplier"
    ));
    assert_eq!(backoffice.audit_trail().len(), trail_before);
}

#[test]
fn test_document_review_updates_status() {
    let mut backoffice = demo_backoffice();

    backoffice.update_document_status("sup1", "doc1", "Rejected").unwrap();

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup1")
        .unwrap();
    let document = supplier
        .documents
        .iter()
        .find(|document| document.id == "doc1")
        .unwrap();
    assert_eq!(document.status, DocumentStatus::Rejected);
}

#[test]
fn test_supplier_plan_and_sales_controls() {
    let mut backoffice = demo_backoffice();

    backoffice.update_supplier_plan("sup2", "plan-gold").unwrap();
    backoffice.update_supplier_sales_status("sup1", "Blocked").unwrap();
    backoffice.approve_manual_expansion("sup1", 250_000).unwrap();

    let sup2 = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert_eq!(sup2.plan_id, "plan-gold");

    let sup1 = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup1")
        .unwrap();
    assert_eq!(sup1.sales_status, SellerSalesStatus::Blocked);
    assert_eq!(sup1.manual_expansion_amount, Some(250_000));
}

#[test]
fn test_save_plan_replaces_definition() {
    let mut backoffice = demo_backoffice();

    let mut plan: Plan = backoffice
        .plans()
        .iter()
        .find(|plan| plan.id == "plan-gold")
        .unwrap()
        .clone();
    plan.transaction_limit = 9_000_000;
    backoffice.save_plan(plan).unwrap();

    let saved = backoffice
        .plans()
        .iter()
        .find(|plan| plan.id == "plan-gold")
        .unwrap();
    assert_eq!(saved.transaction_limit, 9_000_000);
}

#[test]
fn test_save_plan_rejects_unknown_id() {
    let mut backoffice = demo_backoffice();

    let mut plan: Plan = backoffice.plans()[0].clone();
    plan.id = String::from("plan-diamond");

    let err = backoffice.save_plan(plan).unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Plan"
    ));
}

#[test]
fn test_order_lifecycle_updates() {
    let mut backoffice = demo_backoffice();

    backoffice.update_order_status("ord1", "Processing").unwrap();
    backoffice.update_payment_status("ord1", "Blocked").unwrap();
    backoffice.update_logistic_status("ord1", "In Transit").unwrap();
    backoffice.update_order_item_status("ord1", "oi1", "Returned").unwrap();

    let order = backoffice
        .orders()
        .iter()
        .find(|order| order.id == "ord1")
        .unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.payment_status, PaymentStatus::Blocked);
    assert_eq!(order.logistic_status, LogisticStatus::InTransit);

    let item = order.items.iter().find(|item| item.id == "oi1").unwrap();
    assert_eq!(item.status, OrderItemStatus::Returned);
}

#[test]
fn test_transaction_status_setter_is_unconstrained() {
    let mut backoffice = demo_backoffice();

    backoffice.update_transaction_status("txn1", "Refunded").unwrap();
    let transaction = backoffice
        .transactions()
        .iter()
        .find(|transaction| transaction.id == "txn1")
        .unwrap();
    assert_eq!(transaction.status, TransactionStatus::Refunded);

    // The setter accepts any status; the settlement workflow helper is
    // the strict view.
    backoffice.update_transaction_status("txn1", "Paid").unwrap();
    let transaction = backoffice
        .transactions()
        .iter()
        .find(|transaction| transaction.id == "txn1")
        .unwrap();
    assert_eq!(transaction.status, TransactionStatus::Paid);
    assert!(
        TransactionStatus::Refunded
            .validate_transition(TransactionStatus::Paid)
            .is_err()
    );
}

#[test]
fn test_dispute_resolution_stamps_date() {
    let mut backoffice = demo_backoffice();

    backoffice.update_dispute_status("disp1", "Resolved").unwrap();

    let dispute = backoffice
        .disputes()
        .iter()
        .find(|dispute| dispute.id == "disp1")
        .unwrap();
    assert_eq!(dispute.status, DisputeStatus::Resolved);
    assert!(dispute.resolved_at.is_some());
}

#[test]
fn test_commission_settings_replaced_wholesale() {
    let mut backoffice = demo_backoffice();

    let mut categories: BTreeMap<String, Option<f64>> = BTreeMap::new();
    categories.insert(String::from("Electronics"), Some(8.0));
    categories.insert(String::from("Groceries"), None);
    backoffice
        .update_commission_settings(CommissionSettings {
            global: 12.5,
            categories,
        })
        .unwrap();

    let settings = backoffice.commission_settings();
    assert!((settings.global - 12.5).abs() < f64::EPSILON);
    assert_eq!(settings.categories.get("Electronics"), Some(&Some(8.0)));
    assert_eq!(settings.categories.get("Groceries"), Some(&None));
}

#[test]
fn test_product_rejection_reason_retained() {
    let mut backoffice = demo_backoffice();

    backoffice
        .update_product_status(
            "prod1",
            "ChangesRequested",
            Some(String::from("Replace the stock photos")),
        )
        .unwrap();
    backoffice.update_product_status("prod1", "Approved", None).unwrap();

    let product = backoffice
        .products()
        .iter()
        .find(|product| product.id == "prod1")
        .unwrap();
    assert_eq!(product.status, ProductStatus::Approved);
    assert_eq!(
        product.rejection_reason.as_deref(),
        Some("Replace the stock photos")
    );
}

#[test]
fn test_marketplace_user_suspension_blocks_supplier() {
    let mut backoffice = demo_backoffice();

    backoffice.update_marketplace_user_status("sup1", "Suspended").unwrap();

    let user = backoffice
        .marketplace_users()
        .iter()
        .find(|user| user.id == "sup1")
        .unwrap();
    assert_eq!(user.status, MarketplaceUserStatus::Suspended);

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup1")
        .unwrap();
    assert_eq!(supplier.status, SupplierStatus::Blocked);
}

#[test]
fn test_internal_user_updates() {
    let mut backoffice = demo_backoffice();

    backoffice.update_internal_user_status("int-usr3", "Active").unwrap();
    backoffice.update_internal_user_role("int-usr3", "Admin").unwrap();

    let user = backoffice
        .internal_users()
        .iter()
        .find(|user| user.id == "int-usr3")
        .unwrap();
    assert_eq!(user.status, InternalUserStatus::Active);
    assert_eq!(user.role, InternalUserRole::Admin);
}

#[test]
fn test_store_status_update() {
    let mut backoffice = demo_backoffice();

    backoffice.update_store_status("store1", "Inactive").unwrap();

    let store = backoffice
        .stores()
        .iter()
        .find(|store| store.id == "store1")
        .unwrap();
    assert_eq!(store.status, StoreStatus::Inactive);
}

#[test]
fn test_badge_assignment_round_trip() {
    let mut backoffice = demo_backoffice();
    let global_before = backoffice.seller_badges().len();

    let assignment_id = backoffice.assign_seller_badge("sup2", "badge-gold").unwrap();
    assert!(assignment_id.starts_with("sb-"));
    assert_eq!(backoffice.seller_badges().len(), global_before + 1);

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert!(supplier.badges.iter().any(|badge| badge.id == assignment_id));

    let granted = &backoffice.audit_trail()[0];
    assert_eq!(granted.action.name, "BadgeAssigned");
    assert!(!granted.is_critical);

    backoffice.revoke_seller_badge(&assignment_id).unwrap();
    assert_eq!(backoffice.seller_badges().len(), global_before);
    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert!(!supplier.badges.iter().any(|badge| badge.id == assignment_id));

    let revoked = &backoffice.audit_trail()[0];
    assert_eq!(revoked.action.name, "BadgeRevoked");
    assert!(revoked.is_critical);
}

#[test]
fn test_badge_assignment_requires_known_definition() {
    let mut backoffice = demo_backoffice();

    let err = backoffice.assign_seller_badge("sup2", "badge-unknown").unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. }
            if resource_type == "Badge definition"
    ));
}

#[test]
fn test_paid_verification_assignment() {
    let mut backoffice = demo_backoffice();

    let verification_id = backoffice
        .assign_paid_verification("sup2", "Básico Pago", "B2C")
        .unwrap();
    assert!(verification_id.starts_with("pv-"));

    let verification = backoffice
        .paid_verifications()
        .iter()
        .find(|verification| verification.id == verification_id)
        .unwrap();
    assert_eq!(verification.supplier_id, "sup2");
    assert_eq!(verification.plan, VerificationPlan::BasicPaid);
    assert_eq!(verification.price, 15_000);
    assert!(verification.active);
    assert!(verification.expires_at > verification.approved_at);

    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup2")
        .unwrap();
    assert!(
        supplier
            .paid_verifications
            .iter()
            .any(|verification| verification.id == verification_id)
    );
}

#[test]
fn test_verification_renewal_is_cumulative() {
    let mut backoffice = demo_backoffice();

    backoffice.renew_paid_verification("pv1").unwrap();
    backoffice.renew_paid_verification("pv1").unwrap();

    let verification = backoffice
        .paid_verifications()
        .iter()
        .find(|verification| verification.id == "pv1")
        .unwrap();
    assert_eq!(verification.expires_at, date!(2027 - 01 - 01));

    let embedded = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup1")
        .unwrap()
        .paid_verifications
        .iter()
        .find(|verification| verification.id == "pv1")
        .unwrap()
        .clone();
    assert_eq!(embedded.expires_at, date!(2027 - 01 - 01));
}

#[test]
fn test_verification_removal_cleans_embedded_copy() {
    let mut backoffice = demo_backoffice();

    backoffice.remove_paid_verification("pv2").unwrap();

    assert!(
        !backoffice
            .paid_verifications()
            .iter()
            .any(|verification| verification.id == "pv2")
    );
    let supplier = backoffice
        .suppliers()
        .iter()
        .find(|supplier| supplier.id == "sup4")
        .unwrap();
    assert!(
        !supplier
            .paid_verifications
            .iter()
            .any(|verification| verification.id == "pv2")
    );
}

#[test]
fn test_add_coupon_lands_at_front() {
    let mut backoffice = demo_backoffice();

    let coupon_id = backoffice
        .add_coupon("NATAL25", "Percentage", 25, "Active", Some(500), None)
        .unwrap();
    assert!(coupon_id.starts_with("coup-"));

    let coupons = backoffice.coupons();
    assert_eq!(coupons.len(), 4);
    assert_eq!(coupons[0].id, coupon_id);
    assert_eq!(coupons[0].code, "NATAL25");
    assert_eq!(coupons[0].usage_count, 0);
    assert_eq!(coupons[0].usage_limit, Some(500));
}

#[test]
fn test_duplicate_coupon_code_rejected() {
    let mut backoffice = demo_backoffice();

    let err = backoffice
        .add_coupon("BEMVINDO10", "Percentage", 10, "Active", None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_coupon_code"
    ));
    assert_eq!(backoffice.coupons().len(), 3);
}

#[test]
fn test_percentage_coupon_value_range_enforced() {
    let mut backoffice = demo_backoffice();

    let err = backoffice
        .add_coupon("OVERSIZED", "Percentage", 150, "Active", None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "value"
    ));
}

#[test]
fn test_update_coupon_replaces_by_id() {
    let mut backoffice = demo_backoffice();

    let mut coupon: Coupon = backoffice
        .coupons()
        .iter()
        .find(|coupon| coupon.id == "coup1")
        .unwrap()
        .clone();
    coupon.value = 15;
    backoffice.update_coupon(coupon).unwrap();

    let updated = backoffice
        .coupons()
        .iter()
        .find(|coupon| coupon.id == "coup1")
        .unwrap();
    assert_eq!(updated.value, 15);
}

#[test]
fn test_send_message_updates_conversation() {
    let mut backoffice = demo_backoffice();

    let message_id = backoffice.send_message("conv1", "Olá, como posso ajudar?").unwrap();
    assert!(message_id.starts_with("msg-"));

    let conversation = backoffice
        .conversations()
        .iter()
        .find(|conversation| conversation.id == "conv1")
        .unwrap();
    assert_eq!(conversation.unread_count, 0);
    let snapshot = conversation.last_message.as_ref().unwrap();
    assert_eq!(snapshot.id, message_id);
    assert_eq!(snapshot.sender_id, "int-usr1");

    let appended = backoffice.messages().last().unwrap();
    assert_eq!(appended.id, message_id);
    assert_eq!(appended.content, "Olá, como posso ajudar?");
}

#[test]
fn test_notification_status_toggle() {
    let mut backoffice = demo_backoffice();

    backoffice.update_notification_status("notif1", "Read").unwrap();

    let notification = backoffice
        .notifications()
        .iter()
        .find(|notification| notification.id == "notif1")
        .unwrap();
    assert_eq!(notification.status, NotificationStatus::Read);
}

#[test]
fn test_save_role_and_permission_edit() {
    let mut backoffice = demo_backoffice();

    backoffice
        .save_role(Role {
            id: String::from("role-auditor"),
            name: String::from("Auditor"),
            description: String::from("Read-only access to reports"),
            permissions: Permissions::new(),
            user_count: 0,
            hierarchy_level: 5,
        })
        .unwrap();
    assert_eq!(backoffice.roles().len(), 5);

    backoffice.update_permission("role-auditor", "Reports", "view", true).unwrap();
    let role = backoffice
        .roles()
        .iter()
        .find(|role| role.id == "role-auditor")
        .unwrap();
    assert!(role.has_permission(SystemModule::Reports, PermissionAction::View));

    backoffice.update_permission("role-auditor", "Reports", "view", false).unwrap();
    let role = backoffice
        .roles()
        .iter()
        .find(|role| role.id == "role-auditor")
        .unwrap();
    assert!(!role.has_permission(SystemModule::Reports, PermissionAction::View));
}

#[test]
fn test_locked_role_edit_applies_but_capabilities_deny_it() {
    let mut backoffice = demo_backoffice();

    let capabilities =
        backoffice.role_matrix_capabilities("int-usr1", "role-super-admin").unwrap();
    assert!(!capabilities.can_edit_permissions.is_allowed());
    assert!(!capabilities.can_delete.is_allowed());

    // The store itself still accepts the edit.
    backoffice.update_permission("role-super-admin", "Permissions", "delete", true).unwrap();
    let role = backoffice
        .roles()
        .iter()
        .find(|role| role.id == "role-super-admin")
        .unwrap();
    assert!(role.has_permission(SystemModule::Permissions, PermissionAction::Delete));
}

#[test]
fn test_role_matrix_capabilities_follow_holder_grants() {
    let backoffice = demo_backoffice();

    let super_admin = backoffice.role_matrix_capabilities("int-usr1", "role-admin").unwrap();
    assert!(super_admin.can_edit_permissions.is_allowed());
    assert!(super_admin.can_delete.is_allowed());

    let admin = backoffice.role_matrix_capabilities("int-usr2", "role-moderator").unwrap();
    assert!(!admin.can_edit_permissions.is_allowed());
    assert!(!admin.can_delete.is_allowed());
}

#[test]
fn test_module_capabilities_for_admin() {
    let backoffice = demo_backoffice();

    let financials = backoffice.module_capabilities("int-usr2", "Financials").unwrap();
    assert!(financials.can_view.is_allowed());
    assert!(financials.can_export.is_allowed());
    assert!(financials.can_financial_actions.is_allowed());
    assert!(!financials.can_delete.is_allowed());

    let moderation = backoffice.module_capabilities("int-usr2", "Moderation").unwrap();
    assert!(!moderation.can_view.is_allowed());
}

#[test]
fn test_module_capabilities_for_suspended_staff() {
    let backoffice = demo_backoffice();

    let capabilities = backoffice.module_capabilities("int-usr3", "Dashboard").unwrap();
    assert!(!capabilities.can_view.is_allowed());
    assert!(!capabilities.can_edit.is_allowed());
    assert!(!capabilities.can_approve.is_allowed());
}

#[test]
fn test_capability_lookups_reject_unknown_inputs() {
    let backoffice = demo_backoffice();

    let missing_user = backoffice.module_capabilities("int-usr9", "Dashboard").unwrap_err();
    assert!(matches!(
        missing_user,
        ApiError::ResourceNotFound { ref resource_type, .. }
            if resource_type == "Internal user"
    ));

    let unknown_module = backoffice.module_capabilities("int-usr1", "Lounge").unwrap_err();
    assert!(matches!(
        unknown_module,
        ApiError::InvalidInput { ref field, .. } if field == "system module"
    ));

    let missing_role = backoffice.role_matrix_capabilities("int-usr1", "role-ghost").unwrap_err();
    assert!(matches!(
        missing_role,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Role"
    ));
}

#[test]
fn test_ip_rule_round_trip_writes_security_log() {
    let mut backoffice = demo_backoffice();
    let events_before = backoffice.security_events().len();
    let rules_before = backoffice.ip_rules().len();

    let rule_id = backoffice
        .add_ip_rule("203.0.113.9", "deny", Some(String::from("Card testing")))
        .unwrap();
    assert!(rule_id.starts_with("ipr"));
    assert_eq!(backoffice.ip_rules().len(), rules_before + 1);
    assert_eq!(backoffice.ip_rules()[0].id, rule_id);
    assert_eq!(backoffice.security_events().len(), events_before + 1);
    assert_eq!(backoffice.security_events()[0].action, "IP Rule Added");

    backoffice.remove_ip_rule(&rule_id).unwrap();
    assert_eq!(backoffice.ip_rules().len(), rules_before);
    assert_eq!(backoffice.security_events().len(), events_before + 2);
    assert_eq!(backoffice.security_events()[0].action, "IP Rule Removed");
}

#[test]
fn test_malformed_ip_rejected() {
    let mut backoffice = demo_backoffice();

    let err = backoffice.add_ip_rule("not-an-ip", "deny", None).unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "ip"
    ));
    assert_eq!(backoffice.ip_rules().len(), 2);
}

#[test]
fn test_audit_entries_carry_the_current_operator() {
    let mut backoffice = demo_backoffice();
    backoffice.set_operator(Actor::new(
        String::from("int-usr2"),
        String::from("Bob Williams"),
    ));

    backoffice
        .record_audit_entry(
            "SettingsChanged",
            "Platform fee schedule updated",
            true,
            Some(AuditEntityKind::Security),
            None,
        )
        .unwrap();

    let entry = &backoffice.audit_trail()[0];
    assert_eq!(entry.actor.id, "int-usr2");
    assert_eq!(entry.actor.name, "Bob Williams");
    assert_eq!(entry.action.name, "SettingsChanged");
    assert!(entry.is_critical);
    assert_eq!(entry.entity_kind, Some(AuditEntityKind::Security));
}

#[test]
fn test_password_validation_uses_account_fields() {
    let backoffice = demo_backoffice();
    let policy = PasswordPolicy::default();

    // "Johnson" is part of the account holder's display name.
    let err = backoffice
        .validate_password("int-usr1", "Johnson2024", "Johnson2024", &policy)
        .unwrap_err();
    assert!(matches!(err, ApiError::PasswordPolicyViolation { .. }));

    backoffice
        .validate_password("int-usr1", "Tr4velling-Kudu", "Tr4velling-Kudu", &policy)
        .unwrap();

    let missing = backoffice
        .validate_password("int-usr9", "Tr4velling-Kudu", "Tr4velling-Kudu", &policy)
        .unwrap_err();
    assert!(matches!(
        missing,
        ApiError::ResourceNotFound { ref resource_type, .. }
            if resource_type == "Internal user"
    ));
}

#[test]
fn test_redeemable_coupons_skip_inactive_and_spent() {
    let backoffice = demo_backoffice();

    let redeemable = backoffice.redeemable_coupons(date!(2030 - 01 - 01));
    let ids: Vec<&str> = redeemable.iter().map(|coupon| coupon.id.as_str()).collect();
    assert_eq!(ids, vec!["coup1"]);
}

#[test]
fn test_dashboard_and_category_aggregates() {
    let backoffice = demo_backoffice();

    let stats = backoffice.dashboard_stats(OffsetDateTime::now_utc().date());
    assert_eq!(stats.total_users, 8);

    let categories = backoffice.product_categories();
    assert!(categories.iter().any(|category| category == "Electronics"));
}

#[test]
fn test_coupon_csv_preview_through_facade() {
    let backoffice = demo_backoffice();
    let csv = "code,type,value\nFRETE5,fixed,500\nbemvindo10,percentage,10\n";

    let preview = backoffice.preview_coupon_csv(csv).unwrap();
    assert_eq!(preview.total_rows, 2);
    assert_eq!(preview.valid_count, 1);
    assert_eq!(preview.invalid_count, 1);
}
