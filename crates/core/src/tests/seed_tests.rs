// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainState;
use crate::seed::demo_state;
use crate::tests::helpers::{anchor_date, demo};
use marketdesk_domain::{PaidVerification, SellerBadge, StoreStatus, Supplier, TransactionKind};
use time::macros::date;

#[test]
fn test_collection_counts() {
    let state: DomainState = demo();

    assert_eq!(state.suppliers.len(), 5);
    assert_eq!(state.stores.len(), 5);
    assert_eq!(state.products.len(), 5);
    assert_eq!(state.orders.len(), 5);
    assert_eq!(state.transactions.len(), 6);
    assert_eq!(state.disputes.len(), 3);
    assert_eq!(state.marketplace_users.len(), 8);
    assert_eq!(state.internal_users.len(), 3);
    assert_eq!(state.roles.len(), 4);
    assert_eq!(state.plans.len(), 3);
    assert_eq!(state.badge_definitions.len(), 3);
    assert_eq!(state.seller_badges.len(), 7);
    assert_eq!(state.paid_verifications.len(), 2);
    assert_eq!(state.verification_logs.len(), 2);
    assert_eq!(state.coupons.len(), 3);
    assert_eq!(state.notifications.len(), 4);
    assert_eq!(state.conversations.len(), 3);
    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.tickets.len(), 1);
    assert_eq!(state.ip_rules.len(), 2);
    assert_eq!(state.login_attempts.len(), 3);
    assert_eq!(state.active_sessions.len(), 2);
    assert_eq!(state.fraud_reports.len(), 2);
    assert_eq!(state.audit_trail.len(), 5);
    assert_eq!(state.security_events.len(), 2);
    assert_eq!(state.monthly_data.len(), 7);
    assert_eq!(state.alerts.len(), 3);
}

#[test]
fn test_embedded_copies_match_global_lists() {
    let state: DomainState = demo();

    for supplier in &state.suppliers {
        let badges: Vec<SellerBadge> = state
            .seller_badges
            .iter()
            .filter(|badge| badge.seller_id == supplier.id)
            .cloned()
            .collect();
        assert_eq!(supplier.badges, badges, "badges of {}", supplier.id);

        let verifications: Vec<PaidVerification> = state
            .paid_verifications
            .iter()
            .filter(|verification| verification.supplier_id == supplier.id)
            .cloned()
            .collect();
        assert_eq!(
            supplier.paid_verifications, verifications,
            "verifications of {}",
            supplier.id
        );
    }
}

#[test]
fn test_role_user_counts_match_holders() {
    let state: DomainState = demo();

    for role in &state.roles {
        let holders: u32 = u32::try_from(
            state
                .internal_users
                .iter()
                .filter(|user| user.role_ids.contains(&role.id))
                .count(),
        )
        .unwrap();
        assert_eq!(role.user_count, holders, "holders of {}", role.id);
    }
    let support = state
        .roles
        .iter()
        .find(|role| role.id == "role-support")
        .unwrap();
    assert_eq!(support.user_count, 0);
    assert_eq!(support.hierarchy_level, 4);
}

#[test]
fn test_every_transaction_kind_is_present() {
    let state: DomainState = demo();

    for kind in [
        TransactionKind::Sale,
        TransactionKind::Refund,
        TransactionKind::SeloPaid,
    ] {
        assert!(
            state
                .transactions
                .iter()
                .any(|transaction| transaction.kind == kind),
            "missing {kind:?}"
        );
    }
}

#[test]
fn test_store_fields_derive_from_owners() {
    let state: DomainState = demo();
    let store = |id: &str| state.stores.iter().find(|store| store.id == id).unwrap();

    // Sale revenue accumulates per supplier; refunds do not count.
    assert_eq!(store("store1").total_sales, 2_415_000);
    assert_eq!(store("store3").total_sales, 28_000);
    assert_eq!(store("store5").total_sales, 0);

    assert_eq!(store("store1").status, StoreStatus::Active);
    assert_eq!(store("store2").status, StoreStatus::Pending);
    assert_eq!(store("store4").status, StoreStatus::Inactive);

    // The category follows the owner's first product, or General without one.
    assert_eq!(store("store1").category, "Electronics");
    assert_eq!(store("store2").category, "General");

    let owner: &Supplier = state.supplier("sup3").unwrap();
    assert_eq!(store("store3").supplier_name, owner.name);
    assert!((store("store3").average_rating - owner.average_rating).abs() < f64::EPSILON);
}

#[test]
fn test_conversation_snapshot_is_the_newest_message() {
    let state: DomainState = demo();

    for conversation in &state.conversations {
        let newest = state
            .messages
            .iter()
            .filter(|message| message.conversation_id == conversation.id)
            .next_back();
        assert_eq!(
            conversation.last_message.as_ref(),
            newest,
            "snapshot of {}",
            conversation.id
        );
    }
    let conv1 = state
        .conversations
        .iter()
        .find(|conversation| conversation.id == "conv1")
        .unwrap();
    assert_eq!(conv1.last_message.as_ref().unwrap().id, "msg1.1");
}

#[test]
fn test_audit_trail_is_newest_first() {
    let state: DomainState = demo();

    for pair in state.audit_trail.windows(2) {
        assert!(pair[0].timestamp > pair[1].timestamp);
    }
    for pair in state.security_events.windows(2) {
        assert!(pair[0].timestamp > pair[1].timestamp);
    }
}

#[test]
fn test_same_anchor_gives_identical_states() {
    assert_eq!(demo_state(anchor_date()), demo_state(anchor_date()));
}

#[test]
fn test_state_round_trips_through_json() {
    let state: DomainState = demo();

    let encoded: String = serde_json::to_string(&state).unwrap();
    let decoded: DomainState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn test_verification_pair_covers_both_lifecycles() {
    let state: DomainState = demo();
    let find = |id: &str| {
        state
            .paid_verifications
            .iter()
            .find(|verification| verification.id == id)
            .unwrap()
    };

    let active: &PaidVerification = find("pv1");
    assert!(active.active);
    assert!(!active.is_lapsed(anchor_date()));
    assert_eq!(active.expires_at, date!(2025 - 01 - 01));

    let lapsed: &PaidVerification = find("pv2");
    assert!(!lapsed.active);
    assert!(lapsed.is_lapsed(anchor_date()));
}

#[test]
fn test_empty_state_has_no_records() {
    let state: DomainState = DomainState::new();

    assert!(state.suppliers.is_empty());
    assert!(state.audit_trail.is_empty());
    assert!((state.commission_settings.global - 0.0).abs() < f64::EPSILON);
}
