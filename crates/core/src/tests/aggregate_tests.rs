// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{anchor_date, anchor_time, demo};
use crate::{
    DomainState, FinancialSummary, RevenueByBusinessType, RevenuePoint, SecurityStats,
    SupplierCommission, dashboard_stats, financial_summary, product_categories,
    redeemable_coupons, revenue_by_business_type, revenue_vs_profit, security_stats,
    store_categories, top_suppliers_by_commission,
};
use marketdesk_domain::{
    BusinessType, DateRange, PaymentMethod, Transaction, TransactionKind, TransactionStatus,
};
use time::Date;
use time::macros::date;

fn make_transaction(
    id: &str,
    date: Date,
    kind: TransactionKind,
    amount: i64,
    profit: i64,
) -> Transaction {
    Transaction {
        id: String::from(id),
        date,
        supplier_id: String::from("sup1"),
        supplier_name: String::from("Tech Solutions Inc."),
        order_id: String::from("ord1"),
        amount,
        commission: 0,
        status: TransactionStatus::Paid,
        marketplace_profit: profit,
        payment_method: PaymentMethod::Stripe,
        business_type: BusinessType::B2c,
        kind,
    }
}

#[test]
fn test_same_day_sale_and_refund_net_one_bucket() {
    let mut state: DomainState = DomainState::new();
    state.transactions = vec![
        make_transaction(
            "txn1",
            date!(2024 - 07 - 10),
            TransactionKind::Sale,
            1_000,
            200,
        ),
        make_transaction(
            "txn2",
            date!(2024 - 07 - 10),
            TransactionKind::Refund,
            300,
            50,
        ),
    ];
    let range: DateRange = DateRange {
        start: date!(2024 - 07 - 01),
        end: date!(2024 - 07 - 31),
    };

    let series: Vec<RevenuePoint> = revenue_vs_profit(&state, &range);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, date!(2024 - 07 - 10));
    assert_eq!(series[0].revenue, 700);
    assert_eq!(series[0].profit, 150);
}

#[test]
fn test_revenue_series_is_sorted_oldest_first() {
    let mut state: DomainState = DomainState::new();
    state.transactions = vec![
        make_transaction(
            "txn1",
            date!(2024 - 07 - 20),
            TransactionKind::Sale,
            500,
            100,
        ),
        make_transaction(
            "txn2",
            date!(2024 - 07 - 05),
            TransactionKind::Sale,
            800,
            160,
        ),
        // Certification sales never move the series.
        make_transaction(
            "txn3",
            date!(2024 - 07 - 05),
            TransactionKind::SeloPaid,
            50_000,
            50_000,
        ),
    ];
    let range: DateRange = DateRange {
        start: date!(2024 - 07 - 01),
        end: date!(2024 - 07 - 31),
    };

    let series: Vec<RevenuePoint> = revenue_vs_profit(&state, &range);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, date!(2024 - 07 - 05));
    assert_eq!(series[0].revenue, 800);
    assert_eq!(series[1].date, date!(2024 - 07 - 20));
}

#[test]
fn test_financial_summary_scopes_by_range() {
    let state: DomainState = demo();
    let range: DateRange = DateRange::trailing(anchor_date(), 40);

    let summary: FinancialSummary = financial_summary(&state, &range);
    assert_eq!(summary.total_revenue, 1_073_000);
    assert_eq!(summary.total_commission, 108_000);
    assert_eq!(summary.pending_payments, 420_000);
    assert_eq!(summary.blocked_payments, 950_000);
    assert_eq!(summary.total_refunds, 9_500);
    // The certification sale predates the range.
    assert_eq!(summary.paid_badges_revenue, 0);
    assert_eq!(summary.open_disputes, 2);
}

#[test]
fn test_narrow_range_drops_older_transactions() {
    let state: DomainState = demo();
    let range: DateRange = DateRange::trailing(anchor_date(), 30);

    let summary: FinancialSummary = financial_summary(&state, &range);
    assert_eq!(summary.total_revenue, 1_073_000);
    assert_eq!(summary.pending_payments, 0);
    assert_eq!(summary.blocked_payments, 0);
}

#[test]
fn test_revenue_split_covers_all_business_types() {
    let state: DomainState = demo();
    let range: DateRange = DateRange::trailing(anchor_date(), 40);

    let split: RevenueByBusinessType = revenue_by_business_type(&state, &range);
    assert_eq!(split.b2b, 420_000);
    assert_eq!(split.b2c, 1_995_000);
    assert_eq!(split.c2c, 28_000);
}

#[test]
fn test_top_suppliers_ranked_by_commission() {
    let state: DomainState = demo();
    let range: DateRange = DateRange::trailing(anchor_date(), 40);

    let ranking: Vec<SupplierCommission> = top_suppliers_by_commission(&state, &range);
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].supplier_id, "sup1");
    assert_eq!(ranking[0].commission, 146_500);
    assert_eq!(ranking[1].supplier_id, "sup3");
    assert_eq!(ranking[1].commission, 3_500);
}

#[test]
fn test_dashboard_headline_numbers() {
    let state: DomainState = demo();

    let stats = dashboard_stats(&state, anchor_date());
    assert_eq!(stats.total_users, 8);
    assert_eq!(stats.verified_stores, 3);
    assert_eq!(stats.active_products, 2);
    assert_eq!(stats.total_badges, 7);
    assert_eq!(stats.total_revenue, 1_123_000);
    assert_eq!(stats.total_commission, 108_000);
    assert_eq!(stats.unread_notifications, 3);
    assert_eq!(stats.active_buyers, 2);
    assert_eq!(stats.active_suppliers, 3);
    assert_eq!(stats.suspended_users, 2);
    assert_eq!(stats.total_internal_members, 3);
    assert_eq!(stats.total_admins, 1);
    assert_eq!(stats.total_moderators, 1);
    assert_eq!(stats.active_internal_members, 2);
    assert_eq!(stats.total_stores, 5);
    assert_eq!(stats.active_stores, 3);
    assert_eq!(stats.total_store_sales, 2_443_000);
    assert!((stats.average_store_rating - 4.4).abs() < 1e-9);
    assert_eq!(stats.premium_badges, 1);
    assert_eq!(stats.active_paid_verifications, 1);
    assert_eq!(stats.expired_paid_verifications, 1);
    assert_eq!(stats.paid_verifications_revenue, 50_000);
}

#[test]
fn test_security_headline_numbers() {
    let state: DomainState = demo();

    let stats: SecurityStats = security_stats(&state, anchor_time());
    assert_eq!(stats.failed_logins, 1);
    assert_eq!(stats.users_blocked, 3);
    assert_eq!(stats.active_sessions, 2);
    assert_eq!(stats.critical_events, 2);
    assert_eq!(stats.ips_blocked, 1);
    assert!((stats.avg_risk_score - 7.25).abs() < 1e-9);
}

#[test]
fn test_only_open_coupons_are_redeemable() {
    let state: DomainState = demo();

    let open = redeemable_coupons(&state, anchor_date());
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].code, "BEMVINDO10");
}

#[test]
fn test_categories_keep_first_appearance_order() {
    let state: DomainState = demo();

    assert_eq!(
        product_categories(&state),
        vec![
            String::from("Electronics"),
            String::from("Home Decor"),
            String::from("Office"),
            String::from("Groceries"),
        ]
    );
    assert_eq!(
        store_categories(&state),
        vec![
            String::from("Electronics"),
            String::from("General"),
            String::from("Home Decor"),
            String::from("Office"),
            String::from("Groceries"),
        ]
    );
}

#[test]
fn test_empty_state_yields_zeroed_stats() {
    let state: DomainState = DomainState::new();

    let stats = dashboard_stats(&state, anchor_date());
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.total_revenue, 0);
    assert!((stats.average_store_rating - 0.0).abs() < f64::EPSILON);

    let security: SecurityStats = security_stats(&state, anchor_time());
    assert_eq!(security.failed_logins, 0);
    assert!((security.avg_risk_score - 0.0).abs() < f64::EPSILON);
}
