// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived aggregates over a state snapshot.
//!
//! Everything here is a pure function: it reads the snapshot it is
//! given and returns fresh values. Nothing is cached, so the results
//! are always consistent with the state they were computed from.

use crate::state::DomainState;
use marketdesk_domain::{
    BusinessType, Coupon, DateRange, DisputeStatus, InternalUserRole, InternalUserStatus,
    IpRuleType, LoginStatus, MarketplaceUserStatus, MarketplaceUserType, NotificationStatus,
    ProductStatus, StoreStatus, SupplierStatus, Transaction, TransactionKind, TransactionStatus,
    within_last_days, within_last_days_at,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// All marketplace accounts, buyers and suppliers alike.
    pub total_users: usize,
    /// Stores that passed verification.
    pub verified_stores: usize,
    /// Products approved for sale.
    pub active_products: usize,
    /// Badge assignments currently on record.
    pub total_badges: usize,
    /// Sum of amounts over paid transactions, in minor units.
    pub total_revenue: i64,
    /// Sum of commission over paid transactions, in minor units.
    pub total_commission: i64,
    /// Notifications staff have not read yet.
    pub unread_notifications: usize,
    /// Buyer accounts in good standing.
    pub active_buyers: usize,
    /// Approved suppliers.
    pub active_suppliers: usize,
    /// Suspended marketplace accounts.
    pub suspended_users: usize,
    /// Marketplace accounts created in the last thirty days.
    pub new_users_this_month: usize,
    /// All staff accounts.
    pub total_internal_members: usize,
    /// Staff on the Admin tier. Super admins are counted separately.
    pub total_admins: usize,
    /// Staff on the Moderator tier.
    pub total_moderators: usize,
    /// Staff accounts that may sign in.
    pub active_internal_members: usize,
    /// Staff accounts created in the last thirty days.
    pub new_internal_members_this_month: usize,
    /// All stores.
    pub total_stores: usize,
    /// Stores currently published.
    pub active_stores: usize,
    /// Sum of accumulated store sales, in minor units.
    pub total_store_sales: i64,
    /// Mean store rating, or zero when there are no stores.
    pub average_store_rating: f64,
    /// Assignments whose definition carries the maximum visual level.
    pub premium_badges: usize,
    /// Paid certifications flagged active.
    pub active_paid_verifications: usize,
    /// Paid certifications flagged inactive.
    pub expired_paid_verifications: usize,
    /// Certification sale revenue over paid transactions, in minor units.
    pub paid_verifications_revenue: i64,
}

/// Headline numbers for the security center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityStats {
    /// Failed sign-in attempts over the last seven days.
    pub failed_logins: usize,
    /// Suspended marketplace accounts plus suspended staff accounts.
    pub users_blocked: usize,
    /// Staff sessions currently signed in.
    pub active_sessions: usize,
    /// Audit entries flagged critical.
    pub critical_events: usize,
    /// Deny rules in the IP rule list.
    pub ips_blocked: usize,
    /// Mean fraud risk score, or zero when there are no reports.
    pub avg_risk_score: f64,
}

/// Date-range-scoped totals for the financial page.
///
/// All totals except `open_disputes` cover only transactions whose date
/// falls inside the requested range; the dispute count is global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of amounts over paid transactions, in minor units.
    pub total_revenue: i64,
    /// Sum of commission over paid transactions, in minor units.
    pub total_commission: i64,
    /// Sum of amounts over pending transactions, in minor units.
    pub pending_payments: i64,
    /// Sum of amounts over blocked transactions, in minor units.
    pub blocked_payments: i64,
    /// Sum of amounts over refunded transactions, in minor units.
    pub total_refunds: i64,
    /// Certification sale amounts regardless of status, in minor units.
    pub paid_badges_revenue: i64,
    /// Disputes currently open or under review, range-independent.
    pub open_disputes: usize,
}

/// One day's bucket in the revenue-versus-profit series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// The calendar date of the bucket.
    pub date: Date,
    /// Net sale revenue for the day, in minor units.
    pub revenue: i64,
    /// Net marketplace profit for the day, in minor units.
    pub profit: i64,
}

/// Sale revenue split across the three business relationship categories.
///
/// Every bucket is always present, zero when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RevenueByBusinessType {
    /// Business-to-business sales, in minor units.
    pub b2b: i64,
    /// Business-to-consumer sales, in minor units.
    pub b2c: i64,
    /// Consumer-to-consumer sales, in minor units.
    pub c2c: i64,
}

/// A supplier's accumulated commission for the ranking chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierCommission {
    /// The supplier earning the commission.
    pub supplier_id: String,
    /// Display name carried from the transactions.
    pub supplier_name: String,
    /// Accumulated commission, in minor units.
    pub commission: i64,
}

/// Computes the dashboard headline numbers from a snapshot.
///
/// `today` anchors the thirty-day new-account windows.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dashboard_stats(state: &DomainState, today: Date) -> DashboardStats {
    let paid_transactions = || {
        state
            .transactions
            .iter()
            .filter(|transaction| transaction.status == TransactionStatus::Paid)
    };
    let average_store_rating: f64 = if state.stores.is_empty() {
        0.0
    } else {
        let rating_sum: f64 = state.stores.iter().map(|store| store.average_rating).sum();
        rating_sum / state.stores.len() as f64
    };

    DashboardStats {
        total_users: state.marketplace_users.len(),
        verified_stores: state
            .stores
            .iter()
            .filter(|store| store.is_verified)
            .count(),
        active_products: state
            .products
            .iter()
            .filter(|product| product.status == ProductStatus::Approved)
            .count(),
        total_badges: state.seller_badges.len(),
        total_revenue: paid_transactions()
            .map(|transaction| transaction.amount)
            .sum(),
        total_commission: paid_transactions()
            .map(|transaction| transaction.commission)
            .sum(),
        unread_notifications: state
            .notifications
            .iter()
            .filter(|notification| notification.status == NotificationStatus::Unread)
            .count(),
        active_buyers: state
            .marketplace_users
            .iter()
            .filter(|user| {
                user.user_type == MarketplaceUserType::Buyer
                    && user.status == MarketplaceUserStatus::Active
            })
            .count(),
        active_suppliers: state
            .suppliers
            .iter()
            .filter(|supplier| supplier.status == SupplierStatus::Approved)
            .count(),
        suspended_users: state
            .marketplace_users
            .iter()
            .filter(|user| user.status == MarketplaceUserStatus::Suspended)
            .count(),
        new_users_this_month: state
            .marketplace_users
            .iter()
            .filter(|user| within_last_days(user.created_at, today, 30))
            .count(),
        total_internal_members: state.internal_users.len(),
        total_admins: state
            .internal_users
            .iter()
            .filter(|user| user.role == InternalUserRole::Admin)
            .count(),
        total_moderators: state
            .internal_users
            .iter()
            .filter(|user| user.role == InternalUserRole::Moderator)
            .count(),
        active_internal_members: state
            .internal_users
            .iter()
            .filter(|user| user.status == InternalUserStatus::Active)
            .count(),
        new_internal_members_this_month: state
            .internal_users
            .iter()
            .filter(|user| within_last_days(user.created_at, today, 30))
            .count(),
        total_stores: state.stores.len(),
        active_stores: state
            .stores
            .iter()
            .filter(|store| store.status == StoreStatus::Active)
            .count(),
        total_store_sales: state.stores.iter().map(|store| store.total_sales).sum(),
        average_store_rating,
        premium_badges: state
            .seller_badges
            .iter()
            .filter(|badge| {
                state
                    .badge_definitions
                    .iter()
                    .find(|definition| definition.id == badge.badge_id)
                    .is_some_and(|definition| definition.visual_level == 3)
            })
            .count(),
        active_paid_verifications: state
            .paid_verifications
            .iter()
            .filter(|verification| verification.active)
            .count(),
        expired_paid_verifications: state
            .paid_verifications
            .iter()
            .filter(|verification| !verification.active)
            .count(),
        paid_verifications_revenue: paid_transactions()
            .filter(|transaction| transaction.kind == TransactionKind::SeloPaid)
            .map(|transaction| transaction.amount)
            .sum(),
    }
}

/// Computes the security center headline numbers from a snapshot.
///
/// `now` anchors the seven-day failed-login window.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn security_stats(state: &DomainState, now: OffsetDateTime) -> SecurityStats {
    let avg_risk_score: f64 = if state.fraud_reports.is_empty() {
        0.0
    } else {
        let score_sum: f64 = state
            .fraud_reports
            .iter()
            .map(|report| report.risk_score)
            .sum();
        score_sum / state.fraud_reports.len() as f64
    };

    SecurityStats {
        failed_logins: state
            .login_attempts
            .iter()
            .filter(|attempt| {
                attempt.status == LoginStatus::Failed
                    && within_last_days_at(attempt.timestamp, now, 7)
            })
            .count(),
        users_blocked: state
            .marketplace_users
            .iter()
            .filter(|user| user.status == MarketplaceUserStatus::Suspended)
            .count()
            + state
                .internal_users
                .iter()
                .filter(|user| user.status == InternalUserStatus::Suspended)
                .count(),
        active_sessions: state.active_sessions.len(),
        critical_events: state
            .audit_trail
            .iter()
            .filter(|entry| entry.is_critical)
            .count(),
        ips_blocked: state
            .ip_rules
            .iter()
            .filter(|rule| rule.rule_type == IpRuleType::Deny)
            .count(),
        avg_risk_score,
    }
}

fn in_range<'a>(
    state: &'a DomainState,
    range: &'a DateRange,
) -> impl Iterator<Item = &'a Transaction> {
    state
        .transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date))
}

/// Computes the financial page totals for a date range.
#[must_use]
pub fn financial_summary(state: &DomainState, range: &DateRange) -> FinancialSummary {
    let sum_amount = |status: TransactionStatus| -> i64 {
        in_range(state, range)
            .filter(|transaction| transaction.status == status)
            .map(|transaction| transaction.amount)
            .sum()
    };

    FinancialSummary {
        total_revenue: sum_amount(TransactionStatus::Paid),
        total_commission: in_range(state, range)
            .filter(|transaction| transaction.status == TransactionStatus::Paid)
            .map(|transaction| transaction.commission)
            .sum(),
        pending_payments: sum_amount(TransactionStatus::Pending),
        blocked_payments: sum_amount(TransactionStatus::Blocked),
        total_refunds: sum_amount(TransactionStatus::Refunded),
        paid_badges_revenue: in_range(state, range)
            .filter(|transaction| transaction.kind == TransactionKind::SeloPaid)
            .map(|transaction| transaction.amount)
            .sum(),
        open_disputes: state
            .disputes
            .iter()
            .filter(|dispute| {
                matches!(
                    dispute.status,
                    DisputeStatus::Open | DisputeStatus::UnderReview
                )
            })
            .count(),
    }
}

/// Buckets a date range's transactions by calendar day.
///
/// Sales add their amount and profit to the day; refunds subtract both;
/// commission and certification rows do not move the series. Buckets
/// come back sorted by date, oldest first.
#[must_use]
pub fn revenue_vs_profit(state: &DomainState, range: &DateRange) -> Vec<RevenuePoint> {
    let mut buckets: BTreeMap<Date, (i64, i64)> = BTreeMap::new();
    for transaction in in_range(state, range) {
        match transaction.kind {
            TransactionKind::Sale => {
                let bucket = buckets.entry(transaction.date).or_insert((0, 0));
                bucket.0 += transaction.amount;
                bucket.1 += transaction.marketplace_profit;
            }
            TransactionKind::Refund => {
                let bucket = buckets.entry(transaction.date).or_insert((0, 0));
                bucket.0 -= transaction.amount;
                bucket.1 -= transaction.marketplace_profit;
            }
            TransactionKind::Commission | TransactionKind::SeloPaid => {}
        }
    }
    buckets
        .into_iter()
        .map(|(date, (revenue, profit))| RevenuePoint {
            date,
            revenue,
            profit,
        })
        .collect()
}

/// Splits a date range's sale revenue across business categories.
#[must_use]
pub fn revenue_by_business_type(state: &DomainState, range: &DateRange) -> RevenueByBusinessType {
    let mut split: RevenueByBusinessType = RevenueByBusinessType::default();
    for transaction in in_range(state, range) {
        if transaction.kind != TransactionKind::Sale {
            continue;
        }
        match transaction.business_type {
            BusinessType::B2b => split.b2b += transaction.amount,
            BusinessType::B2c => split.b2c += transaction.amount,
            BusinessType::C2c => split.c2c += transaction.amount,
        }
    }
    split
}

/// Ranks suppliers by commission earned inside a date range.
///
/// Only transactions with a positive commission count. The top five come
/// back in descending order; suppliers tied on commission keep the order
/// their first transaction appeared in.
#[must_use]
pub fn top_suppliers_by_commission(
    state: &DomainState,
    range: &DateRange,
) -> Vec<SupplierCommission> {
    let mut ranking: Vec<SupplierCommission> = Vec::new();
    for transaction in in_range(state, range) {
        if transaction.commission <= 0 {
            continue;
        }
        match ranking
            .iter_mut()
            .find(|entry| entry.supplier_id == transaction.supplier_id)
        {
            Some(entry) => entry.commission += transaction.commission,
            None => ranking.push(SupplierCommission {
                supplier_id: transaction.supplier_id.clone(),
                supplier_name: transaction.supplier_name.clone(),
                commission: transaction.commission,
            }),
        }
    }
    ranking.sort_by(|a, b| b.commission.cmp(&a.commission));
    ranking.truncate(5);
    ranking
}

/// Distinct product categories, in the order they first appear.
#[must_use]
pub fn product_categories(state: &DomainState) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in &state.products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Distinct store categories, in the order they first appear.
#[must_use]
pub fn store_categories(state: &DomainState) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for store in &state.stores {
        if !categories.contains(&store.category) {
            categories.push(store.category.clone());
        }
    }
    categories
}

/// Coupons customers could still redeem on `today`.
#[must_use]
pub fn redeemable_coupons<'a>(state: &'a DomainState, today: Date) -> Vec<&'a Coupon> {
    state
        .coupons
        .iter()
        .filter(|coupon| coupon.is_redeemable(today))
        .collect()
}
