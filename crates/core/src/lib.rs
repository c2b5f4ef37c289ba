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

//! Domain store, state transitions, and derived aggregates.
//!
//! The back office keeps its entire working set in one [`DomainState`]
//! value. Mutations go through [`apply`], which takes the current state
//! and a [`Command`] and returns a fresh state plus the log entries the
//! operation produced; read models are pure functions in
//! [`aggregates`]. [`demo_state`] builds the linked demo dataset used
//! by demos and tests.

mod aggregates;
mod apply;
mod command;
mod error;
mod seed;
mod state;

#[cfg(test)]
mod tests;

pub use aggregates::{
    DashboardStats, FinancialSummary, RevenueByBusinessType, RevenuePoint, SecurityStats,
    SupplierCommission, dashboard_stats, financial_summary, product_categories,
    redeemable_coupons, revenue_by_business_type, revenue_vs_profit, security_stats,
    store_categories, top_suppliers_by_commission,
};
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use seed::demo_state;
pub use state::{DomainState, TransitionResult};
