// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commercial plan handlers.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{Plan, SellerSalesStatus, Supplier};

fn supplier_mut<'a>(
    state: &'a mut DomainState,
    supplier_id: &str,
) -> Result<&'a mut Supplier, CoreError> {
    state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == supplier_id)
        .ok_or_else(|| CoreError::SupplierNotFound(supplier_id.to_string()))
}

/// Moves a supplier onto a different commercial plan.
pub(super) fn set_supplier_plan(
    state: &mut DomainState,
    supplier_id: &str,
    plan_id: String,
) -> Result<Outcome, CoreError> {
    let supplier: &mut Supplier = supplier_mut(state, supplier_id)?;
    supplier.plan_id = plan_id;
    Ok(Outcome::none())
}

/// Pauses or resumes a supplier's ability to record sales.
pub(super) fn set_supplier_sales_status(
    state: &mut DomainState,
    supplier_id: &str,
    status: SellerSalesStatus,
) -> Result<Outcome, CoreError> {
    let supplier: &mut Supplier = supplier_mut(state, supplier_id)?;
    supplier.sales_status = status;
    Ok(Outcome::none())
}

/// Grants a one-off volume expansion for the current plan cycle.
pub(super) fn approve_manual_expansion(
    state: &mut DomainState,
    supplier_id: &str,
    amount: i64,
) -> Result<Outcome, CoreError> {
    let supplier: &mut Supplier = supplier_mut(state, supplier_id)?;
    supplier.manual_expansion_amount = Some(amount);
    Ok(Outcome::none())
}

/// Replaces an existing commercial plan definition, matched by id.
pub(super) fn save_plan(state: &mut DomainState, plan: Plan) -> Result<Outcome, CoreError> {
    let slot: &mut Plan = state
        .plans
        .iter_mut()
        .find(|existing| existing.id == plan.id)
        .ok_or_else(|| CoreError::PlanNotFound(plan.id.clone()))?;
    *slot = plan;
    Ok(Outcome::none())
}
