// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status handlers.
//!
//! Fulfilment, payment, and logistics are three independent axes on the
//! same order; each setter touches exactly one of them.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{LogisticStatus, Order, OrderItemStatus, OrderStatus, PaymentStatus};

fn order_mut<'a>(state: &'a mut DomainState, order_id: &str) -> Result<&'a mut Order, CoreError> {
    state
        .orders
        .iter_mut()
        .find(|order| order.id == order_id)
        .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))
}

/// Changes an order's fulfilment status.
pub(super) fn set_order_status(
    state: &mut DomainState,
    order_id: &str,
    status: OrderStatus,
) -> Result<Outcome, CoreError> {
    let order: &mut Order = order_mut(state, order_id)?;
    order.status = status;
    Ok(Outcome::none())
}

/// Changes an order's payment status.
pub(super) fn set_payment_status(
    state: &mut DomainState,
    order_id: &str,
    status: PaymentStatus,
) -> Result<Outcome, CoreError> {
    let order: &mut Order = order_mut(state, order_id)?;
    order.payment_status = status;
    Ok(Outcome::none())
}

/// Changes an order's shipping progress.
pub(super) fn set_logistic_status(
    state: &mut DomainState,
    order_id: &str,
    status: LogisticStatus,
) -> Result<Outcome, CoreError> {
    let order: &mut Order = order_mut(state, order_id)?;
    order.logistic_status = status;
    Ok(Outcome::none())
}

/// Changes the status of a single line item within an order.
pub(super) fn set_order_item_status(
    state: &mut DomainState,
    order_id: &str,
    item_id: &str,
    status: OrderItemStatus,
) -> Result<Outcome, CoreError> {
    let order: &mut Order = order_mut(state, order_id)?;
    let item = order
        .items
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| CoreError::OrderItemNotFound {
            order_id: order_id.to_string(),
            item_id: item_id.to_string(),
        })?;
    item.status = status;
    Ok(Outcome::none())
}
