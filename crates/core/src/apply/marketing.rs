// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coupon handlers.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{
    Coupon, CouponStatus, CouponType, validate_coupon_code_unique, validate_coupon_value,
};
use time::{Date, OffsetDateTime};

/// Creates a marketing coupon at the front of the coupon list.
///
/// The value must suit the coupon type and the code must be unused;
/// both checks fail the transition before anything is written.
#[allow(clippy::too_many_arguments)]
pub(super) fn add_coupon(
    state: &mut DomainState,
    coupon_id: String,
    code: String,
    coupon_type: CouponType,
    value: i64,
    status: CouponStatus,
    usage_limit: Option<u32>,
    expires_at: Option<Date>,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    validate_coupon_value(coupon_type, value)?;
    validate_coupon_code_unique(&code, &state.coupons)?;

    let coupon: Coupon = Coupon {
        id: coupon_id,
        code,
        coupon_type,
        value,
        status,
        usage_count: 0,
        usage_limit,
        expires_at,
        created_at: now,
    };
    state.coupons.insert(0, coupon);
    Ok(Outcome::none())
}

/// Replaces an existing coupon, matched by id.
pub(super) fn update_coupon(state: &mut DomainState, coupon: Coupon) -> Result<Outcome, CoreError> {
    let slot: &mut Coupon = state
        .coupons
        .iter_mut()
        .find(|existing| existing.id == coupon.id)
        .ok_or_else(|| CoreError::CouponNotFound(coupon.id.clone()))?;
    *slot = coupon;
    Ok(Outcome::none())
}
