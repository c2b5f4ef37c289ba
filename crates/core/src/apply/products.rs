// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product moderation handlers.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{Product, ProductStatus};

/// Changes a product's moderation status.
///
/// A non-empty `reason` replaces the stored rejection reason; an absent
/// or empty one keeps whatever reason the product already carried.
pub(super) fn set_product_status(
    state: &mut DomainState,
    product_id: &str,
    status: ProductStatus,
    reason: Option<String>,
) -> Result<Outcome, CoreError> {
    let product: &mut Product = state
        .products
        .iter_mut()
        .find(|product| product.id == product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
    product.status = status;
    if let Some(new_reason) = reason.filter(|text| !text.is_empty()) {
        product.rejection_reason = Some(new_reason);
    }
    Ok(Outcome::none())
}
