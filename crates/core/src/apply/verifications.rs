// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Paid certification handlers.
//!
//! Like badges, verifications live in the global list and as embedded
//! copies on their supplier; every handler keeps the pair in step.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_audit::Actor;
use marketdesk_domain::{PaidVerification, VerificationPlan};
use time::OffsetDateTime;

/// Grants a paid certification to a supplier.
///
/// The certification is created paid and active, priced from its tier,
/// and valid for one year from the transition date.
pub(super) fn assign_paid_verification(
    state: &mut DomainState,
    verification_id: String,
    supplier_id: &str,
    plan: VerificationPlan,
    business_type: String,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let supplier = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == supplier_id)
        .ok_or_else(|| CoreError::SupplierNotFound(supplier_id.to_string()))?;

    let verification: PaidVerification = PaidVerification::new(
        verification_id,
        supplier_id.to_string(),
        plan,
        business_type,
        actor.id.clone(),
        now.date(),
    )?;

    supplier.paid_verifications.push(verification.clone());
    state.paid_verifications.push(verification);
    Ok(Outcome::none())
}

/// Extends a paid certification by one year from its current expiry.
///
/// Renewal is cumulative: renewing early still pushes the expiry a full
/// year past where it already was. The renewed record also returns to
/// paid and active.
pub(super) fn renew_paid_verification(
    state: &mut DomainState,
    verification_id: &str,
) -> Result<Outcome, CoreError> {
    let verification: &mut PaidVerification = state
        .paid_verifications
        .iter_mut()
        .find(|verification| verification.id == verification_id)
        .ok_or_else(|| CoreError::VerificationNotFound(verification_id.to_string()))?;
    verification.renew()?;
    let renewed: PaidVerification = verification.clone();

    if let Some(supplier) = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == renewed.supplier_id)
    {
        if let Some(embedded) = supplier
            .paid_verifications
            .iter_mut()
            .find(|embedded| embedded.id == verification_id)
        {
            *embedded = renewed;
        }
    }
    Ok(Outcome::none())
}

/// Removes a paid certification from its supplier.
pub(super) fn remove_paid_verification(
    state: &mut DomainState,
    verification_id: &str,
) -> Result<Outcome, CoreError> {
    let supplier_id: String = state
        .paid_verifications
        .iter()
        .find(|verification| verification.id == verification_id)
        .map(|verification| verification.supplier_id.clone())
        .ok_or_else(|| CoreError::VerificationNotFound(verification_id.to_string()))?;

    state
        .paid_verifications
        .retain(|verification| verification.id != verification_id);
    if let Some(supplier) = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == supplier_id)
    {
        supplier
            .paid_verifications
            .retain(|verification| verification.id != verification_id);
    }
    Ok(Outcome::none())
}
