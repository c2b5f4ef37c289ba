// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Badge definition and assignment handlers.
//!
//! Assignments live in the global badge list and as embedded copies on
//! their supplier; both are updated inside the same transition.

use super::{Outcome, audit_id};
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_audit::{Action, Actor, AuditEntityKind, AuditEntry};
use marketdesk_domain::{
    BadgeDefinition, DomainError, SellerBadge, validate_validity_days, validate_visual_level,
};
use time::{Date, Duration, OffsetDateTime};

/// Creates or replaces a badge definition, matched by id.
pub(super) fn save_badge_definition(
    state: &mut DomainState,
    definition: BadgeDefinition,
) -> Result<Outcome, CoreError> {
    validate_visual_level(definition.visual_level)?;
    validate_validity_days(definition.valid_for_days)?;
    match state
        .badge_definitions
        .iter_mut()
        .find(|existing| existing.id == definition.id)
    {
        Some(slot) => *slot = definition,
        None => state.badge_definitions.push(definition),
    }
    Ok(Outcome::none())
}

/// Assigns a badge to a supplier.
///
/// The expiration date is fixed at assignment time from the definition's
/// validity period; a perpetual definition produces no expiration. The
/// new assignment is appended to the global list and to the supplier's
/// embedded copy, and a non-critical audit entry records the grant.
pub(super) fn assign_seller_badge(
    state: &mut DomainState,
    seller_badge_id: String,
    seller_id: &str,
    badge_id: &str,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let definition = state
        .badge_definitions
        .iter()
        .find(|definition| definition.id == badge_id)
        .ok_or_else(|| CoreError::BadgeDefinitionNotFound(badge_id.to_string()))?;
    let badge_name: String = definition.name.clone();

    let expiration_date: Option<Date> = match definition.valid_for_days {
        Some(days) => Some(
            now.date()
                .checked_add(Duration::days(i64::from(days)))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("badge validity of {days} days from {}", now.date()),
                })?,
        ),
        None => None,
    };

    let badge: SellerBadge = SellerBadge::new(
        seller_badge_id,
        seller_id.to_string(),
        badge_id.to_string(),
        now.date(),
        expiration_date,
        false,
    );

    let supplier = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == seller_id)
        .ok_or_else(|| CoreError::SupplierNotFound(seller_id.to_string()))?;
    let supplier_name: String = supplier.name.clone();
    supplier.badges.push(badge.clone());
    state.seller_badges.push(badge);

    let entry: AuditEntry = AuditEntry::new(
        audit_id(now),
        now,
        actor.clone(),
        Action::new(
            String::from("BadgeAssigned"),
            Some(format!(
                "Selo \"{badge_name}\" atribuído ao vendedor \"{supplier_name}\"."
            )),
        ),
        false,
        Some(AuditEntityKind::User),
        Some(seller_id.to_string()),
    );
    Ok(Outcome::audit(entry))
}

/// Removes a badge assignment from its supplier.
///
/// The assignment disappears from the global list and from the
/// supplier's embedded copy, and a critical audit entry records the
/// revocation.
pub(super) fn revoke_seller_badge(
    state: &mut DomainState,
    seller_badge_id: &str,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let seller_id: String = state
        .seller_badges
        .iter()
        .find(|badge| badge.id == seller_badge_id)
        .map(|badge| badge.seller_id.clone())
        .ok_or_else(|| CoreError::SellerBadgeNotFound(seller_badge_id.to_string()))?;

    state.seller_badges.retain(|badge| badge.id != seller_badge_id);

    let supplier_name: String = match state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == seller_id)
    {
        Some(supplier) => {
            supplier.badges.retain(|badge| badge.id != seller_badge_id);
            supplier.name.clone()
        }
        // Dangling assignment; nothing embedded to clean up.
        None => seller_id.clone(),
    };

    let entry: AuditEntry = AuditEntry::new(
        audit_id(now),
        now,
        actor.clone(),
        Action::new(
            String::from("BadgeRevoked"),
            Some(format!("Selo removido do vendedor \"{supplier_name}\".")),
        ),
        true,
        Some(AuditEntityKind::User),
        Some(seller_id),
    );
    Ok(Outcome::audit(entry))
}
