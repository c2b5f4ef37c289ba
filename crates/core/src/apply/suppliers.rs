// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supplier, document, store, and marketplace-user status handlers.
//!
//! Supplier review status and the mirrored marketplace user account are
//! two views of the same party, so both entry points update the pair
//! inside one transition.

use super::{Outcome, audit_id};
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_audit::{Action, Actor, AuditEntityKind, AuditEntry};
use marketdesk_domain::{
    DocumentStatus, MarketplaceUser, MarketplaceUserStatus, StoreStatus, Supplier, SupplierStatus,
};
use time::OffsetDateTime;

/// Changes a supplier's review status.
///
/// Appends to the supplier's status history, mirrors the new status onto
/// the marketplace user account with the same id when one exists, and
/// produces a critical audit entry.
pub(super) fn set_supplier_status(
    state: &mut DomainState,
    supplier_id: &str,
    status: SupplierStatus,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let supplier: &mut Supplier = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == supplier_id)
        .ok_or_else(|| CoreError::SupplierNotFound(supplier_id.to_string()))?;
    let supplier_name: String = supplier.name.clone();
    supplier.record_status(status, now, &actor.name);

    if let Some(user) = state
        .marketplace_users
        .iter_mut()
        .find(|user| user.id == supplier_id)
    {
        user.status = MarketplaceUserStatus::from_supplier_status(status);
    }

    let entry: AuditEntry = AuditEntry::new(
        audit_id(now),
        now,
        actor.clone(),
        Action::new(
            String::from("SupplierStatusChanged"),
            Some(format!(
                "Supplier \"{supplier_name}\" status changed to {status}.",
                status = status.as_str()
            )),
        ),
        true,
        Some(AuditEntityKind::User),
        Some(supplier_id.to_string()),
    );
    Ok(Outcome::audit(entry))
}

/// Changes the review status of one of a supplier's documents.
pub(super) fn set_document_status(
    state: &mut DomainState,
    supplier_id: &str,
    document_id: &str,
    status: DocumentStatus,
) -> Result<Outcome, CoreError> {
    let supplier: &mut Supplier = state
        .suppliers
        .iter_mut()
        .find(|supplier| supplier.id == supplier_id)
        .ok_or_else(|| CoreError::SupplierNotFound(supplier_id.to_string()))?;
    let document = supplier
        .documents
        .iter_mut()
        .find(|document| document.id == document_id)
        .ok_or_else(|| CoreError::DocumentNotFound {
            supplier_id: supplier_id.to_string(),
            document_id: document_id.to_string(),
        })?;
    document.status = status;
    Ok(Outcome::none())
}

/// Changes a marketplace user's account status.
///
/// When the id belongs to a supplier account, the change is translated
/// onto the supplier's review status through the fixed mapping and
/// applied through the supplier path, which also writes the audit entry.
pub(super) fn set_marketplace_user_status(
    state: &mut DomainState,
    user_id: &str,
    status: MarketplaceUserStatus,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let user: &mut MarketplaceUser = state
        .marketplace_users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or_else(|| CoreError::MarketplaceUserNotFound(user_id.to_string()))?;
    user.status = status;

    if state.suppliers.iter().any(|supplier| supplier.id == user_id) {
        return set_supplier_status(state, user_id, status.to_supplier_status(), actor, now);
    }
    Ok(Outcome::none())
}

/// Changes a store's publication status.
pub(super) fn set_store_status(
    state: &mut DomainState,
    store_id: &str,
    status: StoreStatus,
) -> Result<Outcome, CoreError> {
    let store = state
        .stores
        .iter_mut()
        .find(|store| store.id == store_id)
        .ok_or_else(|| CoreError::StoreNotFound(store_id.to_string()))?;
    store.status = status;
    Ok(Outcome::none())
}
