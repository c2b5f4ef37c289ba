// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff account and permission role handlers.
//!
//! Permission edits are accepted for any existing role here, including
//! the hierarchy-level-1 role; keeping the super-admin matrix locked is
//! the advisory capability layer's job, not the store's.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{
    InternalUser, InternalUserRole, InternalUserStatus, PermissionAction, Role, SystemModule,
    validate_hierarchy_level,
};

fn internal_user_mut<'a>(
    state: &'a mut DomainState,
    user_id: &str,
) -> Result<&'a mut InternalUser, CoreError> {
    state
        .internal_users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or_else(|| CoreError::InternalUserNotFound(user_id.to_string()))
}

/// Changes a staff account's status.
pub(super) fn set_internal_user_status(
    state: &mut DomainState,
    user_id: &str,
    status: InternalUserStatus,
) -> Result<Outcome, CoreError> {
    let user: &mut InternalUser = internal_user_mut(state, user_id)?;
    user.status = status;
    Ok(Outcome::none())
}

/// Changes a staff account's built-in role tier.
pub(super) fn set_internal_user_role(
    state: &mut DomainState,
    user_id: &str,
    role: InternalUserRole,
) -> Result<Outcome, CoreError> {
    let user: &mut InternalUser = internal_user_mut(state, user_id)?;
    user.role = role;
    Ok(Outcome::none())
}

/// Creates or replaces a permission role, matched by id.
pub(super) fn save_role(state: &mut DomainState, role: Role) -> Result<Outcome, CoreError> {
    validate_hierarchy_level(role.hierarchy_level)?;
    match state
        .roles
        .iter_mut()
        .find(|existing| existing.id == role.id)
    {
        Some(slot) => *slot = role,
        None => state.roles.push(role),
    }
    Ok(Outcome::none())
}

/// Grants or revokes a single permission on a role.
///
/// Granting an action the role already holds and revoking one it never
/// held are both no-ops.
pub(super) fn set_permission(
    state: &mut DomainState,
    role_id: &str,
    module: SystemModule,
    action: PermissionAction,
    granted: bool,
) -> Result<Outcome, CoreError> {
    let role: &mut Role = state
        .roles
        .iter_mut()
        .find(|role| role.id == role_id)
        .ok_or_else(|| CoreError::RoleNotFound(role_id.to_string()))?;
    if granted {
        role.grant(module, action);
    } else {
        role.revoke(module, action);
    }
    Ok(Outcome::none())
}
