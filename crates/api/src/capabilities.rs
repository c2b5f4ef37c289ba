// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advisory capability computation for UI gating.
//!
//! Capabilities tell the presentation layer which buttons and panels to
//! enable for an operator. They are advisory only: the store accepts any
//! well-formed mutation regardless of what this module reports, and the
//! façade logs a warning when a mutation bypasses the advice.

use marketdesk_domain::{
    InternalUser, InternalUserRole, InternalUserStatus, PermissionAction, Role, SystemModule,
};

/// Whether a single action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The operator may perform the action.
    Allowed,
    /// The operator may not perform the action.
    Denied,
}

impl Capability {
    /// Returns `true` for [`Capability::Allowed`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Maps `true` to [`Capability::Allowed`] and `false` to
    /// [`Capability::Denied`].
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

/// Per-module capability flags for an operator, one per permission
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCapabilities {
    pub can_view: Capability,
    pub can_create: Capability,
    pub can_edit: Capability,
    pub can_delete: Capability,
    pub can_approve: Capability,
    pub can_export: Capability,
    pub can_financial_actions: Capability,
    pub can_critical_status_change: Capability,
}

impl ModuleCapabilities {
    const fn all(capability: Capability) -> Self {
        Self {
            can_view: capability,
            can_create: capability,
            can_edit: capability,
            can_delete: capability,
            can_approve: capability,
            can_export: capability,
            can_financial_actions: capability,
            can_critical_status_change: capability,
        }
    }
}

/// Capability flags for working a single role through the permission
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMatrixCapabilities {
    /// Whether the operator may toggle grants on the role.
    pub can_edit_permissions: Capability,
    /// Whether the operator may delete the role.
    pub can_delete: Capability,
}

/// Computes what `operator` may do inside `module`.
///
/// Suspended operators get nothing. Super admins get everything. Anyone
/// else gets the union of the grants held by the roles they are assigned.
#[must_use]
pub fn compute_module_capabilities(
    operator: &InternalUser,
    roles: &[Role],
    module: SystemModule,
) -> ModuleCapabilities {
    if operator.status == InternalUserStatus::Suspended {
        return ModuleCapabilities::all(Capability::Denied);
    }
    if operator.role == InternalUserRole::SuperAdmin {
        return ModuleCapabilities::all(Capability::Allowed);
    }

    let granted = |action: PermissionAction| -> Capability {
        let held: bool = roles
            .iter()
            .filter(|role| operator.role_ids.contains(&role.id))
            .any(|role| role.has_permission(module, action));
        Capability::from_bool(held)
    };

    ModuleCapabilities {
        can_view: granted(PermissionAction::View),
        can_create: granted(PermissionAction::Create),
        can_edit: granted(PermissionAction::Edit),
        can_delete: granted(PermissionAction::Delete),
        can_approve: granted(PermissionAction::Approve),
        can_export: granted(PermissionAction::Export),
        can_financial_actions: granted(PermissionAction::FinancialActions),
        can_critical_status_change: granted(PermissionAction::CriticalStatusChange),
    }
}

/// Computes what `operator` may do to `target` through the permission
/// matrix.
///
/// The hierarchy-1 role is never editable or deletable, no matter who
/// asks. Below that, matrix access requires the Permissions module's
/// Edit and Delete grants respectively, or the super-admin tier.
#[must_use]
pub fn compute_role_matrix_capabilities(
    operator: &InternalUser,
    roles: &[Role],
    target: &Role,
) -> RoleMatrixCapabilities {
    if operator.status == InternalUserStatus::Suspended || target.hierarchy_level == 1 {
        return RoleMatrixCapabilities {
            can_edit_permissions: Capability::Denied,
            can_delete: Capability::Denied,
        };
    }

    let holds = |action: PermissionAction| -> bool {
        operator.role == InternalUserRole::SuperAdmin
            || roles
                .iter()
                .filter(|role| operator.role_ids.contains(&role.id))
                .any(|role| role.has_permission(SystemModule::Permissions, action))
    };

    RoleMatrixCapabilities {
        can_edit_permissions: Capability::from_bool(holds(PermissionAction::Edit)),
        can_delete: Capability::from_bool(holds(PermissionAction::Delete)),
    }
}
