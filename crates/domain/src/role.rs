// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fine-grained permission roles.
//!
//! A role grants lists of actions per back-office module. Roles are
//! ordered by hierarchy level, where level 1 is the most privileged;
//! the level-1 role's permission matrix is read-only in the back
//! office so the top role can never lock itself out.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// An action a role can be granted on a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionAction {
    /// Read access.
    View,
    /// Create new records.
    Create,
    /// Modify existing records.
    Edit,
    /// Delete records.
    Delete,
    /// Approve pending records.
    Approve,
    /// Export data.
    Export,
    /// Money-moving operations such as refunds.
    FinancialActions,
    /// Status changes flagged as critical.
    CriticalStatusChange,
}

impl PermissionAction {
    /// Every action, in display order.
    pub const ALL: [Self; 8] = [
        Self::View,
        Self::Create,
        Self::Edit,
        Self::Delete,
        Self::Approve,
        Self::Export,
        Self::FinancialActions,
        Self::CriticalStatusChange,
    ];

    /// Returns the wire representation of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Approve => "approve",
            Self::Export => "export",
            Self::FinancialActions => "financialActions",
            Self::CriticalStatusChange => "criticalStatusChange",
        }
    }
}

impl FromStr for PermissionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                kind: "permission action",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A back-office module that permissions attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemModule {
    Dashboard,
    Users,
    Products,
    Orders,
    Financials,
    Moderation,
    Communication,
    Notifications,
    Marketing,
    Reports,
    Logistics,
    Security,
    Integrations,
    Settings,
    Audit,
    Permissions,
}

impl SystemModule {
    /// Every module, in display order.
    pub const ALL: [Self; 16] = [
        Self::Dashboard,
        Self::Users,
        Self::Products,
        Self::Orders,
        Self::Financials,
        Self::Moderation,
        Self::Communication,
        Self::Notifications,
        Self::Marketing,
        Self::Reports,
        Self::Logistics,
        Self::Security,
        Self::Integrations,
        Self::Settings,
        Self::Audit,
        Self::Permissions,
    ];

    /// Returns the wire representation of this module.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Financials => "Financials",
            Self::Moderation => "Moderation",
            Self::Communication => "Communication",
            Self::Notifications => "Notifications",
            Self::Marketing => "Marketing",
            Self::Reports => "Reports",
            Self::Logistics => "Logistics",
            Self::Security => "Security",
            Self::Integrations => "Integrations",
            Self::Settings => "Settings",
            Self::Audit => "Audit",
            Self::Permissions => "Permissions",
        }
    }
}

impl FromStr for SystemModule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                kind: "system module",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for SystemModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions granted per module. Modules absent from the map grant nothing.
pub type Permissions = BTreeMap<SystemModule, Vec<PermissionAction>>;

/// A named permission set assignable to internal users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the role is for.
    pub description: String,
    /// Granted actions per module.
    pub permissions: Permissions,
    /// How many internal users hold this role. Computed at load time.
    pub user_count: u32,
    /// Privilege rank. Level 1 is the most privileged.
    pub hierarchy_level: u8,
}

impl Role {
    /// Whether this role grants `action` on `module`.
    #[must_use]
    pub fn has_permission(&self, module: SystemModule, action: PermissionAction) -> bool {
        self.permissions
            .get(&module)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Grants `action` on `module`. Granting twice is a no-op.
    pub fn grant(&mut self, module: SystemModule, action: PermissionAction) {
        let actions: &mut Vec<PermissionAction> = self.permissions.entry(module).or_default();
        if !actions.contains(&action) {
            actions.push(action);
        }
    }

    /// Revokes `action` on `module`. Revoking an absent grant is a no-op.
    pub fn revoke(&mut self, module: SystemModule, action: PermissionAction) {
        if let Some(actions) = self.permissions.get_mut(&module) {
            actions.retain(|existing| *existing != action);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn make_role() -> Role {
        let mut permissions: Permissions = Permissions::new();
        permissions.insert(
            SystemModule::Dashboard,
            vec![PermissionAction::View],
        );
        Role {
            id: String::from("role-test"),
            name: String::from("Test Role"),
            description: String::from("A role for tests."),
            permissions,
            user_count: 0,
            hierarchy_level: 2,
        }
    }

    #[test]
    fn test_absent_module_grants_nothing() {
        let role: Role = make_role();
        assert!(!role.has_permission(SystemModule::Financials, PermissionAction::View));
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut role: Role = make_role();

        role.grant(SystemModule::Dashboard, PermissionAction::View);
        role.grant(SystemModule::Dashboard, PermissionAction::View);

        let actions: &Vec<PermissionAction> =
            role.permissions.get(&SystemModule::Dashboard).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_revoke_removes_only_named_action() {
        let mut role: Role = make_role();
        role.grant(SystemModule::Dashboard, PermissionAction::Export);

        role.revoke(SystemModule::Dashboard, PermissionAction::View);

        assert!(!role.has_permission(SystemModule::Dashboard, PermissionAction::View));
        assert!(role.has_permission(SystemModule::Dashboard, PermissionAction::Export));
    }

    #[test]
    fn test_module_wire_names_round_trip() {
        for module in SystemModule::ALL {
            let parsed: SystemModule = module.as_str().parse().unwrap();
            assert_eq!(parsed, module);
        }
    }

    #[test]
    fn test_action_wire_names_round_trip() {
        for action in PermissionAction::ALL {
            let parsed: PermissionAction = action.as_str().parse().unwrap();
            assert_eq!(parsed, action);
        }
        assert!("superpowers".parse::<PermissionAction>().is_err());
    }
}
