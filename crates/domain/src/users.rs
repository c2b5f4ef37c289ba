// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Marketplace and internal user accounts.
//!
//! Marketplace users are the buyers and sellers of the platform.
//! Supplier accounts appear twice: once as a [`crate::supplier::Supplier`]
//! and once as a [`MarketplaceUser`] projection of it. The two status
//! vocabularies differ, so this module also owns the fixed mapping
//! between them. Internal users are back-office staff.

use crate::error::DomainError;
use crate::supplier::SupplierStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketplaceUserType {
    /// A selling account, mirrored by a supplier record.
    Supplier,
    /// A buying account.
    Buyer,
}

impl MarketplaceUserType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Buyer => "Buyer",
        }
    }
}

impl FromStr for MarketplaceUserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Supplier" => Ok(Self::Supplier),
            "Buyer" => Ok(Self::Buyer),
            _ => Err(DomainError::UnknownStatus {
                kind: "marketplace user type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MarketplaceUserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status of a marketplace user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketplaceUserStatus {
    /// The account is in good standing.
    Active,
    /// The account has been suspended by staff.
    Suspended,
    /// The account is awaiting review.
    Pending,
}

impl MarketplaceUserStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Pending => "Pending",
        }
    }

    /// Validates a reviewed status change.
    ///
    /// Pending accounts may be activated or suspended; active and
    /// suspended accounts may swap. Nothing returns to Pending.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the change is
    /// not allowed.
    pub fn validate_transition(&self, to: Self) -> Result<(), DomainError> {
        let allowed: bool = match self {
            Self::Pending => matches!(to, Self::Active | Self::Suspended),
            Self::Active => matches!(to, Self::Suspended),
            Self::Suspended => matches!(to, Self::Active),
        };
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(to.as_str()),
                reason: String::from("accounts cannot return to Pending once reviewed"),
            })
        }
    }

    /// The user status that mirrors a supplier review status.
    #[must_use]
    pub const fn from_supplier_status(status: SupplierStatus) -> Self {
        match status {
            SupplierStatus::Approved => Self::Active,
            SupplierStatus::Blocked => Self::Suspended,
            SupplierStatus::Pending => Self::Pending,
        }
    }

    /// The supplier review status that mirrors this user status.
    #[must_use]
    pub const fn to_supplier_status(self) -> SupplierStatus {
        match self {
            Self::Active => SupplierStatus::Approved,
            Self::Suspended => SupplierStatus::Blocked,
            Self::Pending => SupplierStatus::Pending,
        }
    }
}

impl FromStr for MarketplaceUserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Suspended" => Ok(Self::Suspended),
            "Pending" => Ok(Self::Pending),
            _ => Err(DomainError::UnknownStatus {
                kind: "marketplace user status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MarketplaceUserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Built-in role of a back-office staff member.
///
/// Coarse tier used for authorization checks; fine-grained permission
/// sets live in [`crate::role::Role`] and are linked via `role_ids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalUserRole {
    /// Unrestricted access, including security settings.
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    /// Day-to-day administration.
    Admin,
    /// Content and dispute review only.
    Moderator,
}

impl InternalUserRole {
    /// Returns the wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Moderator => "Moderator",
        }
    }
}

impl FromStr for InternalUserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Super Admin" => Ok(Self::SuperAdmin),
            "Admin" => Ok(Self::Admin),
            "Moderator" => Ok(Self::Moderator),
            _ => Err(DomainError::UnknownStatus {
                kind: "internal user role",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InternalUserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status of a back-office staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalUserStatus {
    /// The account may sign in.
    Active,
    /// The account is locked out.
    Suspended,
}

impl InternalUserStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }

    /// The opposite status. Staff accounts toggle freely.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Suspended,
            Self::Suspended => Self::Active,
        }
    }
}

impl FromStr for InternalUserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(DomainError::UnknownStatus {
                kind: "internal user status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InternalUserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A buyer or seller account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceUser {
    /// Unique user identifier. Supplier accounts share the supplier id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Buyer or supplier.
    pub user_type: MarketplaceUserType,
    /// Account status.
    pub status: MarketplaceUserStatus,
    /// The date of the most recent visit.
    pub last_visit: Date,
    /// Reputation score from 0 to 100.
    pub reputation_score: u8,
    /// Lifetime order count.
    pub total_orders: u32,
    /// The date the account was created.
    pub created_at: Date,
}

/// A back-office staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Built-in role tier.
    pub role: InternalUserRole,
    /// Account status.
    pub status: InternalUserStatus,
    /// The date of the most recent sign-in.
    pub last_login: Date,
    /// Lifetime count of audited actions.
    pub total_actions: u32,
    /// The date the account was created.
    pub created_at: Date,
    /// Assigned permission roles, by role id.
    pub role_ids: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_status_mapping_round_trips() {
        for status in [
            SupplierStatus::Pending,
            SupplierStatus::Approved,
            SupplierStatus::Blocked,
        ] {
            let mirrored: MarketplaceUserStatus =
                MarketplaceUserStatus::from_supplier_status(status);
            assert_eq!(mirrored.to_supplier_status(), status);
        }
    }

    #[test]
    fn test_approved_supplier_maps_to_active_user() {
        assert_eq!(
            MarketplaceUserStatus::from_supplier_status(SupplierStatus::Approved),
            MarketplaceUserStatus::Active
        );
        assert_eq!(
            MarketplaceUserStatus::from_supplier_status(SupplierStatus::Blocked),
            MarketplaceUserStatus::Suspended
        );
    }

    #[test]
    fn test_reviewed_user_cannot_return_to_pending() {
        let result: Result<(), DomainError> =
            MarketplaceUserStatus::Active.validate_transition(MarketplaceUserStatus::Pending);
        assert!(matches!(
            result,
            Err(DomainError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_suspended_user_can_be_reactivated() {
        let result: Result<(), DomainError> =
            MarketplaceUserStatus::Suspended.validate_transition(MarketplaceUserStatus::Active);
        assert!(result.is_ok());
    }

    #[test]
    fn test_internal_status_toggles_both_ways() {
        assert_eq!(
            InternalUserStatus::Active.toggled(),
            InternalUserStatus::Suspended
        );
        assert_eq!(
            InternalUserStatus::Suspended.toggled(),
            InternalUserStatus::Active
        );
    }

    #[test]
    fn test_role_wire_names() {
        let role: InternalUserRole = "Super Admin".parse().unwrap();
        assert_eq!(role, InternalUserRole::SuperAdmin);
        assert_eq!(role.to_string(), "Super Admin");
    }
}
