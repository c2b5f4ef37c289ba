// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Append-only trail types for the back office.
//!
//! Every successful state change produces exactly one audit entry.
//! Security-sensitive changes additionally produce a security event for
//! the dedicated security log. Entries are immutable once created and
//! are never rewritten or deleted.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The staff member who performed an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The internal user identifier.
    pub id: String,
    /// Display name, denormalized so the trail survives account changes.
    pub name: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The internal user identifier
    /// * `name` - The display name at the time of the action
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// What was done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// A human-readable description (e.g., `Approved supplier "Acme"`).
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - A human-readable description of what was done
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The kind of record an audit entry points back at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditEntityKind {
    /// A marketplace order.
    Order,
    /// A marketplace or internal user account.
    User,
    /// A catalog product.
    Product,
    /// A storefront.
    Store,
    /// A security setting such as an IP rule.
    Security,
    /// A role or permission matrix change.
    Permission,
}

impl AuditEntityKind {
    /// Returns the wire representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::User => "user",
            Self::Product => "product",
            Self::Store => "store",
            Self::Security => "security",
            Self::Permission => "permission",
        }
    }
}

impl std::fmt::Display for AuditEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable row in the audit trail.
///
/// Captures who did what, when, whether the change was critical, and
/// which record it touched. The entity reference is optional because
/// some actions (e.g., bulk exports) are not about a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identifier.
    pub id: String,
    /// When the action happened.
    pub timestamp: OffsetDateTime,
    /// Who performed the action.
    pub actor: Actor,
    /// What was done.
    pub action: Action,
    /// Whether the change is flagged for heightened review.
    pub is_critical: bool,
    /// The kind of record the action touched, if any.
    pub entity_kind: Option<AuditEntityKind>,
    /// The identifier of the touched record, if any.
    pub entity_id: Option<String>,
}

impl AuditEntry {
    /// Creates a new `AuditEntry`.
    ///
    /// Once created, an entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique entry identifier
    /// * `timestamp` - When the action happened
    /// * `actor` - Who performed the action
    /// * `action` - What was done
    /// * `is_critical` - Whether the change is flagged for review
    /// * `entity_kind` - The kind of record touched, if any
    /// * `entity_id` - The identifier of the touched record, if any
    #[must_use]
    pub const fn new(
        id: String,
        timestamp: OffsetDateTime,
        actor: Actor,
        action: Action,
        is_critical: bool,
        entity_kind: Option<AuditEntityKind>,
        entity_id: Option<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            actor,
            action,
            is_critical,
            entity_kind,
            entity_id,
        }
    }
}

/// An immutable row in the security log.
///
/// Security events track access-control changes (IP rules, session
/// terminations, password policy edits) separately from the general
/// audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// Unique event identifier.
    pub id: String,
    /// When the event happened.
    pub timestamp: OffsetDateTime,
    /// A short description (e.g., `IP Rule Added`).
    pub action: String,
    /// The administrator who triggered the event.
    pub admin: Actor,
    /// Free-text detail.
    pub details: String,
}

impl SecurityEvent {
    /// Creates a new `SecurityEvent`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique event identifier
    /// * `timestamp` - When the event happened
    /// * `action` - A short description of the event
    /// * `admin` - The administrator who triggered it
    /// * `details` - Free-text detail
    #[must_use]
    pub const fn new(
        id: String,
        timestamp: OffsetDateTime,
        action: String,
        admin: Actor,
        details: String,
    ) -> Self {
        Self {
            id,
            timestamp,
            action,
            admin,
            details,
        }
    }
}

#[cfg(test)]
mod tests;
