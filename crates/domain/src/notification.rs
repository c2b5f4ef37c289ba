// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Back-office notifications.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    /// Raised automatically by the platform.
    System,
    /// Written by a staff member.
    Manual,
}

impl NotificationType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How urgent a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationPriority {
    /// Informational only.
    Info,
    /// Needs attention soon.
    Alert,
    /// Needs attention now.
    Critical,
}

impl NotificationPriority {
    /// Returns the wire representation of this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Alert => "Alert",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationStatus {
    /// Seen by staff.
    Read,
    /// Not yet seen.
    Unread,
}

impl NotificationStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Unread => "Unread",
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Read" => Ok(Self::Read),
            "Unread" => Ok(Self::Unread),
            _ => Err(DomainError::UnknownStatus {
                kind: "notification status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of record a notification links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedEntityKind {
    Order,
    Product,
    User,
    Store,
    Ticket,
}

/// A link from a notification to the record it is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedEntity {
    /// What kind of record is linked.
    pub kind: RelatedEntityKind,
    /// The linked record's identifier.
    pub id: String,
    /// Text shown for the link.
    pub display_text: String,
}

/// A message in the back-office notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: String,
    /// System-raised or staff-written.
    pub notification_type: NotificationType,
    /// Urgency.
    pub priority: NotificationPriority,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Read state.
    pub status: NotificationStatus,
    /// When the notification was raised.
    pub timestamp: OffsetDateTime,
    /// Who raised it. `System` or a staff member's name.
    pub sender: String,
    /// The record the notification is about, if any.
    pub related_entity: Option<RelatedEntity>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(NotificationPriority::Critical > NotificationPriority::Alert);
        assert!(NotificationPriority::Alert > NotificationPriority::Info);
    }

    #[test]
    fn test_related_entity_kind_wire_format() {
        let json: String = serde_json::to_string(&RelatedEntityKind::Order).unwrap();
        assert_eq!(json, "\"order\"");
    }
}
