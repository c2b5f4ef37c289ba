// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Communication center conversations, messages, and support tickets.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Shape of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversationType {
    /// One staff member and one marketplace user.
    Individual,
    /// Several participants.
    Group,
    /// One-to-many announcement channel.
    Broadcast,
}

impl ConversationType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Group => "Group",
            Self::Broadcast => "Broadcast",
        }
    }
}

impl std::fmt::Display for ConversationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    /// Accepted by the platform.
    Sent,
    /// Delivered to the recipient.
    Delivered,
    /// Opened by the recipient.
    Read,
}

impl MessageStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Delivered => "Delivered",
            Self::Read => "Read",
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Waiting for an agent.
    Open,
    /// An agent is working on it.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Finished.
    Closed,
}

impl TicketStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            "Resolved" => Ok(Self::Resolved),
            "Closed" => Ok(Self::Closed),
            _ => Err(DomainError::UnknownStatus {
                kind: "ticket status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How urgently a ticket must be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Returns the wire representation of this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File category of a message attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Pdf,
    Other,
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAttachment {
    /// Original file name.
    pub file_name: String,
    /// Where the file is stored.
    pub file_url: String,
    /// File category.
    pub kind: AttachmentKind,
}

/// A single message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// The conversation this message belongs to.
    pub conversation_id: String,
    /// The sending user's identifier.
    pub sender_id: String,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub timestamp: OffsetDateTime,
    /// Delivery state.
    pub status: MessageStatus,
    /// Attached file, if any.
    pub attachment: Option<MessageAttachment>,
}

impl Message {
    /// Creates a freshly sent message with no attachment.
    #[must_use]
    pub const fn new(
        id: String,
        conversation_id: String,
        sender_id: String,
        content: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender_id,
            content,
            timestamp,
            status: MessageStatus::Sent,
            attachment: None,
        }
    }
}

/// A thread in the communication center.
///
/// The newest message is duplicated onto the conversation as a
/// snapshot so thread lists render without scanning the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier.
    pub id: String,
    /// Individual, group, or broadcast.
    pub conversation_type: ConversationType,
    /// Display name. Group and broadcast threads only.
    pub name: Option<String>,
    /// Participating user identifiers.
    pub participant_ids: Vec<String>,
    /// Snapshot of the newest message.
    pub last_message: Option<Message>,
    /// Messages the staff side has not read yet.
    pub unread_count: u32,
    /// Presence flag for the counterpart.
    pub is_online: bool,
    /// The support ticket tracking this thread, if any.
    pub ticket_id: Option<String>,
}

/// A support ticket tracking a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: String,
    /// The conversation the ticket tracks.
    pub conversation_id: String,
    /// Lifecycle status.
    pub status: TicketStatus,
    /// Urgency.
    pub priority: TicketPriority,
    /// When the ticket was opened.
    pub created_at: OffsetDateTime,
    /// When the ticket was resolved, if it has been.
    pub resolved_at: Option<OffsetDateTime>,
    /// Service level target, in hours.
    pub sla: u32,
}
