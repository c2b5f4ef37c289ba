// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Communication center and notification handlers.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_audit::Actor;
use marketdesk_domain::{Conversation, Message, NotificationStatus};
use time::OffsetDateTime;

/// Sends a staff message into a conversation.
///
/// The message is appended to the global log, becomes the conversation's
/// last-message snapshot, and clears the staff-side unread counter.
pub(super) fn send_message(
    state: &mut DomainState,
    message_id: String,
    conversation_id: &str,
    content: String,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let conversation: &mut Conversation = state
        .conversations
        .iter_mut()
        .find(|conversation| conversation.id == conversation_id)
        .ok_or_else(|| CoreError::ConversationNotFound(conversation_id.to_string()))?;

    let message: Message = Message::new(
        message_id,
        conversation_id.to_string(),
        actor.id.clone(),
        content,
        now,
    );
    conversation.last_message = Some(message.clone());
    conversation.unread_count = 0;
    state.messages.push(message);
    Ok(Outcome::none())
}

/// Marks a notification read or unread.
pub(super) fn set_notification_status(
    state: &mut DomainState,
    notification_id: &str,
    status: NotificationStatus,
) -> Result<Outcome, CoreError> {
    let notification = state
        .notifications
        .iter_mut()
        .find(|notification| notification.id == notification_id)
        .ok_or_else(|| CoreError::NotificationNotFound(notification_id.to_string()))?;
    notification.status = status;
    Ok(Outcome::none())
}
