// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transaction, dispute, and commission handlers.

use super::Outcome;
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_domain::{CommissionSettings, Dispute, DisputeStatus, TransactionStatus};
use time::OffsetDateTime;

/// Changes a transaction's settlement status.
pub(super) fn set_transaction_status(
    state: &mut DomainState,
    transaction_id: &str,
    status: TransactionStatus,
) -> Result<Outcome, CoreError> {
    let transaction = state
        .transactions
        .iter_mut()
        .find(|transaction| transaction.id == transaction_id)
        .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;
    transaction.status = status;
    Ok(Outcome::none())
}

/// Changes a dispute's status.
///
/// Setting `Resolved` stamps the resolution date with the transition
/// timestamp; any other status leaves the existing stamp in place, so a
/// reopened dispute keeps the date of its last resolution.
pub(super) fn set_dispute_status(
    state: &mut DomainState,
    dispute_id: &str,
    status: DisputeStatus,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let dispute: &mut Dispute = state
        .disputes
        .iter_mut()
        .find(|dispute| dispute.id == dispute_id)
        .ok_or_else(|| CoreError::DisputeNotFound(dispute_id.to_string()))?;
    dispute.status = status;
    if status == DisputeStatus::Resolved {
        dispute.resolved_at = Some(now.date());
    }
    Ok(Outcome::none())
}

/// Replaces the commission settings wholesale.
pub(super) fn set_commission_settings(
    state: &mut DomainState,
    settings: CommissionSettings,
) -> Outcome {
    state.commission_settings = settings;
    Outcome::none()
}
