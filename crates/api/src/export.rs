// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendered exports for the reports module.
//!
//! Exports are read-only projections of the current state. Recording
//! the export itself in the audit trail is the façade's job.

use csv::WriterBuilder;
use marketdesk::DomainState;
use time::format_description::well_known::Iso8601;

use crate::error::ApiError;

/// Renders the audit log as CSV text for download.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if a timestamp cannot be formatted or
/// the CSV writer fails.
pub fn audit_log_csv(state: &DomainState) -> Result<String, ApiError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record([
            "id",
            "timestamp",
            "operator",
            "action",
            "details",
            "critical",
            "entity_kind",
            "entity_id",
        ])
        .map_err(|e| internal(format!("Failed to write CSV header: {e}")))?;

    for entry in &state.audit_trail {
        let timestamp: String = entry
            .timestamp
            .format(&Iso8601::DEFAULT)
            .map_err(|e| internal(format!("Failed to format audit timestamp: {e}")))?;
        writer
            .write_record([
                entry.id.as_str(),
                timestamp.as_str(),
                entry.actor.name.as_str(),
                entry.action.name.as_str(),
                entry.action.details.as_deref().unwrap_or(""),
                if entry.is_critical { "true" } else { "false" },
                entry.entity_kind.map_or("", |kind| kind.as_str()),
                entry.entity_id.as_deref().unwrap_or(""),
            ])
            .map_err(|e| internal(format!("Failed to write CSV row: {e}")))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| internal(format!("Failed to flush CSV writer: {e}")))?;
    String::from_utf8(bytes).map_err(|e| internal(format!("CSV output was not UTF-8: {e}")))
}

/// Serializes the full state as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if serialization fails.
pub fn state_snapshot_json(state: &DomainState) -> Result<String, ApiError> {
    serde_json::to_string_pretty(state)
        .map_err(|e| internal(format!("Failed to serialize state snapshot: {e}")))
}

const fn internal(message: String) -> ApiError {
    ApiError::Internal { message }
}
