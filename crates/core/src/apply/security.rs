// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! IP rule handlers.
//!
//! These are the only mutations that write to the security log instead
//! of the audit trail.

use super::{Outcome, security_id};
use crate::error::CoreError;
use crate::state::DomainState;
use marketdesk_audit::{Actor, SecurityEvent};
use marketdesk_domain::{IpRule, IpRuleType, validate_ip_rule_address};
use time::OffsetDateTime;

/// Creates an IP allow or deny rule at the front of the rule list.
pub(super) fn add_ip_rule(
    state: &mut DomainState,
    rule_id: String,
    ip: String,
    rule_type: IpRuleType,
    notes: Option<String>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    validate_ip_rule_address(&ip)?;

    let details: String = match rule_type {
        IpRuleType::Allow => format!("Allowed IP {ip}"),
        IpRuleType::Deny => format!("Denied IP {ip}"),
    };
    let rule: IpRule = IpRule::new(rule_id, ip, rule_type, notes, now, actor.name.clone());
    state.ip_rules.insert(0, rule);

    let event: SecurityEvent = SecurityEvent::new(
        security_id(now),
        now,
        String::from("IP Rule Added"),
        actor.clone(),
        details,
    );
    Ok(Outcome::security(event))
}

/// Removes an IP rule.
pub(super) fn remove_ip_rule(
    state: &mut DomainState,
    rule_id: &str,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Outcome, CoreError> {
    let ip: String = state
        .ip_rules
        .iter()
        .find(|rule| rule.id == rule_id)
        .map(|rule| rule.ip.clone())
        .ok_or_else(|| CoreError::IpRuleNotFound(rule_id.to_string()))?;

    state.ip_rules.retain(|rule| rule.id != rule_id);

    let event: SecurityEvent = SecurityEvent::new(
        security_id(now),
        now,
        String::from("IP Rule Removed"),
        actor.clone(),
        format!("Removed rule for IP {ip}"),
    );
    Ok(Outcome::security(event))
}
