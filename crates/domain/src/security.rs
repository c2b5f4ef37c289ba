// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Security center records.
//!
//! IP rules, sign-in attempts, live sessions, and fraud reports. The
//! security log itself lives in the audit crate; this module holds the
//! records the log describes.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Whether an IP rule admits or blocks traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpRuleType {
    /// Admit traffic from the address.
    Allow,
    /// Block traffic from the address.
    Deny,
}

impl IpRuleType {
    /// Returns the wire representation of this rule type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl FromStr for IpRuleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            _ => Err(DomainError::UnknownStatus {
                kind: "IP rule type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for IpRuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An allow or deny rule for an address or CIDR range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRule {
    /// Unique rule identifier.
    pub id: String,
    /// Address or CIDR range, such as `192.0.2.200` or `10.0.0.0/8`.
    pub ip: String,
    /// Admit or block.
    pub rule_type: IpRuleType,
    /// Why the rule exists.
    pub notes: Option<String>,
    /// When the rule was created.
    pub created_at: OffsetDateTime,
    /// Name of the staff member who created it.
    pub created_by: String,
}

impl IpRule {
    /// Creates a new IP rule.
    #[must_use]
    pub const fn new(
        id: String,
        ip: String,
        rule_type: IpRuleType,
        notes: Option<String>,
        created_at: OffsetDateTime,
        created_by: String,
    ) -> Self {
        Self {
            id,
            ip,
            rule_type,
            notes,
            created_at,
            created_by,
        }
    }
}

/// Outcome of a sign-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginStatus {
    Success,
    Failed,
}

impl LoginStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    /// Unique attempt identifier.
    pub id: String,
    /// Source address of the attempt.
    pub ip_address: String,
    /// When the attempt happened.
    pub timestamp: OffsetDateTime,
    /// Whether the attempt succeeded.
    pub status: LoginStatus,
    /// The account name the attempt targeted.
    pub user_name: String,
    /// Whether the attempt was flagged as suspicious.
    pub is_suspicious: bool,
}

/// A live staff session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    /// Unique session identifier.
    pub id: String,
    /// The signed-in user.
    pub user_id: String,
    /// The signed-in user's display name.
    pub user_name: String,
    /// Source address of the session.
    pub ip_address: String,
    /// Approximate location of the address.
    pub location: String,
    /// Browser and operating system.
    pub device: String,
    /// When the session started.
    pub login_time: OffsetDateTime,
    /// When the session last did anything.
    pub last_activity: OffsetDateTime,
}

/// What kind of record a fraud report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudEntityKind {
    User,
    Store,
}

/// Review state of a fraud report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudReportStatus {
    /// Not yet reviewed.
    Pending,
    /// Reviewed and closed.
    Resolved,
    /// Under ongoing observation.
    Watching,
}

impl FraudReportStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Watching => "watching",
        }
    }
}

impl std::fmt::Display for FraudReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A flagged account or store with a risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudReport {
    /// Unique report identifier.
    pub id: String,
    /// Whether a user or a store is flagged.
    pub entity_kind: FraudEntityKind,
    /// The flagged record's identifier.
    pub entity_id: String,
    /// The flagged record's display name.
    pub entity_name: String,
    /// Assessed risk from 0 to 10.
    pub risk_score: f64,
    /// Why the record was flagged.
    pub reason: String,
    /// When the report was filed.
    pub timestamp: OffsetDateTime,
    /// Review state.
    pub status: FraudReportStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_rule_type_wire_format() {
        let json: String = serde_json::to_string(&IpRuleType::Deny).unwrap();
        assert_eq!(json, "\"deny\"");
        let parsed: IpRuleType = serde_json::from_str("\"allow\"").unwrap();
        assert_eq!(parsed, IpRuleType::Allow);
    }

    #[test]
    fn test_ip_rule_type_parses_wire_names() {
        assert_eq!("deny".parse::<IpRuleType>().unwrap(), IpRuleType::Deny);
        assert_eq!("allow".parse::<IpRuleType>().unwrap(), IpRuleType::Allow);
        assert!("Deny".parse::<IpRuleType>().is_err());
    }

    #[test]
    fn test_fraud_status_wire_format() {
        let json: String = serde_json::to_string(&FraudReportStatus::Watching).unwrap();
        assert_eq!(json, "\"watching\"");
    }
}
