// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Badge definitions and seller badge assignments.
//!
//! A badge definition is a template; a seller badge is one assignment of
//! a definition to a supplier. Assignments are mirrored into the
//! supplier's embedded badge list, so assignment and revocation always
//! touch both the global list and the embedded copy.
//!
//! Wire values for badge types and statuses keep the marketplace's
//! Portuguese vocabulary.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Category of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeType {
    /// Identity or business verification.
    #[serde(rename = "verificacao")]
    Verification,
    /// Granted by a commercial plan.
    #[serde(rename = "plano")]
    Plan,
    /// Earned through trading history.
    #[serde(rename = "confianca")]
    Trust,
    /// Time-limited promotional marker.
    #[serde(rename = "promocional")]
    Promotional,
}

impl BadgeType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verification => "verificacao",
            Self::Plan => "plano",
            Self::Trust => "confianca",
            Self::Promotional => "promocional",
        }
    }
}

impl FromStr for BadgeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verificacao" => Ok(Self::Verification),
            "plano" => Ok(Self::Plan),
            "confianca" => Ok(Self::Trust),
            "promocional" => Ok(Self::Promotional),
            _ => Err(DomainError::UnknownStatus {
                kind: "badge type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BadgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display status of a seller badge assignment.
///
/// The stored status is display state; expiry computations use the
/// assignment's expiration date, not this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerBadgeStatus {
    /// Shown on the seller's profile.
    #[serde(rename = "ativo")]
    Active,
    /// Past its expiration date.
    #[serde(rename = "expirado")]
    Expired,
    /// Revoked by staff.
    #[serde(rename = "removido")]
    Removed,
}

impl SellerBadgeStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Expired => "expirado",
            Self::Removed => "removido",
        }
    }
}

impl FromStr for SellerBadgeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ativo" => Ok(Self::Active),
            "expirado" => Ok(Self::Expired),
            "removido" => Ok(Self::Removed),
            _ => Err(DomainError::UnknownStatus {
                kind: "seller badge status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SellerBadgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rules for automatic badge assignment.
///
/// All criteria present must hold for the badge to be granted
/// automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BadgeRules {
    /// Requires the supplier to be on this plan.
    pub plan_id: Option<String>,
    /// Requires at least this many lifetime sales, in minor units.
    pub min_sales: Option<i64>,
    /// Requires at least this average rating.
    pub min_rating: Option<f64>,
    /// Requires the supplier to have no open disputes.
    pub no_disputes: Option<bool>,
}

/// A badge template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    /// Unique definition identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Badge category.
    pub badge_type: BadgeType,
    /// Icon identifier.
    pub icon: String,
    /// Hex display color.
    pub color: String,
    /// Visual prominence, 1 (normal) to 3 (maximum).
    pub visual_level: u8,
    /// How long assignments stay valid, in days. `None` means perpetual.
    pub valid_for_days: Option<u32>,
    /// Whether the badge is granted automatically by rules.
    pub is_automatic: bool,
    /// Whether the definition may currently be assigned.
    pub is_active: bool,
    /// Criteria for automatic assignment.
    pub rules: BadgeRules,
    /// The date the definition was created.
    pub created_at: Date,
    /// The date the definition was last edited.
    pub updated_at: Date,
    /// Whether assignment validity is shown publicly by default.
    pub display_validity_publicly: bool,
}

/// One assignment of a badge definition to a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerBadge {
    /// Unique assignment identifier.
    pub id: String,
    /// The supplier holding the badge.
    pub seller_id: String,
    /// The badge definition assigned.
    pub badge_id: String,
    /// The date the assignment began.
    pub start_date: Date,
    /// The date the assignment expires. `None` means perpetual.
    pub expiration_date: Option<Date>,
    /// Display status.
    pub status: SellerBadgeStatus,
    /// Whether validity is shown publicly.
    pub display_validity_publicly: bool,
}

impl SellerBadge {
    /// Creates a new active assignment.
    #[must_use]
    pub const fn new(
        id: String,
        seller_id: String,
        badge_id: String,
        start_date: Date,
        expiration_date: Option<Date>,
        display_validity_publicly: bool,
    ) -> Self {
        Self {
            id,
            seller_id,
            badge_id,
            start_date,
            expiration_date,
            status: SellerBadgeStatus::Active,
            display_validity_publicly,
        }
    }

    /// Whether the assignment is past its expiration date on `today`.
    ///
    /// Perpetual assignments never lapse.
    #[must_use]
    pub fn is_lapsed(&self, today: Date) -> bool {
        self.expiration_date
            .is_some_and(|expiration| expiration < today)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_assignment_is_active() {
        let badge: SellerBadge = SellerBadge::new(
            String::from("sb1"),
            String::from("sup1"),
            String::from("bd1"),
            date!(2024 - 07 - 01),
            Some(date!(2025 - 07 - 01)),
            true,
        );
        assert_eq!(badge.status, SellerBadgeStatus::Active);
    }

    #[test]
    fn test_perpetual_assignment_never_lapses() {
        let badge: SellerBadge = SellerBadge::new(
            String::from("sb1"),
            String::from("sup1"),
            String::from("bd1"),
            date!(2024 - 07 - 01),
            None,
            false,
        );
        assert!(!badge.is_lapsed(date!(2099 - 01 - 01)));
    }

    #[test]
    fn test_assignment_lapses_after_expiration() {
        let badge: SellerBadge = SellerBadge::new(
            String::from("sb1"),
            String::from("sup1"),
            String::from("bd1"),
            date!(2024 - 07 - 01),
            Some(date!(2024 - 08 - 01)),
            false,
        );
        assert!(!badge.is_lapsed(date!(2024 - 08 - 01)));
        assert!(badge.is_lapsed(date!(2024 - 08 - 02)));
    }

    #[test]
    fn test_badge_type_wire_values() {
        assert_eq!(BadgeType::Verification.as_str(), "verificacao");
        assert_eq!(
            "promocional".parse::<BadgeType>().unwrap(),
            BadgeType::Promotional
        );
    }
}
