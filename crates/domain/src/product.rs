// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product catalog records.
//!
//! ## Invariants
//!
//! - When a product has media items, exactly one of them is primary.
//! - Variations are meaningful only for `ProductType::Variable` products.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;

/// Moderation status of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    /// Awaiting moderation.
    Pending,
    /// Approved and purchasable.
    Approved,
    /// Removed from the catalog.
    Removed,
    /// Returned to the supplier with requested changes.
    ChangesRequested,
}

impl ProductStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Removed => "Removed",
            Self::ChangesRequested => "ChangesRequested",
        }
    }

    /// Whether this status ends the moderation lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Removed)
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// The moderation workflow:
    /// - Pending → Approved, Removed, or `ChangesRequested`
    /// - `ChangesRequested` → Pending (resubmission)
    /// - Approved → Removed
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the moderation workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Removed)
                | (Self::Pending, Self::ChangesRequested)
                | (Self::ChangesRequested, Self::Pending)
                | (Self::Approved, Self::Removed)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("not a moderation workflow step"),
            })
        }
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Removed" => Ok(Self::Removed),
            "ChangesRequested" => Ok(Self::ChangesRequested),
            _ => Err(DomainError::UnknownStatus {
                kind: "product status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a product is a single item or has purchasable variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// One purchasable item.
    Simple,
    /// Multiple purchasable variations (size, color, ...).
    Variable,
}

impl ProductType {
    /// Returns the string representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Variable => "Variable",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable variation of a variable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Unique variation identifier.
    pub id: String,
    /// Attribute values, e.g. Color → Blue.
    pub attributes: BTreeMap<String, String>,
    /// Stock-keeping unit.
    pub sku: String,
    /// Price in minor units.
    pub price: i64,
    /// Units in stock.
    pub stock: u32,
}

/// The kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video clip.
    Video,
}

/// A media item attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Unique media identifier.
    pub id: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Storage URL.
    pub url: String,
    /// Whether this is the product's primary display item.
    pub is_primary: bool,
}

/// A product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// The supplier offering the product.
    pub supplier_id: String,
    /// Denormalized supplier name for display.
    pub supplier_name: String,
    /// Catalog category.
    pub category: String,
    /// Price in minor units.
    pub price: i64,
    /// Moderation status.
    pub status: ProductStatus,
    /// Units in stock.
    pub stock: u32,
    /// Primary image URL.
    pub image_url: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Lifetime units sold.
    pub sales: u32,
    /// The date the product was listed.
    pub created_at: Date,
    /// Simple or variable.
    pub product_type: ProductType,
    /// Variations; meaningful only for variable products.
    pub variations: Vec<Variation>,
    /// Media gallery. When non-empty, exactly one item is primary.
    pub media: Vec<Media>,
    /// Why the listing was rejected or returned, if it was.
    pub rejection_reason: Option<String>,
}

impl Product {
    /// Validates the single-primary-media invariant.
    ///
    /// An empty media list is valid; a non-empty list must flag exactly
    /// one item as primary.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrimaryMediaViolation` if the count of
    /// primary items is not exactly one.
    pub fn validate_media(&self) -> Result<(), DomainError> {
        if self.media.is_empty() {
            return Ok(());
        }
        let primary_count: usize = self.media.iter().filter(|m| m.is_primary).count();
        if primary_count == 1 {
            Ok(())
        } else {
            Err(DomainError::PrimaryMediaViolation {
                product_id: self.id.clone(),
                primary_count,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn make_product(media: Vec<Media>) -> Product {
        Product {
            id: String::from("p1"),
            name: String::from("Widget"),
            description: String::from("A widget"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Test Supplier"),
            category: String::from("Electronics"),
            price: 19900,
            status: ProductStatus::Approved,
            stock: 30,
            image_url: String::from("https://example.com/widget.jpg"),
            sku: String::from("WID-001"),
            sales: 12,
            created_at: date!(2024 - 03 - 01),
            product_type: ProductType::Simple,
            variations: vec![],
            media,
            rejection_reason: None,
        }
    }

    fn make_media(id: &str, is_primary: bool) -> Media {
        Media {
            id: id.to_string(),
            kind: MediaKind::Image,
            url: format!("https://example.com/{id}.jpg"),
            is_primary,
        }
    }

    #[test]
    fn test_empty_media_is_valid() {
        assert!(make_product(vec![]).validate_media().is_ok());
    }

    #[test]
    fn test_single_primary_is_valid() {
        let product: Product =
            make_product(vec![make_media("m1", true), make_media("m2", false)]);
        assert!(product.validate_media().is_ok());
    }

    #[test]
    fn test_no_primary_is_invalid() {
        let product: Product = make_product(vec![make_media("m1", false)]);
        assert!(matches!(
            product.validate_media(),
            Err(DomainError::PrimaryMediaViolation {
                primary_count: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_two_primaries_is_invalid() {
        let product: Product = make_product(vec![make_media("m1", true), make_media("m2", true)]);
        assert!(matches!(
            product.validate_media(),
            Err(DomainError::PrimaryMediaViolation {
                primary_count: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_strict_transition_rejects_removed_to_approved() {
        let result = ProductStatus::Removed.validate_transition(ProductStatus::Approved);
        assert!(matches!(
            result,
            Err(DomainError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_resubmission_after_changes_requested() {
        assert!(
            ProductStatus::ChangesRequested
                .validate_transition(ProductStatus::Pending)
                .is_ok()
        );
    }
}
