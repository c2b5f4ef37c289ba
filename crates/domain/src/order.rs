// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order records.
//!
//! An order carries three independently-evolving state axes: the order
//! status (fulfilment workflow), the payment status, and the logistic
//! status. Items carry their own per-item status. The event list is an
//! append-only chronological timeline.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, not yet processed.
    Pending,
    /// Being prepared by the supplier.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the buyer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
    /// Refunded after delivery.
    Refunded,
}

impl OrderStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
        }
    }

    /// Whether this status ends the fulfilment lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Refunded)
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// The fulfilment workflow:
    /// - Pending → Processing or Cancelled
    /// - Processing → Shipped or Cancelled
    /// - Shipped → Delivered
    /// - Delivered → Refunded
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the fulfilment workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Pending, Self::Processing)
                | (Self::Pending, Self::Cancelled)
                | (Self::Processing, Self::Shipped)
                | (Self::Processing, Self::Cancelled)
                | (Self::Shipped, Self::Delivered)
                | (Self::Delivered, Self::Refunded)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("orders move forward through the fulfilment workflow"),
            })
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            "Refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::UnknownStatus {
                kind: "order status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Payment not yet captured.
    Pending,
    /// Payment captured.
    Paid,
    /// Payment held or blocked.
    Blocked,
    /// Payment window expired or the charge failed.
    Expired,
}

impl PaymentStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Blocked => "Blocked",
            Self::Expired => "Expired",
        }
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// - Pending → Paid, Blocked, or Expired
    /// - Blocked → Paid
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the payment workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Pending, Self::Paid)
                | (Self::Pending, Self::Blocked)
                | (Self::Pending, Self::Expired)
                | (Self::Blocked, Self::Paid)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("not a payment workflow step"),
            })
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Paid" => Ok(Self::Paid),
            "Blocked" => Ok(Self::Blocked),
            "Expired" => Ok(Self::Expired),
            _ => Err(DomainError::UnknownStatus {
                kind: "payment status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shipping progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogisticStatus {
    /// Waiting for the supplier to hand the parcel to the carrier.
    #[serde(rename = "Awaiting Shipment")]
    AwaitingShipment,
    /// With the carrier.
    #[serde(rename = "In Transit")]
    InTransit,
    /// On the delivery vehicle.
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    /// Delivered to the buyer.
    Delivered,
}

impl LogisticStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingShipment => "Awaiting Shipment",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// Shipping only moves forward:
    /// Awaiting Shipment → In Transit → Out for Delivery → Delivered.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition
    /// moves backward or skips nothing meaningful.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::AwaitingShipment, Self::InTransit)
                | (Self::InTransit, Self::OutForDelivery)
                | (Self::OutForDelivery, Self::Delivered)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("shipping progress cannot move backward"),
            })
        }
    }
}

impl FromStr for LogisticStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Awaiting Shipment" => Ok(Self::AwaitingShipment),
            "In Transit" => Ok(Self::InTransit),
            "Out for Delivery" => Ok(Self::OutForDelivery),
            "Delivered" => Ok(Self::Delivered),
            _ => Err(DomainError::UnknownStatus {
                kind: "logistic status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for LogisticStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a single order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderItemStatus {
    /// Delivered and kept.
    Fulfilled,
    /// Money returned to the buyer.
    Refunded,
    /// Sent back by the buyer.
    Returned,
}

impl OrderItemStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fulfilled => "Fulfilled",
            Self::Refunded => "Refunded",
            Self::Returned => "Returned",
        }
    }

    /// Checks whether a strict transition from this status to `target` is valid.
    ///
    /// - Fulfilled → Returned or Refunded
    /// - Returned → Refunded
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not part of the return workflow.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        let allowed: bool = matches!(
            (self, target),
            (Self::Fulfilled, Self::Returned)
                | (Self::Fulfilled, Self::Refunded)
                | (Self::Returned, Self::Refunded)
        );
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: String::from(self.as_str()),
                to: String::from(target.as_str()),
                reason: String::from("not a return workflow step"),
            })
        }
    }
}

impl FromStr for OrderItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fulfilled" => Ok(Self::Fulfilled),
            "Refunded" => Ok(Self::Refunded),
            "Returned" => Ok(Self::Returned),
            _ => Err(DomainError::UnknownStatus {
                kind: "order item status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OrderItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment processor used for an order or transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card payment via Stripe.
    Stripe,
    /// PayPal wallet.
    PayPal,
    /// Pix instant transfer.
    Pix,
}

impl PaymentMethod {
    /// Returns the string representation of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe",
            Self::PayPal => "PayPal",
            Self::Pix => "Pix",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique item identifier within the order.
    pub id: String,
    /// The purchased product.
    pub product_id: String,
    /// Denormalized product name for display.
    pub product_name: String,
    /// Units purchased.
    pub quantity: u32,
    /// Price per unit in minor units.
    pub unit_price: i64,
    /// Per-item fulfilment status.
    pub status: OrderItemStatus,
}

/// An entry in an order's event timeline.
///
/// The label is free text; it may name an order status or an
/// out-of-band milestone such as a payment confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// What happened.
    pub label: String,
    /// When it happened.
    pub timestamp: OffsetDateTime,
    /// Free-text detail.
    pub details: String,
}

impl OrderEvent {
    /// Creates a new event entry.
    #[must_use]
    pub const fn new(label: String, timestamp: OffsetDateTime, details: String) -> Self {
        Self {
            label,
            timestamp,
            details,
        }
    }
}

/// A marketplace order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// The date the order was placed.
    pub date: Date,
    /// The purchasing marketplace user.
    pub buyer_id: String,
    /// Denormalized buyer name for display.
    pub customer_name: String,
    /// The supplier fulfilling the order.
    pub supplier_id: String,
    /// Denormalized supplier name for display.
    pub supplier_name: String,
    /// Denormalized store name for display.
    pub store_name: String,
    /// Order total in minor units.
    pub total: i64,
    /// Marketplace commission on this order, in minor units.
    pub commission: i64,
    /// What the marketplace keeps after costs, in minor units.
    pub marketplace_profit: i64,
    /// Shipping cost in minor units.
    pub shipping_cost: i64,
    /// Fulfilment status.
    pub status: OrderStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Shipping progress.
    pub logistic_status: LogisticStatus,
    /// Payment processor.
    pub payment_method: PaymentMethod,
    /// Business relationship category, such as `B2C`.
    pub business_type: String,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Append-only chronological timeline.
    pub events: Vec<OrderEvent>,
    /// Delivery address.
    pub shipping_address: String,
    /// Carrier name.
    pub shipping_company: String,
    /// Carrier tracking code.
    pub tracking_code: String,
    /// When the parcel was shipped, if it was.
    pub shipped_at: Option<Date>,
    /// When the parcel was delivered, if it was.
    pub delivered_at: Option<Date>,
    /// Estimated delivery date.
    pub estimated_delivery: Date,
}

impl Order {
    /// Returns the item with the given id, if present.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
