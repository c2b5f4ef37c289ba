// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List filters for the back-office views.
//!
//! Each filter mirrors the controls on one list page. Absent fields
//! match everything, so the default filter passes every record.
//! Text searches are case-insensitive substring matches.

use crate::order::{Order, OrderStatus};
use crate::product::{Product, ProductStatus};
use crate::store::{Store, StoreStatus};
use crate::supplier::{Supplier, SupplierStatus};
use crate::users::{
    InternalUser, InternalUserRole, InternalUserStatus, MarketplaceUser, MarketplaceUserStatus,
    MarketplaceUserType,
};
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: Date,
    /// Last day of the range.
    pub end: Date,
}

impl DateRange {
    /// Creates a range covering the `days` days up to and including
    /// `end`.
    #[must_use]
    pub fn trailing(end: Date, days: i64) -> Self {
        let start: Date = end.checked_sub(Duration::days(days)).unwrap_or(Date::MIN);
        Self { start, end }
    }

    /// Whether `date` falls inside the range, inclusive at both ends.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

fn matches_search(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Controls on the orders list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Substring matched against the order id, customer name, or any
    /// item's product name.
    pub search: Option<String>,
    /// Exact order status.
    pub status: Option<OrderStatus>,
    /// Exact supplier.
    pub supplier_id: Option<String>,
    /// Only orders placed within this many days.
    pub period_days: Option<i64>,
}

impl OrderFilter {
    /// Whether `order` passes every set control. `today` anchors the
    /// period control.
    #[must_use]
    pub fn matches(&self, order: &Order, today: Date) -> bool {
        if let Some(search) = &self.search {
            let in_items: bool = order
                .items
                .iter()
                .any(|item| matches_search(&item.product_name, search));
            if !matches_search(&order.id, search)
                && !matches_search(&order.customer_name, search)
                && !in_items
            {
                return false;
            }
        }
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }
        if self
            .supplier_id
            .as_ref()
            .is_some_and(|supplier| order.supplier_id != *supplier)
        {
            return false;
        }
        if let Some(days) = self.period_days {
            let cutoff: Date = today.checked_sub(Duration::days(days)).unwrap_or(Date::MIN);
            if order.date < cutoff {
                return false;
            }
        }
        true
    }
}

/// Controls on the marketplace users list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceUserFilter {
    /// Substring matched against the name or email.
    pub search: Option<String>,
    /// Exact account status.
    pub status: Option<MarketplaceUserStatus>,
    /// Buyer or supplier.
    pub user_type: Option<MarketplaceUserType>,
}

impl MarketplaceUserFilter {
    /// Whether `user` passes every set control.
    #[must_use]
    pub fn matches(&self, user: &MarketplaceUser) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(&user.name, search) && !matches_search(&user.email, search) {
                return false;
            }
        }
        if self.status.is_some_and(|status| user.status != status) {
            return false;
        }
        if self
            .user_type
            .is_some_and(|user_type| user.user_type != user_type)
        {
            return false;
        }
        true
    }
}

/// Controls on the internal team list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalUserFilter {
    /// Exact account status.
    pub status: Option<InternalUserStatus>,
    /// Exact built-in role.
    pub role: Option<InternalUserRole>,
}

impl InternalUserFilter {
    /// Whether `user` passes every set control.
    #[must_use]
    pub fn matches(&self, user: &InternalUser) -> bool {
        if self.status.is_some_and(|status| user.status != status) {
            return false;
        }
        if self.role.is_some_and(|role| user.role != role) {
            return false;
        }
        true
    }
}

/// Controls on the product catalog list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Substring matched against the product name.
    pub search: Option<String>,
    /// Exact moderation status.
    pub status: Option<ProductStatus>,
    /// Exact supplier.
    pub supplier_id: Option<String>,
    /// Exact category.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Whether `product` passes every set control.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(&product.name, search) {
                return false;
            }
        }
        if self.status.is_some_and(|status| product.status != status) {
            return false;
        }
        if self
            .supplier_id
            .as_ref()
            .is_some_and(|supplier| product.supplier_id != *supplier)
        {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|category| product.category != *category)
        {
            return false;
        }
        true
    }
}

/// Controls on the stores list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFilter {
    /// Exact store status.
    pub status: Option<StoreStatus>,
    /// Exact category.
    pub category: Option<String>,
}

impl StoreFilter {
    /// Whether `store` passes every set control.
    #[must_use]
    pub fn matches(&self, store: &Store) -> bool {
        if self.status.is_some_and(|status| store.status != status) {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|category| store.category != *category)
        {
            return false;
        }
        true
    }
}

/// Control on the suppliers list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierFilter {
    /// Exact review status.
    pub status: Option<SupplierStatus>,
}

impl SupplierFilter {
    /// Whether `supplier` passes the control.
    #[must_use]
    pub fn matches(&self, supplier: &Supplier) -> bool {
        !self.status.is_some_and(|status| supplier.status != status)
    }
}

/// Whether a product sits in the moderation queue.
///
/// The queue carries new submissions and resubmission candidates.
#[must_use]
pub const fn needs_moderation(product: &Product) -> bool {
    matches!(
        product.status,
        ProductStatus::Pending | ProductStatus::ChangesRequested
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::order::{LogisticStatus, OrderItem, OrderItemStatus, PaymentMethod, PaymentStatus};
    use time::macros::date;

    fn make_order() -> Order {
        Order {
            id: String::from("ord1"),
            date: date!(2024 - 07 - 10),
            buyer_id: String::from("buy1"),
            customer_name: String::from("João Silva"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            store_name: String::from("TechHub"),
            total: 150_000,
            commission: 22_500,
            marketplace_profit: 22_500,
            shipping_cost: 5_000,
            status: OrderStatus::Processing,
            payment_status: PaymentStatus::Paid,
            logistic_status: LogisticStatus::AwaitingShipment,
            payment_method: PaymentMethod::Stripe,
            business_type: String::from("B2C"),
            items: vec![OrderItem {
                id: String::from("item1"),
                product_id: String::from("prod1"),
                product_name: String::from("Quantum Laptop"),
                quantity: 1,
                unit_price: 150_000,
                status: OrderItemStatus::Fulfilled,
            }],
            events: Vec::new(),
            shipping_address: String::from("Rua A, Luanda"),
            shipping_company: String::from("Angola Express"),
            tracking_code: String::from("AE123"),
            shipped_at: None,
            delivered_at: None,
            estimated_delivery: date!(2024 - 07 - 20),
        }
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let filter: OrderFilter = OrderFilter::default();
        assert!(filter.matches(&make_order(), date!(2024 - 07 - 15)));
    }

    #[test]
    fn test_search_reaches_item_product_names() {
        let filter: OrderFilter = OrderFilter {
            search: Some(String::from("quantum")),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&make_order(), date!(2024 - 07 - 15)));
    }

    #[test]
    fn test_period_control_excludes_old_orders() {
        let filter: OrderFilter = OrderFilter {
            period_days: Some(7),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&make_order(), date!(2024 - 07 - 15)));
        assert!(!filter.matches(&make_order(), date!(2024 - 09 - 01)));
    }

    #[test]
    fn test_status_control_is_exact() {
        let filter: OrderFilter = OrderFilter {
            status: Some(OrderStatus::Delivered),
            ..OrderFilter::default()
        };
        assert!(!filter.matches(&make_order(), date!(2024 - 07 - 15)));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range: DateRange = DateRange {
            start: date!(2024 - 07 - 01),
            end: date!(2024 - 07 - 31),
        };
        assert!(range.contains(date!(2024 - 07 - 01)));
        assert!(range.contains(date!(2024 - 07 - 31)));
        assert!(!range.contains(date!(2024 - 08 - 01)));
    }

    #[test]
    fn test_moderation_queue_membership() {
        let mut product: Product = Product {
            id: String::from("prod1"),
            name: String::from("Quantum Laptop"),
            description: String::from("A laptop."),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            category: String::from("Electronics"),
            price: 150_000,
            status: ProductStatus::Pending,
            stock: 5,
            image_url: String::from("https://example.com/laptop.png"),
            sku: String::from("QL-100"),
            sales: 12,
            created_at: date!(2024 - 01 - 10),
            product_type: crate::product::ProductType::Simple,
            variations: Vec::new(),
            media: Vec::new(),
            rejection_reason: None,
        };
        assert!(needs_moderation(&product));

        product.status = ProductStatus::ChangesRequested;
        assert!(needs_moderation(&product));

        product.status = ProductStatus::Approved;
        assert!(!needs_moderation(&product));
    }
}
