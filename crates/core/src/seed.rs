// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Synthetic demo dataset.
//!
//! Builds a fully linked workspace snapshot anchored on a caller-supplied
//! date so demos and tests see the same records whenever they run. Recent
//! activity (orders, logs, plan cycles) floats with the anchor; contractual
//! dates such as verification terms stay fixed. Collections the transition
//! layer keeps newest-first are seeded in that order.

use std::collections::BTreeMap;

use marketdesk_audit::{Action, Actor, AuditEntityKind, AuditEntry, SecurityEvent};
use marketdesk_domain::{
    ActiveSession, Alert, AlertType, BadgeDefinition, BadgeRules, BadgeType, BusinessType,
    CommissionSettings, Conversation, ConversationType, Coupon, CouponStatus, CouponType, Dispute,
    DisputeStatus, Document, DocumentStatus, FraudEntityKind, FraudReport, FraudReportStatus,
    InternalUser, InternalUserRole, InternalUserStatus, IpRule, IpRuleType, LoginAttempt,
    LoginStatus, LogisticStatus, MarketplaceUser, MarketplaceUserStatus, MarketplaceUserType,
    Media, MediaKind, Message, MessageStatus, MonthlyData, Notification, NotificationPriority,
    NotificationStatus, NotificationType, Order, OrderEvent, OrderItem, OrderItemStatus,
    OrderStatus, PaidVerification, PaymentMethod, PaymentStatus, PermissionAction, Permissions,
    Plan, Product, ProductStatus, ProductType, RelatedEntity, RelatedEntityKind, Role, SellerBadge,
    SellerBadgeStatus, SellerSalesStatus, StatusHistoryEntry, Store, StoreStatus, Supplier,
    SupplierStatus, SystemModule, Ticket, TicketPriority, TicketStatus, Transaction,
    TransactionKind, TransactionStatus, Variation, VerificationAction, VerificationLog,
    VerificationPlan,
};
use time::macros::{date, datetime, time};
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

use crate::state::DomainState;

/// Builds the demo dataset anchored on `today`.
#[must_use]
pub fn demo_state(today: Date) -> DomainState {
    let seller_badges = seller_badges(today);
    let paid_verifications = paid_verifications();
    let suppliers = suppliers(today, &seller_badges, &paid_verifications);
    let products = products(today);
    let transactions = transactions(today);
    let stores = stores(&suppliers, &products, &transactions);
    let internal_users = internal_users(today);
    let roles = roles(&internal_users);
    let marketplace_users = marketplace_users(today, &suppliers);
    let messages = messages(today);
    let conversations = conversations(&messages);

    DomainState {
        suppliers,
        stores,
        products,
        orders: orders(today),
        transactions,
        disputes: disputes(today),
        marketplace_users,
        internal_users,
        roles,
        plans: plans(today),
        badge_definitions: badge_definitions(today),
        seller_badges,
        paid_verifications,
        verification_logs: verification_logs(),
        coupons: coupons(today),
        commission_settings: commission_settings(),
        notifications: notifications(today),
        conversations,
        messages,
        tickets: tickets(today),
        ip_rules: ip_rules(today),
        login_attempts: login_attempts(today),
        active_sessions: active_sessions(today),
        fraud_reports: fraud_reports(today),
        audit_trail: audit_trail(today),
        security_events: security_events(today),
        monthly_data: monthly_data(),
        alerts: alerts(today),
    }
}

const fn days_ago(today: Date, days: i64) -> Date {
    today.saturating_sub(Duration::days(days))
}

const fn days_ahead(today: Date, days: i64) -> Date {
    today.saturating_add(Duration::days(days))
}

const fn at(date: Date, time_of_day: Time) -> OffsetDateTime {
    PrimitiveDateTime::new(date, time_of_day).assume_utc()
}

fn plans(today: Date) -> Vec<Plan> {
    vec![
        Plan {
            id: String::from("plan-silver"),
            name: String::from("Silver"),
            monthly_volume_limit: 600_000,
            transaction_limit: 150_000,
            withdrawal_request_limit: 250_000,
            search_weight: 1,
            allows_manual_expansion: false,
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
        },
        Plan {
            id: String::from("plan-gold"),
            name: String::from("Gold"),
            monthly_volume_limit: 5_000_000,
            transaction_limit: 1_000_000,
            withdrawal_request_limit: 3_000_000,
            search_weight: 2,
            allows_manual_expansion: false,
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
        },
        Plan {
            id: String::from("plan-premium"),
            name: String::from("Premium"),
            monthly_volume_limit: 10_000_000,
            transaction_limit: 2_000_000,
            withdrawal_request_limit: 10_000_000,
            search_weight: 3,
            allows_manual_expansion: true,
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn roles(internal_users: &[InternalUser]) -> Vec<Role> {
    use PermissionAction::{
        Approve, Create, CriticalStatusChange, Delete, Edit, Export, FinancialActions, View,
    };

    let mut roles = vec![
        Role {
            id: String::from("role-super-admin"),
            name: String::from("Super Admin"),
            description: String::from(
                "Acesso total a todas as funcionalidades, incluindo gestão da equipa interna e permissões.",
            ),
            permissions: Permissions::from([
                (SystemModule::Dashboard, vec![View]),
                (SystemModule::Users, vec![View, Create, Edit, Delete]),
                (
                    SystemModule::Products,
                    vec![View, Create, Edit, Delete, Approve, Export],
                ),
                (SystemModule::Orders, vec![View, Edit, CriticalStatusChange]),
                (SystemModule::Financials, vec![View, FinancialActions, Export]),
                (SystemModule::Moderation, vec![View, Approve]),
                (SystemModule::Communication, vec![View, Create, Delete]),
                (SystemModule::Notifications, vec![View, Create, Delete]),
                (SystemModule::Marketing, vec![View, Create, Edit, Delete]),
                (SystemModule::Reports, vec![View, Export]),
                (SystemModule::Logistics, vec![View, Edit]),
                (SystemModule::Security, vec![View, Create, Edit, Delete]),
                (SystemModule::Integrations, vec![View, Edit]),
                (SystemModule::Settings, vec![View, Edit]),
                (SystemModule::Audit, vec![View, Export]),
                (SystemModule::Permissions, vec![View, Edit]),
            ]),
            user_count: 0,
            hierarchy_level: 1,
        },
        Role {
            id: String::from("role-admin"),
            name: String::from("Admin Financeiro"),
            description: String::from(
                "Acesso a todas as funcionalidades financeiras, pedidos e relatórios.",
            ),
            permissions: Permissions::from([
                (SystemModule::Dashboard, vec![View]),
                (SystemModule::Financials, vec![View, FinancialActions, Export]),
                (SystemModule::Orders, vec![View, Edit]),
                (SystemModule::Reports, vec![View, Export]),
            ]),
            user_count: 0,
            hierarchy_level: 2,
        },
        Role {
            id: String::from("role-moderator"),
            name: String::from("Moderador"),
            description: String::from(
                "Acesso a moderação de produtos, lojas e comunicação com usuários.",
            ),
            permissions: Permissions::from([
                (SystemModule::Dashboard, vec![View]),
                (SystemModule::Moderation, vec![View, Approve]),
                (SystemModule::Products, vec![View, Edit, Approve]),
                (SystemModule::Communication, vec![View]),
            ]),
            user_count: 0,
            hierarchy_level: 3,
        },
        Role {
            id: String::from("role-support"),
            name: String::from("Suporte"),
            description: String::from(
                "Acesso de leitura a contas de utilizadores e comunicação com usuários.",
            ),
            permissions: Permissions::from([
                (SystemModule::Dashboard, vec![View]),
                (SystemModule::Users, vec![View]),
                (SystemModule::Communication, vec![View, Create]),
                (SystemModule::Notifications, vec![View]),
            ]),
            user_count: 0,
            hierarchy_level: 4,
        },
    ];

    for role in &mut roles {
        let holders = internal_users
            .iter()
            .filter(|user| user.role_ids.contains(&role.id))
            .count();
        role.user_count = u32::try_from(holders).unwrap_or(u32::MAX);
    }
    roles
}

fn badge_definitions(today: Date) -> Vec<BadgeDefinition> {
    vec![
        BadgeDefinition {
            id: String::from("badge-verified"),
            name: String::from("Selo Verificado"),
            description: String::from(
                "Atribuído automaticamente após a validação de BI ou NIF.",
            ),
            badge_type: BadgeType::Verification,
            icon: String::from("ShieldCheckIcon"),
            color: String::from("#34D399"),
            visual_level: 2,
            valid_for_days: None,
            is_automatic: true,
            is_active: true,
            rules: BadgeRules::default(),
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
            display_validity_publicly: false,
        },
        BadgeDefinition {
            id: String::from("badge-gold"),
            name: String::from("Vendedor Gold"),
            description: String::from("Atribuído a vendedores com o plano Gold ativo."),
            badge_type: BadgeType::Plan,
            icon: String::from("StarIcon"),
            color: String::from("#FBBF24"),
            visual_level: 2,
            valid_for_days: None,
            is_automatic: true,
            is_active: true,
            rules: BadgeRules {
                plan_id: Some(String::from("plan-gold")),
                min_sales: None,
                min_rating: None,
                no_disputes: None,
            },
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
            display_validity_publicly: true,
        },
        BadgeDefinition {
            id: String::from("badge-premium-angola"),
            name: String::from("Premium Angola"),
            description: String::from(
                "Selo de destaque máximo para vendedores no plano Premium.",
            ),
            badge_type: BadgeType::Plan,
            icon: String::from("SparklesIcon"),
            color: String::from("#A78BFA"),
            visual_level: 3,
            valid_for_days: Some(365),
            is_automatic: true,
            is_active: true,
            rules: BadgeRules {
                plan_id: Some(String::from("plan-premium")),
                min_sales: None,
                min_rating: None,
                no_disputes: None,
            },
            created_at: days_ago(today, 365),
            updated_at: days_ago(today, 10),
            display_validity_publicly: true,
        },
    ]
}

fn seller_badges(today: Date) -> Vec<SellerBadge> {
    vec![
        SellerBadge {
            id: String::from("sb1"),
            seller_id: String::from("sup1"),
            badge_id: String::from("badge-verified"),
            start_date: days_ago(today, 300),
            expiration_date: None,
            status: SellerBadgeStatus::Active,
            display_validity_publicly: false,
        },
        SellerBadge {
            id: String::from("sb2"),
            seller_id: String::from("sup1"),
            badge_id: String::from("badge-premium-angola"),
            start_date: days_ago(today, 250),
            expiration_date: Some(days_ahead(today, 115)),
            status: SellerBadgeStatus::Active,
            display_validity_publicly: true,
        },
        SellerBadge {
            id: String::from("sb3"),
            seller_id: String::from("sup3"),
            badge_id: String::from("badge-verified"),
            start_date: days_ago(today, 400),
            expiration_date: None,
            status: SellerBadgeStatus::Active,
            display_validity_publicly: false,
        },
        SellerBadge {
            id: String::from("sb4"),
            seller_id: String::from("sup3"),
            badge_id: String::from("badge-gold"),
            start_date: days_ago(today, 350),
            expiration_date: Some(days_ahead(today, 15)),
            status: SellerBadgeStatus::Active,
            display_validity_publicly: true,
        },
        SellerBadge {
            id: String::from("sb5"),
            seller_id: String::from("sup5"),
            badge_id: String::from("badge-verified"),
            start_date: days_ago(today, 150),
            expiration_date: None,
            status: SellerBadgeStatus::Active,
            display_validity_publicly: false,
        },
        SellerBadge {
            id: String::from("sb6"),
            seller_id: String::from("sup4"),
            badge_id: String::from("badge-verified"),
            start_date: days_ago(today, 450),
            expiration_date: Some(days_ago(today, 400)),
            status: SellerBadgeStatus::Expired,
            display_validity_publicly: false,
        },
        SellerBadge {
            id: String::from("sb7"),
            seller_id: String::from("sup2"),
            badge_id: String::from("badge-verified"),
            start_date: days_ago(today, 200),
            expiration_date: None,
            status: SellerBadgeStatus::Active,
            display_validity_publicly: false,
        },
    ]
}

fn paid_verifications() -> Vec<PaidVerification> {
    vec![
        PaidVerification {
            id: String::from("pv1"),
            supplier_id: String::from("sup1"),
            plan: VerificationPlan::PremiumGoldPaid,
            business_type: String::from("B2B"),
            payment_status: PaymentStatus::Paid,
            approved_by: String::from("int-usr1"),
            approved_at: date!(2024 - 01 - 01),
            expires_at: date!(2025 - 01 - 01),
            active: true,
            price: 50_000,
        },
        PaidVerification {
            id: String::from("pv2"),
            supplier_id: String::from("sup4"),
            plan: VerificationPlan::BasicPaid,
            business_type: String::from("C2C"),
            payment_status: PaymentStatus::Expired,
            approved_by: String::from("int-usr1"),
            approved_at: date!(2023 - 03 - 10),
            expires_at: date!(2024 - 03 - 10),
            active: false,
            price: 15_000,
        },
    ]
}

fn verification_logs() -> Vec<VerificationLog> {
    vec![
        VerificationLog {
            id: String::from("vlog1"),
            verification_id: String::from("pv1"),
            action: VerificationAction::Assigned,
            performed_by: String::from("int-usr1"),
            timestamp: datetime!(2024-01-01 10:00 UTC),
            note: Some(String::from("Initial assignment for Premium Gold.")),
        },
        VerificationLog {
            id: String::from("vlog2"),
            verification_id: String::from("pv2"),
            action: VerificationAction::Assigned,
            performed_by: String::from("int-usr1"),
            timestamp: datetime!(2023-03-10 10:00 UTC),
            note: Some(String::from("Basic verification approved.")),
        },
    ]
}

fn badges_for(seller_id: &str, seller_badges: &[SellerBadge]) -> Vec<SellerBadge> {
    seller_badges
        .iter()
        .filter(|badge| badge.seller_id == seller_id)
        .cloned()
        .collect()
}

fn verifications_for(
    supplier_id: &str,
    verifications: &[PaidVerification],
) -> Vec<PaidVerification> {
    verifications
        .iter()
        .filter(|verification| verification.supplier_id == supplier_id)
        .cloned()
        .collect()
}

#[allow(clippy::too_many_lines)]
fn suppliers(
    today: Date,
    seller_badges: &[SellerBadge],
    verifications: &[PaidVerification],
) -> Vec<Supplier> {
    vec![
        Supplier {
            id: String::from("sup1"),
            name: String::from("Tech Solutions Inc."),
            store_id: String::from("store1"),
            store_name: String::from("TechHub"),
            email: String::from("contact@techsolutions.com"),
            status: SupplierStatus::Approved,
            supplier_score: 95,
            joined_date: date!(2023 - 01 - 15),
            documents: vec![
                Document {
                    id: String::from("doc1"),
                    name: String::from("Contrato Social"),
                    url: String::from(
                        "https://placehold.co/600x800/2d3748/e2e8f0?text=Contrato+Social",
                    ),
                    status: DocumentStatus::Approved,
                    submitted_date: date!(2023 - 01 - 10),
                },
                Document {
                    id: String::from("doc2"),
                    name: String::from("Comprovante de Endereço"),
                    url: String::from(
                        "https://placehold.co/600x800/2d3748/e2e8f0?text=Comprovante+de+Endereço",
                    ),
                    status: DocumentStatus::Approved,
                    submitted_date: date!(2023 - 01 - 10),
                },
            ],
            average_rating: 4.8,
            review_count: 150,
            unresolved_complaints: 1,
            badges: badges_for("sup1", seller_badges),
            paid_verifications: verifications_for("sup1", verifications),
            total_orders: 160,
            status_history: vec![
                StatusHistoryEntry::new(
                    SupplierStatus::Pending,
                    datetime!(2023-01-14 10:00 UTC),
                    String::from("System"),
                ),
                StatusHistoryEntry::new(
                    SupplierStatus::Approved,
                    datetime!(2023-01-15 12:30 UTC),
                    String::from("Alice Johnson"),
                ),
            ],
            plan_id: String::from("plan-premium"),
            monthly_sales_volume: 8_500_000,
            cycle_start_date: days_ago(today, 20),
            cycle_end_date: days_ahead(today, 10),
            sales_status: SellerSalesStatus::Active,
            manual_expansion_amount: Some(12_000_000),
        },
        Supplier {
            id: String::from("sup2"),
            name: String::from("Global Goods Co."),
            store_id: String::from("store2"),
            store_name: String::from("GlobalMart"),
            email: String::from("support@globalgoods.co"),
            status: SupplierStatus::Pending,
            supplier_score: 78,
            joined_date: date!(2023 - 03 - 22),
            documents: vec![Document {
                id: String::from("doc3"),
                name: String::from("ID do Vendedor"),
                url: String::from(
                    "https://placehold.co/600x800/2d3748/e2e8f0?text=ID+do+Vendedor",
                ),
                status: DocumentStatus::Pending,
                submitted_date: date!(2023 - 03 - 20),
            }],
            average_rating: 4.2,
            review_count: 80,
            unresolved_complaints: 3,
            badges: badges_for("sup2", seller_badges),
            paid_verifications: verifications_for("sup2", verifications),
            total_orders: 90,
            status_history: vec![StatusHistoryEntry::new(
                SupplierStatus::Pending,
                datetime!(2023-03-22 10:00 UTC),
                String::from("System"),
            )],
            plan_id: String::from("plan-silver"),
            monthly_sales_volume: 550_000,
            cycle_start_date: days_ago(today, 15),
            cycle_end_date: days_ahead(today, 15),
            sales_status: SellerSalesStatus::Active,
            manual_expansion_amount: None,
        },
        Supplier {
            id: String::from("sup3"),
            name: String::from("Artisan Crafts"),
            store_id: String::from("store3"),
            store_name: String::from("Handmade Haven"),
            email: String::from("artisan@crafts.com"),
            status: SupplierStatus::Approved,
            supplier_score: 92,
            joined_date: date!(2022 - 11 - 30),
            documents: vec![Document {
                id: String::from("doc4"),
                name: String::from("Certificado de Artesão"),
                url: String::from("https://placehold.co/600x800/2d3748/e2e8f0?text=Certificado"),
                status: DocumentStatus::Approved,
                submitted_date: date!(2022 - 11 - 28),
            }],
            average_rating: 4.9,
            review_count: 250,
            unresolved_complaints: 0,
            badges: badges_for("sup3", seller_badges),
            paid_verifications: verifications_for("sup3", verifications),
            total_orders: 260,
            status_history: vec![
                StatusHistoryEntry::new(
                    SupplierStatus::Pending,
                    datetime!(2022-11-29 10:00 UTC),
                    String::from("System"),
                ),
                StatusHistoryEntry::new(
                    SupplierStatus::Approved,
                    datetime!(2022-11-30 15:00 UTC),
                    String::from("Bob Williams"),
                ),
            ],
            plan_id: String::from("plan-gold"),
            monthly_sales_volume: 4_800_000,
            cycle_start_date: days_ago(today, 25),
            cycle_end_date: days_ahead(today, 5),
            sales_status: SellerSalesStatus::Active,
            manual_expansion_amount: None,
        },
        Supplier {
            id: String::from("sup4"),
            name: String::from("Office Supplies Ltd."),
            store_id: String::from("store4"),
            store_name: String::from("OfficePro"),
            email: String::from("sales@officesupplies.com"),
            status: SupplierStatus::Blocked,
            supplier_score: 65,
            joined_date: date!(2023 - 02 - 10),
            documents: vec![Document {
                id: String::from("doc5"),
                name: String::from("Registro Comercial"),
                url: String::from(
                    "https://placehold.co/600x800/2d3748/e2e8f0?text=Registro+Comercial",
                ),
                status: DocumentStatus::Rejected,
                submitted_date: date!(2023 - 02 - 08),
            }],
            average_rating: 3.5,
            review_count: 45,
            unresolved_complaints: 8,
            badges: badges_for("sup4", seller_badges),
            paid_verifications: verifications_for("sup4", verifications),
            total_orders: 50,
            status_history: vec![
                StatusHistoryEntry::new(
                    SupplierStatus::Pending,
                    datetime!(2023-02-09 10:00 UTC),
                    String::from("System"),
                ),
                StatusHistoryEntry::new(
                    SupplierStatus::Approved,
                    datetime!(2023-02-10 11:00 UTC),
                    String::from("Alice Johnson"),
                ),
                StatusHistoryEntry::new(
                    SupplierStatus::Blocked,
                    datetime!(2024-05-10 18:00 UTC),
                    String::from("Alice Johnson"),
                ),
            ],
            plan_id: String::from("plan-silver"),
            monthly_sales_volume: 600_000,
            cycle_start_date: days_ago(today, 18),
            cycle_end_date: days_ahead(today, 12),
            sales_status: SellerSalesStatus::Blocked,
            manual_expansion_amount: None,
        },
        Supplier {
            id: String::from("sup5"),
            name: String::from("Green Produce"),
            store_id: String::from("store5"),
            store_name: String::from("FarmFresh"),
            email: String::from("contact@greenproduce.farm"),
            status: SupplierStatus::Approved,
            supplier_score: 88,
            joined_date: date!(2023 - 05 - 01),
            documents: vec![Document {
                id: String::from("doc6"),
                name: String::from("Certificação Orgânica"),
                url: String::from(
                    "https://placehold.co/600x800/2d3748/e2e8f0?text=Certificação+Orgânica",
                ),
                status: DocumentStatus::Approved,
                submitted_date: date!(2023 - 04 - 28),
            }],
            average_rating: 4.6,
            review_count: 120,
            unresolved_complaints: 2,
            badges: badges_for("sup5", seller_badges),
            paid_verifications: verifications_for("sup5", verifications),
            total_orders: 130,
            status_history: vec![
                StatusHistoryEntry::new(
                    SupplierStatus::Pending,
                    datetime!(2023-04-30 10:00 UTC),
                    String::from("System"),
                ),
                StatusHistoryEntry::new(
                    SupplierStatus::Approved,
                    datetime!(2023-05-01 10:00 UTC),
                    String::from("Bob Williams"),
                ),
            ],
            plan_id: String::from("plan-gold"),
            monthly_sales_volume: 1_200_000,
            cycle_start_date: days_ago(today, 22),
            cycle_end_date: days_ahead(today, 8),
            sales_status: SellerSalesStatus::Active,
            manual_expansion_amount: None,
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn products(today: Date) -> Vec<Product> {
    vec![
        Product {
            id: String::from("prod1"),
            name: String::from("Laptop Gamer Pro X"),
            description: String::from(
                "High-end gaming laptop with RTX 4090, 32GB RAM, 2TB SSD.",
            ),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            category: String::from("Electronics"),
            price: 950_000,
            status: ProductStatus::Approved,
            stock: 50,
            image_url: String::from(
                "https://placehold.co/600x400/1a202c/e2e8f0?text=Laptop+Pro+X",
            ),
            sku: String::from("LPX-4090-TS"),
            sales: 120,
            created_at: days_ago(today, 150),
            product_type: ProductType::Simple,
            variations: Vec::new(),
            media: vec![
                Media {
                    id: String::from("m1"),
                    kind: MediaKind::Image,
                    url: String::from(
                        "https://placehold.co/600x400/1a202c/e2e8f0?text=Laptop+Pro+X+1",
                    ),
                    is_primary: true,
                },
                Media {
                    id: String::from("m2"),
                    kind: MediaKind::Image,
                    url: String::from(
                        "https://placehold.co/600x400/1a202c/e2e8f0?text=Laptop+Pro+X+2",
                    ),
                    is_primary: false,
                },
            ],
            rejection_reason: None,
        },
        Product {
            id: String::from("prod2"),
            name: String::from("Teclado Mecânico RGB"),
            description: String::from(
                "Mechanical keyboard with customizable RGB backlighting and Cherry MX Blue switches.",
            ),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            category: String::from("Electronics"),
            price: 85_000,
            status: ProductStatus::Approved,
            stock: 0,
            image_url: String::from(
                "https://placehold.co/600x400/1a202c/e2e8f0?text=Teclado+RGB",
            ),
            sku: String::from("KBD-RGB-TS"),
            sales: 350,
            created_at: days_ago(today, 120),
            product_type: ProductType::Variable,
            variations: vec![
                Variation {
                    id: String::from("var1"),
                    attributes: BTreeMap::from([
                        (String::from("Switch"), String::from("Blue")),
                        (String::from("Layout"), String::from("ABNT2")),
                    ]),
                    sku: String::from("KBD-RGB-TS-BL-ABNT"),
                    price: 85_000,
                    stock: 70,
                },
                Variation {
                    id: String::from("var2"),
                    attributes: BTreeMap::from([
                        (String::from("Switch"), String::from("Red")),
                        (String::from("Layout"), String::from("ABNT2")),
                    ]),
                    sku: String::from("KBD-RGB-TS-RD-ABNT"),
                    price: 87_000,
                    stock: 50,
                },
                Variation {
                    id: String::from("var3"),
                    attributes: BTreeMap::from([
                        (String::from("Switch"), String::from("Brown")),
                        (String::from("Layout"), String::from("US")),
                    ]),
                    sku: String::from("KBD-RGB-TS-BR-US"),
                    price: 86_000,
                    stock: 30,
                },
            ],
            media: vec![Media {
                id: String::from("m3"),
                kind: MediaKind::Image,
                url: String::from(
                    "https://placehold.co/600x400/1a202c/e2e8f0?text=Teclado+RGB+1",
                ),
                is_primary: true,
            }],
            rejection_reason: None,
        },
        Product {
            id: String::from("prod3"),
            name: String::from("Vaso de Cerâmica Artesanal"),
            description: String::from("Handmade ceramic vase, unique design."),
            supplier_id: String::from("sup3"),
            supplier_name: String::from("Artisan Crafts"),
            category: String::from("Home Decor"),
            price: 12_500,
            status: ProductStatus::Pending,
            stock: 30,
            image_url: String::from(
                "https://placehold.co/600x400/1a202c/e2e8f0?text=Vaso+Artesanal",
            ),
            sku: String::from("VC-HMD-AC"),
            sales: 80,
            created_at: days_ago(today, 90),
            product_type: ProductType::Simple,
            variations: Vec::new(),
            media: Vec::new(),
            rejection_reason: None,
        },
        Product {
            id: String::from("prod4"),
            name: String::from("Resma de Papel A4"),
            description: String::from("500 sheets of A4 paper."),
            supplier_id: String::from("sup4"),
            supplier_name: String::from("Office Supplies Ltd."),
            category: String::from("Office"),
            price: 2_500,
            status: ProductStatus::Removed,
            stock: 0,
            image_url: String::from("https://placehold.co/600x400/1a202c/e2e8f0?text=Papel+A4"),
            sku: String::from("PPR-A4-OS"),
            sales: 500,
            created_at: days_ago(today, 200),
            product_type: ProductType::Simple,
            variations: Vec::new(),
            media: Vec::new(),
            rejection_reason: Some(String::from("Fornecedor bloqueado.")),
        },
        Product {
            id: String::from("prod5"),
            name: String::from("Cesta de Vegetais Orgânicos"),
            description: String::from("Weekly basket of fresh organic vegetables."),
            supplier_id: String::from("sup5"),
            supplier_name: String::from("Green Produce"),
            category: String::from("Groceries"),
            price: 7_500,
            status: ProductStatus::ChangesRequested,
            stock: 25,
            image_url: String::from(
                "https://placehold.co/600x400/1a202c/e2e8f0?text=Cesta+Orgânica",
            ),
            sku: String::from("VEG-BSK-GP"),
            sales: 150,
            created_at: days_ago(today, 60),
            product_type: ProductType::Simple,
            variations: Vec::new(),
            media: Vec::new(),
            rejection_reason: Some(String::from(
                "A imagem principal precisa ser de melhor qualidade.",
            )),
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn orders(today: Date) -> Vec<Order> {
    vec![
        Order {
            id: String::from("ord1"),
            date: days_ago(today, 5),
            buyer_id: String::from("buy1"),
            customer_name: String::from("João Silva"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            store_name: String::from("TechHub"),
            total: 1_045_000,
            commission: 104_500,
            marketplace_profit: 94_050,
            shipping_cost: 10_000,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Paid,
            logistic_status: LogisticStatus::Delivered,
            payment_method: PaymentMethod::Stripe,
            business_type: String::from("B2C"),
            items: vec![
                OrderItem {
                    id: String::from("oi1"),
                    product_id: String::from("prod1"),
                    product_name: String::from("Laptop Gamer Pro X"),
                    quantity: 1,
                    unit_price: 950_000,
                    status: OrderItemStatus::Fulfilled,
                },
                OrderItem {
                    id: String::from("oi2"),
                    product_id: String::from("prod2"),
                    product_name: String::from("Teclado Mecânico RGB"),
                    quantity: 1,
                    unit_price: 85_000,
                    status: OrderItemStatus::Fulfilled,
                },
            ],
            events: vec![
                OrderEvent::new(
                    String::from("Payment Confirmed"),
                    at(days_ago(today, 5), Time::MIDNIGHT),
                    String::from("Payment processed successfully."),
                ),
                OrderEvent::new(
                    String::from("Processing"),
                    at(days_ago(today, 5), Time::MIDNIGHT),
                    String::from("Order received and is being processed."),
                ),
                OrderEvent::new(
                    String::from("Shipped"),
                    at(days_ago(today, 4), Time::MIDNIGHT),
                    String::from("Package shipped with DHL."),
                ),
                OrderEvent::new(
                    String::from("Delivered"),
                    at(days_ago(today, 1), Time::MIDNIGHT),
                    String::from("Package delivered."),
                ),
            ],
            shipping_address: String::from("Rua das Flores, 123, Luanda"),
            shipping_company: String::from("DHL"),
            tracking_code: String::from("LP123456789"),
            shipped_at: Some(days_ago(today, 4)),
            delivered_at: Some(days_ago(today, 1)),
            estimated_delivery: days_ago(today, 1),
        },
        Order {
            id: String::from("ord2"),
            date: days_ago(today, 12),
            buyer_id: String::from("buy2"),
            customer_name: String::from("Maria Santos"),
            supplier_id: String::from("sup3"),
            supplier_name: String::from("Artisan Crafts"),
            store_name: String::from("Handmade Haven"),
            total: 28_000,
            commission: 3_500,
            marketplace_profit: 3_000,
            shipping_cost: 3_000,
            status: OrderStatus::Shipped,
            payment_status: PaymentStatus::Paid,
            logistic_status: LogisticStatus::InTransit,
            payment_method: PaymentMethod::PayPal,
            business_type: String::from("C2C"),
            items: vec![OrderItem {
                id: String::from("oi3"),
                product_id: String::from("prod3"),
                product_name: String::from("Vaso de Cerâmica Artesanal"),
                quantity: 2,
                unit_price: 12_500,
                status: OrderItemStatus::Fulfilled,
            }],
            events: vec![
                OrderEvent::new(
                    String::from("Payment Confirmed"),
                    at(days_ago(today, 12), Time::MIDNIGHT),
                    String::from("Payment processed successfully."),
                ),
                OrderEvent::new(
                    String::from("Processing"),
                    at(days_ago(today, 11), Time::MIDNIGHT),
                    String::from("Order received and is being processed."),
                ),
                OrderEvent::new(
                    String::from("Shipped"),
                    at(days_ago(today, 10), Time::MIDNIGHT),
                    String::from("Package shipped with Correios."),
                ),
            ],
            shipping_address: String::from("Av. Brasil, 456, Benguela"),
            shipping_company: String::from("Correios"),
            tracking_code: String::from("BR987654321"),
            shipped_at: Some(days_ago(today, 10)),
            delivered_at: None,
            estimated_delivery: days_ahead(today, 2),
        },
        Order {
            id: String::from("ord3"),
            date: days_ago(today, 25),
            buyer_id: String::from("buy1"),
            customer_name: String::from("João Silva"),
            supplier_id: String::from("sup5"),
            supplier_name: String::from("Green Produce"),
            store_name: String::from("FarmFresh"),
            total: 9_500,
            commission: 950,
            marketplace_profit: 800,
            shipping_cost: 2_000,
            status: OrderStatus::Refunded,
            payment_status: PaymentStatus::Expired,
            logistic_status: LogisticStatus::AwaitingShipment,
            payment_method: PaymentMethod::Pix,
            business_type: String::from("B2C"),
            items: vec![OrderItem {
                id: String::from("oi4"),
                product_id: String::from("prod5"),
                product_name: String::from("Cesta de Vegetais Orgânicos"),
                quantity: 1,
                unit_price: 7_500,
                status: OrderItemStatus::Refunded,
            }],
            events: vec![
                OrderEvent::new(
                    String::from("Pending"),
                    at(days_ago(today, 25), Time::MIDNIGHT),
                    String::from("Awaiting payment confirmation."),
                ),
                OrderEvent::new(
                    String::from("Cancelled"),
                    at(days_ago(today, 23), Time::MIDNIGHT),
                    String::from("Payment expired."),
                ),
                OrderEvent::new(
                    String::from("Refunded"),
                    at(days_ago(today, 23), Time::MIDNIGHT),
                    String::from("Order refunded."),
                ),
            ],
            shipping_address: String::from("Rua das Flores, 123, Luanda"),
            shipping_company: String::from("N/A"),
            tracking_code: String::from("N/A"),
            shipped_at: None,
            delivered_at: None,
            estimated_delivery: days_ago(today, 22),
        },
        Order {
            id: String::from("ord4"),
            date: days_ago(today, 35),
            buyer_id: String::from("buy3"),
            customer_name: String::from("Carlos Neto"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            store_name: String::from("TechHub"),
            total: 420_000,
            commission: 42_000,
            marketplace_profit: 37_800,
            shipping_cost: 20_000,
            status: OrderStatus::Processing,
            payment_status: PaymentStatus::Paid,
            logistic_status: LogisticStatus::AwaitingShipment,
            payment_method: PaymentMethod::Stripe,
            business_type: String::from("B2B"),
            items: vec![OrderItem {
                id: String::from("oi5"),
                product_id: String::from("prod2"),
                product_name: String::from("Teclado Mecânico RGB"),
                quantity: 5,
                unit_price: 80_000,
                status: OrderItemStatus::Fulfilled,
            }],
            events: vec![
                OrderEvent::new(
                    String::from("Payment Confirmed"),
                    at(days_ago(today, 35), Time::MIDNIGHT),
                    String::from("Payment processed successfully."),
                ),
                OrderEvent::new(
                    String::from("Processing"),
                    at(days_ago(today, 35), Time::MIDNIGHT),
                    String::from("Order received and is being processed."),
                ),
            ],
            shipping_address: String::from("Rua Principal, 789, Huambo"),
            shipping_company: String::from("FedEx"),
            tracking_code: String::from("FX112233445"),
            shipped_at: None,
            delivered_at: None,
            estimated_delivery: days_ago(today, 30),
        },
        Order {
            id: String::from("ord5"),
            date: days_ago(today, 40),
            buyer_id: String::from("buy2"),
            customer_name: String::from("Maria Santos"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            store_name: String::from("TechHub"),
            total: 950_000,
            commission: 95_000,
            marketplace_profit: 85_500,
            shipping_cost: 10_000,
            status: OrderStatus::Cancelled,
            payment_status: PaymentStatus::Blocked,
            logistic_status: LogisticStatus::AwaitingShipment,
            payment_method: PaymentMethod::PayPal,
            business_type: String::from("B2C"),
            items: vec![OrderItem {
                id: String::from("oi6"),
                product_id: String::from("prod1"),
                product_name: String::from("Laptop Gamer Pro X"),
                quantity: 1,
                unit_price: 940_000,
                status: OrderItemStatus::Returned,
            }],
            events: vec![
                OrderEvent::new(
                    String::from("Pending"),
                    at(days_ago(today, 40), Time::MIDNIGHT),
                    String::from("Awaiting payment confirmation."),
                ),
                OrderEvent::new(
                    String::from("Cancelled"),
                    at(days_ago(today, 38), Time::MIDNIGHT),
                    String::from("Order cancelled by customer."),
                ),
            ],
            shipping_address: String::from("Av. Brasil, 456, Benguela"),
            shipping_company: String::from("N/A"),
            tracking_code: String::from("N/A"),
            shipped_at: None,
            delivered_at: None,
            estimated_delivery: days_ago(today, 35),
        },
    ]
}

fn transactions(today: Date) -> Vec<Transaction> {
    vec![
        Transaction {
            id: String::from("txn1"),
            date: days_ago(today, 5),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            order_id: String::from("ord1"),
            amount: 1_045_000,
            commission: 104_500,
            status: TransactionStatus::Paid,
            marketplace_profit: 94_050,
            payment_method: PaymentMethod::Stripe,
            business_type: BusinessType::B2c,
            kind: TransactionKind::Sale,
        },
        Transaction {
            id: String::from("txn2"),
            date: days_ago(today, 12),
            supplier_id: String::from("sup3"),
            supplier_name: String::from("Artisan Crafts"),
            order_id: String::from("ord2"),
            amount: 28_000,
            commission: 3_500,
            status: TransactionStatus::Paid,
            marketplace_profit: 3_000,
            payment_method: PaymentMethod::PayPal,
            business_type: BusinessType::C2c,
            kind: TransactionKind::Sale,
        },
        Transaction {
            id: String::from("txn3"),
            date: days_ago(today, 23),
            supplier_id: String::from("sup5"),
            supplier_name: String::from("Green Produce"),
            order_id: String::from("ord3"),
            amount: 9_500,
            commission: 0,
            status: TransactionStatus::Refunded,
            marketplace_profit: 0,
            payment_method: PaymentMethod::Pix,
            business_type: BusinessType::B2c,
            kind: TransactionKind::Refund,
        },
        Transaction {
            id: String::from("txn4"),
            date: days_ago(today, 35),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            order_id: String::from("ord4"),
            amount: 420_000,
            commission: 42_000,
            status: TransactionStatus::Pending,
            marketplace_profit: 37_800,
            payment_method: PaymentMethod::Stripe,
            business_type: BusinessType::B2b,
            kind: TransactionKind::Sale,
        },
        Transaction {
            id: String::from("txn5"),
            date: days_ago(today, 39),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            order_id: String::from("ord5"),
            amount: 950_000,
            commission: 0,
            status: TransactionStatus::Blocked,
            marketplace_profit: 0,
            payment_method: PaymentMethod::PayPal,
            business_type: BusinessType::B2c,
            kind: TransactionKind::Sale,
        },
        Transaction {
            id: String::from("txn6"),
            date: date!(2024 - 01 - 01),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            order_id: String::from("N/A"),
            amount: 50_000,
            commission: 0,
            status: TransactionStatus::Paid,
            marketplace_profit: 50_000,
            payment_method: PaymentMethod::Stripe,
            business_type: BusinessType::B2b,
            kind: TransactionKind::SeloPaid,
        },
    ]
}

/// Derives the store list from supplier, product, and transaction data.
///
/// Sales totals sum the owning supplier's sale transactions, the status
/// projects the supplier's status, and the category follows the supplier's
/// first listed product.
fn stores(
    suppliers: &[Supplier],
    products: &[Product],
    transactions: &[Transaction],
) -> Vec<Store> {
    let bases = [
        ("store1", "TechHub", "sup1", true, date!(2023 - 01 - 15), 2),
        ("store2", "GlobalMart", "sup2", false, date!(2023 - 03 - 22), 0),
        (
            "store3",
            "Handmade Haven",
            "sup3",
            true,
            date!(2022 - 11 - 30),
            1,
        ),
        ("store4", "OfficePro", "sup4", true, date!(2023 - 02 - 10), 1),
        ("store5", "FarmFresh", "sup5", false, date!(2023 - 05 - 01), 1),
    ];

    bases
        .into_iter()
        .map(
            |(id, name, supplier_id, is_verified, created_at, product_count)| {
                let owner = suppliers
                    .iter()
                    .find(|candidate| candidate.id == supplier_id);
                let total_sales: i64 = transactions
                    .iter()
                    .filter(|transaction| {
                        transaction.supplier_id == supplier_id
                            && transaction.kind == TransactionKind::Sale
                    })
                    .map(|transaction| transaction.amount)
                    .sum();
                let status = owner.map_or(StoreStatus::Pending, |supplier| match supplier.status {
                    SupplierStatus::Approved => StoreStatus::Active,
                    SupplierStatus::Blocked => StoreStatus::Inactive,
                    SupplierStatus::Pending => StoreStatus::Pending,
                });
                let category = products
                    .iter()
                    .find(|product| product.supplier_id == supplier_id)
                    .map_or_else(
                        || String::from("General"),
                        |product| product.category.clone(),
                    );
                Store {
                    id: String::from(id),
                    name: String::from(name),
                    supplier_id: String::from(supplier_id),
                    supplier_name: owner.map_or_else(String::new, |supplier| supplier.name.clone()),
                    is_verified,
                    created_at,
                    product_count,
                    status,
                    category,
                    phone: String::from("9XX XXX XXX"),
                    total_sales,
                    average_rating: owner.map_or(0.0, |supplier| supplier.average_rating),
                }
            },
        )
        .collect()
}

fn disputes(today: Date) -> Vec<Dispute> {
    vec![
        Dispute {
            id: String::from("disp1"),
            order_id: String::from("ord5"),
            transaction_id: String::from("txn5"),
            supplier_id: String::from("sup1"),
            supplier_name: String::from("Tech Solutions Inc."),
            customer_name: String::from("Maria Santos"),
            reason: String::from("Item not as described"),
            status: DisputeStatus::Open,
            created_at: days_ago(today, 37),
            resolved_at: None,
        },
        Dispute {
            id: String::from("disp2"),
            order_id: String::from("ord3"),
            transaction_id: String::from("txn3"),
            supplier_id: String::from("sup5"),
            supplier_name: String::from("Green Produce"),
            customer_name: String::from("João Silva"),
            reason: String::from("Never received"),
            status: DisputeStatus::Resolved,
            created_at: days_ago(today, 20),
            resolved_at: Some(days_ago(today, 18)),
        },
        Dispute {
            id: String::from("disp3"),
            order_id: String::from("ord2"),
            transaction_id: String::from("txn2"),
            supplier_id: String::from("sup3"),
            supplier_name: String::from("Artisan Crafts"),
            customer_name: String::from("Maria Santos"),
            reason: String::from("Package arrived damaged"),
            status: DisputeStatus::UnderReview,
            created_at: days_ago(today, 8),
            resolved_at: None,
        },
    ]
}

fn marketplace_users(today: Date, suppliers: &[Supplier]) -> Vec<MarketplaceUser> {
    let last_visits: [i64; 5] = [2, 5, 1, 12, 3];
    let mut users: Vec<MarketplaceUser> = suppliers
        .iter()
        .zip(last_visits)
        .map(|(supplier, visited_days_ago)| MarketplaceUser {
            id: supplier.id.clone(),
            name: supplier.name.clone(),
            email: supplier.email.clone(),
            user_type: MarketplaceUserType::Supplier,
            status: MarketplaceUserStatus::from_supplier_status(supplier.status),
            last_visit: days_ago(today, visited_days_ago),
            reputation_score: supplier.supplier_score,
            total_orders: supplier.total_orders,
            created_at: supplier.joined_date,
        })
        .collect();

    users.push(MarketplaceUser {
        id: String::from("buy1"),
        name: String::from("João Silva"),
        email: String::from("joao.silva@example.com"),
        user_type: MarketplaceUserType::Buyer,
        status: MarketplaceUserStatus::Active,
        last_visit: days_ago(today, 1),
        reputation_score: 98,
        total_orders: 2,
        created_at: date!(2022 - 08 - 10),
    });
    users.push(MarketplaceUser {
        id: String::from("buy2"),
        name: String::from("Maria Santos"),
        email: String::from("maria.santos@example.com"),
        user_type: MarketplaceUserType::Buyer,
        status: MarketplaceUserStatus::Active,
        last_visit: days_ago(today, 3),
        reputation_score: 95,
        total_orders: 2,
        created_at: date!(2022 - 09 - 20),
    });
    users.push(MarketplaceUser {
        id: String::from("buy3"),
        name: String::from("Carlos Neto"),
        email: String::from("carlos.neto@example.com"),
        user_type: MarketplaceUserType::Buyer,
        status: MarketplaceUserStatus::Suspended,
        last_visit: days_ago(today, 40),
        reputation_score: 80,
        total_orders: 1,
        created_at: date!(2023 - 01 - 05),
    });
    users
}

fn internal_users(today: Date) -> Vec<InternalUser> {
    vec![
        InternalUser {
            id: String::from("int-usr1"),
            name: String::from("Alice Johnson"),
            email: String::from("alice.j@kwanzub.com"),
            role: InternalUserRole::SuperAdmin,
            status: InternalUserStatus::Active,
            last_login: today,
            total_actions: 152,
            created_at: date!(2022 - 01 - 10),
            role_ids: vec![String::from("role-super-admin")],
        },
        InternalUser {
            id: String::from("int-usr2"),
            name: String::from("Bob Williams"),
            email: String::from("bob.w@kwanzub.com"),
            role: InternalUserRole::Admin,
            status: InternalUserStatus::Active,
            last_login: days_ago(today, 1),
            total_actions: 230,
            created_at: date!(2022 - 02 - 15),
            role_ids: vec![String::from("role-admin")],
        },
        InternalUser {
            id: String::from("int-usr3"),
            name: String::from("Charlie Brown"),
            email: String::from("charlie.b@kwanzub.com"),
            role: InternalUserRole::Moderator,
            status: InternalUserStatus::Suspended,
            last_login: days_ago(today, 30),
            total_actions: 88,
            created_at: date!(2022 - 03 - 20),
            role_ids: vec![String::from("role-moderator")],
        },
    ]
}

fn audit_trail(today: Date) -> Vec<AuditEntry> {
    vec![
        AuditEntry::new(
            String::from("log1"),
            at(days_ago(today, 1), time!(12:30)),
            Actor::new(String::from("int-usr1"), String::from("Alice Johnson")),
            Action::new(
                String::from("SupplierStatusChanged"),
                Some(String::from("Supplier \"Tech Solutions Inc.\" approved.")),
            ),
            true,
            Some(AuditEntityKind::User),
            Some(String::from("sup1")),
        ),
        AuditEntry::new(
            String::from("log2"),
            at(days_ago(today, 2), time!(9:45)),
            Actor::new(String::from("int-usr2"), String::from("Bob Williams")),
            Action::new(
                String::from("ProductStatusChanged"),
                Some(String::from("Product \"Laptop Gamer Pro X\" approved.")),
            ),
            false,
            Some(AuditEntityKind::Product),
            Some(String::from("prod1")),
        ),
        AuditEntry::new(
            String::from("log3"),
            at(days_ago(today, 3), time!(16:20)),
            Actor::new(String::from("int-usr1"), String::from("Alice Johnson")),
            Action::new(
                String::from("UserSuspended"),
                Some(String::from(
                    "User \"Carlos Neto\" suspended for suspicious activity.",
                )),
            ),
            true,
            Some(AuditEntityKind::User),
            Some(String::from("buy3")),
        ),
        AuditEntry::new(
            String::from("log4"),
            at(days_ago(today, 4), time!(11:05)),
            Actor::new(String::from("int-usr2"), String::from("Bob Williams")),
            Action::new(
                String::from("OrderStatusChanged"),
                Some(String::from("Order \"ord2\" status changed to Shipped.")),
            ),
            false,
            Some(AuditEntityKind::Order),
            Some(String::from("ord2")),
        ),
        AuditEntry::new(
            String::from("log5"),
            at(days_ago(today, 5), time!(8:00)),
            Actor::new(String::from("System"), String::from("System")),
            Action::new(
                String::from("PaymentFailed"),
                Some(String::from("Payment for order \"ord3\" failed (expired).")),
            ),
            false,
            Some(AuditEntityKind::Order),
            Some(String::from("ord3")),
        ),
    ]
}

fn monthly_data() -> Vec<MonthlyData> {
    vec![
        MonthlyData {
            name: String::from("Jan"),
            revenue: 4_000_000,
            sales: 2400,
            orders: 2000,
            stores: 10,
            avg_ticket: 1739,
            suppliers: 5,
            revenue_forecast: Some(3_800_000),
        },
        MonthlyData {
            name: String::from("Fev"),
            revenue: 3_000_000,
            sales: 1398,
            orders: 1800,
            stores: 12,
            avg_ticket: 1666,
            suppliers: 7,
            revenue_forecast: Some(3_200_000),
        },
        MonthlyData {
            name: String::from("Mar"),
            revenue: 2_000_000,
            sales: 9800,
            orders: 2290,
            stores: 15,
            avg_ticket: 873,
            suppliers: 8,
            revenue_forecast: Some(2_100_000),
        },
        MonthlyData {
            name: String::from("Abr"),
            revenue: 2_780_000,
            sales: 3908,
            orders: 2000,
            stores: 18,
            avg_ticket: 1390,
            suppliers: 10,
            revenue_forecast: Some(2_800_000),
        },
        MonthlyData {
            name: String::from("Mai"),
            revenue: 1_890_000,
            sales: 4800,
            orders: 2181,
            stores: 20,
            avg_ticket: 866,
            suppliers: 12,
            revenue_forecast: Some(1_900_000),
        },
        MonthlyData {
            name: String::from("Jun"),
            revenue: 2_390_000,
            sales: 3800,
            orders: 2500,
            stores: 22,
            avg_ticket: 956,
            suppliers: 15,
            revenue_forecast: Some(2_400_000),
        },
        MonthlyData {
            name: String::from("Jul"),
            revenue: 3_490_000,
            sales: 4300,
            orders: 2100,
            stores: 25,
            avg_ticket: 1661,
            suppliers: 18,
            revenue_forecast: None,
        },
    ]
}

fn alerts(today: Date) -> Vec<Alert> {
    vec![
        Alert {
            id: String::from("alert1"),
            alert_type: AlertType::Payment,
            message: String::from(
                "Payment of Kz 420,000.00 for order #ord4 is pending confirmation.",
            ),
            timestamp: days_ago(today, 2),
            related_id: String::from("txn4"),
        },
        Alert {
            id: String::from("alert2"),
            alert_type: AlertType::Complaint,
            message: String::from(
                "Supplier \"Office Supplies Ltd.\" received 3 new high-priority complaints.",
            ),
            timestamp: days_ago(today, 3),
            related_id: String::from("sup4"),
        },
        Alert {
            id: String::from("alert3"),
            alert_type: AlertType::Dispute,
            message: String::from("New dispute opened for order #ord5."),
            timestamp: days_ago(today, 4),
            related_id: String::from("disp1"),
        },
    ]
}

fn login_attempts(today: Date) -> Vec<LoginAttempt> {
    vec![
        LoginAttempt {
            id: String::from("la1"),
            ip_address: String::from("192.0.2.200"),
            timestamp: at(days_ago(today, 1), time!(2:15)),
            status: LoginStatus::Failed,
            user_name: String::from("Bob Williams"),
            is_suspicious: true,
        },
        LoginAttempt {
            id: String::from("la2"),
            ip_address: String::from("203.0.113.55"),
            timestamp: at(today, time!(9:00)),
            status: LoginStatus::Success,
            user_name: String::from("Alice Johnson"),
            is_suspicious: false,
        },
        LoginAttempt {
            id: String::from("la3"),
            ip_address: String::from("198.51.100.12"),
            timestamp: at(days_ago(today, 1), time!(14:30)),
            status: LoginStatus::Success,
            user_name: String::from("Bob Williams"),
            is_suspicious: false,
        },
    ]
}

fn commission_settings() -> CommissionSettings {
    CommissionSettings {
        global: 15.0,
        categories: BTreeMap::from([
            (String::from("Electronics"), Some(12.0)),
            (String::from("Home Decor"), Some(20.0)),
            (String::from("Groceries"), Some(8.0)),
            (String::from("Office"), None),
        ]),
    }
}

fn notifications(today: Date) -> Vec<Notification> {
    vec![
        Notification {
            id: String::from("notif1"),
            notification_type: NotificationType::System,
            priority: NotificationPriority::Critical,
            title: String::from("Security Alert: Failed Login"),
            content: String::from(
                "Suspicious login attempt failed for user Bob Williams from IP 192.0.2.200.",
            ),
            status: NotificationStatus::Unread,
            timestamp: at(days_ago(today, 1), time!(2:20)),
            sender: String::from("System"),
            related_entity: None,
        },
        Notification {
            id: String::from("notif2"),
            notification_type: NotificationType::System,
            priority: NotificationPriority::Alert,
            title: String::from("New Supplier Pending Approval"),
            content: String::from(
                "Supplier \"Global Goods Co.\" has registered and is awaiting document verification and approval.",
            ),
            status: NotificationStatus::Unread,
            timestamp: at(days_ago(today, 3), time!(11:00)),
            sender: String::from("System"),
            related_entity: Some(RelatedEntity {
                kind: RelatedEntityKind::User,
                id: String::from("sup2"),
                display_text: String::from("Global Goods Co."),
            }),
        },
        Notification {
            id: String::from("notif3"),
            notification_type: NotificationType::Manual,
            priority: NotificationPriority::Info,
            title: String::from("Platform Maintenance"),
            content: String::from(
                "Scheduled maintenance will occur this Sunday from 2 AM to 4 AM. Some services may be unavailable.",
            ),
            status: NotificationStatus::Unread,
            timestamp: at(today, time!(8:00)),
            sender: String::from("Alice Johnson"),
            related_entity: None,
        },
        Notification {
            id: String::from("notif4"),
            notification_type: NotificationType::System,
            priority: NotificationPriority::Alert,
            title: String::from("New Dispute Opened"),
            content: String::from("A new dispute has been opened for order #ord5."),
            status: NotificationStatus::Read,
            timestamp: at(days_ago(today, 4), time!(16:45)),
            sender: String::from("System"),
            related_entity: Some(RelatedEntity {
                kind: RelatedEntityKind::Order,
                id: String::from("ord5"),
                display_text: String::from("#ord5"),
            }),
        },
    ]
}

fn coupons(today: Date) -> Vec<Coupon> {
    vec![
        Coupon {
            id: String::from("coup1"),
            code: String::from("BEMVINDO10"),
            coupon_type: CouponType::Percentage,
            value: 10,
            status: CouponStatus::Active,
            usage_count: 25,
            usage_limit: Some(100),
            expires_at: None,
            created_at: at(days_ago(today, 30), time!(10:00)),
        },
        Coupon {
            id: String::from("coup2"),
            code: String::from("FRETEGRATIS"),
            coupon_type: CouponType::Fixed,
            value: 5_000,
            status: CouponStatus::Inactive,
            usage_count: 15,
            usage_limit: None,
            expires_at: Some(days_ahead(today, 30)),
            created_at: at(days_ago(today, 60), time!(10:00)),
        },
        Coupon {
            id: String::from("coup3"),
            code: String::from("INVERNO2023"),
            coupon_type: CouponType::Percentage,
            value: 15,
            status: CouponStatus::Expired,
            usage_count: 150,
            usage_limit: Some(150),
            expires_at: Some(days_ago(today, 10)),
            created_at: at(days_ago(today, 90), time!(10:00)),
        },
    ]
}

fn messages(today: Date) -> Vec<Message> {
    vec![
        Message {
            id: String::from("msg1"),
            conversation_id: String::from("conv1"),
            sender_id: String::from("sup1"),
            content: String::from("Olá, tenho uma dúvida sobre meu último pedido."),
            timestamp: at(today, time!(10:00)),
            status: MessageStatus::Read,
            attachment: None,
        },
        Message {
            id: String::from("msg1.1"),
            conversation_id: String::from("conv1"),
            sender_id: String::from("int-usr2"),
            content: String::from("Claro, qual é o ID do pedido?"),
            timestamp: at(today, time!(10:01)),
            status: MessageStatus::Read,
            attachment: None,
        },
        Message {
            id: String::from("msg2"),
            conversation_id: String::from("conv2"),
            sender_id: String::from("int-usr3"),
            content: String::from("Sua documentação foi aprovada."),
            timestamp: at(days_ago(today, 1), time!(14:30)),
            status: MessageStatus::Delivered,
            attachment: None,
        },
        Message {
            id: String::from("msg3"),
            conversation_id: String::from("conv3"),
            sender_id: String::from("int-usr1"),
            content: String::from("Pessoal, vamos focar nos produtos pendentes hoje."),
            timestamp: at(today, time!(9:00)),
            status: MessageStatus::Read,
            attachment: None,
        },
    ]
}

fn conversations(messages: &[Message]) -> Vec<Conversation> {
    let newest = |conversation_id: &str| {
        messages
            .iter()
            .filter(|message| message.conversation_id == conversation_id)
            .next_back()
            .cloned()
    };

    vec![
        Conversation {
            id: String::from("conv1"),
            conversation_type: ConversationType::Individual,
            name: None,
            participant_ids: vec![String::from("int-usr2"), String::from("sup1")],
            last_message: newest("conv1"),
            unread_count: 1,
            is_online: true,
            ticket_id: Some(String::from("t1")),
        },
        Conversation {
            id: String::from("conv2"),
            conversation_type: ConversationType::Individual,
            name: None,
            participant_ids: vec![String::from("int-usr3"), String::from("sup5")],
            last_message: newest("conv2"),
            unread_count: 0,
            is_online: false,
            ticket_id: None,
        },
        Conversation {
            id: String::from("conv3"),
            conversation_type: ConversationType::Group,
            name: Some(String::from("Equipa de Moderação")),
            participant_ids: vec![
                String::from("int-usr1"),
                String::from("int-usr2"),
                String::from("int-usr3"),
            ],
            last_message: newest("conv3"),
            unread_count: 0,
            is_online: false,
            ticket_id: None,
        },
    ]
}

fn tickets(today: Date) -> Vec<Ticket> {
    vec![Ticket {
        id: String::from("t1"),
        conversation_id: String::from("conv1"),
        status: TicketStatus::Open,
        priority: TicketPriority::High,
        created_at: at(today, time!(9:58)),
        resolved_at: None,
        sla: 24,
    }]
}

fn active_sessions(today: Date) -> Vec<ActiveSession> {
    vec![
        ActiveSession {
            id: String::from("sess1"),
            user_id: String::from("int-usr1"),
            user_name: String::from("Alice Johnson"),
            ip_address: String::from("203.0.113.55"),
            location: String::from("Luanda, Angola"),
            device: String::from("Chrome on macOS"),
            login_time: at(today, time!(9:00)),
            last_activity: at(today, time!(11:05)),
        },
        ActiveSession {
            id: String::from("sess2"),
            user_id: String::from("int-usr2"),
            user_name: String::from("Bob Williams"),
            ip_address: String::from("198.51.100.12"),
            location: String::from("Benguela, Angola"),
            device: String::from("Firefox on Windows"),
            login_time: at(days_ago(today, 1), time!(14:30)),
            last_activity: at(today, time!(10:30)),
        },
    ]
}

fn ip_rules(today: Date) -> Vec<IpRule> {
    vec![
        IpRule::new(
            String::from("ipr1"),
            String::from("192.0.2.200"),
            IpRuleType::Deny,
            Some(String::from(
                "Suspicious login attempts against Bob Williams",
            )),
            at(days_ago(today, 2), time!(15:45)),
            String::from("Alice Johnson"),
        ),
        IpRule::new(
            String::from("ipr2"),
            String::from("10.0.0.0/8"),
            IpRuleType::Allow,
            Some(String::from("Internal network range")),
            at(days_ago(today, 30), time!(10:00)),
            String::from("Alice Johnson"),
        ),
    ]
}

fn fraud_reports(today: Date) -> Vec<FraudReport> {
    vec![
        FraudReport {
            id: String::from("fr1"),
            entity_kind: FraudEntityKind::User,
            entity_id: String::from("sup4"),
            entity_name: String::from("Office Supplies Ltd."),
            risk_score: 8.5,
            reason: String::from("High rate of complaints and document rejection."),
            timestamp: at(days_ago(today, 4), time!(10:00)),
            status: FraudReportStatus::Resolved,
        },
        FraudReport {
            id: String::from("fr2"),
            entity_kind: FraudEntityKind::User,
            entity_id: String::from("buy3"),
            entity_name: String::from("Carlos Neto"),
            risk_score: 6.0,
            reason: String::from("Unusual purchase patterns."),
            timestamp: at(days_ago(today, 10), time!(14:00)),
            status: FraudReportStatus::Watching,
        },
    ]
}

fn security_events(today: Date) -> Vec<SecurityEvent> {
    vec![
        SecurityEvent::new(
            String::from("seclog1"),
            at(days_ago(today, 1), time!(9:05)),
            String::from("IP Rule Added"),
            Actor::new(String::from("int-usr1"), String::from("Alice Johnson")),
            String::from("Denied IP 192.0.2.200"),
        ),
        SecurityEvent::new(
            String::from("seclog2"),
            at(days_ago(today, 2), time!(15:40)),
            String::from("Password Policy Changed"),
            Actor::new(String::from("int-usr1"), String::from("Alice Johnson")),
            String::from("Minimum password length set to 10"),
        ),
    ]
}
