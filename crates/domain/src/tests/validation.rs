// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Coupon, CouponStatus, CouponType, DomainError, PaidVerification, Plan, VerificationPlan,
    validate_coupon_code_unique, validate_email, validate_ip_rule_address,
};
use time::macros::{date, datetime};

fn create_test_coupon(id: &str, code: &str) -> Coupon {
    Coupon {
        id: String::from(id),
        code: String::from(code),
        coupon_type: CouponType::Percentage,
        value: 10,
        status: CouponStatus::Active,
        usage_count: 0,
        usage_limit: None,
        expires_at: None,
        created_at: datetime!(2024-06-01 10:00 UTC),
    }
}

fn create_test_plan(monthly_volume_limit: i64) -> Plan {
    Plan {
        id: String::from("plan1"),
        name: String::from("Starter"),
        monthly_volume_limit,
        transaction_limit: 100,
        withdrawal_request_limit: 2,
        search_weight: 1,
        allows_manual_expansion: false,
        created_at: date!(2024 - 01 - 01),
        updated_at: date!(2024 - 06 - 01),
    }
}

#[test]
fn test_new_coupon_code_passes_uniqueness() {
    let existing: Vec<Coupon> = vec![
        create_test_coupon("coup1", "BEMVINDO10"),
        create_test_coupon("coup2", "FRETEGRATIS"),
    ];

    assert!(validate_coupon_code_unique("VERAO25", &existing).is_ok());
}

#[test]
fn test_duplicate_coupon_code_rejected() {
    let existing: Vec<Coupon> = vec![create_test_coupon("coup1", "BEMVINDO10")];

    let result: Result<(), DomainError> = validate_coupon_code_unique("BEMVINDO10", &existing);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateCouponCode(code)) if code == "BEMVINDO10"
    ));
}

#[test]
fn test_coupon_codes_compared_case_sensitively() {
    let existing: Vec<Coupon> = vec![create_test_coupon("coup1", "BEMVINDO10")];

    assert!(validate_coupon_code_unique("bemvindo10", &existing).is_ok());
}

#[test]
fn test_verification_renewal_chain_stays_cumulative() {
    let mut verification: PaidVerification = PaidVerification::new(
        String::from("pv1"),
        String::from("sup1"),
        VerificationPlan::PremiumGoldPaid,
        String::from("B2B"),
        String::from("int-usr1"),
        date!(2024 - 03 - 15),
    )
    .unwrap();

    verification.renew().unwrap();
    verification.renew().unwrap();

    assert_eq!(verification.expires_at, date!(2027 - 03 - 15));
    assert!(!verification.is_lapsed(date!(2027 - 03 - 15)));
    assert!(verification.is_lapsed(date!(2027 - 03 - 16)));
}

#[test]
fn test_manual_expansion_overrides_plan_ceiling() {
    let plan: Plan = create_test_plan(500_000);

    assert_eq!(plan.effective_volume_limit(Some(800_000)), 800_000);
    assert_eq!(plan.effective_volume_limit(None), 500_000);
}

#[test]
fn test_zero_expansion_falls_back_to_plan_ceiling() {
    let plan: Plan = create_test_plan(500_000);

    assert_eq!(plan.effective_volume_limit(Some(0)), 500_000);
}

#[test]
fn test_email_and_ip_checks_cover_rule_inputs() {
    assert!(validate_email("j.martins@allimport.com.br").is_ok());
    assert!(validate_email("j.martins@@allimport").is_err());

    assert!(validate_ip_rule_address("203.0.113.45").is_ok());
    assert!(validate_ip_rule_address("203.0.113.0/24").is_ok());
    assert!(validate_ip_rule_address("203.0.113.45/40").is_err());
}
