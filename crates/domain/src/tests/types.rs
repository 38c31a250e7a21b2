// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_company, window_close, window_open};
use crate::{
    AdmissionMode, Company, CompanyStatus, DomainError, ExistingPeriod, PeriodKind, Product,
    ProductCategory, VerificationStatus, WhitelistEntry,
};
use chrono::NaiveDate;

#[test]
fn test_remaining_is_quota_minus_registered() {
    let company = create_company(AdmissionMode::Fcfs, 20, 7);

    assert_eq!(company.remaining(), 13);
}

#[test]
fn test_registered_above_quota_is_rejected() {
    let result = Company::new(
        3,
        "OVER",
        "Oversold",
        AdmissionMode::Fcfs,
        5,
        6,
        CompanyStatus::Active,
        window_open(),
        window_close(),
    );

    assert_eq!(
        result,
        Err(DomainError::RegisteredExceedsQuota {
            company_id: 3,
            quota: 5,
            registered: 6,
        })
    );
}

#[test]
fn test_inverted_window_is_rejected() {
    let result = Company::new(
        3,
        "BACK",
        "Backwards",
        AdmissionMode::Whl,
        5,
        0,
        CompanyStatus::Active,
        window_close(),
        window_open(),
    );

    assert_eq!(
        result,
        Err(DomainError::InvalidRegistrationWindow { company_id: 3 })
    );
}

#[test]
fn test_product_needs_a_term() {
    let result = Product::new(1, "Nothing", ProductCategory::Morning, 1, 0);

    assert_eq!(
        result,
        Err(DomainError::InvalidProductTerm {
            product_id: 1,
            months: 0,
        })
    );
}

#[test]
fn test_period_end_before_start_is_rejected() {
    let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

    assert_eq!(
        ExistingPeriod::new(PeriodKind::Locker, start, end),
        Err(DomainError::InvalidPeriod { start, end })
    );
    assert!(ExistingPeriod::new(PeriodKind::Locker, start, start).is_err());
}

#[test]
fn test_keys_parse_back() {
    for category in ProductCategory::ALL {
        assert_eq!(category.as_str().parse::<ProductCategory>().unwrap(), category);
    }
    assert_eq!("FCFS".parse::<AdmissionMode>().unwrap(), AdmissionMode::Fcfs);
    assert_eq!("WHL".parse::<AdmissionMode>().unwrap(), AdmissionMode::Whl);
    assert_eq!("inactive".parse::<CompanyStatus>().unwrap(), CompanyStatus::Inactive);
    assert_eq!("locker".parse::<PeriodKind>().unwrap(), PeriodKind::Locker);
    assert_eq!(
        "confirmed".parse::<VerificationStatus>().unwrap(),
        VerificationStatus::Confirmed
    );
    assert!("afternoon".parse::<ProductCategory>().is_err());
}

#[test]
fn test_category_serde_uses_persisted_key() {
    let json = serde_json::to_string(&ProductCategory::FullDay).unwrap();
    assert_eq!(json, "\"full_day\"");

    let mode: AdmissionMode = serde_json::from_str("\"WHL\"").unwrap();
    assert_eq!(mode, AdmissionMode::Whl);
}

#[test]
fn test_whitelist_entry_matches_exactly() {
    let entry = WhitelistEntry::new(1, ProductCategory::Evening, "20251235", "이영희");

    assert!(entry.matches("20251235", "이영희"));
    assert!(!entry.matches("20251235", "이영희 "));
}
