// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AdmissionRequest, AdmissionSnapshot};
use chrono::NaiveDate;
use slot_admission_audit::{Actor, Cause};
use slot_admission_domain::{
    AdmissionMode, Company, CompanyStatus, ExistingPeriod, Product, ProductCategory, Selection,
    User, VerificationStatus, WhitelistEntry, WhitelistIndex,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const COMPANY_ID: i64 = 1;
pub const FULL_DAY_ID: i64 = 10;
pub const MORNING_ID: i64 = 11;
pub const EVENING_ID: i64 = 12;

pub fn create_test_actor() -> Actor {
    Actor::member(100)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Member checkout"))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn now_in_window() -> OffsetDateTime {
    datetime!(2025-03-01 09:00 UTC)
}

pub fn create_company(mode: AdmissionMode, quota: u32, registered: u32) -> Company {
    Company::new(
        COMPANY_ID,
        "ACME",
        "Acme Holdings",
        mode,
        quota,
        registered,
        CompanyStatus::Active,
        datetime!(2025-01-01 00:00 UTC),
        datetime!(2025-06-30 23:59:59 UTC),
    )
    .unwrap()
}

pub fn create_catalog() -> Vec<Product> {
    vec![
        Product::new(FULL_DAY_ID, "Full day 3M", ProductCategory::FullDay, 5, 3).unwrap(),
        Product::new(MORNING_ID, "Morning 3M", ProductCategory::Morning, 5, 3).unwrap(),
        Product::new(EVENING_ID, "Evening 3M", ProductCategory::Evening, 5, 3).unwrap(),
    ]
}

pub fn create_user() -> User {
    User::new(100, COMPANY_ID, "20251235", "이영희")
}

pub fn create_evening_whitelist() -> WhitelistIndex {
    WhitelistIndex::for_company(
        COMPANY_ID,
        vec![WhitelistEntry::new(
            COMPANY_ID,
            ProductCategory::Evening,
            "20251235",
            "이영희",
        )],
    )
    .unwrap()
}

pub fn fcfs_snapshot(quota: u32, registered: u32) -> AdmissionSnapshot {
    AdmissionSnapshot::new(
        create_company(AdmissionMode::Fcfs, quota, registered),
        create_catalog(),
        WhitelistIndex::empty(COMPANY_ID),
        Vec::new(),
    )
    .unwrap()
}

pub fn whl_snapshot() -> AdmissionSnapshot {
    AdmissionSnapshot::new(
        create_company(AdmissionMode::Whl, 10, 0),
        create_catalog(),
        create_evening_whitelist(),
        Vec::new(),
    )
    .unwrap()
}

pub fn with_periods(mut snapshot: AdmissionSnapshot, periods: Vec<ExistingPeriod>) -> AdmissionSnapshot {
    snapshot.existing_periods = periods;
    snapshot
}

pub fn create_request(product_id: i64, include_locker: bool) -> AdmissionRequest {
    AdmissionRequest {
        user: create_user(),
        selection: Selection::product(product_id, include_locker),
        start_date: date(2025, 4, 15),
        verification: VerificationStatus::NotRequired,
        now: now_in_window(),
    }
}
