// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod seed_tests;
mod snapshot_tests;

use crate::{NewCompany, NewProduct, Persistence};
use chrono::NaiveDate;
use slot_admission::{AdmissionDecision, AdmissionPlan, AdmissionRequest, plan_admission};
use slot_admission_audit::{Actor, Cause};
use slot_admission_domain::{
    AdmissionMode, AdmissionSettings, Company, CompanyStatus, Product, ProductCategory, Selection,
    User, VerificationStatus,
};
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::member(100)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test checkout"))
}

pub fn new_company(code: &str, mode: AdmissionMode, quota: u32, registered: u32) -> NewCompany {
    NewCompany {
        code: code.to_string(),
        name: format!("{code} Holdings"),
        mode,
        quota,
        registered,
        status: CompanyStatus::Active,
        available_from: datetime!(2025-01-01 00:00 UTC),
        available_until: datetime!(2025-06-30 23:59:59 UTC),
    }
}

pub fn new_product(category: ProductCategory, remaining_units: u32) -> NewProduct {
    NewProduct {
        name: format!("{category} 3M"),
        category,
        remaining_units,
        months: 3,
    }
}

pub fn seed_company(
    persistence: &mut Persistence,
    mode: AdmissionMode,
    quota: u32,
    registered: u32,
) -> Company {
    persistence
        .create_company(&new_company("ACME", mode, quota, registered))
        .unwrap()
}

pub fn seed_product(
    persistence: &mut Persistence,
    category: ProductCategory,
    remaining_units: u32,
) -> Product {
    persistence
        .create_product(&new_product(category, remaining_units))
        .unwrap()
}

pub fn create_user(company_id: i64) -> User {
    User::new(100, company_id, "20251235", "이영희")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_request(user: User, product_id: i64, include_locker: bool) -> AdmissionRequest {
    AdmissionRequest {
        user,
        selection: Selection::product(product_id, include_locker),
        start_date: date(2025, 4, 15),
        verification: VerificationStatus::NotRequired,
        now: datetime!(2025-03-01 09:00 UTC),
    }
}

/// Loads a snapshot and plans an admission that is expected to be approved.
pub fn plan_approved(
    persistence: &mut Persistence,
    settings: &AdmissionSettings,
    company_id: i64,
    request: &AdmissionRequest,
) -> AdmissionPlan {
    let snapshot = persistence
        .load_snapshot(company_id, &request.user)
        .unwrap();
    match plan_admission(
        settings,
        &snapshot,
        request,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    {
        AdmissionDecision::Approved(plan) => *plan,
        AdmissionDecision::Rejected(rejection) => panic!("expected approval, got {rejection:?}"),
    }
}
