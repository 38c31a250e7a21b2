// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::NaiveDate;
use slot_admission_domain::{
    AdmissionMode, Company, CompanyStatus, Product, ProductCategory, VerificationStatus,
};
use slot_admission_persistence::{NewCompany, NewProduct, Persistence};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{AdmitRequest, MemberInfo};

pub const fn test_now() -> OffsetDateTime {
    datetime!(2025-03-01 09:00 UTC)
}

pub fn create_member(company_id: i64) -> MemberInfo {
    MemberInfo {
        user_id: 100,
        company_id,
        employee_no: String::from("20251235"),
        name: String::from("이영희"),
    }
}

pub fn seed_company(
    persistence: &mut Persistence,
    mode: AdmissionMode,
    quota: u32,
    registered: u32,
) -> Company {
    persistence
        .create_company(&NewCompany {
            code: String::from("ACME"),
            name: String::from("Acme Holdings"),
            mode,
            quota,
            registered,
            status: CompanyStatus::Active,
            available_from: datetime!(2025-01-01 00:00 UTC),
            available_until: datetime!(2025-06-30 23:59:59 UTC),
        })
        .unwrap()
}

pub fn seed_product(
    persistence: &mut Persistence,
    category: ProductCategory,
    remaining_units: u32,
) -> Product {
    persistence
        .create_product(&NewProduct {
            name: format!("{category} 3M"),
            category,
            remaining_units,
            months: 3,
        })
        .unwrap()
}

pub fn create_admit_request(company_id: i64, product_id: i64, include_locker: bool) -> AdmitRequest {
    AdmitRequest {
        company_id,
        member: create_member(company_id),
        product_id: Some(product_id),
        include_locker,
        start_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        verification: VerificationStatus::NotRequired,
        request_id: Some(String::from("req-1")),
    }
}
