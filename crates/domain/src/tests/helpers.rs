// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AdmissionMode, Company, CompanyStatus, Product, ProductCategory, User, WhitelistEntry,
    WhitelistIndex,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const COMPANY_ID: i64 = 1;

pub fn window_open() -> OffsetDateTime {
    datetime!(2025-01-01 00:00 UTC)
}

pub fn window_close() -> OffsetDateTime {
    datetime!(2025-06-30 23:59:59 UTC)
}

/// A moment inside the registration window.
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
        window_open(),
        window_close(),
    )
    .unwrap()
}

pub fn create_inactive_company(mode: AdmissionMode) -> Company {
    Company::new(
        COMPANY_ID,
        "ACME",
        "Acme Holdings",
        mode,
        20,
        0,
        CompanyStatus::Inactive,
        window_open(),
        window_close(),
    )
    .unwrap()
}

pub fn create_catalog() -> Vec<Product> {
    vec![
        Product::new(10, "Full day 3M", ProductCategory::FullDay, 5, 3).unwrap(),
        Product::new(11, "Morning 3M", ProductCategory::Morning, 5, 3).unwrap(),
        Product::new(12, "Evening 3M", ProductCategory::Evening, 5, 3).unwrap(),
    ]
}

pub fn create_user() -> User {
    User::new(100, COMPANY_ID, "20251235", "이영희")
}

/// Whitelist holding only the evening bucket for the test user.
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
