// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use chrono::NaiveDate;

#[test]
fn test_domain_error_display() {
    let err = DomainError::RegisteredExceedsQuota {
        company_id: 4,
        quota: 10,
        registered: 11,
    };
    assert_eq!(
        format!("{err}"),
        "Company 4 has 11 registrations but a quota of 10"
    );

    let err = DomainError::CompanyNotFound(9);
    assert_eq!(format!("{err}"), "Company 9 not found");

    let err = DomainError::ProductNotFound(12);
    assert_eq!(format!("{err}"), "Product 12 not found in catalog");

    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let err = DomainError::InvalidPeriod { start, end };
    assert_eq!(
        format!("{err}"),
        "Invalid period: end 2025-02-01 is not after start 2025-03-01"
    );

    let err = DomainError::InvalidCategory(String::from("afternoon"));
    assert_eq!(format!("{err}"), "Invalid product category: afternoon");
}
