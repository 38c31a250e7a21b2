// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{new_company, new_product, seed_company, seed_product};
use crate::{Persistence, PersistenceError};
use slot_admission_domain::{AdmissionMode, CompanyStatus, ProductCategory, WhitelistEntry};

#[test]
fn test_created_company_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let created = seed_company(&mut persistence, AdmissionMode::Fcfs, 20, 4);
    let loaded = persistence.get_company(created.id()).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.code(), "ACME");
    assert_eq!(loaded.mode(), AdmissionMode::Fcfs);
    assert_eq!(loaded.remaining(), 16);
    assert_eq!(loaded.status(), CompanyStatus::Active);
}

#[test]
fn test_duplicate_company_code_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    seed_company(&mut persistence, AdmissionMode::Fcfs, 20, 0);

    let result = persistence.create_company(&new_company("ACME", AdmissionMode::Whl, 5, 0));

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_company_over_quota_is_invalid() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.create_company(&new_company("OVER", AdmissionMode::Fcfs, 5, 6));

    assert!(matches!(result, Err(PersistenceError::InvalidRecord(_))));
    assert!(persistence.list_companies().unwrap().is_empty());
}

#[test]
fn test_missing_company_is_reported() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(
        persistence.get_company(42),
        Err(PersistenceError::CompanyNotFound(42))
    );
}

#[test]
fn test_products_are_listed_in_id_order() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let evening = seed_product(&mut persistence, ProductCategory::Evening, 2);
    let morning = seed_product(&mut persistence, ProductCategory::Morning, 0);

    let catalog = persistence.list_products().unwrap();

    assert_eq!(catalog, vec![evening, morning.clone()]);
    assert!(!catalog[1].has_stock());
    assert_eq!(persistence.get_product(morning.id).unwrap(), morning);
}

#[test]
fn test_zero_month_product_is_invalid() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut product = new_product(ProductCategory::FullDay, 5);
    product.months = 0;

    let result = persistence.create_product(&product);

    assert!(matches!(result, Err(PersistenceError::InvalidRecord(_))));
}

#[test]
fn test_whitelist_entry_requires_company() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let entry = WhitelistEntry::new(9, ProductCategory::Evening, "20251235", "이영희");

    assert_eq!(
        persistence.add_whitelist_entry(&entry),
        Err(PersistenceError::CompanyNotFound(9))
    );
}
