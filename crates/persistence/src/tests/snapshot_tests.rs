// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_user, new_company, seed_company, seed_product};
use crate::{Persistence, PersistenceError};
use slot_admission_domain::{
    AdmissionMode, ProductCategory, WhitelistEntry, WhitelistLookup,
};
use std::collections::BTreeSet;

#[test]
fn test_whitelist_is_scoped_to_company_and_identity() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let acme = seed_company(&mut persistence, AdmissionMode::Whl, 10, 0);
    let other = persistence
        .create_company(&new_company("OTHER", AdmissionMode::Whl, 10, 0))
        .unwrap();

    for entry in [
        WhitelistEntry::new(acme.id(), ProductCategory::Evening, "20251235", "이영희"),
        WhitelistEntry::new(acme.id(), ProductCategory::FullDay, "20251235", "이영희"),
        WhitelistEntry::new(acme.id(), ProductCategory::Morning, "20251235", "김철수"),
        WhitelistEntry::new(other.id(), ProductCategory::Morning, "20251235", "이영희"),
    ] {
        persistence.add_whitelist_entry(&entry).unwrap();
    }

    let index = persistence
        .whitelist_for_user(acme.id(), "20251235", "이영희")
        .unwrap();

    assert_eq!(index.company_id(), acme.id());
    assert_eq!(
        index.lookup(acme.id(), "20251235", "이영희"),
        BTreeSet::from([ProductCategory::FullDay, ProductCategory::Evening])
    );
}

#[test]
fn test_snapshot_collects_company_catalog_and_whitelist() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let company = seed_company(&mut persistence, AdmissionMode::Whl, 10, 3);
    seed_product(&mut persistence, ProductCategory::Morning, 4);
    seed_product(&mut persistence, ProductCategory::Evening, 4);
    persistence
        .add_whitelist_entry(&WhitelistEntry::new(
            company.id(),
            ProductCategory::Evening,
            "20251235",
            "이영희",
        ))
        .unwrap();

    let snapshot = persistence
        .load_snapshot(company.id(), &create_user(company.id()))
        .unwrap();

    assert_eq!(snapshot.company, company);
    assert_eq!(snapshot.catalog.len(), 2);
    assert_eq!(snapshot.whitelist.len(), 1);
    assert!(snapshot.existing_periods.is_empty());
}

#[test]
fn test_snapshot_for_missing_company_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.load_snapshot(7, &create_user(7));

    assert!(matches!(result, Err(PersistenceError::CompanyNotFound(7))));
}
