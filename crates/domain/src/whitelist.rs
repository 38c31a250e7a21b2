// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ProductCategory, WhitelistEntry};
use std::collections::BTreeSet;

/// Read access to the approved whitelist.
///
/// Implementations answer from already-resolved data; a lookup never performs
/// I/O.
pub trait WhitelistLookup {
    /// Returns every category for which `(employee_no, name)` is approved
    /// under `company_id`.
    fn lookup(&self, company_id: i64, employee_no: &str, name: &str) -> BTreeSet<ProductCategory>;
}

/// In-memory whitelist scoped to a single company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistIndex {
    company_id: i64,
    entries: Vec<WhitelistEntry>,
}

impl WhitelistIndex {
    /// Builds an index for `company_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry belongs to a different company.
    pub fn for_company(
        company_id: i64,
        entries: Vec<WhitelistEntry>,
    ) -> Result<Self, DomainError> {
        if let Some(stray) = entries.iter().find(|e| e.company_id != company_id) {
            return Err(DomainError::WhitelistScopeMismatch {
                company_id,
                entry_company_id: stray.company_id,
            });
        }
        Ok(Self {
            company_id,
            entries,
        })
    }

    /// An index with no approved entries.
    #[must_use]
    pub const fn empty(company_id: i64) -> Self {
        Self {
            company_id,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn company_id(&self) -> i64 {
        self.company_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WhitelistLookup for WhitelistIndex {
    fn lookup(&self, company_id: i64, employee_no: &str, name: &str) -> BTreeSet<ProductCategory> {
        if company_id != self.company_id {
            return BTreeSet::new();
        }
        self.entries
            .iter()
            .filter(|e| e.matches(employee_no, name))
            .map(|e| e.category)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_collects_every_matching_bucket() {
        let index = WhitelistIndex::for_company(
            7,
            vec![
                WhitelistEntry::new(7, ProductCategory::Morning, "20251235", "이영희"),
                WhitelistEntry::new(7, ProductCategory::Evening, "20251235", "이영희"),
                WhitelistEntry::new(7, ProductCategory::FullDay, "20251236", "김철수"),
            ],
        )
        .unwrap();

        let found = index.lookup(7, "20251235", "이영희");
        assert_eq!(
            found,
            BTreeSet::from([ProductCategory::Morning, ProductCategory::Evening])
        );
    }

    #[test]
    fn test_lookup_requires_exact_name_and_number() {
        let index = WhitelistIndex::for_company(
            7,
            vec![WhitelistEntry::new(
                7,
                ProductCategory::Evening,
                "20251235",
                "이영희",
            )],
        )
        .unwrap();

        assert!(index.lookup(7, "20251235", "이영").is_empty());
        assert!(index.lookup(7, "2025123", "이영희").is_empty());
    }

    #[test]
    fn test_lookup_for_other_company_is_empty() {
        let index = WhitelistIndex::for_company(
            7,
            vec![WhitelistEntry::new(
                7,
                ProductCategory::Evening,
                "20251235",
                "이영희",
            )],
        )
        .unwrap();

        assert!(index.lookup(8, "20251235", "이영희").is_empty());
    }

    #[test]
    fn test_entry_from_other_company_is_rejected() {
        let result = WhitelistIndex::for_company(
            7,
            vec![WhitelistEntry::new(
                9,
                ProductCategory::Evening,
                "20251235",
                "이영희",
            )],
        );

        assert_eq!(
            result,
            Err(DomainError::WhitelistScopeMismatch {
                company_id: 7,
                entry_company_id: 9,
            })
        );
    }
}
