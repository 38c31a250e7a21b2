// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono::NaiveDate;
use slot_admission_domain::{
    Company, ExistingPeriod, Product, Selection, User, VerificationStatus, WhitelistIndex,
};
use time::OffsetDateTime;

/// Everything resolved from storage for one admission request.
///
/// The snapshot is read once per request and never mutated by planning.
/// Counters in it are advisory: storage re-checks them atomically when the
/// plan is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionSnapshot {
    /// The company the member is purchasing under.
    pub company: Company,
    /// Products on offer.
    pub catalog: Vec<Product>,
    /// Unconsumed whitelist entries for the member, scoped to `company`.
    pub whitelist: WhitelistIndex,
    /// The member's previously purchased periods.
    pub existing_periods: Vec<ExistingPeriod>,
}

impl AdmissionSnapshot {
    /// Creates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SnapshotMismatch`] if the whitelist was loaded
    /// for a different company.
    pub fn new(
        company: Company,
        catalog: Vec<Product>,
        whitelist: WhitelistIndex,
        existing_periods: Vec<ExistingPeriod>,
    ) -> Result<Self, CoreError> {
        if whitelist.company_id() != company.id() {
            return Err(CoreError::SnapshotMismatch {
                company_id: company.id(),
                whitelist_company_id: whitelist.company_id(),
            });
        }
        Ok(Self {
            company,
            catalog,
            whitelist,
            existing_periods,
        })
    }
}

/// A member's request to purchase a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRequest {
    pub user: User,
    pub selection: Selection,
    /// First day of the membership. The term runs for the product's months.
    pub start_date: NaiveDate,
    pub verification: VerificationStatus,
    /// Evaluation instant, compared against the registration window.
    pub now: OffsetDateTime,
}
