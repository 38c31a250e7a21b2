// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slot_admission_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while planning an admission.
///
/// Business refusals are not errors; they are returned as an
/// [`AdmissionRejection`](crate::AdmissionRejection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The inputs violated a domain contract.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The snapshot's whitelist was loaded for a different company.
    #[error("Whitelist is scoped to company {whitelist_company_id} but the snapshot is for company {company_id}")]
    SnapshotMismatch {
        company_id: i64,
        whitelist_company_id: i64,
    },
}
