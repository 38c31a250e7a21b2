// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and admission rules.
//!
//! Everything in this crate is pure: inputs are already-resolved snapshots
//! and outputs are values. Quota decrements and whitelist consumption belong
//! to the storage layer, never to evaluation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod error;
mod guards;
mod overlap;
mod pricing;
mod reason;
mod settings;
mod types;
mod whitelist;

#[cfg(test)]
mod tests;

pub use eligibility::{EligibilityVerdict, evaluate_eligibility};
pub use error::DomainError;
pub use guards::{Guard, GuardContext, GuardResult, run_all_guards};
pub use overlap::{
    OverlapResult, add_calendar_months, check_overlap, periods_overlap, proposed_period,
};
pub use pricing::quote_total;
pub use reason::ReasonCode;
pub use settings::{AdmissionSettings, CategoryPolicies, CategoryPolicy, LockerPolicy};
pub use types::{
    AdmissionMode, Company, CompanyStatus, ExistingPeriod, PeriodKind, Product, ProductCategory,
    Selection, User, VerificationStatus, WhitelistEntry,
};
pub use whitelist::{WhitelistIndex, WhitelistLookup};
