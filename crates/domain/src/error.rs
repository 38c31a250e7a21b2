// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use thiserror::Error;

/// Contract violations by the caller of the admission rules.
///
/// These are never business outcomes. A company that is sold out, closed, or
/// a user missing from a whitelist is reported through a
/// [`ReasonCode`](crate::ReasonCode) on a verdict; a `DomainError` means the
/// inputs themselves were malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Registered count exceeds the company quota.
    #[error("Company {company_id} has {registered} registrations but a quota of {quota}")]
    RegisteredExceedsQuota {
        /// The company identifier.
        company_id: i64,
        /// The configured quota.
        quota: u32,
        /// The registered count.
        registered: u32,
    },
    /// Registration window closes before it opens.
    #[error("Company {company_id} registration window closes before it opens")]
    InvalidRegistrationWindow {
        /// The company identifier.
        company_id: i64,
    },
    /// A company identifier could not be resolved.
    #[error("Company {0} not found")]
    CompanyNotFound(i64),
    /// A product identifier could not be resolved in the catalog.
    #[error("Product {0} not found in catalog")]
    ProductNotFound(i64),
    /// A product term must be at least one month.
    #[error("Product {product_id} has an invalid term of {months} months")]
    InvalidProductTerm {
        /// The product identifier.
        product_id: i64,
        /// The invalid term.
        months: u32,
    },
    /// A period ends on or before its start.
    #[error("Invalid period: end {end} is not after start {start}")]
    InvalidPeriod {
        /// The period start date.
        start: NaiveDate,
        /// The period end date.
        end: NaiveDate,
    },
    /// Calendar arithmetic left the representable date range.
    #[error("Date arithmetic overflow while adding {months} months to {start}")]
    DateArithmeticOverflow {
        /// The start date.
        start: NaiveDate,
        /// The number of months being added.
        months: u32,
    },
    /// A whitelist was built from entries belonging to another company.
    #[error("Whitelist entry for company {entry_company_id} cannot be used for company {company_id}")]
    WhitelistScopeMismatch {
        /// The company the whitelist is scoped to.
        company_id: i64,
        /// The company named by the offending entry.
        entry_company_id: i64,
    },
    /// Unknown product category key.
    #[error("Invalid product category: {0}")]
    InvalidCategory(String),
    /// Unknown admission mode key.
    #[error("Invalid admission mode: {0}")]
    InvalidMode(String),
    /// Unknown company status key.
    #[error("Invalid company status: {0}")]
    InvalidStatus(String),
    /// Unknown period kind key.
    #[error("Invalid period kind: {0}")]
    InvalidPeriodKind(String),
    /// Unknown verification status key.
    #[error("Invalid verification status: {0}")]
    InvalidVerificationStatus(String),
    /// Unknown reason code.
    #[error("Invalid reason code: {0}")]
    InvalidReasonCode(String),
}
