// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility evaluation.
//!
//! Decides, for one `(user, company)` pair, whether a purchase attempt may
//! proceed at all and which product categories are selectable.
//!
//! ## Invariants
//!
//! - Evaluation is a pure function of its inputs
//! - It never decrements quota or consumes whitelist entries
//! - FCFS: selectable categories are those with stock that are enabled
//! - FCFS: an exhausted company quota is always `SOLD_OUT`
//! - WHL: selectable categories are exactly the user's whitelist buckets
//! - WHL: company quota counters never gate eligibility

use crate::error::DomainError;
use crate::reason::ReasonCode;
use crate::settings::AdmissionSettings;
use crate::types::{AdmissionMode, Company, Product, ProductCategory, User};
use crate::whitelist::WhitelistLookup;
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of an eligibility evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reason_code: Option<ReasonCode>,
    pub allowed_product_categories: BTreeSet<ProductCategory>,
}

impl EligibilityVerdict {
    #[must_use]
    pub const fn eligible(allowed_product_categories: BTreeSet<ProductCategory>) -> Self {
        Self {
            eligible: true,
            reason_code: None,
            allowed_product_categories,
        }
    }

    #[must_use]
    pub const fn ineligible(
        reason: ReasonCode,
        allowed_product_categories: BTreeSet<ProductCategory>,
    ) -> Self {
        Self {
            eligible: false,
            reason_code: Some(reason),
            allowed_product_categories,
        }
    }

    /// Returns whether `category` may be selected.
    #[must_use]
    pub fn allows(&self, category: ProductCategory) -> bool {
        self.allowed_product_categories.contains(&category)
    }
}

/// Evaluates whether `user` may purchase from `company`.
///
/// # Arguments
///
/// * `user` - The member attempting a purchase
/// * `company` - The company snapshot the purchase is made under
/// * `catalog` - Products on offer, used for stock in FCFS mode
/// * `whitelist` - Approved whitelist, queried with `company.id()`
/// * `settings` - Administrative enable flags
///
/// # Errors
///
/// Returns [`DomainError::CompanyNotFound`] if the company id is not a
/// resolvable (positive) identifier. Business refusals are never errors;
/// they are reported on the verdict.
pub fn evaluate_eligibility<W: WhitelistLookup + ?Sized>(
    user: &User,
    company: &Company,
    catalog: &[Product],
    whitelist: &W,
    settings: &AdmissionSettings,
) -> Result<EligibilityVerdict, DomainError> {
    if company.id() <= 0 {
        return Err(DomainError::CompanyNotFound(company.id()));
    }

    let verdict = match company.mode() {
        AdmissionMode::Fcfs => evaluate_fcfs(company, catalog, settings),
        AdmissionMode::Whl => evaluate_whl(user, company, whitelist),
    };
    Ok(verdict)
}

fn evaluate_fcfs(
    company: &Company,
    catalog: &[Product],
    settings: &AdmissionSettings,
) -> EligibilityVerdict {
    let allowed: BTreeSet<ProductCategory> = catalog
        .iter()
        .filter(|p| p.has_stock() && settings.is_enabled(p.category))
        .map(|p| p.category)
        .collect();

    // An exhausted quota reports SOLD_OUT whatever the company status.
    if company.remaining() == 0 {
        return EligibilityVerdict::ineligible(ReasonCode::SoldOut, allowed);
    }
    if !company.is_active() {
        return EligibilityVerdict::ineligible(ReasonCode::CompanyInactive, allowed);
    }
    EligibilityVerdict::eligible(allowed)
}

fn evaluate_whl<W: WhitelistLookup + ?Sized>(
    user: &User,
    company: &Company,
    whitelist: &W,
) -> EligibilityVerdict {
    let allowed = whitelist.lookup(company.id(), &user.employee_no, &user.name);
    if allowed.is_empty() {
        return EligibilityVerdict::ineligible(ReasonCode::NotOnWhitelist, allowed);
    }
    EligibilityVerdict::eligible(allowed)
}
