// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admission guards.
//!
//! A guard is a pure predicate over a [`GuardContext`]. Guards run in a fixed
//! order and the first failure wins, so the member always sees the earliest,
//! most actionable reason.
//!
//! ## Order
//!
//! 1. `CompanyMatch`
//! 2. `CompanyActive`
//! 3. `RegistrationWindow` (always passes when window enforcement is off)
//! 4. `SelectionPresent`
//! 5. `ProductEnabled`
//! 6. `CapacityOrWhitelist`
//! 7. `LockerConsistency`

use crate::eligibility::EligibilityVerdict;
use crate::error::DomainError;
use crate::reason::ReasonCode;
use crate::settings::AdmissionSettings;
use crate::types::{AdmissionMode, Company, Product, Selection, User, VerificationStatus};
use serde::Serialize;
use time::OffsetDateTime;

/// Result of running one guard or the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardResult {
    pub pass: bool,
    pub reason_code: Option<ReasonCode>,
    pub reason_message: Option<String>,
}

impl GuardResult {
    #[must_use]
    pub const fn passed() -> Self {
        Self {
            pass: true,
            reason_code: None,
            reason_message: None,
        }
    }

    #[must_use]
    pub fn failed(reason: ReasonCode) -> Self {
        Self {
            pass: false,
            reason_code: Some(reason),
            reason_message: Some(reason.message().to_string()),
        }
    }

    fn check(condition: bool, reason: ReasonCode) -> Self {
        if condition {
            Self::passed()
        } else {
            Self::failed(reason)
        }
    }
}

/// Everything a guard may look at.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext<'a> {
    pub company: &'a Company,
    pub user: &'a User,
    pub selection: Selection,
    /// The selected product resolved from the catalog, if any.
    pub product: Option<&'a Product>,
    pub verdict: &'a EligibilityVerdict,
    pub verification: VerificationStatus,
    pub settings: &'a AdmissionSettings,
    pub now: OffsetDateTime,
}

impl<'a> GuardContext<'a> {
    /// Builds a context, resolving the selected product against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProductNotFound`] if the selection names a
    /// product that is not in the catalog.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: &'a Company,
        user: &'a User,
        selection: Selection,
        catalog: &'a [Product],
        verdict: &'a EligibilityVerdict,
        verification: VerificationStatus,
        settings: &'a AdmissionSettings,
        now: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let product = match selection.product_id {
            Some(id) => Some(
                catalog
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or(DomainError::ProductNotFound(id))?,
            ),
            None => None,
        };
        Ok(Self {
            company,
            user,
            selection,
            product,
            verdict,
            verification,
            settings,
            now,
        })
    }
}

/// The fixed set of admission guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    CompanyMatch,
    CompanyActive,
    RegistrationWindow,
    SelectionPresent,
    ProductEnabled,
    CapacityOrWhitelist,
    LockerConsistency,
}

impl Guard {
    /// Evaluation order.
    pub const ORDER: [Self; 7] = [
        Self::CompanyMatch,
        Self::CompanyActive,
        Self::RegistrationWindow,
        Self::SelectionPresent,
        Self::ProductEnabled,
        Self::CapacityOrWhitelist,
        Self::LockerConsistency,
    ];

    /// Runs this guard against `ctx`.
    #[must_use]
    pub fn check(self, ctx: &GuardContext<'_>) -> GuardResult {
        match self {
            Self::CompanyMatch => GuardResult::check(
                ctx.user.company_id == ctx.company.id(),
                ReasonCode::CompanyMismatch,
            ),
            Self::CompanyActive => {
                GuardResult::check(ctx.company.is_active(), ReasonCode::CompanyInactive)
            }
            Self::RegistrationWindow => GuardResult::check(
                !ctx.settings.enforce_registration_window || ctx.company.is_window_open(ctx.now),
                ReasonCode::WindowClosed,
            ),
            Self::SelectionPresent => {
                GuardResult::check(ctx.product.is_some(), ReasonCode::NoSelection)
            }
            Self::ProductEnabled => GuardResult::check(
                ctx.product
                    .is_some_and(|p| ctx.settings.is_enabled(p.category)),
                ReasonCode::ProductDisabled,
            ),
            Self::CapacityOrWhitelist => check_capacity_or_whitelist(ctx),
            Self::LockerConsistency => GuardResult::check(
                !ctx.selection.include_locker || ctx.settings.locker.enabled,
                ReasonCode::LockerDisabled,
            ),
        }
    }
}

fn check_capacity_or_whitelist(ctx: &GuardContext<'_>) -> GuardResult {
    let Some(product) = ctx.product else {
        return GuardResult::failed(ReasonCode::NoSelection);
    };
    match ctx.company.mode() {
        AdmissionMode::Fcfs => GuardResult::check(
            ctx.company.remaining() > 0 && product.has_stock(),
            ReasonCode::SoldOut,
        ),
        AdmissionMode::Whl => {
            let verified = !ctx.settings.require_whitelist_verification
                || ctx.verification == VerificationStatus::Confirmed;
            GuardResult::check(
                ctx.verdict.allows(product.category) && verified,
                ReasonCode::NotWhitelistedForProduct,
            )
        }
    }
}

/// Runs every guard in order and returns the first failure, or a pass.
#[must_use]
pub fn run_all_guards(ctx: &GuardContext<'_>) -> GuardResult {
    Guard::ORDER
        .iter()
        .map(|guard| guard.check(ctx))
        .find(|result| !result.pass)
        .unwrap_or_else(GuardResult::passed)
}
