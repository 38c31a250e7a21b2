// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::plan::{AdmissionDecision, AdmissionPlan, AdmissionRejection};
use crate::snapshot::{AdmissionRequest, AdmissionSnapshot};
use slot_admission_audit::{Action, Actor, AuditEvent, Cause, CompanyScope};
use slot_admission_domain::{
    AdmissionMode, AdmissionSettings, EligibilityVerdict, ExistingPeriod, GuardContext,
    PeriodKind, Product, ReasonCode, User, check_overlap, evaluate_eligibility, proposed_period,
    quote_total, run_all_guards,
};

/// Evaluates eligibility for listing selectable categories.
///
/// This is the read-only path used before the member picks a product. It
/// never runs guards and never produces an audit event.
///
/// # Errors
///
/// Returns an error if the snapshot's company cannot be resolved.
pub fn preview(
    settings: &AdmissionSettings,
    snapshot: &AdmissionSnapshot,
    user: &User,
) -> Result<EligibilityVerdict, CoreError> {
    let verdict = evaluate_eligibility(
        user,
        &snapshot.company,
        &snapshot.catalog,
        &snapshot.whitelist,
        settings,
    )?;
    Ok(verdict)
}

/// Plans an admission against a resolved snapshot.
///
/// Runs eligibility, then the guards in their fixed order, then the overlap
/// check for the membership period and, when a locker is included, the
/// locker period. The returned plan has not been committed; storage is
/// responsible for the atomic quota decrement and whitelist consumption.
///
/// # Arguments
///
/// * `settings` - The administrative settings for this evaluation
/// * `snapshot` - Company, catalog, whitelist and existing periods
/// * `request` - The member's selection and evaluation instant
/// * `actor` - Who is performing the admission
/// * `cause` - Why the admission is being performed
///
/// # Errors
///
/// Returns an error if:
/// - The company id is not resolvable
/// - The selection names a product missing from the catalog
/// - The proposed period cannot be computed
pub fn plan_admission(
    settings: &AdmissionSettings,
    snapshot: &AdmissionSnapshot,
    request: &AdmissionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<AdmissionDecision, CoreError> {
    let company = &snapshot.company;
    let verdict = preview(settings, snapshot, &request.user)?;

    let ctx = GuardContext::new(
        company,
        &request.user,
        request.selection,
        &snapshot.catalog,
        &verdict,
        request.verification,
        settings,
        request.now,
    )?;

    if let Some(reason) = run_all_guards(&ctx).reason_code {
        return Ok(AdmissionDecision::Rejected(guard_rejection(reason, &verdict)));
    }
    if let Some(reason) = verdict.reason_code {
        return Ok(AdmissionDecision::Rejected(
            AdmissionRejection::Ineligible {
                reason,
                verdict: verdict.clone(),
            },
        ));
    }
    let Some(product) = ctx.product.cloned() else {
        return Ok(AdmissionDecision::Rejected(AdmissionRejection::Guard {
            reason: ReasonCode::NoSelection,
        }));
    };

    let membership_period = proposed_period(
        PeriodKind::Membership,
        request.start_date,
        product.months,
    )?;
    if let Some(conflicting) = first_conflict(&snapshot.existing_periods, &membership_period) {
        return Ok(AdmissionDecision::Rejected(AdmissionRejection::Overlap {
            conflicting,
        }));
    }

    let locker_period = if request.selection.include_locker {
        let period = proposed_period(PeriodKind::Locker, request.start_date, product.months)?;
        if let Some(conflicting) = first_conflict(&snapshot.existing_periods, &period) {
            return Ok(AdmissionDecision::Rejected(AdmissionRejection::Overlap {
                conflicting,
            }));
        }
        Some(period)
    } else {
        None
    };

    let total_amount = quote_total(settings, &product, request.selection.include_locker);
    let consume_whitelist =
        company.mode() == AdmissionMode::Whl && settings.consume_whitelist_on_admission;

    let audit_event = AuditEvent::new(
        actor,
        cause,
        admit_action(&product, request.selection.include_locker, total_amount),
        CompanyScope::new(company.id(), company.code()),
        request.user.id,
    );

    Ok(AdmissionDecision::Approved(Box::new(AdmissionPlan {
        company_id: company.id(),
        mode: company.mode(),
        user: request.user.clone(),
        verdict,
        selection: request.selection,
        product,
        membership_period,
        locker_period,
        total_amount,
        consume_whitelist,
        audit_event,
    })))
}

/// A capacity or whitelist failure on an ineligible verdict reports the
/// verdict's reason, so a member missing from every bucket sees
/// `NOT_ON_WHITELIST` rather than the per-product code.
fn guard_rejection(reason: ReasonCode, verdict: &EligibilityVerdict) -> AdmissionRejection {
    match verdict.reason_code {
        Some(verdict_reason)
            if matches!(
                reason,
                ReasonCode::SoldOut | ReasonCode::NotWhitelistedForProduct
            ) =>
        {
            AdmissionRejection::Ineligible {
                reason: verdict_reason,
                verdict: verdict.clone(),
            }
        }
        _ => AdmissionRejection::Guard { reason },
    }
}

fn first_conflict(existing: &[ExistingPeriod], proposed: &ExistingPeriod) -> Option<ExistingPeriod> {
    check_overlap(existing, proposed).conflicting_period
}

fn admit_action(product: &Product, include_locker: bool, total_amount: u64) -> Action {
    Action::new(
        String::from("Admit"),
        Some(format!(
            "product={} category={} locker={include_locker} total={total_amount}",
            product.id, product.category
        )),
    )
}
