// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for admissions and read-only lookups.

use slot_admission::{
    AdmissionDecision, AdmissionPlan, AdmissionRequest, AdmissionSnapshot, plan_admission, preview,
};
use slot_admission_audit::{Actor, Cause};
use slot_admission_domain::{AdmissionSettings, Company, EligibilityVerdict, User};
use slot_admission_persistence::{CommitOutcome, CommittedAdmission, Persistence};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::request_response::{
    AdmitRequest, AdmitResponse, AuditEventResponse, AuditHistoryResponse, CompanyResponse,
    EligibilityResponse,
};

/// Evaluates whether `user` may purchase from `company_id`.
///
/// Nothing is reserved or consumed; this is what a product page shows before
/// checkout.
///
/// # Errors
///
/// Returns an error if the company does not exist or storage fails.
pub fn check_eligibility(
    persistence: &mut Persistence,
    settings: &AdmissionSettings,
    company_id: i64,
    user: &User,
) -> Result<EligibilityResponse, ApiError> {
    let snapshot: AdmissionSnapshot = persistence.load_snapshot(company_id, user)?;
    let verdict: EligibilityVerdict = preview(settings, &snapshot, user)?;

    debug!(
        company_id,
        user_id = user.id,
        eligible = verdict.eligible,
        reason = ?verdict.reason_code,
        "Evaluated eligibility"
    );

    Ok(EligibilityResponse::from_verdict(company_id, &verdict))
}

/// Admits a member: plans against a fresh snapshot, then commits atomically.
///
/// The returned hand-off is what the payment step charges. A refusal at
/// either stage is reported as [`ApiError::AdmissionRejected`] with the
/// reason code the member should see.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `settings` - Administrative enable flags and prices
/// * `request` - The admission request
/// * `now` - The instant the request is evaluated at
///
/// # Errors
///
/// Returns an error if:
/// - The company or selected product does not exist
/// - The admission is refused
/// - Storage fails
pub fn admit(
    persistence: &mut Persistence,
    settings: &AdmissionSettings,
    request: AdmitRequest,
    now: OffsetDateTime,
) -> Result<AdmitResponse, ApiError> {
    let user: User = request.member.to_user();
    let company_id: i64 = request.company_id;
    let cause: Cause = admission_cause(&request, now);
    let admission_request: AdmissionRequest = AdmissionRequest {
        user: user.clone(),
        selection: request.selection(),
        start_date: request.start_date,
        verification: request.verification,
        now,
    };

    let snapshot: AdmissionSnapshot = persistence.load_snapshot(company_id, &user)?;
    let decision: AdmissionDecision = plan_admission(
        settings,
        &snapshot,
        &admission_request,
        Actor::member(user.id),
        cause,
    )?;

    let plan: AdmissionPlan = match decision {
        AdmissionDecision::Approved(plan) => *plan,
        AdmissionDecision::Rejected(rejection) => {
            info!(
                company_id,
                user_id = user.id,
                reason = %rejection.reason_code(),
                "Admission refused at planning"
            );
            return Err(rejection.into());
        }
    };

    let committed: CommittedAdmission = match persistence.commit_admission(&plan)? {
        CommitOutcome::Committed(committed) => committed,
        CommitOutcome::Rejected(rejection) => {
            warn!(
                company_id,
                user_id = user.id,
                reason = %rejection.reason_code(),
                "Admission lost a race at commit"
            );
            return Err(rejection.into());
        }
    };

    let audit_event_id: i64 = committed.audit_event.event_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Committed audit event has no id"),
    })?;

    Ok(AdmitResponse {
        purchase_id: committed.purchase_id,
        audit_event_id,
        handoff: plan.payment_handoff(),
        membership_start: plan.membership_period.start(),
        membership_end: plan.membership_period.end(),
        locker_start: plan.locker_period.map(|p| p.start()),
        locker_end: plan.locker_period.map(|p| p.end()),
        message: format!(
            "Admitted member {} to product {} of company {}",
            user.employee_no, plan.product.id, company_id
        ),
    })
}

fn admission_cause(request: &AdmitRequest, now: OffsetDateTime) -> Cause {
    let id: String = request.request_id.clone().unwrap_or_else(|| {
        format!(
            "admit-{}-{}-{}",
            request.company_id,
            request.member.user_id,
            now.unix_timestamp()
        )
    });
    Cause::new(id, String::from("Member checkout"))
}

/// Returns one company's configuration and live counters.
///
/// # Errors
///
/// Returns an error if the company does not exist.
pub fn get_company(persistence: &mut Persistence, company_id: i64) -> Result<CompanyResponse, ApiError> {
    let company: Company = persistence.get_company(company_id)?;
    Ok(CompanyResponse::from(&company))
}

/// Lists every company.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_companies(persistence: &mut Persistence) -> Result<Vec<CompanyResponse>, ApiError> {
    Ok(persistence
        .list_companies()?
        .iter()
        .map(CompanyResponse::from)
        .collect())
}

/// Returns a company's audit history, oldest first.
///
/// # Errors
///
/// Returns an error if the company does not exist or an event cannot be read.
pub fn get_audit_history(
    persistence: &mut Persistence,
    company_id: i64,
) -> Result<AuditHistoryResponse, ApiError> {
    // Resolve first so an unknown company is a 404 rather than an empty list.
    persistence.get_company(company_id)?;
    let events: Vec<AuditEventResponse> = persistence
        .list_audit_events(company_id)?
        .into_iter()
        .map(AuditEventResponse::from)
        .collect();

    Ok(AuditHistoryResponse { company_id, events })
}
