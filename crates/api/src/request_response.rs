// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_admission::PaymentHandoff;
use slot_admission_audit::AuditEvent;
use slot_admission_domain::{
    AdmissionMode, Company, CompanyStatus, EligibilityVerdict, ProductCategory, ReasonCode,
    Selection, User, VerificationStatus,
};
use time::OffsetDateTime;

/// The member making a request, as the caller identifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub user_id: i64,
    /// The company the member belongs to.
    pub company_id: i64,
    pub employee_no: String,
    pub name: String,
}

impl MemberInfo {
    /// Converts the DTO into a domain user.
    #[must_use]
    pub fn to_user(&self) -> User {
        User::new(self.user_id, self.company_id, &self.employee_no, &self.name)
    }
}

/// API request to evaluate eligibility without committing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    /// The company whose offer is being evaluated.
    pub company_id: i64,
    pub member: MemberInfo,
}

/// API response carrying an eligibility verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResponse {
    pub company_id: i64,
    pub eligible: bool,
    pub reason_code: Option<ReasonCode>,
    /// User-facing text for `reason_code`.
    pub reason_message: Option<String>,
    pub allowed_product_categories: Vec<ProductCategory>,
}

impl EligibilityResponse {
    #[must_use]
    pub fn from_verdict(company_id: i64, verdict: &EligibilityVerdict) -> Self {
        Self {
            company_id,
            eligible: verdict.eligible,
            reason_code: verdict.reason_code,
            reason_message: verdict.reason_code.map(|r| r.message().to_string()),
            allowed_product_categories: verdict.allowed_product_categories.iter().copied().collect(),
        }
    }
}

/// API request to admit a member into one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmitRequest {
    pub company_id: i64,
    pub member: MemberInfo,
    /// The single product being purchased, if one was chosen.
    pub product_id: Option<i64>,
    #[serde(default)]
    pub include_locker: bool,
    /// First day of the membership.
    pub start_date: NaiveDate,
    #[serde(default)]
    pub verification: VerificationStatus,
    /// Caller-supplied correlation id, recorded as the audit cause.
    #[serde(default)]
    pub request_id: Option<String>,
}

impl AdmitRequest {
    #[must_use]
    pub const fn selection(&self) -> Selection {
        match self.product_id {
            Some(product_id) => Selection::product(product_id, self.include_locker),
            None => Selection {
                product_id: None,
                include_locker: self.include_locker,
            },
        }
    }
}

/// API response for a committed admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmitResponse {
    pub purchase_id: i64,
    pub audit_event_id: i64,
    /// What the payment step needs to charge the member.
    pub handoff: PaymentHandoff,
    pub membership_start: NaiveDate,
    pub membership_end: NaiveDate,
    pub locker_start: Option<NaiveDate>,
    pub locker_end: Option<NaiveDate>,
    pub message: String,
}

/// A company's admission configuration and live counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResponse {
    pub company_id: i64,
    pub code: String,
    pub name: String,
    pub mode: AdmissionMode,
    pub status: CompanyStatus,
    pub quota: u32,
    pub registered: u32,
    pub remaining: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub available_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub available_until: OffsetDateTime,
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id(),
            code: company.code().to_string(),
            name: company.name().to_string(),
            mode: company.mode(),
            status: company.status(),
            quota: company.quota(),
            registered: company.registered(),
            remaining: company.remaining(),
            available_from: company.available_from(),
            available_until: company.available_until(),
        }
    }
}

/// One entry of a company's audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEventResponse {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action: String,
    pub details: Option<String>,
    pub company_id: i64,
    pub company_code: String,
    pub user_id: i64,
}

impl From<AuditEvent> for AuditEventResponse {
    fn from(event: AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id,
            actor_type: event.actor.actor_type,
            cause_id: event.cause.id,
            cause_description: event.cause.description,
            action: event.action.name,
            details: event.action.details,
            company_id: event.scope.company_id,
            company_code: event.scope.company_code,
            user_id: event.user_id,
        }
    }
}

/// API response listing a company's audit history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditHistoryResponse {
    pub company_id: i64,
    pub events: Vec<AuditEventResponse>,
}
