// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use slot_admission_audit::AuditEvent;
use slot_admission_domain::{
    AdmissionMode, EligibilityVerdict, ExistingPeriod, Product, ReasonCode, Selection, User,
};

/// An approved admission, ready to be committed by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionPlan {
    pub company_id: i64,
    pub mode: AdmissionMode,
    pub user: User,
    pub verdict: EligibilityVerdict,
    pub selection: Selection,
    pub product: Product,
    pub membership_period: ExistingPeriod,
    /// Present only when the selection includes a locker.
    pub locker_period: Option<ExistingPeriod>,
    /// Amount due in whole won.
    pub total_amount: u64,
    /// Whether committing must use up the member's whitelist entry.
    pub consume_whitelist: bool,
    pub audit_event: AuditEvent,
}

impl AdmissionPlan {
    /// The value forwarded to the payment orchestrator.
    #[must_use]
    pub fn payment_handoff(&self) -> PaymentHandoff {
        PaymentHandoff {
            verdict: self.verdict.clone(),
            selection: self.selection,
            total_amount: self.total_amount,
        }
    }
}

/// What the payment orchestrator receives, and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentHandoff {
    pub verdict: EligibilityVerdict,
    pub selection: Selection,
    pub total_amount: u64,
}

/// Why an admission was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionRejection {
    /// A guard failed. The first failing guard in order is reported.
    Guard { reason: ReasonCode },
    /// Every guard passed but the verdict itself is not eligible.
    Ineligible {
        reason: ReasonCode,
        verdict: EligibilityVerdict,
    },
    /// The proposed period collides with one already purchased.
    Overlap { conflicting: ExistingPeriod },
}

impl AdmissionRejection {
    /// The machine-readable reason for this rejection.
    #[must_use]
    pub const fn reason_code(&self) -> ReasonCode {
        match self {
            Self::Guard { reason } | Self::Ineligible { reason, .. } => *reason,
            Self::Overlap { .. } => ReasonCode::PeriodOverlap,
        }
    }

    /// The user-facing message for this rejection.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Overlap { conflicting } => format!(
                "{} ({} ~ {})",
                ReasonCode::PeriodOverlap.message(),
                conflicting.start(),
                conflicting.end()
            ),
            _ => self.reason_code().message().to_string(),
        }
    }
}

/// The outcome of planning one admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    Approved(Box<AdmissionPlan>),
    Rejected(AdmissionRejection),
}

impl AdmissionDecision {
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }
}
