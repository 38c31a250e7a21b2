// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for membership slot registration.
//!
//! Translates request DTOs into domain values, runs the planner against a
//! fresh storage snapshot, commits, and translates every lower-layer error
//! into [`ApiError`]. Transport concerns live in the server.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{admit, check_eligibility, get_audit_history, get_company, list_companies};
pub use request_response::{
    AdmitRequest, AdmitResponse, AuditEventResponse, AuditHistoryResponse, CompanyResponse,
    EligibilityRequest, EligibilityResponse, MemberInfo,
};
