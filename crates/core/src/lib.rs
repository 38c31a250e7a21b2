// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admission planning.
//!
//! Combines eligibility, guards, overlap and pricing into a single decision
//! over an already-resolved [`AdmissionSnapshot`]. Planning is pure; the
//! resulting [`AdmissionPlan`] is committed by the storage layer.

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

mod apply;
mod error;
mod plan;
mod snapshot;

#[cfg(test)]
mod tests;

pub use apply::{plan_admission, preview};
pub use error::CoreError;
pub use plan::{AdmissionDecision, AdmissionPlan, AdmissionRejection, PaymentHandoff};
pub use snapshot::{AdmissionRequest, AdmissionSnapshot};
