// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use slot_admission::{AdmissionRejection, CoreError};
use slot_admission_domain::{DomainError, ReasonCode};
use slot_admission_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The admission was refused for a business reason.
    #[error("Admission rejected ({reason_code}): {message}")]
    AdmissionRejected {
        /// The machine-readable reason.
        reason_code: ReasonCode,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The reason code carried by a business rejection.
    #[must_use]
    pub const fn reason_code(&self) -> Option<ReasonCode> {
        match self {
            Self::AdmissionRejected { reason_code, .. } => Some(*reason_code),
            _ => None,
        }
    }
}

impl From<AdmissionRejection> for ApiError {
    fn from(rejection: AdmissionRejection) -> Self {
        Self::AdmissionRejected {
            reason_code: rejection.reason_code(),
            message: rejection.message(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::CompanyNotFound(company_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Company"),
            message: format!("Company {company_id} does not exist"),
        },
        DomainError::ProductNotFound(product_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Product"),
            message: format!("Product {product_id} does not exist"),
        },
        DomainError::InvalidPeriod { .. } | DomainError::DateArithmeticOverflow { .. } => {
            ApiError::InvalidInput {
                field: String::from("start_date"),
                message: err.to_string(),
            }
        }
        DomainError::InvalidCategory(value) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!("Unknown product category '{value}'"),
        },
        DomainError::InvalidVerificationStatus(value) => ApiError::InvalidInput {
            field: String::from("verification"),
            message: format!("Unknown verification status '{value}'"),
        },
        DomainError::RegisteredExceedsQuota { .. }
        | DomainError::InvalidRegistrationWindow { .. }
        | DomainError::InvalidProductTerm { .. }
        | DomainError::WhitelistScopeMismatch { .. }
        | DomainError::InvalidMode(_)
        | DomainError::InvalidStatus(_)
        | DomainError::InvalidPeriodKind(_)
        | DomainError::InvalidReasonCode(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SnapshotMismatch { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Lookups that miss become `ResourceNotFound`; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CompanyNotFound(company_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Company"),
            message: format!("Company {company_id} does not exist"),
        },
        PersistenceError::ProductNotFound(product_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Product"),
            message: format!("Product {product_id} does not exist"),
        },
        PersistenceError::NotFound(what) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: what,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
