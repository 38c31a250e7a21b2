// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use slot_admission_domain::{AdmissionMode, CompanyStatus, ProductCategory};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// A company to be created by administrative seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub mode: AdmissionMode,
    pub quota: u32,
    pub registered: u32,
    pub status: CompanyStatus,
    pub available_from: OffsetDateTime,
    pub available_until: OffsetDateTime,
}

/// A product to be created by administrative seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category: ProductCategory,
    pub remaining_units: u32,
    pub months: u32,
}

/// A committed purchase as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRecord {
    pub purchase_id: i64,
    pub company_id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub include_locker: bool,
    pub membership_start: NaiveDate,
    pub membership_end: NaiveDate,
    pub locker_start: Option<NaiveDate>,
    pub locker_end: Option<NaiveDate>,
    pub total_amount: u64,
}

pub(crate) fn to_db_count(value: u32, field: &str) -> Result<i32, PersistenceError> {
    value
        .to_i32()
        .ok_or_else(|| PersistenceError::SerializationError(format!("{field} out of range: {value}")))
}

pub(crate) fn from_db_count(value: i32, field: &str) -> Result<u32, PersistenceError> {
    value
        .to_u32()
        .ok_or_else(|| PersistenceError::ReconstructionError(format!("{field} out of range: {value}")))
}

pub(crate) fn to_db_amount(value: u64) -> Result<i64, PersistenceError> {
    value
        .to_i64()
        .ok_or_else(|| PersistenceError::SerializationError(format!("amount out of range: {value}")))
}

pub(crate) fn from_db_amount(value: i64) -> Result<u64, PersistenceError> {
    value
        .to_u64()
        .ok_or_else(|| PersistenceError::ReconstructionError(format!("amount out of range: {value}")))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, PersistenceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| PersistenceError::ReconstructionError(format!("invalid date '{value}': {e}")))
}

pub(crate) fn format_instant(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    instant
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

pub(crate) fn parse_instant(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!("invalid timestamp '{value}': {e}"))
    })
}
