// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// How a company admits purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdmissionMode {
    /// First-come-first-served against the numeric quota.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Pre-vetted whitelist (lottery reservation list).
    #[serde(rename = "WHL")]
    Whl,
}

impl AdmissionMode {
    /// Returns the persisted key for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Whl => "WHL",
        }
    }
}

impl FromStr for AdmissionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Self::Fcfs),
            "WHL" => Ok(Self::Whl),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for AdmissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative status of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Active,
    Inactive,
}

impl CompanyStatus {
    /// Returns the persisted key for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for CompanyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

/// The fixed set of product categories.
///
/// A category drives both pricing and whitelist matching. Adding a category
/// is a compile-time-checked change: every `match` on it must be updated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    FullDay,
    Morning,
    Evening,
}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::FullDay, Self::Morning, Self::Evening];

    /// Returns the persisted key for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullDay => "full_day",
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_day" => Ok(Self::FullDay),
            "morning" => Ok(Self::Morning),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated member attempting a purchase.
///
/// Identity comes from the authentication layer and is immutable for the
/// duration of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub company_id: i64,
    pub employee_no: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Creates a user without contact details.
    #[must_use]
    pub fn new(id: i64, company_id: i64, employee_no: &str, name: &str) -> Self {
        Self {
            id,
            company_id,
            employee_no: employee_no.to_string(),
            name: name.to_string(),
            email: None,
            phone: None,
        }
    }
}

/// A subsidiary company running registration.
///
/// ## Invariants
///
/// - `registered <= quota`, so `remaining()` never underflows
/// - `available_from <= available_until`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    id: i64,
    code: String,
    name: String,
    mode: AdmissionMode,
    quota: u32,
    registered: u32,
    status: CompanyStatus,
    #[serde(with = "time::serde::rfc3339")]
    available_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    available_until: OffsetDateTime,
}

impl Company {
    /// Creates a validated company snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `registered` exceeds `quota`
    /// - the registration window closes before it opens
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        code: &str,
        name: &str,
        mode: AdmissionMode,
        quota: u32,
        registered: u32,
        status: CompanyStatus,
        available_from: OffsetDateTime,
        available_until: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        if registered > quota {
            return Err(DomainError::RegisteredExceedsQuota {
                company_id: id,
                quota,
                registered,
            });
        }
        if available_until < available_from {
            return Err(DomainError::InvalidRegistrationWindow { company_id: id });
        }
        Ok(Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            mode,
            quota,
            registered,
            status,
            available_from,
            available_until,
        })
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn mode(&self) -> AdmissionMode {
        self.mode
    }

    #[must_use]
    pub const fn quota(&self) -> u32 {
        self.quota
    }

    #[must_use]
    pub const fn registered(&self) -> u32 {
        self.registered
    }

    /// Returns `quota - registered`.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.quota - self.registered
    }

    #[must_use]
    pub const fn status(&self) -> CompanyStatus {
        self.status
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, CompanyStatus::Active)
    }

    #[must_use]
    pub const fn available_from(&self) -> OffsetDateTime {
        self.available_from
    }

    #[must_use]
    pub const fn available_until(&self) -> OffsetDateTime {
        self.available_until
    }

    /// Returns whether `now` falls inside `[available_from, available_until]`.
    #[must_use]
    pub fn is_window_open(&self, now: OffsetDateTime) -> bool {
        self.available_from <= now && now <= self.available_until
    }
}

/// A purchasable membership product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: ProductCategory,
    pub remaining_units: u32,
    /// Membership term in calendar months.
    pub months: u32,
}

impl Product {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the term is zero months.
    pub fn new(
        id: i64,
        name: &str,
        category: ProductCategory,
        remaining_units: u32,
        months: u32,
    ) -> Result<Self, DomainError> {
        if months == 0 {
            return Err(DomainError::InvalidProductTerm {
                product_id: id,
                months,
            });
        }
        Ok(Self {
            id,
            name: name.to_string(),
            category,
            remaining_units,
            months,
        })
    }

    #[must_use]
    pub const fn has_stock(&self) -> bool {
        self.remaining_units > 0
    }
}

/// One approved `(employee_no, name)` pair for a category under a company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub company_id: i64,
    pub category: ProductCategory,
    pub employee_no: String,
    pub name: String,
}

impl WhitelistEntry {
    #[must_use]
    pub fn new(company_id: i64, category: ProductCategory, employee_no: &str, name: &str) -> Self {
        Self {
            company_id,
            category,
            employee_no: employee_no.to_string(),
            name: name.to_string(),
        }
    }

    /// Exact match on employee number and name.
    #[must_use]
    pub fn matches(&self, employee_no: &str, name: &str) -> bool {
        self.employee_no == employee_no && self.name == name
    }
}

/// The candidate purchase.
///
/// At most one product may be chosen per purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub product_id: Option<i64>,
    pub include_locker: bool,
}

impl Selection {
    #[must_use]
    pub const fn product(product_id: i64, include_locker: bool) -> Self {
        Self {
            product_id: Some(product_id),
            include_locker,
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            product_id: None,
            include_locker: false,
        }
    }
}

/// Manual confirmation state for whitelist purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    NotRequired,
    Pending,
    Confirmed,
}

impl VerificationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotRequired => "not_required",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_required" => Ok(Self::NotRequired),
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidVerificationStatus(s.to_string())),
        }
    }
}

/// Which resource a purchased period occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    Membership,
    Locker,
}

impl PeriodKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Locker => "locker",
        }
    }
}

impl FromStr for PeriodKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "membership" => Ok(Self::Membership),
            "locker" => Ok(Self::Locker),
            _ => Err(DomainError::InvalidPeriodKind(s.to_string())),
        }
    }
}

/// A half-open date range `[start, end)` already purchased by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExistingPeriod {
    kind: PeriodKind,
    start: NaiveDate,
    end: NaiveDate,
}

impl ExistingPeriod {
    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not strictly after `start`.
    pub fn new(kind: PeriodKind, start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidPeriod { start, end });
        }
        Ok(Self { kind, start, end })
    }

    #[must_use]
    pub const fn kind(&self) -> PeriodKind {
        self.kind
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}
