// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Purchased period overlap detection.
//!
//! Periods are half-open `[start, end)`. Two periods of the same kind overlap
//! iff `s1 < e2 && s2 < e1`, so a period ending on the day another begins does
//! not conflict. Membership periods never conflict with locker periods.

use crate::error::DomainError;
use crate::types::{ExistingPeriod, PeriodKind};
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Outcome of an overlap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlapResult {
    pub has_overlap: bool,
    pub conflicting_period: Option<ExistingPeriod>,
}

impl OverlapResult {
    const fn clear() -> Self {
        Self {
            has_overlap: false,
            conflicting_period: None,
        }
    }

    const fn conflict(period: ExistingPeriod) -> Self {
        Self {
            has_overlap: true,
            conflicting_period: Some(period),
        }
    }
}

/// Returns whether two periods of the same kind share at least one day.
#[must_use]
pub fn periods_overlap(a: &ExistingPeriod, b: &ExistingPeriod) -> bool {
    a.kind() == b.kind() && a.start() < b.end() && b.start() < a.end()
}

/// Checks `proposed` against every existing period of the same kind.
///
/// The first conflict in chronological order of start date is reported.
#[must_use]
pub fn check_overlap(existing: &[ExistingPeriod], proposed: &ExistingPeriod) -> OverlapResult {
    let mut same_kind: Vec<&ExistingPeriod> = existing
        .iter()
        .filter(|p| p.kind() == proposed.kind())
        .collect();
    same_kind.sort_by_key(|p| (p.start(), p.end()));

    same_kind
        .into_iter()
        .find(|p| periods_overlap(p, proposed))
        .map_or_else(OverlapResult::clear, |p| OverlapResult::conflict(*p))
}

/// Adds calendar months to a date.
///
/// Days past the end of the target month clamp to its last day, so
/// 2025-01-31 plus one month is 2025-02-28.
///
/// # Errors
///
/// Returns an error if the result is outside the supported date range.
pub fn add_calendar_months(start: NaiveDate, months: u32) -> Result<NaiveDate, DomainError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or(DomainError::DateArithmeticOverflow { start, months })
}

/// Builds the period `[start, start + months)` for a new purchase.
///
/// # Errors
///
/// Returns an error if `months` is zero or the end date overflows.
pub fn proposed_period(
    kind: PeriodKind,
    start: NaiveDate,
    months: u32,
) -> Result<ExistingPeriod, DomainError> {
    let end = add_calendar_months(start, months)?;
    ExistingPeriod::new(kind, start, end)
}
