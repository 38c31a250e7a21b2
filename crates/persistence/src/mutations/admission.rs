// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The atomic admission commit.
//!
//! A plan produced from a snapshot is only advisory: other requests may have
//! consumed quota, stock or whitelist entries since the snapshot was read.
//! Committing therefore re-checks every contended resource with conditional
//! updates inside a single `BEGIN IMMEDIATE` transaction. Any failure rolls
//! back every earlier step.
//!
//! ## Steps
//!
//! 1. Increment `companies.registered` only while it is below `quota`.
//!    FCFS: no row updated means `SOLD_OUT`. WHL: tolerated.
//! 2. FCFS: decrement `products.remaining_units` only while positive.
//!    No row updated means `SOLD_OUT`.
//! 3. WHL with consumption on: mark one matching unconsumed entry consumed.
//!    None left means `NOT_WHITELISTED_FOR_PRODUCT`.
//! 4. Re-read the member's periods and re-run the overlap check.
//! 5. Insert the purchase and its audit event.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission::{AdmissionPlan, AdmissionRejection};
use slot_admission_audit::AuditEvent;
use slot_admission_domain::{AdmissionMode, ReasonCode, check_overlap};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{format_date, format_instant, to_db_amount};
use crate::diesel_schema::{companies, products, purchases, whitelist_entries};
use crate::error::PersistenceError;
use crate::mutations::audit::persist_audit_event;
use crate::queries::purchase::existing_periods;
use crate::queries::whitelist::find_unconsumed_entry;

/// A successfully committed admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedAdmission {
    pub purchase_id: i64,
    /// The plan's audit event, carrying its assigned id.
    pub audit_event: AuditEvent,
}

/// Outcome of committing an admission plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommittedAdmission),
    /// A contended resource ran out between planning and commit.
    Rejected(AdmissionRejection),
}

/// Internal error type carried out of the transaction closure.
///
/// Both variants roll the transaction back.
enum CommitError {
    Rejected(AdmissionRejection),
    Persistence(PersistenceError),
}

impl From<diesel::result::Error> for CommitError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Persistence(PersistenceError::from(err))
    }
}

impl From<PersistenceError> for CommitError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

const fn reject(reason: ReasonCode) -> CommitError {
    CommitError::Rejected(AdmissionRejection::Guard { reason })
}

/// Commits an approved plan atomically.
///
/// # Errors
///
/// Returns an error only for storage failures. A resource that ran out
/// since planning is reported as [`CommitOutcome::Rejected`].
pub fn commit_admission(
    conn: &mut SqliteConnection,
    plan: &AdmissionPlan,
) -> Result<CommitOutcome, PersistenceError> {
    let result = conn.immediate_transaction(|conn| commit_steps(conn, plan));

    match result {
        Ok(committed) => {
            info!(
                company_id = plan.company_id,
                user_id = plan.user.id,
                product_id = plan.product.id,
                purchase_id = committed.purchase_id,
                total_amount = plan.total_amount,
                "Admission committed"
            );
            Ok(CommitOutcome::Committed(committed))
        }
        Err(CommitError::Rejected(rejection)) => {
            info!(
                company_id = plan.company_id,
                user_id = plan.user.id,
                product_id = plan.product.id,
                reason = %rejection.reason_code(),
                "Admission rejected at commit"
            );
            Ok(CommitOutcome::Rejected(rejection))
        }
        Err(CommitError::Persistence(err)) => Err(err),
    }
}

fn commit_steps(
    conn: &mut SqliteConnection,
    plan: &AdmissionPlan,
) -> Result<CommittedAdmission, CommitError> {
    let incremented: usize = diesel::update(
        companies::table
            .filter(companies::company_id.eq(plan.company_id))
            .filter(companies::registered.lt(companies::quota)),
    )
    .set(companies::registered.eq(companies::registered + 1))
    .execute(conn)?;

    match plan.mode {
        AdmissionMode::Fcfs => {
            if incremented == 0 {
                return Err(reject(ReasonCode::SoldOut));
            }
            let decremented: usize = diesel::update(
                products::table
                    .filter(products::product_id.eq(plan.product.id))
                    .filter(products::remaining_units.gt(0)),
            )
            .set(products::remaining_units.eq(products::remaining_units - 1))
            .execute(conn)?;
            if decremented == 0 {
                return Err(reject(ReasonCode::SoldOut));
            }
        }
        AdmissionMode::Whl => {
            if incremented == 0 {
                debug!(
                    company_id = plan.company_id,
                    "Registered counter at quota; whitelist admission continues"
                );
            }
            if plan.consume_whitelist {
                consume_whitelist_entry(conn, plan)?;
            }
        }
    }

    let existing = existing_periods(conn, plan.user.id)?;
    for proposed in std::iter::once(plan.membership_period).chain(plan.locker_period) {
        if let Some(conflicting) = check_overlap(&existing, &proposed).conflicting_period {
            return Err(CommitError::Rejected(AdmissionRejection::Overlap {
                conflicting,
            }));
        }
    }

    let purchase_id: i64 = insert_purchase(conn, plan)?;
    let event_id: i64 = persist_audit_event(conn, &plan.audit_event, Some(purchase_id))?;

    Ok(CommittedAdmission {
        purchase_id,
        audit_event: plan.audit_event.clone().with_event_id(event_id),
    })
}

fn consume_whitelist_entry(
    conn: &mut SqliteConnection,
    plan: &AdmissionPlan,
) -> Result<(), CommitError> {
    let Some(entry_id) = find_unconsumed_entry(
        conn,
        plan.company_id,
        plan.product.category,
        &plan.user.employee_no,
        &plan.user.name,
    )?
    else {
        return Err(reject(ReasonCode::NotWhitelistedForProduct));
    };

    let consumed_at: String = format_instant(OffsetDateTime::now_utc())?;
    let consumed: usize = diesel::update(
        whitelist_entries::table
            .filter(whitelist_entries::entry_id.eq(entry_id))
            .filter(whitelist_entries::consumed_at.is_null()),
    )
    .set(whitelist_entries::consumed_at.eq(Some(consumed_at)))
    .execute(conn)?;

    if consumed == 0 {
        return Err(reject(ReasonCode::NotWhitelistedForProduct));
    }
    debug!(entry_id, "Consumed whitelist entry");
    Ok(())
}

fn insert_purchase(conn: &mut SqliteConnection, plan: &AdmissionPlan) -> Result<i64, CommitError> {
    let membership = plan.membership_period;
    let locker_start: Option<String> = plan.locker_period.map(|p| format_date(p.start()));
    let locker_end: Option<String> = plan.locker_period.map(|p| format_date(p.end()));

    diesel::insert_into(purchases::table)
        .values((
            purchases::company_id.eq(plan.company_id),
            purchases::user_id.eq(plan.user.id),
            purchases::product_id.eq(plan.product.id),
            purchases::include_locker.eq(i32::from(plan.selection.include_locker)),
            purchases::membership_start.eq(format_date(membership.start())),
            purchases::membership_end.eq(format_date(membership.end())),
            purchases::locker_start.eq(locker_start),
            purchases::locker_end.eq(locker_end),
            purchases::total_amount.eq(to_db_amount(plan.total_amount)?),
        ))
        .execute(conn)?;

    Ok(get_last_insert_rowid(conn)?)
}
