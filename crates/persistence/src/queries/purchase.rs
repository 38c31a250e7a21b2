// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission_domain::{ExistingPeriod, PeriodKind};

use crate::data_models::{PurchaseRecord, from_db_amount, parse_date};
use crate::diesel_schema::purchases;
use crate::error::PersistenceError;
use crate::queries::company::reconstruction;

#[derive(Queryable, Selectable)]
#[diesel(table_name = purchases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct PurchaseRow {
    purchase_id: i64,
    company_id: i64,
    user_id: i64,
    product_id: i64,
    include_locker: i32,
    membership_start: String,
    membership_end: String,
    locker_start: Option<String>,
    locker_end: Option<String>,
    total_amount: i64,
}

impl PurchaseRow {
    fn into_record(self) -> Result<PurchaseRecord, PersistenceError> {
        Ok(PurchaseRecord {
            purchase_id: self.purchase_id,
            company_id: self.company_id,
            user_id: self.user_id,
            product_id: self.product_id,
            include_locker: self.include_locker != 0,
            membership_start: parse_date(&self.membership_start)?,
            membership_end: parse_date(&self.membership_end)?,
            locker_start: self.locker_start.as_deref().map(parse_date).transpose()?,
            locker_end: self.locker_end.as_deref().map(parse_date).transpose()?,
            total_amount: from_db_amount(self.total_amount)?,
        })
    }
}

impl PurchaseRecord {
    /// The periods this purchase occupies: always a membership period, plus
    /// a locker period when one was bought.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored period is empty or inverted.
    pub fn periods(&self) -> Result<Vec<ExistingPeriod>, PersistenceError> {
        let mut periods = vec![
            ExistingPeriod::new(
                PeriodKind::Membership,
                self.membership_start,
                self.membership_end,
            )
            .map_err(reconstruction)?,
        ];
        if let (Some(start), Some(end)) = (self.locker_start, self.locker_end) {
            periods.push(ExistingPeriod::new(PeriodKind::Locker, start, end).map_err(reconstruction)?);
        }
        Ok(periods)
    }
}

/// Lists a member's purchases in the order they were committed.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_purchases(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<PurchaseRecord>, PersistenceError> {
    purchases::table
        .filter(purchases::user_id.eq(user_id))
        .order(purchases::purchase_id.asc())
        .select(PurchaseRow::as_select())
        .load(conn)?
        .into_iter()
        .map(PurchaseRow::into_record)
        .collect()
}

/// Every period a member already holds, across all companies.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn existing_periods(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<ExistingPeriod>, PersistenceError> {
    let mut periods: Vec<ExistingPeriod> = Vec::new();
    for purchase in list_purchases(conn, user_id)? {
        periods.extend(purchase.periods()?);
    }
    Ok(periods)
}
