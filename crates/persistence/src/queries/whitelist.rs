// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission_domain::{ProductCategory, WhitelistEntry, WhitelistIndex};

use crate::diesel_schema::whitelist_entries;
use crate::error::PersistenceError;
use crate::queries::company::reconstruction;

/// Loads the member's unconsumed whitelist entries under `company_id`.
///
/// A member whose only entry for a category has been consumed no longer
/// sees that category.
///
/// # Errors
///
/// Returns an error if the query fails or a stored category is unknown.
pub fn whitelist_for_user(
    conn: &mut SqliteConnection,
    company_id: i64,
    employee_no: &str,
    name: &str,
) -> Result<WhitelistIndex, PersistenceError> {
    let categories: Vec<String> = whitelist_entries::table
        .filter(whitelist_entries::company_id.eq(company_id))
        .filter(whitelist_entries::employee_no.eq(employee_no))
        .filter(whitelist_entries::name.eq(name))
        .filter(whitelist_entries::consumed_at.is_null())
        .order(whitelist_entries::entry_id.asc())
        .select(whitelist_entries::category)
        .load(conn)?;

    let entries: Vec<WhitelistEntry> = categories
        .iter()
        .map(|category| {
            category
                .parse::<ProductCategory>()
                .map(|category| WhitelistEntry::new(company_id, category, employee_no, name))
                .map_err(reconstruction)
        })
        .collect::<Result<_, _>>()?;

    WhitelistIndex::for_company(company_id, entries).map_err(reconstruction)
}

/// Finds the oldest unconsumed entry matching the member and category.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_unconsumed_entry(
    conn: &mut SqliteConnection,
    company_id: i64,
    category: ProductCategory,
    employee_no: &str,
    name: &str,
) -> Result<Option<i64>, PersistenceError> {
    Ok(whitelist_entries::table
        .filter(whitelist_entries::company_id.eq(company_id))
        .filter(whitelist_entries::category.eq(category.as_str()))
        .filter(whitelist_entries::employee_no.eq(employee_no))
        .filter(whitelist_entries::name.eq(name))
        .filter(whitelist_entries::consumed_at.is_null())
        .order(whitelist_entries::entry_id.asc())
        .select(whitelist_entries::entry_id)
        .first::<i64>(conn)
        .optional()?)
}
