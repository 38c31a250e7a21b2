// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission_domain::{AdmissionMode, Company, CompanyStatus, DomainError};

use crate::data_models::{from_db_count, parse_instant};
use crate::diesel_schema::companies;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct CompanyRow {
    company_id: i64,
    code: String,
    name: String,
    mode: String,
    quota: i32,
    registered: i32,
    status: String,
    available_from: String,
    available_until: String,
}

impl CompanyRow {
    fn into_company(self) -> Result<Company, PersistenceError> {
        let mode = self.mode.parse::<AdmissionMode>().map_err(reconstruction)?;
        let status = self.status.parse::<CompanyStatus>().map_err(reconstruction)?;

        Company::new(
            self.company_id,
            &self.code,
            &self.name,
            mode,
            from_db_count(self.quota, "quota")?,
            from_db_count(self.registered, "registered")?,
            status,
            parse_instant(&self.available_from)?,
            parse_instant(&self.available_until)?,
        )
        .map_err(reconstruction)
    }
}

pub(crate) fn reconstruction(err: DomainError) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

/// Retrieves a company by id, reflecting the latest committed counters.
///
/// # Errors
///
/// Returns [`PersistenceError::CompanyNotFound`] if no such company exists.
pub fn get_company(conn: &mut SqliteConnection, company_id: i64) -> Result<Company, PersistenceError> {
    let row: CompanyRow = companies::table
        .filter(companies::company_id.eq(company_id))
        .select(CompanyRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::CompanyNotFound(company_id))?;

    row.into_company()
}

/// Lists every company ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_companies(conn: &mut SqliteConnection) -> Result<Vec<Company>, PersistenceError> {
    companies::table
        .order(companies::company_id.asc())
        .select(CompanyRow::as_select())
        .load(conn)?
        .into_iter()
        .map(CompanyRow::into_company)
        .collect()
}
