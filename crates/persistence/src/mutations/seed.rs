// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative seeding.
//!
//! Companies, products and whitelist entries are owned by administrative
//! collaborators. These inserts exist so that those collaborators (and
//! tests) can populate the tables the admission path reads.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission_domain::{Company, DomainError, Product, WhitelistEntry};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewCompany, NewProduct, format_instant, to_db_count};
use crate::diesel_schema::{companies, products, whitelist_entries};
use crate::error::PersistenceError;
use crate::queries::company::get_company;
use crate::queries::product::get_product;

fn invalid_record(err: DomainError) -> PersistenceError {
    PersistenceError::InvalidRecord(err.to_string())
}

/// Inserts a company and returns it as stored.
///
/// # Errors
///
/// Returns an error if the record violates a domain invariant or the
/// insert fails (e.g. a duplicate code).
pub fn create_company(
    conn: &mut SqliteConnection,
    company: &NewCompany,
) -> Result<Company, PersistenceError> {
    Company::new(
        0,
        &company.code,
        &company.name,
        company.mode,
        company.quota,
        company.registered,
        company.status,
        company.available_from,
        company.available_until,
    )
    .map_err(invalid_record)?;

    diesel::insert_into(companies::table)
        .values((
            companies::code.eq(&company.code),
            companies::name.eq(&company.name),
            companies::mode.eq(company.mode.as_str()),
            companies::quota.eq(to_db_count(company.quota, "quota")?),
            companies::registered.eq(to_db_count(company.registered, "registered")?),
            companies::status.eq(company.status.as_str()),
            companies::available_from.eq(format_instant(company.available_from)?),
            companies::available_until.eq(format_instant(company.available_until)?),
        ))
        .execute(conn)?;

    let company_id: i64 = get_last_insert_rowid(conn)?;
    info!(company_id, code = %company.code, mode = %company.mode, "Created company");
    get_company(conn, company_id)
}

/// Inserts a product into the catalog and returns it.
///
/// # Errors
///
/// Returns an error if the term is zero months or the insert fails.
pub fn create_product(
    conn: &mut SqliteConnection,
    product: &NewProduct,
) -> Result<Product, PersistenceError> {
    Product::new(
        0,
        &product.name,
        product.category,
        product.remaining_units,
        product.months,
    )
    .map_err(invalid_record)?;

    diesel::insert_into(products::table)
        .values((
            products::name.eq(&product.name),
            products::category.eq(product.category.as_str()),
            products::remaining_units.eq(to_db_count(product.remaining_units, "remaining_units")?),
            products::months.eq(to_db_count(product.months, "months")?),
        ))
        .execute(conn)?;

    let product_id: i64 = get_last_insert_rowid(conn)?;
    info!(product_id, category = %product.category, "Created product");

    get_product(conn, product_id)
}

/// Adds one approved `(employee_no, name)` to a company's category bucket.
///
/// # Errors
///
/// Returns an error if the company does not exist or the insert fails.
pub fn add_whitelist_entry(
    conn: &mut SqliteConnection,
    entry: &WhitelistEntry,
) -> Result<i64, PersistenceError> {
    // Resolve first so a missing company reports as such rather than as a
    // foreign key failure.
    get_company(conn, entry.company_id)?;

    diesel::insert_into(whitelist_entries::table)
        .values((
            whitelist_entries::company_id.eq(entry.company_id),
            whitelist_entries::category.eq(entry.category.as_str()),
            whitelist_entries::employee_no.eq(&entry.employee_no),
            whitelist_entries::name.eq(&entry.name),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
