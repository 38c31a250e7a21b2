// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_admission_domain::{Product, ProductCategory};

use crate::data_models::from_db_count;
use crate::diesel_schema::products;
use crate::error::PersistenceError;
use crate::queries::company::reconstruction;

#[derive(Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ProductRow {
    product_id: i64,
    name: String,
    category: String,
    remaining_units: i32,
    months: i32,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, PersistenceError> {
        let category = self.category.parse::<ProductCategory>().map_err(reconstruction)?;

        Product::new(
            self.product_id,
            &self.name,
            category,
            from_db_count(self.remaining_units, "remaining_units")?,
            from_db_count(self.months, "months")?,
        )
        .map_err(reconstruction)
    }
}

/// Lists the product catalog ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, PersistenceError> {
    products::table
        .order(products::product_id.asc())
        .select(ProductRow::as_select())
        .load(conn)?
        .into_iter()
        .map(ProductRow::into_product)
        .collect()
}

/// Retrieves a single product.
///
/// # Errors
///
/// Returns [`PersistenceError::ProductNotFound`] if no such product exists.
pub fn get_product(conn: &mut SqliteConnection, product_id: i64) -> Result<Product, PersistenceError> {
    products::table
        .filter(products::product_id.eq(product_id))
        .select(ProductRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::ProductNotFound(product_id))?
        .into_product()
}
