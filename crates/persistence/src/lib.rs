// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the membership slot registration system.
//!
//! Built on Diesel over `SQLite`. Reads resolve the snapshots that admission
//! planning consumes; [`Persistence::commit_admission`] is the only place
//! quota, stock and whitelist entries are spent, and it does so atomically.
//!
//! ## Concurrency
//!
//! Each [`Persistence`] owns one connection. Admissions run in
//! `BEGIN IMMEDIATE` transactions, so concurrent commits from separate
//! connections to the same file serialize on `SQLite`'s write lock and each
//! one re-checks the counters the previous one left behind.
//!
//! ## Testing
//!
//! - `new_in_memory()` gives every test its own shared-cache database
//! - File databases (`tempfile`) are used where two connections must race

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use slot_admission::{AdmissionPlan, AdmissionSnapshot};
use slot_admission_audit::AuditEvent;
use slot_admission_domain::{Company, ExistingPeriod, Product, User, WhitelistEntry, WhitelistIndex};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{NewCompany, NewProduct, PurchaseRecord};
pub use error::PersistenceError;
pub use mutations::admission::{CommitOutcome, CommittedAdmission};

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Administrative seeding
    // ========================================================================

    /// Creates a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the insert fails.
    pub fn create_company(&mut self, company: &NewCompany) -> Result<Company, PersistenceError> {
        mutations::seed::create_company(&mut self.conn, company)
    }

    /// Creates a catalog product.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the insert fails.
    pub fn create_product(&mut self, product: &NewProduct) -> Result<Product, PersistenceError> {
        mutations::seed::create_product(&mut self.conn, product)
    }

    /// Adds an approved whitelist entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the insert fails.
    pub fn add_whitelist_entry(&mut self, entry: &WhitelistEntry) -> Result<i64, PersistenceError> {
        mutations::seed::add_whitelist_entry(&mut self.conn, entry)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Retrieves a company with its latest committed counters.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::CompanyNotFound`] if it does not exist.
    pub fn get_company(&mut self, company_id: i64) -> Result<Company, PersistenceError> {
        queries::company::get_company(&mut self.conn, company_id)
    }

    /// Lists every company.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_companies(&mut self) -> Result<Vec<Company>, PersistenceError> {
        queries::company::list_companies(&mut self.conn)
    }

    /// Lists the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_products(&mut self) -> Result<Vec<Product>, PersistenceError> {
        queries::product::list_products(&mut self.conn)
    }

    /// Retrieves one product.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::ProductNotFound`] if it does not exist.
    pub fn get_product(&mut self, product_id: i64) -> Result<Product, PersistenceError> {
        queries::product::get_product(&mut self.conn, product_id)
    }

    /// Loads the member's unconsumed whitelist entries for a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn whitelist_for_user(
        &mut self,
        company_id: i64,
        employee_no: &str,
        name: &str,
    ) -> Result<WhitelistIndex, PersistenceError> {
        queries::whitelist::whitelist_for_user(&mut self.conn, company_id, employee_no, name)
    }

    /// Every period the member already holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn existing_periods(&mut self, user_id: i64) -> Result<Vec<ExistingPeriod>, PersistenceError> {
        queries::purchase::existing_periods(&mut self.conn, user_id)
    }

    /// Lists the member's committed purchases.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_purchases(&mut self, user_id: i64) -> Result<Vec<PurchaseRecord>, PersistenceError> {
        queries::purchase::list_purchases(&mut self.conn, user_id)
    }

    /// Resolves everything admission planning needs for one request.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::CompanyNotFound`] if the company does not
    /// exist, or an error if any read fails.
    pub fn load_snapshot(
        &mut self,
        company_id: i64,
        user: &User,
    ) -> Result<AdmissionSnapshot, PersistenceError> {
        let company: Company = self.get_company(company_id)?;
        let catalog: Vec<Product> = self.list_products()?;
        let whitelist: WhitelistIndex =
            self.whitelist_for_user(company_id, &user.employee_no, &user.name)?;
        let existing_periods: Vec<ExistingPeriod> = self.existing_periods(user.id)?;

        debug!(
            company_id,
            user_id = user.id,
            remaining = company.remaining(),
            whitelist_entries = whitelist.len(),
            periods = existing_periods.len(),
            "Loaded admission snapshot"
        );

        AdmissionSnapshot::new(company, catalog, whitelist, existing_periods)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
    }

    /// Retrieves one audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Lists a company's audit events, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_events(&mut self, company_id: i64) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::list_audit_events(&mut self.conn, company_id)
    }

    // ========================================================================
    // Admission
    // ========================================================================

    /// Commits an approved admission plan atomically.
    ///
    /// # Errors
    ///
    /// Returns an error only for storage failures; exhausted resources are
    /// reported as [`CommitOutcome::Rejected`].
    pub fn commit_admission(&mut self, plan: &AdmissionPlan) -> Result<CommitOutcome, PersistenceError> {
        mutations::admission::commit_admission(&mut self.conn, plan)
    }
}
