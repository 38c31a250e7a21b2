// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening the admission database.
//!
//! Every connection enforces foreign keys, so a seat can never point at a
//! missing company or product, and waits on a competing writer instead of
//! failing the admission transaction with `SQLITE_BUSY`. File databases also
//! switch to WAL so read-only lookups keep working while an admission holds
//! the write lock.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds an admission waits for a competing writer to commit.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(QueryableByName)]
struct ForeignKeysSetting {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Row id assigned by the last `INSERT` on this connection.
///
/// Seeding, audit and admission inserts use it to hand back the new id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Fails unless the connection has `foreign_keys` switched on.
///
/// # Errors
///
/// Returns [`PersistenceError::ForeignKeyEnforcementNotEnabled`] when the
/// setting reads back as off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let setting: ForeignKeysSetting = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if setting.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("foreign key enforcement confirmed");
    Ok(())
}

fn apply_connection_settings(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    for statement in [
        "PRAGMA foreign_keys = ON".to_string(),
        format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"),
    ] {
        diesel::sql_query(statement.as_str())
            .execute(conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    }
    Ok(())
}

/// Opens `database_url`, applies the connection settings and brings the
/// schema up to date.
///
/// `database_url` is a file path or a `file:` URI such as an in-memory
/// shared-cache name.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, configured or migrated.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    apply_connection_settings(&mut conn)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    info!(database_url, migrations = applied.len(), "admission database ready");
    Ok(conn)
}

/// Switches a file database to the write-ahead log.
///
/// # Errors
///
/// Returns an error if the journal mode cannot be changed.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
