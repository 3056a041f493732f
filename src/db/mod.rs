// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization
// - The catalog load path

use std::path::Path;

use log::info;

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_test_connection, create_test_pool, default_database_path,
    get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};

use crate::error::AppResult;

/// Open (or create) the catalog database at `db_path`
///
/// Absent or empty storage yields a fresh, empty catalog. Unreadable or
/// corrupt storage surfaces a typed error; it is never ignored.
pub fn open_catalog(db_path: &Path) -> AppResult<ConnectionPool> {
    let pool = create_connection_pool(db_path)?;

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    info!("catalog opened at {}", db_path.display());
    Ok(pool)
}
