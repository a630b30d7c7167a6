use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

use crate::db_migrations::migrate_db;

pub mod metadata_repository;
pub mod resource_repository;


/// where the sqlite database lives. Managed by rocket so every request can open its own connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    location: String,
}

impl Database {
    pub fn new(location: impl Into<String>) -> Database {
        Database {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// opens a new connection to the database. Callers own the connection and it is closed when dropped
    pub fn open_connection(&self) -> Result<Connection> {
        Connection::open_with_flags(Path::new(self.location.as_str()), OpenFlags::default())
    }
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}

/// handles checking if the database exists and is up to the correct version.
/// If not, it either creates or upgrades the database accordingly
pub fn initialize_db(db: &Database) -> Result<()> {
    let con = db.open_connection()?;
    let table_version = match metadata_repository::get_version(&con) {
        Ok(version) => version,
        Err(_) => {
            // tables haven't been created yet
            log::info!("Creating a new database at {}", db.location());
            create_db(&con)?;
            1
        }
    };
    migrate_db(&con, table_version)?;
    Ok(())
}
