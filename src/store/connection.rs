/*!
 * Store connection management.
 *
 * This module handles SQLite connection creation, initialization, and
 * provides async-safe access patterns using tokio's spawn_blocking.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::schema;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "playerscout.db";

/// Default database directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "playerscout";

/// Database connection wrapper with thread-safe access
#[derive(Clone)]
pub struct StoreConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl StoreConnection {
    /// Create a new connection at the default location
    pub fn new_default() -> Result<Self> {
        let db_path = Self::default_database_path()?;
        Self::new(&db_path)
    }

    /// Create a new connection at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {:?}", parent))?;
        }

        info!("Opening player store at: {:?}", db_path);

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        debug!("Creating in-memory player store");

        let conn = Connection::open_in_memory().context("Failed to create in-memory database")?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default database path
    pub fn default_database_path() -> Result<PathBuf> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a database operation with the connection
    ///
    /// Acquires the mutex lock and executes the provided closure with access
    /// to the connection. For async contexts, use `execute_async`.
    pub fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

        f(&conn)
    }

    /// Execute a database operation asynchronously using spawn_blocking
    ///
    /// This is the preferred method for async contexts as it prevents
    /// blocking the async runtime.
    pub async fn execute_async<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

            f(&conn)
        })
        .await
        .context("Database task panicked")?
    }

    /// Begin an async transaction and execute operations within it
    pub async fn transaction_async<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&rusqlite::Transaction) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

            let tx = conn.transaction()?;
            let result = f(&tx)?;
            tx.commit()?;

            Ok(result)
        })
        .await
        .context("Database transaction task panicked")?
    }
}
