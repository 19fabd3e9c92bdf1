/*!
 * Store schema definitions and migrations.
 *
 * This module contains the SQL schema for the player tables and handles
 * schema migrations for version upgrades.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Initializing player store schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        info!(
            "Migrating player store schema from v{} to v{}",
            current_version, SCHEMA_VERSION
        );
        migrate_schema(conn, current_version)?;
    } else {
        debug!("Player store schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    // Enable foreign keys
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            surname TEXT NOT NULL DEFAULT '',
            position TEXT,
            nationality TEXT,
            team_name TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS player_match_stats (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
            goals INTEGER NOT NULL DEFAULT 0,
            assists INTEGER NOT NULL DEFAULT 0,
            minutes_played INTEGER NOT NULL DEFAULT 0,
            yellow_cards INTEGER NOT NULL DEFAULT 0,
            red_cards INTEGER NOT NULL DEFAULT 0,
            played_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_players_name ON players(name);
        CREATE INDEX IF NOT EXISTS idx_players_surname ON players(surname);
        CREATE INDEX IF NOT EXISTS idx_match_stats_player ON player_match_stats(player_id);
        "#,
    )
    .context("Failed to create player store tables")?;

    Ok(())
}

/// Migrate the schema from an older version
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
    // v1 is the first released schema; nothing to migrate from yet
    let _ = conn;
    Err(anyhow::anyhow!(
        "No migration path from schema v{} to v{}",
        from_version,
        SCHEMA_VERSION
    ))
}
