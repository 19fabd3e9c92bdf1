/*!
 * Repository layer for player store operations.
 *
 * This module provides a high-level API over the SQLite store, abstracting
 * away the SQL details and providing type-safe access. Lookup results carry
 * aggregated match statistics so callers get presentation-ready records.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::StoreConnection;
use super::models::{MatchStatsRow, NewPlayer, PlayerRow};
use crate::errors::StoreError;
use crate::models::{PlayerRecord, PlayerStats};

/// Repository for player store operations
#[derive(Clone)]
pub struct PlayerRepository {
    /// Database connection
    db: StoreConnection,
}

impl PlayerRepository {
    /// Create a new repository with the given connection
    pub fn new(db: StoreConnection) -> Self {
        Self { db }
    }

    /// Create a repository at the default database location
    pub fn new_default() -> Result<Self> {
        let db = StoreConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = StoreConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Search players by name fragment over first and last name
    ///
    /// Case-insensitive substring match; results carry aggregated stats.
    pub async fn search_players(&self, name_fragment: &str) -> Result<Vec<PlayerRecord>> {
        let pattern = format!("%{}%", name_fragment);

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, name, surname, position, nationality, team_name
                    FROM players
                    WHERE name LIKE ?1 OR surname LIKE ?1
                    ORDER BY surname, name
                    "#,
                )?;

                let rows: Vec<PlayerRow> = stmt
                    .query_map([&pattern], Self::parse_player_row)?
                    .filter_map(|r| r.ok())
                    .collect();

                debug!("Found {} players for fragment", rows.len());

                rows.into_iter()
                    .map(|row| {
                        let stats = Self::stats_for_player_sync(conn, row.id)?;
                        Ok(row.into_record(stats))
                    })
                    .collect()
            })
            .await
    }

    /// Get a player by id, with aggregated stats
    pub async fn get_player(&self, id: i64) -> Result<Option<PlayerRecord>> {
        self.db
            .execute_async(move |conn| {
                let row = Self::get_player_row_sync(conn, id)?;

                match row {
                    Some(row) => {
                        let stats = Self::stats_for_player_sync(conn, id)?;
                        Ok(Some(row.into_record(stats)))
                    }
                    None => Ok(None),
                }
            })
            .await
    }

    /// Get aggregated match statistics for a player
    ///
    /// Returns `None` when the player does not exist; a player with no
    /// recorded matches yields zeroed stats.
    pub async fn get_player_stats(&self, id: i64) -> Result<Option<PlayerStats>> {
        self.db
            .execute_async(move |conn| {
                if Self::get_player_row_sync(conn, id)?.is_none() {
                    return Ok(None);
                }

                Ok(Some(Self::stats_for_player_sync(conn, id)?))
            })
            .await
    }

    /// Insert a new player, returning the assigned id
    pub async fn insert_player(&self, player: NewPlayer) -> Result<i64> {
        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO players (name, surname, position, nationality, team_name)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![
                        player.name,
                        player.surname,
                        player.position,
                        player.nationality,
                        player.team_name,
                    ],
                )?;

                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// Record match statistics for a player (batch insert)
    pub async fn insert_match_stats(&self, stats: Vec<MatchStatsRow>) -> Result<()> {
        self.db
            .transaction_async(move |tx| {
                for row in stats {
                    tx.execute(
                        r#"
                        INSERT INTO player_match_stats (
                            player_id, goals, assists, minutes_played, yellow_cards, red_cards
                        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                        "#,
                        params![
                            row.player_id,
                            row.goals,
                            row.assists,
                            row.minutes_played,
                            row.yellow_cards,
                            row.red_cards,
                        ],
                    )?;
                }
                Ok(())
            })
            .await
    }

    fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRow> {
        Ok(PlayerRow {
            id: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            position: row.get(3)?,
            nationality: row.get(4)?,
            team_name: row.get(5)?,
        })
    }

    fn get_player_row_sync(conn: &Connection, id: i64) -> Result<Option<PlayerRow>> {
        let result = conn
            .query_row(
                r#"
                SELECT id, name, surname, position, nationality, team_name
                FROM players WHERE id = ?1
                "#,
                [id],
                Self::parse_player_row,
            )
            .optional()
            .map_err(StoreError::from)?;

        Ok(result)
    }

    fn stats_for_player_sync(conn: &Connection, id: i64) -> Result<PlayerStats> {
        let stats = conn.query_row(
            r#"
            SELECT
                COALESCE(SUM(goals), 0),
                COALESCE(SUM(assists), 0),
                COALESCE(SUM(minutes_played), 0),
                COALESCE(SUM(yellow_cards), 0),
                COALESCE(SUM(red_cards), 0)
            FROM player_match_stats
            WHERE player_id = ?1
            "#,
            [id],
            |row| {
                Ok(PlayerStats {
                    goals: row.get(0)?,
                    assists: row.get(1)?,
                    minutes_played: row.get(2)?,
                    yellow_cards: row.get(3)?,
                    red_cards: row.get(4)?,
                })
            },
        )
        .map_err(StoreError::from)?;

        Ok(stats)
    }
}
