/*!
 * Store entity models.
 *
 * These structures map directly to database tables and provide type-safe
 * access to persisted player data.
 */

use serde::{Deserialize, Serialize};

use crate::models::{PlayerRecord, PlayerStats};

/// One row of the `players` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    /// Row id
    pub id: i64,
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Playing position
    pub position: Option<String>,
    /// Nationality
    pub nationality: Option<String>,
    /// Current team
    pub team_name: Option<String>,
}

impl PlayerRow {
    /// Full display name, surname appended when present
    pub fn display_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }

    /// Build the presentation record from this row and aggregated stats
    pub fn into_record(self, stats: PlayerStats) -> PlayerRecord {
        PlayerRecord {
            id: self.id,
            name: self.display_name(),
            position: self.position,
            nationality: self.nationality,
            team_name: self.team_name,
            goals: stats.goals,
            assists: stats.assists,
            minutes_played: stats.minutes_played,
            yellow_cards: stats.yellow_cards,
            red_cards: stats.red_cards,
            translated: false,
            target_language: None,
        }
    }
}

/// A new player to insert, id assigned by the store
#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub name: String,
    pub surname: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub team_name: Option<String>,
}

/// One row of the `player_match_stats` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStatsRow {
    pub player_id: i64,
    pub goals: i64,
    pub assists: i64,
    pub minutes_played: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}
