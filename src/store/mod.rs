/*!
 * Player store backed by SQLite.
 *
 * This module provides persistent storage for player records and their
 * per-match statistics:
 * - `connection`: thread-safe connection management with async access
 * - `schema`: table creation and migration
 * - `models`: typed row structs
 * - `repository`: high-level lookup and administration API
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::StoreConnection;
pub use models::{MatchStatsRow, NewPlayer, PlayerRow};
pub use repository::PlayerRepository;
