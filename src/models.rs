/*!
 * Core data model for player lookup and the image-search pipeline.
 *
 * The types in this module flow through every pipeline stage: face matches
 * produced by the recognition provider, player records resolved from the
 * store, and the locale context that drives translation decisions.
 */

use serde::{Deserialize, Serialize};

/// A full player record as presented to the caller.
///
/// Display fields (`position`, `nationality`, `team_name`) are the only
/// translatable fields; numeric stats are never translated. Records are
/// constructed by the store or by enrichment and mutated copy-on-write by
/// the translation merger, never written back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Store identity
    pub id: i64,

    /// Full display name
    pub name: String,

    /// Playing position, absent when unknown
    pub position: Option<String>,

    /// Nationality, absent when unknown
    pub nationality: Option<String>,

    /// Current team name, absent when unknown
    pub team_name: Option<String>,

    /// Career goals
    pub goals: i64,

    /// Career assists
    pub assists: i64,

    /// Total minutes played
    pub minutes_played: i64,

    /// Yellow cards received
    pub yellow_cards: i64,

    /// Red cards received
    pub red_cards: i64,

    /// Whether the display fields went through a translation pass.
    /// Coarse per-record flag: set even when no individual field changed.
    #[serde(default)]
    pub translated: bool,

    /// Target language of the last translation pass, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl PlayerRecord {
    /// Create an untranslated record with zeroed stats
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: None,
            nationality: None,
            team_name: None,
            goals: 0,
            assists: 0,
            minutes_played: 0,
            yellow_cards: 0,
            red_cards: 0,
            translated: false,
            target_language: None,
        }
    }
}

/// Aggregated match statistics for one player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: i64,
    pub assists: i64,
    pub minutes_played: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

/// One identity candidate returned by the face-recognition provider.
///
/// Ephemeral: produced per submitted image and consumed immediately by the
/// enrichment service. `external_id` is the opaque key correlating the face
/// to a player identity in our own store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceMatchCandidate {
    /// Provider-side face identifier
    pub face_id: String,

    /// Opaque identity key correlating to a player
    pub external_id: String,

    /// Similarity to the searched face, 0-100
    pub similarity: f32,

    /// Provider confidence in the detection, 0-100
    pub confidence: f32,
}

/// Immutable locale context threaded through translation calls.
///
/// Replaces the ambient per-session language state of earlier designs:
/// callers construct one per request and pass it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleContext {
    /// Source language of stored data and the UI text catalogue
    pub base_language: String,

    /// Language the caller wants results displayed in
    pub target_language: String,
}

impl LocaleContext {
    /// Create a locale context for the given target, with the default
    /// Spanish base language
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            base_language: "es".to_string(),
            target_language: target_language.into(),
        }
    }

    /// Create a locale context with an explicit base language
    pub fn with_base(
        base_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            base_language: base_language.into(),
            target_language: target_language.into(),
        }
    }

    /// True when the target is the base language and translation is a no-op
    pub fn is_base_target(&self) -> bool {
        self.base_language.eq_ignore_ascii_case(&self.target_language)
    }
}
