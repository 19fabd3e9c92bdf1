/*!
 * Field translation merging for player records.
 *
 * Extracts the translatable display fields from a set of player records,
 * submits the deduplicated set as one batch, and re-applies translated
 * values onto copies of the records. Numeric stats and names are never
 * touched.
 */

use log::{debug, warn};
use std::collections::HashMap;

use super::batch::BatchTranslator;
use crate::models::{LocaleContext, PlayerRecord};

/// Position vocabulary added to every batch to pre-warm the translation
/// map, covering values not present in the current record set.
pub const COMMON_POSITIONS: [&str; 4] = ["Delantero", "Centrocampista", "Defensa", "Portero"];

/// Merger applying batch translations onto player display fields
pub struct FieldTranslationMerger {
    /// The batch client used for one submission per merge pass
    translator: BatchTranslator,
}

impl FieldTranslationMerger {
    /// Create a new merger over the given batch translator
    pub fn new(translator: BatchTranslator) -> Self {
        Self { translator }
    }

    /// Translate the display fields of every record into the locale's
    /// target language.
    ///
    /// Returns the input unchanged (no provider call) when the target is
    /// the base language, and unchanged and untagged when the whole batch
    /// fails. Otherwise every returned record is tagged `translated` with
    /// the target language, even when none of its own fields changed.
    pub async fn translate_players(
        &self,
        players: &[PlayerRecord],
        locale: &LocaleContext,
    ) -> Vec<PlayerRecord> {
        // Required fast path: base-language requests never hit the provider
        if locale.is_base_target() {
            return players.to_vec();
        }

        // With no records there is nothing to merge onto; skip the batch
        // even though the common vocabulary alone would fill one
        if players.is_empty() {
            return Vec::new();
        }

        let unique_texts = Self::collect_translatable_texts(players);

        debug!(
            "Translating {} unique texts for {} players to {}",
            unique_texts.len(),
            players.len(),
            locale.target_language
        );

        let results = self
            .translator
            .translate_many(&unique_texts, &locale.target_language)
            .await;

        // The batch client never fails as a whole; treat all-entries-failed
        // as total provider failure and hand back the originals untagged.
        if results.iter().all(|r| !r.success) {
            warn!(
                "Translation provider unavailable, returning untranslated records ({} texts)",
                unique_texts.len()
            );
            return players.to_vec();
        }

        // Translation map from successful results only
        let translation_map: HashMap<&str, &str> = unique_texts
            .iter()
            .zip(results.iter())
            .filter(|(_, result)| result.success)
            .map(|(original, result)| (original.as_str(), result.translated_text.as_str()))
            .collect();

        players
            .iter()
            .map(|player| Self::apply_translations(player, &translation_map, locale))
            .collect()
    }

    /// Collect the deduplicated translatable texts for a record set,
    /// preserving first-seen order and appending the common position
    /// vocabulary.
    fn collect_translatable_texts(players: &[PlayerRecord]) -> Vec<String> {
        let mut texts: Vec<String> = Vec::new();

        let mut push_unique = |value: &Option<String>, texts: &mut Vec<String>| {
            if let Some(value) = value {
                if !value.is_empty() && !texts.iter().any(|t| t == value) {
                    texts.push(value.clone());
                }
            }
        };

        for player in players {
            push_unique(&player.position, &mut texts);
            push_unique(&player.nationality, &mut texts);
            push_unique(&player.team_name, &mut texts);
        }

        for position in COMMON_POSITIONS {
            if !texts.iter().any(|t| t == position) {
                texts.push(position.to_string());
            }
        }

        texts
    }

    /// Copy a record, replacing each translatable field by its map entry
    /// when present. A field missing from the map keeps its original value,
    /// never emptied by a failed translation.
    fn apply_translations(
        player: &PlayerRecord,
        translation_map: &HashMap<&str, &str>,
        locale: &LocaleContext,
    ) -> PlayerRecord {
        let translate_field = |field: &Option<String>| -> Option<String> {
            field.as_ref().map(|value| {
                translation_map
                    .get(value.as_str())
                    .map(|translated| translated.to_string())
                    .unwrap_or_else(|| value.clone())
            })
        };

        let mut translated = player.clone();
        translated.position = translate_field(&player.position);
        translated.nationality = translate_field(&player.nationality);
        translated.team_name = translate_field(&player.team_name);
        // Coarse per-record tag, set regardless of per-field outcomes
        translated.translated = true;
        translated.target_language = Some(locale.target_language.clone());
        translated
    }
}
