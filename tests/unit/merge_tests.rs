/*!
 * Tests for player display-field translation
 */

use std::sync::Arc;
use std::time::Duration;

use playerscout::models::{LocaleContext, PlayerRecord};
use playerscout::translation::{BatchTranslator, FieldTranslationMerger};

use crate::common::mock_providers::MockTranslation;

fn merger_over(provider: Arc<MockTranslation>) -> FieldTranslationMerger {
    FieldTranslationMerger::new(BatchTranslator::with_request_delay(
        provider,
        Duration::ZERO,
    ))
}

fn benzema() -> PlayerRecord {
    let mut record = PlayerRecord::new(1, "Karim Benzema");
    record.position = Some("Delantero".to_string());
    record.nationality = Some("Francia".to_string());
    record.team_name = Some("Real Madrid".to_string());
    record.goals = 24;
    record
}

#[tokio::test]
async fn test_translatePlayers_shouldTranslateDisplayFieldsOnly() {
    let provider = Arc::new(MockTranslation::new());
    let merger = merger_over(provider.clone());

    let translated = merger
        .translate_players(&[benzema()], &LocaleContext::new("en"))
        .await;

    assert_eq!(translated.len(), 1);
    let player = &translated[0];
    assert_eq!(player.position.as_deref(), Some("Forward"));
    assert_eq!(player.nationality.as_deref(), Some("France"));
    // Name and numeric stats never change
    assert_eq!(player.name, "Karim Benzema");
    assert_eq!(player.goals, 24);
    assert!(player.translated);
    assert_eq!(player.target_language.as_deref(), Some("en"));
}

#[tokio::test]
async fn test_translatePlayers_shouldSkipProviderForBaseLanguage() {
    let provider = Arc::new(MockTranslation::new());
    let merger = merger_over(provider.clone());

    let players = vec![benzema()];
    let translated = merger
        .translate_players(&players, &LocaleContext::new("es"))
        .await;

    assert_eq!(provider.call_count(), 0);
    assert_eq!(translated, players);
    assert!(!translated[0].translated);
}

#[tokio::test]
async fn test_translatePlayers_shouldDeduplicateSharedFieldValues() {
    let provider = Arc::new(MockTranslation::new());
    let merger = merger_over(provider.clone());

    // Three records sharing one position: the value is submitted once
    let mut players = Vec::new();
    for id in 1..=3 {
        let mut record = PlayerRecord::new(id, format!("Player {}", id));
        record.position = Some("Delantero".to_string());
        players.push(record);
    }

    let translated = merger
        .translate_players(&players, &LocaleContext::new("en"))
        .await;

    // One call per unique text: "Delantero" plus the rest of the common
    // position vocabulary
    assert_eq!(provider.call_count(), 4);
    assert!(translated
        .iter()
        .all(|p| p.position.as_deref() == Some("Forward")));
}

#[tokio::test]
async fn test_translatePlayers_shouldReturnOriginalsUntaggedOnTotalFailure() {
    let provider = Arc::new(MockTranslation::failing());
    let merger = merger_over(provider);

    let players = vec![benzema()];
    let translated = merger
        .translate_players(&players, &LocaleContext::new("en"))
        .await;

    assert_eq!(translated, players);
    assert!(!translated[0].translated);
    assert!(translated[0].target_language.is_none());
}

#[tokio::test]
async fn test_translatePlayers_shouldRecoverOnceProviderIsBack() {
    let provider = Arc::new(MockTranslation::failing());
    let merger = merger_over(provider.clone());
    let players = vec![benzema()];

    let while_down = merger
        .translate_players(&players, &LocaleContext::new("en"))
        .await;
    assert!(!while_down[0].translated);

    provider.set_failing(false);

    let after_recovery = merger
        .translate_players(&players, &LocaleContext::new("en"))
        .await;
    assert!(after_recovery[0].translated);
    assert_eq!(after_recovery[0].position.as_deref(), Some("Forward"));
}

#[tokio::test]
async fn test_translatePlayers_shouldKeepUnmappedFieldsIntact() {
    let provider = Arc::new(MockTranslation::new());
    let merger = merger_over(provider);

    let mut record = PlayerRecord::new(5, "Unknown");
    record.position = None;
    record.nationality = Some("Francia".to_string());

    let translated = merger
        .translate_players(&[record], &LocaleContext::new("en"))
        .await;

    assert_eq!(translated[0].position, None);
    assert_eq!(translated[0].nationality.as_deref(), Some("France"));
    // Still tagged even though only one field changed
    assert!(translated[0].translated);
}

#[tokio::test]
async fn test_translatePlayers_shouldSkipProviderForEmptyRecordSet() {
    let provider = Arc::new(MockTranslation::new());
    let merger = merger_over(provider.clone());

    let translated = merger
        .translate_players(&[], &LocaleContext::new("en"))
        .await;

    assert!(translated.is_empty());
    // Not even the common vocabulary is submitted without records
    assert_eq!(provider.call_count(), 0);
}
