/*!
 * End-to-end tests for the image search pipeline
 *
 * These tests wire the orchestrator over mock providers and an in-memory
 * store seeded with well-known players, and exercise the live, degraded
 * and empty-result paths.
 */

use std::sync::Arc;
use std::time::Duration;

use playerscout::enrichment::PlayerEnrichmentService;
use playerscout::errors::AppError;
use playerscout::models::LocaleContext;
use playerscout::pipeline::{ImageSearchOrchestrator, MatchSource};
use playerscout::translation::{BatchTranslator, FieldTranslationMerger};
use playerscout::vision::FaceMatchResolver;

use crate::common::mock_providers::{candidate, MockFaceRecognition, MockTranslation};
use crate::common::{init_test_logging, seeded_repository};

const FAKE_IMAGE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

async fn orchestrator_over(
    face_provider: MockFaceRecognition,
    translation_provider: Arc<MockTranslation>,
) -> ImageSearchOrchestrator {
    init_test_logging();
    let repository = seeded_repository().await.unwrap();

    ImageSearchOrchestrator::new(
        FaceMatchResolver::new(Arc::new(face_provider)),
        PlayerEnrichmentService::new(repository),
        FieldTranslationMerger::new(BatchTranslator::with_request_delay(
            translation_provider,
            Duration::ZERO,
        )),
    )
}

#[tokio::test]
async fn test_run_shouldResolveAndTranslateLiveMatches() {
    let face_provider =
        MockFaceRecognition::with_matches(vec![candidate("1", 97.5), candidate("2", 91.0)]);
    let orchestrator = orchestrator_over(face_provider, Arc::new(MockTranslation::new())).await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("en"))
        .await
        .unwrap();

    assert_eq!(outcome.source, MatchSource::Live);
    assert_eq!(outcome.face_count, 2);
    assert_eq!(outcome.players.len(), 2);

    // Match order preserved, display fields translated, stats untouched
    assert_eq!(outcome.players[0].name, "Karim Benzema");
    assert_eq!(outcome.players[0].position.as_deref(), Some("Forward"));
    assert_eq!(outcome.players[0].goals, 2);
    assert!(outcome.players[0].translated);
    assert_eq!(outcome.players[1].name, "Luka Modric");
    assert_eq!(outcome.players[1].position.as_deref(), Some("Midfielder"));
}

#[tokio::test]
async fn test_run_shouldSkipTranslationForBaseLanguage() {
    let face_provider = MockFaceRecognition::with_matches(vec![candidate("1", 97.5)]);
    let translation_provider = Arc::new(MockTranslation::new());
    let orchestrator = orchestrator_over(face_provider, translation_provider.clone()).await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("es"))
        .await
        .unwrap();

    assert_eq!(translation_provider.call_count(), 0);
    assert_eq!(outcome.players[0].position.as_deref(), Some("Delantero"));
    assert!(!outcome.players[0].translated);
}

#[tokio::test]
async fn test_run_shouldSubstituteSimulatedCandidatesWhenProviderDown() {
    let orchestrator =
        orchestrator_over(MockFaceRecognition::failing(), Arc::new(MockTranslation::new())).await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("en"))
        .await
        .unwrap();

    // The outcome is explicitly tagged as not coming from the provider
    assert_eq!(outcome.source, MatchSource::Simulated);
    assert_eq!(outcome.face_count, 3);

    // Simulated external ids resolve against the seeded store and go
    // through the normal enrichment and translation stages
    assert_eq!(outcome.players.len(), 3);
    assert_eq!(outcome.players[0].name, "Karim Benzema");
    assert_eq!(outcome.players[2].name, "Thibaut Courtois");
    assert_eq!(outcome.players[2].position.as_deref(), Some("Goalkeeper"));
    assert!(outcome.players.iter().all(|p| p.translated));
}

#[tokio::test]
async fn test_run_shouldCompleteWithEmptyListForZeroFaces() {
    let orchestrator =
        orchestrator_over(MockFaceRecognition::empty(), Arc::new(MockTranslation::new())).await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("en"))
        .await
        .unwrap();

    assert_eq!(outcome.source, MatchSource::Live);
    assert_eq!(outcome.face_count, 0);
    assert!(outcome.players.is_empty());
}

#[tokio::test]
async fn test_run_shouldDropCandidatesUnknownToStore() {
    let face_provider = MockFaceRecognition::with_matches(vec![
        candidate("1", 96.0),
        candidate("404", 88.0),
        candidate("3", 83.0),
    ]);
    let orchestrator = orchestrator_over(face_provider, Arc::new(MockTranslation::new())).await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("en"))
        .await
        .unwrap();

    // The unknown candidate is dropped, the rest keep their order
    assert_eq!(outcome.face_count, 3);
    assert_eq!(outcome.players.len(), 2);
    assert_eq!(outcome.players[0].name, "Karim Benzema");
    assert_eq!(outcome.players[1].name, "Thibaut Courtois");
}

#[tokio::test]
async fn test_indexFace_shouldRecordExternalIdWithProvider() {
    let face_provider = Arc::new(MockFaceRecognition::empty());
    let resolver = FaceMatchResolver::new(face_provider.clone());

    let face_id = resolver.index_face(FAKE_IMAGE, "7").await.unwrap();

    assert_eq!(face_id, "mock-face-7");
    assert_eq!(face_provider.indexed_ids(), vec!["7".to_string()]);
}

#[tokio::test]
async fn test_run_shouldRejectEmptyImage() {
    let orchestrator =
        orchestrator_over(MockFaceRecognition::empty(), Arc::new(MockTranslation::new())).await;

    let result = orchestrator.run(&[], &LocaleContext::new("en")).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_run_shouldStayUntranslatedWhenBothProvidersDown() {
    let orchestrator = orchestrator_over(
        MockFaceRecognition::failing(),
        Arc::new(MockTranslation::failing()),
    )
    .await;

    let outcome = orchestrator
        .run(FAKE_IMAGE, &LocaleContext::new("en"))
        .await
        .unwrap();

    // Degraded candidates still resolve; translation failure leaves the
    // Spanish originals untagged
    assert_eq!(outcome.source, MatchSource::Simulated);
    assert_eq!(outcome.players.len(), 3);
    assert!(outcome.players.iter().all(|p| !p.translated));
    assert_eq!(outcome.players[0].position.as_deref(), Some("Delantero"));
}
