/*!
 * Tests for UI text-catalogue translation
 */

use std::sync::Arc;
use std::time::Duration;

use playerscout::models::LocaleContext;
use playerscout::translation::tree::base_catalogue;
use playerscout::translation::{BatchTranslator, TextTree};

use crate::common::mock_providers::MockTranslation;

fn translator_over(provider: Arc<MockTranslation>) -> BatchTranslator {
    BatchTranslator::with_request_delay(provider, Duration::ZERO)
}

#[test]
fn test_translate_shouldPreserveStructure() {
    let provider = Arc::new(MockTranslation::new());
    let translator = translator_over(provider);

    let catalogue = base_catalogue();
    let translated = tokio_test::block_on(async {
        catalogue
            .translate(&translator, &LocaleContext::new("en"))
            .await
    });

    // Same keys, same shape, every leaf rewritten
    let original_keys: Vec<String> = catalogue.flatten().into_iter().map(|(k, _)| k).collect();
    let translated_keys: Vec<String> = translated.flatten().into_iter().map(|(k, _)| k).collect();
    assert_eq!(original_keys, translated_keys);

    // Unknown leaves carry the mock's passthrough marker
    assert_eq!(translated.get("common.loading"), Some("Cargando... [en]"));
}

#[test]
fn test_translate_shouldReturnCloneForBaseLanguage() {
    let provider = Arc::new(MockTranslation::new());
    let translator = translator_over(provider.clone());

    let catalogue = base_catalogue();
    let translated = tokio_test::block_on(async {
        catalogue
            .translate(&translator, &LocaleContext::new("es"))
            .await
    });

    assert_eq!(provider.call_count(), 0);
    assert_eq!(translated, catalogue);
}

#[test]
fn test_translate_shouldDeduplicateRepeatedLeaves() {
    let provider = Arc::new(MockTranslation::new());
    let translator = translator_over(provider.clone());

    let tree = TextTree::from_json(serde_json::json!({
        "a": { "x": "Portero", "y": "Portero" },
        "b": "Portero"
    }))
    .unwrap();

    let translated = tokio_test::block_on(async {
        tree.translate(&translator, &LocaleContext::new("en")).await
    });

    assert_eq!(provider.call_count(), 1);
    assert_eq!(translated.get("a.x"), Some("Goalkeeper"));
    assert_eq!(translated.get("b"), Some("Goalkeeper"));
}

#[test]
fn test_translate_shouldKeepOriginalLeavesOnFailure() {
    let provider = Arc::new(MockTranslation::failing());
    let translator = translator_over(provider);

    let catalogue = base_catalogue();
    let translated = tokio_test::block_on(async {
        catalogue
            .translate(&translator, &LocaleContext::new("en"))
            .await
    });

    assert_eq!(translated, catalogue);
}
