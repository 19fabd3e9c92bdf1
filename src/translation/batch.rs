/*!
 * Batch translation processing.
 *
 * This module contains the batch client over the translation provider:
 * requests are issued sequentially with a small politeness delay, each
 * failure is isolated to its own position, and the result sequence is
 * always aligned with the input sequence.
 */

use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::providers::TranslationProvider;

/// Default delay between sequential provider calls.
/// Mitigates provider rate limiting; a throughput tradeoff, not a
/// correctness requirement.
const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Result of translating one batch entry, aligned by position
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// Whether the provider translated this entry
    pub success: bool,

    /// Translated text, or the original text when `success` is false
    pub translated_text: String,

    /// Target language of the batch
    pub target_language: String,

    /// Provider error for this entry, if any
    pub error: Option<String>,
}

/// Batch translator over a translation provider
///
/// Callers are expected to deduplicate their inputs, but duplicates are
/// safe: each occurrence is translated independently in order, so alignment
/// never breaks.
pub struct BatchTranslator {
    /// The provider to translate with
    provider: Arc<dyn TranslationProvider>,

    /// Delay between sequential provider calls
    request_delay: Duration,
}

impl BatchTranslator {
    /// Create a new batch translator with the default request delay
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    /// Create a batch translator with an explicit request delay
    pub fn with_request_delay(
        provider: Arc<dyn TranslationProvider>,
        request_delay: Duration,
    ) -> Self {
        Self {
            provider,
            request_delay,
        }
    }

    /// Translate a single text, converting provider failure into a
    /// failed-result entry carrying the original text
    pub async fn translate_one(&self, text: &str, target_language: &str) -> TranslationResult {
        match self.provider.translate(text, target_language).await {
            Ok(translated) => TranslationResult {
                success: true,
                translated_text: translated.translated_text,
                target_language: target_language.to_string(),
                error: None,
            },
            Err(e) => {
                warn!("Translation failed, keeping original text: {}", e);
                TranslationResult {
                    success: false,
                    translated_text: text.to_string(),
                    target_language: target_language.to_string(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Translate a sequence of texts into the target language
    ///
    /// The output is position-aligned with the input: one result per input
    /// text, in order, regardless of individual failures. An individual
    /// failure never aborts the remaining entries.
    pub async fn translate_many(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Vec<TranslationResult> {
        debug!(
            "Translating batch of {} texts to {}",
            texts.len(),
            target_language
        );

        let mut results = Vec::with_capacity(texts.len());
        let mut success_count = 0usize;

        for (idx, text) in texts.iter().enumerate() {
            // Space out sequential calls to respect provider rate limits
            if idx > 0 && !self.request_delay.is_zero() {
                sleep(self.request_delay).await;
            }

            let result = self.translate_one(text, target_language).await;
            if result.success {
                success_count += 1;
            }
            results.push(result);
        }

        debug!(
            "Batch completed: {} succeeded, {} failed",
            success_count,
            results.len() - success_count
        );

        results
    }
}
