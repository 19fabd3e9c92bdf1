/*!
 * Provider interfaces for the cloud AI services.
 *
 * This module contains the trait seams the pipeline depends on:
 * - Translate: text translation with automatic source-language detection
 * - Rekognition: face search over an indexed collection
 *
 * Concrete reqwest-backed clients live in the submodules; tests substitute
 * mock implementations behind the same traits.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::models::FaceMatchCandidate;

/// A single successful translation from the provider
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedText {
    /// Text in the target language
    pub translated_text: String,

    /// Source language as detected by the provider; never supplied by us
    pub source_language: String,
}

/// Common trait for translation providers
///
/// Translates one text at a time. The provider always auto-detects the
/// source language. Batch behavior (ordering, deduplication, failure
/// isolation) is the batch client's concern, not the provider's.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a single text into the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_language` - ISO 639-1 target language code
    ///
    /// # Returns
    /// * `Result<TranslatedText, ProviderError>` - The translation or an error
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<TranslatedText, ProviderError>;

    /// Test the connection to the provider
    async fn healthcheck(&self) -> Result<(), ProviderError>;
}

/// Common trait for face-recognition providers
#[async_trait]
pub trait FaceRecognitionProvider: Send + Sync + Debug {
    /// Search the collection for faces matching the submitted image
    ///
    /// Matches come back in the provider's own ranking, typically
    /// descending similarity. A search never mutates collection state.
    async fn search_by_image(
        &self,
        image: &[u8],
        max_candidates: u32,
        similarity_threshold: f32,
    ) -> Result<Vec<FaceMatchCandidate>, ProviderError>;

    /// Index a face into the collection (administrative, out of the hot path)
    ///
    /// # Returns
    /// * The provider-assigned face id
    async fn index_face(
        &self,
        image: &[u8],
        external_id: &str,
    ) -> Result<String, ProviderError>;

    /// Create the face collection (administrative)
    async fn create_collection(&self) -> Result<(), ProviderError>;
}

pub mod rekognition;
pub mod translate;
