/*!
 * Face match resolution.
 *
 * Thin, never-raising layer over the face-recognition provider: a search
 * yields an outcome with a success flag and a (possibly empty) ranked match
 * list, so callers can always continue the pipeline. Indexing and collection
 * creation pass through for administrative use.
 */

use log::{error, info};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::models::FaceMatchCandidate;
use crate::providers::FaceRecognitionProvider;

/// Default maximum candidates per search
pub const DEFAULT_MAX_CANDIDATES: u32 = 5;

/// Default similarity threshold, 0-100
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 80.0;

/// Outcome of one face search
///
/// `success == false` means the provider call failed; the match list is
/// then empty and the caller decides how to degrade.
#[derive(Debug, Clone)]
pub struct FaceSearchOutcome {
    /// Whether the provider call succeeded
    pub success: bool,

    /// Matches in the provider's ranking, typically descending similarity
    pub matches: Vec<FaceMatchCandidate>,

    /// Provider error when `success` is false
    pub error: Option<String>,
}

/// Resolver for identity candidates from an uploaded image
pub struct FaceMatchResolver {
    /// Face-recognition provider
    provider: Arc<dyn FaceRecognitionProvider>,

    /// Maximum candidates requested per search
    max_candidates: u32,

    /// Similarity threshold for a match, 0-100
    similarity_threshold: f32,
}

impl FaceMatchResolver {
    /// Create a resolver with the default candidate count and threshold
    pub fn new(provider: Arc<dyn FaceRecognitionProvider>) -> Self {
        Self::with_limits(
            provider,
            DEFAULT_MAX_CANDIDATES,
            DEFAULT_SIMILARITY_THRESHOLD,
        )
    }

    /// Create a resolver with explicit limits
    pub fn with_limits(
        provider: Arc<dyn FaceRecognitionProvider>,
        max_candidates: u32,
        similarity_threshold: f32,
    ) -> Self {
        Self {
            provider,
            max_candidates,
            similarity_threshold,
        }
    }

    /// Search the collection for faces matching the submitted image
    ///
    /// Provider errors are converted into a failed outcome with an empty
    /// match list; they never propagate. Zero matches is a successful
    /// outcome. A search never mutates collection state.
    pub async fn search(&self, image: &[u8]) -> FaceSearchOutcome {
        match self
            .provider
            .search_by_image(image, self.max_candidates, self.similarity_threshold)
            .await
        {
            Ok(matches) => {
                info!("Face search found {} matches", matches.len());
                FaceSearchOutcome {
                    success: true,
                    matches,
                    error: None,
                }
            }
            Err(e) => {
                error!("Face search failed: {}", e);
                FaceSearchOutcome {
                    success: false,
                    matches: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Index a player face into the collection (administrative)
    pub async fn index_face(
        &self,
        image: &[u8],
        external_id: &str,
    ) -> Result<String, ProviderError> {
        let face_id = self.provider.index_face(image, external_id).await?;
        info!("Indexed face {} for external id {}", face_id, external_id);
        Ok(face_id)
    }

    /// Create the face collection (administrative)
    pub async fn create_collection(&self) -> Result<(), ProviderError> {
        self.provider.create_collection().await
    }
}
