use anyhow::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::FaceRecognitionProvider;
use crate::errors::ProviderError;
use crate::models::FaceMatchCandidate;

/// Client for the face-recognition REST API
///
/// Search submits raw image bytes against a named collection and returns
/// ranked matches. Indexing and collection creation are administrative
/// operations kept off the search hot path.
#[derive(Debug)]
pub struct RekognitionApi {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Collection holding the indexed player faces
    collection_id: String,
}

/// One face match in a search response
#[derive(Debug, Deserialize)]
pub struct FaceMatchEntry {
    /// Provider-side face identifier
    pub face_id: String,

    /// External identity key supplied at indexing time
    pub external_id: String,

    /// Similarity to the searched face, 0-100
    pub similarity: f32,

    /// Detection confidence, 0-100
    pub confidence: f32,
}

/// Search response payload
#[derive(Debug, Deserialize)]
pub struct SearchFacesResponse {
    /// Ranked matches, provider order preserved
    #[serde(default)]
    pub face_matches: Vec<FaceMatchEntry>,
}

/// Index response payload
#[derive(Debug, Deserialize)]
pub struct IndexFaceResponse {
    /// Face id assigned to the newly indexed face
    pub face_id: String,
}

impl RekognitionApi {
    /// Create a new face-recognition API client
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        collection_id: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            collection_id: collection_id.into(),
        }
    }

    fn collection_url(&self, operation: &str) -> String {
        format!(
            "{}/collections/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.collection_id,
            operation
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("Face-recognition API error ({}): {}", status, message);

        Err(match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationError(message),
            429 => ProviderError::RateLimitExceeded(message),
            code => ProviderError::ApiError {
                status_code: code,
                message,
            },
        })
    }

    fn map_send_error(e: reqwest::Error) -> ProviderError {
        if e.is_connect() || e.is_timeout() {
            ProviderError::ConnectionError(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl FaceRecognitionProvider for RekognitionApi {
    async fn search_by_image(
        &self,
        image: &[u8],
        max_candidates: u32,
        similarity_threshold: f32,
    ) -> Result<Vec<FaceMatchCandidate>, ProviderError> {
        let response = self
            .client
            .post(self.collection_url("search"))
            .query(&[
                ("max_faces", max_candidates.to_string()),
                ("threshold", similarity_threshold.to_string()),
            ])
            .header("Content-Type", "application/octet-stream")
            .bearer_auth(&self.api_key)
            .body(image.to_vec())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;
        let parsed = response
            .json::<SearchFacesResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed
            .face_matches
            .into_iter()
            .map(|entry| FaceMatchCandidate {
                face_id: entry.face_id,
                external_id: entry.external_id,
                similarity: entry.similarity,
                confidence: entry.confidence,
            })
            .collect())
    }

    async fn index_face(
        &self,
        image: &[u8],
        external_id: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.collection_url("faces"))
            .query(&[("external_id", external_id)])
            .header("Content-Type", "application/octet-stream")
            .bearer_auth(&self.api_key)
            .body(image.to_vec())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;
        let parsed = response
            .json::<IndexFaceResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.face_id)
    }

    async fn create_collection(&self) -> Result<(), ProviderError> {
        let url = format!(
            "{}/collections/{}",
            self.endpoint.trim_end_matches('/'),
            self.collection_id
        );

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response).await?;
        Ok(())
    }
}
