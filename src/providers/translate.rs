use anyhow::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{TranslatedText, TranslationProvider};
use crate::errors::ProviderError;

/// Client for the cloud translation REST API
///
/// The service auto-detects the source language of every request; callers
/// only name the target. Shapes follow the provider's translate operation.
#[derive(Debug)]
pub struct TranslateApi {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
}

/// Translate request payload
#[derive(Debug, Serialize)]
pub struct TranslateRequest {
    /// The text to translate
    pub text: String,

    /// Source language code; always "auto" so the provider detects it
    pub source_language: String,

    /// Target language code
    pub target_language: String,
}

impl TranslateRequest {
    /// Create a request with automatic source-language detection
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: "auto".to_string(),
            target_language: target_language.into(),
        }
    }
}

/// Translate response payload
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// The translated text
    pub translated_text: String,

    /// Source language the provider detected
    pub source_language: String,
}

impl TranslateApi {
    /// Create a new translation API client
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    async fn send(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError> {
        let response = self
            .client
            .post(self.url("translate"))
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, message);

            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(message),
                429 => ProviderError::RateLimitExceeded(message),
                code => ProviderError::ApiError {
                    status_code: code,
                    message,
                },
            });
        }

        response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TranslationProvider for TranslateApi {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<TranslatedText, ProviderError> {
        let request = TranslateRequest::new(text, target_language);
        let response = self.send(&request).await?;

        Ok(TranslatedText {
            translated_text: response.translated_text,
            source_language: response.source_language,
        })
    }

    async fn healthcheck(&self) -> Result<(), ProviderError> {
        // A minimal known-good translation exercises auth and connectivity
        let request = TranslateRequest::new("Hello", "es");
        self.send(&request).await?;
        Ok(())
    }
}
