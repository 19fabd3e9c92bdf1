/*!
 * HTTP boundary for the lookup service.
 *
 * Thin axum layer over the pipeline services: request validation and JSON
 * shaping live here, never business logic. Correctness claims belong to
 * the pipeline modules this delegates to.
 */

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::app_config::Config;
use crate::enrichment::PlayerEnrichmentService;
use crate::errors::AppError;
use crate::pipeline::ImageSearchOrchestrator;
use crate::providers::{FaceRecognitionProvider, TranslationProvider};
use crate::store::PlayerRepository;
use crate::translation::{BatchTranslator, FieldTranslationMerger};
use crate::vision::FaceMatchResolver;

pub mod handlers;

/// Maximum accepted image upload size: 5 MB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Base language of stored data
    pub base_language: String,

    /// Player store
    pub repository: PlayerRepository,

    /// Batch translation client for the translate endpoints
    pub translator: Arc<BatchTranslator>,

    /// Translation provider, used for health reporting
    pub translation_provider: Arc<dyn TranslationProvider>,

    /// Face resolver for the administrative endpoints
    pub resolver: Arc<FaceMatchResolver>,

    /// Full image-search pipeline
    pub orchestrator: Arc<ImageSearchOrchestrator>,
}

impl AppState {
    /// Wire the pipeline services from config, store and providers
    pub fn new(
        config: &Config,
        repository: PlayerRepository,
        translation_provider: Arc<dyn TranslationProvider>,
        face_provider: Arc<dyn FaceRecognitionProvider>,
    ) -> Self {
        let request_delay = std::time::Duration::from_millis(config.translation.request_delay_ms);

        let translator = Arc::new(BatchTranslator::with_request_delay(
            translation_provider.clone(),
            request_delay,
        ));

        let resolver = Arc::new(FaceMatchResolver::with_limits(
            face_provider.clone(),
            config.face_recognition.max_candidates,
            config.face_recognition.similarity_threshold,
        ));

        // The orchestrator owns its own service instances; they share the
        // underlying providers and store with the endpoint-level ones.
        let orchestrator = Arc::new(ImageSearchOrchestrator::new(
            FaceMatchResolver::with_limits(
                face_provider,
                config.face_recognition.max_candidates,
                config.face_recognition.similarity_threshold,
            ),
            PlayerEnrichmentService::new(repository.clone()),
            FieldTranslationMerger::new(BatchTranslator::with_request_delay(
                translation_provider.clone(),
                request_delay,
            )),
        ));

        Self {
            base_language: config.base_language.clone(),
            repository,
            translator,
            translation_provider,
            resolver,
            orchestrator,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/translate", post(handlers::translate_text))
        .route("/api/translate/batch", post(handlers::translate_batch))
        .route("/api/translate/languages", get(handlers::list_languages))
        .route("/api/translate/ui/{lang}", get(handlers::ui_catalogue))
        .route("/api/rekognition/search", post(handlers::search_by_image))
        .route("/api/rekognition/index", post(handlers::index_face))
        .route(
            "/api/rekognition/collection/create",
            post(handlers::create_collection),
        )
        .route(
            "/api/jugadores/buscarjugador/{nombre}",
            get(handlers::search_players),
        )
        .route("/api/jugadores/{id}", get(handlers::get_player))
        .route(
            "/api/jugadores/{id}/estadisticas",
            get(handlers::get_player_stats),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Error envelope returned by every endpoint
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::InvalidInput(message) => Self::bad_request(message),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}
