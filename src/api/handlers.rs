/*!
 * Request handlers for the HTTP endpoints.
 *
 * Every handler validates its input before touching a provider, delegates
 * to a pipeline service, and wraps the result in a `success` envelope.
 * Spanish route segments (`jugadores`, `buscarjugador`) are part of the
 * public API surface and kept as-is.
 */

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use bytes::Bytes;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::language_utils;
use crate::models::LocaleContext;
use crate::translation::tree::base_catalogue;
use crate::translation::TranslationResult;

/// Body of a single-text translation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

/// Body of a batch translation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBatchRequest {
    pub texts: Vec<String>,
    pub target_language: String,
}

/// One translation entry in a response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    pub success: bool,
    pub translated_text: String,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<TranslationResult> for TranslationEntry {
    fn from(result: TranslationResult) -> Self {
        Self {
            success: result.success,
            translated_text: result.translated_text,
            target_language: result.target_language,
            error: result.error,
        }
    }
}

/// Optional target language on lookup and image-search requests
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleQuery {
    pub target_language: Option<String>,
}

impl LocaleQuery {
    /// Resolve the query into a locale context, validating any explicit
    /// target against ISO 639-1. An absent target means the base language.
    fn into_locale(self, base_language: &str) -> Result<LocaleContext, ApiError> {
        match self.target_language {
            Some(target) => {
                language_utils::validate_language_code(&target)
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                Ok(LocaleContext::with_base(base_language, target.trim().to_lowercase()))
            }
            None => Ok(LocaleContext::with_base(base_language, base_language)),
        }
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let translation_up = state.translation_provider.healthcheck().await.is_ok();

    Json(json!({
        "status": "ok",
        "translation_provider": if translation_up { "up" } else { "down" },
    }))
}

/// POST /api/translate
pub async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationEntry>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("Text must not be empty"));
    }
    language_utils::validate_language_code(&request.target_language)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let result = state
        .translator
        .translate_one(&request.text, &request.target_language)
        .await;

    Ok(Json(result.into()))
}

/// POST /api/translate/batch
pub async fn translate_batch(
    State(state): State<AppState>,
    Json(request): Json<TranslateBatchRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.texts.is_empty() {
        return Err(ApiError::bad_request("Texts must not be empty"));
    }
    language_utils::validate_language_code(&request.target_language)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let results = state
        .translator
        .translate_many(&request.texts, &request.target_language)
        .await;
    let translations: Vec<TranslationEntry> = results.into_iter().map(Into::into).collect();

    Ok(Json(json!({
        "success": true,
        "translations": translations,
    })))
}

/// GET /api/translate/languages
pub async fn list_languages() -> Json<Value> {
    Json(json!({
        "success": true,
        "languages": language_utils::supported_languages(),
    }))
}

/// GET /api/translate/ui/{lang}
///
/// The full UI text catalogue translated into the requested language,
/// preserving its nested structure.
pub async fn ui_catalogue(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<Value>, ApiError> {
    language_utils::validate_language_code(&lang)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let locale = LocaleContext::with_base(&state.base_language, lang.trim().to_lowercase());
    let catalogue = base_catalogue().translate(&state.translator, &locale).await;

    Ok(Json(json!({
        "success": true,
        "targetLanguage": locale.target_language,
        "texts": catalogue,
    })))
}

/// POST /api/rekognition/search
///
/// Multipart upload with an `image` field. The body-size cap is enforced
/// by the router layer; the MIME check here rejects non-image uploads
/// before any provider call.
pub async fn search_by_image(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let locale = query.into_locale(&state.base_language)?;
    let image = read_image_field(multipart).await?;

    let outcome = state.orchestrator.run(&image, &locale).await?;

    Ok(Json(json!({
        "success": true,
        "source": outcome.source,
        "faceCount": outcome.face_count,
        "players": outcome.players,
    })))
}

/// POST /api/rekognition/index
///
/// Multipart upload with an `image` field and a `playerId` field. The
/// player must already exist in the store so the indexed face resolves
/// to a record later.
pub async fn index_face(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut image: Option<Bytes> = None;
    let mut player_id: Option<String> = None;
    let mut player_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        match field.name() {
            Some("image") => {
                validate_image_content_type(field.content_type())?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                image = Some(bytes);
            }
            Some("playerId") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                player_id = Some(value);
            }
            Some("playerName") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                player_name = Some(value);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::bad_request("Missing image field"))?;
    if image.is_empty() {
        return Err(ApiError::bad_request("Image payload must not be empty"));
    }
    let player_id = player_id.ok_or_else(|| ApiError::bad_request("Missing playerId field"))?;

    let numeric_id: i64 = player_id
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("playerId must be numeric"))?;
    let player = state
        .repository
        .get_player(numeric_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No player with id {}", numeric_id)))?;

    let face_id = state
        .resolver
        .index_face(&image, &numeric_id.to_string())
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    // The submitted name is display-only; the store record is authoritative
    let display_name = player_name.unwrap_or_else(|| player.name.clone());
    info!("Indexed face for player {} ({})", display_name, numeric_id);

    Ok(Json(json!({
        "success": true,
        "faceId": face_id,
        "playerId": numeric_id,
    })))
}

/// POST /api/rekognition/collection/create
pub async fn create_collection(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .resolver
        .create_collection()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(json!({ "success": true })))
}

/// GET /api/jugadores/buscarjugador/{nombre}
pub async fn search_players(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let fragment = nombre.trim();
    if fragment.is_empty() {
        return Err(ApiError::bad_request("Search name must not be empty"));
    }

    let players = state.repository.search_players(fragment).await?;

    Ok(Json(json!({
        "success": true,
        "count": players.len(),
        "players": players,
    })))
}

/// GET /api/jugadores/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let player = state
        .repository
        .get_player(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No player with id {}", id)))?;

    Ok(Json(json!({
        "success": true,
        "player": player,
    })))
}

/// GET /api/jugadores/{id}/estadisticas
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let stats = state
        .repository
        .get_player_stats(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No player with id {}", id)))?;

    Ok(Json(json!({
        "success": true,
        "playerId": id,
        "stats": stats,
    })))
}

/// Pull the `image` field out of a multipart body, enforcing an image MIME
async fn read_image_field(mut multipart: Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        validate_image_content_type(field.content_type())?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ApiError::bad_request("Image payload must not be empty"));
        }
        return Ok(bytes);
    }

    Err(ApiError::bad_request("Missing image field"))
}

fn validate_image_content_type(content_type: Option<&str>) -> Result<(), ApiError> {
    match content_type {
        Some(mime) if mime.starts_with("image/") => Ok(()),
        Some(mime) => Err(ApiError::bad_request(format!(
            "Unsupported content type: {}",
            mime
        ))),
        None => Err(ApiError::bad_request("Image field must declare a content type")),
    }
}
