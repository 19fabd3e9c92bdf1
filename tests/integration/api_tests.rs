/*!
 * HTTP boundary tests
 *
 * Uses tower's `ServiceExt` to send requests directly to the router over
 * mock providers and a seeded in-memory store. Focuses on the validation
 * rejections the handlers enforce before any provider call, plus a few
 * happy paths through the same routes.
 */

use axum::http::StatusCode;
use serde_json::json;

use crate::common::mock_providers::{candidate, MockFaceRecognition};
use crate::common::{body_json, build_test_app, get, post_json, post_multipart, MultipartForm};

const FAKE_IMAGE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

#[tokio::test]
async fn test_health_shouldReportOk() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["translation_provider"], "up");
}

#[tokio::test]
async fn test_translate_shouldRejectEmptyText() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = post_json(
        app,
        "/api/translate",
        json!({ "text": "   ", "targetLanguage": "en" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_translate_shouldRejectUnknownLanguage() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = post_json(
        app,
        "/api/translate",
        json!({ "text": "Delantero", "targetLanguage": "zz" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_translate_shouldReturnTranslationForValidRequest() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = post_json(
        app,
        "/api/translate",
        json!({ "text": "Delantero", "targetLanguage": "en" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["translatedText"], "Forward");
    assert_eq!(body["targetLanguage"], "en");
}

#[tokio::test]
async fn test_translateBatch_shouldRejectEmptyTextList() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = post_json(
        app,
        "/api/translate/batch",
        json!({ "texts": [], "targetLanguage": "en" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_translateBatch_shouldAlignResultsWithInputs() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = post_json(
        app,
        "/api/translate/batch",
        json!({ "texts": ["Delantero", "Francia"], "targetLanguage": "en" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let translations = body["translations"].as_array().unwrap();
    assert_eq!(translations.len(), 2);
    assert_eq!(translations[0]["translatedText"], "Forward");
    assert_eq!(translations[1]["translatedText"], "France");
}

#[tokio::test]
async fn test_search_shouldRejectMissingImageField() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let form = MultipartForm::new().text("comment", "no image here");
    let response = post_multipart(app, "/api/rekognition/search", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_search_shouldRejectNonImageUpload() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let form = MultipartForm::new().file("image", "text/plain", b"not an image");
    let response = post_multipart(app, "/api/rekognition/search", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_shouldReturnTaggedPlayersForValidUpload() {
    let face_provider = MockFaceRecognition::with_matches(vec![candidate("1", 95.0)]);
    let app = build_test_app(face_provider).await;

    let form = MultipartForm::new().file("image", "image/jpeg", FAKE_IMAGE);
    let response =
        post_multipart(app, "/api/rekognition/search?targetLanguage=en", form).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "live");
    assert_eq!(body["faceCount"], 1);
    assert_eq!(body["players"][0]["name"], "Karim Benzema");
    assert_eq!(body["players"][0]["position"], "Forward");
}

#[tokio::test]
async fn test_index_shouldRejectMissingPlayerId() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let form = MultipartForm::new().file("image", "image/jpeg", FAKE_IMAGE);
    let response = post_multipart(app, "/api/rekognition/index", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_index_shouldRejectNonNumericPlayerId() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let form = MultipartForm::new()
        .file("image", "image/jpeg", FAKE_IMAGE)
        .text("playerId", "benzema");
    let response = post_multipart(app, "/api/rekognition/index", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_index_shouldReturnFaceIdForSeededPlayer() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let form = MultipartForm::new()
        .file("image", "image/jpeg", FAKE_IMAGE)
        .text("playerId", "1")
        .text("playerName", "Karim Benzema");
    let response = post_multipart(app, "/api/rekognition/index", form).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["faceId"], "mock-face-1");
    assert_eq!(body["playerId"], 1);
}

#[tokio::test]
async fn test_getPlayer_shouldReturn404ForUnknownId() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = get(app, "/api/jugadores/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_searchPlayers_shouldFindSeededPlayerByFragment() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = get(app, "/api/jugadores/buscarjugador/Benz").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["players"][0]["name"], "Karim Benzema");
}

#[tokio::test]
async fn test_listLanguages_shouldIncludeBaseLanguageFirst() {
    let app = build_test_app(MockFaceRecognition::empty()).await;
    let response = get(app, "/api/translate/languages").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["languages"][0]["code"], "es");
}
