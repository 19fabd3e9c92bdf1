/*!
 * # PlayerScout - Football Player Lookup
 *
 * A Rust library and service for looking up football players by name or
 * by photo, with on-demand translation of player data and UI texts.
 *
 * ## Features
 *
 * - Identify players from an uploaded photo via a face-recognition provider
 * - Resolve face matches into full player records from a local store
 * - Translate player display fields and the UI text catalogue on demand
 * - Degrade gracefully: provider outages never break a lookup
 * - Name search with aggregated match statistics
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `models`: Core data types shared across the pipeline
 * - `providers`: Client implementations for external services:
 *   - `providers::translate`: Translation API client
 *   - `providers::rekognition`: Face-recognition API client
 * - `store`: SQLite-backed player repository
 * - `translation`: Translation services:
 *   - `translation::batch`: Position-aligned batch translation
 *   - `translation::merge`: Player display-field translation
 *   - `translation::tree`: UI text-catalogue translation
 * - `vision`: Face match resolution over the recognition provider
 * - `enrichment`: Candidate-to-record resolution against the store
 * - `pipeline`: Image-search orchestration
 * - `api`: HTTP endpoints
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod api;
pub mod app_config;
pub mod enrichment;
pub mod errors;
pub mod language_utils;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod store;
pub mod translation;
pub mod vision;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, StoreError};
pub use language_utils::{get_language_name, language_codes_match, validate_language_code};
pub use models::{FaceMatchCandidate, LocaleContext, PlayerRecord, PlayerStats};
pub use pipeline::{ImageSearchOrchestrator, ImageSearchOutcome, MatchSource};
pub use store::PlayerRepository;
pub use translation::{BatchTranslator, FieldTranslationMerger, TextTree, TranslationResult};
pub use vision::FaceMatchResolver;
