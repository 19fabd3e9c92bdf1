/*!
 * Image-search pipeline.
 *
 * The orchestrator sequences image submission, face resolution, player
 * enrichment and field translation into one request-scoped run, with a
 * degraded branch substituting simulated candidates when the face provider
 * is unavailable.
 */

pub mod orchestrator;

pub use orchestrator::{ImageSearchOrchestrator, ImageSearchOutcome, MatchSource, SearchState};
