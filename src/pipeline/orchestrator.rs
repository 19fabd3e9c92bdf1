/*!
 * Image search orchestration.
 *
 * State machine over one image-search request:
 *
 * `Idle -> ImageSubmitted -> FacesResolved -> PlayersEnriched -> Translated -> Done`
 *
 * with a `Degraded` branch out of `ImageSubmitted` when the face provider
 * is unavailable. Each external call owns its internal failure handling;
 * the orchestrator never retries and is constructed fresh state each run.
 */

use anyhow::Result;
use log::{debug, info, warn};
use serde::Serialize;

use crate::enrichment::PlayerEnrichmentService;
use crate::errors::AppError;
use crate::models::{FaceMatchCandidate, LocaleContext, PlayerRecord};
use crate::translation::FieldTranslationMerger;
use crate::vision::FaceMatchResolver;

/// States of one image-search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing submitted yet
    Idle,
    /// Image bytes accepted
    ImageSubmitted,
    /// Face provider returned matches
    FacesResolved,
    /// Face provider unavailable, simulated candidates substituted
    Degraded,
    /// Candidates resolved into player records
    PlayersEnriched,
    /// Display fields translated
    Translated,
    /// Final record list ready
    Done,
}

/// Whether an outcome came from the live provider or the degraded branch
///
/// Surfaced as an explicit tag so callers can branch on "is this real"
/// without inspecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// Matches came from the face-recognition provider
    Live,
    /// Provider was unavailable; simulated candidates were substituted
    Simulated,
}

/// Final result of one image-search run
#[derive(Debug, Clone)]
pub struct ImageSearchOutcome {
    /// Live or simulated origin of the candidate set
    pub source: MatchSource,

    /// Number of face candidates the pipeline processed
    pub face_count: usize,

    /// Resolved (and possibly translated) player records; empty is valid
    pub players: Vec<PlayerRecord>,
}

/// Orchestrator sequencing one image-search request
pub struct ImageSearchOrchestrator {
    resolver: FaceMatchResolver,
    enrichment: PlayerEnrichmentService,
    merger: FieldTranslationMerger,
}

impl ImageSearchOrchestrator {
    /// Create an orchestrator over the three pipeline services
    pub fn new(
        resolver: FaceMatchResolver,
        enrichment: PlayerEnrichmentService,
        merger: FieldTranslationMerger,
    ) -> Self {
        Self {
            resolver,
            enrichment,
            merger,
        }
    }

    /// Run the full pipeline for one submitted image
    ///
    /// The only hard error is an empty payload, rejected before any
    /// external call. Provider failures downstream degrade per component:
    /// face-provider failure switches to the simulated candidate set,
    /// translation failure leaves records untranslated. Zero matches is a
    /// valid `Done` with an empty list.
    pub async fn run(
        &self,
        image: &[u8],
        locale: &LocaleContext,
    ) -> Result<ImageSearchOutcome, AppError> {
        let mut state = SearchState::Idle;

        if image.is_empty() {
            return Err(AppError::InvalidInput(
                "Image payload must not be empty".to_string(),
            ));
        }
        state = Self::advance(state, SearchState::ImageSubmitted);

        let search = self.resolver.search(image).await;
        let (source, candidates) = if search.success {
            state = Self::advance(state, SearchState::FacesResolved);
            (MatchSource::Live, search.matches)
        } else {
            warn!(
                "Face provider unavailable ({}), entering degraded branch",
                search.error.as_deref().unwrap_or("unknown error")
            );
            state = Self::advance(state, SearchState::Degraded);
            (MatchSource::Simulated, simulated_candidates())
        };
        let face_count = candidates.len();

        let players = self.enrichment.resolve(&candidates).await;
        state = Self::advance(state, SearchState::PlayersEnriched);

        let players = self.merger.translate_players(&players, locale).await;
        state = Self::advance(state, SearchState::Translated);

        state = Self::advance(state, SearchState::Done);
        debug_assert_eq!(state, SearchState::Done);

        info!(
            "Image search done: {} faces, {} players, source {:?}",
            face_count,
            players.len(),
            source
        );

        Ok(ImageSearchOutcome {
            source,
            face_count,
            players,
        })
    }

    fn advance(from: SearchState, to: SearchState) -> SearchState {
        debug!("Image search transition: {:?} -> {:?}", from, to);
        to
    }
}

/// Fixed candidate set for the degraded branch
///
/// Keeps downstream processing and the UI exercised when the face provider
/// is down. External ids reference well-known seed players; a store without
/// them yields an empty, still-valid result.
pub fn simulated_candidates() -> Vec<FaceMatchCandidate> {
    vec![
        FaceMatchCandidate {
            face_id: "simulated-face-1".to_string(),
            external_id: "1".to_string(),
            similarity: 95.0,
            confidence: 95.0,
        },
        FaceMatchCandidate {
            face_id: "simulated-face-2".to_string(),
            external_id: "2".to_string(),
            similarity: 87.0,
            confidence: 87.0,
        },
        FaceMatchCandidate {
            face_id: "simulated-face-3".to_string(),
            external_id: "3".to_string(),
            similarity: 76.0,
            confidence: 76.0,
        },
    ]
}
