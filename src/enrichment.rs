/*!
 * Player enrichment from identity candidates.
 *
 * Resolves face-match candidates into full player records via concurrent
 * store lookups. Individual failures are dropped, never fatal: one bad
 * identity must not block returning the rest. Reassembly preserves the
 * original candidate order.
 */

use futures::stream::{self, StreamExt};
use log::{debug, warn};

use crate::models::{FaceMatchCandidate, PlayerRecord};
use crate::store::PlayerRepository;

/// Maximum lookups in flight at once
const MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Best-effort resolution of candidates into player records
pub struct PlayerEnrichmentService {
    /// Player store
    repository: PlayerRepository,
}

impl PlayerEnrichmentService {
    /// Create a new enrichment service over the given repository
    pub fn new(repository: PlayerRepository) -> Self {
        Self { repository }
    }

    /// Resolve candidates into player records
    ///
    /// Lookups run concurrently with no ordering dependency; results are
    /// reassembled in candidate order. Candidates whose external id does
    /// not parse, is unknown to the store, or whose lookup errors are
    /// dropped, so the output may be shorter than the input.
    pub async fn resolve(&self, candidates: &[FaceMatchCandidate]) -> Vec<PlayerRecord> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let results = stream::iter(candidates.iter().cloned().enumerate())
            .map(|(idx, candidate)| {
                let repository = self.repository.clone();

                async move {
                    let record = Self::lookup_candidate(&repository, &candidate).await;
                    (idx, record)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_LOOKUPS)
            .collect::<Vec<_>>()
            .await;

        // Reassemble in candidate order before dropping the failures
        let mut sorted_results = results;
        sorted_results.sort_by_key(|(idx, _)| *idx);

        let records: Vec<PlayerRecord> = sorted_results
            .into_iter()
            .filter_map(|(_, record)| record)
            .collect();

        debug!(
            "Enriched {} of {} candidates into player records",
            records.len(),
            candidates.len()
        );

        records
    }

    /// Resolve one candidate, converting every failure mode into `None`
    async fn lookup_candidate(
        repository: &PlayerRepository,
        candidate: &FaceMatchCandidate,
    ) -> Option<PlayerRecord> {
        let player_id: i64 = match candidate.external_id.parse() {
            Ok(id) => id,
            Err(_) => {
                warn!(
                    "Skipping candidate with non-numeric external id: {}",
                    candidate.external_id
                );
                return None;
            }
        };

        match repository.get_player(player_id).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                warn!("No player record for external id {}", candidate.external_id);
                None
            }
            Err(e) => {
                warn!(
                    "Lookup failed for external id {}: {}",
                    candidate.external_id, e
                );
                None
            }
        }
    }
}
