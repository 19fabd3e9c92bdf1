/*!
 * Translation services for player data and UI texts.
 *
 * This module contains the translation side of the pipeline:
 * - `batch`: position-aligned batch translation with per-item failure isolation
 * - `merge`: extraction, deduplication and re-application of translated
 *   player display fields
 * - `tree`: typed text-tree translation for the UI catalogue
 */

pub mod batch;
pub mod merge;
pub mod tree;

pub use batch::{BatchTranslator, TranslationResult};
pub use merge::FieldTranslationMerger;
pub use tree::TextTree;
