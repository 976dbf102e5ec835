//! Session-note analysis: keyword-scoring risk triage, emotional tone
//! and emotion distribution over free-text clinical notes.
//!
//! The engine is stateless and synchronous: one immutable lexicon in,
//! one `AnalysisResult` out. Analysis never fails the caller; internal
//! errors degrade to a fixed low-confidence fallback result.

pub mod detection;
pub mod engine;
pub mod lexicon;
pub mod messages;
pub mod types;
pub mod validation;

pub use engine::DefaultNoteAnalyzer;
pub use lexicon::AnalysisLexicon;
pub use types::{AnalysisError, NoteAnalyzer};
pub use validation::{validate_notes, NotesValidation};
