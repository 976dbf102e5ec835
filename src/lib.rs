pub mod analysis; // Session-note analysis engine: risk triage, tone, emotion distribution
pub mod config;
pub mod models;

pub use analysis::{AnalysisLexicon, DefaultNoteAnalyzer, NoteAnalyzer};
pub use models::{AnalysisInput, AnalysisResult, PatientContext};
