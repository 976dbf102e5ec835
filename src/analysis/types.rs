use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{AnalysisResult, PatientContext};

// ---------------------------------------------------------------------------
// AnalysisError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Lexicon load failed ({0}): {1}")]
    LexiconLoad(String, String),

    #[error("Lexicon parse failed ({0}): {1}")]
    LexiconParse(String, String),

    #[error("Lexicon table is empty: {0}")]
    EmptyLexicon(String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

// ---------------------------------------------------------------------------
// RiskSignals
// ---------------------------------------------------------------------------

/// Distinct keyword hits found by the risk scan.
/// Each table entry is counted at most once regardless of repetitions.
#[derive(Debug, Clone, Default)]
pub struct RiskSignals {
    pub high_hits: Vec<String>,
    pub medium_hits: Vec<String>,
}

impl RiskSignals {
    pub fn high_count(&self) -> usize {
        self.high_hits.len()
    }

    pub fn medium_count(&self) -> usize {
        self.medium_hits.len()
    }
}

// ---------------------------------------------------------------------------
// NoteAnalyzer trait
// ---------------------------------------------------------------------------

/// The note analysis boundary consumed by the session workflow.
///
/// Implementations must never fail the caller: every input, including
/// empty or malformed text, yields a well-formed `AnalysisResult`.
/// Internal failures degrade to a fixed low-confidence fallback.
pub trait NoteAnalyzer {
    /// Analyze one block of session notes.
    fn analyze(&self, session_id: &str, notes_text: &str) -> AnalysisResult;

    /// Re-run analysis with prior-session context. Scoring is identical
    /// to `analyze`; when the context is non-empty a single context note
    /// is appended to `key_points`.
    fn reanalyze(
        &self,
        session_id: &str,
        notes_text: &str,
        context: &PatientContext,
    ) -> AnalysisResult;

    /// Keyword occurrence counts per emotion category, for supplementary
    /// display. Independent of the risk and tone computation.
    fn emotion_distribution(&self, notes_text: &str) -> BTreeMap<String, usize>;
}
