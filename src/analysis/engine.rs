use std::collections::BTreeMap;
use std::time::Instant;

use uuid::Uuid;

use crate::models::enums::{EmotionalTone, RiskLevel};
use crate::models::{AnalysisResult, PatientContext};

use super::detection::{classify_risk, classify_tone, emotion_distribution, scan_risk_signals};
use super::lexicon::AnalysisLexicon;
use super::messages::MessageTemplates;
use super::types::{AnalysisError, NoteAnalyzer, RiskSignals};

/// Confidence assigned to the degraded fallback result.
const DEGRADED_CONFIDENCE: f64 = 0.1;

/// Default implementation of the note analyzer.
/// Holds only the immutable lexicon, so one instance can be shared
/// freely across threads.
pub struct DefaultNoteAnalyzer {
    pub(crate) lexicon: AnalysisLexicon,
}

impl DefaultNoteAnalyzer {
    pub fn new(lexicon: AnalysisLexicon) -> Self {
        Self { lexicon }
    }

    /// Identifier of the analysis method + lexicon revision, stamped on
    /// every result for audit and reproducibility.
    pub fn processed_by(&self) -> String {
        format!("keyword-heuristic-es-{}", self.lexicon.version)
    }

    /// Fallible inner path. The public entry points convert any error
    /// into the degraded fallback result.
    fn run_analysis(
        &self,
        session_id: &str,
        notes_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.lexicon.integrity_check()?;

        let signals = scan_risk_signals(notes_text, &self.lexicon);
        let (risk_level, confidence) = classify_risk(&signals);
        let emotional_tone = classify_tone(notes_text, &self.lexicon);

        Ok(AnalysisResult {
            id: Uuid::new_v4(),
            session_id: session_id.to_string(),
            summary: MessageTemplates::summary(&risk_level),
            emotional_tone,
            recommendations: MessageTemplates::recommendations(&risk_level),
            risk_level,
            confidence,
            key_points: Self::build_key_points(&signals),
            generated_at: chrono::Local::now().naive_local(),
            processed_by: self.processed_by(),
        })
    }

    /// One fixed sentence per truthy condition, with a single fallback
    /// sentence when neither table matched.
    fn build_key_points(signals: &RiskSignals) -> Vec<String> {
        let mut points = Vec::new();
        if signals.high_count() > 0 {
            points.push(MessageTemplates::key_point_high());
        }
        if signals.medium_count() > 0 {
            points.push(MessageTemplates::key_point_medium());
        }
        if points.is_empty() {
            points.push(MessageTemplates::key_point_none());
        }
        points
    }

    /// Fixed fallback: low risk, confidence 0.1, placeholder texts.
    /// Callers are never blocked by an analysis failure.
    fn degraded_result(&self, session_id: &str) -> AnalysisResult {
        AnalysisResult {
            id: Uuid::new_v4(),
            session_id: session_id.to_string(),
            summary: MessageTemplates::degraded_summary(),
            emotional_tone: EmotionalTone::Stable,
            risk_level: RiskLevel::Low,
            confidence: DEGRADED_CONFIDENCE,
            key_points: vec![MessageTemplates::degraded_key_point()],
            recommendations: vec![MessageTemplates::degraded_recommendation()],
            generated_at: chrono::Local::now().naive_local(),
            processed_by: self.processed_by(),
        }
    }
}

impl Default for DefaultNoteAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisLexicon::builtin())
    }
}

impl NoteAnalyzer for DefaultNoteAnalyzer {
    fn analyze(&self, session_id: &str, notes_text: &str) -> AnalysisResult {
        let start = Instant::now();

        let result = match self.run_analysis(session_id, notes_text) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Note analysis failed, returning degraded result"
                );
                self.degraded_result(session_id)
            }
        };

        tracing::info!(
            session_id = %session_id,
            risk_level = result.risk_level.as_str(),
            confidence = result.confidence,
            tone = result.emotional_tone.as_str(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Session note analysis complete"
        );

        result
    }

    fn reanalyze(
        &self,
        session_id: &str,
        notes_text: &str,
        context: &PatientContext,
    ) -> AnalysisResult {
        let mut result = self.analyze(session_id, notes_text);
        if !context.is_empty() {
            result.key_points.push(MessageTemplates::context_note(
                context.diagnoses.len(),
                context.medications.len(),
                context.risk_factors.len(),
            ));
        }
        result
    }

    fn emotion_distribution(&self, notes_text: &str) -> BTreeMap<String, usize> {
        emotion_distribution(notes_text, &self.lexicon)
    }
}
