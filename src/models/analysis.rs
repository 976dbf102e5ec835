use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{EmotionalTone, RiskLevel};

/// Structured annotation produced for one block of session notes.
///
/// Immutable once produced: a re-analysis creates a new result with a
/// fresh `id` and `generated_at`, so prior runs survive as history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    /// Opaque reference to the originating session record.
    pub session_id: String,
    /// One-sentence synthesis, templated on the risk level.
    pub summary: String,
    pub emotional_tone: EmotionalTone,
    pub risk_level: RiskLevel,
    /// Heuristic score in [0, 1]; not a calibrated probability.
    pub confidence: f64,
    /// Short bullet observations, in emission order.
    pub key_points: Vec<String>,
    pub recommendations: Vec<String>,
    pub generated_at: NaiveDateTime,
    /// Analysis method + lexicon revision, for audit and reproducibility.
    pub processed_by: String,
}
