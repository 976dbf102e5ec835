use serde::{Deserialize, Serialize};

/// Input handed to the analyzer by the session workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub session_id: String,
    /// Free-text clinical notes, arbitrary length, UTF-8.
    pub notes_text: String,
}

/// Prior-session context supplied for a re-analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    pub diagnoses: Vec<String>,
    pub medications: Vec<String>,
    pub risk_factors: Vec<String>,
}

impl PatientContext {
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty() && self.medications.is_empty() && self.risk_factors.is_empty()
    }
}
