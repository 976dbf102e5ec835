//! End-to-end flow of the analysis library, the way the session
//! workflow drives it: validate the notes, analyze, reanalyze with
//! prior context, fetch the emotion distribution, persist as JSON.

use anota::analysis::validation::validate_notes;
use anota::models::enums::RiskLevel;
use anota::{AnalysisInput, AnalysisResult, DefaultNoteAnalyzer, NoteAnalyzer, PatientContext};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(anota::config::default_log_filter())),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn full_session_flow() {
    init_tracing();

    let input = AnalysisInput {
        session_id: "ses-2025-0142".into(),
        notes_text: "El paciente se mostró ansioso durante toda la sesión y reportó \
                     insomnio desde hace dos semanas, con preocupación constante por \
                     su situación laboral."
            .into(),
    };

    let validation = validate_notes(&input.notes_text);
    assert!(validation.is_valid, "realistic notes should pass the gate");

    let engine = DefaultNoteAnalyzer::default();
    let result = engine.analyze(&input.session_id, &input.notes_text);

    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.session_id, "ses-2025-0142");
    assert!(result.confidence > 0.5 && result.confidence <= 0.8);

    // Reanalysis with prior context decorates but does not rescore.
    let context = PatientContext {
        diagnoses: vec!["trastorno de ansiedad generalizada".into()],
        medications: vec!["sertralina 50mg".into()],
        risk_factors: vec!["antecedente de crisis".into()],
    };
    let enriched = engine.reanalyze(&input.session_id, &input.notes_text, &context);
    assert_eq!(enriched.risk_level, result.risk_level);
    assert_eq!(enriched.confidence, result.confidence);
    assert_eq!(enriched.key_points.len(), result.key_points.len() + 1);

    // Supplementary distribution is available independently.
    let distribution = engine.emotion_distribution(&input.notes_text);
    assert!(distribution["ansiedad"] >= 1);

    // The annotation round-trips through JSON for the persistence layer.
    let json = serde_json::to_string(&enriched).unwrap();
    let stored: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(stored.risk_level, enriched.risk_level);
    assert_eq!(stored.key_points, enriched.key_points);
    assert_eq!(stored.processed_by, enriched.processed_by);
}

#[test]
fn invalid_notes_are_gated_but_still_analyzable() {
    init_tracing();

    let notes = "ok";
    let validation = validate_notes(notes);
    assert!(!validation.is_valid);
    assert!(validation.reason.is_some());

    // Calling the analyzer anyway must still produce a usable result.
    let engine = DefaultNoteAnalyzer::default();
    let result = engine.analyze("ses-2025-0143", notes);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(!result.summary.is_empty());
}
