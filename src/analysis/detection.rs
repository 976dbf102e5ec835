use std::collections::BTreeMap;

use crate::models::enums::{EmotionalTone, RiskLevel};

use super::lexicon::AnalysisLexicon;
use super::types::RiskSignals;

/// Baseline confidence for the low branch. The same value is returned
/// whether zero or one medium-risk keyword matched; stored annotations
/// depend on this exact threshold.
pub const BASELINE_CONFIDENCE: f64 = 0.5;

const HIGH_BASE: f64 = 0.6;
const HIGH_STEP: f64 = 0.1;
const HIGH_CAP: f64 = 0.9;

const MEDIUM_BASE: f64 = 0.5;
const MEDIUM_STEP: f64 = 0.05;
const MEDIUM_CAP: f64 = 0.8;

// ---------------------------------------------------------------------------
// Risk scan
// ---------------------------------------------------------------------------

/// Scan the lowercased text for distinct keyword hits in both risk tables.
/// Matching is substring containment, not tokenized or stemmed.
pub fn scan_risk_signals(notes_text: &str, lexicon: &AnalysisLexicon) -> RiskSignals {
    let lower = notes_text.to_lowercase();
    RiskSignals {
        high_hits: distinct_hits(&lower, &lexicon.high_risk),
        medium_hits: distinct_hits(&lower, &lexicon.medium_risk),
    }
}

fn distinct_hits(lower_text: &str, table: &[String]) -> Vec<String> {
    table
        .iter()
        .filter(|kw| lower_text.contains(kw.as_str()))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Risk classification rules
// ---------------------------------------------------------------------------

/// One escalation rule: the first rule whose predicate holds decides the
/// risk level and confidence.
struct RiskRule {
    applies: fn(&RiskSignals) -> bool,
    outcome: fn(&RiskSignals) -> (RiskLevel, f64),
}

fn high_applies(signals: &RiskSignals) -> bool {
    signals.high_count() > 0
}

fn high_outcome(signals: &RiskSignals) -> (RiskLevel, f64) {
    let confidence = (HIGH_BASE + HIGH_STEP * signals.high_count() as f64).min(HIGH_CAP);
    (RiskLevel::High, confidence)
}

fn medium_applies(signals: &RiskSignals) -> bool {
    // Strictly more than one distinct medium-risk hit.
    signals.medium_count() > 1
}

fn medium_outcome(signals: &RiskSignals) -> (RiskLevel, f64) {
    let confidence = (MEDIUM_BASE + MEDIUM_STEP * signals.medium_count() as f64).min(MEDIUM_CAP);
    (RiskLevel::Medium, confidence)
}

fn low_applies(_signals: &RiskSignals) -> bool {
    true
}

fn low_outcome(_signals: &RiskSignals) -> (RiskLevel, f64) {
    (RiskLevel::Low, BASELINE_CONFIDENCE)
}

/// Escalation policy in evaluation order; the final rule always applies.
const RISK_RULES: &[RiskRule] = &[
    RiskRule { applies: high_applies, outcome: high_outcome },
    RiskRule { applies: medium_applies, outcome: medium_outcome },
    RiskRule { applies: low_applies, outcome: low_outcome },
];

/// Classify risk from the scanned signals via the ordered rule list.
pub fn classify_risk(signals: &RiskSignals) -> (RiskLevel, f64) {
    for rule in RISK_RULES {
        if (rule.applies)(signals) {
            return (rule.outcome)(signals);
        }
    }
    low_outcome(signals)
}

// ---------------------------------------------------------------------------
// Tone classification
// ---------------------------------------------------------------------------

/// Ordered first-match-wins scan over the lexicon's tone rules.
/// Independent of the risk computation: high-risk text with no tone
/// keyword stays Stable.
pub fn classify_tone(notes_text: &str, lexicon: &AnalysisLexicon) -> EmotionalTone {
    let lower = notes_text.to_lowercase();
    for rule in &lexicon.tone_rules {
        if rule.keywords.iter().any(|kw| lower.contains(kw.as_str())) {
            return rule.tone.clone();
        }
    }
    EmotionalTone::Stable
}

// ---------------------------------------------------------------------------
// Emotion distribution
// ---------------------------------------------------------------------------

/// Occurrence counts per emotion category. Counts every occurrence of
/// every keyword, not distinct hits, and does not normalize.
pub fn emotion_distribution(
    notes_text: &str,
    lexicon: &AnalysisLexicon,
) -> BTreeMap<String, usize> {
    let lower = notes_text.to_lowercase();
    lexicon
        .emotion_map
        .iter()
        .map(|entry| {
            let count = entry
                .keywords
                .iter()
                .map(|kw| lower.matches(kw.as_str()).count())
                .sum();
            (entry.emotion.clone(), count)
        })
        .collect()
}
