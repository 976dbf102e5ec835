use serde::{Deserialize, Serialize};

use crate::models::enums::EmotionalTone;

use super::types::AnalysisError;

/// Embedded lexicon revision. Bumped whenever the tables change so the
/// `processed_by` field on stored annotations stays meaningful.
pub const BUILTIN_LEXICON_VERSION: &str = "2025.2";

/// One tone rule. Rules are evaluated in order; the first rule with a
/// matching keyword decides the tone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneRule {
    pub tone: EmotionalTone,
    pub keywords: Vec<String>,
}

/// Keyword list for one emotion category (distribution helper).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionKeywords {
    pub emotion: String,
    pub keywords: Vec<String>,
}

/// Versioned keyword reference data for note analysis.
///
/// All keywords are lowercase; matching is substring containment against
/// the lowercased note text. Entries are stems where that catches the
/// inflected forms ("ansios" covers ansioso/ansiosa).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisLexicon {
    pub version: String,
    pub high_risk: Vec<String>,
    pub medium_risk: Vec<String>,
    pub tone_rules: Vec<ToneRule>,
    pub emotion_map: Vec<EmotionKeywords>,
}

impl AnalysisLexicon {
    /// Load a practice-customized lexicon from `lexicon_es.json`.
    pub fn load(resources_dir: &std::path::Path) -> Result<Self, AnalysisError> {
        let path = resources_dir.join("lexicon_es.json");
        let json = std::fs::read_to_string(&path).map_err(|e| {
            AnalysisError::LexiconLoad(path.display().to_string(), e.to_string())
        })?;
        let lexicon: AnalysisLexicon = serde_json::from_str(&json).map_err(|e| {
            AnalysisError::LexiconParse("lexicon_es.json".into(), e.to_string())
        })?;
        lexicon.integrity_check()?;
        Ok(lexicon)
    }

    /// Embedded Spanish lexicon used by the default analyzer.
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_LEXICON_VERSION.into(),
            high_risk: vec![
                "suicid".into(),
                "autoles".into(),
                "hacerse daño".into(),
                "quitarse la vida".into(),
                "crisis".into(),
                "pánico".into(),
                "violencia".into(),
                "agresi".into(),
                "psicosis".into(),
                "alucinac".into(),
                "delirio".into(),
                "sobredosis".into(),
            ],
            medium_risk: vec![
                "ansiedad".into(),
                "ansios".into(),
                "deprim".into(),
                "depres".into(),
                "tristeza".into(),
                "estrés".into(),
                "estres".into(),
                "insomnio".into(),
                "irritab".into(),
                "angustia".into(),
                "llanto".into(),
                "preocupa".into(),
                "agotamiento".into(),
                "aislamiento".into(),
            ],
            tone_rules: vec![
                ToneRule {
                    tone: EmotionalTone::Anxious,
                    keywords: vec![
                        "ansios".into(),
                        "ansiedad".into(),
                        "nervios".into(),
                        "angustia".into(),
                    ],
                },
                ToneRule {
                    tone: EmotionalTone::Depressed,
                    keywords: vec![
                        "deprim".into(),
                        "depres".into(),
                        "tristeza".into(),
                        "desánimo".into(),
                        "llanto".into(),
                    ],
                },
                ToneRule {
                    tone: EmotionalTone::Irritable,
                    keywords: vec![
                        "irritab".into(),
                        "enojo".into(),
                        "enfado".into(),
                        "hostil".into(),
                        "molest".into(),
                    ],
                },
                ToneRule {
                    tone: EmotionalTone::Confused,
                    keywords: vec!["confus".into(), "desorient".into()],
                },
            ],
            emotion_map: vec![
                EmotionKeywords {
                    emotion: "ansiedad".into(),
                    keywords: vec![
                        "ansios".into(),
                        "ansiedad".into(),
                        "nervios".into(),
                        "angustia".into(),
                    ],
                },
                EmotionKeywords {
                    emotion: "tristeza".into(),
                    keywords: vec![
                        "trist".into(),
                        "llanto".into(),
                        "deprim".into(),
                        "desánimo".into(),
                    ],
                },
                EmotionKeywords {
                    emotion: "enojo".into(),
                    keywords: vec![
                        "enojo".into(),
                        "enfado".into(),
                        "irritab".into(),
                        "hostil".into(),
                    ],
                },
                EmotionKeywords {
                    emotion: "miedo".into(),
                    keywords: vec![
                        "miedo".into(),
                        "temor".into(),
                        "pánico".into(),
                        "asustad".into(),
                    ],
                },
                EmotionKeywords {
                    emotion: "alegría".into(),
                    keywords: vec![
                        "alegr".into(),
                        "content".into(),
                        "entusiasm".into(),
                        "optimis".into(),
                    ],
                },
                EmotionKeywords {
                    emotion: "calma".into(),
                    keywords: vec![
                        "calma".into(),
                        "tranquil".into(),
                        "relajad".into(),
                    ],
                },
            ],
        }
    }

    /// Reject lexicons that cannot support the risk policy.
    pub fn integrity_check(&self) -> Result<(), AnalysisError> {
        if self.high_risk.is_empty() {
            return Err(AnalysisError::EmptyLexicon("high_risk".into()));
        }
        if self.medium_risk.is_empty() {
            return Err(AnalysisError::EmptyLexicon("medium_risk".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_integrity_check() {
        assert!(AnalysisLexicon::builtin().integrity_check().is_ok());
    }

    #[test]
    fn builtin_is_versioned() {
        assert_eq!(AnalysisLexicon::builtin().version, BUILTIN_LEXICON_VERSION);
    }

    #[test]
    fn builtin_keywords_are_lowercase() {
        let lexicon = AnalysisLexicon::builtin();
        for kw in lexicon.high_risk.iter().chain(&lexicon.medium_risk) {
            assert_eq!(kw, &kw.to_lowercase(), "keyword not lowercase: {kw}");
        }
    }

    #[test]
    fn builtin_has_six_emotion_categories() {
        assert_eq!(AnalysisLexicon::builtin().emotion_map.len(), 6);
    }

    #[test]
    fn builtin_tone_scan_order_starts_with_anxious() {
        let lexicon = AnalysisLexicon::builtin();
        assert_eq!(lexicon.tone_rules[0].tone, EmotionalTone::Anxious);
        assert_eq!(lexicon.tone_rules.len(), 4);
    }

    #[test]
    fn load_from_bundled_resources() {
        let lexicon = AnalysisLexicon::load(&crate::config::resources_dir()).unwrap();
        assert!(lexicon.integrity_check().is_ok());
        assert!(!lexicon.tone_rules.is_empty());
    }

    #[test]
    fn load_missing_directory_fails() {
        let err = AnalysisLexicon::load(std::path::Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, AnalysisError::LexiconLoad(..)));
    }

    #[test]
    fn load_malformed_json_fails_with_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lexicon_es.json"), "{ not json").unwrap();
        let err = AnalysisLexicon::load(dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::LexiconParse(..)));
    }

    #[test]
    fn load_rejects_empty_risk_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut lexicon = AnalysisLexicon::builtin();
        lexicon.high_risk.clear();
        let json = serde_json::to_string(&lexicon).unwrap();
        std::fs::write(dir.path().join("lexicon_es.json"), json).unwrap();
        let err = AnalysisLexicon::load(dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyLexicon(_)));
    }
}
