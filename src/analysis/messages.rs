use crate::models::enums::RiskLevel;

/// Fixed Spanish templates for the clinician-facing annotation text.
/// Wording stays descriptive and preparatory; severity lives in the
/// structured fields, not in the phrasing.
pub struct MessageTemplates;

impl MessageTemplates {
    /// One-sentence summary, keyed on risk level only.
    pub fn summary(risk: &RiskLevel) -> String {
        match risk {
            RiskLevel::High => {
                "Las notas contienen indicadores de riesgo alto; se recomienda una evaluación \
                 prioritaria del paciente."
                    .to_string()
            }
            RiskLevel::Medium => {
                "Las notas muestran señales moderadas de malestar emocional que conviene \
                 monitorear."
                    .to_string()
            }
            RiskLevel::Low => "Sesión sin indicadores de riesgo relevantes.".to_string(),
        }
    }

    /// Key point emitted when any high-risk keyword matched.
    pub fn key_point_high() -> String {
        "Se identificaron términos asociados a riesgo alto en las notas.".to_string()
    }

    /// Key point emitted when any medium-risk keyword matched.
    pub fn key_point_medium() -> String {
        "Se identificaron términos asociados a malestar moderado.".to_string()
    }

    /// Fallback key point when neither table matched.
    pub fn key_point_none() -> String {
        "No se detectaron indicadores de riesgo en las notas.".to_string()
    }

    /// Fixed recommendations per risk level, no blending.
    pub fn recommendations(risk: &RiskLevel) -> Vec<String> {
        match risk {
            RiskLevel::High => vec![
                "Contactar al paciente a la brevedad para evaluar su seguridad.".to_string(),
                "Considerar derivación a atención de urgencia o interconsulta psiquiátrica."
                    .to_string(),
            ],
            RiskLevel::Medium => vec![
                "Programar un seguimiento cercano en la próxima sesión.".to_string(),
                "Explorar estrategias de manejo del malestar identificado.".to_string(),
            ],
            RiskLevel::Low => {
                vec!["Continuar con el plan terapéutico actual.".to_string()]
            }
        }
    }

    /// Summary placeholder for the degraded fallback result.
    pub fn degraded_summary() -> String {
        "No fue posible completar el análisis de la sesión.".to_string()
    }

    /// Key point placeholder for the degraded fallback result.
    pub fn degraded_key_point() -> String {
        "Análisis no disponible".to_string()
    }

    /// Recommendation placeholder for the degraded fallback result.
    pub fn degraded_recommendation() -> String {
        "Revisar las notas manualmente y reintentar el análisis.".to_string()
    }

    /// Context note appended by reanalysis when prior-session context
    /// was supplied.
    pub fn context_note(diagnoses: usize, medications: usize, risk_factors: usize) -> String {
        format!(
            "Contexto clínico considerado: {} diagnósticos previos, {} medicamentos, \
             {} factores de riesgo.",
            diagnoses, medications, risk_factors,
        )
    }
}
