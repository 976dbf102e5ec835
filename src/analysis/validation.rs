use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Minimum accepted note length, in characters.
pub const MIN_NOTES_CHARS: usize = 50;

/// Minimum number of distinct non-whitespace characters.
pub const MIN_DISTINCT_CHARS: usize = 10;

/// Outcome of the pre-analysis input gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesValidation {
    pub is_valid: bool,
    /// Spanish guidance message when invalid, for direct display.
    pub reason: Option<String>,
}

/// Gate invoked before analysis. Callers should prompt for more detailed
/// notes instead of analyzing text that fails this check; calling the
/// analyzer anyway still returns a well-formed result.
pub fn validate_notes(notes_text: &str) -> NotesValidation {
    let char_count = notes_text.chars().count();
    if char_count < MIN_NOTES_CHARS {
        return NotesValidation {
            is_valid: false,
            reason: Some(format!(
                "Las notas deben tener al menos {} caracteres (actual: {}).",
                MIN_NOTES_CHARS, char_count,
            )),
        };
    }

    let distinct: HashSet<char> = notes_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if distinct.len() < MIN_DISTINCT_CHARS {
        return NotesValidation {
            is_valid: false,
            reason: Some(
                "Las notas necesitan más variedad de contenido para poder analizarse."
                    .to_string(),
            ),
        };
    }

    NotesValidation {
        is_valid: true,
        reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_fails_with_length_reason() {
        let validation = validate_notes("");
        assert!(!validation.is_valid);
        assert!(validation.reason.unwrap().contains("50 caracteres"));
    }

    #[test]
    fn length_boundary_is_exactly_fifty() {
        let forty_nine: String = "abcdefghij".chars().cycle().take(49).collect();
        assert!(!validate_notes(&forty_nine).is_valid);

        let fifty: String = "abcdefghij".chars().cycle().take(50).collect();
        assert!(validate_notes(&fifty).is_valid);
    }

    #[test]
    fn repetitive_text_fails_diversity_check() {
        let padded = "aaaa aaaa ".repeat(10);
        let validation = validate_notes(&padded);
        assert!(!validation.is_valid);
        assert!(validation.reason.is_some());
    }

    #[test]
    fn whitespace_does_not_count_toward_diversity() {
        // 9 distinct letters plus varied whitespace stays invalid.
        let text = "abcdefghi \t abcdefghi \n abcdefghi abcdefghi abcdefghi abcdefghi";
        assert!(!validate_notes(text).is_valid);
    }

    #[test]
    fn realistic_note_passes() {
        let text = "El paciente asistió puntualmente y describió su semana con detalle.";
        assert!(validate_notes(text).is_valid);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 50 multibyte characters are enough even though each is > 1 byte.
        let text: String = "áéíóúñàèìòù".chars().cycle().take(50).collect();
        assert!(validate_notes(&text).is_valid);
    }
}
