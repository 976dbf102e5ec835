use serde::{Deserialize, Serialize};

use crate::analysis::types::AnalysisError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = AnalysisError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(AnalysisError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(RiskLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Dominant affect described in the notes. Display strings are the
/// clinician-facing Spanish labels stored alongside the annotation.
str_enum!(EmotionalTone {
    Stable => "Estable",
    Anxious => "Ansioso",
    Depressed => "Deprimido",
    Irritable => "Irritable",
    Confused => "Confundido",
});

/// Status flag the session workflow persists around an analysis run.
/// The transitions themselves are the caller's responsibility.
str_enum!(ProcessingStatus {
    Pending => "pending",
    Processing => "processing",
    Completed => "completed",
    Failed => "failed",
});
