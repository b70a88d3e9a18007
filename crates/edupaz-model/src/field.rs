//! Field selectors for the form's editable text fields.
//!
//! Names accept the camelCase spelling used in the form file as well as
//! kebab-case and snake_case, case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A field of the general-information record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneralField {
    Name,
    Municipality,
}

impl GeneralField {
    pub const ALL: [GeneralField; 2] = [GeneralField::Name, GeneralField::Municipality];

    /// Returns the canonical name as it appears in the form file.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneralField::Name => "name",
            GeneralField::Municipality => "municipality",
        }
    }
}

impl fmt::Display for GeneralField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GeneralField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "name" | "nombre" => Ok(GeneralField::Name),
            "municipality" | "municipio" => Ok(GeneralField::Municipality),
            _ => Err(FormError::UnknownField {
                kind: "general",
                name: s.to_string(),
            }),
        }
    }
}

/// A field of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventField {
    /// Time span or era the event belongs to.
    Period,
    /// Local context: problems the community confronted.
    Context,
    /// Positive transformations achieved.
    PositiveChanges,
    /// People or organizations noted for their solidarity.
    SolidarityActors,
}

impl EventField {
    /// Fields in column order of the exported table.
    pub const ALL: [EventField; 4] = [
        EventField::Period,
        EventField::Context,
        EventField::PositiveChanges,
        EventField::SolidarityActors,
    ];

    /// Returns the canonical name as it appears in the form file.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventField::Period => "period",
            EventField::Context => "context",
            EventField::PositiveChanges => "positiveChanges",
            EventField::SolidarityActors => "solidarityActors",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "period" | "tiempo" => Ok(EventField::Period),
            "context" | "contexto" => Ok(EventField::Context),
            "positivechanges" | "transformaciones" => Ok(EventField::PositiveChanges),
            "solidarityactors" | "solidaridad" => Ok(EventField::SolidarityActors),
            _ => Err(FormError::UnknownField {
                kind: "event",
                name: s.to_string(),
            }),
        }
    }
}

/// Lowercase and drop `-`/`_` separators so `positive-changes`,
/// `positive_changes` and `positiveChanges` compare equal.
fn normalize_name(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_field_spellings() {
        for raw in ["positiveChanges", "positive-changes", "positive_changes", "POSITIVECHANGES"] {
            assert_eq!(raw.parse::<EventField>().unwrap(), EventField::PositiveChanges);
        }
        assert_eq!("solidaridad".parse::<EventField>().unwrap(), EventField::SolidarityActors);
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for field in EventField::ALL {
            assert_eq!(field.as_str().parse::<EventField>().unwrap(), field);
        }
        for field in GeneralField::ALL {
            assert_eq!(field.as_str().parse::<GeneralField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "address".parse::<GeneralField>().unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                kind: "general",
                name: "address".to_string()
            }
        );
        assert!("".parse::<EventField>().is_err());
    }
}
