//! Form state store: general information plus the ordered timeline.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::field::{EventField, GeneralField};

/// General information about the institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInfo {
    pub name: String,
    pub municipality: String,
}

impl GeneralInfo {
    pub fn get(&self, field: GeneralField) -> &str {
        match field {
            GeneralField::Name => &self.name,
            GeneralField::Municipality => &self.municipality,
        }
    }

    fn slot(&mut self, field: GeneralField) -> &mut String {
        match field {
            GeneralField::Name => &mut self.name,
            GeneralField::Municipality => &mut self.municipality,
        }
    }
}

/// One entry of the school/territory timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEvent {
    pub period: String,
    pub context: String,
    pub positive_changes: String,
    pub solidarity_actors: String,
}

impl TimelineEvent {
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Period => &self.period,
            EventField::Context => &self.context,
            EventField::PositiveChanges => &self.positive_changes,
            EventField::SolidarityActors => &self.solidarity_actors,
        }
    }

    /// Field values in export column order.
    pub fn values(&self) -> [&str; 4] {
        EventField::ALL.map(|field| self.get(field))
    }

    fn slot(&mut self, field: EventField) -> &mut String {
        match field {
            EventField::Period => &mut self.period,
            EventField::Context => &mut self.context,
            EventField::PositiveChanges => &mut self.positive_changes,
            EventField::SolidarityActors => &mut self.solidarity_actors,
        }
    }
}

/// Complete form state for one session.
///
/// A fresh form holds empty general information and exactly one empty
/// timeline event. The timeline may be emptied through [`FormState::remove_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    general: GeneralInfo,
    events: Vec<TimelineEvent>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            general: GeneralInfo::default(),
            events: vec![TimelineEvent::default()],
        }
    }

    pub fn general(&self) -> &GeneralInfo {
        &self.general
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn event(&self, index: usize) -> Result<&TimelineEvent> {
        let len = self.events.len();
        self.events
            .get(index)
            .ok_or(FormError::IndexOutOfRange { index, len })
    }

    /// Replace a general-information field. Never fails.
    pub fn set_general(&mut self, field: GeneralField, value: impl Into<String>) {
        *self.general.slot(field) = value.into();
    }

    /// Append an empty event and return the new timeline length.
    pub fn add_event(&mut self) -> usize {
        self.events.push(TimelineEvent::default());
        self.events.len()
    }

    /// Remove the event at `index`, shifting later events down.
    pub fn remove_event(&mut self, index: usize) -> Result<TimelineEvent> {
        self.check_index(index)?;
        Ok(self.events.remove(index))
    }

    /// Replace one field of the event at `index`.
    pub fn update_event(
        &mut self,
        index: usize,
        field: EventField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.check_index(index)?;
        *self.events[index].slot(field) = value.into();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.events.len();
        if index < len {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange { index, len })
        }
    }
}
