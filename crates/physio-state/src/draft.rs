//! Local working copies for the exercise and modality selectors.
//!
//! A selector opens with a copy of the progress note's current list, lets
//! the user toggle catalog items and edit their parameters, and on confirm
//! replaces the list wholesale via [`Action::SetProgressObjectiveList`].

use physio_core::models::catalog::{Exercise, Modality};
use physio_core::models::selection::{SelectedExercise, SelectedModality};

use crate::action::{Action, ObjectiveList};
use crate::protocol::{DEFAULT_REPS, DEFAULT_SETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseParam {
    Sets,
    Reps,
    Hold,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalityParam {
    Duration,
    Intensity,
    Site,
    Notes,
}

/// Exercise selection keyed by exercise id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseDraft {
    selected: Vec<SelectedExercise>,
}

impl ExerciseDraft {
    pub fn from_selection(selection: &[SelectedExercise]) -> Self {
        Self {
            selected: selection.to_vec(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s.id == id)
    }

    /// Add the exercise with the standard prescription, or remove it if it
    /// is already selected. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, exercise: &Exercise) -> bool {
        if self.is_selected(&exercise.id) {
            self.selected.retain(|s| s.id != exercise.id);
            false
        } else {
            self.selected.push(SelectedExercise {
                id: exercise.id.clone(),
                name: exercise.name.clone(),
                sets: DEFAULT_SETS.to_string(),
                reps: DEFAULT_REPS.to_string(),
                hold: String::new(),
                notes: None,
            });
            true
        }
    }

    /// Returns `false` when no selected exercise has this id.
    pub fn set_param(&mut self, id: &str, param: ExerciseParam, value: impl Into<String>) -> bool {
        let Some(entry) = self.selected.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        let value = value.into();
        match param {
            ExerciseParam::Sets => entry.sets = value,
            ExerciseParam::Reps => entry.reps = value,
            ExerciseParam::Hold => entry.hold = value,
            ExerciseParam::Notes => entry.notes = Some(value),
        }
        true
    }

    pub fn selected(&self) -> &[SelectedExercise] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn into_action(self) -> Action {
        Action::SetProgressObjectiveList {
            list: ObjectiveList::Exercises(self.selected),
        }
    }
}

/// Modality selection keyed by device name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalityDraft {
    selected: Vec<SelectedModality>,
}

impl ModalityDraft {
    pub fn from_selection(selection: &[SelectedModality]) -> Self {
        Self {
            selected: selection.to_vec(),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s.name == name)
    }

    /// Add the modality with its preset parameters, or remove it if it is
    /// already selected. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, modality: &Modality) -> bool {
        if self.is_selected(&modality.device) {
            self.selected.retain(|s| s.name != modality.device);
            false
        } else {
            self.selected.push(SelectedModality {
                name: modality.device.clone(),
                duration: modality.time.to_string(),
                intensity: modality.intensity.clone(),
                site: modality.site.clone(),
                notes: None,
            });
            true
        }
    }

    /// Returns `false` when no selected modality has this name.
    pub fn set_param(&mut self, name: &str, param: ModalityParam, value: impl Into<String>) -> bool {
        let Some(entry) = self.selected.iter_mut().find(|s| s.name == name) else {
            return false;
        };
        let value = value.into();
        match param {
            ModalityParam::Duration => entry.duration = value,
            ModalityParam::Intensity => entry.intensity = value,
            ModalityParam::Site => entry.site = value,
            ModalityParam::Notes => entry.notes = Some(value),
        }
        true
    }

    pub fn selected(&self) -> &[SelectedModality] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn into_action(self) -> Action {
        Action::SetProgressObjectiveList {
            list: ObjectiveList::Modalities(self.selected),
        }
    }
}
