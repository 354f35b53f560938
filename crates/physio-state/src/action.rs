use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use physio_core::models::catalog::Protocol;
use physio_core::models::document::DocumentKind;
use physio_core::models::rows::DynamicRow;
use physio_core::models::selection::{SelectedExercise, SelectedModality};

use crate::error::StateError;

/// How the UI control that produced a `SetField` stores its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// Toggles one member of a multi-select.
    Checkbox,
    /// Text inputs, selects, radios, number and date pickers: the value
    /// replaces the field as-is.
    #[default]
    #[serde(other)]
    Scalar,
}

/// A dynamic table, named by its serialized field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableRef {
    /// `assessment.objective.romRows`
    RomRows,
    /// `assessment.objective.mmtRows`
    MmtRows,
    /// `assessment.objective.specialRows`
    SpecialRows,
    /// `progressNote.objective.measurements`
    Measurements,
}

impl TableRef {
    pub fn document(&self) -> DocumentKind {
        match self {
            TableRef::RomRows | TableRef::MmtRows | TableRef::SpecialRows => DocumentKind::Assessment,
            TableRef::Measurements => DocumentKind::ProgressNote,
        }
    }
}

/// A full replacement for one of the progress note's selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "data", rename_all = "camelCase")]
pub enum ObjectiveList {
    Exercises(Vec<SelectedExercise>),
    Modalities(Vec<SelectedModality>),
}

/// Every way the documents can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Write a scalar field, or toggle a value in a multi-select.
    SetField {
        document: DocumentKind,
        /// `section.field`, using serialized field names.
        path: String,
        value: String,
        #[serde(default)]
        kind: InputKind,
        /// For checkboxes: add when true, remove when false.
        #[serde(default)]
        checked: bool,
    },
    UpdateRow {
        table: TableRef,
        index: usize,
        key: String,
        value: String,
    },
    AddRow {
        table: TableRef,
        #[serde(default)]
        row: DynamicRow,
    },
    RemoveRow {
        table: TableRef,
        index: usize,
    },
    SetProgressObjectiveList {
        list: ObjectiveList,
    },
    ApplyProtocol {
        protocol: Protocol,
    },
    Reset,
}

impl Action {
    pub fn set_text(document: DocumentKind, path: impl Into<String>, value: impl Into<String>) -> Self {
        Action::SetField {
            document,
            path: path.into(),
            value: value.into(),
            kind: InputKind::Scalar,
            checked: false,
        }
    }

    pub fn toggle(
        document: DocumentKind,
        path: impl Into<String>,
        value: impl Into<String>,
        checked: bool,
    ) -> Self {
        Action::SetField {
            document,
            path: path.into(),
            value: value.into(),
            kind: InputKind::Checkbox,
            checked,
        }
    }

    /// Append a blank row.
    pub fn add_blank_row(table: TableRef) -> Self {
        Action::AddRow {
            table,
            row: DynamicRow::new(),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetField { .. } => "set_field",
            Action::UpdateRow { .. } => "update_row",
            Action::AddRow { .. } => "add_row",
            Action::RemoveRow { .. } => "remove_row",
            Action::SetProgressObjectiveList { .. } => "set_progress_objective_list",
            Action::ApplyProtocol { .. } => "apply_protocol",
            Action::Reset => "reset",
        }
    }
}

/// Parse a recorded action log: a JSON array of actions.
///
/// Only a log that is not a JSON array is an error. Entries that do not
/// decode as an [`Action`] are skipped with a warning and the rest are kept
/// in order.
pub fn parse_action_log(json: &str) -> Result<Vec<Action>, StateError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = entries.len();

    let actions: Vec<Action> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(action) => Some(action),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed action log entry");
                None
            }
        })
        .collect();

    if actions.len() < total {
        debug!(kept = actions.len(), total, "action log parsed with skipped entries");
    }
    Ok(actions)
}
