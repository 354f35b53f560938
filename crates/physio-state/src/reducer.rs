//! The state transition function.
//!
//! `reduce` is total: any action that cannot be applied (unknown path,
//! field/kind mismatch, unknown column, index out of range) leaves the
//! documents untouched and is reported at debug level.

use tracing::{debug, info};

use physio_core::models::document::{DocumentKind, DocumentPair};
use physio_core::models::field::FieldMut;
use physio_core::models::rows::{DynamicRow, TableRow};

use crate::action::{Action, InputKind, ObjectiveList, TableRef};
use crate::protocol::apply_protocol;

/// Apply one action, returning the next documents.
pub fn reduce(mut pair: DocumentPair, action: Action) -> DocumentPair {
    match action {
        Action::SetField {
            document,
            path,
            value,
            kind,
            checked,
        } => set_field(&mut pair, document, &path, value, kind, checked),
        Action::UpdateRow {
            table,
            index,
            key,
            value,
        } => {
            let applied = match table {
                TableRef::RomRows => update_row(&mut pair.assessment.objective.rom_rows, index, &key, value),
                TableRef::MmtRows => update_row(&mut pair.assessment.objective.mmt_rows, index, &key, value),
                TableRef::SpecialRows => {
                    update_row(&mut pair.assessment.objective.special_rows, index, &key, value)
                }
                TableRef::Measurements => {
                    update_row(&mut pair.progress_note.objective.measurements, index, &key, value)
                }
            };
            if !applied {
                debug!(?table, index, key = %key, "update_row ignored");
            }
        }
        Action::AddRow { table, row } => match table {
            TableRef::RomRows => add_row(&mut pair.assessment.objective.rom_rows, &row),
            TableRef::MmtRows => add_row(&mut pair.assessment.objective.mmt_rows, &row),
            TableRef::SpecialRows => add_row(&mut pair.assessment.objective.special_rows, &row),
            TableRef::Measurements => add_row(&mut pair.progress_note.objective.measurements, &row),
        },
        Action::RemoveRow { table, index } => {
            let removed = match table {
                TableRef::RomRows => remove_row(&mut pair.assessment.objective.rom_rows, index),
                TableRef::MmtRows => remove_row(&mut pair.assessment.objective.mmt_rows, index),
                TableRef::SpecialRows => remove_row(&mut pair.assessment.objective.special_rows, index),
                TableRef::Measurements => remove_row(&mut pair.progress_note.objective.measurements, index),
            };
            if !removed {
                debug!(?table, index, "remove_row ignored: index out of range");
            }
        }
        Action::SetProgressObjectiveList { list } => match list {
            ObjectiveList::Exercises(exercises) => pair.progress_note.objective.exercises = exercises,
            ObjectiveList::Modalities(modalities) => pair.progress_note.objective.modalities = modalities,
        },
        Action::ApplyProtocol { protocol } => return apply_protocol(pair, &protocol),
        Action::Reset => {
            info!("documents reset to defaults");
            return DocumentPair::default();
        }
    }

    pair
}

fn set_field(
    pair: &mut DocumentPair,
    document: DocumentKind,
    path: &str,
    value: String,
    kind: InputKind,
    checked: bool,
) {
    let field = match pair.field_mut(document, path) {
        Ok(field) => field,
        Err(e) => {
            debug!(%document, path, error = %e, "set_field ignored");
            return;
        }
    };

    match (field, kind) {
        (FieldMut::Set(values), InputKind::Checkbox) => {
            if checked {
                if !values.contains(&value) {
                    values.push(value);
                }
            } else {
                values.retain(|v| *v != value);
            }
        }
        (FieldMut::Text(slot), InputKind::Scalar) => *slot = value,
        (_, kind) => debug!(%document, path, ?kind, "set_field ignored: input kind does not match field"),
    }
}

fn update_row<R: TableRow>(rows: &mut [R], index: usize, key: &str, value: String) -> bool {
    match rows.get_mut(index) {
        Some(row) => row.set(key, value),
        None => false,
    }
}

fn add_row<R: TableRow>(rows: &mut Vec<R>, row: &DynamicRow) {
    rows.push(R::from_dynamic(row));
}

fn remove_row<R>(rows: &mut Vec<R>, index: usize) -> bool {
    if index < rows.len() {
        rows.remove(index);
        true
    } else {
        false
    }
}
