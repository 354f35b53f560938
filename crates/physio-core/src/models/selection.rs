use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A catalog exercise with the parameters prescribed for this session.
/// Identified by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SelectedExercise {
    pub id: String,
    pub name: String,
    pub sets: String,
    pub reps: String,
    /// Hold duration in seconds; empty when the exercise has no hold.
    pub hold: String,
    pub notes: Option<String>,
}

/// A catalog modality with the parameters applied this session.
/// Identified by `name` (the catalog device name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SelectedModality {
    pub name: String,
    /// Minutes.
    pub duration: String,
    pub intensity: String,
    pub site: String,
    pub notes: Option<String>,
}
