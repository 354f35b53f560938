//! Shapes of the read-only reference catalog: exercises, treatment
//! protocols and their phases, and modality presets.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleSeverity {
    Info,
    Warn,
    Lock,
}

/// Advisory attached to an exercise, e.g. "pain > 7" → warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseRule {
    pub condition: String,
    #[serde(rename = "type")]
    pub severity: RuleSeverity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub region: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    pub equipment: Vec<String>,
    pub protocol: String,
    pub phase: String,
    pub rules: Vec<ExerciseRule>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub frequency: Option<String>,
    pub hold: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
}

/// One time-boxed stage of a protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProtocolPhase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goals: Vec<String>,
    pub precautions: Vec<String>,
    pub tips: Vec<String>,
    pub exercises: Vec<Exercise>,
}

/// A named treatment template for a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Protocol {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub phases: Vec<ProtocolPhase>,
}

/// A modality preset. `time` is in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Modality {
    pub device: String,
    pub mode: String,
    pub time: u32,
    pub freq: String,
    pub intensity: String,
    pub site: String,
}
