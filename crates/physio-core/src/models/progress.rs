//! The per-session progress note.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{FieldMut, Section, section_fields};
use super::rows::MeasurementRow;
use super::selection::{SelectedExercise, SelectedModality};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProgressNoteDocument {
    pub session: Session,
    pub subjective: ProgressSubjective,
    pub objective: ProgressObjective,
    pub assessment: ProgressAssessment,
    pub plan: ProgressPlan,
    pub distribution: Distribution,
    pub discharge: Discharge,
}

impl ProgressNoteDocument {
    pub const SECTIONS: &'static [&'static str] = &[
        "session",
        "subjective",
        "objective",
        "assessment",
        "plan",
        "distribution",
        "discharge",
    ];

    pub fn section_mut(&mut self, name: &str) -> Option<&mut dyn Section> {
        match name {
            "session" => Some(&mut self.session),
            "subjective" => Some(&mut self.subjective),
            "objective" => Some(&mut self.objective),
            "assessment" => Some(&mut self.assessment),
            "plan" => Some(&mut self.plan),
            "distribution" => Some(&mut self.distribution),
            "discharge" => Some(&mut self.discharge),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, section: &str, field: &str) -> Option<FieldMut<'_>> {
        self.section_mut(section)?.field_mut(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Session {
    pub number: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            number: "1".to_string(),
        }
    }
}

section_fields!(Session {
    text: [number => "number"],
    set: [],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProgressSubjective {
    pub patient_statement: String,
    pub complaints: Vec<String>,
    /// "Improved", "No change", "Worse" or empty.
    pub self_progress: String,
}

section_fields!(ProgressSubjective {
    text: [
        patient_statement => "patientStatement",
        self_progress => "selfProgress",
    ],
    set: [complaints => "complaints"],
});

/// What was done during the session. The selection lists are replaced
/// wholesale rather than edited field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProgressObjective {
    pub exercises: Vec<SelectedExercise>,
    pub modalities: Vec<SelectedModality>,
    pub measurements: Vec<MeasurementRow>,
}

impl Section for ProgressObjective {
    fn field_mut(&mut self, _name: &str) -> Option<FieldMut<'_>> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProgressAssessment {
    pub clinical_observations: String,
    pub performance: Vec<String>,
}

section_fields!(ProgressAssessment {
    text: [clinical_observations => "clinicalObservations"],
    set: [performance => "performance"],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProgressPlan {
    pub next_plan: Vec<String>,
    pub additional_notes: String,
}

section_fields!(ProgressPlan {
    text: [additional_notes => "additionalNotes"],
    set: [next_plan => "nextPlan"],
});

/// Transfer of care to another service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Distribution {
    /// "Yes", "No" or empty.
    pub transfer_required: String,
    pub transfer_to: String,
    pub transfer_reason: String,
    pub return_number: String,
    pub return_unit: String,
    pub return_date: String,
    /// "Temporary", "Full transfer" or empty.
    pub transfer_type: String,
    pub notes: String,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            transfer_required: String::new(),
            transfer_to: String::new(),
            transfer_reason: String::new(),
            return_number: String::new(),
            return_unit: "Days".to_string(),
            return_date: String::new(),
            transfer_type: String::new(),
            notes: String::new(),
        }
    }
}

section_fields!(Distribution {
    text: [
        transfer_required => "transferRequired",
        transfer_to => "transferTo",
        transfer_reason => "transferReason",
        return_number => "returnNumber",
        return_unit => "returnUnit",
        return_date => "returnDate",
        transfer_type => "transferType",
        notes => "notes",
    ],
    set: [],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Discharge {
    /// "Yes", "No" or empty.
    pub ready: String,
    pub improvement: String,
    pub date: String,
    pub therapist: String,
    pub vas: String,
    pub rom: String,
    pub mmt: String,
    pub special_tests: String,
    pub functional: String,
    pub reason: String,
    pub notes: String,
}

section_fields!(Discharge {
    text: [
        ready => "ready",
        improvement => "improvement",
        date => "date",
        therapist => "therapist",
        vas => "vas",
        rom => "rom",
        mmt => "mmt",
        special_tests => "specialTests",
        functional => "functional",
        reason => "reason",
        notes => "notes",
    ],
    set: [],
});
