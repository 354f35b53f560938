//! The initial-evaluation document, organised as a SOAP note.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{FieldMut, Section, section_fields};
use super::rows::{MmtRow, RomRow, SpecialTestRow};

/// One instance per encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AssessmentDocument {
    pub subjective: Subjective,
    pub objective: Objective,
    pub assessment: Assessment,
    pub plan: Plan,
}

impl AssessmentDocument {
    pub const SECTIONS: &'static [&'static str] = &["subjective", "objective", "assessment", "plan"];

    pub fn section_mut(&mut self, name: &str) -> Option<&mut dyn Section> {
        match name {
            "subjective" => Some(&mut self.subjective),
            "objective" => Some(&mut self.objective),
            "assessment" => Some(&mut self.assessment),
            "plan" => Some(&mut self.plan),
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
pub struct Subjective {
    pub chief_complaint: String,
    pub onset: String,
    pub duration: String,
    pub progression: String,
    /// VAS score 0–10, kept as entered.
    pub pain_score: String,
    pub pain_location: Vec<String>,
    pub pain_location_other: String,
    pub pain_side: String,
    pub pain_quality: String,
    pub pain_pattern: String,
    /// "Yes", "No" or empty.
    pub pain_radiating: String,
    pub radiating_side: String,
    pub radiating_sites: Vec<String>,
    pub radiating_site_other: String,
    pub aggravating_factors: Vec<String>,
    pub aggravating_factors_other: String,
    pub relieving_factors: Vec<String>,
    pub relieving_factors_other: String,
    pub medical_history: Vec<String>,
    pub medical_history_other: String,
    /// "Yes", "No" or empty.
    pub surgery: String,
    pub operation_type: String,
    pub operated_side: String,
    pub surgery_time: String,
    pub surgery_unit: String,
    pub follow_up_date: String,
    pub subjective_notes: String,
}

impl Default for Subjective {
    fn default() -> Self {
        Self {
            chief_complaint: String::new(),
            onset: String::new(),
            duration: String::new(),
            progression: String::new(),
            pain_score: "0".to_string(),
            pain_location: Vec::new(),
            pain_location_other: String::new(),
            pain_side: String::new(),
            pain_quality: String::new(),
            pain_pattern: String::new(),
            pain_radiating: String::new(),
            radiating_side: String::new(),
            radiating_sites: Vec::new(),
            radiating_site_other: String::new(),
            aggravating_factors: Vec::new(),
            aggravating_factors_other: String::new(),
            relieving_factors: Vec::new(),
            relieving_factors_other: String::new(),
            medical_history: Vec::new(),
            medical_history_other: String::new(),
            surgery: String::new(),
            operation_type: String::new(),
            operated_side: String::new(),
            surgery_time: String::new(),
            surgery_unit: "Weeks".to_string(),
            follow_up_date: String::new(),
            subjective_notes: String::new(),
        }
    }
}

section_fields!(Subjective {
    text: [
        chief_complaint => "chiefComplaint",
        onset => "onset",
        duration => "duration",
        progression => "progression",
        pain_score => "painScore",
        pain_location_other => "painLocationOther",
        pain_side => "painSide",
        pain_quality => "painQuality",
        pain_pattern => "painPattern",
        pain_radiating => "painRadiating",
        radiating_side => "radiatingSide",
        radiating_site_other => "radiatingSiteOther",
        aggravating_factors_other => "aggravatingFactorsOther",
        relieving_factors_other => "relievingFactorsOther",
        medical_history_other => "medicalHistoryOther",
        surgery => "surgery",
        operation_type => "operationType",
        operated_side => "operatedSide",
        surgery_time => "surgeryTime",
        surgery_unit => "surgeryUnit",
        follow_up_date => "followUpDate",
        subjective_notes => "subjectiveNotes",
    ],
    set: [
        pain_location => "painLocation",
        radiating_sites => "radiatingSites",
        aggravating_factors => "aggravatingFactors",
        relieving_factors => "relievingFactors",
        medical_history => "medicalHistory",
    ],
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Objective {
    pub assistive_devices: Vec<String>,
    pub assistive_devices_other: String,
    pub braces: Vec<String>,
    pub braces_other: String,
    pub posture: Vec<String>,
    pub posture_other: String,
    pub deformities: Vec<String>,
    pub deformities_other: String,
    pub gait_pattern: Vec<String>,
    pub gait_pattern_other: String,
    pub swelling_severity: Vec<String>,
    pub swelling_type: Vec<String>,
    pub swelling_location: String,
    pub skin_condition: Vec<String>,
    pub ulcer_stage: String,
    pub skin_condition_site: String,
    pub tenderness_grade: Vec<String>,
    pub tenderness_site: String,
    pub sensation_finding: Vec<String>,
    pub sensation_site: String,
    pub balance: String,
    pub fall_risk: String,
    pub rom_rows: Vec<RomRow>,
    pub mmt_rows: Vec<MmtRow>,
    pub special_rows: Vec<SpecialTestRow>,
    pub objective_notes: String,
}

impl Default for Objective {
    /// Each measurement table starts with one blank row ready for input.
    fn default() -> Self {
        Self {
            assistive_devices: Vec::new(),
            assistive_devices_other: String::new(),
            braces: Vec::new(),
            braces_other: String::new(),
            posture: Vec::new(),
            posture_other: String::new(),
            deformities: Vec::new(),
            deformities_other: String::new(),
            gait_pattern: Vec::new(),
            gait_pattern_other: String::new(),
            swelling_severity: Vec::new(),
            swelling_type: Vec::new(),
            swelling_location: String::new(),
            skin_condition: Vec::new(),
            ulcer_stage: String::new(),
            skin_condition_site: String::new(),
            tenderness_grade: Vec::new(),
            tenderness_site: String::new(),
            sensation_finding: Vec::new(),
            sensation_site: String::new(),
            balance: String::new(),
            fall_risk: String::new(),
            rom_rows: vec![RomRow::default()],
            mmt_rows: vec![MmtRow::default()],
            special_rows: vec![SpecialTestRow::default()],
            objective_notes: String::new(),
        }
    }
}

section_fields!(Objective {
    text: [
        assistive_devices_other => "assistiveDevicesOther",
        braces_other => "bracesOther",
        posture_other => "postureOther",
        deformities_other => "deformitiesOther",
        gait_pattern_other => "gaitPatternOther",
        swelling_location => "swellingLocation",
        ulcer_stage => "ulcerStage",
        skin_condition_site => "skinConditionSite",
        tenderness_site => "tendernessSite",
        sensation_site => "sensationSite",
        balance => "balance",
        fall_risk => "fallRisk",
        objective_notes => "objectiveNotes",
    ],
    set: [
        assistive_devices => "assistiveDevices",
        braces => "braces",
        posture => "posture",
        deformities => "deformities",
        gait_pattern => "gaitPattern",
        swelling_severity => "swellingSeverity",
        swelling_type => "swellingType",
        skin_condition => "skinCondition",
        tenderness_grade => "tendernessGrade",
        sensation_finding => "sensationFinding",
    ],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Assessment {
    pub diagnosis: String,
    pub problem_list: Vec<String>,
    pub problem_list_other: String,
    pub treatment_goals: Vec<String>,
    pub treatment_goals_other: String,
    pub prognosis: String,
    pub imaging_date: String,
    pub referring_doctor: String,
    pub imaging_findings: String,
    pub additional_notes: String,
}

section_fields!(Assessment {
    text: [
        diagnosis => "diagnosis",
        problem_list_other => "problemListOther",
        treatment_goals_other => "treatmentGoalsOther",
        prognosis => "prognosis",
        imaging_date => "imagingDate",
        referring_doctor => "referringDoctor",
        imaging_findings => "imagingFindings",
        additional_notes => "additionalNotes",
    ],
    set: [
        problem_list => "problemList",
        treatment_goals => "treatmentGoals",
    ],
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Plan {
    pub modalities: Vec<String>,
    pub exercises: Vec<String>,
    pub manual_therapy: Vec<String>,
    pub total_sessions: String,
    pub session_frequency: String,
    pub session_frequency_unit: String,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            modalities: Vec::new(),
            exercises: Vec::new(),
            manual_therapy: Vec::new(),
            total_sessions: String::new(),
            session_frequency: String::new(),
            session_frequency_unit: "per week".to_string(),
        }
    }
}

section_fields!(Plan {
    text: [
        total_sessions => "totalSessions",
        session_frequency => "sessionFrequency",
        session_frequency_unit => "sessionFrequencyUnit",
    ],
    set: [
        modalities => "modalities",
        exercises => "exercises",
        manual_therapy => "manualTherapy",
    ],
});
