use physio_core::error::CoreError;
use physio_core::models::document::{DocumentKind, DocumentPair};
use physio_core::models::field::{FieldMut, split_path};
use physio_core::models::rows::{DynamicRow, RomRow, SpecialTestRow, TableRow};

#[test]
fn initial_state_matches_form_defaults() {
    let pair = DocumentPair::default();

    assert_eq!(pair.assessment.subjective.pain_score, "0");
    assert_eq!(pair.assessment.subjective.surgery_unit, "Weeks");
    assert_eq!(pair.assessment.plan.session_frequency_unit, "per week");
    assert_eq!(pair.assessment.objective.rom_rows, vec![RomRow::default()]);
    assert_eq!(pair.assessment.objective.mmt_rows.len(), 1);
    assert_eq!(pair.assessment.objective.special_rows.len(), 1);
    assert_eq!(pair.progress_note.session.number, "1");
    assert_eq!(pair.progress_note.distribution.return_unit, "Days");
    assert!(pair.progress_note.objective.exercises.is_empty());
}

#[test]
fn serializes_with_camel_case_field_names() {
    let json = serde_json::to_value(DocumentPair::default()).unwrap();

    assert_eq!(json["assessment"]["subjective"]["painScore"], "0");
    assert!(json["assessment"]["objective"]["romRows"].is_array());
    assert_eq!(json["assessment"]["objective"]["specialRows"][0]["testName"], "");
    assert_eq!(json["progressNote"]["session"]["number"], "1");
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let pair: DocumentPair =
        serde_json::from_str(r#"{"assessment":{"subjective":{"chiefComplaint":"Knee pain"}}}"#).unwrap();

    assert_eq!(pair.assessment.subjective.chief_complaint, "Knee pain");
    assert_eq!(pair.assessment.subjective.pain_score, "0");
    assert_eq!(pair.progress_note.session.number, "1");
}

#[test]
fn split_path_rejects_malformed_paths() {
    assert_eq!(split_path("subjective.onset").unwrap(), ("subjective", "onset"));
    assert!(split_path("subjective").is_err());
    assert!(split_path(".onset").is_err());
    assert!(split_path("subjective.").is_err());
    assert!(split_path("a.b.c").is_err());
}

#[test]
fn resolves_text_and_set_fields_by_name() {
    let mut pair = DocumentPair::default();

    match pair.field_mut(DocumentKind::Assessment, "subjective.chiefComplaint").unwrap() {
        FieldMut::Text(value) => *value = "Low back pain".to_string(),
        FieldMut::Set(_) => panic!("chiefComplaint is a text field"),
    }
    match pair.field_mut(DocumentKind::Assessment, "objective.gaitPattern").unwrap() {
        FieldMut::Set(values) => values.push("Antalgic".to_string()),
        FieldMut::Text(_) => panic!("gaitPattern is a multi-select"),
    }
    match pair.field_mut(DocumentKind::ProgressNote, "session.number").unwrap() {
        FieldMut::Text(value) => *value = "4".to_string(),
        FieldMut::Set(_) => panic!("session.number is a text field"),
    }

    assert_eq!(pair.assessment.subjective.chief_complaint, "Low back pain");
    assert_eq!(pair.assessment.objective.gait_pattern, vec!["Antalgic"]);
    assert_eq!(pair.progress_note.session.number, "4");
}

#[test]
fn section_names_are_scoped_to_their_document() {
    let mut pair = DocumentPair::default();

    assert!(matches!(
        pair.field_mut(DocumentKind::Assessment, "session.number"),
        Err(CoreError::UnknownSection { .. })
    ));
    assert!(matches!(
        pair.field_mut(DocumentKind::ProgressNote, "subjective.chiefComplaint"),
        Err(CoreError::UnknownField { .. })
    ));
    assert!(matches!(
        pair.field_mut(DocumentKind::Assessment, "objective.romRows"),
        Err(CoreError::UnknownField { .. })
    ));
}

#[test]
fn table_rows_round_trip_through_the_mapping_shape() {
    let mut dynamic = DynamicRow::new();
    dynamic.insert("testName".to_string(), "Lachman".to_string());
    dynamic.insert("result".to_string(), "Positive".to_string());
    dynamic.insert("colour".to_string(), "blue".to_string());

    let row = SpecialTestRow::from_dynamic(&dynamic);
    assert_eq!(row.test_name, "Lachman");
    assert_eq!(row.result, "Positive");
    assert_eq!(row.filled(), vec!["Lachman", "Positive"]);

    let back = row.to_dynamic();
    assert_eq!(back.len(), SpecialTestRow::COLUMNS.len());
    assert!(!back.contains_key("colour"));
}

#[test]
fn row_set_rejects_unknown_columns() {
    let mut row = RomRow::default();

    assert!(row.set("joint", "Knee".to_string()));
    assert!(!row.set("muscle", "Quadriceps".to_string()));
    assert_eq!(row.get("joint"), Some("Knee"));
    assert_eq!(row.get("muscle"), None);
}
