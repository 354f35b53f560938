use physio_core::models::document::{DocumentKind, DocumentPair};
use physio_core::models::rows::{DynamicRow, MeasurementRow, RomRow};
use physio_core::models::selection::{SelectedExercise, SelectedModality};
use physio_state::action::{Action, ObjectiveList, TableRef};
use physio_state::{Store, reduce};

const A: DocumentKind = DocumentKind::Assessment;
const P: DocumentKind = DocumentKind::ProgressNote;

#[test]
fn scalar_fields_are_overwritten_without_coercion() {
    let pair = reduce(DocumentPair::default(), Action::set_text(A, "subjective.painScore", "07"));
    let pair = reduce(pair, Action::set_text(A, "subjective.painQuality", "Sharp"));
    let pair = reduce(pair, Action::set_text(A, "subjective.painQuality", "Dull"));

    assert_eq!(pair.assessment.subjective.pain_score, "07");
    assert_eq!(pair.assessment.subjective.pain_quality, "Dull");
}

#[test]
fn checkbox_add_is_idempotent() {
    let once = reduce(DocumentPair::default(), Action::toggle(A, "subjective.painLocation", "Knee", true));
    let twice = reduce(once.clone(), Action::toggle(A, "subjective.painLocation", "Knee", true));

    assert_eq!(twice.assessment.subjective.pain_location, vec!["Knee"]);
    assert_eq!(once, twice);
}

#[test]
fn checkbox_uncheck_removes_value_and_keeps_order() {
    let mut store = Store::new();
    for value in ["Knee", "Hip", "Ankle"] {
        store.dispatch(Action::toggle(A, "subjective.painLocation", value, true));
    }
    store.dispatch(Action::toggle(A, "subjective.painLocation", "Hip", false));
    store.dispatch(Action::toggle(A, "subjective.painLocation", "Shoulder", false));

    assert_eq!(store.state().assessment.subjective.pain_location, vec!["Knee", "Ankle"]);
}

#[test]
fn edits_route_to_the_tagged_document() {
    let pair = reduce(DocumentPair::default(), Action::set_text(P, "session.number", "5"));
    let pair = reduce(pair, Action::toggle(P, "subjective.complaints", "Stiffness", true));
    let pair = reduce(pair, Action::set_text(A, "assessment.diagnosis", "Patellofemoral pain"));
    let pair = reduce(pair, Action::set_text(P, "assessment.clinicalObservations", "Better control"));

    assert_eq!(pair.progress_note.session.number, "5");
    assert_eq!(pair.progress_note.subjective.complaints, vec!["Stiffness"]);
    assert_eq!(pair.assessment.assessment.diagnosis, "Patellofemoral pain");
    assert_eq!(pair.progress_note.assessment.clinical_observations, "Better control");
}

#[test]
fn malformed_set_field_actions_are_no_ops() {
    let initial = DocumentPair::default();

    let actions = vec![
        Action::set_text(A, "subjective", "x"),
        Action::set_text(A, "nowhere.field", "x"),
        Action::set_text(A, "subjective.unknownField", "x"),
        Action::set_text(A, "session.number", "9"),
        Action::set_text(A, "subjective.painLocation", "Knee"),
        Action::toggle(A, "subjective.chiefComplaint", "Knee", true),
        Action::set_text(A, "objective.romRows", "x"),
    ];

    let store = Store::replay(actions);
    assert_eq!(store.state(), &initial);
    assert_eq!(store.applied(), 7);
}

#[test]
fn add_then_update_last_row() {
    let mut store = Store::new();
    store.dispatch(Action::add_blank_row(TableRef::RomRows));
    let last = store.state().assessment.objective.rom_rows.len() - 1;
    store.dispatch(Action::UpdateRow {
        table: TableRef::RomRows,
        index: last,
        key: "joint".to_string(),
        value: "Knee".to_string(),
    });

    let rows = &store.state().assessment.objective.rom_rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], RomRow::default());
    assert_eq!(rows[1].joint, "Knee");
}

#[test]
fn add_row_converts_the_mapping_shape() {
    let mut row = DynamicRow::new();
    row.insert("muscle".to_string(), "Gluteus medius".to_string());
    row.insert("grade".to_string(), "4".to_string());
    row.insert("bogus".to_string(), "ignored".to_string());

    let pair = reduce(DocumentPair::default(), Action::AddRow { table: TableRef::MmtRows, row });

    let added = &pair.assessment.objective.mmt_rows[1];
    assert_eq!(added.muscle, "Gluteus medius");
    assert_eq!(added.grade, "4");
    assert_eq!(added.side, "");
}

#[test]
fn update_row_out_of_bounds_or_unknown_key_is_a_no_op() {
    let initial = DocumentPair::default();

    let out_of_bounds = reduce(
        initial.clone(),
        Action::UpdateRow {
            table: TableRef::SpecialRows,
            index: 3,
            key: "testName".to_string(),
            value: "Lachman".to_string(),
        },
    );
    assert_eq!(out_of_bounds, initial);

    let unknown_key = reduce(
        initial.clone(),
        Action::UpdateRow {
            table: TableRef::SpecialRows,
            index: 0,
            key: "grade".to_string(),
            value: "5".to_string(),
        },
    );
    assert_eq!(unknown_key, initial);
}

#[test]
fn remove_row_shifts_later_rows_down() {
    let mut store = Store::new();
    for joint in ["Hip", "Knee"] {
        let mut row = DynamicRow::new();
        row.insert("joint".to_string(), joint.to_string());
        store.dispatch(Action::AddRow { table: TableRef::RomRows, row });
    }
    store.dispatch(Action::RemoveRow { table: TableRef::RomRows, index: 1 });

    let joints: Vec<&str> = store
        .state()
        .assessment
        .objective
        .rom_rows
        .iter()
        .map(|r| r.joint.as_str())
        .collect();
    assert_eq!(joints, vec!["", "Knee"]);
}

#[test]
fn remove_row_at_missing_index_is_a_no_op() {
    let initial = DocumentPair::default();
    let pair = reduce(initial.clone(), Action::RemoveRow { table: TableRef::MmtRows, index: 1 });
    assert_eq!(pair, initial);
}

#[test]
fn measurement_table_lives_on_the_progress_note() {
    assert_eq!(TableRef::Measurements.document(), DocumentKind::ProgressNote);

    let pair = reduce(DocumentPair::default(), Action::add_blank_row(TableRef::Measurements));
    let pair = reduce(
        pair,
        Action::UpdateRow {
            table: TableRef::Measurements,
            index: 0,
            key: "measure".to_string(),
            value: "Knee flexion".to_string(),
        },
    );

    assert_eq!(
        pair.progress_note.objective.measurements,
        vec![MeasurementRow {
            measure: "Knee flexion".to_string(),
            ..Default::default()
        }]
    );
}

#[test]
fn objective_lists_are_replaced_wholesale() {
    let exercises = vec![SelectedExercise {
        id: "acl_p1_str_quadsets".to_string(),
        name: "Quad Sets (Isometric)".to_string(),
        sets: "3".to_string(),
        reps: "10".to_string(),
        hold: "5".to_string(),
        notes: None,
    }];
    let modalities = vec![SelectedModality {
        name: "TENS".to_string(),
        duration: "20".to_string(),
        intensity: "15 mA".to_string(),
        site: "Knee".to_string(),
        notes: None,
    }];

    let pair = reduce(
        DocumentPair::default(),
        Action::SetProgressObjectiveList { list: ObjectiveList::Exercises(exercises.clone()) },
    );
    let pair = reduce(
        pair,
        Action::SetProgressObjectiveList { list: ObjectiveList::Modalities(modalities.clone()) },
    );
    let pair = reduce(
        pair,
        Action::SetProgressObjectiveList { list: ObjectiveList::Exercises(Vec::new()) },
    );

    assert!(pair.progress_note.objective.exercises.is_empty());
    assert_eq!(pair.progress_note.objective.modalities, modalities);
}

#[test]
fn reset_restores_the_initial_documents() {
    let mut store = Store::new();
    store.dispatch(Action::set_text(A, "subjective.chiefComplaint", "Neck pain"));
    store.dispatch(Action::add_blank_row(TableRef::SpecialRows));
    store.dispatch(Action::set_text(P, "session.number", "3"));
    store.dispatch(Action::Reset);

    assert_eq!(store.state(), &DocumentPair::default());
    assert_eq!(store.into_state(), DocumentPair::default());
}
