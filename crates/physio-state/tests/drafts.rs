use physio_catalog::Catalog;
use physio_core::models::document::DocumentPair;
use physio_core::models::selection::SelectedExercise;
use physio_state::action::{Action, ObjectiveList};
use physio_state::draft::{ExerciseDraft, ExerciseParam, ModalityDraft, ModalityParam};
use physio_state::reduce;

#[test]
fn toggling_an_exercise_adds_the_standard_prescription() {
    let catalog = Catalog::builtin().unwrap();
    let pendulum = catalog.exercise("rc_p1_rom_pendulum").unwrap();

    let mut draft = ExerciseDraft::default();
    assert!(draft.toggle(pendulum));

    let entry = &draft.selected()[0];
    assert_eq!(entry.id, "rc_p1_rom_pendulum");
    assert_eq!(entry.sets, "3");
    assert_eq!(entry.reps, "10");
    assert_eq!(entry.hold, "");

    assert!(!draft.toggle(pendulum));
    assert!(draft.is_empty());
}

#[test]
fn exercise_parameters_are_edited_by_id() {
    let catalog = Catalog::builtin().unwrap();
    let mut draft = ExerciseDraft::default();
    draft.toggle(catalog.exercise("acl_p1_rom_heelslides").unwrap());

    assert!(draft.set_param("acl_p1_rom_heelslides", ExerciseParam::Reps, "15"));
    assert!(draft.set_param("acl_p1_rom_heelslides", ExerciseParam::Notes, "with strap"));
    assert!(!draft.set_param("missing", ExerciseParam::Sets, "1"));

    let entry = &draft.selected()[0];
    assert_eq!(entry.reps, "15");
    assert_eq!(entry.notes.as_deref(), Some("with strap"));
}

#[test]
fn confirming_a_draft_replaces_the_progress_list() {
    let existing = vec![SelectedExercise {
        id: "old".to_string(),
        name: "Old".to_string(),
        ..Default::default()
    }];
    let mut pair = DocumentPair::default();
    pair.progress_note.objective.exercises = existing.clone();

    let catalog = Catalog::builtin().unwrap();
    let mut draft = ExerciseDraft::from_selection(&existing);
    assert!(draft.is_selected("old"));
    draft.toggle(catalog.exercise("lbp_p1_mob_catcamel").unwrap());
    assert_eq!(draft.len(), 2);

    let pair = reduce(pair, draft.into_action());
    let ids: Vec<&str> = pair
        .progress_note
        .objective
        .exercises
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["old", "lbp_p1_mob_catcamel"]);
}

#[test]
fn modality_toggle_copies_the_preset() {
    let catalog = Catalog::builtin().unwrap();
    let ultrasound = catalog.modality("Ultrasound").unwrap();

    let mut draft = ModalityDraft::default();
    assert!(draft.toggle(ultrasound));
    assert!(draft.set_param("Ultrasound", ModalityParam::Site, "Elbow"));

    let entry = &draft.selected()[0];
    assert_eq!(entry.duration, "8");
    assert_eq!(entry.intensity, "1.5 W/cm2");
    assert_eq!(entry.site, "Elbow");

    match draft.into_action() {
        Action::SetProgressObjectiveList {
            list: ObjectiveList::Modalities(list),
        } => assert_eq!(list.len(), 1),
        other => panic!("unexpected action {other:?}"),
    }
}
