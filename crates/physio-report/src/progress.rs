//! Section formatters for the Progress Note Document.

use physio_core::models::progress::{
    Discharge, Distribution, ProgressAssessment, ProgressObjective, ProgressPlan, ProgressSubjective,
};
use physio_core::models::rows::TableRow;
use physio_core::models::selection::{SelectedExercise, SelectedModality};

use crate::markup::{Fragments, is_blank, joined, labeled_list, lower, verbatim};

pub fn subjective(s: &ProgressSubjective) -> String {
    let mut parts = Fragments::new();

    if !is_blank(&s.patient_statement) {
        parts.push(format!("Patient states: \"{}\".", verbatim(&s.patient_statement)));
    }
    parts.sentence("Current complaints include", &s.complaints);
    if !is_blank(&s.self_progress) {
        parts.push(format!(
            "Patient reports their condition is {}.",
            lower(&s.self_progress)
        ));
    }

    parts.join(" ")
}

pub fn objective(o: &ProgressObjective) -> String {
    let mut parts = Fragments::new();

    let exercises: Vec<String> = o.exercises.iter().map(exercise_item).collect();
    parts.push(labeled_list("Exercises Performed", &exercises));

    let modalities: Vec<String> = o.modalities.iter().map(modality_item).collect();
    parts.push(labeled_list("Modalities Applied", &modalities));

    let measurements: Vec<String> = o
        .measurements
        .iter()
        .map(|row| row.filled().into_iter().map(verbatim).collect::<Vec<_>>())
        .filter(|items| items.len() > 1)
        .map(|items| items.join(" - "))
        .collect();
    parts.push(labeled_list("Measurements", &measurements));

    parts.join("<br>")
}

pub fn assessment(a: &ProgressAssessment) -> String {
    let mut parts = Fragments::new();

    if !is_blank(&a.clinical_observations) {
        parts.push(format!(
            "Clinical observations: {}.",
            verbatim(&a.clinical_observations)
        ));
    }
    let performance = joined(&a.performance);
    if !performance.is_empty() {
        parts.push(format!(
            "Patient demonstrated {performance} performance with therapeutic activities."
        ));
    }

    parts.join(" ")
}

/// The plan, followed by any transfer of care and discharge details.
pub fn plan(p: &ProgressPlan, distribution: &Distribution, discharge: &Discharge) -> String {
    let mut parts = Fragments::new();

    let next = joined(&p.next_plan);
    if !next.is_empty() {
        parts.push(format!(
            "The plan for the next session includes continuing with {next}."
        ));
    }
    if !is_blank(&p.additional_notes) {
        parts.push(format!(
            "Additional notes for plan: {}.",
            verbatim(&p.additional_notes)
        ));
    }

    transfer(&mut parts, distribution);
    discharge_summary(&mut parts, discharge);

    parts.join(" ")
}

fn transfer(parts: &mut Fragments, d: &Distribution) {
    if d.transfer_required.trim() != "Yes" {
        return;
    }

    let target = if is_blank(&d.transfer_to) {
        "another service".to_string()
    } else {
        verbatim(&d.transfer_to)
    };
    let mut sentence = format!("Care is to be transferred to {target}");
    if !is_blank(&d.transfer_type) {
        sentence.push_str(&format!(" ({})", lower(&d.transfer_type)));
    }
    if !is_blank(&d.transfer_reason) {
        sentence.push_str(&format!(" due to {}", lower(&d.transfer_reason)));
    }
    sentence.push('.');
    parts.push(sentence);

    match (is_blank(&d.return_number), is_blank(&d.return_date)) {
        (false, false) => parts.push(format!(
            "Expected return in {} {} ({}).",
            verbatim(&d.return_number),
            lower(&d.return_unit),
            verbatim(&d.return_date)
        )),
        (false, true) => parts.push(format!(
            "Expected return in {} {}.",
            verbatim(&d.return_number),
            lower(&d.return_unit)
        )),
        (true, false) => parts.push(format!("Expected return on {}.", verbatim(&d.return_date))),
        (true, true) => {}
    }

    if !is_blank(&d.notes) {
        parts.push(format!("Transfer notes: {}.", verbatim(&d.notes)));
    }
}

fn discharge_summary(parts: &mut Fragments, d: &Discharge) {
    if d.ready.trim() != "Yes" {
        return;
    }

    let mut ready = "Patient is ready for discharge".to_string();
    if !is_blank(&d.improvement) {
        ready.push_str(&format!(
            " with {} overall improvement",
            verbatim(&d.improvement)
        ));
    }
    ready.push('.');
    parts.push(ready);

    if !is_blank(&d.date) || !is_blank(&d.therapist) {
        let mut signed = "Discharged".to_string();
        if !is_blank(&d.date) {
            signed.push_str(&format!(" on {}", verbatim(&d.date)));
        }
        if !is_blank(&d.therapist) {
            signed.push_str(&format!(" by {}", verbatim(&d.therapist)));
        }
        signed.push('.');
        parts.push(signed);
    }

    let outcomes: Vec<String> = [
        ("VAS", &d.vas),
        ("ROM", &d.rom),
        ("MMT", &d.mmt),
        ("special tests", &d.special_tests),
        ("functional status", &d.functional),
    ]
    .into_iter()
    .filter(|(_, value)| !is_blank(value))
    .map(|(label, value)| format!("{label} {}", verbatim(value)))
    .collect();
    if !outcomes.is_empty() {
        parts.push(format!("Outcome measures at discharge: {}.", outcomes.join("; ")));
    }

    if !is_blank(&d.reason) {
        parts.push(format!("Reason for discharge: {}.", verbatim(&d.reason)));
    }
    if !is_blank(&d.notes) {
        parts.push(format!("Discharge notes: {}.", verbatim(&d.notes)));
    }
}

fn exercise_item(e: &SelectedExercise) -> String {
    let mut dose = format!("{}x{}", verbatim(&e.sets), verbatim(&e.reps));
    if !is_blank(&e.hold) {
        dose.push_str(&format!(", {}s hold", verbatim(&e.hold)));
    }
    with_item_notes(format!("{} ({dose})", verbatim(&e.name)), e.notes.as_deref())
}

fn modality_item(m: &SelectedModality) -> String {
    let item = format!(
        "{} ({} mins at {} to {})",
        verbatim(&m.name),
        verbatim(&m.duration),
        verbatim(&m.intensity),
        verbatim(&m.site)
    );
    with_item_notes(item, m.notes.as_deref())
}

fn with_item_notes(item: String, notes: Option<&str>) -> String {
    match notes {
        Some(notes) if !is_blank(notes) => format!("{item} - {}", verbatim(notes)),
        _ => item,
    }
}
