//! Bulk-populates both documents from a protocol template.

use tracing::{debug, info};

use physio_core::models::catalog::{Exercise, Protocol};
use physio_core::models::document::DocumentPair;
use physio_core::models::selection::SelectedExercise;

pub const DEFAULT_SETS: &str = "3";
pub const DEFAULT_REPS: &str = "10";

/// Overwrite diagnosis, goals and exercises from the protocol's first phase.
///
/// This replaces rather than merges: existing diagnosis, treatment goals,
/// planned exercises and progress-note exercises are discarded. A protocol
/// without phases leaves the documents unchanged.
pub fn apply_protocol(mut pair: DocumentPair, protocol: &Protocol) -> DocumentPair {
    // Later phases are not reachable yet; there is no phase-advance action.
    let Some(phase) = protocol.phases.first() else {
        debug!(protocol = %protocol.id, "protocol has no phases, nothing applied");
        return pair;
    };

    pair.assessment.assessment.diagnosis = protocol.title.clone();
    pair.assessment.assessment.treatment_goals = phase.goals.clone();
    pair.assessment.plan.exercises = phase.exercises.iter().map(|e| e.name.clone()).collect();
    pair.progress_note.objective.exercises = phase.exercises.iter().map(selected_exercise).collect();

    info!(
        protocol = %protocol.id,
        phase = %phase.id,
        goals = phase.goals.len(),
        exercises = phase.exercises.len(),
        "protocol applied"
    );

    pair
}

/// Parameterize a template exercise, falling back to the standard
/// prescription where the template leaves a value unset.
pub fn selected_exercise(exercise: &Exercise) -> SelectedExercise {
    SelectedExercise {
        id: exercise.id.clone(),
        name: exercise.name.clone(),
        sets: non_empty_or(exercise.sets.as_deref(), DEFAULT_SETS),
        reps: non_empty_or(exercise.reps.as_deref(), DEFAULT_REPS),
        hold: non_empty_or(exercise.hold.as_deref(), ""),
        notes: Some(non_empty_or(exercise.notes.as_deref(), "")),
    }
}

/// The question an interactive surface must confirm before applying.
pub fn confirmation_prompt(protocol: &Protocol) -> String {
    format!(
        "Are you sure you want to apply the \"{}\" protocol? This will overwrite the current \
         diagnosis, goals, and exercise plan.",
        protocol.title
    )
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
