//! Section formatters for the Assessment Document.

use physio_core::models::assessment::{Assessment, Objective, Plan, Subjective};
use physio_core::models::rows::{MmtRow, RomRow, SpecialTestRow, TableRow};

use crate::list::{Conjunction, join_phrases, with_other};
use crate::markup::{Fragments, is_blank, joined, labeled_list, lower, verbatim};

/// The leading integer of a VAS entry, `0` when there is none. Entries too
/// large for `u32` saturate so they never read as "no pain".
pub fn pain_score(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

pub fn subjective(s: &Subjective) -> String {
    let mut parts = Fragments::new();

    if !is_blank(&s.chief_complaint) {
        parts.push(format!(
            "Patient presents with complaints of {}.",
            lower(&s.chief_complaint)
        ));
    }

    let course = joined([&s.onset, &s.duration, &s.progression]);
    if !course.is_empty() {
        parts.push(format!("The condition is characterized by a {course} course."));
    }

    let score = pain_score(&s.pain_score);
    if score > 0 {
        let mut pain = format!("Pain is rated at {score}/10 on the VAS");
        if !is_blank(&s.pain_quality) {
            pain.push_str(&format!(", described as {}", lower(&s.pain_quality)));
        }
        let location = joined(with_other(&s.pain_location, &s.pain_location_other));
        if !location.is_empty() {
            pain.push_str(&format!(" and located in the {}", sided(&s.pain_side, &location)));
        }
        pain.push('.');
        parts.push(pain);

        let sites = joined(with_other(&s.radiating_sites, &s.radiating_site_other));
        if s.pain_radiating.trim() == "Yes" && !sites.is_empty() {
            parts.push(format!("The pain radiates to the {}.", sided(&s.radiating_side, &sites)));
        }

        if !is_blank(&s.pain_pattern) {
            parts.push(format!("The pain is {}.", lower(&s.pain_pattern)));
        }
    } else {
        parts.push("Patient reports no pain at this time (0/10 VAS).");
    }

    parts.sentence(
        "Symptoms are aggravated by",
        with_other(&s.aggravating_factors, &s.aggravating_factors_other),
    );
    parts.sentence(
        "Relief is reported with",
        with_other(&s.relieving_factors, &s.relieving_factors_other),
    );

    let history = joined(with_other(&s.medical_history, &s.medical_history_other));
    if history.is_empty() {
        parts.push("Patient denies significant past medical history.");
    } else {
        parts.push(format!("Past medical history is significant for {history}."));
    }

    if s.surgery.trim() == "Yes" {
        let mut details: Vec<String> = Vec::new();
        if !is_blank(&s.operated_side) {
            details.push(lower(&s.operated_side));
        }
        if !is_blank(&s.operation_type) {
            details.push(verbatim(&s.operation_type));
        }
        let what = if details.is_empty() {
            "surgery".to_string()
        } else {
            details.join(" ")
        };

        let mut history = format!("Patient has a history of {what}");
        if !is_blank(&s.surgery_time) {
            history.push_str(&format!(
                " approximately {} {} ago",
                verbatim(&s.surgery_time),
                lower(&s.surgery_unit)
            ));
        }
        history.push('.');
        parts.push(history);

        if !is_blank(&s.follow_up_date) {
            parts.push(format!("Follow-up is scheduled for {}.", verbatim(&s.follow_up_date)));
        }
    }

    with_notes(parts.join(" "), "Additional Notes", &s.subjective_notes)
}

pub fn objective(o: &Objective) -> String {
    let mut parts = Fragments::new();

    let mut observations: Vec<String> = Vec::new();
    let devices = joined(with_other(&o.assistive_devices, &o.assistive_devices_other));
    if !devices.is_empty() {
        observations.push(format!("utilizes {devices}"));
    }
    let braces = joined(with_other(&o.braces, &o.braces_other));
    if !braces.is_empty() {
        observations.push(format!("wears {braces}"));
    }
    let posture = joined(with_other(&o.posture, &o.posture_other));
    if !posture.is_empty() {
        observations.push(format!("presents with {posture} posture"));
    }
    let gait = joined(with_other(&o.gait_pattern, &o.gait_pattern_other));
    if !gait.is_empty() {
        observations.push(format!("demonstrates a {gait} gait pattern"));
    }
    if !observations.is_empty() {
        parts.push(format!(
            "On observation, the patient {}.",
            join_phrases(&observations, Conjunction::And)
        ));
    }

    parts.sentence(
        "Deformities noted include",
        with_other(&o.deformities, &o.deformities_other),
    );

    let mut palpation: Vec<String> = Vec::new();
    let severity = joined(&o.swelling_severity);
    if !severity.is_empty() {
        let kind = [severity, joined(&o.swelling_type)]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        palpation.push(at_site(format!("{kind} swelling"), &o.swelling_location));
    }
    let tenderness = joined(&o.tenderness_grade);
    if !tenderness.is_empty() {
        palpation.push(at_site(format!("{tenderness} tenderness"), &o.tenderness_site));
    }
    if !palpation.is_empty() {
        parts.push(format!(
            "Palpation reveals {}.",
            join_phrases(&palpation, Conjunction::And)
        ));
    }

    let skin = joined(&o.skin_condition);
    if !skin.is_empty() {
        let mut finding = skin;
        if !is_blank(&o.ulcer_stage) {
            finding.push_str(&format!(" (stage {})", verbatim(&o.ulcer_stage)));
        }
        parts.push(format!(
            "Skin inspection reveals {}.",
            at_site(finding, &o.skin_condition_site)
        ));
    }

    let sensation = joined(&o.sensation_finding);
    if !sensation.is_empty() {
        parts.push(format!(
            "Sensation testing reveals {}.",
            at_site(sensation, &o.sensation_site)
        ));
    }

    if !is_blank(&o.balance) {
        parts.push(format!("Balance is rated as {}.", lower(&o.balance)));
    }
    if !is_blank(&o.fall_risk) {
        parts.push(format!("Fall risk is considered {}.", lower(&o.fall_risk)));
    }

    let measures = [
        labeled_list("Range of Motion", &bullets(&o.rom_rows, rom_items)),
        labeled_list("Manual Muscle Testing", &bullets(&o.mmt_rows, mmt_items)),
        labeled_list("Special Tests", &bullets(&o.special_rows, special_items)),
    ]
    .concat();
    parts.push(measures);

    if !is_blank(&o.objective_notes) {
        parts.push(format!("Additional Findings: {}", verbatim(&o.objective_notes)));
    }

    parts.join("<br>").replace('\n', "<br>")
}

pub fn assessment(a: &Assessment) -> String {
    let mut parts = Fragments::new();

    if !is_blank(&a.diagnosis) {
        parts.push(format!("Clinical Impression: {}.", verbatim(&a.diagnosis)));
    }
    parts.sentence(
        "Key problems include",
        with_other(&a.problem_list, &a.problem_list_other),
    );
    parts.sentence(
        "Primary goals are to",
        with_other(&a.treatment_goals, &a.treatment_goals_other),
    );
    if !is_blank(&a.prognosis) {
        parts.push(format!(
            "Prognosis for recovery is considered {}.",
            lower(&a.prognosis)
        ));
    }
    if !is_blank(&a.referring_doctor) {
        parts.push(format!("Patient was referred by {}.", verbatim(&a.referring_doctor)));
    }
    if !is_blank(&a.imaging_findings) {
        let dated = if is_blank(&a.imaging_date) {
            String::new()
        } else {
            format!(" dated {}", verbatim(&a.imaging_date))
        };
        parts.push(format!(
            "Imaging{dated} shows {}.",
            verbatim(&a.imaging_findings)
        ));
    }

    with_notes(parts.join(" "), "Additional Notes", &a.additional_notes)
}

pub fn plan(p: &Plan) -> String {
    let mut parts = Fragments::new();

    let interventions: Vec<String> = [
        ("Modalities", joined(&p.modalities)),
        ("Therapeutic exercises", joined(&p.exercises)),
        ("Manual therapy", joined(&p.manual_therapy)),
    ]
    .into_iter()
    .filter(|(_, list)| !list.is_empty())
    .map(|(label, list)| format!("<li>{label} {list}</li>"))
    .collect();
    if !interventions.is_empty() {
        parts.push(format!(
            "The treatment plan will focus on: <ul>{}</ul>",
            interventions.concat()
        ));
    }

    if !is_blank(&p.total_sessions) {
        let cadence = if is_blank(&p.session_frequency) {
            String::new()
        } else {
            format!(
                "{} sessions {} ",
                verbatim(&p.session_frequency),
                lower(&p.session_frequency_unit)
            )
        };
        parts.push(format!(
            "Recommended course of care is {cadence}for a total of {} visits.",
            verbatim(&p.total_sessions)
        ));
    }

    parts.join("<br>")
}

/// Rows whose identifying cell is set and that render more than one item.
fn bullets<R: TableRow>(rows: &[R], render: impl Fn(&R) -> Vec<String>) -> Vec<String> {
    rows.iter()
        .filter(|row| row.get(R::KEY).is_some_and(|key| !is_blank(key)))
        .map(render)
        .filter(|items| items.len() > 1)
        .map(|items| items.join(" - "))
        .collect()
}

fn rom_items(row: &RomRow) -> Vec<String> {
    let degrees = if is_blank(&row.degrees) {
        String::new()
    } else {
        format!("{}°", verbatim(&row.degrees))
    };
    cells([
        verbatim(&row.side),
        verbatim(&row.joint),
        verbatim(&row.movement),
        verbatim(&row.result),
        degrees,
    ])
}

fn mmt_items(row: &MmtRow) -> Vec<String> {
    let grade = if is_blank(&row.grade) {
        String::new()
    } else {
        format!("Grade {}/5", verbatim(&row.grade))
    };
    cells([verbatim(&row.side), verbatim(&row.muscle), grade])
}

fn special_items(row: &SpecialTestRow) -> Vec<String> {
    cells([verbatim(&row.side), verbatim(&row.test_name), verbatim(&row.result)])
}

fn cells<const N: usize>(values: [String; N]) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

/// Prefix an already-escaped list with a lower-cased side, if any.
fn sided(side: &str, list: &str) -> String {
    if is_blank(side) {
        list.to_string()
    } else {
        format!("{} {list}", lower(side))
    }
}

fn at_site(finding: String, site: &str) -> String {
    if is_blank(site) {
        finding
    } else {
        format!("{finding} at {}", verbatim(site))
    }
}

/// Append free-text notes as their own paragraph.
pub(crate) fn with_notes(body: String, label: &str, notes: &str) -> String {
    if is_blank(notes) {
        return body;
    }
    let notes = format!("{label}: {}", verbatim(notes));
    if body.is_empty() { notes } else { format!("{body}\n{notes}") }
}
