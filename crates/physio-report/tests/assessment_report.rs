use physio_core::models::assessment::AssessmentDocument;
use physio_core::models::rows::{MmtRow, RomRow, SpecialTestRow};
use physio_report::assessment::pain_score;
use physio_report::compile_assessment;
use physio_report::theme::ReportTheme;

fn doc() -> AssessmentDocument {
    AssessmentDocument::default()
}

#[test]
fn empty_document_renders_only_the_default_subjective_sentences() {
    let report = compile_assessment(&doc());

    assert!(report.contains("S (SUBJECTIVE):"));
    assert!(report.contains("Patient reports no pain at this time (0/10 VAS)."));
    assert!(report.contains("Patient denies significant past medical history."));
    assert!(!report.contains("O (OBJECTIVE)"));
    assert!(!report.contains("A (ASSESSMENT)"));
    assert!(!report.contains("P (PLAN)"));
    assert!(!report.contains("Range of Motion"));
}

#[test]
fn section_markup_shape() {
    let report = compile_assessment(&doc());
    assert!(report.starts_with(
        "<div class=\"mb-4\"><strong style=\"color: #ef4444;\">S (SUBJECTIVE):</strong><div class=\"pl-2\"><p>"
    ));
    assert!(report.ends_with("</p></div></div>"));
}

#[test]
fn pain_sentence_with_quality_and_location() {
    let mut d = doc();
    d.subjective.pain_score = "7".to_string();
    d.subjective.pain_quality = "Sharp".to_string();
    d.subjective.pain_location = vec!["Knee".to_string()];

    let report = compile_assessment(&d);
    assert!(report.contains("Pain is rated at 7/10 on the VAS, described as sharp and located in the knee."));
    assert!(!report.contains("no pain"));
}

#[test]
fn zero_pain_uses_the_no_pain_sentence() {
    let mut d = doc();
    d.subjective.pain_score = "0".to_string();
    d.subjective.pain_quality = "Sharp".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("Patient reports no pain at this time (0/10 VAS)."));
    assert!(!report.contains("rated"));
}

#[test]
fn pain_without_quality_omits_the_description() {
    let mut d = doc();
    d.subjective.pain_score = "4".to_string();
    d.subjective.pain_side = "Left".to_string();
    d.subjective.pain_location = vec!["Knee".to_string()];
    d.subjective.pain_location_other = "Calf".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("Pain is rated at 4/10 on the VAS and located in the left knee and calf."));
    assert!(!report.contains("described as"));
}

#[test]
fn pain_score_reads_the_leading_integer() {
    assert_eq!(pain_score("7"), 7);
    assert_eq!(pain_score(" 6.5"), 6);
    assert_eq!(pain_score("8/10"), 8);
    assert_eq!(pain_score("none"), 0);
    assert_eq!(pain_score(""), 0);
    assert_eq!(pain_score("0007"), 7);
    assert_eq!(pain_score("-3"), 0);
}

#[test]
fn overflowing_pain_score_is_not_reported_as_no_pain() {
    assert_eq!(pain_score("99999999999"), u32::MAX);

    let mut d = doc();
    d.subjective.pain_score = "99999999999".to_string();
    let report = compile_assessment(&d);
    assert!(!report.contains("no pain"));
    assert!(report.contains("Pain is rated at"));
}

#[test]
fn radiation_requires_yes_and_sites() {
    let mut d = doc();
    d.subjective.pain_score = "5".to_string();
    d.subjective.pain_radiating = "Yes".to_string();

    assert!(!compile_assessment(&d).contains("radiates"));

    d.subjective.radiating_side = "Right".to_string();
    d.subjective.radiating_sites = vec!["Thigh".to_string(), "Calf".to_string()];
    assert!(compile_assessment(&d).contains("The pain radiates to the right thigh and calf."));

    d.subjective.pain_radiating = "No".to_string();
    assert!(!compile_assessment(&d).contains("radiates"));
}

#[test]
fn history_and_surgery_sentences() {
    let mut d = doc();
    d.subjective.chief_complaint = "Knee Pain".to_string();
    d.subjective.onset = "Sudden".to_string();
    d.subjective.progression = "Improving".to_string();
    d.subjective.aggravating_factors = vec!["Stairs".to_string(), "Squatting".to_string()];
    d.subjective.relieving_factors_other = "Rest".to_string();
    d.subjective.medical_history = vec!["Diabetes".to_string()];
    d.subjective.surgery = "Yes".to_string();
    d.subjective.operated_side = "Left".to_string();
    d.subjective.operation_type = "ACL reconstruction".to_string();
    d.subjective.surgery_time = "6".to_string();
    d.subjective.follow_up_date = "2025-03-01".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("Patient presents with complaints of knee pain."));
    assert!(report.contains("The condition is characterized by a sudden and improving course."));
    assert!(report.contains("Symptoms are aggravated by stairs and squatting."));
    assert!(report.contains("Relief is reported with rest."));
    assert!(report.contains("Past medical history is significant for diabetes."));
    assert!(!report.contains("denies"));
    assert!(report.contains("Patient has a history of left ACL reconstruction approximately 6 weeks ago."));
    assert!(report.contains("Follow-up is scheduled for 2025-03-01."));
}

#[test]
fn subjective_notes_start_a_new_paragraph() {
    let mut d = doc();
    d.subjective.subjective_notes = "Works night shifts".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("history.</p><p>Additional Notes: Works night shifts</p>"));
}

#[test]
fn observation_and_palpation() {
    let mut d = doc();
    d.objective.assistive_devices = vec!["Crutches".to_string()];
    d.objective.gait_pattern = vec!["Antalgic".to_string()];
    d.objective.swelling_severity = vec!["Moderate".to_string()];
    d.objective.swelling_type = vec!["Pitting".to_string()];
    d.objective.swelling_location = "Knee".to_string();
    d.objective.tenderness_grade = vec!["Grade 2".to_string()];
    d.objective.tenderness_site = "Medial joint line".to_string();
    d.objective.balance = "Fair".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains(
        "On observation, the patient utilizes crutches and demonstrates a antalgic gait pattern."
    ));
    assert!(report.contains(
        "Palpation reveals moderate pitting swelling at Knee and grade 2 tenderness at Medial joint line."
    ));
    assert!(report.contains("Balance is rated as fair."));
    assert!(report.contains("O (OBJECTIVE):"));
}

#[test]
fn rom_row_with_only_the_joint_is_not_listed() {
    let mut d = doc();
    d.objective.rom_rows = vec![RomRow {
        joint: "Knee".to_string(),
        ..Default::default()
    }];

    let report = compile_assessment(&d);
    assert!(!report.contains("Range of Motion"));
    assert!(!report.contains("<li>"));
}

#[test]
fn rom_row_with_joint_and_one_more_value_is_listed() {
    let mut d = doc();
    d.objective.rom_rows = vec![RomRow {
        joint: "Knee".to_string(),
        degrees: "120".to_string(),
        ..Default::default()
    }];

    let report = compile_assessment(&d);
    assert!(report.contains("<strong>Range of Motion:</strong><ul><li>Knee - 120°</li></ul>"));
}

#[test]
fn full_rows_render_all_items_in_column_order() {
    let mut d = doc();
    d.objective.rom_rows = vec![
        RomRow {
            side: "Left".to_string(),
            joint: "Knee".to_string(),
            movement: "Flexion".to_string(),
            result: "Limited".to_string(),
            degrees: "95".to_string(),
        },
        RomRow {
            side: "Right".to_string(),
            movement: "Flexion".to_string(),
            ..Default::default()
        },
    ];
    d.objective.mmt_rows = vec![MmtRow {
        side: "Left".to_string(),
        muscle: "Quadriceps".to_string(),
        grade: "4".to_string(),
    }];
    d.objective.special_rows = vec![SpecialTestRow {
        side: String::new(),
        test_name: "Lachman".to_string(),
        result: "Positive".to_string(),
    }];

    let report = compile_assessment(&d);
    assert!(report.contains("<li>Left - Knee - Flexion - Limited - 95°</li></ul>"));
    assert!(!report.contains("Right - Flexion"));
    assert!(report.contains("<strong>Manual Muscle Testing:</strong><ul><li>Left - Quadriceps - Grade 4/5</li></ul>"));
    assert!(report.contains("<strong>Special Tests:</strong><ul><li>Lachman - Positive</li></ul>"));
}

#[test]
fn objective_parts_are_separated_by_line_breaks() {
    let mut d = doc();
    d.objective.balance = "Good".to_string();
    d.objective.objective_notes = "Mild quad atrophy".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("Balance is rated as good.<br>Additional Findings: Mild quad atrophy"));
}

#[test]
fn assessment_section_sentences() {
    let mut d = doc();
    d.assessment.diagnosis = "Patellofemoral Pain Syndrome".to_string();
    d.assessment.problem_list = vec!["Pain".to_string(), "Weakness".to_string()];
    d.assessment.treatment_goals = vec!["Reduce pain".to_string()];
    d.assessment.treatment_goals_other = "Restore function".to_string();
    d.assessment.prognosis = "Good".to_string();
    d.assessment.referring_doctor = "Dr Adams".to_string();
    d.assessment.imaging_date = "2025-01-10".to_string();
    d.assessment.imaging_findings = "No fracture".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("A (ASSESSMENT):"));
    assert!(report.contains("Clinical Impression: Patellofemoral Pain Syndrome."));
    assert!(report.contains("Key problems include pain and weakness."));
    assert!(report.contains("Primary goals are to reduce pain and restore function."));
    assert!(report.contains("Prognosis for recovery is considered good."));
    assert!(report.contains("Patient was referred by Dr Adams."));
    assert!(report.contains("Imaging dated 2025-01-10 shows No fracture."));
}

#[test]
fn plan_section() {
    let mut d = doc();
    d.plan.modalities = vec!["TENS".to_string()];
    d.plan.exercises = vec!["Quad Sets".to_string(), "Heel Slides".to_string()];
    d.plan.total_sessions = "12".to_string();
    d.plan.session_frequency = "3".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains(
        "The treatment plan will focus on: <ul><li>Modalities tens</li><li>Therapeutic exercises quad sets and heel slides</li></ul>"
    ));
    assert!(!report.contains("Manual therapy"));
    assert!(report.contains(
        "<br>Recommended course of care is 3 sessions per week for a total of 12 visits."
    ));
}

#[test]
fn plan_without_frequency_omits_the_cadence() {
    let mut d = doc();
    d.plan.total_sessions = "8".to_string();

    let report = compile_assessment(&d);
    assert!(report.contains("Recommended course of care is for a total of 8 visits."));
}

#[test]
fn user_text_is_html_escaped() {
    let mut d = doc();
    d.subjective.chief_complaint = "<script>alert(1)</script>".to_string();
    d.assessment.diagnosis = "Strain & sprain".to_string();

    let report = compile_assessment(&d);
    assert!(!report.contains("<script>"));
    assert!(report.contains("&lt;script&gt;"));
    assert!(report.contains("Clinical Impression: Strain &amp; sprain."));
}

#[test]
fn compilation_is_deterministic() {
    let mut d = doc();
    d.subjective.pain_score = "3".to_string();
    d.objective.posture = vec!["Kyphotic".to_string()];
    assert_eq!(compile_assessment(&d), compile_assessment(&d));
}

#[test]
fn theme_controls_titles_and_colors() {
    let mut theme = ReportTheme::default();
    theme.subjective.title = "Subjective".to_string();
    theme.subjective.color = "black".to_string();

    let report = physio_report::compile_assessment_with(&doc(), &theme);
    assert!(report.contains("<strong style=\"color: black;\">Subjective:</strong>"));
}
