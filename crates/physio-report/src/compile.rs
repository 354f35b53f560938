use tracing::debug;

use physio_core::models::assessment::AssessmentDocument;
use physio_core::models::progress::ProgressNoteDocument;

use crate::markup::{banner, escape, is_blank, section};
use crate::theme::ReportTheme;
use crate::{assessment, progress};

/// Compile the Assessment Document with the default theme.
pub fn compile_assessment(doc: &AssessmentDocument) -> String {
    compile_assessment_with(doc, &ReportTheme::default())
}

pub fn compile_assessment_with(doc: &AssessmentDocument, theme: &ReportTheme) -> String {
    let report = [
        section(
            &theme.subjective.title,
            &theme.subjective.color,
            &assessment::subjective(&doc.subjective),
        ),
        section(
            &theme.objective.title,
            &theme.objective.color,
            &assessment::objective(&doc.objective),
        ),
        section(
            &theme.assessment.title,
            &theme.assessment.color,
            &assessment::assessment(&doc.assessment),
        ),
        section(&theme.plan.title, &theme.plan.color, &assessment::plan(&doc.plan)),
    ]
    .concat();

    debug!(len = report.len(), "assessment report compiled");
    report
}

/// Compile the Progress Note Document with the default theme.
pub fn compile_progress(doc: &ProgressNoteDocument) -> String {
    compile_progress_with(doc, &ReportTheme::default())
}

pub fn compile_progress_with(doc: &ProgressNoteDocument, theme: &ReportTheme) -> String {
    let mut report = String::new();

    if !is_blank(&doc.session.number) {
        let label = format!("SESSION #{}", escape(doc.session.number.trim()));
        report.push_str(&banner(&label, &theme.session_color));
    }

    report.push_str(&section(
        &theme.subjective.title,
        &theme.subjective.color,
        &progress::subjective(&doc.subjective),
    ));
    report.push_str(&section(
        &theme.objective.title,
        &theme.objective.color,
        &progress::objective(&doc.objective),
    ));
    report.push_str(&section(
        &theme.assessment.title,
        &theme.assessment.color,
        &progress::assessment(&doc.assessment),
    ));
    report.push_str(&section(
        &theme.plan.title,
        &theme.plan.color,
        &progress::plan(&doc.plan, &doc.distribution, &doc.discharge),
    ));

    debug!(len = report.len(), "progress report compiled");
    report
}
