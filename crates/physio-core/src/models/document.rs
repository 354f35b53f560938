use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::assessment::AssessmentDocument;
use super::field::{FieldMut, split_path};
use super::progress::ProgressNoteDocument;

/// Which of the two documents an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DocumentKind {
    Assessment,
    ProgressNote,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Assessment => "assessment",
            DocumentKind::ProgressNote => "progressNote",
        }
    }

    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Assessment => AssessmentDocument::SECTIONS,
            DocumentKind::ProgressNote => ProgressNoteDocument::SECTIONS,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both documents of one encounter. `Default` is the fixed initial state
/// the application starts from and resets to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DocumentPair {
    pub assessment: AssessmentDocument,
    pub progress_note: ProgressNoteDocument,
}

impl DocumentPair {
    /// Resolve a `section.field` path in the given document.
    pub fn field_mut(&mut self, document: DocumentKind, path: &str) -> Result<FieldMut<'_>, CoreError> {
        let (section, field) = split_path(path)?;

        if !document.sections().contains(&section) {
            return Err(CoreError::UnknownSection {
                document: document.to_string(),
                section: section.to_string(),
            });
        }

        let resolved = match document {
            DocumentKind::Assessment => self.assessment.field_mut(section, field),
            DocumentKind::ProgressNote => self.progress_note.field_mut(section, field),
        };

        resolved.ok_or_else(|| CoreError::UnknownField {
            section: section.to_string(),
            field: field.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
