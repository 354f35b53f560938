use serde::{Deserialize, Serialize};

/// Fonts and sizes for DOCX export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and list items (e.g. "Calibri").
    pub body_font: String,

    /// Font for section titles.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Section title font size in points.
    pub heading_size: usize,

    /// Color section titles the way the on-screen report does.
    pub colored_headings: bool,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading_size: 13,
            colored_headings: true,
        }
    }
}
