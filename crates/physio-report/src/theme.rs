use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStyle {
    pub title: String,
    /// Any CSS color.
    pub color: String,
}

impl SectionStyle {
    fn new(title: &str, color: &str) -> Self {
        Self {
            title: title.to_string(),
            color: color.to_string(),
        }
    }
}

/// Section titles and colors of a compiled report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTheme {
    pub subjective: SectionStyle,
    pub objective: SectionStyle,
    pub assessment: SectionStyle,
    pub plan: SectionStyle,
    /// Color of the progress note's `SESSION #N` banner.
    pub session_color: String,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self {
            subjective: SectionStyle::new("S (SUBJECTIVE)", "#ef4444"),
            objective: SectionStyle::new("O (OBJECTIVE)", "#22c55e"),
            assessment: SectionStyle::new("A (ASSESSMENT)", "#8b5cf6"),
            plan: SectionStyle::new("P (PLAN)", "#3b82f6"),
            session_color: "#4b5563".to_string(),
        }
    }
}
