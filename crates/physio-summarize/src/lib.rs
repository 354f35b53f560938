//! physio-summarize
//!
//! AI summarization of compiled reports. [`summarize_report`] is the only
//! entry point the application uses: it never fails, and turns every error
//! into a fixed placeholder message.

pub mod bedrock;
pub mod error;

use std::future::Future;

use tracing::{error, info};

use crate::error::SummarizeError;

pub use bedrock::BedrockSummarizer;

/// Reports with fewer trimmed characters than this are not sent.
pub const MIN_REPORT_CHARS: usize = 20;

pub const TOO_SHORT_MESSAGE: &str = "The report is too short to summarize.";

pub const FAILURE_MESSAGE: &str = "There was an issue generating the summary. The AI model may be \
                                   temporarily unavailable. Please try again later.";

pub const SYSTEM_PROMPT: &str = "You are a highly skilled medical scribe specializing in physical \
                                 therapy documentation. Your summaries are precise and clinically relevant.";

/// Something that can condense a plain-text report.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> impl Future<Output = Result<String, SummarizeError>> + Send;
}

/// The user message sent alongside [`SYSTEM_PROMPT`].
pub fn build_prompt(report_text: &str) -> String {
    format!(
        "Summarize the following physiotherapy SOAP note. Focus on the patient's primary complaint, \
         key objective findings (like ROM/MMT deficits), the clinical diagnosis, and the main \
         treatment interventions planned. Keep the summary concise and professional for a quick \
         clinical overview.\n\nREPORT:\n{report_text}"
    )
}

/// Summarize a report, or explain why no summary is available.
pub async fn summarize_report<S: Summarizer>(summarizer: &S, report_text: &str) -> String {
    let trimmed = report_text.trim();
    if trimmed.chars().count() < MIN_REPORT_CHARS {
        info!(chars = trimmed.chars().count(), "report too short to summarize");
        return TOO_SHORT_MESSAGE.to_string();
    }

    match summarizer.summarize(trimmed).await {
        Ok(summary) => {
            info!(chars = summary.len(), "report summarized");
            summary
        }
        Err(e) => {
            error!(error = %e, "summarization failed");
            FAILURE_MESSAGE.to_string()
        }
    }
}
