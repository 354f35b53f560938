//! physio-report
//!
//! Projects the documents into clinical narrative markup, and that markup
//! into plain text and DOCX.
//!
//! Compilation is pure and total: any document, however incomplete, yields
//! a report. Fragments whose inputs are empty are left out, and a section
//! with no content loses its heading.

pub mod assessment;
pub mod blocks;
pub mod compile;
pub mod docx;
pub mod error;
pub mod list;
pub mod markup;
pub mod plain;
pub mod progress;
pub mod styles;
pub mod theme;

pub use compile::{compile_assessment, compile_assessment_with, compile_progress, compile_progress_with};
pub use docx::export_docx;
pub use plain::to_plain_text;
