//! physio-core
//!
//! Pure domain types for physiotherapy documentation: the Assessment and
//! Progress Note documents, their typed table rows and parameterized
//! selections, and the shapes of the reference catalog.
//! No I/O. This is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
