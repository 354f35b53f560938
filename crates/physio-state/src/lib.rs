//! physio-state
//!
//! The single mutation path for both documents: a closed vocabulary of
//! actions, a total reducer that maps `(documents, action)` to new documents,
//! the protocol application engine, and drafts for the selection dialogs.

pub mod action;
pub mod draft;
pub mod error;
pub mod protocol;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use reducer::reduce;
pub use store::Store;
