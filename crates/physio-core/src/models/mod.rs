pub mod field;

pub mod assessment;
pub mod catalog;
pub mod document;
pub mod progress;
pub mod rows;
pub mod selection;
