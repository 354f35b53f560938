//! Name-based field addressing for document sections.
//!
//! The UI addresses fields as `section.field` using the same camelCase names
//! the documents serialize with. Each section maps those names onto its
//! typed fields; anything that is not a scalar or a string set (tables,
//! parameterized selections) is not addressable this way.

use crate::error::CoreError;

/// A mutable handle to one addressable field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// A free-text or single-choice field.
    Text(&'a mut String),
    /// A multi-select field, stored as an ordered list of strings.
    Set(&'a mut Vec<String>),
}

/// A document section whose scalar and multi-select fields can be looked up
/// by their serialized name.
pub trait Section {
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

/// Split a `section.field` path into its two parts.
pub fn split_path(path: &str) -> Result<(&str, &str), CoreError> {
    match path.split_once('.') {
        Some((section, field)) if !section.is_empty() && !field.is_empty() && !field.contains('.') => {
            Ok((section, field))
        }
        _ => Err(CoreError::InvalidPath(path.to_string())),
    }
}

/// Implement [`Section`] by listing which struct fields are text and which
/// are string sets, along with their serialized names.
macro_rules! section_fields {
    (
        $ty:ty {
            text: [$($text:ident => $text_name:literal),* $(,)?],
            set: [$($set:ident => $set_name:literal),* $(,)?] $(,)?
        }
    ) => {
        impl $crate::models::field::Section for $ty {
            fn field_mut(&mut self, name: &str) -> Option<$crate::models::field::FieldMut<'_>> {
                match name {
                    $($text_name => Some($crate::models::field::FieldMut::Text(&mut self.$text)),)*
                    $($set_name => Some($crate::models::field::FieldMut::Set(&mut self.$set)),)*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use section_fields;
