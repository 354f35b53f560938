//! Queries backing the exercise and modality selectors.

use physio_core::models::catalog::{Exercise, Modality};

use crate::Catalog;

/// Exercise selector filters. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    /// Case-insensitive substring of the exercise name.
    pub search: String,
    /// Exact category.
    pub category: Option<String>,
    /// Body region the exercise must target.
    pub region: Option<String>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let needle = self.search.trim().to_lowercase();
        let name_matches = needle.is_empty() || exercise.name.to_lowercase().contains(&needle);
        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|c| c.is_empty() || exercise.category == c);
        let region_matches = self
            .region
            .as_deref()
            .is_none_or(|r| r.is_empty() || exercise.region.iter().any(|er| er == r));

        name_matches && category_matches && region_matches
    }
}

impl Catalog {
    pub fn search_exercises(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Distinct exercise categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.exercises.iter().map(|e| e.category.as_str()))
    }

    /// Distinct body regions across all exercises, in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        distinct(
            self.exercises
                .iter()
                .flat_map(|e| e.region.iter().map(String::as_str)),
        )
    }

    /// Modalities whose device name contains `query`, ignoring case.
    pub fn search_modalities(&self, query: &str) -> Vec<&Modality> {
        let needle = query.trim().to_lowercase();
        self.modalities
            .iter()
            .filter(|m| m.device.to_lowercase().contains(&needle))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
