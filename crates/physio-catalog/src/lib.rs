//! physio-catalog
//!
//! Reference data for the documentation forms: treatment protocols with their
//! phases, the exercise library, and modality presets. Pure data; the core
//! only ever reads from it.

pub mod error;
pub mod query;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use physio_core::models::catalog::{Exercise, Modality, Protocol};

use crate::error::CatalogError;

const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

/// The full reference data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub protocols: Vec<Protocol>,
    pub modalities: Vec<Modality>,
}

impl Catalog {
    /// The catalog bundled with this build.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;

        debug!(
            exercises = catalog.exercises.len(),
            protocols = catalog.protocols.len(),
            modalities = catalog.modalities.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Exercises, protocols and modalities are looked up by natural key,
    /// so each key must be unique within its list.
    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("exercise", self.exercises.iter().map(|e| e.id.as_str()))?;
        ensure_unique("protocol", self.protocols.iter().map(|p| p.id.as_str()))?;
        ensure_unique("modality", self.modalities.iter().map(|m| m.device.as_str()))?;

        for protocol in &self.protocols {
            for phase in &protocol.phases {
                ensure_unique("phase exercise", phase.exercises.iter().map(|e| e.id.as_str()))?;
            }
        }

        Ok(())
    }

    pub fn protocol(&self, id: &str) -> Option<&Protocol> {
        self.protocols.iter().find(|p| p.id == id)
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn modality(&self, device: &str) -> Option<&Modality> {
        self.modalities.iter().find(|m| m.device == device)
    }
}

fn ensure_unique<'a>(kind: &str, keys: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.is_empty() {
            return Err(CatalogError::MissingKey(kind.to_string()));
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                kind: kind.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
