use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The mapping-based row shape used at the serialization boundary
/// (column key → cell value).
pub type DynamicRow = BTreeMap<String, String>;

/// A row of a dynamic table. Columns are fixed per row type; cells are
/// addressed by their column key.
pub trait TableRow: Default {
    /// Column keys in display order.
    const COLUMNS: &'static [&'static str];

    /// The column that names what the row measures.
    const KEY: &'static str;

    /// Set a cell. Returns `false` when `key` is not a column of this table.
    fn set(&mut self, key: &str, value: String) -> bool;

    fn get(&self, key: &str) -> Option<&str>;

    /// Build a row from the mapping-based shape. Unknown keys are dropped.
    fn from_dynamic(row: &DynamicRow) -> Self {
        let mut typed = Self::default();
        for (key, value) in row {
            typed.set(key, value.clone());
        }
        typed
    }

    fn to_dynamic(&self) -> DynamicRow {
        Self::COLUMNS
            .iter()
            .map(|key| ((*key).to_string(), self.get(key).unwrap_or_default().to_string()))
            .collect()
    }

    /// Cell values in column order, skipping empty cells.
    fn filled(&self) -> Vec<&str> {
        Self::COLUMNS
            .iter()
            .filter_map(|key| self.get(key))
            .filter(|v| !v.trim().is_empty())
            .collect()
    }
}

/// Range-of-motion measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RomRow {
    pub side: String,
    pub joint: String,
    pub movement: String,
    pub result: String,
    pub degrees: String,
}

/// Manual muscle test, graded 0–5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MmtRow {
    pub side: String,
    pub muscle: String,
    pub grade: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SpecialTestRow {
    pub side: String,
    pub test_name: String,
    pub result: String,
}

/// Free-form session measurement recorded on a progress note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MeasurementRow {
    pub side: String,
    pub measure: String,
    pub value: String,
    pub unit: String,
}

impl TableRow for RomRow {
    const COLUMNS: &'static [&'static str] = &["side", "joint", "movement", "result", "degrees"];
    const KEY: &'static str = "joint";

    fn set(&mut self, key: &str, value: String) -> bool {
        let cell = match key {
            "side" => &mut self.side,
            "joint" => &mut self.joint,
            "movement" => &mut self.movement,
            "result" => &mut self.result,
            "degrees" => &mut self.degrees,
            _ => return false,
        };
        *cell = value;
        true
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "side" => Some(&self.side),
            "joint" => Some(&self.joint),
            "movement" => Some(&self.movement),
            "result" => Some(&self.result),
            "degrees" => Some(&self.degrees),
            _ => None,
        }
    }
}

impl TableRow for MmtRow {
    const COLUMNS: &'static [&'static str] = &["side", "muscle", "grade"];
    const KEY: &'static str = "muscle";

    fn set(&mut self, key: &str, value: String) -> bool {
        let cell = match key {
            "side" => &mut self.side,
            "muscle" => &mut self.muscle,
            "grade" => &mut self.grade,
            _ => return false,
        };
        *cell = value;
        true
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "side" => Some(&self.side),
            "muscle" => Some(&self.muscle),
            "grade" => Some(&self.grade),
            _ => None,
        }
    }
}

impl TableRow for SpecialTestRow {
    const COLUMNS: &'static [&'static str] = &["side", "testName", "result"];
    const KEY: &'static str = "testName";

    fn set(&mut self, key: &str, value: String) -> bool {
        let cell = match key {
            "side" => &mut self.side,
            "testName" => &mut self.test_name,
            "result" => &mut self.result,
            _ => return false,
        };
        *cell = value;
        true
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "side" => Some(&self.side),
            "testName" => Some(&self.test_name),
            "result" => Some(&self.result),
            _ => None,
        }
    }
}

impl TableRow for MeasurementRow {
    const COLUMNS: &'static [&'static str] = &["side", "measure", "value", "unit"];
    const KEY: &'static str = "measure";

    fn set(&mut self, key: &str, value: String) -> bool {
        let cell = match key {
            "side" => &mut self.side,
            "measure" => &mut self.measure,
            "value" => &mut self.value,
            "unit" => &mut self.unit,
            _ => return false,
        };
        *cell = value;
        true
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "side" => Some(&self.side),
            "measure" => Some(&self.measure),
            "value" => Some(&self.value),
            "unit" => Some(&self.unit),
            _ => None,
        }
    }
}
