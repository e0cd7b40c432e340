//! Parsed "Area Affected" entries.

use serde::{Deserialize, Serialize};

/// One (state, county) pair parsed from an Area Affected cell.
///
/// Either side may be absent: a bare state has no county, and an empty
/// state label parses to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaPair {
    pub state: Option<String>,
    pub county: Option<String>,
}

impl AreaPair {
    pub fn new(state: Option<&str>, county: Option<&str>) -> Self {
        Self {
            state: state.map(str::to_string),
            county: county.map(str::to_string),
        }
    }

    /// A pair with both sides absent.
    pub fn empty() -> Self {
        Self {
            state: None,
            county: None,
        }
    }
}

/// An [`AreaPair`] tagged with the zero-based position of its source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub row_index: usize,
    #[serde(flatten)]
    pub area: AreaPair,
}

impl AreaRecord {
    pub fn new(row_index: usize, area: AreaPair) -> Self {
        Self { row_index, area }
    }

    pub fn state(&self) -> Option<&str> {
        self.area.state.as_deref()
    }

    pub fn county(&self) -> Option<&str> {
        self.area.county.as_deref()
    }
}
