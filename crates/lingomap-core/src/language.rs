//! Wire types for the `most_spoken_languages` lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Request body sent to the lookup backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRequest {
    /// Region display name, passed through unvalidated.
    pub state_name: String,
    /// Maximum number of languages to return.
    pub num_languages: u32,
}

impl LanguageRequest {
    pub fn new(state_name: impl Into<String>, num_languages: u32) -> Self {
        Self {
            state_name: state_name.into(),
            num_languages,
        }
    }
}

/// One ranked language for a region.
///
/// The backend emits spreadsheet column names verbatim, hence the spaced keys.
/// Any other columns it sends along are kept in `extra` and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(rename = "Mother tongue name")]
    pub name: String,
    /// Urban population count. Kept as a JSON number so integers print without `.0`.
    /// Backends that only report totals omit it.
    #[serde(rename = "Urban P", default, skip_serializing_if = "Option::is_none")]
    pub urban_population: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, urban_population: impl Into<Number>) -> Self {
        Self {
            name: name.into(),
            urban_population: Some(urban_population.into()),
            extra: Map::new(),
        }
    }

    /// The `"<name>: <count>"` line shown in the hover card. A missing count
    /// leaves the part after the colon empty.
    pub fn display_line(&self) -> String {
        match &self.urban_population {
            Some(count) => format!("{}: {}", self.name, count),
            None => format!("{}: ", self.name),
        }
    }
}

/// Response body returned by the lookup backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub top_languages: Vec<LanguageEntry>,
}
