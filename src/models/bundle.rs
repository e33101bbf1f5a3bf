//! Structured ePI bundle as delivered by the document source.
//!
//! Only the fields the lens reads are typed. Identifiers and extensions stay
//! as raw JSON so that shape variations never fail deserialization; the
//! pipeline walks them leniently.

use serde::{Deserialize, Serialize};

pub const RESOURCE_COMPOSITION: &str = "Composition";
pub const RESOURCE_PRODUCT_DEFINITION: &str = "MedicinalProductDefinition";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// A single Identifier in FHIR, tolerated as a list too.
    #[serde(default)]
    pub identifier: Option<serde_json::Value>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
    /// Non-standard pre-computed insulin profiles (see `reference`).
    #[serde(default, rename = "dialensInsulinProfiles")]
    pub insulin_profiles: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(default)]
    pub full_url: Option<String>,
    #[serde(default)]
    pub resource: Option<Resource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub identifier: Option<serde_json::Value>,
    #[serde(default)]
    pub extension: Vec<serde_json::Value>,
}

impl Bundle {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resources of all entries, in document order. Entries without a
    /// resource are skipped.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }

    pub fn compositions(&self) -> impl Iterator<Item = &Resource> {
        self.resources().filter(|r| r.is_composition())
    }

    pub fn identifier_values(&self) -> Vec<&str> {
        identifier_values(self.identifier.as_ref())
    }
}

impl Resource {
    pub fn is_composition(&self) -> bool {
        self.resource_type == RESOURCE_COMPOSITION
    }

    pub fn is_product_definition(&self) -> bool {
        self.resource_type == RESOURCE_PRODUCT_DEFINITION
    }

    pub fn identifier_values(&self) -> Vec<&str> {
        identifier_values(self.identifier.as_ref())
    }
}

/// Collect `value` strings from an Identifier object or an array of them.
fn identifier_values(identifier: Option<&serde_json::Value>) -> Vec<&str> {
    fn value_of(v: &serde_json::Value) -> Option<&str> {
        v.get("value")?.as_str()
    }

    match identifier {
        Some(serde_json::Value::Array(items)) => items.iter().filter_map(value_of).collect(),
        Some(obj @ serde_json::Value::Object(_)) => value_of(obj).into_iter().collect(),
        _ => vec![],
    }
}
