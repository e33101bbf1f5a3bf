use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pipeline::LensError;

/// Application-level constants
pub const APP_NAME: &str = "DiaLens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity string reported to lens hosts.
pub const SPECIFICATION: &str = "1.0.0-dialens-hypo";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "dialens=info"
}

/// ePI bundle identifiers known to describe insulin products.
pub const INSULIN_BUNDLE_IDENTIFIERS: &[&str] = &[
    "epibundle-humalog-en",
    "epibundle-humalog-pt",
    "epibundle-levemir-en",
    "epibundle-levemir-da",
    "epibundle-lantus-es",
    "epibundle-novorapid-da",
    "epibundle-tresiba-en",
];

/// MedicinalProductDefinition identifiers of authorised insulin products.
pub const INSULIN_PRODUCT_IDENTIFIERS: &[&str] = &[
    // Humalog (insulin lispro)
    "EU/1/96/007/002",
    "EU/1/96/007/004",
    // NovoRapid (insulin aspart)
    "EU/1/99/119/001",
    "EU/1/99/119/003",
    // Lantus (insulin glargine)
    "EU/1/00/134/001",
    "EU/1/00/134/005",
    // Levemir (insulin detemir)
    "EU/1/04/278/001",
    "EU/1/04/278/003",
    // Tresiba (insulin degludec)
    "EU/1/12/807/001",
    "EU/1/12/807/004",
];

/// Runtime lens configuration.
///
/// Defaults reproduce the compiled-in allow-lists. Hosts can swap the lists
/// to retarget the lens to other drug classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    /// Top-level bundle identifier values that put a document in scope.
    pub bundle_identifiers: Vec<String>,
    /// Product definition identifier values that put a document in scope.
    pub product_identifiers: Vec<String>,
    /// Render timelines from the built-in catalogue when a document carries
    /// neither annotations nor embedded insulin profiles.
    pub fallback_to_builtin_profiles: bool,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            bundle_identifiers: INSULIN_BUNDLE_IDENTIFIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            product_identifiers: INSULIN_PRODUCT_IDENTIFIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback_to_builtin_profiles: false,
        }
    }
}

impl LensConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LensError> {
        serde_json::from_str(json).map_err(|e| LensError::ConfigParse(e.to_string()))
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, LensError> {
        let json = std::fs::read_to_string(path).map_err(|e| LensError::ConfigLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            bundles = config.bundle_identifiers.len(),
            products = config.product_identifiers.len(),
            "Loaded lens configuration"
        );
        Ok(config)
    }
}
