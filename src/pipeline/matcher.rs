use crate::config::LensConfig;
use crate::models::Bundle;

use super::LensError;

/// Fail with `InvalidDocument` unless the bundle carries at least one entry.
pub fn ensure_has_entries(bundle: &Bundle) -> Result<(), LensError> {
    if bundle.entry.is_empty() {
        return Err(LensError::InvalidDocument("bundle has no entries".into()));
    }
    Ok(())
}

/// Decide whether the bundle is an in-scope insulin ePI.
///
/// Matches on the bundle's own identifier first, then on any
/// MedicinalProductDefinition identifier. Both lists come from `config`.
pub fn matches_insulin(bundle: &Bundle, config: &LensConfig) -> Result<bool, LensError> {
    ensure_has_entries(bundle)?;

    let bundle_hit = bundle
        .identifier_values()
        .into_iter()
        .find(|id| contains(&config.bundle_identifiers, id));
    if let Some(id) = bundle_hit {
        tracing::debug!(bundle_id = id, "Matched insulin bundle identifier");
        return Ok(true);
    }

    let product_hit = bundle
        .resources()
        .filter(|r| r.is_product_definition())
        .flat_map(|r| r.identifier_values())
        .find(|id| contains(&config.product_identifiers, id));
    if let Some(id) = product_hit {
        tracing::debug!(product_id = id, "Matched insulin product identifier");
        return Ok(true);
    }

    Ok(false)
}

fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|candidate| candidate == value)
}
