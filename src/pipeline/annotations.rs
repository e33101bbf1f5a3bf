//! Recovery of hypoglycaemia annotations from Composition extensions.
//!
//! Each Composition extension may link an HTML element to a coded concept:
//!
//! ```json
//! { "url": ".../HtmlElementLink",
//!   "extension": [
//!     { "url": "elementClass", "valueString": "Onset of action: 15 minutes" },
//!     { "url": "concept", "valueCodeableReference": {
//!         "concept": { "coding": [ { "code": "hypo-onset" } ] } } } ] }
//! ```
//!
//! Annotations are optional per element: any missing field along this path
//! skips the element silently.

use std::str::FromStr;

use serde_json::Value;

use crate::models::{Bundle, HypoCategory, RawAnnotation};

use super::LensError;

const CONCEPT_URL: &str = "concept";

/// Fail with `NoCompositionFound` unless the bundle contains a Composition.
pub fn ensure_composition(bundle: &Bundle) -> Result<(), LensError> {
    if bundle.compositions().next().is_none() {
        return Err(LensError::NoCompositionFound);
    }
    Ok(())
}

/// Walk every Composition's extensions in document order and collect the
/// free-text values tagged with a hypo category code.
pub fn extract_annotations(bundle: &Bundle) -> Result<Vec<RawAnnotation>, LensError> {
    ensure_composition(bundle)?;

    let annotations: Vec<RawAnnotation> = bundle
        .compositions()
        .flat_map(|composition| composition.extension.iter())
        .flat_map(annotations_from_extension)
        .collect();

    tracing::debug!(count = annotations.len(), "Extracted hypo annotations");
    Ok(annotations)
}

fn annotations_from_extension(extension: &Value) -> Vec<RawAnnotation> {
    let Some(children) = extension.get("extension").and_then(Value::as_array) else {
        return vec![];
    };

    let Some(codings) = children
        .iter()
        .find(|child| url_of(child) == Some(CONCEPT_URL))
        .and_then(|concept| concept.get("valueCodeableReference"))
        .and_then(|reference| reference.get("concept"))
        .and_then(|concept| concept.get("coding"))
        .and_then(Value::as_array)
    else {
        return vec![];
    };

    let Some(text) = children
        .iter()
        .filter(|child| url_of(child) != Some(CONCEPT_URL))
        .find_map(free_text_of)
    else {
        return vec![];
    };

    codings
        .iter()
        .filter_map(|coding| coding.get("code").and_then(Value::as_str))
        .filter_map(|code| HypoCategory::from_str(code).ok())
        .map(|category| RawAnnotation::new(text, category))
        .collect()
}

fn url_of(extension: &Value) -> Option<&str> {
    extension.get("url").and_then(Value::as_str)
}

/// Non-blank `valueString` (or `valueMarkdown`) of a sibling extension.
fn free_text_of(extension: &Value) -> Option<&str> {
    ["valueString", "valueMarkdown"]
        .iter()
        .find_map(|key| extension.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn link(text: &str, codes: &[&str]) -> Value {
        let coding: Vec<Value> = codes
            .iter()
            .map(|c| json!({ "system": "https://www.gravitatehealth.eu/sid/doc", "code": c }))
            .collect();
        json!({
            "url": "http://hl7.eu/fhir/ig/gravitate-health/StructureDefinition/HtmlElementLink",
            "extension": [
                { "url": "elementClass", "valueString": text },
                { "url": "concept", "valueCodeableReference": { "concept": { "coding": coding } } }
            ]
        })
    }

    fn bundle_with(extensions: Vec<Value>) -> Bundle {
        serde_json::from_value(json!({
            "entry": [ { "resource": { "resourceType": "Composition", "extension": extensions } } ]
        }))
        .unwrap()
    }

    #[test]
    fn extracts_tagged_annotations_in_order() {
        let bundle = bundle_with(vec![
            link("Onset of action within 15 minutes", &["hypo-onset"]),
            link("Alcohol may increase the risk", &["hypo-increase-factor"]),
        ]);
        let annotations = extract_annotations(&bundle).unwrap();
        assert_eq!(
            annotations,
            vec![
                RawAnnotation::new("Onset of action within 15 minutes", HypoCategory::Onset),
                RawAnnotation::new("Alcohol may increase the risk", HypoCategory::IncreaseFactor),
            ]
        );
    }

    #[test]
    fn ignores_codes_outside_category_set() {
        let bundle = bundle_with(vec![
            link("pregnancy", &["pregnancyCategory"]),
            link("Peak effect after 1 to 3 hours", &["other", "hypo-peak"]),
        ]);
        let annotations = extract_annotations(&bundle).unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].category, HypoCategory::Peak);
    }

    #[test]
    fn malformed_extensions_are_skipped() {
        let bundle = bundle_with(vec![
            json!({ "url": "no-children" }),
            json!({ "extension": "not-an-array" }),
            json!({ "extension": [ { "url": "elementClass", "valueString": "orphan text" } ] }),
            json!({ "extension": [
                { "url": "concept", "valueCodeableReference": { "concept": { "coding": [ { "code": "hypo-peak" } ] } } }
            ] }),
            json!({ "extension": [
                { "url": "elementClass", "valueString": "   " },
                { "url": "concept", "valueCodeableReference": { "concept": { "coding": [ { "code": "hypo-peak" } ] } } }
            ] }),
            json!({ "extension": [
                { "url": "elementClass", "valueString": "no coding list" },
                { "url": "concept", "valueCodeableReference": { "concept": {} } }
            ] }),
            link("Duration up to 5 hours", &["hypo-duration"]),
        ]);
        let annotations = extract_annotations(&bundle).unwrap();
        assert_eq!(
            annotations,
            vec![RawAnnotation::new("Duration up to 5 hours", HypoCategory::Duration)]
        );
    }

    #[test]
    fn walks_every_composition() {
        let bundle: Bundle = serde_json::from_value(json!({
            "entry": [
                { "resource": { "resourceType": "Composition", "extension": [ link("first onset", &["hypo-onset"]) ] } },
                { "resource": { "resourceType": "MedicinalProductDefinition", "extension": [ link("skipped", &["hypo-peak"]) ] } },
                { "resource": { "resourceType": "Composition", "extension": [ link("second onset", &["hypo-onset"]) ] } }
            ]
        }))
        .unwrap();
        let texts: Vec<String> = extract_annotations(&bundle)
            .unwrap()
            .into_iter()
            .map(|a| a.text)
            .collect();
        assert_eq!(texts, vec!["first onset", "second onset"]);
    }

    #[test]
    fn composition_without_extensions_yields_nothing() {
        let bundle = bundle_with(vec![]);
        assert!(extract_annotations(&bundle).unwrap().is_empty());
    }

    #[test]
    fn no_composition_is_error() {
        let bundle: Bundle = serde_json::from_value(json!({
            "entry": [ { "resource": { "resourceType": "MedicinalProductDefinition" } } ]
        }))
        .unwrap();
        let err = extract_annotations(&bundle).unwrap_err();
        assert!(matches!(err, LensError::NoCompositionFound));
    }

    #[test]
    fn markdown_value_accepted() {
        let bundle = bundle_with(vec![json!({ "extension": [
            { "url": "elementClass", "valueMarkdown": "**Stress** may reduce insulin effect" },
            { "url": "concept", "valueCodeableReference": { "concept": { "coding": [ { "code": "hypo-decrease-factor" } ] } } }
        ] })]);
        let annotations = extract_annotations(&bundle).unwrap();
        assert_eq!(annotations[0].text, "**Stress** may reduce insulin effect");
    }
}
