use crate::models::{Bundle, Language};

/// Template families with a dedicated translation, matched by code prefix.
const SUPPORTED_PREFIXES: &[(&str, Language)] = &[
    ("pt", Language::Portuguese),
    ("es", Language::Spanish),
    ("da", Language::Danish),
];

/// Raw language code declared by the document.
///
/// The first Composition's `language` wins, then the bundle-level `language`.
pub fn document_language(bundle: &Bundle) -> Option<&str> {
    fn declared(code: Option<&str>) -> Option<&str> {
        code.map(str::trim).filter(|code| !code.is_empty())
    }

    let from_composition = bundle
        .compositions()
        .next()
        .and_then(|c| declared(c.language.as_deref()));

    from_composition.or_else(|| declared(bundle.language.as_deref()))
}

/// Map a language code to its template family.
///
/// Case-insensitive prefix match so regional variants ("pt-PT", "es-419")
/// land on the base family. Anything else is English.
pub fn language_from_code(code: Option<&str>) -> Language {
    let Some(code) = code else {
        return Language::default();
    };
    let lower = code.to_lowercase();

    SUPPORTED_PREFIXES
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|(_, language)| *language)
        .unwrap_or_default()
}

/// Resolve the panel language for a bundle.
pub fn resolve_language(bundle: &Bundle) -> Language {
    let code = document_language(bundle);
    let language = language_from_code(code);
    tracing::debug!(code = ?code, language = %language, "Resolved panel language");
    language
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bundle(value: serde_json::Value) -> Bundle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn composition_language_pt_br_is_portuguese() {
        let doc = bundle(json!({
            "entry": [ { "resource": { "resourceType": "Composition", "language": "pt-BR" } } ]
        }));
        assert_eq!(resolve_language(&doc), Language::Portuguese);
    }

    #[test]
    fn no_language_anywhere_is_english() {
        let doc = bundle(json!({
            "entry": [ { "resource": { "resourceType": "Composition" } } ]
        }));
        assert_eq!(document_language(&doc), None);
        assert_eq!(resolve_language(&doc), Language::English);
    }

    #[test]
    fn composition_language_beats_bundle_language() {
        let doc = bundle(json!({
            "language": "es",
            "entry": [ { "resource": { "resourceType": "Composition", "language": "da-DK" } } ]
        }));
        assert_eq!(resolve_language(&doc), Language::Danish);
    }

    #[test]
    fn bundle_language_used_when_composition_silent() {
        let doc = bundle(json!({
            "language": "ES-es",
            "entry": [ { "resource": { "resourceType": "Composition" } } ]
        }));
        assert_eq!(resolve_language(&doc), Language::Spanish);
    }

    #[test]
    fn blank_composition_language_falls_through_to_bundle() {
        let doc = bundle(json!({
            "language": "da",
            "entry": [ { "resource": { "resourceType": "Composition", "language": "  " } } ]
        }));
        assert_eq!(document_language(&doc), Some("da"));
        assert_eq!(resolve_language(&doc), Language::Danish);
    }

    #[test]
    fn only_first_composition_is_consulted() {
        let doc = bundle(json!({
            "entry": [
                { "resource": { "resourceType": "MedicinalProductDefinition", "language": "da" } },
                { "resource": { "resourceType": "Composition" } },
                { "resource": { "resourceType": "Composition", "language": "pt" } }
            ]
        }));
        assert_eq!(resolve_language(&doc), Language::English);
    }

    #[test]
    fn unrecognized_codes_fall_back_to_english() {
        assert_eq!(language_from_code(Some("fr-FR")), Language::English);
        assert_eq!(language_from_code(Some("en-GB")), Language::English);
        assert_eq!(language_from_code(Some("")), Language::English);
        assert_eq!(language_from_code(None), Language::English);
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert_eq!(language_from_code(Some("PT")), Language::Portuguese);
        assert_eq!(language_from_code(Some("Da")), Language::Danish);
        assert_eq!(language_from_code(Some("es-419")), Language::Spanish);
    }
}
