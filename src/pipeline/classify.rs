use crate::models::{RawAnnotation, TimeRiskProfile};

/// Panel slot an annotation is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskSlot {
    Onset,
    Peak,
    Duration,
    IncreaseFactor,
    DecreaseFactor,
}

/// Keyword rules, evaluated top to bottom. The first rule with any keyword
/// contained in the lower-cased text decides the slot.
const CLASSIFICATION_RULES: &[(&[&str], RiskSlot)] = &[
    (&["onset"], RiskSlot::Onset),
    (&["peak"], RiskSlot::Peak),
    (&["duration"], RiskSlot::Duration),
    (&["increase", "enhance", "higher risk"], RiskSlot::IncreaseFactor),
    (&["decrease", "reduce", "lower risk"], RiskSlot::DecreaseFactor),
];

/// Classify one annotation text. `None` means noise.
pub fn classify_annotation(text: &str) -> Option<RiskSlot> {
    let lower = text.to_lowercase();

    CLASSIFICATION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, slot)| *slot)
}

/// Fold annotations into a `TimeRiskProfile`.
///
/// Singular slots keep the first annotation in traversal order. List slots
/// keep every distinct text in order of first appearance.
pub fn classify_annotations(annotations: &[RawAnnotation]) -> TimeRiskProfile {
    let profile = annotations
        .iter()
        .fold(TimeRiskProfile::default(), |mut profile, annotation| {
            let text = &annotation.text;
            match classify_annotation(text) {
                Some(RiskSlot::Onset) => fill_once(&mut profile.onset, text),
                Some(RiskSlot::Peak) => fill_once(&mut profile.peak, text),
                Some(RiskSlot::Duration) => fill_once(&mut profile.duration, text),
                Some(RiskSlot::IncreaseFactor) => push_unique(&mut profile.increase_factors, text),
                Some(RiskSlot::DecreaseFactor) => push_unique(&mut profile.decrease_factors, text),
                None => {
                    tracing::debug!(
                        category = %annotation.category,
                        "Annotation matched no keyword rule, dropped"
                    );
                }
            }
            profile
        });

    tracing::debug!(
        onset = profile.onset.is_some(),
        peak = profile.peak.is_some(),
        duration = profile.duration.is_some(),
        increase = profile.increase_factors.len(),
        decrease = profile.decrease_factors.len(),
        "Classified annotations"
    );
    profile
}

fn fill_once(slot: &mut Option<String>, text: &str) {
    if slot.is_none() {
        *slot = Some(text.to_string());
    }
}

fn push_unique(list: &mut Vec<String>, text: &str) {
    if !list.iter().any(|existing| existing == text) {
        list.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HypoCategory;

    fn raw(text: &str) -> RawAnnotation {
        RawAnnotation::new(text, HypoCategory::Onset)
    }

    #[test]
    fn onset_wins_over_later_keywords() {
        assert_eq!(
            classify_annotation("ONSET is faster and may increase risk"),
            Some(RiskSlot::Onset)
        );
        let profile = classify_annotations(&[raw("Onset may increase with exercise")]);
        assert_eq!(profile.onset.as_deref(), Some("Onset may increase with exercise"));
        assert!(profile.increase_factors.is_empty());
        assert!(profile.decrease_factors.is_empty());
    }

    #[test]
    fn rule_priority_order() {
        assert_eq!(classify_annotation("Peak after 2 h"), Some(RiskSlot::Peak));
        assert_eq!(classify_annotation("peak duration"), Some(RiskSlot::Peak));
        assert_eq!(classify_annotation("Duration of 5 h"), Some(RiskSlot::Duration));
        assert_eq!(classify_annotation("Alcohol enhances the effect"), Some(RiskSlot::IncreaseFactor));
        assert_eq!(classify_annotation("Higher risk when fasting"), Some(RiskSlot::IncreaseFactor));
        assert_eq!(classify_annotation("Corticosteroids reduce the effect"), Some(RiskSlot::DecreaseFactor));
        assert_eq!(classify_annotation("Lower risk after a meal"), Some(RiskSlot::DecreaseFactor));
        assert_eq!(classify_annotation("Store in a refrigerator"), None);
    }

    /// Known heuristic limitation: text with both increase and decrease
    /// keywords is always filed as an increase factor.
    #[test]
    fn increase_keywords_checked_before_decrease() {
        assert_eq!(
            classify_annotation("reduce risk of increase"),
            Some(RiskSlot::IncreaseFactor)
        );
        assert_eq!(
            classify_annotation("Decreased appetite leads to higher risk"),
            Some(RiskSlot::IncreaseFactor)
        );
    }

    #[test]
    fn first_peak_annotation_wins() {
        let profile = classify_annotations(&[
            raw("Peak effect between 1 and 3 hours"),
            raw("Peak effect around 2 hours"),
        ]);
        assert_eq!(profile.peak.as_deref(), Some("Peak effect between 1 and 3 hours"));
    }

    #[test]
    fn duplicate_factors_removed() {
        let profile = classify_annotations(&[
            raw("Increase risk with alcohol"),
            raw("Increase risk with alcohol"),
        ]);
        assert_eq!(profile.increase_factors, vec!["Increase risk with alcohol".to_string()]);
    }

    #[test]
    fn factor_order_preserved() {
        let profile = classify_annotations(&[
            raw("Stress may reduce insulin effect"),
            raw("Exercise can increase risk"),
            raw("Infection may decrease insulin effect"),
            raw("Stress may reduce insulin effect"),
            raw("Skipped meals increase risk"),
        ]);
        assert_eq!(
            profile.increase_factors,
            vec!["Exercise can increase risk", "Skipped meals increase risk"]
        );
        assert_eq!(
            profile.decrease_factors,
            vec!["Stress may reduce insulin effect", "Infection may decrease insulin effect"]
        );
    }

    #[test]
    fn duplicates_compare_exact_text() {
        let profile = classify_annotations(&[
            raw("Increase risk with alcohol"),
            raw("increase risk with alcohol"),
        ]);
        assert_eq!(profile.increase_factors.len(), 2);
    }

    #[test]
    fn noise_dropped_and_empty_input_is_empty_profile() {
        assert!(classify_annotations(&[]).is_empty());
        assert!(classify_annotations(&[raw("Keep out of reach of children")]).is_empty());
    }
}
