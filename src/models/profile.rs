use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::{HypoCategory, Language, PkClass};
use super::ModelError;

/// Closed interval in hours, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct HoursRange {
    pub min: f64,
    pub max: f64,
}

impl HoursRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

impl From<[f64; 2]> for HoursRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<HoursRange> for [f64; 2] {
    fn from(range: HoursRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for HoursRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} h", self.min)
        } else {
            write!(f, "{}–{} h", self.min, self.max)
        }
    }
}

/// Time-action profile of one insulin product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsulinTimeProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pk_class: PkClass,
    pub onset_hours: HoursRange,
    pub peak_hours: HoursRange,
    pub duration_hours: HoursRange,
    #[serde(default)]
    pub increased_hypo_risk_factors: Vec<String>,
    #[serde(default)]
    pub reduced_insulin_effect_factors: Vec<String>,
}

impl InsulinTimeProfile {
    /// Check range ordering: every range is non-negative with min ≤ max, and
    /// duration.max ≥ peak.max ≥ onset.min.
    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |reason: &str| ModelError::InvalidProfile {
            id: self.id.clone(),
            reason: reason.into(),
        };

        for (label, range) in [
            ("onset", &self.onset_hours),
            ("peak", &self.peak_hours),
            ("duration", &self.duration_hours),
        ] {
            if !range.is_valid() {
                return Err(invalid(&format!("{label} range {range:?} out of order")));
            }
        }
        if self.peak_hours.max < self.onset_hours.min {
            return Err(invalid("peak ends before onset starts"));
        }
        if self.duration_hours.max < self.peak_hours.max {
            return Err(invalid("duration ends before peak"));
        }
        Ok(())
    }
}

/// Approximate period in hours after a dose where hypoglycaemia is most likely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypoWindow {
    pub start: f64,
    pub end: f64,
}

/// Free-text annotation recovered from the composition extension tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    pub text: String,
    /// Category code that accompanied the text in the source document.
    pub category: HypoCategory,
}

impl RawAnnotation {
    pub fn new(text: impl Into<String>, category: HypoCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Classified annotation content for one document. Unset slots fall back
/// to localized defaults when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRiskProfile {
    pub onset: Option<String>,
    pub peak: Option<String>,
    pub duration: Option<String>,
    pub increase_factors: Vec<String>,
    pub decrease_factors: Vec<String>,
}

impl TimeRiskProfile {
    pub fn is_empty(&self) -> bool {
        self.onset.is_none()
            && self.peak.is_none()
            && self.duration.is_none()
            && self.increase_factors.is_empty()
            && self.decrease_factors.is_empty()
    }
}

/// Rendered panel markup and the language of the template used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPanel {
    pub language: Language,
    pub markup: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn humalog_like() -> InsulinTimeProfile {
        InsulinTimeProfile {
            id: "humalog".into(),
            name: "Humalog (insulin lispro)".into(),
            pk_class: PkClass::RapidActing,
            onset_hours: HoursRange::new(0.25, 0.5),
            peak_hours: HoursRange::new(1.0, 3.0),
            duration_hours: HoursRange::new(3.0, 5.0),
            increased_hypo_risk_factors: vec![],
            reduced_insulin_effect_factors: vec![],
        }
    }

    #[test]
    fn hours_range_display() {
        assert_eq!(HoursRange::new(0.25, 0.5).to_string(), "0.25–0.5 h");
        assert_eq!(HoursRange::new(1.0, 3.0).to_string(), "1–3 h");
        assert_eq!(HoursRange::new(24.0, 24.0).to_string(), "24 h");
    }

    #[test]
    fn profile_deserializes_from_camel_case() {
        let profile: InsulinTimeProfile = serde_json::from_value(json!({
            "id": "levemir",
            "name": "Levemir (insulin detemir)",
            "type": "long-acting",
            "onsetHours": [1, 2],
            "peakHours": [6, 8],
            "durationHours": [18, 24],
            "increasedHypoRiskFactors": ["Reduced food intake or prolonged fasting"]
        }))
        .unwrap();

        assert_eq!(profile.pk_class, PkClass::LongActing);
        assert_eq!(profile.duration_hours, HoursRange::new(18.0, 24.0));
        assert_eq!(profile.increased_hypo_risk_factors.len(), 1);
        assert!(profile.reduced_insulin_effect_factors.is_empty());
    }

    #[test]
    fn valid_profile_passes() {
        assert!(humalog_like().validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let mut profile = humalog_like();
        profile.peak_hours = HoursRange::new(3.0, 1.0);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("peak"), "{err}");
    }

    #[test]
    fn negative_onset_rejected() {
        let mut profile = humalog_like();
        profile.onset_hours = HoursRange::new(-1.0, 0.5);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn duration_shorter_than_peak_rejected() {
        let mut profile = humalog_like();
        profile.duration_hours = HoursRange::new(1.0, 2.0);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("duration ends before peak"));
    }

    #[test]
    fn empty_time_risk_profile() {
        let mut profile = TimeRiskProfile::default();
        assert!(profile.is_empty());
        profile.decrease_factors.push("Stress".into());
        assert!(!profile.is_empty());
    }
}
