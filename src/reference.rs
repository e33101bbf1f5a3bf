//! Insulin time-action reference data.
//!
//! Times are indicative ranges in hours and never replace the SmPC or the
//! package leaflet.

use crate::models::{Bundle, HoursRange, InsulinTimeProfile, PkClass};

/// Caps on the factor lists merged from named profiles.
pub const MAX_PROFILE_INCREASE_FACTORS: usize = 6;
pub const MAX_PROFILE_DECREASE_FACTORS: usize = 5;

/// Built-in catalogue of insulin profiles.
pub fn builtin_profiles() -> Vec<InsulinTimeProfile> {
    vec![
        InsulinTimeProfile {
            id: "humalog".into(),
            name: "Humalog (insulin lispro)".into(),
            pk_class: PkClass::RapidActing,
            onset_hours: HoursRange::new(0.25, 0.5),
            peak_hours: HoursRange::new(1.0, 3.0),
            duration_hours: HoursRange::new(3.0, 5.0),
            increased_hypo_risk_factors: strings(&[
                "Skipping or delaying a meal after the injection",
                "Unexpected or intense physical activity",
                "Higher dose than prescribed or dosing errors",
                "Alcohol intake (especially on an empty stomach)",
                "Kidney or liver problems",
            ]),
            reduced_insulin_effect_factors: strings(&[
                "Infection, fever or acute illness",
                "Stress or corticosteroid medicines",
                "Taking less insulin than prescribed",
                "Very high carbohydrate intake without dose adjustment",
            ]),
        },
        InsulinTimeProfile {
            id: "levemir".into(),
            name: "Levemir (insulin detemir)".into(),
            pk_class: PkClass::LongActing,
            onset_hours: HoursRange::new(1.0, 2.0),
            peak_hours: HoursRange::new(6.0, 8.0),
            duration_hours: HoursRange::new(18.0, 24.0),
            increased_hypo_risk_factors: strings(&[
                "Tight dose titration without monitoring",
                "Additional rapid-acting insulin on top of basal dose",
                "Reduced food intake or prolonged fasting",
                "Unexpected physical activity, especially at night",
                "Kidney or liver impairment",
            ]),
            reduced_insulin_effect_factors: strings(&[
                "Missed or very delayed basal dose",
                "Infection, fever or other intercurrent illness",
                "Some concomitant medicines that raise blood glucose",
                "Very high carbohydrate intake without correction",
            ]),
        },
    ]
}

/// Look up a built-in profile by id (case-insensitive).
pub fn builtin_profile(id: &str) -> Option<InsulinTimeProfile> {
    builtin_profiles()
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Insulin profiles pre-computed into the bundle, if any.
///
/// Entries that fail to deserialize or violate range ordering are dropped.
pub fn embedded_profiles(bundle: &Bundle) -> Vec<InsulinTimeProfile> {
    let Some(raw) = bundle.insulin_profiles.as_deref() else {
        return vec![];
    };

    raw.iter()
        .filter_map(|value| {
            let profile: InsulinTimeProfile = match serde_json::from_value(value.clone()) {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed embedded insulin profile");
                    return None;
                }
            };
            match profile.validate() {
                Ok(()) => Some(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping inconsistent embedded insulin profile");
                    None
                }
            }
        })
        .collect()
}

/// Increase and decrease factors across `profiles`, deduplicated in order
/// of first appearance and capped.
pub fn merged_risk_factors(profiles: &[InsulinTimeProfile]) -> (Vec<String>, Vec<String>) {
    let increase = distinct_capped(
        profiles.iter().flat_map(|p| &p.increased_hypo_risk_factors),
        MAX_PROFILE_INCREASE_FACTORS,
    );
    let decrease = distinct_capped(
        profiles.iter().flat_map(|p| &p.reduced_insulin_effect_factors),
        MAX_PROFILE_DECREASE_FACTORS,
    );
    (increase, decrease)
}

fn distinct_capped<'a>(items: impl Iterator<Item = &'a String>, cap: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for item in items {
        if merged.len() == cap {
            break;
        }
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
