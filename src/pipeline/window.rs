use crate::models::{HypoWindow, InsulinTimeProfile, PkClass};

/// Hours after onset before long-acting risk is considered material.
const LONG_ACTING_STABILISATION_HOURS: f64 = 3.0;

/// Hours past the peak that rapid-acting risk is still concentrated.
const RAPID_ACTING_TAIL_HOURS: f64 = 1.0;

/// Approximate period where hypoglycaemia symptoms are most likely.
///
/// - rapid-acting: onset start to one hour past the peak, capped at duration.
/// - long-acting: onset start plus 3 h to the end of action. The start is
///   clamped to the end so short profiles still yield an ordered window.
/// - other: onset start to the end of action.
pub fn estimate_window(profile: &InsulinTimeProfile) -> HypoWindow {
    let onset_start = profile.onset_hours.min;
    let duration_end = profile.duration_hours.max;

    match profile.pk_class {
        PkClass::RapidActing => HypoWindow {
            start: onset_start,
            end: (profile.peak_hours.max + RAPID_ACTING_TAIL_HOURS).min(duration_end),
        },
        PkClass::LongActing => HypoWindow {
            start: (onset_start + LONG_ACTING_STABILISATION_HOURS).min(duration_end),
            end: duration_end,
        },
        PkClass::Other => HypoWindow {
            start: onset_start,
            end: duration_end,
        },
    }
}
