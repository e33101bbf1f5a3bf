//! Panel markup generation.
//!
//! Annotation text is inserted verbatim, without HTML escaping. The lens
//! trusts its clinical data source to deliver well-formed text.

use crate::models::{InsulinTimeProfile, Language, LocalizedPanel, TimeRiskProfile};
use crate::pipeline::window::estimate_window;

use super::templates::{template_for, PanelTemplate};

/// Minimum bar widths (percent) so short phases stay visible.
const MIN_ONSET_WIDTH_PCT: f64 = 2.0;
const MIN_PEAK_WIDTH_PCT: f64 = 4.0;

/// Panel text after back-filling every unset slot with template defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent<'a> {
    pub onset: &'a str,
    pub peak: &'a str,
    pub duration: &'a str,
    pub increase_factors: Vec<&'a str>,
    pub decrease_factors: Vec<&'a str>,
}

/// Merge classified content with the template defaults, slot by slot.
pub fn panel_content<'a>(profile: &'a TimeRiskProfile, template: &'a PanelTemplate) -> PanelContent<'a> {
    PanelContent {
        onset: profile.onset.as_deref().unwrap_or(template.default_onset),
        peak: profile.peak.as_deref().unwrap_or(template.default_peak),
        duration: profile.duration.as_deref().unwrap_or(template.default_duration),
        increase_factors: factors_or_default(&profile.increase_factors, template.default_increase),
        decrease_factors: factors_or_default(&profile.decrease_factors, template.default_decrease),
    }
}

fn factors_or_default<'a>(factors: &'a [String], defaults: &'a [&'a str]) -> Vec<&'a str> {
    if factors.is_empty() {
        defaults.to_vec()
    } else {
        factors.iter().map(String::as_str).collect()
    }
}

/// Render the risk panel for a classified profile.
pub fn render_panel(profile: &TimeRiskProfile, language: Language) -> LocalizedPanel {
    render_panel_with_timelines(profile, language, &[])
}

/// Render the risk panel, adding one timeline block per named insulin.
pub fn render_panel_with_timelines(
    profile: &TimeRiskProfile,
    language: Language,
    timelines: &[InsulinTimeProfile],
) -> LocalizedPanel {
    let template = template_for(language);
    let content = panel_content(profile, template);

    let timeline_blocks: String = timelines
        .iter()
        .map(|insulin| timeline_block(template, insulin))
        .collect();

    let markup = format!(
        r#"<section class="dialens-hypo-card" lang="{lang}" aria-label="{aria}">{header}<div class="dialens-timeline">{onset}{peak}{duration}</div>{timelines}{increase}{decrease}{symptoms}{emergency}{footer}</section>"#,
        lang = language.as_str(),
        aria = template.aria_label,
        header = header(template),
        onset = row(template.onset_label, content.onset),
        peak = row(template.peak_label, content.peak),
        duration = row(template.duration_label, content.duration),
        timelines = timeline_blocks,
        increase = titled_list(template.increase_title, &content.increase_factors),
        decrease = titled_list(template.decrease_title, &content.decrease_factors),
        symptoms = symptoms(template),
        emergency = titled_list(template.emergency_title, template.emergency_steps),
        footer = footer(template),
    );

    LocalizedPanel { language, markup }
}

fn header(template: &PanelTemplate) -> String {
    format!(
        r#"<div class="dialens-hypo-header"><div><h2 class="dialens-hypo-title">{title}</h2><p class="dialens-hypo-tagline">{intro}</p></div><div class="dialens-pill">DiaLens</div></div>"#,
        title = template.title,
        intro = template.intro,
    )
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="dialens-row"><div class="dialens-row-label">{label}</div><div class="dialens-row-value">{value}</div></div>"#
    )
}

fn titled_list(title: &str, items: &[&str]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!(
        r#"<div class="dialens-hypo-section-title">{title}</div><ul class="dialens-hypo-list">{items}</ul>"#
    )
}

fn symptoms(template: &PanelTemplate) -> String {
    format!(
        r#"<div class="dialens-hypo-section-title">{title}</div><p class="dialens-hypo-risk-text">{text}</p>"#,
        title = template.symptoms_title,
        text = template.symptoms_text,
    )
}

fn footer(template: &PanelTemplate) -> String {
    format!(
        r#"<div class="dialens-hypo-footer">{}</div>"#,
        template.disclaimer
    )
}

fn timeline_block(template: &PanelTemplate, insulin: &InsulinTimeProfile) -> String {
    let window = estimate_window(insulin);

    format!(
        r#"<div class="dialens-timeline" data-insulin-id="{id}"><div class="dialens-insulin-name">{name}</div><div class="dialens-insulin-type">{class}</div>{onset}{peak}{duration}{bar}<p class="dialens-hypo-risk-text">{sentence}</p></div>"#,
        id = insulin.id,
        name = insulin.name,
        class = template.class_label(insulin.pk_class),
        onset = row(template.onset_label, &insulin.onset_hours.to_string()),
        peak = row(template.peak_label, &insulin.peak_hours.to_string()),
        duration = row(template.duration_label, &insulin.duration_hours.to_string()),
        bar = timeline_bar(insulin),
        sentence = template.describe_window(&window),
    )
}

/// Proportional onset/peak bar across the full duration of action.
fn timeline_bar(insulin: &InsulinTimeProfile) -> String {
    let total = insulin.duration_hours.max;
    if total <= 0.0 {
        return String::new();
    }
    let pct = |hours: f64| hours / total * 100.0;

    let onset_left = pct(insulin.onset_hours.min);
    let onset_width = (pct(insulin.onset_hours.max) - onset_left).max(MIN_ONSET_WIDTH_PCT);
    let peak_left = pct(insulin.peak_hours.min);
    let peak_width = (pct(insulin.peak_hours.max) - peak_left).max(MIN_PEAK_WIDTH_PCT);

    format!(
        r#"<div class="dialens-mini-bar"><div class="dialens-mini-bar-onset" style="left: {onset_left:.1}%; width: {onset_width:.1}%"></div><div class="dialens-mini-bar-peak" style="left: {peak_left:.1}%; width: {peak_width:.1}%"></div><div class="dialens-mini-bar-duration"></div></div><div class="dialens-mini-bar-x"><span>0 h</span><span>{total} h</span></div>"#
    )
}
