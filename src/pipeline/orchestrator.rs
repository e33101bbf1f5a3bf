use crate::config::{self, LensConfig};
use crate::models::{Bundle, InsulinTimeProfile, Language, LocalizedPanel};
use crate::reference::{builtin_profiles, embedded_profiles, merged_risk_factors};

use super::annotations::{ensure_composition, extract_annotations};
use super::classify::classify_annotations;
use super::dom::{DocumentProvider, MarkupProvider};
use super::language::resolve_language;
use super::matcher::{ensure_has_entries, matches_insulin};
use super::render::render_panel_with_timelines;
use super::LensError;

/// CSS class carried by the injected panel root.
const PANEL_MARKER: &str = "dialens-hypo-card";

/// Result of applying the lens to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensOutcome {
    /// The panel was injected.
    Enhanced { html: String, language: Language },
    /// The document is not an insulin ePI; HTML returned untouched.
    OutOfScope { html: String },
}

impl LensOutcome {
    pub fn into_html(self) -> String {
        match self {
            Self::Enhanced { html, .. } | Self::OutOfScope { html } => html,
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self, Self::Enhanced { .. })
    }
}

/// The hypoglycaemia risk lens.
///
/// Stateless apart from its configuration: every `apply` call is independent.
pub struct HypoLens {
    config: LensConfig,
    provider: Box<dyn DocumentProvider + Send + Sync>,
}

impl Default for HypoLens {
    fn default() -> Self {
        Self::new(LensConfig::default())
    }
}

impl HypoLens {
    pub fn new(config: LensConfig) -> Self {
        Self {
            config,
            provider: Box::new(MarkupProvider),
        }
    }

    /// Replace the default markup provider, e.g. with a real DOM binding.
    pub fn with_provider(mut self, provider: Box<dyn DocumentProvider + Send + Sync>) -> Self {
        self.provider = provider;
        self
    }

    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Apply the lens to a bundle and its rendered HTML.
    ///
    /// Structural problems (no entries, no Composition, broken serialization)
    /// are errors. A document outside the allow-lists is `OutOfScope`.
    pub fn apply(&self, bundle: &Bundle, html: &str) -> Result<LensOutcome, LensError> {
        let _span = tracing::info_span!("dialens_enhance", bundle_id = ?bundle.id).entered();

        ensure_has_entries(bundle)?;
        ensure_composition(bundle)?;

        if !matches_insulin(bundle, &self.config)? {
            tracing::info!("Document is not an insulin ePI, leaving HTML unchanged");
            return Ok(LensOutcome::OutOfScope {
                html: html.to_string(),
            });
        }

        let panel = self.build_panel(bundle)?;
        let language = panel.language;
        let html = self.inject(html, &panel)?;

        tracing::info!(language = %language, "Injected hypoglycaemia risk panel");
        Ok(LensOutcome::Enhanced { html, language })
    }

    /// Classify the bundle's annotations and render the localized panel.
    pub fn build_panel(&self, bundle: &Bundle) -> Result<LocalizedPanel, LensError> {
        let annotations = extract_annotations(bundle)?;
        let mut profile = classify_annotations(&annotations);
        let language = resolve_language(bundle);

        // Windows are derived only when no textual annotation exists.
        let timelines = if annotations.is_empty() {
            self.timeline_profiles(bundle)
        } else {
            vec![]
        };

        // Named profiles supply the factor lists; template defaults stay last.
        let (increase, decrease) = merged_risk_factors(&timelines);
        if profile.increase_factors.is_empty() {
            profile.increase_factors = increase;
        }
        if profile.decrease_factors.is_empty() {
            profile.decrease_factors = decrease;
        }

        Ok(render_panel_with_timelines(&profile, language, &timelines))
    }

    fn timeline_profiles(&self, bundle: &Bundle) -> Vec<InsulinTimeProfile> {
        let embedded = embedded_profiles(bundle);
        if !embedded.is_empty() {
            tracing::debug!(count = embedded.len(), "Using embedded insulin profiles");
            return embedded;
        }
        if self.config.fallback_to_builtin_profiles {
            tracing::debug!("Using built-in insulin profiles");
            return builtin_profiles();
        }
        vec![]
    }

    fn inject(&self, html: &str, panel: &LocalizedPanel) -> Result<String, LensError> {
        let mut document = self.provider.load(html)?;
        document.prepend_to_body(&panel.markup)?;
        let serialized = document.serialize();

        if serialized.trim().is_empty() {
            return Err(LensError::RenderingFailure(
                "document serialized to empty output".into(),
            ));
        }
        if !serialized.contains(PANEL_MARKER) {
            return Err(LensError::RenderingFailure(
                "panel missing from serialized document".into(),
            ));
        }
        Ok(serialized)
    }
}

/// Enhance ePI HTML for a bundle using the default configuration.
pub fn enhance(bundle: &Bundle, html: &str) -> Result<String, LensError> {
    HypoLens::default()
        .apply(bundle, html)
        .map(LensOutcome::into_html)
}

/// Same as [`enhance`], taking the bundle as JSON text.
pub fn enhance_json(epi_json: &str, html: &str) -> Result<String, LensError> {
    let bundle = Bundle::from_json(epi_json)
        .map_err(|e| LensError::InvalidDocument(format!("unparseable bundle: {e}")))?;
    enhance(&bundle, html)
}

/// Lens identity reported to hosts.
pub fn get_specification() -> &'static str {
    config::SPECIFICATION
}
