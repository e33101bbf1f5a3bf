//! DiaLens: hypoglycaemia risk lens for insulin ePI documents.
//!
//! Given a structured ePI bundle and its rendered HTML, the lens decides
//! whether the document describes an insulin product and, if so, injects a
//! localized risk-education panel at the top of the body.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod reference;

pub use config::LensConfig;
pub use pipeline::{enhance, enhance_json, get_specification, HypoLens, LensError, LensOutcome};

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber for hosts that have none.
///
/// `RUST_LOG` overrides the default filter. Calling this more than once, or
/// after the host installed its own subscriber, is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} lens v{} ready", config::APP_NAME, config::APP_VERSION);
    }
}
