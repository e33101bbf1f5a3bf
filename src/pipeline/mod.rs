pub mod matcher;
pub mod language;
pub mod annotations;
pub mod classify;
pub mod window;
pub mod render;
pub mod dom;
pub mod orchestrator;

pub use matcher::*;
pub use language::*;
pub use annotations::*;
pub use classify::*;
pub use window::*;
pub use render::*;
pub use dom::*;
pub use orchestrator::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error("Invalid ePI document: {0}")]
    InvalidDocument(String),

    #[error("ePI document has no Composition resource")]
    NoCompositionFound,

    #[error("HTML rendering failed: {0}")]
    RenderingFailure(String),

    #[error("Failed to read lens configuration {path}: {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("Invalid lens configuration: {0}")]
    ConfigParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
