pub mod panel;
pub mod templates;

pub use panel::*;
pub use templates::{template_for, PanelTemplate};
