pub mod bundle;
pub mod enums;
pub mod profile;

pub use bundle::*;
pub use enums::*;
pub use profile::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid insulin profile {id}: {reason}")]
    InvalidProfile { id: String, reason: String },
}
