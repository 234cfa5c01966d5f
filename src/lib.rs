#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{validate_email, validate_optional, validate_value, EmailAddress};
pub use crate::utils::error::{EmailError, Result};
