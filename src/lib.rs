pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RosterConfig;

pub use crate::core::{roster::RosterEngine, simulate::simulate_student};
pub use crate::domain::model::{Student, StudentSummary, DEFAULT_FAVORITE_NUMBERS};
pub use crate::domain::ports::{OutputFormat, RosterProvider};
pub use crate::utils::error::{Result, StudentError};
